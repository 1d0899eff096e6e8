use reqwest::Client;
use serde_json::json;

mod common;
use common::admin_helpers::create_admin_user_and_login;
use common::utils::{create_test_user_and_login, make_authenticated_request, spawn_app};

#[tokio::test]
async fn only_published_articles_are_publicly_visible() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    // One draft, one published article
    let draft_response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/news", &test_app.address),
        &admin.token,
        Some(json!({
            "title": "Unfinished transfer rumor",
            "body": "Draft body",
            "published": false
        })),
    )
    .await;
    assert_eq!(201, draft_response.status().as_u16());

    let published_response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/news", &test_app.address),
        &admin.token,
        Some(json!({
            "title": "Season kickoff announced",
            "body": "The new season starts in September.",
            "published": true
        })),
    )
    .await;
    assert_eq!(201, published_response.status().as_u16());
    let published_body: serde_json::Value =
        published_response.json().await.expect("Failed to parse response");
    assert!(published_body["data"]["published_at"].as_str().is_some());

    // Public listing shows only the published one
    let user = create_test_user_and_login(&test_app.address).await;
    let list_response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/league/news", &test_app.address),
        &user.token,
        None,
    )
    .await;

    assert_eq!(200, list_response.status().as_u16());
    let list_body: serde_json::Value = list_response.json().await.expect("Failed to parse response");
    let articles = list_body["data"].as_array().expect("No data array");
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], "Season kickoff announced");
    assert_eq!(articles[0]["author_username"], admin.username);
}

#[tokio::test]
async fn publishing_a_draft_stamps_published_at() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    let create_response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/news", &test_app.address),
        &admin.token,
        Some(json!({
            "title": "Matchday preview",
            "body": "Who will take the lead this weekend?"
        })),
    )
    .await;
    assert_eq!(201, create_response.status().as_u16());
    let body: serde_json::Value = create_response.json().await.expect("Failed to parse response");
    let article_id = body["data"]["id"].as_str().expect("Article ID not found").to_string();
    assert!(body["data"]["published_at"].is_null());

    let publish_response = make_authenticated_request(
        &client,
        reqwest::Method::PATCH,
        &format!("{}/admin/news/{}", &test_app.address, article_id),
        &admin.token,
        Some(json!({ "published": true })),
    )
    .await;

    assert_eq!(200, publish_response.status().as_u16());
    let publish_body: serde_json::Value =
        publish_response.json().await.expect("Failed to parse response");
    assert_eq!(publish_body["data"]["published"], true);
    assert!(publish_body["data"]["published_at"].as_str().is_some());
}

#[tokio::test]
async fn article_without_a_title_is_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/news", &test_app.address),
        &admin.token,
        Some(json!({
            "title": "   ",
            "body": "Body without a headline"
        })),
    )
    .await;

    assert_eq!(400, response.status().as_u16());
}
