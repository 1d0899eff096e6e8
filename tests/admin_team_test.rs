use reqwest::Client;
use serde_json::json;

mod common;
use common::admin_helpers::{create_admin_user_and_login, create_teams_for_test};
use common::utils::{create_test_user_and_login, make_authenticated_request, spawn_app};

#[tokio::test]
async fn admin_can_manage_teams() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    // Create
    let create_response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/teams", &test_app.address),
        &admin.token,
        Some(json!({
            "name": "Deportivo Riachuelo",
            "short_name": "DRI",
            "crest_color": "#FF6B35",
            "home_city": "Riachuelo"
        })),
    )
    .await;

    assert_eq!(201, create_response.status().as_u16());
    let body: serde_json::Value = create_response.json().await.expect("Failed to parse response");
    let team_id = body["data"]["id"].as_str().expect("Team ID not found").to_string();

    // Update
    let update_response = make_authenticated_request(
        &client,
        reqwest::Method::PATCH,
        &format!("{}/admin/teams/{}", &test_app.address, team_id),
        &admin.token,
        Some(json!({
            "coach_name": "Marta Quiroga",
            "crest_color": "#00FF00"
        })),
    )
    .await;

    assert_eq!(200, update_response.status().as_u16());

    let row: (String, Option<String>) =
        sqlx::query_as("SELECT crest_color, coach_name FROM teams WHERE id = $1::uuid")
            .bind(&team_id)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch updated team");
    assert_eq!(row.0, "#00FF00");
    assert_eq!(row.1.as_deref(), Some("Marta Quiroga"));

    // Search listing
    let list_response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/admin/teams?search=Riachuelo", &test_app.address),
        &admin.token,
        None,
    )
    .await;

    assert_eq!(200, list_response.status().as_u16());
    let list_body: serde_json::Value = list_response.json().await.expect("Failed to parse response");
    assert_eq!(list_body["pagination"]["total"], 1);

    // Delete
    let delete_response = make_authenticated_request(
        &client,
        reqwest::Method::DELETE,
        &format!("{}/admin/teams/{}", &test_app.address, team_id),
        &admin.token,
        None,
    )
    .await;

    assert_eq!(200, delete_response.status().as_u16());
}

#[tokio::test]
async fn invalid_crest_color_is_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/teams", &test_app.address),
        &admin.token,
        Some(json!({
            "name": "Bad Color FC",
            "short_name": "BAD",
            "crest_color": "green"
        })),
    )
    .await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn regular_users_cannot_access_admin_routes() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&test_app.address).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/teams", &test_app.address),
        &user.token,
        Some(json!({
            "name": "Should Not Exist",
            "short_name": "NOP"
        })),
    )
    .await;

    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn created_teams_are_visible_on_the_public_listing() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;
    let team_ids = create_teams_for_test(&test_app.address, &admin.token, 3).await;

    let user = create_test_user_and_login(&test_app.address).await;
    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/league/teams", &test_app.address),
        &user.token,
        None,
    )
    .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), team_ids.len());
}
