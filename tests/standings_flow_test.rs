use reqwest::Client;
use serde_json::json;

mod common;
use common::admin_helpers::{
    create_admin_user_and_login, create_fixture, create_teams_for_test,
    create_tournament_with_teams,
};
use common::utils::make_authenticated_request;
use common::utils::spawn_app;

#[tokio::test]
async fn recording_results_updates_the_standings_table() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    let team_ids = create_teams_for_test(&test_app.address, &admin.token, 3).await;
    let (team_a, team_b, team_c) = (&team_ids[0], &team_ids[1], &team_ids[2]);
    let tournament_id =
        create_tournament_with_teams(&test_app.address, &admin.token, &team_ids).await;

    let match_ab = create_fixture(&test_app.address, &admin.token, &tournament_id, team_a, team_b, 1).await;
    let match_ca = create_fixture(&test_app.address, &admin.token, &tournament_id, team_c, team_a, 2).await;
    let match_bc = create_fixture(&test_app.address, &admin.token, &tournament_id, team_b, team_c, 3).await;

    for (match_id, home_score, away_score) in [
        (&match_ab, 3, 1), // A beats B
        (&match_ca, 1, 1), // C draws A
        (&match_bc, 5, 0), // B thrashes C
    ] {
        let response = make_authenticated_request(
            &client,
            reqwest::Method::PUT,
            &format!("{}/admin/matches/{}/result", &test_app.address, match_id),
            &admin.token,
            Some(json!({ "home_score": home_score, "away_score": away_score })),
        )
        .await;
        assert_eq!(200, response.status().as_u16(), "Failed to record result");
    }

    // A: W+D = 4 points, gd +2; B: W+L = 3 points, gd +2; C: D+L = 1 point, gd -4
    let standings_response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/league/tournaments/{}/standings", &test_app.address, tournament_id),
        &admin.token,
        None,
    )
    .await;

    assert_eq!(200, standings_response.status().as_u16());
    let body: serde_json::Value = standings_response.json().await.expect("Failed to parse response");
    let standings = body["data"]["standings"].as_array().expect("No standings array");
    assert_eq!(standings.len(), 3);

    assert_eq!(standings[0]["standing"]["team_id"].as_str().unwrap(), team_a.as_str());
    assert_eq!(standings[0]["standing"]["points"], 4);
    assert_eq!(standings[0]["standing"]["position"], 1);
    assert_eq!(standings[0]["goal_difference"], 2);

    assert_eq!(standings[1]["standing"]["team_id"].as_str().unwrap(), team_b.as_str());
    assert_eq!(standings[1]["standing"]["points"], 3);
    assert_eq!(standings[1]["standing"]["position"], 2);

    assert_eq!(standings[2]["standing"]["team_id"].as_str().unwrap(), team_c.as_str());
    assert_eq!(standings[2]["standing"]["points"], 1);
    assert_eq!(standings[2]["goal_difference"], -4);

    // Form strings are most recent first
    assert_eq!(standings[0]["recent_form"], json!(["D", "W"]));
    assert_eq!(standings[1]["recent_form"], json!(["W", "L"]));
    assert_eq!(standings[2]["recent_form"], json!(["L", "D"]));
}

#[tokio::test]
async fn match_history_is_classified_from_the_team_perspective() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    let team_ids = create_teams_for_test(&test_app.address, &admin.token, 2).await;
    let (team_a, team_b) = (&team_ids[0], &team_ids[1]);
    let tournament_id =
        create_tournament_with_teams(&test_app.address, &admin.token, &team_ids).await;

    let match_id = create_fixture(&test_app.address, &admin.token, &tournament_id, team_a, team_b, 1).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &format!("{}/admin/matches/{}/result", &test_app.address, match_id),
        &admin.token,
        Some(json!({ "home_score": 2, "away_score": 1 })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    // Home team sees a win
    let history_a = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/league/teams/{}/matches", &test_app.address, team_a),
        &admin.token,
        None,
    )
    .await;
    let body_a: serde_json::Value = history_a.json().await.expect("Failed to parse response");
    let record_a = &body_a["data"][0];
    assert_eq!(record_a["outcome"]["result"], "win");
    assert_eq!(record_a["outcome"]["perspective_score"], 2);
    assert_eq!(record_a["category"], "positive");
    assert_eq!(record_a["was_home"], true);

    // Away team sees a loss
    let history_b = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/league/teams/{}/matches", &test_app.address, team_b),
        &admin.token,
        None,
    )
    .await;
    let body_b: serde_json::Value = history_b.json().await.expect("Failed to parse response");
    let record_b = &body_b["data"][0];
    assert_eq!(record_b["outcome"]["result"], "loss");
    assert_eq!(record_b["outcome"]["perspective_score"], 1);
    assert_eq!(record_b["category"], "negative");
    assert_eq!(record_b["opponent_id"].as_str().unwrap(), team_a.as_str());
    assert_eq!(record_a["opponent_id"].as_str().unwrap(), team_b.as_str());
}

#[tokio::test]
async fn a_result_can_only_be_recorded_once() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    let team_ids = create_teams_for_test(&test_app.address, &admin.token, 2).await;
    let tournament_id =
        create_tournament_with_teams(&test_app.address, &admin.token, &team_ids).await;
    let match_id = create_fixture(
        &test_app.address,
        &admin.token,
        &tournament_id,
        &team_ids[0],
        &team_ids[1],
        1,
    )
    .await;

    let first = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &format!("{}/admin/matches/{}/result", &test_app.address, match_id),
        &admin.token,
        Some(json!({ "home_score": 1, "away_score": 0 })),
    )
    .await;
    assert_eq!(200, first.status().as_u16());

    let second = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &format!("{}/admin/matches/{}/result", &test_app.address, match_id),
        &admin.token,
        Some(json!({ "home_score": 2, "away_score": 2 })),
    )
    .await;
    assert_eq!(409, second.status().as_u16());
}

#[tokio::test]
async fn negative_scores_are_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    let team_ids = create_teams_for_test(&test_app.address, &admin.token, 2).await;
    let tournament_id =
        create_tournament_with_teams(&test_app.address, &admin.token, &team_ids).await;
    let match_id = create_fixture(
        &test_app.address,
        &admin.token,
        &tournament_id,
        &team_ids[0],
        &team_ids[1],
        1,
    )
    .await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &format!("{}/admin/matches/{}/result", &test_app.address, match_id),
        &admin.token,
        Some(json!({ "home_score": -1, "away_score": 0 })),
    )
    .await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn unplayed_fixtures_appear_as_upcoming() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app.address, &test_app.db_pool).await;

    let team_ids = create_teams_for_test(&test_app.address, &admin.token, 2).await;
    let tournament_id =
        create_tournament_with_teams(&test_app.address, &admin.token, &team_ids).await;
    create_fixture(
        &test_app.address,
        &admin.token,
        &tournament_id,
        &team_ids[0],
        &team_ids[1],
        1,
    )
    .await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!(
            "{}/league/matches/upcoming?tournament_id={}",
            &test_app.address, tournament_id
        ),
        &admin.token,
        None,
    )
    .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["data"][0]["status"], "scheduled");
    assert_eq!(body["data"][0]["home_score"], json!(null));
}
