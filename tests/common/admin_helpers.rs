use reqwest::Client;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::utils::{
    make_authenticated_request, parse_user_id_from_jwt_token, UserRegLoginResponse,
};

/// Helper function to create an admin user and get auth token
pub async fn create_admin_user_and_login(app_address: &str, pool: &PgPool) -> UserRegLoginResponse {
    let client = Client::new();
    let username = format!("adminuser{}", Uuid::new_v4());
    let password = "password123";
    let email = format!("{}@example.com", username);

    // Register user
    let user_request = json!({
        "username": username,
        "password": password,
        "email": email
    });

    let register_response = client
        .post(&format!("{}/register_user", app_address))
        .json(&user_request)
        .send()
        .await
        .expect("Failed to register user");

    assert_eq!(200, register_response.status().as_u16());

    // Promote user to admin role using direct database access
    sqlx::query("UPDATE users SET role = 'admin' WHERE username = $1")
        .bind(&username)
        .execute(pool)
        .await
        .expect("Failed to promote user to admin");

    // Login and get token
    let login_request = json!({
        "username": username,
        "password": password
    });

    let login_response = client
        .post(&format!("{}/login", app_address))
        .json(&login_request)
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(200, login_response.status().as_u16());

    let login_body: serde_json::Value = login_response
        .json()
        .await
        .expect("Failed to parse login response");

    let token = login_body["token"].as_str().unwrap().to_string();
    let user_id = parse_user_id_from_jwt_token(&token);

    UserRegLoginResponse {
        token,
        user_id,
        username,
    }
}

/// Helper function to create teams for testing
pub async fn create_teams_for_test(app_address: &str, token: &str, count: usize) -> Vec<String> {
    let client = Client::new();
    let mut team_ids = Vec::new();

    for i in 0..count {
        let team_request = json!({
            "name": format!("Test Team {} {}", i + 1, &Uuid::new_v4().to_string()[..8]),
            "short_name": format!("TT{}", i + 1),
            "crest_color": format!("#{:06X}", (i * 0x111111) % 0xFFFFFF)
        });

        let response = make_authenticated_request(
            &client,
            reqwest::Method::POST,
            &format!("{}/admin/teams", app_address),
            token,
            Some(team_request),
        )
        .await;

        assert_eq!(201, response.status().as_u16());
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let team_id = body["data"]["id"]
            .as_str()
            .expect("Team ID not found")
            .to_string();
        team_ids.push(team_id);
    }

    team_ids
}

/// Helper function to create a tournament with the given teams registered
pub async fn create_tournament_with_teams(
    app_address: &str,
    token: &str,
    team_ids: &[String],
) -> String {
    let client = Client::new();

    let tournament_request = json!({
        "name": format!("Test Tournament {}", &Uuid::new_v4().to_string()[..8]),
        "season": "2026",
        "start_date": "2026-08-01T00:00:00Z",
        "end_date": "2027-05-31T00:00:00Z"
    });

    let tournament_response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/tournaments", app_address),
        token,
        Some(tournament_request),
    )
    .await;

    assert_eq!(201, tournament_response.status().as_u16(), "Failed to create tournament");
    let tournament_data: serde_json::Value = tournament_response
        .json()
        .await
        .expect("Failed to parse tournament response");
    let tournament_id = tournament_data["data"]["id"]
        .as_str()
        .expect("Tournament ID not found")
        .to_string();

    for team_id in team_ids {
        let response = make_authenticated_request(
            &client,
            reqwest::Method::POST,
            &format!("{}/admin/tournaments/{}/teams", app_address, tournament_id),
            token,
            Some(json!({ "team_id": team_id })),
        )
        .await;
        assert_eq!(201, response.status().as_u16(), "Failed to register team");
    }

    tournament_id
}

/// Helper function to create a fixture and return its ID
pub async fn create_fixture(
    app_address: &str,
    token: &str,
    tournament_id: &str,
    home_team_id: &str,
    away_team_id: &str,
    matchday: i32,
) -> String {
    let client = Client::new();

    // Later matchdays kick off later so result ordering is deterministic
    let match_request = json!({
        "tournament_id": tournament_id,
        "home_team_id": home_team_id,
        "away_team_id": away_team_id,
        "kickoff_time": format!("2026-09-{:02}T18:00:00Z", matchday),
        "matchday": matchday
    });

    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/matches", app_address),
        token,
        Some(match_request),
    )
    .await;

    assert_eq!(201, response.status().as_u16(), "Failed to create fixture");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"]
        .as_str()
        .expect("Match ID not found")
        .to_string()
}
