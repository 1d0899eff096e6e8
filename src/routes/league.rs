// src/routes/league.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::{
    match_handler, news_handler, player_handler, standings_handler, team_handler,
    tournament_handler,
};
use crate::models::common::PaginationQuery;
use crate::models::matches::{RecentResultsQuery, UpcomingMatchesQuery};
use crate::models::player::PlayerQueryParams;

/// Get the active tournament
#[get("/tournaments/active")]
async fn get_active_tournament(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    tournament_handler::get_active_tournament(pool).await
}

/// Get all tournaments (with pagination)
#[get("/tournaments")]
async fn get_all_tournaments(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    tournament_handler::get_all_tournaments(query, pool).await
}

/// Get specific tournament by ID
#[get("/tournaments/{tournament_id}")]
async fn get_tournament(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    tournament_handler::get_tournament(tournament_id, pool).await
}

/// Get teams registered in a tournament
#[get("/tournaments/{tournament_id}/teams")]
async fn get_tournament_teams(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    tournament_handler::get_tournament_teams(tournament_id, pool).await
}

/// Get tournament standings
#[get("/tournaments/{tournament_id}/standings")]
async fn get_tournament_standings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    standings_handler::get_tournament_standings(tournament_id, pool).await
}

/// Get fixtures for a specific matchday
#[get("/tournaments/{tournament_id}/matchdays/{matchday}")]
async fn get_matchday(
    path: web::Path<(Uuid, i32)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tournament_id, matchday) = path.into_inner();
    match_handler::get_matchday(tournament_id, matchday, pool).await
}

/// Get upcoming fixtures
#[get("/matches/upcoming")]
async fn get_upcoming_matches(
    query: web::Query<UpcomingMatchesQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::get_upcoming_matches(query, pool).await
}

/// Get recent results
#[get("/matches/results")]
async fn get_recent_results(
    query: web::Query<RecentResultsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::get_recent_results(query, pool).await
}

/// Get a single match
#[get("/matches/{match_id}")]
async fn get_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, pool).await
}

/// Get all teams
#[get("/teams")]
async fn get_all_teams(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    team_handler::get_all_teams(query, pool).await
}

/// Get team information
#[get("/teams/{team_id}")]
async fn get_team(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    team_handler::get_team(team_id, pool).await
}

/// Get a team's roster
#[get("/teams/{team_id}/roster")]
async fn get_team_roster(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    team_handler::get_team_roster(team_id, pool).await
}

/// Get a team's match history with classified outcomes
#[get("/teams/{team_id}/matches")]
async fn get_team_matches(
    path: web::Path<Uuid>,
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    match_handler::get_team_match_history(team_id, query.limit, pool).await
}

/// Get players with optional filters
#[get("/players")]
async fn get_players(
    query: web::Query<PlayerQueryParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    player_handler::get_players(query, pool).await
}

/// Get a player profile
#[get("/players/{player_id}")]
async fn get_player_profile(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    player_handler::get_player_profile(player_id, pool).await
}

/// Get published news articles
#[get("/news")]
async fn get_news(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    news_handler::get_published_articles(query, pool).await
}

/// Get a single news article
#[get("/news/{article_id}")]
async fn get_news_article(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let article_id = path.into_inner();
    news_handler::get_article(article_id, pool).await
}
