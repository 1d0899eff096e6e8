use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod league;
pub mod registration;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // League routes (require authentication)
    cfg.service(
        web::scope("/league")
            .wrap(AuthMiddleware)
            .service(league::get_active_tournament)
            .service(league::get_all_tournaments)
            .service(league::get_tournament)
            .service(league::get_tournament_teams)
            .service(league::get_tournament_standings)
            .service(league::get_matchday)
            .service(league::get_upcoming_matches)
            .service(league::get_recent_results)
            .service(league::get_match)
            .service(league::get_all_teams)
            .service(league::get_team)
            .service(league::get_team_roster)
            .service(league::get_team_matches)
            .service(league::get_players)
            .service(league::get_player_profile)
            .service(league::get_news)
            .service(league::get_news_article),
    );

    // Admin routes (require admin privileges)
    admin::init_admin_routes(cfg);
}
