use actix_web::web;

use crate::handlers::admin::{
    match_handler, news_handler, player_handler, referee_handler, team_handler,
    tournament_handler, user_handler,
};
use crate::middleware::admin::AdminMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // User management routes
            .service(
                web::resource("/users")
                    .route(web::get().to(user_handler::get_users))
            )
            .service(
                web::resource("/users/{id}/status")
                    .route(web::patch().to(user_handler::update_user_status))
            )

            // Team management routes
            .service(
                web::resource("/teams")
                    .route(web::get().to(team_handler::get_teams))
                    .route(web::post().to(team_handler::create_team))
            )
            .service(
                web::resource("/teams/{id}")
                    .route(web::get().to(team_handler::get_team_by_id))
                    .route(web::patch().to(team_handler::update_team))
                    .route(web::delete().to(team_handler::delete_team))
            )

            // Player management routes
            .service(
                web::resource("/players")
                    .route(web::post().to(player_handler::create_player))
            )
            .service(
                web::resource("/players/{id}")
                    .route(web::patch().to(player_handler::update_player))
                    .route(web::delete().to(player_handler::delete_player))
            )

            // Referee management routes
            .service(
                web::resource("/referees")
                    .route(web::get().to(referee_handler::get_referees))
                    .route(web::post().to(referee_handler::create_referee))
            )
            .service(
                web::resource("/referees/{id}")
                    .route(web::patch().to(referee_handler::update_referee))
                    .route(web::delete().to(referee_handler::delete_referee))
            )

            // News management routes
            .service(
                web::resource("/news")
                    .route(web::get().to(news_handler::get_articles))
                    .route(web::post().to(news_handler::create_article))
            )
            .service(
                web::resource("/news/{id}")
                    .route(web::patch().to(news_handler::update_article))
                    .route(web::delete().to(news_handler::delete_article))
            )

            // Tournament management routes
            .service(
                web::resource("/tournaments")
                    .route(web::post().to(tournament_handler::create_tournament))
            )
            .service(
                web::resource("/tournaments/{id}")
                    .route(web::patch().to(tournament_handler::update_tournament))
            )
            .service(
                web::resource("/tournaments/{id}/teams")
                    .route(web::post().to(tournament_handler::register_team))
            )
            .service(
                web::resource("/tournaments/{tournament_id}/teams/{team_id}")
                    .route(web::delete().to(tournament_handler::remove_team))
            )

            // Match management routes
            .service(
                web::resource("/matches")
                    .route(web::post().to(match_handler::create_match))
            )
            .service(
                web::resource("/matches/{id}/result")
                    .route(web::put().to(match_handler::record_match_result))
            )
    );
}
