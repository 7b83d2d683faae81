//! app.rs
use crate::handlers::{call_log_handler, campaign_handler, command_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/campaigns")
                    .route(
                        "",
                        web::post().to(campaign_handler::start_campaign_endpoint),
                    )
                    .route(
                        "/status",
                        web::get().to(campaign_handler::campaign_status_endpoint),
                    ),
            )
            .service(
                web::scope("/commands")
                    .route("/call", web::post().to(command_handler::command_call_endpoint)),
            )
            .service(
                web::scope("/calls")
                    .route("/logs", web::get().to(call_log_handler::call_logs_endpoint)),
            ),
    );
}
