// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Browser page
    cfg.route("/", web::get().to(handlers::index::index))
        .route("/static/script.js", web::get().to(handlers::index::script));

    // Strength evaluation
    cfg.route("/check", web::post().to(handlers::check::check_password));

    // Password generator
    cfg.route("/generate", web::get().to(handlers::generator::generate_password));
}
