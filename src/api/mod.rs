// src/api/mod.rs
use actix_web::dev::Server;
use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use actix_cors::Cors;
use std::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::analysis::PasswordAnalyzer;
use crate::core::config::Config;
use types::ErrorResponse;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::check::check_password,
        crate::api::handlers::generator::generate_password,
    ),
    components(
        schemas(
            crate::api::types::CheckRequest,
            crate::api::types::ErrorResponse,
            crate::models::RuleSet,
            crate::models::StrengthResult,
            crate::models::GeneratedPassword,
        )
    ),
    tags(
        (name = "Strength", description = "Password rule evaluation"),
        (name = "Generator", description = "Password generation endpoints")
    ),
    info(
        title = "passmeter API",
        version = "0.1.0",
        description = "Password strength meter backend",
        license(name = "MIT")
    )
)]
struct ApiDoc;

/// Length used by `GET /generate` when the query does not set one.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorDefaults {
    pub length: usize,
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    log::warn!("Rejected request body: {}", message);
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse { error: message }),
    )
    .into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    log::warn!("Rejected query string: {}", message);
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse { error: message }),
    )
    .into()
}

/// Shared state, extractor configuration and routes.
pub fn configure_app(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.app_data(web::Data::new(PasswordAnalyzer::new(config.guesses_per_second)))
        .app_data(web::Data::new(GeneratorDefaults {
            length: config.default_password_length,
        }))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .configure(routes::configure_routes);
}

/// Builds the HTTP server on an already bound listener.
pub fn server(config: Config, listener: TcpListener) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(|cfg| configure_app(cfg, &config))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address())?;
    log::info!("Starting passmeter API server on {}", listener.local_addr()?);
    server(config, listener)?.await
}

pub mod types;
pub mod routes;
pub mod handlers;
