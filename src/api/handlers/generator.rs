// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::models::{GeneratedPassword, PasswordGenerationOptions};
use crate::generators::PasswordGenerator;
use crate::api::types::{ErrorResponse, GenerateQuery};
use crate::api::GeneratorDefaults;

/// Generate a secure password
///
/// Returns a random password drawn from letters, digits and `!@#$%^&*()_+`.
#[utoipa::path(
    get,
    path = "/generate",
    tag = "Generator",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated password", body = GeneratedPassword),
        (status = 400, description = "Invalid length", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    defaults: web::Data<GeneratorDefaults>,
    query: web::Query<GenerateQuery>,
) -> impl Responder {
    let options = PasswordGenerationOptions {
        length: query.length.unwrap_or(defaults.length),
    };

    let generator = PasswordGenerator::new();

    match generator.generate_password(&options) {
        Ok(password) => {
            log::debug!("Generated a {}-character password", options.length);
            HttpResponse::Ok().json(GeneratedPassword { password })
        }
        Err(e) => {
            log::warn!("Rejected generation request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}
