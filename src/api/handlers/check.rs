// src/api/handlers/check.rs
use actix_web::{web, HttpResponse, Responder};

use crate::analysis::PasswordAnalyzer;
use crate::api::types::{CheckRequest, ErrorResponse};
use crate::models::StrengthResult;
use crate::utils::redact;

/// Evaluate a password
///
/// Applies the composition rules and estimates how long the password
/// would withstand a brute-force attack.
#[utoipa::path(
    post,
    path = "/check",
    tag = "Strength",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Rule outcomes and crack-time estimate", body = StrengthResult),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn check_password(
    analyzer: web::Data<PasswordAnalyzer>,
    check_req: web::Json<CheckRequest>,
) -> impl Responder {
    let result = analyzer.analyze(&check_req.password);
    log::debug!(
        "Checked {}: {} of 5 rules",
        redact(&check_req.password),
        result.rules.score()
    );

    HttpResponse::Ok().json(result)
}
