// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckRequest {
    /// Password to evaluate (missing means empty)
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GenerateQuery {
    /// Password length (default: 16)
    pub length: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// What went wrong
    pub error: String,
}
