use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::TableSnapshot;

/// API 错误 - 每个变体对应一种结构化错误响应
///
/// The wire bodies match what the scheduling integration already parses:
/// a human-readable `error` field plus per-kind context fields.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error("{name} is invalid: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("no suitable table for {party_size} guests")]
    NoSuitableTable {
        party_size: u32,
        preference: Option<String>,
        available: Vec<TableSnapshot>,
    },

    #[error("no table with external id {0}")]
    UnknownExternalId(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("{name} is required") }),
            ),
            ApiError::InvalidParameter { name, reason } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": format!("{name} is invalid"),
                    "message": reason,
                }),
            ),
            ApiError::NoSuitableTable {
                party_size,
                preference,
                available,
            } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "No suitable table found",
                    "partySize": party_size,
                    "tablePreference": preference,
                    "message": format!("Geen tafel beschikbaar voor {party_size} personen"),
                    "availableTables": available,
                }),
            ),
            ApiError::UnknownExternalId(external_id) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Table not found",
                    "externalId": external_id,
                }),
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "message": err.to_string(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;
