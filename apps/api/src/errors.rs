use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures reading or validating the role catalog.
/// Any of these makes role-dependent pages unservable.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not find roles catalog at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read roles catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roles catalog is not valid: {0}")]
    Malformed(String),

    #[error("role '{id}' is missing keys: {}", missing.join(", "))]
    MissingFields { id: String, missing: Vec<String> },

    #[error("role '{id}' top_skills must be a list")]
    SkillsNotList { id: String },

    #[error("role '{id}' is invalid: {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::Session(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_ERROR",
                    e.to_string(),
                )
            }
            AppError::Session(msg) => {
                tracing::error!("Session store error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SESSION_ERROR",
                    "Session storage is unavailable".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_names_role_and_keys() {
        let err = CatalogError::MissingFields {
            id: "data-analyst".to_string(),
            missing: vec!["category".to_string(), "top_skills".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "role 'data-analyst' is missing keys: category, top_skills"
        );
    }

    #[test]
    fn test_catalog_error_maps_to_500() {
        let err = AppError::from(CatalogError::NotFound {
            path: PathBuf::from("nowhere.json"),
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_session_error_hides_backend_detail() {
        let err = AppError::Session("connection refused".to_string());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
