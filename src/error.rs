use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application-level error taxonomy.
///
/// Every fallible operation in the crate resolves to one of these variants.
/// `AlreadyExists` is deliberately distinct from `StoreUnavailable` so that
/// callers can tell an identifier collision apart from a broken store.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    AlreadyExists { message: String, details: Value },
    Cancelled { message: String, details: Value },
    StoreUnavailable { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn already_exists(message: impl Into<String>, details: Value) -> Self {
        Self::AlreadyExists {
            message: message.into(),
            details,
        }
    }
    pub fn cancelled(message: impl Into<String>, details: Value) -> Self {
        Self::Cancelled {
            message: message.into(),
            details,
        }
    }
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::AlreadyExists { message, details } => {
                (StatusCode::CONFLICT, "already_exists", message, details)
            }
            AppError::Cancelled { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "cancelled",
                message,
                details,
            ),
            AppError::StoreUnavailable { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_unavailable",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps low-level sqlx failures onto the application taxonomy.
///
/// A unique constraint violation becomes [`AppError::AlreadyExists`]; every
/// other database failure is reported as the store being unavailable.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::already_exists(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    tracing::error!(error = %e, "database operation failed");
    AppError::store_unavailable("Database error", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_constructor() {
        let err = AppError::already_exists("Identifier already taken", json!({ "id": "ab1c2" }));
        match err {
            AppError::AlreadyExists { message, details } => {
                assert_eq!(message, "Identifier already taken");
                assert_eq!(details["id"], "ab1c2");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_cancelled_constructor() {
        let err = AppError::cancelled("Allocation budget exhausted", json!({}));
        assert!(matches!(err, AppError::Cancelled { .. }));
    }
}
