use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledger::LedgerError;
use serde_json::json;
use store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// A missing trade surfaces as 404 with a `detail` body; every storage
/// failure is fatal for the request and surfaces as a generic 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Ledger(LedgerError::NotFound) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Trade not found" })),
            )
                .into_response(),
            AppError::Ledger(LedgerError::Store(store_err))
            | AppError::Store(store_err) => {
                tracing::error!(error = ?store_err, "Store error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An internal storage error occurred" })),
                )
                    .into_response()
            }
        }
    }
}
