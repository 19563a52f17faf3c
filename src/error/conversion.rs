/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses. Every error becomes a JSON body
 * of the form `{"error": "..."}` with the status code from the taxonomy.
 * Internal errors log their detail here, at the one place all of them pass
 * through, so handlers never have to remember to.
 */

use axum::{
    response::{IntoResponse, Json, Response},
    http::StatusCode,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal { detail } = &self {
            tracing::error!("internal error: {detail}");
        }

        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

/// 404 handler for unmatched routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
        .into_response()
}
