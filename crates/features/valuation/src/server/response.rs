use crate::dto::ErrorResponse;
use crate::error::ValuationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

const INTERNAL_MESSAGE: &str = "Internal server error";

impl IntoResponse for ValuationError {
    fn into_response(self) -> Response {
        let (status, message) = if self.is_client_error() {
            warn!(error = %self, "Rejected valuation request");
            (StatusCode::BAD_REQUEST, self.to_string())
        } else {
            error!(error = %self, "Valuation request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_owned())
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
