use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::session::errors::SessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            SessionError::SuggestionNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            SessionError::Basket(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
