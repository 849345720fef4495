use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::identification::errors::{IdentificationError, NormalizeError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for IdentificationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            IdentificationError::InvalidMaxResults => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "identification.invalid_max_results",
            ),
            IdentificationError::Normalize(NormalizeError::UnsupportedFormat) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NormalizeError",
                "image.unsupported_format",
            ),
            IdentificationError::Normalize(NormalizeError::Decode) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NormalizeError",
                "image.decode_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
