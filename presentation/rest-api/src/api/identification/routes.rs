use std::sync::Arc;

use base64::prelude::{BASE64_STANDARD, Engine as _};
use poem_openapi::{OpenApi, payload::Json};

use business::domain::identification::report::IdentificationOutcome;
use business::domain::identification::services::ImageSourceFormat;
use business::domain::identification::use_cases::identify::{
    IdentifyPlantParams, IdentifyPlantUseCase, UploadedImage,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::identification::dto::{
    IdentificationReportResponse, IdentifyPlantRequest, UpstreamErrorResponse,
};
use crate::api::tags::ApiTags;

const DEFAULT_MAX_RESULTS: u32 = 5;

pub struct IdentificationApi {
    identify_use_case: Arc<dyn IdentifyPlantUseCase>,
}

impl IdentificationApi {
    pub fn new(identify_use_case: Arc<dyn IdentifyPlantUseCase>) -> Self {
        Self { identify_use_case }
    }
}

fn decode_upload(image_base64: &str, format: &str) -> Result<UploadedImage, IdentifyPlantResponse> {
    let format = match format.parse::<ImageSourceFormat>() {
        Ok(format) => format,
        Err(_) => {
            return Err(IdentifyPlantResponse::UnprocessableEntity(Json(
                ErrorResponse {
                    name: "NormalizeError".to_string(),
                    message: "image.unsupported_format".to_string(),
                },
            )));
        }
    };

    let bytes = match BASE64_STANDARD.decode(image_base64) {
        Ok(bytes) => bytes,
        Err(_) => {
            return Err(IdentifyPlantResponse::BadRequest(Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "image.invalid_base64".to_string(),
            })));
        }
    };

    Ok(UploadedImage { bytes, format })
}

/// Plant identification API
///
/// Endpoint for submitting plant photos to the PlantNet classifier.
#[OpenApi]
impl IdentificationApi {
    /// Identify a plant from photos
    ///
    /// Normalizes one or two uploaded photos, submits them to the remote
    /// classifier, and returns the ranked species matches with confidence
    /// labels. Every way the call can end maps to its own response class.
    #[oai(
        path = "/identifications",
        method = "post",
        tag = "ApiTags::Identifications"
    )]
    async fn identify(&self, body: Json<IdentifyPlantRequest>) -> IdentifyPlantResponse {
        let request = body.0;

        let primary = match decode_upload(&request.primary_image_base64, &request.primary_image_format)
        {
            Ok(upload) => upload,
            Err(response) => return response,
        };

        let secondary = match (&request.secondary_image_base64, &request.secondary_image_format) {
            (Some(image_base64), Some(format)) => match decode_upload(image_base64, format) {
                Ok(upload) => Some(upload),
                Err(response) => return response,
            },
            (Some(_), None) => {
                return IdentifyPlantResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "image.missing_secondary_format".to_string(),
                }));
            }
            _ => None,
        };

        let params = IdentifyPlantParams {
            primary,
            secondary,
            max_results: request.max_results.unwrap_or(DEFAULT_MAX_RESULTS) as usize,
            show_details: request.show_details.unwrap_or(true),
        };

        match self.identify_use_case.execute(params).await {
            Ok(IdentificationOutcome::Success(report)) => {
                IdentifyPlantResponse::Ok(Json(report.into()))
            }
            Ok(IdentificationOutcome::Empty) => IdentifyPlantResponse::NoMatches(Json(ErrorResponse {
                name: "NoMatches".to_string(),
                message: "identification.no_matches".to_string(),
            })),
            Ok(IdentificationOutcome::ApiError { status, body }) => {
                IdentifyPlantResponse::UpstreamError(Json(UpstreamErrorResponse {
                    name: "UpstreamError".to_string(),
                    message: "identification.api_error".to_string(),
                    status,
                    body,
                }))
            }
            Ok(IdentificationOutcome::NetworkError(message)) => {
                IdentifyPlantResponse::NetworkError(Json(ErrorResponse {
                    name: "NetworkError".to_string(),
                    message,
                }))
            }
            Ok(IdentificationOutcome::Timeout) => {
                IdentifyPlantResponse::Timeout(Json(ErrorResponse {
                    name: "Timeout".to_string(),
                    message: "identification.timeout".to_string(),
                }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => IdentifyPlantResponse::BadRequest(json),
                    _ => IdentifyPlantResponse::UnprocessableEntity(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum IdentifyPlantResponse {
    #[oai(status = 200)]
    Ok(Json<IdentificationReportResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NoMatches(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    UpstreamError(Json<UpstreamErrorResponse>),
    #[oai(status = 503)]
    NetworkError(Json<ErrorResponse>),
    #[oai(status = 504)]
    Timeout(Json<ErrorResponse>),
}
