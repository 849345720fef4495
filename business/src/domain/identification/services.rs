use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::NormalizeError;
use super::model::{IdentificationRequest, NormalizedImage, SpeciesMatch};

/// Declared encoding of an uploaded image. Anything else is rejected before
/// decoding is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSourceFormat {
    Jpeg,
    Png,
}

impl std::fmt::Display for ImageSourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSourceFormat::Jpeg => write!(f, "jpeg"),
            ImageSourceFormat::Png => write!(f, "png"),
        }
    }
}

impl std::str::FromStr for ImageSourceFormat {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jpg" | "jpeg" | "image/jpeg" => Ok(ImageSourceFormat::Jpeg),
            "png" | "image/png" => Ok(ImageSourceFormat::Png),
            _ => Err(NormalizeError::UnsupportedFormat),
        }
    }
}

/// Service port for converting uploads into the canonical transport form.
///
/// A pure in-memory transformation: decode, strip alpha and palettes, bound
/// both dimensions, re-encode losslessly. Never touches the filesystem.
pub trait ImageNormalizerService: Send + Sync {
    fn normalize(
        &self,
        bytes: &[u8],
        format: ImageSourceFormat,
    ) -> Result<NormalizedImage, NormalizeError>;
}

/// Everything one classifier call can come back with.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    /// At least one candidate, untruncated, in the API's ranking order.
    Matches(Vec<SpeciesMatch>),
    /// The API answered 200 with no results.
    Empty,
    /// Non-200 answer; status and body kept verbatim for diagnostics.
    ApiError { status: u16, body: String },
    /// Transport-level failure before a response arrived.
    NetworkError(String),
    /// The request deadline elapsed.
    Timeout,
}

/// Service port for submitting images to the remote classifier.
#[async_trait]
pub trait PlantClassifierService: Send + Sync {
    async fn identify(&self, request: &IdentificationRequest) -> ClassificationOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_format_names_and_mime_types() {
        assert_eq!("jpeg".parse::<ImageSourceFormat>(), Ok(ImageSourceFormat::Jpeg));
        assert_eq!("jpg".parse::<ImageSourceFormat>(), Ok(ImageSourceFormat::Jpeg));
        assert_eq!("png".parse::<ImageSourceFormat>(), Ok(ImageSourceFormat::Png));
        assert_eq!(
            "image/png".parse::<ImageSourceFormat>(),
            Ok(ImageSourceFormat::Png)
        );
    }

    #[test]
    fn should_reject_unsupported_formats() {
        assert_eq!(
            "webp".parse::<ImageSourceFormat>(),
            Err(NormalizeError::UnsupportedFormat)
        );
        assert_eq!(
            "image/gif".parse::<ImageSourceFormat>(),
            Err(NormalizeError::UnsupportedFormat)
        );
    }
}
