use async_trait::async_trait;

use crate::domain::identification::errors::IdentificationError;
use crate::domain::identification::report::IdentificationOutcome;
use crate::domain::identification::services::ImageSourceFormat;

/// Most entries a caller may ask to display.
pub const MAX_RESULTS_LIMIT: usize = 10;

/// An uploaded image as received from the presentation layer.
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub format: ImageSourceFormat,
}

pub struct IdentifyPlantParams {
    pub primary: UploadedImage,
    pub secondary: Option<UploadedImage>,
    /// How many entries to display, 1 to [`MAX_RESULTS_LIMIT`].
    pub max_results: usize,
    /// Whether to compute aggregate stats over the full match list.
    pub show_details: bool,
}

#[async_trait]
pub trait IdentifyPlantUseCase: Send + Sync {
    async fn execute(
        &self,
        params: IdentifyPlantParams,
    ) -> Result<IdentificationOutcome, IdentificationError>;
}
