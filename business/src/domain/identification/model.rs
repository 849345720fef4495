use serde::{Deserialize, Serialize};

/// Largest edge, in pixels, allowed on an image sent to the classifier.
pub const MAX_IMAGE_DIMENSION: u32 = 1024;

/// Sentinel shown when the classifier omits the scientific name.
pub const UNKNOWN_SPECIES: &str = "Unknown Species";
/// Sentinel shown when the classifier omits the family name.
pub const UNKNOWN_FAMILY: &str = "Unknown Family";
/// Sentinel shown when the classifier omits the genus name.
pub const UNKNOWN_GENUS: &str = "Unknown Genus";

/// One candidate species from the classifier, kept in the API's ranking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesMatch {
    pub scientific_name: String,
    pub common_names: Vec<String>,
    pub family: String,
    pub genus: String,
    /// Raw relevance score in [0.0, 1.0].
    pub score: f64,
}

impl SpeciesMatch {
    /// Score as a percentage rounded to 2 decimal places.
    pub fn score_percent(&self) -> f64 {
        (self.score * 100.0 * 100.0).round() / 100.0
    }
}

/// Canonical transport form of an upload: opaque RGB PNG bytes with both
/// dimensions at most [`MAX_IMAGE_DIMENSION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// One classification submission: a mandatory primary image plus an optional
/// secondary image of the same plant. Consumed by a single classifier call.
#[derive(Debug, Clone)]
pub struct IdentificationRequest {
    images: Vec<NormalizedImage>,
}

impl IdentificationRequest {
    pub fn new(primary: NormalizedImage, secondary: Option<NormalizedImage>) -> Self {
        let mut images = vec![primary];
        if let Some(secondary) = secondary {
            images.push(secondary);
        }
        Self { images }
    }

    /// The submitted images, primary first. Always 1 or 2 entries.
    pub fn images(&self) -> &[NormalizedImage] {
        &self.images
    }
}
