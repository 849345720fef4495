use std::io::Cursor;

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};

use business::domain::identification::errors::NormalizeError;
use business::domain::identification::model::{MAX_IMAGE_DIMENSION, NormalizedImage};
use business::domain::identification::services::{ImageNormalizerService, ImageSourceFormat};

/// Normalizer adapter over the `image` crate.
///
/// Decodes strictly as the declared format, flattens to opaque 8-bit RGB,
/// bounds both dimensions, and re-encodes as lossless PNG. All buffers stay
/// in memory.
pub struct ImageNormalizerPng;

impl ImageNormalizerPng {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageNormalizerPng {
    fn default() -> Self {
        Self::new()
    }
}

fn image_format(format: ImageSourceFormat) -> ImageFormat {
    match format {
        ImageSourceFormat::Jpeg => ImageFormat::Jpeg,
        ImageSourceFormat::Png => ImageFormat::Png,
    }
}

impl ImageNormalizerService for ImageNormalizerPng {
    fn normalize(
        &self,
        bytes: &[u8],
        format: ImageSourceFormat,
    ) -> Result<NormalizedImage, NormalizeError> {
        let decoded = ImageReader::with_format(Cursor::new(bytes), image_format(format))
            .decode()
            .map_err(|_| NormalizeError::Decode)?;

        // Alpha is dropped rather than composited; palettes are expanded.
        let opaque = DynamicImage::ImageRgb8(decoded.to_rgb8());

        let bounded = if opaque.width() > MAX_IMAGE_DIMENSION || opaque.height() > MAX_IMAGE_DIMENSION
        {
            opaque.resize(MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION, FilterType::Lanczos3)
        } else {
            opaque
        };

        let mut bytes = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut bytes,
            CompressionType::Best,
            PngFilterType::Adaptive,
        );
        bounded
            .write_with_encoder(encoder)
            .map_err(|_| NormalizeError::Decode)?;

        Ok(NormalizedImage {
            bytes,
            width: bounded.width(),
            height: bounded.height(),
        })
    }
}
