/// Normalization errors for the identification pipeline.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("image.unsupported_format")]
    UnsupportedFormat,
    #[error("image.decode_failed")]
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentificationError {
    #[error("identification.invalid_max_results")]
    InvalidMaxResults,
    #[error("image.normalize_failed")]
    Normalize(#[from] NormalizeError),
}
