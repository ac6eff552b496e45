use thiserror::Error;

/// Client-facing asset errors.
///
/// The Display strings are the exact messages returned in `{"error": ...}`
/// bodies, so changing them is an API change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Name, Quantity, and Buying Price are required.")]
    MissingFields,

    #[error("Quantity and Buying Price must be numbers.")]
    NotNumeric,

    #[error("Quantity and Buying Price must be non-negative.")]
    Negative,

    #[error("Asset not found.")]
    NotFound,
}
