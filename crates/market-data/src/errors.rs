//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching a spot price.
///
/// Callers outside this crate never see these: the registry logs the failure
/// and degrades the price to 0.0 for the affected asset only.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A provider-specific error occurred (non-success HTTP status and the
    /// like).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider responded but the payload was not the expected shape.
    #[error("Unexpected payload from {provider}: {message}")]
    UnexpectedPayload { provider: String, message: String },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
