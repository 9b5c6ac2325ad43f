//! Error types for market data retrieval.

use thiserror::Error;

/// Errors that can occur while fetching a ticker snapshot.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    /// A snapshot without a usable spot price falls in here.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "Internal server error".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: YAHOO - Internal server error"
        );

        let error = MarketDataError::ValidationFailed {
            message: "no usable spot price".to_string(),
        };
        assert_eq!(format!("{}", error), "Validation failed: no usable spot price");
    }
}
