//! Error types for the Intrinsic valuation engine.
//!
//! Missing optional fundamentals are never errors; they resolve to documented
//! defaults inside the normalizer. The variants here cover the few conditions
//! that callers must act on.

use thiserror::Error;

/// The main error type for Intrinsic operations.
#[derive(Debug, Error)]
pub enum IntrinsicError {
    /// Assumptions that make the model mathematically invalid.
    ///
    /// Raised for example when the discount rate does not exceed the terminal
    /// growth rate under the Gordon-Growth method.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The mandatory USD market price was absent, zero or not finite.
    #[error("Missing market price: {0}")]
    MissingPrice(String),

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl IntrinsicError {
    /// Returns `true` for [`IntrinsicError::Configuration`].
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<String> for IntrinsicError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for IntrinsicError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Intrinsic operations.
pub type Result<T> = std::result::Result<T, IntrinsicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntrinsicError::Configuration("discount 2% <= terminal 5%".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: discount 2% <= terminal 5%"
        );

        let err = IntrinsicError::MissingPrice("AAPL".to_string());
        assert_eq!(err.to_string(), "Missing market price: AAPL");
    }

    #[test]
    fn test_is_configuration() {
        assert!(IntrinsicError::Configuration("x".into()).is_configuration());
        assert!(!IntrinsicError::InvalidData("x".into()).is_configuration());
    }

    #[test]
    fn test_error_from_str() {
        let err: IntrinsicError = "boom".into();
        assert!(matches!(err, IntrinsicError::Other(_)));
    }
}
