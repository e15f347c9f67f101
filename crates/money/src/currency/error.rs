//! Currency lookup error types.

use thiserror::Error;

/// Errors that can occur during currency lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// The code or numeric id is blank or not registered in the catalog.
    #[error("Unknown currency: {code:?}")]
    Unknown {
        /// The offending code (possibly blank) or stringified numeric id.
        code: String,
    },
}

impl CurrencyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unknown { .. } => "UNKNOWN_CURRENCY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurrencyError::Unknown {
            code: "ZZZ".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown currency: \"ZZZ\"");
        assert_eq!(err.error_code(), "UNKNOWN_CURRENCY");
    }
}
