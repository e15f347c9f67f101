//! Bank and exchange error types.

use thiserror::Error;

/// Errors that can occur during rate storage and currency exchange.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankError {
    /// No directed rate is registered for the currency pair.
    #[error("No exchange rate registered for {from} to {to}")]
    UnknownRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// The bank forbids exchanging between currencies.
    #[error("Exchanging {from} into {to} is not allowed by a single-currency bank")]
    DifferentCurrency {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// The rate value cannot be represented exactly.
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    /// The bank does not support the operation.
    #[error("{operation} is not supported by this bank")]
    Unsupported {
        /// The rejected operation.
        operation: &'static str,
    },

    /// The exchanged amount does not fit the minor-unit range.
    #[error("Exchanged amount from {from} to {to} is outside the representable range")]
    Overflow {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },
}

impl BankError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRate { .. } => "UNKNOWN_RATE",
            Self::DifferentCurrency { .. } => "DIFFERENT_CURRENCY",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::Unsupported { .. } => "UNSUPPORTED_OPERATION",
            Self::Overflow { .. } => "EXCHANGE_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BankError::UnknownRate {
            from: "USD".to_string(),
            to: "CAD".to_string(),
        };
        assert_eq!(err.to_string(), "No exchange rate registered for USD to CAD");
        assert_eq!(err.error_code(), "UNKNOWN_RATE");

        let err = BankError::DifferentCurrency {
            from: "USD".to_string(),
            to: "SEK".to_string(),
        };
        assert_eq!(err.error_code(), "DIFFERENT_CURRENCY");
    }
}
