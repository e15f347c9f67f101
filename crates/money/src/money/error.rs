//! Money arithmetic and rounding error types.

use thiserror::Error;

/// Errors that can occur when combining or rounding money values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// Two values of different currencies were combined without an exchange.
    #[error("Cannot combine {left} with {right}: currencies differ")]
    CurrencyMismatch {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// The operation requires a currency attribute that was registered as
    /// absent.
    #[error("Currency {currency} does not define {attribute}")]
    MissingAttribute {
        /// Currency code.
        currency: String,
        /// Name of the absent attribute.
        attribute: &'static str,
    },

    /// The result does not fit the minor-unit range.
    #[error("Amount is outside the representable minor-unit range")]
    AmountOutOfRange,
}

impl MoneyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::MissingAttribute { .. } => "MISSING_ATTRIBUTE",
            Self::AmountOutOfRange => "AMOUNT_OUT_OF_RANGE",
        }
    }
}
