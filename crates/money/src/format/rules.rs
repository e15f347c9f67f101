//! Per-call overrides for money rendering.

use super::position::{NegativePosition, PositivePosition};

/// Overrides applied on top of a currency's default formatting.
///
/// Every unset option inherits the currency's own metadata; `FormatRules` is
/// an ephemeral bag constructed per call, not a domain entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRules {
    /// Use the currency's disambiguation symbol when it has one.
    pub disambiguate: bool,
    /// Omit the fraction when it is exactly zero (`$1.00` becomes `$1`).
    pub drop_trailing_zeros: bool,
    /// Never render a fraction, truncating toward zero.
    pub no_cents: bool,
    /// Render a fraction only when the amount is not whole.
    pub no_cents_if_whole: bool,
    /// Layout override for negative amounts.
    pub negative_position: Option<NegativePosition>,
    /// Layout override for non-negative amounts.
    pub positive_position: Option<PositivePosition>,
    /// Render an explicit `+` on strictly positive amounts.
    pub show_positive_sign: bool,
    /// Render the currency symbol at all (on by default).
    pub show_symbol: bool,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            disambiguate: false,
            drop_trailing_zeros: false,
            no_cents: false,
            no_cents_if_whole: false,
            negative_position: None,
            positive_position: None,
            show_positive_sign: false,
            show_symbol: true,
        }
    }
}

impl FormatRules {
    /// Rules that inherit every currency default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the disambiguation symbol where available.
    #[must_use]
    pub fn disambiguate(mut self) -> Self {
        self.disambiguate = true;
        self
    }

    /// Omit an exactly-zero fraction.
    #[must_use]
    pub fn drop_trailing_zeros(mut self) -> Self {
        self.drop_trailing_zeros = true;
        self
    }

    /// Never render a fraction.
    #[must_use]
    pub fn no_cents(mut self) -> Self {
        self.no_cents = true;
        self
    }

    /// Render a fraction only for non-whole amounts.
    #[must_use]
    pub fn no_cents_if_whole(mut self) -> Self {
        self.no_cents_if_whole = true;
        self
    }

    /// Override the negative layout.
    #[must_use]
    pub fn negative_position(mut self, position: NegativePosition) -> Self {
        self.negative_position = Some(position);
        self
    }

    /// Override the positive layout.
    #[must_use]
    pub fn positive_position(mut self, position: PositivePosition) -> Self {
        self.positive_position = Some(position);
        self
    }

    /// Render `+` on strictly positive amounts.
    #[must_use]
    pub fn show_positive_sign(mut self) -> Self {
        self.show_positive_sign = true;
        self
    }

    /// Suppress the currency symbol and its padding.
    #[must_use]
    pub fn hide_symbol(mut self) -> Self {
        self.show_symbol = false;
        self
    }
}
