//! Symbol placement patterns for rendered amounts.
//!
//! The patterns mirror the standard currency layout tables: `$` stands for
//! the currency symbol, `n` for the grouped number, `-` for the sign.

use serde::{Deserialize, Serialize};

/// Layout of a non-negative amount.
///
/// | Variant           | Pattern |
/// |-------------------|---------|
/// | `Before`          | `$n`    |
/// | `After`           | `n$`    |
/// | `BeforeWithSpace` | `$ n`   |
/// | `AfterWithSpace`  | `n $`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositivePosition {
    /// `$n`
    Before,
    /// `n$`
    After,
    /// `$ n`
    BeforeWithSpace,
    /// `n $`
    AfterWithSpace,
}

/// Layout of a negative amount.
///
/// The sixteen standard negative-currency layouts, numbered `Zero` through
/// `Fifteen` to match their conventional pattern indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NegativePosition {
    /// `($n)`
    Zero,
    /// `-$n`
    One,
    /// `$-n`
    Two,
    /// `$n-`
    Three,
    /// `(n$)`
    Four,
    /// `-n$`
    Five,
    /// `n-$`
    Six,
    /// `n$-`
    Seven,
    /// `-n $`
    Eight,
    /// `-$ n`
    Nine,
    /// `n $-`
    Ten,
    /// `$ n-`
    Eleven,
    /// `$ -n`
    Twelve,
    /// `n- $`
    Thirteen,
    /// `($ n)`
    Fourteen,
    /// `(n $)`
    Fifteen,
}

impl NegativePosition {
    /// Returns true for the parenthesized layouts, which carry no sign slot.
    #[must_use]
    pub const fn is_parenthesized(self) -> bool {
        matches!(self, Self::Zero | Self::Four | Self::Fourteen | Self::Fifteen)
    }
}
