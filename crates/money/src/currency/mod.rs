//! Currency metadata and the process-wide catalog.
//!
//! A [`Currency`] is an immutable description of an ISO-4217-like currency:
//! its identity (code, optional numeric id, name), its minor-unit structure,
//! its display symbols, and the locale conventions used when rendering
//! amounts. Instances are registered in a [`Catalog`] and shared as
//! [`CurrencyRef`] handles; the catalog guarantees at most one live
//! definition per code.

pub mod catalog;
pub(crate) mod data;
pub mod error;

pub use catalog::{Catalog, CurrencyRef, catalog};
pub use error::CurrencyError;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::format::{NegativePosition, PositivePosition};

/// Locale formatting conventions for a currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    /// Separator between the whole part and the fraction (e.g. `"."`).
    pub decimal_separator: String,
    /// Separator between thousand groups (e.g. `","` or `" "`).
    pub group_separator: String,
    /// Default layout for non-negative amounts.
    pub positive_position: PositivePosition,
    /// Default layout for negative amounts.
    pub negative_position: NegativePosition,
}

impl Format {
    /// Creates a format block.
    #[must_use]
    pub fn new(
        decimal_separator: &str,
        group_separator: &str,
        positive_position: PositivePosition,
        negative_position: NegativePosition,
    ) -> Self {
        Self {
            decimal_separator: decimal_separator.to_string(),
            group_separator: group_separator.to_string(),
            positive_position,
            negative_position,
        }
    }
}

/// Minor-unit structure of a currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinorUnit {
    /// Name of the fractional unit (e.g. `"Cent"`); `None` when the currency
    /// has no named fraction.
    pub name: Option<String>,
    /// How many minor units compose one major unit (100, 1000, 1, ...).
    pub per_major: u32,
    /// Smallest physical coin/note increment, in minor units; `None` when
    /// undefined. Used only for cash rounding.
    pub smallest_denomination: Option<u32>,
}

impl MinorUnit {
    /// Creates a named minor unit.
    #[must_use]
    pub fn new(name: &str, per_major: u32, smallest_denomination: u32) -> Self {
        let name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        Self {
            name,
            per_major,
            smallest_denomination: Some(smallest_denomination),
        }
    }

    /// Creates a minor unit without a named fraction.
    #[must_use]
    pub const fn unnamed(per_major: u32, smallest_denomination: u32) -> Self {
        Self {
            name: None,
            per_major,
            smallest_denomination: Some(smallest_denomination),
        }
    }
}

/// An immutable ISO-4217-like currency definition.
///
/// Equality, ordering, and hashing are by `code` only; the remaining fields
/// are display metadata. Construct with [`Currency::new`] plus the `with_*`
/// builders, then [`Catalog::register`] to share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    /// 3-letter identifier, unique within a catalog.
    pub code: String,
    /// ISO 4217 numeric code; `None` marks a non-ISO pseudo-currency.
    pub numeric: Option<u16>,
    /// Display name.
    pub name: String,
    /// Locale formatting conventions.
    pub format: Format,
    /// Minor-unit structure.
    pub minor_unit: MinorUnit,
    /// Ordered display symbols; the first is primary.
    pub symbols: Vec<String>,
    /// Alternate symbol used when disambiguation is requested.
    pub disambiguation_symbol: Option<String>,
    /// HTML entity for the primary symbol, when one exists.
    pub html_entity: Option<String>,
    /// Disambiguation/display ordering among currencies sharing a symbol
    /// (lower is more prominent).
    pub priority: u32,
}

impl Currency {
    /// Default priority for currencies without an explicit one.
    pub const DEFAULT_PRIORITY: u32 = 100;

    /// Creates a currency definition with default priority and no
    /// disambiguation symbol or HTML entity.
    #[must_use]
    pub fn new(
        code: &str,
        numeric: Option<u16>,
        name: &str,
        format: Format,
        minor_unit: MinorUnit,
        symbols: &[&str],
    ) -> Self {
        Self {
            code: code.to_string(),
            numeric,
            name: name.to_string(),
            format,
            minor_unit,
            symbols: symbols.iter().map(ToString::to_string).collect(),
            disambiguation_symbol: None,
            html_entity: None,
            priority: Self::DEFAULT_PRIORITY,
        }
    }

    /// Sets the disambiguation symbol.
    #[must_use]
    pub fn with_disambiguation_symbol(mut self, symbol: &str) -> Self {
        self.disambiguation_symbol = Some(symbol.to_string());
        self
    }

    /// Sets the HTML entity.
    #[must_use]
    pub fn with_html_entity(mut self, entity: &str) -> Self {
        self.html_entity = Some(entity.to_string());
        self
    }

    /// Sets the display priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// The primary display symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.symbols.first().map_or("", String::as_str)
    }

    /// Number of fraction digits conventionally displayed: the minor-unit
    /// ratio as a base-10 exponent, rounded in log space so near-power-of-ten
    /// ratios land on the nearest exponent.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        let ratio = u64::from(self.minor_unit.per_major.max(1));
        let floor = ratio.ilog10();
        // round(log10(ratio)): ratio is past the midpoint iff ratio^2 >= 10^(2*floor + 1)
        if ratio.pow(2) >= 10u64.pow(2 * floor + 1) {
            floor + 1
        } else {
            floor
        }
    }

    /// Whether this currency carries an ISO 4217 numeric code.
    #[must_use]
    pub const fn is_iso(&self) -> bool {
        self.numeric.is_some()
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: &str, per_major: u32) -> Currency {
        Currency::new(
            code,
            Some(999),
            "Test",
            Format::new(
                ".",
                ",",
                PositivePosition::Before,
                NegativePosition::One,
            ),
            MinorUnit::new("Cent", per_major, 1),
            &["$"],
        )
    }

    #[test]
    fn test_equality_is_by_code_only() {
        let a = plain("USD", 100);
        let mut b = plain("USD", 100);
        b.name = "Something Else".to_string();
        b.priority = 1;
        assert_eq!(a, b);
        assert_ne!(plain("USD", 100), plain("SEK", 100));
    }

    #[test]
    fn test_ordering_is_ordinal_by_code() {
        let mut codes = vec![plain("SEK", 100), plain("AED", 100), plain("USD", 100)];
        codes.sort();
        let sorted: Vec<&str> = codes.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(sorted, vec!["AED", "SEK", "USD"]);
    }

    #[test]
    fn test_exponent_from_ratio() {
        assert_eq!(plain("XTS", 1).exponent(), 0);
        assert_eq!(plain("XTS", 100).exponent(), 2);
        assert_eq!(plain("XTS", 1000).exponent(), 3);
        assert_eq!(plain("XTS", 10000).exponent(), 4);
        // Non-power-of-ten ratios round in log space (5 -> 1, 4 -> 0).
        assert_eq!(plain("XTS", 5).exponent(), 1);
        assert_eq!(plain("XTS", 4).exponent(), 0);
    }

    #[test]
    fn test_display_renders_code() {
        assert_eq!(plain("USD", 100).to_string(), "USD");
    }

    #[test]
    fn test_builders_set_optional_attributes() {
        let currency = plain("USD", 100)
            .with_disambiguation_symbol("US$")
            .with_html_entity("$")
            .with_priority(1);
        assert_eq!(currency.disambiguation_symbol.as_deref(), Some("US$"));
        assert_eq!(currency.html_entity.as_deref(), Some("$"));
        assert_eq!(currency.priority, 1);
    }

    #[test]
    fn test_empty_minor_unit_name_collapses_to_none() {
        let minor = MinorUnit::new("", 1, 5);
        assert_eq!(minor.name, None);
    }

    #[test]
    fn test_is_iso() {
        let mut currency = plain("USD", 100);
        assert!(currency.is_iso());
        currency.numeric = None;
        assert!(!currency.is_iso());
    }
}
