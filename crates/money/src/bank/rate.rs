//! Directed exchange rates.

use std::fmt;

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::currency::{CurrencyRef, catalog};

/// A directed exchange rate between two currencies.
///
/// Rates are keyed by the ordered pair `"{from}_{to}"`; the reverse
/// direction is a separate rate and is never derived implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate {
    /// Source currency.
    pub from: CurrencyRef,
    /// Target currency.
    pub to: CurrencyRef,
    /// Units of `to` per unit of `from`.
    pub value: Decimal,
}

impl Rate {
    /// Creates a directed rate.
    #[must_use]
    pub const fn new(from: CurrencyRef, to: CurrencyRef, value: Decimal) -> Self {
        Self { from, to, value }
    }

    /// The storage key for this rate's currency pair.
    #[must_use]
    pub fn key(&self) -> String {
        pair_key(&self.from.code, &self.to.code)
    }
}

/// Builds the ordered-pair key used by rate stores.
pub(crate) fn pair_key(from: &str, to: &str) -> String {
    format!("{from}_{to}")
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Rate", 3)?;
        state.serialize_field("from", &self.from.code)?;
        state.serialize_field("to", &self.to.code)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RateRepr {
    from: String,
    to: String,
    value: Decimal,
}

impl<'de> Deserialize<'de> for Rate {
    /// Resolves both currency codes against the default catalog.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RateRepr::deserialize(deserializer)?;
        let from = catalog()
            .get(&repr.from)
            .map_err(serde::de::Error::custom)?;
        let to = catalog().get(&repr.to).map_err(serde::de::Error::custom)?;
        Ok(Self::new(from, to, repr.value))
    }
}
