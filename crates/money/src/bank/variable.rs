//! Rate-table bank.

use dashmap::DashMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use super::error::BankError;
use super::rate::{Rate, pair_key};
use super::Bank;
use crate::currency::{Currency, CurrencyRef};
use crate::money::Money;

/// Bank backed by an in-memory table of manually registered rates.
///
/// The table starts empty; register rates with
/// [`add_rate`](Bank::add_rate), then exchange:
///
/// ```
/// use coinage::{Bank, Money, VariableExchange, catalog};
/// use rust_decimal_macros::dec;
///
/// let bank = VariableExchange::new();
/// let usd = catalog().get("USD").unwrap();
/// let cad = catalog().get("CAD").unwrap();
/// bank.add_rate(usd.clone(), cad.clone(), dec!(1.24515)).unwrap();
///
/// let hundred = Money::new(100_00, usd);
/// let exchanged = hundred.exchange(&bank, cad).unwrap();
/// assert_eq!(exchanged.fractional(), 124_51);
/// ```
#[derive(Debug, Default)]
pub struct VariableExchange {
    rates: DashMap<String, Rate>,
}

impl VariableExchange {
    /// Creates a bank with an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Bank for VariableExchange {
    fn set_rate(&self, rate: Rate) -> Result<(), BankError> {
        debug!(pair = %rate, value = %rate.value, "registering exchange rate");
        self.rates.insert(rate.key(), rate);
        Ok(())
    }

    fn get_rate(&self, from: &Currency, to: &Currency) -> Option<Rate> {
        self.rates
            .get(&pair_key(&from.code, &to.code))
            .map(|entry| entry.value().clone())
    }

    fn rates(&self) -> Vec<Rate> {
        self.rates
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Scales the minor-unit count by the two currencies' minor-unit ratios
    /// and the registered rate, truncating the result to an integer.
    fn exchange(&self, money: &Money, to: CurrencyRef) -> Result<Money, BankError> {
        let from = money.currency();
        let rate = self
            .get_rate(from, &to)
            .ok_or_else(|| BankError::UnknownRate {
                from: from.code.clone(),
                to: to.code.clone(),
            })?;

        let overflow = || BankError::Overflow {
            from: from.code.clone(),
            to: to.code.clone(),
        };
        let scaled = Decimal::from(money.fractional())
            * Decimal::from(to.minor_unit.per_major.max(1))
            / Decimal::from(from.minor_unit.per_major.max(1));
        let fractional = scaled
            .checked_mul(rate.value)
            .ok_or_else(overflow)?
            .trunc()
            .to_i64()
            .ok_or_else(overflow)?;

        debug!(pair = %rate, fractional, "exchanged");
        Ok(Money::new(fractional, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::catalog;
    use rust_decimal_macros::dec;

    fn usd() -> CurrencyRef {
        catalog().get("USD").unwrap()
    }

    fn cad() -> CurrencyRef {
        catalog().get("CAD").unwrap()
    }

    #[test]
    fn test_stores_one_rate_per_pair() {
        let bank = VariableExchange::new();
        bank.add_rate(usd(), cad(), dec!(1.24515)).unwrap();
        bank.add_rate(cad(), usd(), dec!(0.803115)).unwrap();
        bank.add_rate(cad(), usd(), dec!(0.803115)).unwrap();

        assert_eq!(bank.rates().len(), 2);
        let keys: Vec<String> = bank.rates().iter().map(Rate::key).collect();
        assert_eq!(keys.iter().filter(|k| k.as_str() == "USD_CAD").count(), 1);
        assert_eq!(keys.iter().filter(|k| k.as_str() == "CAD_USD").count(), 1);
    }

    #[test]
    fn test_get_rate_is_directed() {
        let bank = VariableExchange::new();
        bank.add_rate(usd(), cad(), dec!(1.24515)).unwrap();

        let rate = bank.get_rate(&usd(), &cad()).unwrap();
        assert_eq!(rate.from.code, "USD");
        assert_eq!(rate.to.code, "CAD");
        assert_eq!(rate.value, dec!(1.24515));
        assert!(bank.get_rate(&cad(), &usd()).is_none());
    }

    #[test]
    fn test_add_rate_f64_converts_at_the_edge() {
        let bank = VariableExchange::new();
        bank.add_rate_f64(catalog().get("SEK").unwrap(), usd(), 0.109133)
            .unwrap();
        let rate = bank.get_rate(&catalog().get("SEK").unwrap(), &usd()).unwrap();
        assert_eq!(rate.value, dec!(0.109133));

        let err = bank.add_rate_f64(usd(), cad(), f64::NAN).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RATE");
    }

    #[test]
    fn test_exchange_unknown_rate_fails() {
        let bank = VariableExchange::new();
        let err = Money::new(100_00, usd()).exchange(&bank, cad()).unwrap_err();
        assert_eq!(
            err,
            BankError::UnknownRate {
                from: "USD".to_string(),
                to: "CAD".to_string(),
            }
        );
    }

    #[test]
    fn test_exchange_truncates_to_minor_units() {
        let bank = VariableExchange::new();
        bank.add_rate(usd(), cad(), dec!(1.24515)).unwrap();
        bank.add_rate(cad(), usd(), dec!(0.803115)).unwrap();

        let exchanged = Money::new(100_00, usd()).exchange(&bank, cad()).unwrap();
        assert_eq!(exchanged.fractional(), 124_51);
        assert_eq!(exchanged.format(), "$124.51");

        let back = Money::new(100_00, cad()).exchange(&bank, usd()).unwrap();
        assert_eq!(back.fractional(), 80_31);
        assert_eq!(back.format(), "$80.31");
    }

    #[test]
    fn test_exchange_scales_across_minor_unit_ratios() {
        let bank = VariableExchange::new();
        let bhd = catalog().get("BHD").unwrap();
        // 1 USD = 0.376 BHD; 100.00 USD -> 37.600 BHD (1000 fils per dinar).
        bank.add_rate(usd(), bhd.clone(), dec!(0.376)).unwrap();
        let exchanged = Money::new(100_00, usd()).exchange(&bank, bhd).unwrap();
        assert_eq!(exchanged.fractional(), 37_600);

        // And back down to a zero-decimal currency.
        let isk = catalog().get("ISK").unwrap();
        bank.add_rate(usd(), isk.clone(), dec!(138.99)).unwrap();
        let exchanged = Money::new(100_00, usd()).exchange(&bank, isk).unwrap();
        assert_eq!(exchanged.fractional(), 13_899);
    }
}
