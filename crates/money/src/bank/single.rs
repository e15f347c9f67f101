//! Single-currency guard bank.

use super::Bank;
use super::error::BankError;
use super::rate::Rate;
use crate::currency::{Currency, CurrencyRef};
use crate::money::Money;

/// Bank that refuses every exchange.
///
/// Useful for applications that hold money in several currencies but must
/// never convert between them implicitly: injecting this bank turns any
/// exchange attempt into a hard [`BankError::DifferentCurrency`] instead of
/// silently doing the wrong thing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleCurrency;

impl SingleCurrency {
    /// Creates the guard bank.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Bank for SingleCurrency {
    fn set_rate(&self, _rate: Rate) -> Result<(), BankError> {
        Err(BankError::Unsupported {
            operation: "set_rate",
        })
    }

    fn get_rate(&self, _from: &Currency, _to: &Currency) -> Option<Rate> {
        None
    }

    fn rates(&self) -> Vec<Rate> {
        Vec::new()
    }

    fn exchange(&self, money: &Money, to: CurrencyRef) -> Result<Money, BankError> {
        Err(BankError::DifferentCurrency {
            from: money.currency().code.clone(),
            to: to.code.clone(),
        })
    }
}
