//! Rate storage and currency exchange.
//!
//! A bank stores directed exchange rates and converts [`Money`] values
//! between currencies. Banks are injected collaborators: a `Money` borrows
//! one for the duration of an [`exchange`](Money::exchange) call and never
//! owns it. [`VariableExchange`] is the standard rate-table implementation;
//! [`SingleCurrency`] refuses every exchange, for applications that must
//! never cross currencies.

pub mod error;
pub mod rate;
pub mod single;
pub mod variable;

pub use error::BankError;
pub use rate::Rate;
pub use single::SingleCurrency;
pub use variable::VariableExchange;

use rust_decimal::Decimal;

use crate::currency::{Currency, CurrencyRef};
use crate::money::Money;

/// Exchange-rate storage and conversion.
///
/// Implementations must be safe for concurrent reads and last-write-wins
/// concurrent rate registration.
pub trait Bank: Send + Sync {
    /// Registers or overwrites a directed rate.
    ///
    /// # Errors
    ///
    /// Fails when the bank does not store rates.
    fn add_rate(
        &self,
        from: CurrencyRef,
        to: CurrencyRef,
        value: Decimal,
    ) -> Result<(), BankError> {
        self.set_rate(Rate::new(from, to, value))
    }

    /// Registers or overwrites a directed rate given as a float, converting
    /// it to an exact decimal at the API edge.
    ///
    /// # Errors
    ///
    /// Fails with [`BankError::InvalidRate`] when the float has no exact
    /// decimal representation (NaN, infinity), or when the bank does not
    /// store rates.
    fn add_rate_f64(&self, from: CurrencyRef, to: CurrencyRef, value: f64) -> Result<(), BankError> {
        let value =
            Decimal::try_from(value).map_err(|err| BankError::InvalidRate(err.to_string()))?;
        self.add_rate(from, to, value)
    }

    /// Stores a rate under its ordered-pair key.
    ///
    /// # Errors
    ///
    /// Fails when the bank does not store rates.
    fn set_rate(&self, rate: Rate) -> Result<(), BankError>;

    /// Looks up the rate for an ordered currency pair.
    fn get_rate(&self, from: &Currency, to: &Currency) -> Option<Rate>;

    /// Snapshot of every registered rate, in unspecified order.
    fn rates(&self) -> Vec<Rate>;

    /// Converts a money value into the target currency.
    ///
    /// # Errors
    ///
    /// Fails with [`BankError::UnknownRate`] when no rate is registered for
    /// the pair, or with the bank's own policy error.
    fn exchange(&self, money: &Money, to: CurrencyRef) -> Result<Money, BankError>;
}
