//! Exact money values across ISO-4217-like currencies.
//!
//! This crate contains pure value objects with ZERO web or I/O dependencies:
//! amounts are exact `i64` minor-unit counts, formatting follows each
//! currency's locale conventions, and exchange goes through an injected
//! [`Bank`] collaborator.
//!
//! # Modules
//!
//! - `currency` - Currency metadata and the process-wide catalog
//! - `money` - The `Money` value type, arithmetic, and cash rounding
//! - `format` - Locale-aware rendering with per-call rule overrides
//! - `bank` - Rate storage and currency exchange
//!
//! # Example
//!
//! ```
//! use coinage::{FormatRules, Money, catalog};
//!
//! let sek = catalog().get("SEK").unwrap();
//! let price = Money::new(19_999_98, sek);
//! assert_eq!(price.format(), "19 999,98 kr");
//! assert_eq!(
//!     price.format_with(&FormatRules::new().disambiguate()),
//!     "19 999,98 SEK"
//! );
//! ```

pub mod bank;
pub mod currency;
pub mod format;
pub mod money;

pub use bank::{Bank, BankError, Rate, SingleCurrency, VariableExchange};
pub use currency::{Catalog, Currency, CurrencyError, CurrencyRef, catalog};
pub use format::{FormatRules, NegativePosition, PositivePosition};
pub use money::{Money, MoneyError, RoundingMode};
