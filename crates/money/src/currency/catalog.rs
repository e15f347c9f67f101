//! Concurrent currency registry.
//!
//! The catalog owns the canonical set of currency definitions for a process.
//! Most callers use the lazily-initialized [`catalog()`] default, which is
//! pre-loaded with the built-in definitions before the first lookup; an
//! explicit [`Catalog`] can be constructed for isolated registries.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use super::data;
use super::error::CurrencyError;
use super::Currency;

/// Shared handle to a registered currency.
pub type CurrencyRef = Arc<Currency>;

static DEFAULT: Lazy<Catalog> = Lazy::new(Catalog::with_builtins);

/// The process-wide default catalog, pre-loaded with built-in currencies.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &DEFAULT
}

/// Concurrent code-keyed registry of currency definitions.
///
/// Registration is an atomic last-write-wins upsert, so re-registering a code
/// silently replaces the previous definition and never errors. Reads and
/// writes are safe from any thread.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: DashMap<String, CurrencyRef>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-loaded with the built-in definitions.
    #[must_use]
    pub fn with_builtins() -> Self {
        let catalog = Self::new();
        for currency in data::builtin() {
            catalog.register(currency);
        }
        catalog
    }

    /// Registers a currency, replacing any previous definition of the same
    /// code, and returns the shared handle.
    pub fn register(&self, currency: Currency) -> CurrencyRef {
        let shared = Arc::new(currency);
        debug!(code = %shared.code, "registering currency");
        self.entries.insert(shared.code.clone(), Arc::clone(&shared));
        shared
    }

    /// Looks up a currency by code.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::Unknown`] when the code is blank or not
    /// registered.
    pub fn get(&self, code: &str) -> Result<CurrencyRef, CurrencyError> {
        self.find(code).ok_or_else(|| CurrencyError::Unknown {
            code: code.to_string(),
        })
    }

    /// Looks up a currency by code, returning `None` instead of an error.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<CurrencyRef> {
        if code.trim().is_empty() {
            return None;
        }
        self.entries.get(code).map(|entry| Arc::clone(entry.value()))
    }

    /// Looks up a currency by ISO 4217 numeric id; first match wins.
    #[must_use]
    pub fn find_numeric(&self, numeric: u16) -> Option<CurrencyRef> {
        self.entries
            .iter()
            .find(|entry| entry.value().numeric == Some(numeric))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot of every registered currency, in unspecified order.
    #[must_use]
    pub fn all(&self) -> Vec<CurrencyRef> {
        self.entries
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
