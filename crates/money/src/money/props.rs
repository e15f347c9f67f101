//! Property-based tests for money arithmetic and rounding.

use proptest::prelude::*;

use super::*;
use crate::currency::catalog;

/// Strategy to generate minor-unit amounts well inside the i64 range.
fn fractional() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate scalar operands.
fn scalar() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

/// Strategy to pick a currency across the exponent classes.
fn currency_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "SEK", "EUR", "ISK", "BHD", "CLF"])
}

fn money(fractional: i64, code: &str) -> Money {
    Money::new(fractional, catalog().get(code).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Construction from minor units is exact for every currency.
    #[test]
    fn prop_minor_unit_round_trip(amount in fractional(), code in currency_code()) {
        prop_assert_eq!(money(amount, code).fractional(), amount);
    }

    /// Scalar addition and subtraction match plain integer arithmetic.
    #[test]
    fn prop_scalar_add_sub_exact(amount in fractional(), k in scalar()) {
        prop_assert_eq!((money(amount, "USD") + k).fractional(), amount + k);
        prop_assert_eq!((money(amount, "USD") - k).fractional(), amount - k);
    }

    /// Money addition matches plain integer arithmetic.
    #[test]
    fn prop_money_add_exact(a in fractional(), b in fractional()) {
        let sum = money(a, "SEK") + money(b, "SEK");
        prop_assert_eq!(sum.fractional(), a + b);
        prop_assert_eq!(sum.currency().code.as_str(), "SEK");
    }

    /// Scalar multiplication matches plain integer arithmetic.
    #[test]
    fn prop_scalar_mul_exact(amount in -1_000_000i64..1_000_000i64, k in -1_000i64..1_000i64) {
        prop_assert_eq!((money(amount, "USD") * k).fractional(), amount * k);
    }

    /// Division truncates toward zero like the host integer type.
    #[test]
    fn prop_division_truncates(amount in fractional(), k in 1i64..100_000i64) {
        prop_assert_eq!((money(amount, "USD") / k).fractional(), amount / k);
        prop_assert_eq!((money(amount, "USD") / -k).fractional(), amount / -k);
    }

    /// Equal values hash equally.
    #[test]
    fn prop_equality_consistent_with_hash(amount in fractional(), code in currency_code()) {
        use std::hash::{BuildHasher, RandomState};

        let state = RandomState::new();
        let a = money(amount, code);
        let b = money(amount, code);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(state.hash_one(&a), state.hash_one(&b));
    }

    /// Cash rounding lands on a multiple of the smallest denomination and is
    /// idempotent.
    #[test]
    fn prop_cash_rounding_idempotent(amount in fractional()) {
        let rounded = money(amount, "AED").round_to_nearest_cash_value().unwrap();
        prop_assert_eq!(rounded % 25, 0);
        let again = money(rounded, "AED").round_to_nearest_cash_value().unwrap();
        prop_assert_eq!(again, rounded);
    }

    /// Negating the input negates the cash-rounded output.
    #[test]
    fn prop_cash_rounding_sign_symmetric(amount in fractional()) {
        let positive = money(amount, "CHF").round_to_nearest_cash_value().unwrap();
        let negative = money(-amount, "CHF").round_to_nearest_cash_value().unwrap();
        prop_assert_eq!(negative, -positive);
    }

    /// Rendering is a pure function of the value and rules.
    #[test]
    fn prop_format_deterministic(amount in fractional(), code in currency_code()) {
        let value = money(amount, code);
        prop_assert_eq!(value.format(), value.format());
    }

    /// The major-unit amount scales back to the exact minor-unit count.
    #[test]
    fn prop_amount_is_exact(amount in fractional(), code in currency_code()) {
        let value = money(amount, code);
        let ratio = Decimal::from(value.currency().minor_unit.per_major);
        prop_assert_eq!(value.amount() * ratio, Decimal::from(amount));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// IQD's smallest note is 50000 fils.
    #[test]
    fn test_cash_rounding_large_denomination() {
        assert_eq!(
            money(120_000, "IQD").round_to_nearest_cash_value().unwrap(),
            100_000
        );
        assert_eq!(
            money(130_000, "IQD").round_to_nearest_cash_value().unwrap(),
            150_000
        );
    }

    #[test]
    fn test_cash_rounding_zero_stays_zero() {
        assert_eq!(money(0, "AED").round_to_nearest_cash_value().unwrap(), 0);
    }

    #[test]
    fn test_cash_rounding_negative_boundaries() {
        assert_eq!(money(-177, "CHF").round_to_nearest_cash_value().unwrap(), -175);
        assert_eq!(money(-178, "CHF").round_to_nearest_cash_value().unwrap(), -180);
    }
}
