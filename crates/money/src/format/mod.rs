//! Locale-aware rendering of money values.
//!
//! Rendering is a pure function of the amount, the currency's formatting
//! metadata, and the per-call [`FormatRules`] overrides. The pipeline:
//! resolve the effective symbol, pick the fraction digit count, decompose
//! the minor-unit count exactly into whole and fractional parts, group the
//! whole part, then lay the pieces out per the positive/negative pattern.

pub mod position;
pub mod rules;

pub use position::{NegativePosition, PositivePosition};
pub use rules::FormatRules;

use crate::currency::Currency;
use crate::money::Money;

/// Renders a money value as a display string.
#[must_use]
pub fn format(money: &Money, rules: &FormatRules) -> String {
    let currency = money.currency();
    let symbol = effective_symbol(currency, rules);
    let number = render_number(money, rules);

    if money.is_negative() {
        let position = rules
            .negative_position
            .unwrap_or(currency.format.negative_position);
        signed_layout(position, symbol, &number, '-')
    } else if rules.show_positive_sign && money.is_positive() {
        let position = rules
            .negative_position
            .unwrap_or(currency.format.negative_position);
        if position.is_parenthesized() {
            // Parenthesized layouts have no sign slot to reuse.
            let positive = rules
                .positive_position
                .unwrap_or(currency.format.positive_position);
            let mut out = String::from('+');
            out.push_str(&positive_layout(positive, symbol, &number));
            out
        } else {
            signed_layout(position, symbol, &number, '+')
        }
    } else {
        let position = rules
            .positive_position
            .unwrap_or(currency.format.positive_position);
        positive_layout(position, symbol, &number)
    }
}

fn effective_symbol<'a>(currency: &'a Currency, rules: &FormatRules) -> &'a str {
    if !rules.show_symbol {
        return "";
    }
    if rules.disambiguate {
        if let Some(symbol) = currency.disambiguation_symbol.as_deref() {
            return symbol;
        }
    }
    currency.symbol()
}

/// Grouped whole part plus, when applicable, separator and padded fraction.
fn render_number(money: &Money, rules: &FormatRules) -> String {
    let currency = money.currency();
    let per_major = u64::from(currency.minor_unit.per_major.max(1));
    let magnitude = money.fractional().unsigned_abs();
    let units = magnitude / per_major;
    let fraction = magnitude % per_major;

    let mut digits = if rules.no_cents { 0 } else { currency.exponent() };
    if fraction == 0 && (rules.no_cents_if_whole || rules.drop_trailing_zeros) {
        digits = 0;
    }

    let mut number = group_digits(&units.to_string(), &currency.format.group_separator);
    if digits > 0 {
        number.push_str(&currency.format.decimal_separator);
        number.push_str(&format!("{fraction:0>width$}", width = digits as usize));
    }
    number
}

/// Inserts the group separator at every thousand boundary, regardless of
/// magnitude.
fn group_digits(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() * 2);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

/// Lead fragment `"{symbol} "` that vanishes with its padding when the
/// symbol is suppressed.
fn lead(symbol: &str) -> String {
    if symbol.is_empty() {
        String::new()
    } else {
        format!("{symbol} ")
    }
}

/// Trail fragment `" {symbol}"`, same suppression behavior as [`lead`].
fn trail(symbol: &str) -> String {
    if symbol.is_empty() {
        String::new()
    } else {
        format!(" {symbol}")
    }
}

fn positive_layout(position: PositivePosition, symbol: &str, number: &str) -> String {
    match position {
        PositivePosition::Before => format!("{symbol}{number}"),
        PositivePosition::After => format!("{number}{symbol}"),
        PositivePosition::BeforeWithSpace => format!("{}{number}", lead(symbol)),
        PositivePosition::AfterWithSpace => format!("{number}{}", trail(symbol)),
    }
}

fn signed_layout(
    position: NegativePosition,
    symbol: &str,
    number: &str,
    sign: char,
) -> String {
    match position {
        NegativePosition::Zero => format!("({symbol}{number})"),
        NegativePosition::One => format!("{sign}{symbol}{number}"),
        NegativePosition::Two => format!("{symbol}{sign}{number}"),
        NegativePosition::Three => format!("{symbol}{number}{sign}"),
        NegativePosition::Four => format!("({number}{symbol})"),
        NegativePosition::Five => format!("{sign}{number}{symbol}"),
        NegativePosition::Six => format!("{number}{sign}{symbol}"),
        NegativePosition::Seven => format!("{number}{symbol}{sign}"),
        NegativePosition::Eight => format!("{sign}{number}{}", trail(symbol)),
        NegativePosition::Nine => format!("{sign}{}{number}", lead(symbol)),
        NegativePosition::Ten => format!("{number}{}{sign}", trail(symbol)),
        NegativePosition::Eleven => format!("{}{number}{sign}", lead(symbol)),
        NegativePosition::Twelve => format!("{}{sign}{number}", lead(symbol)),
        NegativePosition::Thirteen => format!("{number}{sign}{}", trail(symbol)),
        NegativePosition::Fourteen => format!("({}{number})", lead(symbol)),
        NegativePosition::Fifteen => format!("({number}{})", trail(symbol)),
    }
}
