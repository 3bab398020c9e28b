use std::str::FromStr;

use rust_decimal::{
    Decimal,
    RoundingStrategy,
};

use super::metrics::ValueKind;

pub const CURRENCY_SYMBOL: &str = "$";
const GROUP_SEPARATOR: char = ',';
const DECIMAL_PLACES: u32 = 2;
const INFINITY: &str = "∞";
const NOT_A_NUMBER: &str = "NaN";

/// Rounds the shortest decimal form of `magnitude` to two places, ties away
/// from zero (`2.125` -> `2.13`).
fn fixed_two_places(magnitude: f64) -> String {
    let shortest = magnitude.to_string();
    match Decimal::from_str(&shortest) {
        Ok(exact) => {
            let rounded =
                exact.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.2}", rounded)
        }
        // Past Decimal's range an f64 has no fractional digits left to round
        Err(_) if !shortest.contains('.') => format!("{shortest}.00"),
        Err(_) => format!("{:.2}", magnitude),
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats with comma thousands grouping and exactly two decimals
/// (`1234.5` -> `1,234.50`).
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return NOT_A_NUMBER.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}{INFINITY}");
    }

    let fixed = fixed_two_places(value.abs());
    match fixed.split_once('.') {
        Some((whole, fraction)) => format!("{sign}{}.{fraction}", group_thousands(whole)),
        None => format!("{sign}{}", group_thousands(&fixed)),
    }
}

/// The symbol is prepended to the already signed number, so a negative
/// return reads `$-80,000.00`.
pub fn format_currency(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_grouped(value))
}

pub fn format_value(value: f64, kind: ValueKind) -> String {
    match kind {
        ValueKind::Currency => format_currency(value),
        ValueKind::Number => format_grouped(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(90_000.0), "$90,000.00");
        assert_eq!(format_currency(1_000_000_000.0), "$1,000,000,000.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(-80_000.0), "$-80,000.00");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(5.0), "5.00");
        assert_eq!(format_grouped(123.456), "123.46");
        assert_eq!(format_grouped(1234.0), "1,234.00");
        assert_eq!(format_grouped(123_456.0), "123,456.00");
        assert_eq!(format_grouped(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_half_cent_ties_round_away_from_zero() {
        assert_eq!(format_grouped(0.125), "0.13");
        assert_eq!(format_grouped(2.125), "2.13");
        assert_eq!(format_grouped(-2.125), "-2.13");
        assert_eq!(format_currency(2.125), "$2.13");
        // Shortest form of 1.005 is a tie even though the binary value is below it
        assert_eq!(format_grouped(1.005), "1.01");
    }

    #[test]
    fn test_tiny_negative_keeps_sign() {
        assert_eq!(format_grouped(-0.001), "-0.00");
        assert_eq!(format_currency(-0.001), "$-0.00");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_grouped(f64::INFINITY), "∞");
        assert_eq!(format_currency(f64::INFINITY), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$-∞");
        assert_eq!(format_grouped(f64::NAN), "NaN");
    }

    #[test]
    fn test_values_beyond_decimal_range() {
        assert_eq!(format_grouped(1e30), "1,000,000,000,000,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_format_value_by_kind() {
        assert_eq!(format_value(5.0, ValueKind::Number), "5.00");
        assert_eq!(format_value(5.0, ValueKind::Currency), "$5.00");
    }
}
