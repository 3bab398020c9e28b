use std::sync::LazyLock;

use regex::Regex;

static AMOUNT_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[$,]").expect("static pattern is valid"));

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("static pattern is valid")
});

/// The five text fields the calculator reads. Identifiers double as the
/// persistence key suffix, so they must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    Valuation,
    DilutedShares,
    Revenue,
    Shares,
    StrikePrice,
}

impl InputId {
    pub const ALL: [InputId; 5] = [
        InputId::Valuation,
        InputId::DilutedShares,
        InputId::Revenue,
        InputId::Shares,
        InputId::StrikePrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputId::Valuation => "valuation",
            InputId::DilutedShares => "num-diluted-shares",
            InputId::Revenue => "revenue",
            InputId::Shares => "num-shares",
            InputId::StrikePrice => "strike-price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputId::Valuation => "Company valuation",
            InputId::DilutedShares => "Fully diluted shares",
            InputId::Revenue => "Annual revenue",
            InputId::Shares => "Your shares",
            InputId::StrikePrice => "Your strike price",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            InputId::Valuation => "$10,000,000",
            InputId::DilutedShares => "1,000,000",
            InputId::Revenue => "$2,000,000",
            InputId::Shares => "10,000",
            InputId::StrikePrice => "$1.00",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            InputId::Valuation => 0,
            InputId::DilutedShares => 1,
            InputId::Revenue => 2,
            InputId::Shares => 3,
            InputId::StrikePrice => 4,
        }
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses user text such as `$1,234.56` into a number.
///
/// After dropping `$` and `,` the longest leading number is read, so
/// `10,000 shares` is `10000`. Text with no leading number, and numbers too
/// large for an `f64`, become `0.0`, which the calculation gate treats as
/// missing.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned = AMOUNT_NOISE.replace_all(raw, "");
    let Some(number) = LEADING_NUMBER.find(cleaned.trim_start()) else {
        return 0.0;
    };
    match number.as_str().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parsed snapshot of the five inputs at the moment of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputValues {
    pub valuation: f64,
    pub diluted_shares: f64,
    pub revenue: f64,
    pub shares: f64,
    pub strike_price: f64,
}

impl InputValues {
    /// Reads every field through `raw`; a field `raw` knows nothing about
    /// parses as zero.
    pub fn from_raw<'a, F>(mut raw: F) -> Self
    where
        F: FnMut(InputId) -> Option<&'a str>,
    {
        let mut read = |id: InputId| raw(id).map(parse_amount).unwrap_or(0.0);
        Self {
            valuation: read(InputId::Valuation),
            diluted_shares: read(InputId::DilutedShares),
            revenue: read(InputId::Revenue),
            shares: read(InputId::Shares),
            strike_price: read(InputId::StrikePrice),
        }
    }

    pub fn get(&self, id: InputId) -> f64 {
        match id {
            InputId::Valuation => self.valuation,
            InputId::DilutedShares => self.diluted_shares,
            InputId::Revenue => self.revenue,
            InputId::Shares => self.shares,
            InputId::StrikePrice => self.strike_price,
        }
    }

    pub fn set(&mut self, id: InputId, value: f64) {
        match id {
            InputId::Valuation => self.valuation = value,
            InputId::DilutedShares => self.diluted_shares = value,
            InputId::Revenue => self.revenue = value,
            InputId::Shares => self.shares = value,
            InputId::StrikePrice => self.strike_price = value,
        }
    }

    /// True when every field holds a non-zero number.
    pub fn is_complete(&self) -> bool {
        InputId::ALL.iter().all(|&id| self.get(id) != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56"), 1234.56);
        assert_eq!(parse_amount("1000000"), 1_000_000.0);
        assert_eq!(parse_amount("  $10,000,000  "), 10_000_000.0);
        assert_eq!(parse_amount("-3.5"), -3.5);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("7."), 7.0);
    }

    #[test]
    fn test_parse_amount_reads_leading_number() {
        assert_eq!(parse_amount("10,000 shares"), 10_000.0);
        assert_eq!(parse_amount("100 USD"), 100.0);
        assert_eq!(parse_amount("5%"), 5.0);
        assert_eq!(parse_amount("1.5.2"), 1.5);
        assert_eq!(parse_amount("2e"), 2.0);
        assert_eq!(parse_amount("  $3,000abc"), 3_000.0);
    }

    #[test]
    fn test_parse_amount_soft_failure() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("$"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("shares: 12"), 0.0);
        assert_eq!(parse_amount("1e400"), 0.0);
    }

    #[test]
    fn test_input_ids_are_fixed() {
        let ids: Vec<&str> = InputId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["valuation", "num-diluted-shares", "revenue", "num-shares", "strike-price"]
        );
        for (position, id) in InputId::ALL.iter().enumerate() {
            assert_eq!(id.index(), position);
        }
    }

    #[test]
    fn test_from_raw_missing_fields_are_zero() {
        let values = InputValues::from_raw(|id| match id {
            InputId::Valuation => Some("$5,000"),
            InputId::Revenue => Some("oops"),
            _ => None,
        });
        assert_eq!(values.valuation, 5000.0);
        assert_eq!(values.revenue, 0.0);
        assert_eq!(values.shares, 0.0);
        assert!(!values.is_complete());
    }
}
