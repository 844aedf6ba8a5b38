//! Decimal rounding, validated parsing and display formatting for currency amounts.

use crate::error::CoreError;
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rounds half away from zero to `dp` decimal places.
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to whole currency units.
pub fn round_whole(value: Decimal) -> Decimal {
    round_dp(value, 0)
}

/// Rounds to one decimal place and pins the scale, so `25` displays as `25.0`.
pub fn one_decimal(value: Decimal) -> Decimal {
    let mut rounded = round_dp(value, 1);
    rounded.rescale(1);
    rounded
}

/// Converts an `f64` already rounded by the caller. Non-finite input becomes zero.
pub fn from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Relative change `(new - old) / old * 100`, to one decimal.
///
/// Returns `None` when `old` is zero and the ratio is undefined, or when the
/// ratio does not fit in a `Decimal`.
pub fn percent_change(new: Decimal, old: Decimal) -> Option<Decimal> {
    if old.is_zero() {
        return None;
    }
    let ratio = new.checked_sub(old)?.checked_div(old)?;
    ratio.checked_mul(dec!(100)).map(one_decimal)
}

/// Profit margin as a one-decimal percentage; `0.0` when revenue is zero or
/// the ratio overflows.
pub fn margin_pct(revenue: Decimal, expenses: Decimal) -> Decimal {
    revenue
        .checked_sub(expenses)
        .and_then(|profit| profit.checked_div(revenue))
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(one_decimal)
        .unwrap_or_else(|| one_decimal(Decimal::ZERO))
}

/// Largest amount accepted from a form. Amounts up to this bound with at
/// most [`AMOUNT_DP`] decimals survive the JSON number round-trip exactly.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// Decimal places accepted in a form amount.
pub const AMOUNT_DP: u32 = 2;

/// Parses a form-submitted currency amount.
///
/// Rejects empty, non-numeric and negative input, amounts above [`MAX_AMOUNT`]
/// and amounts with more than [`AMOUNT_DP`] decimals with `CoreError::Validation`.
pub fn parse_amount(field: &str, raw: &str) -> Result<Decimal, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            field.to_string(),
            "value is required".to_string(),
        ));
    }
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            CoreError::Validation(field.to_string(), format!("`{trimmed}` is not a number"))
        })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CoreError::Validation(
            field.to_string(),
            format!("`{trimmed}` must not be negative"),
        ));
    }
    let value = value.normalize();
    if value > MAX_AMOUNT {
        return Err(CoreError::Validation(
            field.to_string(),
            format!("`{trimmed}` exceeds the maximum of {MAX_AMOUNT}"),
        ));
    }
    if value.scale() > AMOUNT_DP {
        return Err(CoreError::Validation(
            field.to_string(),
            format!("`{trimmed}` has more than {AMOUNT_DP} decimal places"),
        ));
    }
    Ok(value)
}

/// Serde adapter writing amounts as JSON numbers that read back to the same
/// `Decimal`.
///
/// Both directions go through the shortest decimal text of the `f64`, so any
/// value with at most 15 significant digits is preserved exactly.
pub mod json_number {
    use rust_decimal::Decimal;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let number = f64::from_str(&value.to_string())
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_f64(number)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let number = f64::deserialize(deserializer)?;
        if !number.is_finite() {
            return Err(de::Error::custom("amount is not a finite number"));
        }
        Decimal::from_str(&number.to_string())
            .map(|d| d.normalize())
            .map_err(de::Error::custom)
    }
}

/// Parses a form-submitted calendar year.
pub fn parse_year(raw: &str) -> Result<i32, CoreError> {
    let trimmed = raw.trim();
    let year = trimmed.parse::<i32>().map_err(|_| {
        CoreError::Validation("year".to_string(), format!("`{trimmed}` is not a year"))
    })?;
    if !(1..=9999).contains(&year) {
        return Err(CoreError::Validation(
            "year".to_string(),
            format!("{year} is outside 1..=9999"),
        ));
    }
    Ok(year)
}

/// Formats an amount with a `$` prefix: `$1.5M`, `$45K`, `$500`.
pub fn format_currency(value: Decimal) -> String {
    format_scaled(value, "$")
}

/// Same thresholds as [`format_currency`] without the currency prefix.
pub fn format_number(value: Decimal) -> String {
    format_scaled(value, "")
}

fn format_scaled(value: Decimal, prefix: &str) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = value.abs();
    let body = if abs >= dec!(1_000_000) {
        format!("{}M", one_decimal(abs / dec!(1_000_000)))
    } else if abs >= dec!(1_000) {
        format!("{}K", round_whole(abs / dec!(1_000)).normalize())
    } else {
        round_whole(abs).normalize().to_string()
    };
    format!("{sign}{prefix}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_thresholds() {
        assert_eq!(format_currency(dec!(1500000)), "$1.5M");
        assert_eq!(format_currency(dec!(45000)), "$45K");
        assert_eq!(format_currency(dec!(500)), "$500");
        assert_eq!(format_currency(dec!(2000000)), "$2.0M");
        assert_eq!(format_currency(dec!(1500)), "$2K");
        assert_eq!(format_currency(dec!(0)), "$0");
    }

    #[test]
    fn negative_amounts_keep_sign_outside_prefix() {
        assert_eq!(format_currency(dec!(-5000)), "-$5K");
        assert_eq!(format_number(dec!(-250.4)), "-250");
    }

    #[test]
    fn number_has_no_prefix() {
        assert_eq!(format_number(dec!(1234567)), "1.2M");
        assert_eq!(format_number(dec!(999)), "999");
    }

    #[test]
    fn percent_change_guards_zero_baseline() {
        assert_eq!(percent_change(dec!(110), dec!(100)), Some(dec!(10.0)));
        assert_eq!(percent_change(dec!(90), dec!(120)), Some(dec!(-25.0)));
        assert_eq!(percent_change(dec!(5), dec!(0)), None);
    }

    #[test]
    fn one_decimal_pins_scale() {
        assert_eq!(one_decimal(dec!(25)).to_string(), "25.0");
        assert_eq!(one_decimal(dec!(2.25)).to_string(), "2.3");
        assert_eq!(one_decimal(dec!(-2.25)).to_string(), "-2.3");
    }

    #[test]
    fn margin_with_zero_revenue_is_zero() {
        assert_eq!(margin_pct(dec!(0), dec!(100)).to_string(), "0.0");
        assert_eq!(margin_pct(dec!(120000), dec!(75000)).to_string(), "37.5");
    }

    #[test]
    fn parse_amount_validates() {
        assert_eq!(parse_amount("revenue", " 120000 ").unwrap(), dec!(120000));
        assert_eq!(parse_amount("revenue", "75000.50").unwrap(), dec!(75000.5));
        assert!(matches!(
            parse_amount("revenue", "abc"),
            Err(CoreError::Validation(field, _)) if field == "revenue"
        ));
        assert!(parse_amount("expenditure", "-1").is_err());
        assert!(parse_amount("expenditure", "").is_err());
        assert!(parse_amount("expenditure", "NaN").is_err());
    }

    #[test]
    fn parse_amount_bounds_size_and_precision() {
        assert_eq!(parse_amount("revenue", "1000000000000").unwrap(), MAX_AMOUNT);
        assert_eq!(parse_amount("revenue", "999999999999.99").unwrap(), dec!(999999999999.99));
        assert_eq!(parse_amount("revenue", "12.50").unwrap(), dec!(12.5));
        assert!(parse_amount("revenue", "1000000000000.01").is_err());
        assert!(parse_amount("revenue", "79228162514264337593543950335").is_err());
        assert!(parse_amount("expenditure", "0.0000000000000000000000000001").is_err());
        assert!(parse_amount("expenditure", "0.001").is_err());
    }

    #[test]
    fn ratios_that_overflow_fall_back() {
        assert_eq!(percent_change(Decimal::MAX, dec!(0.0000000000000000000000000001)), None);
        assert_eq!(
            margin_pct(dec!(0.0000000000000000000000000001), Decimal::MAX).to_string(),
            "0.0"
        );
    }

    #[test]
    fn json_number_round_trips_bounded_amounts() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Wrapper(#[serde(with = "json_number")] Decimal);

        for value in [MAX_AMOUNT, dec!(999999999999.99), dec!(0.01), dec!(75000.5), dec!(0)] {
            let json = serde_json::to_string(&Wrapper(value)).unwrap();
            let back: Wrapper = serde_json::from_str(&json).unwrap();
            assert_eq!(back.0, value, "{json}");
        }
        assert_eq!(serde_json::to_string(&Wrapper(dec!(500))).unwrap(), "500.0");
        let from_int: Wrapper = serde_json::from_str("1200").unwrap();
        assert_eq!(from_int.0, dec!(1200));
    }

    #[test]
    fn parse_year_validates() {
        assert_eq!(parse_year("2026").unwrap(), 2026);
        assert!(parse_year("twenty").is_err());
        assert!(parse_year("0").is_err());
    }
}
