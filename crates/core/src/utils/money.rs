//! Tolerant monetary parsing.
//!
//! The backing store returns monetary columns as text to preserve precision,
//! and imported data may carry native numbers, numeric strings, or nulls.
//! Every amount goes through these helpers before arithmetic: a dashboard
//! that undercounts renders, a dashboard that panics does not.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Parses a string into a Decimal, with a fallback for scientific notation
/// by parsing as f64 first. Unparseable input yields zero.
pub fn parse_amount(value_str: &str) -> Decimal {
    match Decimal::from_str(value_str.trim()) {
        Ok(d) => d,
        Err(_) => match f64::from_str(value_str.trim()) {
            Ok(f_val) if f_val.is_finite() => match Decimal::from_f64(f_val) {
                Some(dec_val) => dec_val,
                None => {
                    log::warn!("Amount '{}' out of Decimal range, using zero", value_str);
                    Decimal::ZERO
                }
            },
            _ => {
                log::warn!("Unparseable amount '{}', using zero", value_str);
                Decimal::ZERO
            }
        },
    }
}

/// Parses an optional text money column, treating NULL as zero.
pub fn parse_optional_amount(raw: Option<&str>) -> Decimal {
    raw.map(parse_amount).unwrap_or(Decimal::ZERO)
}

/// Coerces a loosely-typed JSON value into a finite Decimal.
///
/// Accepts native numbers, numeric strings, and null/missing values.
/// Anything unparseable coerces to zero; this function never fails.
pub fn coerce_amount(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .and_then(Decimal::from_f64)
            .unwrap_or(Decimal::ZERO),
        Value::String(s) => parse_amount(s),
        _ => Decimal::ZERO,
    }
}

/// Deserializes a money field from loose input (number or numeric string).
///
/// Input models use this so form payloads may send amounts either way;
/// unparseable input coerces to zero rather than rejecting the payload.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

/// Deserializes an optional money field from loose input.
///
/// Null and missing stay `None` so "no explicit amount" survives the
/// coercion; anything else goes through [`coerce_amount`].
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(coerce_amount(&v)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("12.5"), dec!(12.5));
        assert_eq!(parse_amount("  1200 "), dec!(1200));
        assert_eq!(parse_amount("-40.25"), dec!(-40.25));
    }

    #[test]
    fn test_parse_amount_scientific_notation() {
        assert_eq!(parse_amount("1.5e3"), dec!(1500));
    }

    #[test]
    fn test_parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("NaN"), Decimal::ZERO);
        assert_eq!(parse_amount("inf"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_optional_amount() {
        assert_eq!(parse_optional_amount(Some("99.99")), dec!(99.99));
        assert_eq!(parse_optional_amount(None), Decimal::ZERO);
    }

    #[test]
    fn test_coerce_amount_number() {
        assert_eq!(coerce_amount(&json!(12.5)), dec!(12.5));
        assert_eq!(coerce_amount(&json!(0)), Decimal::ZERO);
    }

    #[test]
    fn test_coerce_amount_numeric_string() {
        assert_eq!(coerce_amount(&json!("12.5")), dec!(12.5));
    }

    #[test]
    fn test_coerce_amount_null_and_garbage() {
        assert_eq!(coerce_amount(&Value::Null), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!("abc")), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!({"nested": true})), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_amount_accepts_numbers_and_strings() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(deserialize_with = "super::deserialize_amount")]
            amount: Decimal,
            #[serde(default, deserialize_with = "super::deserialize_optional_amount")]
            total: Option<Decimal>,
        }

        let p: Payload = serde_json::from_value(json!({"amount": "12.5"})).unwrap();
        assert_eq!(p.amount, dec!(12.5));
        assert_eq!(p.total, None);

        let p: Payload = serde_json::from_value(json!({"amount": 3, "total": "99"})).unwrap();
        assert_eq!(p.amount, dec!(3));
        assert_eq!(p.total, Some(dec!(99)));

        let p: Payload =
            serde_json::from_value(json!({"amount": "garbage", "total": null})).unwrap();
        assert_eq!(p.amount, Decimal::ZERO);
        assert_eq!(p.total, None);
    }
}
