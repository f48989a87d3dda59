//! Strict decimal parsing for configuration values.
//!
//! Numbers that cannot be held exactly by a [`Decimal`] (more than 28
//! fractional digits, or beyond its 96-bit range) are rejected rather than
//! rounded, so a sweep point never silently collapses to zero.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

struct ExactDecimal(Decimal);

struct ExactDecimalVisitor;

impl<'de> Visitor<'de> for ExactDecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number representable as an exact decimal")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("{v:?} is not a finite number")));
        }
        // `Display` prints the shortest round-trip digits without an exponent.
        Decimal::from_str_exact(&v.to_string())
            .map_err(|e| E::custom(format!("{v:?} cannot be represented exactly: {e}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Decimal::from_str_exact(v)
            .map_err(|e| E::custom(format!("{v:?} cannot be represented exactly: {e}")))
    }
}

impl<'de> Deserialize<'de> for ExactDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(ExactDecimalVisitor)
            .map(ExactDecimal)
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    ExactDecimal::deserialize(deserializer).map(|v| v.0)
}

pub fn deserialize_vec<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Decimal>, D::Error> {
    Vec::<ExactDecimal>::deserialize(deserializer).map(|v| v.into_iter().map(|d| d.0).collect())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sweep {
        #[serde(deserialize_with = "deserialize_vec")]
        values: Vec<Decimal>,
        #[serde(deserialize_with = "deserialize")]
        scalar: Decimal,
    }

    fn parse(json: &str) -> serde_json::Result<Sweep> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_exact_values() {
        let sweep = parse(r#"{"values": [50, 50.0, 0.1, 1e-20, 12.5], "scalar": 1.1}"#).unwrap();
        assert_eq!(
            sweep.values,
            vec![
                dec!(50),
                dec!(50),
                dec!(0.1),
                dec!(0.00000000000000000001),
                dec!(12.5)
            ]
        );
        assert_eq!(sweep.scalar, dec!(1.1));
    }

    #[test]
    fn test_too_many_fractional_digits() {
        let err = parse(r#"{"values": [50.0, 1e-30], "scalar": 1}"#).unwrap_err();
        assert!(err.to_string().contains("cannot be represented exactly"));
    }

    #[test]
    fn test_out_of_range() {
        let err = parse(r#"{"values": [1e30], "scalar": 1}"#).unwrap_err();
        assert!(err.to_string().contains("cannot be represented exactly"));
    }

    #[test]
    fn test_non_number() {
        assert!(parse(r#"{"values": [true], "scalar": 1}"#).is_err());
    }
}
