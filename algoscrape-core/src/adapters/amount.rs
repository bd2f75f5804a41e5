//! Amount decoding shared by both indexer payloads

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Deserialize a base-unit amount that can be an integer, an integral
/// float, or a numeric string
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: JsonValue = Deserialize::deserialize(deserializer)?;
    match value {
        JsonValue::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                    .map(|f| f as u64)
            })
            .ok_or_else(|| D::Error::custom(format!("invalid amount: {}", n))),
        JsonValue::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| D::Error::custom(format!("invalid amount '{}': {}", s, e))),
        _ => Err(D::Error::custom("expected number or string for amount")),
    }
}

/// An object whose only field of interest is `amount`
#[derive(Debug, Deserialize)]
pub(crate) struct AmountField {
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: JsonValue) -> std::result::Result<u64, serde_json::Error> {
        AmountField::deserialize(&json!({ "amount": value })).map(|f| f.amount)
    }

    #[test]
    fn test_integer_amount() {
        assert_eq!(decode(json!(1_000_000)).unwrap(), 1_000_000);
    }

    #[test]
    fn test_integral_float_amount() {
        assert_eq!(decode(json!(250.0)).unwrap(), 250);
    }

    #[test]
    fn test_string_amount() {
        assert_eq!(decode(json!(" 77 ")).unwrap(), 77);
    }

    #[test]
    fn test_rejects_fractional_and_negative() {
        assert!(decode(json!(1.5)).is_err());
        assert!(decode(json!(-3)).is_err());
        assert!(decode(json!("abc")).is_err());
        assert!(decode(json!(null)).is_err());
    }

    #[test]
    fn test_missing_amount_is_error() {
        assert!(AmountField::deserialize(&json!({})).is_err());
    }
}
