/*
[INPUT]:  Loosely typed JSON scalars from API responses
[OUTPUT]: serde deserializers tolerant of number-or-string encodings
[POS]:    Data layer - shared serde helpers for models
[UPDATE]: When the API changes scalar encodings
*/

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept `12`, `"12"` or `null` as `Option<u64>`
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Accept `12`, `12.0`, `"12"` or `null` as `Option<i64>`; fractions read as `None`
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && float.abs() < i64::MAX as f64)
                .map(|float| float as i64)
        }),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Accept `true`, `"true"`, `1` or `null` as `Option<bool>`
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => Some(flag),
        Some(Value::Number(number)) => number.as_i64().map(|n| n != 0),
        Some(Value::String(text)) => match text.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Treat an explicit `null` like a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_i64")]
        amount: Option<i64>,
        #[serde(default, deserialize_with = "lenient_bool")]
        active: Option<bool>,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn lenient_scalars() {
        let sample: Sample = serde_json::from_value(json!({ "amount": "5000", "active": 1 }))
            .expect("sample should deserialize");
        assert_eq!(sample.amount, Some(5000));
        assert_eq!(sample.active, Some(true));

        let sample: Sample = serde_json::from_value(json!({})).expect("empty sample");
        assert_eq!(sample.amount, None);
        assert_eq!(sample.active, None);
    }

    #[test]
    fn null_list_reads_as_empty() {
        let sample: Sample = serde_json::from_value(json!({ "tags": null })).expect("null tags");
        assert!(sample.tags.is_empty());

        let sample: Sample = serde_json::from_value(json!({ "tags": ["a"] })).expect("tags");
        assert_eq!(sample.tags, vec!["a".to_string()]);
    }

    #[rstest]
    #[case(json!(5000.0), Some(5000))]
    #[case(json!(100.7), None)]
    #[case(json!(-0.5), None)]
    #[case(json!(1e300), None)]
    fn float_amounts_are_not_truncated(#[case] amount: Value, #[case] expected: Option<i64>) {
        let sample: Sample =
            serde_json::from_value(json!({ "amount": amount })).expect("sample should deserialize");
        assert_eq!(sample.amount, expected);
    }
}
