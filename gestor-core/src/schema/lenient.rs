//! Forgiving deserializers for storage fields.
//!
//! The backend is not strict about JSON types: amounts arrive as numbers or
//! numeric strings, ids as strings or integers, flags as booleans or 0/1.
//! Anything that cannot be read is treated as absent; the mapper then
//! applies the field's default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

pub fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Free text that the backend sometimes stores as a number (NIF, phone).
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "sim" => Some(true),
            "false" | "0" | "nao" | "não" => Some(false),
            _ => None,
        },
        _ => None,
    }))
}

/// A list of nested rows. A value that is not a list is absent, and
/// elements that cannot be read are dropped.
pub fn items<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(rows)) => Some(
            rows.into_iter()
                .filter_map(|row| serde_json::from_value(row).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "super::number")]
        amount: Option<f64>,
        #[serde(deserialize_with = "super::integer")]
        count: Option<i64>,
        #[serde(deserialize_with = "super::id")]
        id: Option<String>,
        #[serde(deserialize_with = "super::text")]
        nif: Option<String>,
        #[serde(deserialize_with = "super::flag")]
        on: Option<bool>,
        #[serde(deserialize_with = "super::items")]
        lines: Option<Vec<Line>>,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Line {
        qty: i64,
    }

    fn row(value: serde_json::Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numbers_from_strings_and_numbers() {
        assert_eq!(row(json!({"amount": "1250.50"})).amount, Some(1250.5));
        assert_eq!(row(json!({"amount": 3})).amount, Some(3.0));
        assert_eq!(row(json!({"amount": "abc"})).amount, None);
        assert_eq!(row(json!({"amount": null})).amount, None);
        assert_eq!(row(json!({})).amount, None);
    }

    #[test]
    fn test_integer_truncates_floats() {
        assert_eq!(row(json!({"count": 7.9})).count, Some(7));
        assert_eq!(row(json!({"count": "12"})).count, Some(12));
    }

    #[test]
    fn test_ids_accept_numbers() {
        assert_eq!(row(json!({"id": 42})).id.as_deref(), Some("42"));
        assert_eq!(row(json!({"id": "  "})).id, None);
    }

    #[test]
    fn test_text_keeps_numeric_nif() {
        assert_eq!(row(json!({"nif": 5417000001u64})).nif.as_deref(), Some("5417000001"));
        assert_eq!(row(json!({"nif": ""})).nif.as_deref(), Some(""));
    }

    #[test]
    fn test_flags() {
        assert_eq!(row(json!({"on": 1})).on, Some(true));
        assert_eq!(row(json!({"on": "false"})).on, Some(false));
        assert_eq!(row(json!({"on": "talvez"})).on, None);
    }

    #[test]
    fn test_items_tolerate_junk() {
        assert_eq!(row(json!({"lines": null})).lines, None);
        assert_eq!(row(json!({"lines": "nenhum"})).lines, None);
        assert_eq!(
            row(json!({"lines": [{"qty": 2}, 5, {"qty": 3}]})).lines,
            Some(vec![Line { qty: 2 }, Line { qty: 3 }])
        );
    }
}
