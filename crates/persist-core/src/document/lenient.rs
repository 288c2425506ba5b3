//! Lenient field decoders for hand-produced import documents.
//!
//! Extraction scripts are inconsistent about scalar types: `"rpe": 8` and
//! `"rpe": "8"` both occur. Text fields accept any scalar, integer fields
//! accept numbers and numeric strings, and `null` always means "absent".

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use schemars::JsonSchema;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

/// Schema stand-in for fields decoded by [`opt_text`] / [`text`].
#[derive(JsonSchema)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Flag(bool),
}

/// Schema stand-in for a name-keyed map decoded by [`ordered_map`].
pub type NamedMap<T> = BTreeMap<String, T>;

fn scalar_to_text<E: de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!("expected a scalar, found {other}"))),
    }
}

/// Optional text accepting strings, numbers, and booleans.
///
/// # Errors
///
/// Fails when the value is an array or object.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_text(value)
}

/// Required text accepting strings, numbers, and booleans.
///
/// # Errors
///
/// Fails on `null`, arrays, and objects.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_text(value)?.ok_or_else(|| de::Error::custom("expected a value, found null"))
}

/// Optional integer accepting numbers and numeric strings.
///
/// # Errors
///
/// Fails on non-numeric strings, fractional numbers, arrays, and objects.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected an integer, found {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected an integer, found \"{s}\""))),
        other => Err(de::Error::custom(format!("expected an integer, found {other}"))),
    }
}

/// A sequence, where anything other than an array decodes as empty.
///
/// Used for soft substructures whose absence is reported as a warning.
///
/// # Errors
///
/// Fails when an element of a present array does not decode as `T`.
pub fn seq_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).map_err(de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// A JSON object decoded into `(key, value)` pairs in document order.
///
/// # Errors
///
/// Fails when the value is not an object or an entry does not decode as `T`.
pub fn ordered_map<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object keyed by name")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, T>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_text")]
        rpe: Option<String>,
        #[serde(default, deserialize_with = "opt_int")]
        rounds: Option<i64>,
        #[serde(default, deserialize_with = "seq_or_empty")]
        items: Vec<u32>,
        #[serde(default, deserialize_with = "ordered_map")]
        named: Vec<(String, u32)>,
    }

    #[test]
    fn scalars_become_text() {
        let p: Probe = serde_json::from_value(json!({"rpe": 8})).unwrap();
        assert_eq!(p.rpe.as_deref(), Some("8"));
        let p: Probe = serde_json::from_value(json!({"rpe": "7-8"})).unwrap();
        assert_eq!(p.rpe.as_deref(), Some("7-8"));
        let p: Probe = serde_json::from_value(json!({"rpe": null})).unwrap();
        assert_eq!(p.rpe, None);
    }

    #[test]
    fn text_rejects_objects() {
        let err = serde_json::from_value::<Probe>(json!({"rpe": {"a": 1}}));
        assert!(err.is_err());
    }

    #[test]
    fn numeric_strings_become_ints() {
        let p: Probe = serde_json::from_value(json!({"rounds": "3"})).unwrap();
        assert_eq!(p.rounds, Some(3));
        let p: Probe = serde_json::from_value(json!({"rounds": 4})).unwrap();
        assert_eq!(p.rounds, Some(4));
        assert!(serde_json::from_value::<Probe>(json!({"rounds": "three"})).is_err());
    }

    #[test]
    fn non_array_sequence_is_empty() {
        let p: Probe = serde_json::from_value(json!({"items": {"x": 1}})).unwrap();
        assert!(p.items.is_empty());
        let p: Probe = serde_json::from_value(json!({"items": [1, 2]})).unwrap();
        assert_eq!(p.items, vec![1, 2]);
    }

    #[test]
    fn ordered_map_keeps_document_order() {
        let p: Probe =
            serde_json::from_value(json!({"named": {"zeta": 1, "alpha": 2, "mid": 3}})).unwrap();
        let keys: Vec<&str> = p.named.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
