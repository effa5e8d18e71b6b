//! Canonical serialization (spec §9 "Determinism of serialization").
//!
//! Cross-implementation cache comparability requires that two engines
//! computing the same `EvalStateResult` produce byte-identical output. JSON
//! object key order is not guaranteed stable by `serde_json` once
//! `preserve_order` is enabled (insertion order is preserved, not sorted),
//! so canonical JSON here means: sort every object's keys recursively
//! before printing, and use `serde_json`'s default (non-pretty) number
//! formatting, which is already stable.

use crate::error::FoldResult;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Serializes `value` to canonical JSON: object keys sorted recursively,
/// compact (no extraneous whitespace) formatting.
pub fn to_canonical_json<T: Serialize>(value: &T) -> FoldResult<String> {
    let mut v = serde_json::to_value(value)?;
    sort_keys(&mut v);
    Ok(serde_json::to_string(&v)?)
}

/// Deserializes canonical (or any valid) JSON produced by
/// [`to_canonical_json`].
pub fn from_canonical_json<T: DeserializeOwned>(data: &str) -> FoldResult<T> {
    Ok(serde_json::from_str(data)?)
}

/// Encodes `value` as MessagePack, for the guest/host bridge when
/// `wasm_serialization_format = "msgpack"` (spec §6).
pub fn to_msgpack<T: Serialize>(value: &T) -> FoldResult<Vec<u8>> {
    Ok(rmp_serde::to_vec(value)?)
}

/// Decodes MessagePack produced by [`to_msgpack`].
pub fn from_msgpack<T: DeserializeOwned>(data: &[u8]) -> FoldResult<T> {
    Ok(rmp_serde::from_slice(data)?)
}

fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, v) in entries.iter_mut() {
                sort_keys(v);
            }
            map.extend(entries);
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                sort_keys(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_keys_are_sorted_regardless_of_insertion_order() {
        let v = json!({"b": 1, "a": 2, "c": {"z": 1, "y": 2}});
        let out = to_canonical_json(&v).unwrap();
        assert_eq!(out, r#"{"a":2,"b":1,"c":{"y":2,"z":1}}"#);
    }

    #[test]
    fn json_round_trip_preserves_value() {
        let v = json!({"balances": {"w": 10, "x": 20}, "counter": 5});
        let encoded = to_canonical_json(&v).unwrap();
        let decoded: Value = from_canonical_json(&encoded).unwrap();
        assert_eq!(decoded, v);
    }

    #[test]
    fn msgpack_round_trip_preserves_value() {
        let v = json!({"balances": {"w": 10, "x": 20}, "counter": 5});
        let encoded = to_msgpack(&v).unwrap();
        let decoded: Value = from_msgpack(&encoded).unwrap();
        assert_eq!(decoded, v);
    }
}
