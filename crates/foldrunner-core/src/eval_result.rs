//! `EvalStateResult<S>` (spec §3).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An event emitted by the handler during `handle` (spec §4.5 `ok { ...
/// event? }`). Kept as a free-form JSON payload since its shape is defined
/// by each contract, not by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub interaction_id: String,
    pub payload: Value,
}

/// `{state, validity, error_messages, events?}` (spec §3).
///
/// `validity` and `error_messages` are `IndexMap`s rather than `HashMap`s
/// specifically to satisfy "insertion order is preserved for deterministic
/// serialization" (spec §3) — interactions are always inserted in ascending
/// sort-key order by the evaluator, so iteration order doubles as fold
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalStateResult<S> {
    pub state: S,
    pub validity: IndexMap<String, bool>,
    pub error_messages: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

impl<S> EvalStateResult<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            validity: IndexMap::new(),
            error_messages: IndexMap::new(),
            events: None,
        }
    }

    /// Records the outcome of folding interaction `id` (spec §4.7 step 6):
    /// `validity[id]` is always set; `error_messages[id]` only when invalid.
    pub fn record(&mut self, id: impl Into<String>, valid: bool, error_message: Option<String>) {
        let id = id.into();
        self.validity.insert(id.clone(), valid);
        if let Some(msg) = error_message {
            self.error_messages.insert(id, msg);
        }
    }

    pub fn push_event(&mut self, interaction_id: impl Into<String>, payload: Value) {
        self.events
            .get_or_insert_with(Vec::new)
            .push(Event { interaction_id: interaction_id.into(), payload });
    }

    pub fn map_state<T>(self, f: impl FnOnce(S) -> T) -> EvalStateResult<T> {
        EvalStateResult {
            state: f(self.state),
            validity: self.validity,
            error_messages: self.error_messages,
            events: self.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{from_canonical_json, to_canonical_json};

    #[test]
    fn record_sets_validity_and_conditionally_error_message() {
        let mut r = EvalStateResult::new(Value::Null);
        r.record("i1", true, None);
        r.record("i2", false, Some("bad input".into()));

        assert_eq!(r.validity.get("i1"), Some(&true));
        assert_eq!(r.validity.get("i2"), Some(&false));
        assert!(!r.error_messages.contains_key("i1"));
        assert_eq!(r.error_messages.get("i2").map(String::as_str), Some("bad input"));
    }

    #[test]
    fn insertion_order_is_preserved_across_interleaved_inserts() {
        let mut r = EvalStateResult::new(Value::Null);
        for id in ["c", "a", "b"] {
            r.record(id, true, None);
        }
        let order: Vec<&str> = r.validity.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn round_trips_under_both_codecs() {
        let mut r = EvalStateResult::new(serde_json::json!({"counter": 1}));
        r.record("i1", true, None);
        r.record("i2", false, Some("oops".into()));
        r.push_event("i1", serde_json::json!({"kind": "transfer"}));

        let json = to_canonical_json(&r).unwrap();
        let back: EvalStateResult<Value> = from_canonical_json(&json).unwrap();
        assert_eq!(back, r);

        let packed = crate::canonical::to_msgpack(&r).unwrap();
        let back2: EvalStateResult<Value> = crate::canonical::from_msgpack(&packed).unwrap();
        assert_eq!(back2, r);
    }
}
