use serde_json::{Map, Value};

/// Deep-merge `incoming` into `existing` and return the merged catalog.
///
/// For every key in `incoming`:
/// - when both sides hold objects, they are merged recursively;
/// - otherwise the incoming value replaces the existing one. Arrays are
///   replaced as a whole, never concatenated.
///
/// Keys only present in `existing` are kept. Replaced keys keep their
/// position; new keys are appended in `incoming` order.
///
/// `existing` is consumed, so callers always continue with the returned map.
pub fn merge_deep(mut existing: Map<String, Value>, incoming: Map<String, Value>) -> Map<String, Value> {
    for (key, incoming_value) in incoming {
        match (existing.entry(key).or_insert(Value::Null), incoming_value) {
            (Value::Object(current), Value::Object(nested)) => {
                let taken = std::mem::take(current);
                *current = merge_deep(taken, nested);
            }
            (slot, value) => *slot = value,
        }
    }
    existing
}
