//! Request parameter mappings and merge rules.
//!
//! Parameters are a flat mapping from string keys to JSON values. The
//! same shape serves as query-string options on reads and as the
//! request body on writes; the managers merge caller-supplied mappings
//! with the defaults each operation enforces.

use serde_json::{Map, Value};

/// Mapping of request parameters.
///
/// Backed by a map with deterministic key order, so merged parameters
/// serialize the same way on every call.
pub type Params = Map<String, Value>;

/// Build a parameter mapping from key/value pairs.
pub fn from_pairs<K, V, I>(pairs: I) -> Params
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Merge caller-supplied parameters with enforced defaults.
///
/// Hard contract: enforced defaults always win on key collision. The
/// managers rely on this to guarantee that operation-defining keys
/// (`expand`, `action`) cannot be overridden by a caller-supplied
/// mapping. Keys that do not collide pass through untouched.
#[must_use]
pub fn update_params(caller: Option<Params>, enforced: Params) -> Params {
    let mut merged = caller.unwrap_or_default();
    for (key, value) in enforced {
        merged.insert(key, value);
    }
    merged
}

/// Flatten a parameter mapping into query-string pairs.
///
/// Strings are used verbatim; any other value is rendered as JSON
/// (numbers and booleans come out bare).
#[must_use]
pub fn to_query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
