//! Envelope normalization for API responses.
//!
//! The wire format nests resource data inside a `resources` wrapper
//! key (inlined with the `expand=resources` query flag). These helpers
//! strip that one envelope level so callers always see the resource
//! attributes directly, whether the server wrapped them or not.

use crate::error::{Error, Result};
use crate::params::Params;
use serde_json::Value;

const ENVELOPE_KEY: &str = "resources";

/// Normalize a single-resource response into a flat mapping.
///
/// When the payload carries a `resources` key holding an object, the
/// inner object is returned; otherwise the payload object itself is
/// returned unchanged in content.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the payload is not a JSON object.
pub fn normalize_object(raw: Value) -> Result<Params> {
    match raw {
        Value::Object(mut outer) => match outer.remove(ENVELOPE_KEY) {
            Some(Value::Object(inner)) => Ok(inner),
            Some(other) => {
                // `resources` held something that is not a nested
                // resource body; leave the payload intact.
                outer.insert(ENVELOPE_KEY.to_string(), other);
                Ok(outer)
            }
            None => Ok(outer),
        },
        other => Err(Error::ParseError(format!(
            "expected a JSON object, got: {other}"
        ))),
    }
}

/// Normalize a collection response into an ordered sequence of flat
/// mappings.
///
/// Accepts either a bare JSON array or an object wrapping the array
/// under `resources`; each element goes through [`normalize_object`].
/// Element order is preserved.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if no array of objects can be found.
pub fn normalize_collection(raw: Value) -> Result<Vec<Params>> {
    let elements = match raw {
        Value::Array(elements) => elements,
        Value::Object(mut outer) => match outer.remove(ENVELOPE_KEY) {
            Some(Value::Array(elements)) => elements,
            Some(other) => {
                return Err(Error::ParseError(format!(
                    "expected `{ENVELOPE_KEY}` to hold an array, got: {other}"
                )))
            }
            None => {
                return Err(Error::ParseError(format!(
                    "collection response is missing `{ENVELOPE_KEY}`"
                )))
            }
        },
        other => {
            return Err(Error::ParseError(format!(
                "expected a JSON array or object, got: {other}"
            )))
        }
    };

    elements.into_iter().map(normalize_object).collect()
}
