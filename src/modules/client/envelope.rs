//! Response envelope tolerance.
//!
//! Most endpoints answer `{ success, <name>: ... }`, some list endpoints answer
//! `{ <name>s: [...] }` without `success`, a few wrap payloads in `data`, and a
//! handful return the bare object or array. Callers pass the candidate keys in
//! preference order.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::modules::client::error::ApiError;

fn decode<W: DeserializeOwned>(value: &Value) -> Result<W, ApiError> {
    serde_json::from_value(value.clone()).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Locate a single object. Falls back to the body itself when it carries an `id`.
pub(crate) fn locate_object<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    for key in keys {
        if let Some(candidate) = body.get(*key) {
            if candidate.is_object() {
                return Some(candidate);
            }
            if let Some(inner) = candidate.get("data").filter(|v| v.is_object()) {
                return Some(inner);
            }
        }
    }

    if let Some(data) = body.get("data").filter(|v| v.is_object()) {
        return Some(data);
    }

    if body.get("id").is_some() {
        return Some(body);
    }

    None
}

/// Locate a list; arrays nested one level under `data` are accepted too.
pub(crate) fn locate_array<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    if let Value::Array(items) = body {
        return Some(items);
    }

    for key in keys {
        match body.get(*key) {
            Some(Value::Array(items)) => return Some(items),
            Some(other) => {
                if let Some(Value::Array(items)) = other.get("data") {
                    return Some(items);
                }
            }
            None => {}
        }
    }

    match body.get("data") {
        Some(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Decode a single wire object, `None` when the response does not carry one.
pub(crate) fn one<W: DeserializeOwned>(body: &Value, keys: &[&str]) -> Result<Option<W>, ApiError> {
    match locate_object(body, keys) {
        Some(value) => decode(value).map(Some),
        None => Ok(None),
    }
}

/// Decode a list of wire objects. A missing list is an empty list; null items are skipped.
pub(crate) fn list<W: DeserializeOwned>(body: &Value, keys: &[&str]) -> Result<Vec<W>, ApiError> {
    let Some(items) = locate_array(body, keys) else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if item.is_null() {
            continue;
        }
        out.push(decode(item)?);
    }
    Ok(out)
}

/// Turn a translator's `None` into an error for methods that must return an entity.
pub(crate) fn required<T>(value: Option<T>, what: &'static str) -> Result<T, ApiError> {
    value.ok_or(ApiError::MissingField(what))
}

/// First string found under any of `keys`.
pub(crate) fn string_field(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// First non-negative integer found under any of `keys`.
pub(crate) fn count_field(body: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| {
        let value = body.get(*key)?;
        value
            .as_u64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
    })
}

/// Pagination counters, either under `pagination` or at the top level.
pub(crate) fn page_meta(body: &Value, keys: &[&str]) -> Option<u64> {
    body.get("pagination")
        .and_then(|p| count_field(p, keys))
        .or_else(|| count_field(body, keys))
}
