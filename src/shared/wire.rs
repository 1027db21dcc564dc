//! Helpers shared by the wire → domain translators.
//!
//! The backend is not consistent about casing or value types, so every wire
//! struct keeps both spellings of a key and these helpers apply the same
//! preference order everywhere: snake_case first, camelCase second, default
//! last. Booleans are resolved with explicit `Option` checks so an explicit
//! `false` is never replaced by a `true` default.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Prefer the snake_case value, fall back to the camelCase one.
pub fn first<T>(snake: Option<T>, camel: Option<T>) -> Option<T> {
    snake.or(camel)
}

/// Resolve a flag without falsy coercion.
pub fn flag(snake: Option<bool>, camel: Option<bool>, default: bool) -> bool {
    if let Some(value) = snake {
        return value;
    }
    if let Some(value) = camel {
        return value;
    }
    default
}

/// Sort position: non-negative, `0` when missing or out of range.
pub fn position(snake: Option<i64>, camel: Option<i64>) -> u32 {
    first(snake, camel)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    // epoch milliseconds, as sent by rows serialised straight from JS dates
    if raw.bytes().all(|b| b.is_ascii_digit()) && raw.len() > 8 {
        return raw
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Required timestamps default to "now" when the backend omits them.
pub fn timestamp_or_now(raw: Option<&str>, field: &'static str) -> DateTime<Utc> {
    match parse_timestamp(raw) {
        Some(ts) => ts,
        None => {
            tracing::debug!(field, raw = ?raw, "Missing or unparseable timestamp, defaulting to now");
            Utc::now()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Lenient field deserializers
// ──────────────────────────────────────────────────────────

/// Ids are opaque strings, but some endpoints send them as numbers.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Free text. Numbers (phone numbers, CNPJs, zip codes) are kept as their
/// decimal text; any other non-string value is dropped.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Integers that may arrive as numbers, floats or numeric strings.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// Booleans that may arrive as `"true"`/`"false"` from form-encoded rows.
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Backend-managed timestamps, flattened into every wire struct that has them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimestampsWire {
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
    #[serde(default, rename = "createdAt", deserialize_with = "opt_text")]
    pub created_at_camel: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub updated_at: Option<String>,
    #[serde(default, rename = "updatedAt", deserialize_with = "opt_text")]
    pub updated_at_camel: Option<String>,
}

impl TimestampsWire {
    pub fn created_at(&self) -> DateTime<Utc> {
        timestamp_or_now(
            first(self.created_at.as_deref(), self.created_at_camel.as_deref()),
            "created_at",
        )
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        timestamp_or_now(
            first(self.updated_at.as_deref(), self.updated_at_camel.as_deref()),
            "updated_at",
        )
    }

    /// For singleton rows that may never have been saved.
    pub fn updated_at_opt(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(first(self.updated_at.as_deref(), self.updated_at_camel.as_deref()))
    }
}

/// Prisma style `_count` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountWire {
    #[serde(default, deserialize_with = "opt_int")]
    pub posts: Option<i64>,
}
