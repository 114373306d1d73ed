use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw field value as it arrives from storage: readings are usually typed
/// in as text, but numbers are accepted too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Integer reading of the value, or `None` when it is missing.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Number(n) => number_to_int(*n),
            Self::Text(s) => parse_leading_int(s),
            Self::Other(_) => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Reads the integer prefix of `s` the way a browser's `parseInt` does:
/// leading whitespace, an optional sign, then the longest run of digits.
/// Trailing text ("120 mmHg", "12.9") is ignored.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn number_to_int(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    let truncated = n.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// One timestamped reading with any number of named fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Observation {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Parsed integer value of `key`. Absent and unparseable fields are both `None`.
    pub fn value(&self, key: &str) -> Option<i64> {
        let value = self.fields.get(key)?.as_int();
        if value.is_none() {
            tracing::trace!(key, timestamp = self.timestamp, "dropping non-numeric field");
        }
        value
    }
}
