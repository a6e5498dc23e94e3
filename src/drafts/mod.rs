//! Form drafts: the transient editing state between a fetched record
//! and the payload sent back to the gateway. A draft flattens nested
//! attributes into flat form fields and reassembles them on save.
//!
//! Repeatable rows (breadcrumbs, cards) post as repeated field names
//! in document order; groups the form does not edit ride along as
//! JSON-encoded hidden fields.

pub use case_study::*;
pub use news::*;
pub use service::*;

mod case_study;
mod news;
mod service;

use serde::de::DeserializeOwned;

/// Decode an `application/x-www-form-urlencoded` body into ordered
/// key/value pairs. Repeated keys are kept, in submission order.
pub fn parse_pairs(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// First value for `key`, or empty.
pub fn text_value(pairs: &[(String, String)], key: &str) -> String {
    first_value(pairs, key).unwrap_or_default().to_string()
}

/// All values for `key`, in submission order.
pub fn all_values<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Numeric relation field: empty means unset.
pub fn id_value(pairs: &[(String, String)], key: &str) -> Option<i64> {
    first_value(pairs, key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

pub fn parse_id(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

pub fn flag_value(value: &str) -> bool {
    matches!(value, "true" | "1" | "on")
}

/// JSON-encoded hidden group; missing or malformed decodes to the
/// default (an empty group).
pub fn json_rows<T: DeserializeOwned + Default>(
    pairs: &[(String, String)],
    key: &str,
) -> T {
    first_value(pairs, key)
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| serde_json::from_str(v).ok())
        .unwrap_or_default()
}

/// Encode a carried group for a hidden form field.
pub fn group_json<T: serde::Serialize>(rows: &[T]) -> String {
    serde_json::to_string(rows).unwrap_or_else(|_| String::from("[]"))
}
