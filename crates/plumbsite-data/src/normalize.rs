//! Coercion of loosely-typed document fields before validation.
//!
//! Site documents are produced by a scraping pipeline that sometimes emits
//! numbers as decorated strings (`"4.8 stars"`) and hours tables as
//! JSON-encoded strings. Normalization never fails: a field that cannot be
//! coerced is dropped, and the validator decides whether what remains is
//! acceptable.

use serde_json::{Map, Value};

const COORDINATE_FIELDS: [&str; 2] = ["latitude", "longitude"];
const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;

/// Outcome of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// The document with `basic_info` fields coerced in place.
    Payload(Value),
    /// The document has no `basic_info`; treated the same as a 404.
    MissingBasicInfo,
}

/// Normalizes a raw site document.
#[must_use]
pub fn normalize(raw: Value) -> Normalized {
    let Value::Object(mut root) = raw else {
        return Normalized::MissingBasicInfo;
    };

    match root.get_mut("basic_info") {
        None | Some(Value::Null) => return Normalized::MissingBasicInfo,
        Some(Value::Object(info)) => normalize_basic_info(info),
        // Wrong shape: left for the validator to reject.
        Some(_) => {}
    }

    if let Some(Value::Array(reviews)) = root.get_mut("five_star_reviews") {
        for review in reviews.iter_mut().filter_map(Value::as_object_mut) {
            normalize_rating(review);
        }
    }

    Normalized::Payload(Value::Object(root))
}

fn normalize_basic_info(info: &mut Map<String, Value>) {
    for key in COORDINATE_FIELDS {
        match info.get(key).map(coerce_number) {
            Some(Some(n)) => {
                info.insert(key.to_owned(), Value::from(n));
            }
            Some(None) => {
                info.remove(key);
            }
            None => {}
        }
    }

    normalize_rating(info);

    match info.get("years_in_business").map(coerce_number) {
        Some(Some(years)) if (0.0..=f64::from(u32::MAX)).contains(&years) => {
            info.insert("years_in_business".to_owned(), Value::from(whole_years(years)));
        }
        Some(_) => {
            info.remove("years_in_business");
        }
        None => {}
    }

    let hours = match info.get("working_hours") {
        Some(Value::String(raw)) => Some(parse_hours_string(raw)),
        Some(Value::Null) => None,
        Some(_) | None => return,
    };
    match hours {
        Some(table) => {
            info.insert("working_hours".to_owned(), table);
        }
        None => {
            info.remove("working_hours");
        }
    }
}

/// Coerces `rating` in place; unparseable or out-of-range ratings
/// (`"5/5"` reads as 55) are dropped rather than failing the document.
fn normalize_rating(fields: &mut Map<String, Value>) {
    let Some(raw) = fields.get("rating") else {
        return;
    };
    match coerce_number(raw).filter(|r| RATING_RANGE.contains(r)) {
        Some(rating) => {
            fields.insert("rating".to_owned(), Value::from(rating));
        }
        None => {
            tracing::debug!(value = %raw, "dropping unusable rating");
            fields.remove("rating");
        }
    }
}

/// Coerces a JSON value to a finite float.
///
/// Numbers pass through. Strings keep only ASCII digits and `.` and are
/// then read with [`parse_loose_float`]. Everything else is absent.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_loose_float(s),
        _ => None,
    }
}

/// Strips every character that is not an ASCII digit or `.`, then parses
/// the longest leading float (`"1.2.3"` reads as `1.2`).
///
/// Returns `None` when no digits survive.
#[must_use]
pub fn parse_loose_float(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut seen_dot = false;
    let prefix_len = cleaned
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .map_or(cleaned.len(), |(i, _)| i);
    let prefix = &cleaned[..prefix_len];

    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// A double-encoded hours table. Anything that does not decode to a JSON
/// object becomes an empty table.
fn parse_hours_string(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(table @ Value::Object(_)) => table,
        Ok(other) => {
            tracing::warn!(value = %other, "working_hours decoded to a non-object; using empty table");
            Value::Object(Map::new())
        }
        Err(e) => {
            tracing::warn!(error = %e, raw, "failed to parse working_hours string; using empty table");
            Value::Object(Map::new())
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_years(years: f64) -> u32 {
    years.trunc() as u32
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
