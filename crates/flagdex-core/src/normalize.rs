// crates/flagdex-core/src/normalize.rs

//! # Response Normalizer
//!
//! The countries feed guarantees no schema. The same logical field has
//! appeared under several different keys and nesting levels over time, so
//! instead of deserializing into a fixed struct, records stay opaque
//! ([`serde_json::Value`]) and every field is read through an ordered
//! chain of candidate locations. The chains are plain `const` data: the
//! compatibility contract with the feed is auditable in one place and
//! testable on its own.
//!
//! Extraction is total. A malformed record degrades to `"Unknown"` / an
//! empty flag; it is never dropped and never an error.

use crate::config::{FlagFallback, NormalizeOptions, ShapePolicy, PLACEHOLDER_FLAG};
use crate::error::{FlagdexError, Result};
use serde::Serialize;
use serde_json::Value;

/// One raw, loosely-shaped item from the feed.
pub type CountryRecord = Value;

/// Display name substituted when no candidate field yields one.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A single candidate location for a logical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    /// Top-level key.
    Key(&'static str),
    /// One level of nesting, e.g. `name.common`.
    Nested(&'static str, &'static str),
}

impl FieldPath {
    /// Resolve this location against a record, yielding a non-empty string.
    pub fn lookup<'a>(&self, record: &'a Value) -> Option<&'a str> {
        let v = match *self {
            FieldPath::Key(k) => record.get(k)?,
            FieldPath::Nested(outer, inner) => record.get(outer)?.get(inner)?,
        };
        match v.as_str() {
            Some(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Like [`FieldPath::lookup`], but also accepts JSON numbers
    /// (stringified). Some feed revisions served numeric codes unquoted.
    pub fn lookup_scalar(&self, record: &Value) -> Option<String> {
        let v = match *self {
            FieldPath::Key(k) => record.get(k)?,
            FieldPath::Nested(outer, inner) => record.get(outer)?.get(inner)?,
        };
        match v {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Candidate locations for the display name, in priority order.
///
/// The order is a compatibility contract with shapes the feed has served:
/// the restcountries-style nested object first, then the flat variants,
/// and finally `name` itself when it is a plain string.
pub const NAME_FIELDS: &[FieldPath] = &[
    FieldPath::Nested("name", "common"),
    FieldPath::Nested("name", "official"),
    FieldPath::Key("countryName"),
    FieldPath::Key("officialName"),
    FieldPath::Key("commonName"),
    FieldPath::Key("common"),
    FieldPath::Key("name"),
];

/// Candidate locations for the flag image URL, in priority order.
/// PNG before SVG; the flat keys cover older feed revisions.
pub const FLAG_FIELDS: &[FieldPath] = &[
    FieldPath::Nested("flags", "png"),
    FieldPath::Nested("flags", "svg"),
    FieldPath::Key("flag"),
    FieldPath::Key("flagUrl"),
    FieldPath::Key("flagPNG"),
    FieldPath::Key("png"),
];

/// Candidate locations for a stable short code, in priority order:
/// three-letter, two-letter, numeric, committee code, then a generic
/// `code` field.
pub const CODE_FIELDS: &[FieldPath] = &[
    FieldPath::Key("cca3"),
    FieldPath::Key("cca2"),
    FieldPath::Key("ccn3"),
    FieldPath::Key("cioc"),
    FieldPath::Key("code"),
];

fn first_match<'a>(record: &'a Value, chain: &[FieldPath]) -> Option<&'a str> {
    chain.iter().find_map(|path| path.lookup(record))
}

/// Read the display name from a record.
///
/// Returns `""` when no candidate yields a non-empty string; callers
/// substitute [`UNKNOWN_NAME`] for display.
pub fn extract_name(record: &Value) -> &str {
    first_match(record, NAME_FIELDS).unwrap_or("")
}

/// Read the flag image URL from a record.
///
/// The first non-empty candidate wins. With `force_https` set, a plain
/// `http://` prefix is rewritten so the image loads over secure
/// transport. When nothing matches, the configured fallback applies.
pub fn extract_flag_url(record: &Value, opts: &NormalizeOptions) -> String {
    match first_match(record, FLAG_FIELDS) {
        Some(url) => {
            if opts.force_https {
                if let Some(rest) = url.strip_prefix("http://") {
                    return format!("https://{rest}");
                }
            }
            url.to_string()
        }
        None => match opts.flag_fallback {
            FlagFallback::Empty => String::new(),
            FlagFallback::Placeholder => PLACEHOLDER_FLAG.to_string(),
        },
    }
}

/// Build a stable, unique key for a record at `index`.
///
/// The first present short code wins. Records without any code fall back
/// to `"{name}-{index}"`, which stays unique within one render even when
/// names collide or are missing.
pub fn extract_key(record: &Value, index: usize) -> String {
    for path in CODE_FIELDS {
        if let Some(code) = path.lookup_scalar(record) {
            return code;
        }
    }
    let name = extract_name(record);
    let name = if name.is_empty() { UNKNOWN_NAME } else { name };
    format!("{name}-{index}")
}

/// Locate the country list inside a decoded response body.
///
/// A top-level array is always accepted. Under [`ShapePolicy::Lenient`]
/// an object wrapping the array under `countries` or `data` is unwrapped,
/// and anything else yields an empty list. [`ShapePolicy::Strict`] maps
/// every non-array body to [`FlagdexError::UnexpectedShape`].
pub fn extract_records(data: Value, shape: ShapePolicy) -> Result<Vec<CountryRecord>> {
    match data {
        Value::Array(list) => Ok(list),
        Value::Object(mut map) => {
            if shape == ShapePolicy::Lenient {
                for wrapper in ["countries", "data"] {
                    if let Some(Value::Array(list)) = map.remove(wrapper) {
                        return Ok(list);
                    }
                }
                return Ok(Vec::new());
            }
            Err(FlagdexError::UnexpectedShape(
                "expected a JSON array of countries".into(),
            ))
        }
        other if shape == ShapePolicy::Lenient => {
            tracing::debug!(body = %kind_of(&other), "unrecognized body, treating as empty list");
            Ok(Vec::new())
        }
        other => Err(FlagdexError::UnexpectedShape(format!(
            "expected a JSON array, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The consistent `{name, flag_url, key}` view derived from one record.
///
/// Computed on demand; never persisted back onto the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedCountry {
    pub name: String,
    pub flag_url: String,
    pub key: String,
}

impl NormalizedCountry {
    /// Normalize one record. `index` is the record's position in the
    /// loaded list, used only for the key fallback.
    pub fn from_record(record: &Value, index: usize, opts: &NormalizeOptions) -> Self {
        let raw_name = extract_name(record);
        let name = if raw_name.is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            raw_name.to_string()
        };
        Self {
            flag_url: extract_flag_url(record, opts),
            key: extract_key(record, index),
            name,
        }
    }

    /// Alternative text for the flag image.
    pub fn alt_text(&self) -> String {
        format!("Flag of {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn opts() -> NormalizeOptions {
        NormalizeOptions::default()
    }

    #[test]
    fn name_from_nested_common() {
        let rec = json!({ "name": { "common": "Canada" } });
        assert_eq!(extract_name(&rec), "Canada");
    }

    #[test]
    fn name_from_flat_common() {
        let rec = json!({ "common": "Canada" });
        assert_eq!(extract_name(&rec), "Canada");
    }

    #[test]
    fn name_from_plain_string() {
        let rec = json!({ "name": "Samoa" });
        assert_eq!(extract_name(&rec), "Samoa");
    }

    #[test]
    fn name_priority_prefers_nested_common() {
        let rec = json!({
            "name": { "common": "Germany", "official": "Federal Republic of Germany" },
            "countryName": "Deutschland"
        });
        assert_eq!(extract_name(&rec), "Germany");
    }

    #[test]
    fn name_skips_empty_candidates() {
        let rec = json!({ "name": { "common": "" }, "countryName": "Samoa" });
        assert_eq!(extract_name(&rec), "Samoa");
    }

    #[test]
    fn name_empty_for_unrecognized_record() {
        assert_eq!(extract_name(&json!({})), "");
        assert_eq!(extract_name(&json!({ "name": 42 })), "");
        assert_eq!(extract_name(&json!(null)), "");
    }

    #[test]
    fn flag_prefers_png_over_svg() {
        let rec = json!({ "flags": { "png": "https://x/y.png", "svg": "https://x/y.svg" } });
        assert_eq!(extract_flag_url(&rec, &opts()), "https://x/y.png");
    }

    #[test]
    fn flag_rewrites_insecure_scheme() {
        let rec = json!({ "flags": { "png": "http://x/y.png" } });
        assert_eq!(extract_flag_url(&rec, &opts()), "https://x/y.png");
    }

    #[test]
    fn flag_keeps_insecure_scheme_when_disabled() {
        let rec = json!({ "flag": "http://x/y.png" });
        let o = NormalizeOptions {
            force_https: false,
            ..opts()
        };
        assert_eq!(extract_flag_url(&rec, &o), "http://x/y.png");
    }

    #[test]
    fn flag_fallback_empty_vs_placeholder() {
        let rec = json!({ "name": "Atlantis" });
        assert_eq!(extract_flag_url(&rec, &opts()), "");

        let o = NormalizeOptions {
            flag_fallback: FlagFallback::Placeholder,
            ..opts()
        };
        assert_eq!(extract_flag_url(&rec, &o), PLACEHOLDER_FLAG);
    }

    #[test]
    fn key_prefers_cca3() {
        let rec = json!({ "cca3": "CAN", "cca2": "CA" });
        assert_eq!(extract_key(&rec, 0), "CAN");
    }

    #[test]
    fn key_accepts_numeric_codes() {
        let rec = json!({ "ccn3": 124 });
        assert_eq!(extract_key(&rec, 0), "124");
    }

    #[test]
    fn key_falls_back_to_name_and_index() {
        let rec = json!({ "name": "Samoa" });
        assert_eq!(extract_key(&rec, 7), "Samoa-7");
        assert_eq!(extract_key(&json!({}), 3), "Unknown-3");
    }

    #[test]
    fn key_fallback_unique_across_indices() {
        let a = json!({ "name": "Samoa" });
        let b = json!({ "name": "Samoa" });
        assert_ne!(extract_key(&a, 0), extract_key(&b, 1));
    }

    #[test]
    fn records_from_bare_array() {
        let body = json!([{ "name": "Samoa" }]);
        let recs = extract_records(body, ShapePolicy::Strict).unwrap();
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn records_unwrapped_leniently() {
        for wrapper in ["countries", "data"] {
            let body = json!({ wrapper: [{ "name": "Samoa" }, { "name": "Fiji" }] });
            let recs = extract_records(body, ShapePolicy::Lenient).unwrap();
            assert_eq!(recs.len(), 2);
        }
    }

    #[test]
    fn lenient_unrecognized_body_is_empty() {
        assert!(extract_records(json!({ "items": [] }), ShapePolicy::Lenient)
            .unwrap()
            .is_empty());
        assert!(extract_records(json!("nope"), ShapePolicy::Lenient)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn strict_rejects_wrapped_list() {
        let body = json!({ "countries": [{ "name": "Samoa" }] });
        assert!(matches!(
            extract_records(body, ShapePolicy::Strict),
            Err(FlagdexError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn normalized_country_defaults() {
        let c = NormalizedCountry::from_record(&json!({}), 0, &opts());
        assert_eq!(c.name, UNKNOWN_NAME);
        assert_eq!(c.flag_url, "");
        assert_eq!(c.key, "Unknown-0");
        assert_eq!(c.alt_text(), "Flag of Unknown");
    }
}
