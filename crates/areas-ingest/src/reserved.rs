//! Discovery of slugs already published by the consuming application.
//!
//! The reserved set only ever narrows what new districts may use, so a
//! missing or unreadable source degrades to "nothing reserved" instead of
//! failing the run.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, info, warn};

use areas_model::ReservedSlugs;

/// Matches `slug: "..."` entries in source modules.
static SLUG_FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"slug:\s+"([^"]+)""#).expect("Invalid slug field regex"));

/// Load reserved slugs from `path`.
///
/// The format follows the file extension:
/// - `.json`: a top-level string array, or every string under a `"slug"` key
///   (restricted to the `"districts"` member when the document has one)
/// - `.txt`: one slug per line; blank lines and `#` comments are skipped
/// - anything else: every `slug: "<value>"` occurrence in the text
///
/// `None`, a missing file, or unparsable content yield an empty set.
pub fn load_reserved_slugs(path: Option<&Path>) -> ReservedSlugs {
    let Some(path) = path else {
        return ReservedSlugs::default();
    };
    if !path.exists() {
        debug!(path = %path.display(), "no reserved slug source");
        return ReservedSlugs::default();
    }
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!(path = %path.display(), %error, "could not read reserved slugs");
            return ReservedSlugs::default();
        }
    };
    let text = crate::csv_table::decode_utf8_ignoring_errors(&bytes);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let reserved = match extension.as_deref() {
        Some("json") => match serde_json::from_str::<Value>(&text) {
            Ok(value) => reserved_from_json(&value),
            Err(error) => {
                warn!(path = %path.display(), %error, "reserved slug JSON is malformed");
                ReservedSlugs::default()
            }
        },
        Some("txt") => reserved_from_lines(&text),
        _ => reserved_from_source(&text),
    };
    info!(path = %path.display(), count = reserved.len(), "loaded reserved slugs");
    reserved
}

/// Collect slugs from a JSON document.
pub fn reserved_from_json(value: &Value) -> ReservedSlugs {
    if let Value::Array(items) = value
        && items.iter().all(Value::is_string)
    {
        return items.iter().filter_map(Value::as_str).collect();
    }
    let scope = value.get("districts").unwrap_or(value);
    let mut slugs = Vec::new();
    collect_slug_fields(scope, &mut slugs);
    slugs.into_iter().collect()
}

fn collect_slug_fields<'v>(value: &'v Value, out: &mut Vec<&'v str>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                match child {
                    Value::String(slug) if key == "slug" => out.push(slug),
                    _ => collect_slug_fields(child, out),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_slug_fields(item, out);
            }
        }
        _ => {}
    }
}

/// Collect one slug per non-empty, non-comment line.
pub fn reserved_from_lines(text: &str) -> ReservedSlugs {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Collect `slug: "..."` values from source text.
pub fn reserved_from_source(text: &str) -> ReservedSlugs {
    SLUG_FIELD_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
