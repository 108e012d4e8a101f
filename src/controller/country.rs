use ahash::RandomState;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use super::normalize::normalize;

/// Keys starting with this prefix mark a new section of a player's override
/// entries; the marker carries the country applied to the rounds after it.
pub const SECTION_PREFIX: &str = "#";

/// Normalized course name -> country. Last write wins while the index is
/// built; how it is applied to a course is the aggregator's concern.
pub type CountryIndex = HashMap<String, String, RandomState>;

/// Read the override dataset. A missing or unparsable file yields `Null`,
/// which every downstream consumer treats as an empty dataset.
#[must_use]
pub fn load_override_doc(path: &Path) -> Value {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                "override dataset {} unreadable ({err}); continuing without overrides",
                path.display()
            );
            return Value::Null;
        }
    };
    match serde_json::from_str(&text) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(
                "override dataset {} unparsable ({err}); continuing without overrides",
                path.display()
            );
            Value::Null
        }
    }
}

/// Build the country index from the override dataset.
///
/// Each player's entries are walked in stored order with a current-country
/// accumulator: a section marker with a non-empty country overwrites it, and
/// every round entry visited afterwards associates its course name with the
/// value held at that moment. The accumulator resets at each player.
/// `extraRounds` entries bypass the accumulator and contribute their own
/// explicit country at the position their key occupies.
#[must_use]
pub fn build_country_index(doc: &Value) -> CountryIndex {
    let mut index = CountryIndex::default();
    let Some(players) = doc.as_object() else {
        return index;
    };
    for player in players.values() {
        let mut current = String::new();
        walk_entries(player, &mut current, &mut index);
    }
    index
}

fn walk_entries(node: &Value, current: &mut String, index: &mut CountryIndex) {
    match node {
        Value::Object(entries) => {
            record_round_entry(entries, current, index);
            for (key, value) in entries {
                if key.starts_with(SECTION_PREFIX) {
                    if let Some(country) = section_country(value) {
                        *current = country;
                    }
                } else if key == "extraRounds" {
                    record_extra_rounds(value, index);
                } else {
                    walk_entries(value, current, index);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_entries(item, current, index);
            }
        }
        _ => {}
    }
}

/// An object embedding a `course` string is a round entry; it picks up the
/// accumulator's current country. An empty accumulator records nothing.
fn record_round_entry(
    entries: &serde_json::Map<String, Value>,
    current: &str,
    index: &mut CountryIndex,
) {
    if current.is_empty() {
        return;
    }
    if let Some(course) = entries.get("course").and_then(Value::as_str) {
        let normalized = normalize(course);
        if !normalized.is_empty() {
            index.insert(normalized, current.to_string());
        }
    }
}

fn record_extra_rounds(value: &Value, index: &mut CountryIndex) {
    let Some(entries) = value.as_array() else {
        return;
    };
    for entry in entries {
        let course = entry.get("course").and_then(Value::as_str).unwrap_or("");
        let country = entry
            .get("country")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("");
        if country.is_empty() {
            continue;
        }
        let normalized = normalize(course);
        if !normalized.is_empty() {
            index.insert(normalized, country.to_string());
        }
    }
}

/// Section markers carry their country either as a bare string value or as
/// an object with a `country` field. Empty values leave the accumulator
/// untouched.
fn section_country(value: &Value) -> Option<String> {
    let country = value
        .as_str()
        .or_else(|| value.get("country").and_then(Value::as_str))?
        .trim();
    if country.is_empty() {
        None
    } else {
        Some(country.to_string())
    }
}
