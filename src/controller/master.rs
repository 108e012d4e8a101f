use ahash::RandomState;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

use super::normalize::normalize;

pub type MasterNameSet = HashSet<String, RandomState>;

/// Load the domestic master catalog into a set of normalized course names.
/// Anything found in this set is already known domestically and never enters
/// the away catalog.
///
/// A missing or unparsable catalog disables domestic exclusion for the run;
/// it is never fatal.
#[must_use]
pub fn load_master_names(path: &Path) -> MasterNameSet {
    let mut names = MasterNameSet::default();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                "master catalog {} unreadable ({err}); domestic exclusion disabled",
                path.display()
            );
            return names;
        }
    };
    let doc: Value = match serde_json::from_str(&text) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(
                "master catalog {} unparsable ({err}); domestic exclusion disabled",
                path.display()
            );
            return names;
        }
    };
    let Some(entries) = doc
        .get("courses")
        .and_then(Value::as_array)
        .or_else(|| doc.as_array())
    else {
        warn!(
            "master catalog {} holds no course list; domestic exclusion disabled",
            path.display()
        );
        return names;
    };
    for entry in entries {
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .or_else(|| entry.as_str());
        if let Some(name) = name {
            let normalized = normalize(name);
            if !normalized.is_empty() {
                names.insert(normalized);
            }
        }
    }
    names
}
