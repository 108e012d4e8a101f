use serde_json::Value;

use super::round::coerce_i64;

/// A hand-entered round from the override dataset. Carries its own country
/// and a category label in place of rating data.
#[derive(Clone, Debug)]
pub struct OverrideExtraRound {
    pub course_name: String,
    pub country: Option<String>,
    pub category: String,
    pub days: Vec<OverrideDay>,
}

/// One day of a hand-entered round: a hole-range label ("1-9", "10-18") and
/// parallel per-hole lists.
#[derive(Clone, Debug, Default)]
pub struct OverrideDay {
    pub hole_range: String,
    pub par: Vec<Option<i64>>,
    pub stroke_index: Vec<Option<i64>>,
    pub meters: Vec<Option<i64>>,
}

impl OverrideExtraRound {
    /// The day with the longest par list; ties keep the first entered.
    #[must_use]
    pub fn best_day(&self) -> Option<&OverrideDay> {
        let mut best: Option<&OverrideDay> = None;
        for day in &self.days {
            match best {
                None => best = Some(day),
                Some(current) if day.par.len() > current.par.len() => best = Some(day),
                Some(_) => {}
            }
        }
        best
    }
}

/// Collect every `extraRounds` entry in the override dataset, in stored
/// order. Entries without a course name are dropped.
#[must_use]
pub fn extra_rounds(doc: &Value) -> Vec<OverrideExtraRound> {
    let mut out = Vec::new();
    let Some(players) = doc.as_object() else {
        return out;
    };
    for player in players.values() {
        let Some(entries) = player.get("extraRounds").and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            if let Some(extra) = parse_extra_round(entry) {
                out.push(extra);
            }
        }
    }
    out
}

fn parse_extra_round(entry: &Value) -> Option<OverrideExtraRound> {
    let course_name = entry
        .get("course")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())?
        .to_string();
    let country = entry
        .get("country")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|country| !country.is_empty())
        .map(ToString::to_string);
    let category = entry
        .get("category")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .unwrap_or("extra")
        .to_string();
    let days = entry
        .get("days")
        .and_then(Value::as_array)
        .map(|days| days.iter().map(parse_day).collect())
        .unwrap_or_default();
    Some(OverrideExtraRound {
        course_name,
        country,
        category,
        days,
    })
}

fn parse_day(day: &Value) -> OverrideDay {
    OverrideDay {
        hole_range: day
            .get("holes")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        par: int_list(day.get("par")),
        stroke_index: int_list(day.get("si")),
        meters: int_list(day.get("meters")),
    }
}

fn int_list(value: Option<&Value>) -> Vec<Option<i64>> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(coerce_i64).collect())
        .unwrap_or_default()
}
