use regex::Regex;
use std::sync::OnceLock;

use crate::model::{Hole, OverrideDay, RawRoundRecord};

/// Hole list described by one scorecard row. Only holes 1..=18 are read,
/// and a hole with neither par nor distance is dropped, which is how
/// nine-hole layouts come through.
#[must_use]
pub fn holes_from_record(record: &RawRoundRecord) -> Vec<Hole> {
    let mut holes = Vec::new();
    for number in 1..=18u32 {
        let par = record.hole_par(number);
        let stroke_index = record.hole_stroke_index(number);
        let distance = record.hole_distance(number);
        if par.is_some() || distance.is_some() {
            holes.push(Hole {
                number,
                par,
                stroke_index,
                distance,
            });
        }
    }
    holes
}

/// Leading hole number of a range label like "10-18". Defaults to 1 when
/// the label is absent or carries no leading integer.
#[must_use]
pub fn starting_hole(label: &str) -> u32 {
    static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_NUMBER
        .get_or_init(|| Regex::new(r"^\s*(\d+)").expect("invalid leading-number pattern"));
    re.captures(label)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1)
}

/// Hole list for one override day: one hole per par entry, numbered
/// sequentially from the label's starting hole, with stroke index and
/// distance paired in by position. A short or missing parallel list yields
/// absent values, not an error.
#[must_use]
pub fn holes_from_day(day: &OverrideDay) -> Vec<Hole> {
    let start = starting_hole(&day.hole_range);
    let mut holes = Vec::new();
    for (offset, par) in day.par.iter().enumerate() {
        let stroke_index = day.stroke_index.get(offset).copied().flatten();
        let distance = day.meters.get(offset).copied().flatten();
        if par.is_some() || distance.is_some() {
            holes.push(Hole {
                number: start + offset as u32,
                par: *par,
                stroke_index,
                distance,
            });
        }
    }
    holes
}
