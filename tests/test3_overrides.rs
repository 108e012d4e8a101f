use serde_json::json;

use away_catalog::controller::country::build_country_index;
use away_catalog::controller::holes::{holes_from_day, starting_hole};
use away_catalog::model::{OverrideDay, OverrideExtraRound, extra_rounds};

#[test]
fn accumulator_resets_per_player_and_follows_sections() {
    let doc = json!({
        "p1": {
            "#2023 Algarve": { "country": "Portugal" },
            "r1": { "course": "Palmares" },
            "#2023 Spain": "Spain",
            "r2": { "course": "Palmares" },
            "r3": { "course": "La Cala" }
        },
        "p2": {
            "r1": { "course": "Ribagolfe II" }
        }
    });
    let index = build_country_index(&doc);
    // the index itself is last-write-wins
    assert_eq!(index.get("palmares").map(String::as_str), Some("Spain"));
    assert_eq!(index.get("la cala").map(String::as_str), Some("Spain"));
    // p2 starts with a fresh, empty accumulator
    assert!(!index.contains_key("ribagolfe ii"));
}

#[test]
fn nested_round_entries_take_the_current_section_country() {
    let doc = json!({
        "p1": {
            "#trip": { "country": "France" },
            "may": [
                { "course": "Chantilly" },
                { "week2": { "course": "Morfontaine" } }
            ]
        }
    });
    let index = build_country_index(&doc);
    assert_eq!(index.get("chantilly").map(String::as_str), Some("France"));
    assert_eq!(index.get("morfontaine").map(String::as_str), Some("France"));
}

#[test]
fn extra_rounds_bypass_the_accumulator() {
    let doc = json!({
        "p1": {
            "extraRounds": [
                { "course": "Palmares", "country": "Spain", "category": "Friendly", "days": [] }
            ],
            "#algarve": { "country": "Portugal" },
            "r1": { "course": "Palmares" }
        }
    });
    let index = build_country_index(&doc);
    // the section round entry is visited after the extraRounds key, so its
    // country is the index's final word
    assert_eq!(index.get("palmares").map(String::as_str), Some("Portugal"));

    let extras = extra_rounds(&doc);
    assert_eq!(extras.len(), 1);
    assert_eq!(extras[0].country.as_deref(), Some("Spain"));
    assert_eq!(extras[0].category, "Friendly");
}

#[test]
fn unparsable_override_doc_yields_empty_index() {
    let index = build_country_index(&serde_json::Value::Null);
    assert!(index.is_empty());
}

#[test]
fn starting_hole_parses_a_leading_integer() {
    assert_eq!(starting_hole("10-18"), 10);
    assert_eq!(starting_hole(" 2nd nine"), 2);
    assert_eq!(starting_hole("back nine"), 1);
    assert_eq!(starting_hole(""), 1);
}

#[test]
fn day_holes_pair_parallel_lists_by_position() {
    let day = OverrideDay {
        hole_range: "10-18".to_string(),
        par: vec![Some(4), Some(3), None, Some(5)],
        stroke_index: vec![Some(1)],
        meters: vec![Some(320), None],
    };
    let holes = holes_from_day(&day);
    // the third entry has neither par nor distance and is dropped
    assert_eq!(holes.len(), 3);
    assert_eq!(holes[0].number, 10);
    assert_eq!(holes[0].stroke_index, Some(1));
    assert_eq!(holes[0].distance, Some(320));
    assert_eq!(holes[1].number, 11);
    assert_eq!(holes[1].stroke_index, None);
    assert_eq!(holes[2].number, 13);
    assert_eq!(holes[2].par, Some(5));
    assert_eq!(holes[2].distance, None);
}

#[test]
fn best_day_prefers_the_longest_par_list_and_keeps_first_on_ties() {
    let short = OverrideDay {
        hole_range: "10-18".to_string(),
        par: vec![Some(4); 3],
        ..OverrideDay::default()
    };
    let first_full = OverrideDay {
        hole_range: "1-9".to_string(),
        par: vec![Some(4); 9],
        ..OverrideDay::default()
    };
    let second_full = OverrideDay {
        hole_range: "10-18".to_string(),
        par: vec![Some(5); 9],
        ..OverrideDay::default()
    };
    let extra = OverrideExtraRound {
        course_name: "Palmares".to_string(),
        country: None,
        category: "Friendly".to_string(),
        days: vec![short, first_full.clone(), second_full],
    };
    let best = extra.best_day().expect("a best day");
    assert_eq!(best.hole_range, first_full.hole_range);
    assert_eq!(best.par, first_full.par);
}
