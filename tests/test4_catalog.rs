use std::path::{Path, PathBuf};

use away_catalog::args::RunPaths;
use away_catalog::build_catalog;
use away_catalog::view::catalog::{CatalogDocument, write_catalog};

fn data(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(rel)
}

fn scenario(name: &str) -> RunPaths {
    RunPaths {
        rounds_root: data(&format!("{name}/tree")),
        master_catalog: data(&format!("{name}/master.json")),
        overrides: data(&format!("{name}/overrides.json")),
    }
}

#[test]
fn single_round_yields_one_course_and_tee() {
    // empty master catalog and empty override dataset: both paths are absent
    let (document, stats) = build_catalog(&scenario("single"));
    assert_eq!(stats.files_scanned, 1);
    assert_eq!(document.courses.len(), 1);

    let course = &document.courses[0];
    assert_eq!(course.course_key, "away-valderrama-golf-club");
    assert_eq!(course.name, "Valderrama Golf Club");
    assert!(course.country.is_none());
    assert_eq!(course.tees.len(), 1);

    let tee = &course.tees[0];
    assert_eq!(tee.tee_name, "White");
    assert_eq!(tee.ratings.full18.par, Some(71));
    assert_eq!(tee.ratings.full18.course_rating, Some(72.3));
    assert_eq!(tee.ratings.full18.slope_rating, Some(132));

    // par is complete, so both half blocks exist with half the rating
    let front9 = tee.ratings.front9.as_ref().expect("front9 rating block");
    assert_eq!(front9.par, Some(36));
    assert_eq!(front9.course_rating, Some(36.2));
    assert_eq!(front9.slope_rating, Some(132));
    let back9 = tee.ratings.back9.as_ref().expect("back9 rating block");
    assert_eq!(back9.par, Some(35));

    // no meters were supplied anywhere
    assert_eq!(tee.distances.total, None);
    assert_eq!(tee.distances.front9, None);
    assert_eq!(tee.distances.back9, None);
    assert_eq!(tee.distances.hole_count, 18);
    assert!(tee.distances.complete18);
}

#[test]
fn dedup_exclusion_and_collation() {
    let (document, _) = build_catalog(&scenario("scan"));

    let names: Vec<&str> = document
        .courses
        .iter()
        .map(|course| course.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alamos Golf", "Álamos Golf", "Zebra Golf"]);

    // two qualifying rows with the same (name, tee, rating, slope) collapse
    // into one tee, and the layout from the first federation in sort order
    // wins over the later 999m observation
    let alamos = &document.courses[0];
    assert_eq!(alamos.tees.len(), 1);
    let tee = &alamos.tees[0];
    assert_eq!(tee.sex.as_deref(), Some("M"));
    assert_eq!(tee.holes[0].distance, Some(350));
    assert_eq!(tee.distances.front9, Some(3150));
    assert_eq!(tee.distances.total, None);
    assert_eq!(tee.distances.hole_count, 9);
    assert!(!tee.distances.complete18);
    assert!(tee.ratings.front9.is_some());
    assert!(tee.ratings.back9.is_none());

    // one hole without meters voids the whole front-nine aggregate
    let zebra = &document.courses[2];
    let ztee = &zebra.tees[0];
    assert_eq!(ztee.distances.front9, None);
    assert_eq!(ztee.distances.back9, Some(2520));
    assert_eq!(ztee.distances.total, None);
    assert_eq!(ztee.ratings.full18.par, Some(72));

    // domestic courses never reach the output
    assert!(
        document
            .courses
            .iter()
            .all(|course| course.course_key != "away-quinta-do-lago-sul")
    );
}

#[test]
fn country_first_resolution_wins() {
    let (document, stats) = build_catalog(&scenario("country"));
    assert_eq!(document.courses.len(), 2);
    assert_eq!(stats.courses_with_country, 2);

    let herdade = &document.courses[0];
    assert_eq!(herdade.name, "Herdade dos Salgados");
    assert_eq!(herdade.country.as_deref(), Some("Spain"));
    assert_eq!(herdade.tees.len(), 1);
    assert_eq!(
        herdade.tees[0].ratings.front9.as_ref().and_then(|b| b.par),
        Some(36)
    );

    // the round-file pass resolved Portugal (via the section marker) first;
    // the extra round's Spain never overwrites it
    let palmares = &document.courses[1];
    assert_eq!(palmares.name, "Palmares Golf");
    assert_eq!(palmares.country.as_deref(), Some("Portugal"));
    assert_eq!(palmares.tees.len(), 2);

    let friendly = palmares
        .tees
        .iter()
        .find(|tee| tee.tee_name == "Friendly")
        .expect("override tee");
    assert_eq!(friendly.tee_id, "friendly");
    assert_eq!(friendly.ratings.full18.par, None);
    assert_eq!(friendly.ratings.full18.course_rating, None);
    let friendly_front = friendly.ratings.front9.as_ref().expect("front9 block");
    assert_eq!(friendly_front.par, Some(36));
    assert_eq!(friendly_front.course_rating, None);
    assert_eq!(friendly.distances.front9, Some(2700));
    assert_eq!(friendly.distances.hole_count, 9);

    // courses only mentioned in section round entries never materialize
    assert!(
        document
            .courses
            .iter()
            .all(|course| course.name != "Vale da Pinta")
    );
}

#[test]
fn output_is_deterministic_and_round_trips() {
    let paths = scenario("scan");
    let (first, _) = build_catalog(&paths);
    let (second, _) = build_catalog(&paths);
    let first_json = serde_json::to_string_pretty(&first).expect("serialize");
    let second_json = serde_json::to_string_pretty(&second).expect("serialize");
    assert_eq!(first_json, second_json);

    let out = std::env::temp_dir().join("away_catalog_test4_output.json");
    write_catalog(&first, &out).expect("write catalog");
    let written = std::fs::read_to_string(&out).expect("read back");
    let round_trip: CatalogDocument = serde_json::from_str(&written).expect("parse back");
    assert_eq!(round_trip.courses.len(), first.courses.len());
    std::fs::remove_file(&out).ok();
}
