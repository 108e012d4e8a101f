use std::collections::BTreeMap;

use super::country::{CountryIndex, build_country_index, load_override_doc};
use super::holes::{holes_from_day, holes_from_record};
use super::master::load_master_names;
use super::normalize::course_key;
use super::scan::{Observation, scan_rounds};
use crate::args::RunPaths;
use crate::model::{BuildStats, Course, OverrideExtraRound, Tee, TeeKey, extra_rounds};
use crate::view::catalog::{CatalogDocument, catalog_document};

/// The course accumulator is an ordered map: downstream stages keep
/// first-seen values, so iteration order is part of the output contract.
pub type CourseMap = BTreeMap<String, Course>;

/// Fold qualifying scorecard observations into unique Course/Tee entities.
///
/// Display name and country are first-write per course; a tee key already
/// present keeps its original hole layout and the new observation is
/// dropped without being re-processed.
#[must_use]
pub fn aggregate_observations(
    observations: Vec<Observation>,
    country_index: &CountryIndex,
) -> CourseMap {
    let mut courses = CourseMap::new();
    for obs in observations {
        let course = courses
            .entry(obs.course_key.clone())
            .or_insert_with(|| Course::new(obs.course_key.clone(), obs.course_name.clone()));
        if course.country.is_none() {
            if let Some(country) = country_index.get(&obs.normalized_name) {
                course.country = Some(country.clone());
            }
        }
        let key = TeeKey::scorecard(obs.record.tee_name(), obs.course_rating, obs.slope_rating);
        if !course.has_tee(&key) {
            course.tees.push(Tee {
                name: obs.record.tee_name().to_string(),
                sex: obs.record.sex().map(str::to_string),
                course_rating: Some(obs.course_rating),
                slope_rating: Some(obs.slope_rating),
                holes: holes_from_record(&obs.record),
                key,
            });
        }
    }
    courses
}

/// Second pass: hand-entered rounds from the override dataset. Same
/// get-or-create and first-write rules, with the category label standing in
/// for a tee identity. An extra round whose best day yields no holes adds
/// no tee, which can leave a course tee-less and therefore absent from the
/// output.
pub fn apply_extra_rounds(courses: &mut CourseMap, extras: &[OverrideExtraRound]) {
    for extra in extras {
        let key = course_key(&extra.course_name);
        let course = courses
            .entry(key.clone())
            .or_insert_with(|| Course::new(key.clone(), extra.course_name.clone()));
        if course.country.is_none() {
            course.country = extra.country.clone();
        }
        let tee_key = TeeKey::category(&extra.category);
        if course.has_tee(&tee_key) {
            continue;
        }
        let Some(day) = extra.best_day() else {
            continue;
        };
        let holes = holes_from_day(day);
        if holes.is_empty() {
            continue;
        }
        course.tees.push(Tee {
            key: tee_key,
            name: extra.category.clone(),
            sex: None,
            course_rating: None,
            slope_rating: None,
            holes,
        });
    }
}

/// Run the whole pipeline: master catalog, country index, round scan, both
/// aggregation passes, then the sorted output document.
///
/// Infallible: missing or malformed optional inputs degrade to empty
/// structures with a warning; only writing the document out can fail, and
/// that lives with the caller.
#[must_use]
pub fn build_catalog(paths: &RunPaths) -> (CatalogDocument, BuildStats) {
    let master = load_master_names(&paths.master_catalog);
    let override_doc = load_override_doc(&paths.overrides);
    let country_index = build_country_index(&override_doc);

    let (observations, scan_stats) = scan_rounds(&paths.rounds_root, &master);
    let mut courses = aggregate_observations(observations, &country_index);
    apply_extra_rounds(&mut courses, &extra_rounds(&override_doc));

    let document = catalog_document(courses);
    let stats = BuildStats {
        files_scanned: scan_stats.files_scanned,
        rows_seen: scan_stats.rows_seen,
        rows_qualified: scan_stats.rows_qualified,
        courses: document.courses.len(),
        courses_with_country: document
            .courses
            .iter()
            .filter(|course| course.country.is_some())
            .count(),
    };
    (document, stats)
}
