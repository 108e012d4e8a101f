use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::controller::aggregate::CourseMap;
use crate::controller::normalize::{collation_key, slug};
use crate::error::CatalogError;
use crate::model::{Course, Hole, Tee};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CatalogDocument {
    pub courses: Vec<CourseEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CourseEntry {
    pub course_key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub tees: Vec<TeeEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeeEntry {
    pub tee_id: String,
    pub sex: Option<String>,
    pub tee_name: String,
    pub ratings: Ratings,
    pub holes: Vec<HoleEntry>,
    pub distances: Distances,
}

/// Front and back blocks only exist when their par aggregate does; a tee
/// with a partial layout gets no half-course rating at all.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub full18: RatingBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front9: Option<RatingBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back9: Option<RatingBlock>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RatingBlock {
    pub par: Option<i64>,
    pub course_rating: Option<f64>,
    pub slope_rating: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HoleEntry {
    pub number: u32,
    pub par: Option<i64>,
    pub stroke_index: Option<i64>,
    pub distance: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Distances {
    pub total: Option<i64>,
    pub front9: Option<i64>,
    pub back9: Option<i64>,
    pub hole_count: usize,
    pub complete18: bool,
}

/// Sum of one hole field over `lo..=hi`. `None` unless every hole number in
/// the range exists and carries the field; a partial range never yields a
/// partial sum.
fn range_aggregate(
    holes: &[Hole],
    lo: u32,
    hi: u32,
    field: impl Fn(&Hole) -> Option<i64>,
) -> Option<i64> {
    let mut sum = 0;
    for number in lo..=hi {
        let hole = holes.iter().find(|hole| hole.number == number)?;
        sum += field(hole)?;
    }
    Some(sum)
}

fn tee_id(tee: &Tee) -> String {
    match (tee.course_rating, tee.slope_rating) {
        (Some(rating), Some(slope)) => slug(&format!("{} {rating} {slope}", tee.name)),
        _ => slug(&tee.name),
    }
}

fn tee_entry(tee: &Tee) -> TeeEntry {
    let par_total = range_aggregate(&tee.holes, 1, 18, |hole| hole.par);
    let par_front = range_aggregate(&tee.holes, 1, 9, |hole| hole.par);
    let par_back = range_aggregate(&tee.holes, 10, 18, |hole| hole.par);
    // halve in tenths so 72.3 yields 36.2 rather than drifting to 36.1
    let half_rating = tee
        .course_rating
        .map(|rating| ((rating * 10.0).round() / 2.0).round() / 10.0);
    TeeEntry {
        tee_id: tee_id(tee),
        sex: tee.sex.clone(),
        tee_name: tee.name.clone(),
        ratings: Ratings {
            full18: RatingBlock {
                par: par_total,
                course_rating: tee.course_rating,
                slope_rating: tee.slope_rating,
            },
            front9: par_front.map(|par| RatingBlock {
                par: Some(par),
                course_rating: half_rating,
                slope_rating: tee.slope_rating,
            }),
            back9: par_back.map(|par| RatingBlock {
                par: Some(par),
                course_rating: half_rating,
                slope_rating: tee.slope_rating,
            }),
        },
        holes: tee
            .holes
            .iter()
            .map(|hole| HoleEntry {
                number: hole.number,
                par: hole.par,
                stroke_index: hole.stroke_index,
                distance: hole.distance,
            })
            .collect(),
        distances: Distances {
            total: range_aggregate(&tee.holes, 1, 18, |hole| hole.distance),
            front9: range_aggregate(&tee.holes, 1, 9, |hole| hole.distance),
            back9: range_aggregate(&tee.holes, 10, 18, |hole| hole.distance),
            hole_count: tee.holes.len(),
            complete18: tee.holes.len() == 18,
        },
    }
}

fn course_entry(course: Course) -> CourseEntry {
    CourseEntry {
        tees: course.tees.iter().map(tee_entry).collect(),
        course_key: course.key,
        name: course.name,
        country: course.country,
    }
}

/// Aggregate, drop tee-less courses, and sort by display name under the
/// pt-PT collation approximation.
#[must_use]
pub fn catalog_document(courses: CourseMap) -> CatalogDocument {
    let mut entries: Vec<CourseEntry> = courses
        .into_values()
        .filter(|course| !course.tees.is_empty())
        .map(course_entry)
        .collect();
    entries.sort_by(|a, b| collation_key(&a.name).cmp(&collation_key(&b.name)));
    CatalogDocument { courses: entries }
}

/// Write the catalog as pretty-printed JSON. This is the run's only fatal
/// operation: the document is the entire point of the build.
///
/// # Errors
///
/// Returns `CatalogError` when serialization fails or the file cannot be
/// written.
pub fn write_catalog(document: &CatalogDocument, path: &Path) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(document)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json + "\n")?;
    Ok(())
}
