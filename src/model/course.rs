use serde::{Deserialize, Serialize};

/// One away course, keyed by its slug. The display name and country are
/// first-write: later observations never overwrite them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub key: String,
    pub name: String,
    pub country: Option<String>,
    pub tees: Vec<Tee>,
}

impl Course {
    #[must_use]
    pub fn new(key: String, name: String) -> Self {
        Self {
            key,
            name,
            country: None,
            tees: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_tee(&self, key: &TeeKey) -> bool {
        self.tees.iter().any(|tee| &tee.key == key)
    }
}

/// Identity of a tee within one course. Scorecard tees carry their rating
/// (in tenths, so the key stays `Ord`) and slope; override tees carry the
/// category label with zeroed ratings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeeKey {
    pub name: String,
    pub rating_tenths: i64,
    pub slope: i64,
}

impl TeeKey {
    #[must_use]
    pub fn scorecard(name: &str, course_rating: f64, slope: i64) -> Self {
        Self {
            name: name.to_string(),
            rating_tenths: (course_rating * 10.0).round() as i64,
            slope,
        }
    }

    #[must_use]
    pub fn category(label: &str) -> Self {
        Self {
            name: label.to_string(),
            rating_tenths: 0,
            slope: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tee {
    pub key: TeeKey,
    pub name: String,
    pub sex: Option<String>,
    pub course_rating: Option<f64>,
    pub slope_rating: Option<i64>,
    pub holes: Vec<Hole>,
}

/// A hole carries par, stroke index and distance in meters, each optional.
/// Holes with neither par nor distance are never stored.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Hole {
    pub number: u32,
    pub par: Option<i64>,
    pub stroke_index: Option<i64>,
    pub distance: Option<i64>,
}
