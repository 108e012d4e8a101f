use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::master::MasterNameSet;
use super::normalize::{course_key, normalize};
use crate::model::{RawRoundRecord, RoundDocument};

/// One qualifying scorecard row, tagged with the identity the aggregator
/// groups on. Rating and slope are already coerced and positive.
#[derive(Clone, Debug)]
pub struct Observation {
    pub course_key: String,
    pub course_name: String,
    pub normalized_name: String,
    pub course_rating: f64,
    pub slope_rating: i64,
    pub record: RawRoundRecord,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub rows_seen: usize,
    pub rows_qualified: usize,
}

/// Walk the per-federation round tree and collect every qualifying row.
///
/// Layout: `<root>/<federationId>/rounds/*.json`, federation folders being
/// numeric only. Directories and files are visited in lexicographically
/// sorted order; the aggregator keeps first-seen names and layouts, so a
/// stable visit order is what makes two runs over the same tree emit
/// byte-identical catalogs.
#[must_use]
pub fn scan_rounds(root: &Path, master: &MasterNameSet) -> (Vec<Observation>, ScanStats) {
    let mut observations = Vec::new();
    let mut stats = ScanStats::default();
    if !root.is_dir() {
        warn!("rounds root {} not found; nothing to scan", root.display());
        return (observations, stats);
    }
    for federation_dir in sorted_entries(root) {
        if !is_federation_dir(&federation_dir) {
            continue;
        }
        for file in sorted_entries(&federation_dir.join("rounds")) {
            if file.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            stats.files_scanned += 1;
            scan_file(&file, master, &mut observations, &mut stats);
        }
    }
    (observations, stats)
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let Ok(read) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut entries: Vec<PathBuf> = read.filter_map(Result::ok).map(|e| e.path()).collect();
    entries.sort();
    entries
}

fn is_federation_dir(path: &Path) -> bool {
    path.is_dir()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()))
}

fn scan_file(
    path: &Path,
    master: &MasterNameSet,
    observations: &mut Vec<Observation>,
    stats: &mut ScanStats,
) {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            debug!("skipping unreadable round file {} ({err})", path.display());
            return;
        }
    };
    let doc: RoundDocument = match serde_json::from_str(&text) {
        Ok(doc) => doc,
        Err(err) => {
            debug!("skipping malformed round file {} ({err})", path.display());
            return;
        }
    };
    for row in doc.into_records() {
        stats.rows_seen += 1;
        let record = RawRoundRecord::new(row);
        let Some(course_name) = record.course_name().map(str::to_string) else {
            continue;
        };
        let Some(course_rating) = record.course_rating().filter(|r| *r > 0.0) else {
            continue;
        };
        let Some(slope_rating) = record.slope_rating().filter(|s| *s > 0) else {
            continue;
        };
        let normalized_name = normalize(&course_name);
        if master.contains(&normalized_name) {
            continue;
        }
        stats.rows_qualified += 1;
        observations.push(Observation {
            course_key: course_key(&course_name),
            course_name,
            normalized_name,
            course_rating,
            slope_rating,
            record,
        });
    }
}
