/// End-of-run counters, reported once the catalog is written.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildStats {
    pub files_scanned: usize,
    pub rows_seen: usize,
    pub rows_qualified: usize,
    pub courses: usize,
    pub courses_with_country: usize,
}
