use serde::Deserialize;
use serde_json::Value;

/// Round documents arrive in two shapes: a `{"records": [...]}` wrapper or a
/// bare list of rows. Both normalize to one record list.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum RoundDocument {
    Wrapped { records: Vec<Value> },
    Bare(Vec<Value>),
}

impl RoundDocument {
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        match self {
            RoundDocument::Wrapped { records } | RoundDocument::Bare(records) => records,
        }
    }
}

/// One row of a per-player round file. Rows are heterogeneous hand-captured
/// data, so every accessor coerces leniently: numbers may arrive as strings
/// (decimal comma included) and a value that will not coerce is treated as
/// absent.
#[derive(Clone, Debug)]
pub struct RawRoundRecord(Value);

impl RawRoundRecord {
    #[must_use]
    pub fn new(row: Value) -> Self {
        Self(row)
    }

    #[must_use]
    pub fn course_name(&self) -> Option<&str> {
        nonempty_str(self.0.get("course_name"))
    }

    #[must_use]
    pub fn tee_name(&self) -> &str {
        nonempty_str(self.0.get("tee_name")).unwrap_or("")
    }

    #[must_use]
    pub fn course_rating(&self) -> Option<f64> {
        self.0.get("course_rating").and_then(coerce_f64)
    }

    #[must_use]
    pub fn slope_rating(&self) -> Option<i64> {
        self.0.get("slope_rating").and_then(coerce_i64)
    }

    #[must_use]
    pub fn tee_color(&self) -> Option<&str> {
        nonempty_str(self.0.get("tee_color"))
    }

    #[must_use]
    pub fn sex(&self) -> Option<&str> {
        nonempty_str(self.0.get("sex"))
    }

    #[must_use]
    pub fn hole_par(&self, number: u32) -> Option<i64> {
        self.0.get(format!("par_{number}")).and_then(coerce_i64)
    }

    #[must_use]
    pub fn hole_stroke_index(&self, number: u32) -> Option<i64> {
        self.0.get(format!("si_{number}")).and_then(coerce_i64)
    }

    #[must_use]
    pub fn hole_distance(&self, number: u32) -> Option<i64> {
        self.0.get(format!("meters_{number}")).and_then(coerce_i64)
    }
}

fn nonempty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse()
                .ok()
                .or_else(|| s.replace(',', ".").parse().ok())
        }
        _ => None,
    }
}

pub(crate) fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}
