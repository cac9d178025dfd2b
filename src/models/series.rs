use serde::{Deserialize, Serialize};

/// A row from the `Series` table. Each series belongs to exactly one
/// study.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub series_id: i64,
    pub study_id: i64,
    pub series_description: Option<String>,
}
