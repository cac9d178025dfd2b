use serde::{Deserialize, Serialize};

/// A row from the `Studies` table. Each study belongs to exactly one
/// patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Study {
    pub study_id: i64,
    pub patient_id: String,
    pub study_description: Option<String>,
}
