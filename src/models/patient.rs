use serde::{Deserialize, Serialize};

/// A row from the `Patients` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
}
