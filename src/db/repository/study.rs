use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Study;

/// Identifiers arrive as raw path segments and are bound as-is; SQLite's
/// affinity comparison returns no rows for non-numeric input against the
/// integer key.
pub fn get_study(conn: &Connection, study_id: &str) -> Result<Vec<Study>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT StudyID, PatientID, StudyDescription FROM Studies WHERE StudyID = ?1",
    )?;
    let rows = stmt.query_map(params![study_id], study_from_row)?;

    let mut studies = Vec::new();
    for row in rows {
        studies.push(row?);
    }
    Ok(studies)
}

pub fn get_studies_for_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<Vec<Study>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT StudyID, PatientID, StudyDescription FROM Studies
         WHERE PatientID = ?1 ORDER BY StudyID",
    )?;
    let rows = stmt.query_map(params![patient_id], study_from_row)?;

    let mut studies = Vec::new();
    for row in rows {
        studies.push(row?);
    }
    Ok(studies)
}

pub fn count_studies(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM Studies", [], |row| row.get(0))?;
    Ok(count)
}

pub fn count_studies_for_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM Studies WHERE PatientID = ?1",
        params![patient_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn study_from_row(row: &rusqlite::Row<'_>) -> Result<Study, rusqlite::Error> {
    Ok(Study {
        study_id: row.get(0)?,
        patient_id: row.get(1)?,
        study_description: row.get(2)?,
    })
}
