use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Patient;

/// All patient rows matching the given identifier. At most one row in a
/// well-formed store, but served as an array either way.
pub fn get_patient(conn: &Connection, patient_id: &str) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT PatientID FROM Patients WHERE PatientID = ?1")?;
    let rows = stmt.query_map(params![patient_id], |row| {
        Ok(Patient {
            patient_id: row.get(0)?,
        })
    })?;

    let mut patients = Vec::new();
    for row in rows {
        patients.push(row?);
    }
    Ok(patients)
}

pub fn count_patients(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM Patients", [], |row| row.get(0))?;
    Ok(count)
}

/// Combined (study, series, image) counts for one patient, computed as
/// three independent queries on the same connection. The three counts are
/// mutually consistent only if the store is not written between them.
pub fn patient_counts(
    conn: &Connection,
    patient_id: &str,
) -> Result<(i64, i64, i64), DatabaseError> {
    let studies = super::study::count_studies_for_patient(conn, patient_id)?;
    let series = super::series::count_series_for_patient(conn, patient_id)?;
    let images = super::image::count_images_for_patient(conn, patient_id)?;
    Ok((studies, series, images))
}
