use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Series;

pub fn get_series(conn: &Connection, series_id: &str) -> Result<Vec<Series>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT SeriesID, StudyID, SeriesDescription FROM Series WHERE SeriesID = ?1",
    )?;
    let rows = stmt.query_map(params![series_id], |row| {
        Ok(Series {
            series_id: row.get(0)?,
            study_id: row.get(1)?,
            series_description: row.get(2)?,
        })
    })?;

    let mut series = Vec::new();
    for row in rows {
        series.push(row?);
    }
    Ok(series)
}

pub fn count_series(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM Series", [], |row| row.get(0))?;
    Ok(count)
}

/// Series belong to a patient only through their study.
pub fn count_series_for_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM Series
         JOIN Studies ON Series.StudyID = Studies.StudyID
         WHERE Studies.PatientID = ?1",
        params![patient_id],
        |row| row.get(0),
    )?;
    Ok(count)
}
