use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Image, ImageInfo};

pub fn get_image(conn: &Connection, image_id: &str) -> Result<Vec<Image>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT ImageID, SeriesID, FilePath, InstanceNumber,
                WindowCenter, WindowWidth, RescaleIntercept, RescaleSlope
         FROM Images WHERE ImageID = ?1",
    )?;
    let rows = stmt.query_map(params![image_id], |row| {
        Ok(Image {
            image_id: row.get(0)?,
            series_id: row.get(1)?,
            file_path: row.get(2)?,
            instance_number: row.get(3)?,
            window_center: row.get(4)?,
            window_width: row.get(5)?,
            rescale_intercept: row.get(6)?,
            rescale_slope: row.get(7)?,
        })
    })?;

    let mut images = Vec::new();
    for row in rows {
        images.push(row?);
    }
    Ok(images)
}

pub fn count_images(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM Images", [], |row| row.get(0))?;
    Ok(count)
}

pub fn count_images_for_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM Images
         JOIN Series ON Images.SeriesID = Series.SeriesID
         JOIN Studies ON Series.StudyID = Studies.StudyID
         WHERE Studies.PatientID = ?1",
        params![patient_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Flattened metadata for the first image whose stored file path contains
/// `fragment`. Multiple matches collapse silently to the first row; the
/// fragment is bound into a both-sided LIKE pattern, so `%` and `_` in it
/// keep their wildcard meaning.
pub fn find_image_info(
    conn: &Connection,
    fragment: &str,
) -> Result<Option<ImageInfo>, DatabaseError> {
    let pattern = format!("%{fragment}%");
    let info = conn
        .query_row(
            "SELECT Patients.PatientID,
                    Studies.StudyDescription,
                    Series.SeriesDescription,
                    Images.InstanceNumber,
                    Images.WindowCenter,
                    Images.WindowWidth,
                    Images.RescaleIntercept,
                    Images.RescaleSlope
             FROM Images
             JOIN Series ON Images.SeriesID = Series.SeriesID
             JOIN Studies ON Series.StudyID = Studies.StudyID
             JOIN Patients ON Studies.PatientID = Patients.PatientID
             WHERE Images.FilePath LIKE ?1
             LIMIT 1",
            params![pattern],
            |row| {
                Ok(ImageInfo {
                    patient_id: row.get(0)?,
                    study_description: row.get(1)?,
                    series_description: row.get(2)?,
                    instance_number: row.get(3)?,
                    window_center: row.get(4)?,
                    window_width: row.get(5)?,
                    rescale_intercept: row.get(6)?,
                    rescale_slope: row.get(7)?,
                })
            },
        )
        .optional()?;
    Ok(info)
}
