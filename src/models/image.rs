use serde::{Deserialize, Serialize};

/// A row from the `Images` table. Each image belongs to exactly one
/// series and carries its display metadata as stored: instance number,
/// window center/width, rescale slope/intercept.
///
/// Display metadata columns are text in the store (DICOM keeps these as
/// decimal strings), so they are served verbatim rather than parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub image_id: i64,
    pub series_id: i64,
    pub file_path: String,
    pub instance_number: Option<String>,
    pub window_center: Option<String>,
    pub window_width: Option<String>,
    pub rescale_intercept: Option<String>,
    pub rescale_slope: Option<String>,
}

/// Flattened single-image projection across all four tables, served by
/// the filename lookup. Key names are part of the wire contract and stay
/// in the store's column casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageInfo {
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    #[serde(rename = "StudyDescription")]
    pub study_description: Option<String>,
    #[serde(rename = "SeriesDescription")]
    pub series_description: Option<String>,
    #[serde(rename = "InstanceNumber")]
    pub instance_number: Option<String>,
    #[serde(rename = "WindowCenter")]
    pub window_center: Option<String>,
    #[serde(rename = "WindowWidth")]
    pub window_width: Option<String>,
    #[serde(rename = "RescaleIntercept")]
    pub rescale_intercept: Option<String>,
    #[serde(rename = "RescaleSlope")]
    pub rescale_slope: Option<String>,
}
