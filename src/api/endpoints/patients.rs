//! Patient endpoints: record lookup, study listing, and the per-patient
//! count family.
//!
//! Count key names mirror the established wire contract, inconsistencies
//! included: the per-patient image count is keyed `images_count` while
//! the combined object uses `image_count`.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::{image, patient, series, study};
use crate::models::{Patient, Study};

#[derive(Serialize)]
pub struct PatientTotal {
    pub patient_count: i64,
}

#[derive(Serialize)]
pub struct PatientStudyCount {
    pub patient_id: String,
    pub study_count: i64,
}

#[derive(Serialize)]
pub struct PatientSeriesCount {
    pub patient_id: String,
    pub series_count: i64,
}

#[derive(Serialize)]
pub struct PatientImageCount {
    pub patient_id: String,
    pub images_count: i64,
}

#[derive(Serialize)]
pub struct PatientCounts {
    pub patient_id: String,
    pub study_count: i64,
    pub series_count: i64,
    pub image_count: i64,
}

/// `GET /patients/:id` — full patient rows for the identifier; empty
/// array when unknown.
pub async fn record(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let conn = ctx.store.connect()?;
    Ok(Json(patient::get_patient(&conn, &id)?))
}

/// `GET /patients/:id/studies` — all studies belonging to the patient.
pub async fn studies(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Study>>, ApiError> {
    let conn = ctx.store.connect()?;
    Ok(Json(study::get_studies_for_patient(&conn, &id)?))
}

/// `GET /patients/:id/studycount`
pub async fn study_count(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<PatientStudyCount>, ApiError> {
    let conn = ctx.store.connect()?;
    let study_count = study::count_studies_for_patient(&conn, &id)?;
    Ok(Json(PatientStudyCount {
        patient_id: id,
        study_count,
    }))
}

/// `GET /patients/:id/seriescount`
pub async fn series_count(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<PatientSeriesCount>, ApiError> {
    let conn = ctx.store.connect()?;
    let series_count = series::count_series_for_patient(&conn, &id)?;
    Ok(Json(PatientSeriesCount {
        patient_id: id,
        series_count,
    }))
}

/// `GET /patients/:id/imagecount`
pub async fn image_count(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<PatientImageCount>, ApiError> {
    let conn = ctx.store.connect()?;
    let images_count = image::count_images_for_patient(&conn, &id)?;
    Ok(Json(PatientImageCount {
        patient_id: id,
        images_count,
    }))
}

/// `GET /patients/:id/counts` — combined study/series/image counts,
/// computed as three independent reads.
pub async fn counts(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<PatientCounts>, ApiError> {
    let conn = ctx.store.connect()?;
    let (study_count, series_count, image_count) = patient::patient_counts(&conn, &id)?;
    Ok(Json(PatientCounts {
        patient_id: id,
        study_count,
        series_count,
        image_count,
    }))
}

/// `GET /patients/count` — global patient count.
pub async fn total(State(ctx): State<ApiContext>) -> Result<Json<PatientTotal>, ApiError> {
    let conn = ctx.store.connect()?;
    let patient_count = patient::count_patients(&conn)?;
    Ok(Json(PatientTotal { patient_count }))
}
