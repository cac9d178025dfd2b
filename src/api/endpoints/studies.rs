//! Study endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::study;
use crate::models::Study;

#[derive(Serialize)]
pub struct StudyTotal {
    pub study_count: i64,
}

/// `GET /studies/:id` — full study rows for the identifier; empty array
/// when unknown or non-numeric.
pub async fn record(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Study>>, ApiError> {
    let conn = ctx.store.connect()?;
    Ok(Json(study::get_study(&conn, &id)?))
}

/// `GET /studies/count` — global study count.
pub async fn total(State(ctx): State<ApiContext>) -> Result<Json<StudyTotal>, ApiError> {
    let conn = ctx.store.connect()?;
    let study_count = study::count_studies(&conn)?;
    Ok(Json(StudyTotal { study_count }))
}
