//! Series endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::series;
use crate::models::Series;

#[derive(Serialize)]
pub struct SeriesTotal {
    pub series_count: i64,
}

/// `GET /series/:id` — full series rows for the identifier; empty array
/// when unknown or non-numeric.
pub async fn record(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Series>>, ApiError> {
    let conn = ctx.store.connect()?;
    Ok(Json(series::get_series(&conn, &id)?))
}

/// `GET /series/count` — global series count.
pub async fn total(State(ctx): State<ApiContext>) -> Result<Json<SeriesTotal>, ApiError> {
    let conn = ctx.store.connect()?;
    let series_count = series::count_series(&conn)?;
    Ok(Json(SeriesTotal { series_count }))
}
