//! Image endpoints, including the filename-fragment metadata lookup.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::image;
use crate::models::{Image, ImageInfo};

#[derive(Serialize)]
pub struct ImageTotal {
    pub images_count: i64,
}

/// `GET /images/:id` — full image rows for the identifier; empty array
/// when unknown or non-numeric.
pub async fn record(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Image>>, ApiError> {
    let conn = ctx.store.connect()?;
    Ok(Json(image::get_image(&conn, &id)?))
}

/// `GET /images/count` — global image count.
pub async fn total(State(ctx): State<ApiContext>) -> Result<Json<ImageTotal>, ApiError> {
    let conn = ctx.store.connect()?;
    let images_count = image::count_images(&conn)?;
    Ok(Json(ImageTotal { images_count }))
}

/// `GET /imageinfo/:filename` — flattened metadata for the first image
/// whose stored file path contains the given fragment. The only lookup
/// that answers no-match with 404 instead of an empty collection.
pub async fn info(
    State(ctx): State<ApiContext>,
    Path(filename): Path<String>,
) -> Result<Json<ImageInfo>, ApiError> {
    let conn = ctx.store.connect()?;
    image::find_image_info(&conn, &filename)?
        .map(Json)
        .ok_or(ApiError::FilenameNotFound)
}
