use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    routing::post,
};
use chrono::Utc;
use companion::{ObjectDetectionReport, VisionError, vision::detect_objects};

use crate::{AppState, error::ApiError};

pub const OBJECT_DETECTION_FAILURE: &str = "Failed to process image";

/// Camera frames can be larger than axum's 2 MB default
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/ai/object-detection",
        post(object_detection).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
    )
}

/// Accepts a multipart upload with an `image` field
pub async fn object_detection(
    State(_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ObjectDetectionReport>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::internal(OBJECT_DETECTION_FAILURE, e))?;

    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::internal(OBJECT_DETECTION_FAILURE, e))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::internal(OBJECT_DETECTION_FAILURE, e))?;
            image = Some(bytes);
            break;
        }
    }

    let image = image.ok_or(VisionError::MissingImage)?;
    let report = detect_objects(&image, Utc::now())?;

    tracing::info!(
        bytes = image.len(),
        objects = report.objects.len(),
        "Object detection completed"
    );
    Ok(Json(report))
}
