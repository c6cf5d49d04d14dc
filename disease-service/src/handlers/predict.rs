use crate::dtos::PredictionResponse;
use crate::models::ImageUpload;
use crate::services::record_prediction;
use crate::startup::AppState;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

/// Multipart field that carries the image.
pub const IMAGE_FIELD: &str = "image";

/// Accepts one image upload, reads it to the end and returns the predictor's
/// diagnosis.
pub async fn predict_disease(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictionResponse>, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected non-multipart prediction request");
        AppError::BadRequest(anyhow::anyhow!(rejection.body_text()))
    })?;

    let upload = read_image_field(&mut multipart).await?;

    tracing::info!(
        filename = %upload.file_name,
        content_type = upload.content_type.as_deref().unwrap_or("-"),
        size = upload.len(),
        "Image upload received"
    );

    let predictor = state.predictor.name();
    let prediction = state.predictor.predict(&upload).await.map_err(|e| {
        tracing::error!(predictor, error = %e, "Prediction failed");
        AppError::from(e)
    })?;

    record_prediction(predictor, &prediction, upload.len());

    tracing::info!(
        predictor,
        crop = %prediction.crop,
        disease = %prediction.disease,
        confidence = prediction.confidence,
        "Prediction completed"
    );

    Ok(Json(PredictionResponse::from(prediction)))
}

/// Reads the whole form and buffers the first `image` part. Every other part
/// is still parsed and discarded, so a body that breaks after the image is
/// rejected like any other malformed upload.
async fn read_image_field(multipart: &mut Multipart) -> Result<ImageUpload, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if upload.is_some() || field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string).ok_or_else(|| {
            AppError::UnprocessableEntity(anyhow::anyhow!(
                "`{}` must be a file upload",
                IMAGE_FIELD
            ))
        })?;
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(upload_error)?;

        upload = Some(ImageUpload {
            file_name,
            content_type,
            data,
        });
    }

    upload.ok_or_else(|| {
        AppError::UnprocessableEntity(anyhow::anyhow!("{} is required", IMAGE_FIELD))
    })
}

fn upload_error(err: MultipartError) -> AppError {
    let status = err.status();
    let message = err.body_text();
    tracing::warn!(status = %status, error = %message, "Failed to read multipart upload");

    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(anyhow::anyhow!(message))
    } else {
        AppError::BadRequest(anyhow::anyhow!(message))
    }
}
