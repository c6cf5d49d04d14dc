//! Disease predictor abstraction.
//!
//! Handlers only see `DiseasePredictor`, so a model-backed implementation can
//! replace the stub without touching the HTTP contract.

pub mod stub;

pub use stub::StubPredictor;

use crate::models::{ImageUpload, Prediction};
use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for predictor operations.
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Predictor not ready: {0}")]
    NotReady(String),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

impl From<PredictorError> for AppError {
    fn from(err: PredictorError) -> Self {
        match err {
            PredictorError::NotReady(_) => AppError::ServiceUnavailable,
            PredictorError::UnsupportedImage(_) => {
                AppError::UnprocessableEntity(anyhow::Error::new(err))
            }
            PredictorError::Inference(_) => AppError::InternalError(anyhow::Error::new(err)),
        }
    }
}

/// Classifies a crop image into a crop, a disease and a remedy key.
#[async_trait]
pub trait DiseasePredictor: Send + Sync {
    /// Short identifier used in logs and metric labels.
    fn name(&self) -> &'static str;

    async fn predict(&self, image: &ImageUpload) -> Result<Prediction, PredictorError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), PredictorError>;
}
