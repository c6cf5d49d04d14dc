//! Fixed-output predictor for integration work before a model exists.

use super::{DiseasePredictor, PredictorError};
use crate::models::{ImageUpload, Prediction};
use async_trait::async_trait;

pub const STUB_CROP: &str = "wheat";
pub const STUB_DISEASE: &str = "leaf_rust";
pub const STUB_CONFIDENCE: f64 = 0.78;
pub const STUB_REMEDY_KEY: &str = "wheat_leaf_rust_basic";

/// Returns the same diagnosis for every image; the bytes are never inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPredictor;

impl StubPredictor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DiseasePredictor for StubPredictor {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn predict(&self, _image: &ImageUpload) -> Result<Prediction, PredictorError> {
        Ok(Prediction {
            crop: STUB_CROP.to_string(),
            disease: STUB_DISEASE.to_string(),
            confidence: STUB_CONFIDENCE,
            remedy_key: STUB_REMEDY_KEY.to_string(),
        })
    }

    async fn health_check(&self) -> Result<(), PredictorError> {
        Ok(())
    }
}
