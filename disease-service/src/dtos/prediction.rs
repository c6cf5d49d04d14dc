use crate::models::Prediction;
use serde::{Deserialize, Serialize};

/// Wire shape of `POST /predict-disease`; callers key on `remedyKey`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub crop: String,
    pub disease: String,
    pub confidence: f64,
    pub remedy_key: String,
}

impl From<Prediction> for PredictionResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            crop: prediction.crop,
            disease: prediction.disease,
            confidence: prediction.confidence,
            remedy_key: prediction.remedy_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_remedy_key_in_camel_case() {
        let response = PredictionResponse::from(Prediction {
            crop: "wheat".to_string(),
            disease: "leaf_rust".to_string(),
            confidence: 0.78,
            remedy_key: "wheat_leaf_rust_basic".to_string(),
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "crop": "wheat",
                "disease": "leaf_rust",
                "confidence": 0.78,
                "remedyKey": "wheat_leaf_rust_basic"
            })
        );
    }

    #[test]
    fn confidence_keeps_two_decimal_text_form() {
        let response = PredictionResponse {
            crop: "wheat".to_string(),
            disease: "leaf_rust".to_string(),
            confidence: 0.78,
            remedy_key: "wheat_leaf_rust_basic".to_string(),
        };

        let text = serde_json::to_string(&response).unwrap();
        assert!(text.contains("\"confidence\":0.78"), "{}", text);
    }
}
