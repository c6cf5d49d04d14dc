#![allow(dead_code)]

use disease_service::config::DiseaseConfig;
use disease_service::services::{DiseasePredictor, StubPredictor};
use disease_service::startup::Application;
use reqwest::multipart;
use std::sync::Arc;

pub const TEST_ORIGIN: &str = "http://localhost:5173";

pub const FIXED_PREDICTION: &str =
    r#"{"crop":"wheat","disease":"leaf_rust","confidence":0.78,"remedyKey":"wheat_leaf_rust_basic"}"#;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_predictor(Arc::new(StubPredictor::new())).await
    }

    pub async fn spawn_with_predictor(predictor: Arc<dyn DiseasePredictor>) -> Self {
        let config = DiseaseConfig::load().expect("Failed to load configuration");
        Self::spawn_with_config(config, predictor).await
    }

    pub async fn spawn_with_upload_limit(max_upload_bytes: usize) -> Self {
        let mut config = DiseaseConfig::load().expect("Failed to load configuration");
        config.inference.max_upload_bytes = max_upload_bytes;
        Self::spawn_with_config(config, Arc::new(StubPredictor::new())).await
    }

    pub async fn spawn_with_config(
        mut config: DiseaseConfig,
        predictor: Arc<dyn DiseasePredictor>,
    ) -> Self {
        config.common.host = "127.0.0.1".to_string();
        config.common.port = 0; // Random port for testing

        let app = Application::build_with_predictor(config, predictor)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn upload(&self, form: multipart::Form) -> reqwest::Response {
        self.client
            .post(self.url("/predict-disease"))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// A form with a single `image` file part.
pub fn image_form(bytes: Vec<u8>, file_name: &str) -> multipart::Form {
    multipart::Form::new().part(
        "image",
        multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")
            .unwrap(),
    )
}

pub fn fixed_prediction() -> serde_json::Value {
    serde_json::from_str(FIXED_PREDICTION).unwrap()
}
