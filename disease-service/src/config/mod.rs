use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default request body limit for uploads (10 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct DiseaseConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub inference: InferenceConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Largest accepted request body; bigger uploads are answered with 413.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// OTLP collector; span export is off when absent.
    pub otlp_endpoint: Option<String>,
}

impl Default for DiseaseConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            inference: InferenceConfig {
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
        }
    }
}

impl DiseaseConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Ok(DiseaseConfig {
            common: common_config,
            inference: InferenceConfig {
                max_upload_bytes: parse_upload_limit(
                    &env_or("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string()),
                )?,
            },
            observability: ObservabilityConfig {
                log_level: env_or("LOG_LEVEL", "info"),
                otlp_endpoint: env::var("OTLP_ENDPOINT")
                    .ok()
                    .filter(|endpoint| !endpoint.trim().is_empty()),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_upload_limit(raw: &str) -> Result<usize, AppError> {
    let limit: usize = raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "MAX_UPLOAD_BYTES must be a byte count, got {:?}: {}",
            raw,
            e
        ))
    })?;

    if limit == 0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "MAX_UPLOAD_BYTES must be greater than zero"
        )));
    }

    Ok(limit)
}
