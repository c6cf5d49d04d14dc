//! Application startup and lifecycle management.

use crate::config::DiseaseConfig;
use crate::handlers;
use crate::services::{DiseasePredictor, StubPredictor};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::permissive_cors, metrics::metrics_middleware, tracing::request_id_middleware,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: DiseaseConfig,
    pub predictor: Arc<dyn DiseasePredictor>,
}

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.inference.max_upload_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/predict-disease", post(handlers::predict_disease))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        // Outermost, so rejections and fallbacks carry CORS headers too.
        .layer(permissive_cors())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the stub predictor.
    pub async fn build(config: DiseaseConfig) -> Result<Self, AppError> {
        Self::build_with_predictor(config, Arc::new(StubPredictor::new())).await
    }

    pub async fn build_with_predictor(
        config: DiseaseConfig,
        predictor: Arc<dyn DiseasePredictor>,
    ) -> Result<Self, AppError> {
        tracing::info!(
            predictor = predictor.name(),
            max_upload_bytes = config.inference.max_upload_bytes,
            "Initialized disease predictor"
        );

        // Port 0 picks a random free port (tests)
        let addr = config.common.address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let router = build_router(AppState { config, predictor });

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serve until `signal` resolves, then let in-flight requests finish.
    pub async fn run_until_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
