pub mod fallback;
pub mod health;
pub mod metrics;
pub mod predict;

pub use fallback::not_found;
pub use health::{health_check, readiness_check};
pub use self::metrics::metrics_endpoint;
pub use predict::predict_disease;
