pub mod cors;
pub mod metrics;
pub mod tracing;
