pub mod prediction;

pub use prediction::PredictionResponse;
