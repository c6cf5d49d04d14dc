pub mod prediction;

pub use prediction::{ImageUpload, Prediction};
