//! Crop disease inference service.
//!
//! Serves `POST /predict-disease` and `GET /health` behind a permissive CORS
//! policy. Predictions come from a [`services::DiseasePredictor`]; the shipped
//! implementation is [`services::StubPredictor`], which answers every image
//! with the same diagnosis.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
