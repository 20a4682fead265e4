//! Condition-aware fly pattern recommendations.
//!
//! The engine turns a partially-specified fishing situation into a ranked,
//! type-diverse list of fly suggestions. Astronomical context (moon phase,
//! solunar windows) and live weather/water readings feed a tiered scorer;
//! a calibration step maps raw scores onto bounded confidence values.

pub mod astro;
pub mod catalog;
pub mod conditions;
pub mod config;
pub mod engine;
pub mod output;
pub mod providers;
pub mod scoring;
pub mod server;
pub mod types;

pub use engine::{EngineOptions, RecommendationEngine};
pub use types::{RecommendationRequest, RecommendationResponse, Suggestion};
