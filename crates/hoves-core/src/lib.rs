//! hoves-core — Facial proportion, symmetry and feature scoring.
//!
//! Takes a 468-point normalized face mesh from an external landmark detector
//! and produces a grouped metrics record with a 1–10 display score.
//! Stateless: every call is independent and touches no shared state.

pub mod analysis;
pub mod feature;
pub mod geometry;
pub mod insights;
pub mod landmarks;
pub mod proportion;
pub mod symmetry;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use analysis::{analyze_face, analyze_landmarks, AnalysisError};
pub use insights::generate_insights;
pub use landmarks::{Landmark, MESH_POINT_COUNT};
pub use types::{AnalysisMetrics, Insights, LandmarkSet, Point, Reading};
