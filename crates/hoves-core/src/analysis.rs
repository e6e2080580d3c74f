//! Full analysis: run the three scorers, weight them, and map the result onto
//! the 1–10 display scale.

use thiserror::Error;

use crate::feature::{feature_score, SKIN_PLACEHOLDER_SCORE};
use crate::geometry::distance;
use crate::landmarks::Landmark;
use crate::proportion::proportion_score;
use crate::symmetry::symmetry_score;
use crate::types::{
    AnalysisMetrics, BasicMetrics, ExpertMetrics, GroomingMetrics, LandmarkSet, Point, Reading,
};

const SYMMETRY_WEIGHT: f64 = 0.30;
const PROPORTION_WEIGHT: f64 = 0.40;
const FEATURE_WEIGHT: f64 = 0.30;

/// No analyzed face is shown as perfect.
pub const MAX_DISPLAY_SCORE: f64 = 9.8;
pub const MIN_DISPLAY_SCORE: f64 = 1.0;

// --- Placeholder outputs (not measured from landmarks) ---
//
// Prominence, beard density and hair volume use the symmetry-based
// estimates evaluated at a fixed reference symmetry, so they stay constant
// instead of echoing the measured symmetry back as a different metric.
const PLACEHOLDER_REFERENCE_SYMMETRY: f64 = 100.0;
const ZYGOMATIC_PROMINENCE_PLACEHOLDER: f64 = 0.7 + PLACEHOLDER_REFERENCE_SYMMETRY / 1000.0;
const BEARD_DENSITY_PLACEHOLDER: u32 = (60.0 + PLACEHOLDER_REFERENCE_SYMMETRY / 10.0) as u32;
const HAIR_VOLUME_PLACEHOLDER: f64 = 0.6 + PLACEHOLDER_REFERENCE_SYMMETRY / 250.0;
/// Equal thirds, the fallback used when face height cannot be split.
const FACIAL_THIRDS_PLACEHOLDER: [f64; 3] = [0.33, 0.33, 0.33];
const INTERCANTHAL_FALLBACK: f64 = 0.5;
const HAIR_TYPE_PLACEHOLDER: &str = "Wavy (Type 2B)";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid landmark data: expected {expected} landmarks, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
}

/// Analyze a 468-point face mesh.
///
/// Fails only when fewer than 468 points are given; extra points (refined
/// iris landmarks) are ignored. Any geometry, including coincident or
/// out-of-frame points, produces a result. The returned record is at full
/// precision; see [`AnalysisMetrics::rounded`].
pub fn analyze_face(points: &[Point]) -> Result<AnalysisMetrics, AnalysisError> {
    let landmarks = LandmarkSet::from_slice(points)?;
    Ok(analyze_landmarks(&landmarks))
}

/// Analyze an already validated mesh.
pub fn analyze_landmarks(landmarks: &LandmarkSet) -> AnalysisMetrics {
    let symmetry = symmetry_score(landmarks);
    let proportion = proportion_score(landmarks);
    let feature = feature_score(landmarks);

    let raw = symmetry * SYMMETRY_WEIGHT
        + proportion.score * PROPORTION_WEIGHT
        + feature.score * FEATURE_WEIGHT;
    let overall = display_score(raw);

    tracing::debug!(
        symmetry,
        proportion = proportion.score,
        feature = feature.score,
        raw,
        overall,
        "face analyzed"
    );

    AnalysisMetrics {
        basic: BasicMetrics {
            symmetry: Reading::Measured(symmetry),
            skin_clarity: Reading::Placeholder(SKIN_PLACEHOLDER_SCORE as u32),
            golden_ratio: proportion.golden_ratio,
            overall_score: Reading::Measured(overall),
        },
        expert: ExpertMetrics {
            canthal_tilt: Reading::Measured(feature.canthal_tilt),
            intercanthal_distance: intercanthal_distance(landmarks),
            mandibular_angle: Reading::Placeholder(feature.mandibular_angle),
            zygomatic_prominence: Reading::Placeholder(ZYGOMATIC_PROMINENCE_PLACEHOLDER),
            midface_ratio: proportion.midface_ratio,
            facial_thirds: Reading::Placeholder(FACIAL_THIRDS_PLACEHOLDER),
        },
        grooming: GroomingMetrics {
            forehead_height: Reading::Placeholder(FACIAL_THIRDS_PLACEHOLDER[0]),
            beard_density: Reading::Placeholder(BEARD_DENSITY_PLACEHOLDER),
            hair_volume: Reading::Placeholder(HAIR_VOLUME_PLACEHOLDER),
            hair_type: Reading::Placeholder(HAIR_TYPE_PLACEHOLDER),
        },
    }
}

/// Map a raw weighted score (nominally 0–100) onto the 1–9.8 display scale.
///
/// Three linear segments meeting at 4.0 (raw 50) and 6.0 (raw 70).
pub fn display_score(raw: f64) -> f64 {
    let score = if raw < 50.0 {
        1.0 + raw / 50.0 * 3.0
    } else if raw < 70.0 {
        4.0 + (raw - 50.0) / 20.0 * 2.0
    } else {
        6.0 + (raw - 70.0) / 30.0 * 4.0
    };
    // max/min rather than clamp: a NaN raw score lands on the floor.
    score.max(MIN_DISPLAY_SCORE).min(MAX_DISPLAY_SCORE)
}

/// Inner-eye distance as a fraction of zygomatic width. Falls back to a
/// placeholder when the width is zero.
fn intercanthal_distance(landmarks: &LandmarkSet) -> Reading<f64> {
    let width = distance(&landmarks[Landmark::LeftZygoma], &landmarks[Landmark::RightZygoma]);
    if width > 0.0 {
        let icd = distance(&landmarks[Landmark::LeftEyeInner], &landmarks[Landmark::RightEyeInner]);
        Reading::Measured(icd / width)
    } else {
        Reading::Placeholder(INTERCANTHAL_FALLBACK)
    }
}
