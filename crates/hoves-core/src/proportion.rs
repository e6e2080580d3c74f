//! Facial proportions: height/width against the golden ratio, and the
//! midface ratio against 1.0.

use crate::geometry::distance;
use crate::landmarks::Landmark;
use crate::types::{LandmarkSet, Reading};

pub const GOLDEN_RATIO: f64 = 1.618;

/// The hairline is not tracked reliably, so full face height is estimated
/// from glabella-to-chin distance by this factor.
const FACE_HEIGHT_SCALE: f64 = 1.6;
const GOLDEN_RATIO_PENALTY: f64 = 250.0;

const IDEAL_MIDFACE_RATIO: f64 = 1.0;
const MIDFACE_PENALTY: f64 = 100.0;

const GOLDEN_RATIO_WEIGHT: f64 = 0.6;
const MIDFACE_WEIGHT: f64 = 0.4;

/// Output of [`proportion_score`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionScore {
    /// Weighted composite, 0–100.
    pub score: f64,
    /// Raw estimated height / zygomatic width; a placeholder 0 when the
    /// width is zero.
    pub golden_ratio: Reading<f64>,
    /// Raw inner-eye distance / glabella-to-nose-tip distance; a placeholder
    /// when that distance or the zygomatic width is zero.
    pub midface_ratio: Reading<f64>,
    /// Golden-ratio sub-score before blending, 0–100.
    pub golden_ratio_score: f64,
    /// Midface sub-score before blending, 0–100.
    pub midface_score: f64,
}

impl ProportionScore {
    /// Result for a face whose zygomatic width is zero.
    const DEGENERATE: Self = Self {
        score: 0.0,
        golden_ratio: Reading::Placeholder(0.0),
        midface_ratio: Reading::Placeholder(0.0),
        golden_ratio_score: 0.0,
        midface_score: 0.0,
    };
}

pub fn proportion_score(landmarks: &LandmarkSet) -> ProportionScore {
    let width = distance(&landmarks[Landmark::LeftZygoma], &landmarks[Landmark::RightZygoma]);
    if width == 0.0 {
        tracing::debug!("zygomatic width is zero; proportions not scored");
        return ProportionScore::DEGENERATE;
    }

    let height = distance(&landmarks[Landmark::Glabella], &landmarks[Landmark::Chin]) * FACE_HEIGHT_SCALE;
    let golden_ratio = height / width;
    let golden_ratio_score =
        (100.0 - (golden_ratio - GOLDEN_RATIO).abs() * GOLDEN_RATIO_PENALTY).max(0.0);

    let midface_height = distance(&landmarks[Landmark::Glabella], &landmarks[Landmark::NoseTip]);
    let inner_eye_distance =
        distance(&landmarks[Landmark::LeftEyeInner], &landmarks[Landmark::RightEyeInner]);
    let midface_ratio = if midface_height > 0.0 {
        Reading::Measured(inner_eye_distance / midface_height)
    } else {
        Reading::Placeholder(IDEAL_MIDFACE_RATIO)
    };
    let midface_score =
        (100.0 - (midface_ratio.value() - IDEAL_MIDFACE_RATIO).abs() * MIDFACE_PENALTY).max(0.0);

    ProportionScore {
        score: golden_ratio_score * GOLDEN_RATIO_WEIGHT + midface_score * MIDFACE_WEIGHT,
        golden_ratio: Reading::Measured(golden_ratio),
        midface_ratio,
        golden_ratio_score,
        midface_score,
    }
}
