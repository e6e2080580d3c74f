//! Feature quality: canthal tilt, blended with jaw and skin placeholders.

use crate::geometry::angle_degrees;
use crate::landmarks::Landmark;
use crate::types::{LandmarkSet, Point};

/// Jaw definition is not measured yet; this is its fixed sub-score.
pub const JAW_PLACEHOLDER_SCORE: f64 = 80.0;
/// Skin clarity is not measured yet; this is its fixed sub-score.
pub const SKIN_PLACEHOLDER_SCORE: f64 = 85.0;
/// Reported mandibular angle in degrees until the jaw is measured.
pub const MANDIBULAR_ANGLE_PLACEHOLDER: f64 = 120.0;

const TILT_WEIGHT: f64 = 0.5;
const JAW_WEIGHT: f64 = 0.3;
const SKIN_WEIGHT: f64 = 0.2;

/// Output of [`feature_score`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureScore {
    /// Weighted composite, 0–100.
    pub score: f64,
    /// Average canthal tilt of both eyes, degrees.
    pub canthal_tilt: f64,
    pub mandibular_angle: f64,
}

/// Canthal tilt of one eye in degrees; positive when the outer corner sits
/// higher in the image than the inner corner.
///
/// The outer corner is reflected to the +x side of the inner corner first, so
/// both eyes are measured in the same direction regardless of image side.
pub fn canthal_tilt(inner: &Point, outer: &Point) -> f64 {
    let lateral = Point {
        x: inner.x + (outer.x - inner.x).abs(),
        ..*outer
    };
    -angle_degrees(inner, &lateral)
}

/// Map a tilt in degrees to a 0–100 sub-score. Positive tilt is preferred;
/// anything above 4° scores full marks.
pub fn tilt_score(tilt: f64) -> f64 {
    if tilt > 4.0 {
        100.0
    } else if tilt > 0.0 {
        70.0 + tilt * 7.5
    } else {
        (70.0 + tilt * 10.0).max(0.0)
    }
}

pub fn feature_score(landmarks: &LandmarkSet) -> FeatureScore {
    let left = canthal_tilt(&landmarks[Landmark::LeftEyeInner], &landmarks[Landmark::LeftEyeOuter]);
    let right = canthal_tilt(&landmarks[Landmark::RightEyeInner], &landmarks[Landmark::RightEyeOuter]);
    let avg_tilt = (left + right) / 2.0;

    let score = tilt_score(avg_tilt) * TILT_WEIGHT
        + JAW_PLACEHOLDER_SCORE * JAW_WEIGHT
        + SKIN_PLACEHOLDER_SCORE * SKIN_WEIGHT;

    FeatureScore {
        score,
        canthal_tilt: avg_tilt,
        mandibular_angle: MANDIBULAR_ANGLE_PLACEHOLDER,
    }
}
