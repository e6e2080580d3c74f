//! Left/right symmetry about the nose-tip midline.

use crate::landmarks::{Landmark, SYMMETRY_PAIRS};
use crate::types::LandmarkSet;

/// Points lost per unit of average normalized asymmetry.
/// A 5% relative deviation costs 30 points.
const ASYMMETRY_PENALTY: f64 = 600.0;

/// Score symmetry from 0 (asymmetric) to 100 (perfectly mirrored).
///
/// For each pair, the horizontal offsets of both sides from the nose tip are
/// compared as `|l - r| / (l + r)`. Pairs with zero combined offset add
/// nothing but still count toward the average.
pub fn symmetry_score(landmarks: &LandmarkSet) -> f64 {
    let nose_x = landmarks[Landmark::NoseTip].x;

    let total: f64 = SYMMETRY_PAIRS
        .iter()
        .map(|&(left, right)| {
            let d_left = (landmarks[left].x - nose_x).abs();
            let d_right = (landmarks[right].x - nose_x).abs();
            let width = d_left + d_right;
            if width > 0.0 {
                (d_left - d_right).abs() / width
            } else {
                0.0
            }
        })
        .sum();

    let avg_asymmetry = total / SYMMETRY_PAIRS.len() as f64;
    (100.0 - avg_asymmetry * ASYMMETRY_PENALTY).max(0.0)
}
