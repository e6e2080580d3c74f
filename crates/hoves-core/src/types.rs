//! Mesh input types and the grouped metrics record.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::analysis::AnalysisError;
use crate::landmarks::{Landmark, MESH_POINT_COUNT};

/// A single mesh point. `x` and `y` are normalized to the image frame;
/// `z` is depth-scaled and may be absent in the input (defaults to 0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A full 468-point face mesh.
///
/// Shorter inputs are rejected. Longer ones (detectors that append refined
/// iris points produce 478) keep their first 468 points. Coordinate values
/// are not checked: degenerate or out-of-range geometry is scored, not
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    /// Copy a mesh out of a borrowed slice.
    pub fn from_slice(points: &[Point]) -> Result<Self, AnalysisError> {
        Self::try_from(points.to_vec())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl TryFrom<Vec<Point>> for LandmarkSet {
    type Error = AnalysisError;

    fn try_from(mut points: Vec<Point>) -> Result<Self, Self::Error> {
        if points.len() < MESH_POINT_COUNT {
            return Err(AnalysisError::InvalidInput {
                expected: MESH_POINT_COUNT,
                actual: points.len(),
            });
        }
        points.truncate(MESH_POINT_COUNT);
        Ok(Self { points })
    }
}

impl Index<Landmark> for LandmarkSet {
    type Output = Point;

    fn index(&self, landmark: Landmark) -> &Point {
        // Length is fixed at construction and every index is < MESH_POINT_COUNT.
        &self.points[landmark.index()]
    }
}

/// An output value tagged with where it came from.
///
/// `Placeholder` values are fixed constants standing in for measurements the
/// engine does not make yet. They are never presented as measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Reading<T> {
    Measured(T),
    Placeholder(T),
}

impl<T: Copy> Reading<T> {
    pub fn value(&self) -> T {
        match *self {
            Reading::Measured(v) | Reading::Placeholder(v) => v,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, Reading::Measured(_))
    }

    /// Apply `f` to the value, keeping the tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reading<U> {
        match self {
            Reading::Measured(v) => Reading::Measured(f(v)),
            Reading::Placeholder(v) => Reading::Placeholder(f(v)),
        }
    }
}

/// Headline metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicMetrics {
    /// Left/right symmetry, 0–100.
    pub symmetry: Reading<f64>,
    /// Skin clarity, 0–100.
    pub skin_clarity: Reading<u32>,
    /// Estimated face height over zygomatic width.
    pub golden_ratio: Reading<f64>,
    /// Display score, 1.0–9.8.
    pub overall_score: Reading<f64>,
}

/// Detailed anatomical measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpertMetrics {
    /// Average canthal tilt in degrees; positive means the outer corners sit higher.
    pub canthal_tilt: Reading<f64>,
    /// Inner-eye distance as a fraction of zygomatic width.
    pub intercanthal_distance: Reading<f64>,
    /// Mandibular angle in degrees.
    pub mandibular_angle: Reading<f64>,
    pub zygomatic_prominence: Reading<f64>,
    /// Inner-eye distance over glabella-to-nose-tip distance.
    pub midface_ratio: Reading<f64>,
    /// Upper, middle and lower thirds as fractions of total face height.
    pub facial_thirds: Reading<[f64; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroomingMetrics {
    pub forehead_height: Reading<f64>,
    pub beard_density: Reading<u32>,
    pub hair_volume: Reading<f64>,
    pub hair_type: Reading<&'static str>,
}

/// Full result of one analysis.
///
/// Values are kept at full precision; call [`rounded`](Self::rounded) before
/// handing the record to a display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisMetrics {
    pub basic: BasicMetrics,
    pub expert: ExpertMetrics,
    pub grooming: GroomingMetrics,
}

impl AnalysisMetrics {
    /// Copy of this record rounded to display precision.
    ///
    /// Scores and angles get one decimal, ratios three, prominence and hair
    /// volume two. Measured/placeholder tags are unchanged.
    pub fn rounded(&self) -> Self {
        let basic = &self.basic;
        let expert = &self.expert;
        let grooming = &self.grooming;

        Self {
            basic: BasicMetrics {
                symmetry: basic.symmetry.map(|v| round_to(v, 1)),
                skin_clarity: basic.skin_clarity,
                golden_ratio: basic.golden_ratio.map(|v| round_to(v, 3)),
                overall_score: basic.overall_score.map(|v| round_to(v, 1)),
            },
            expert: ExpertMetrics {
                canthal_tilt: expert.canthal_tilt.map(|v| round_to(v, 1)),
                intercanthal_distance: expert.intercanthal_distance.map(|v| round_to(v, 3)),
                mandibular_angle: expert.mandibular_angle.map(|v| round_to(v, 1)),
                zygomatic_prominence: expert.zygomatic_prominence.map(|v| round_to(v, 2)),
                midface_ratio: expert.midface_ratio.map(|v| round_to(v, 3)),
                facial_thirds: expert
                    .facial_thirds
                    .map(|thirds| thirds.map(|t| round_to(t, 3))),
            },
            grooming: GroomingMetrics {
                forehead_height: grooming.forehead_height.map(|v| round_to(v, 3)),
                beard_density: grooming.beard_density,
                hair_volume: grooming.hair_volume.map(|v| round_to(v, 2)),
                hair_type: grooming.hair_type,
            },
        }
    }
}

/// Rule-based commentary derived from a metrics record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub fun_facts: Vec<String>,
    pub recommendations: Vec<String>,
    pub routine_guide: Vec<String>,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(n: usize) -> Vec<Point> {
        vec![Point::new(0.5, 0.5, 0.0); n]
    }

    #[test]
    fn test_landmark_set_exact_length() {
        assert!(LandmarkSet::try_from(mesh(MESH_POINT_COUNT)).is_ok());
    }

    #[test]
    fn test_landmark_set_rejects_short() {
        let err = LandmarkSet::try_from(mesh(467)).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidInput { expected: 468, actual: 467 }
        );
    }

    #[test]
    fn test_landmark_set_truncates_iris_refined_mesh() {
        let mut points = mesh(478);
        points[467] = Point::new(0.1, 0.2, 0.0);
        points[470] = Point::new(0.9, 0.9, 0.0);
        let set = LandmarkSet::from_slice(&points).unwrap();
        assert_eq!(set.points().len(), MESH_POINT_COUNT);
        assert_eq!(set.points()[467], Point::new(0.1, 0.2, 0.0));
    }

    #[test]
    fn test_landmark_set_rejects_empty() {
        assert!(LandmarkSet::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_index_by_landmark() {
        let mut points = mesh(MESH_POINT_COUNT);
        points[152] = Point::new(0.5, 0.9, 0.0);
        let set = LandmarkSet::try_from(points).unwrap();
        assert_eq!(set[Landmark::Chin], Point::new(0.5, 0.9, 0.0));
    }

    #[test]
    fn test_point_missing_z_defaults() {
        let p: Point = serde_json::from_str(r#"{"x": 0.25, "y": 0.75}"#).unwrap();
        assert_eq!(p, Point::new(0.25, 0.75, 0.0));
    }

    #[test]
    fn test_reading_serialization() {
        let measured = serde_json::to_value(Reading::Measured(1.5)).unwrap();
        assert_eq!(measured, serde_json::json!({"source": "measured", "value": 1.5}));

        let placeholder = serde_json::to_value(Reading::Placeholder(85u32)).unwrap();
        assert_eq!(placeholder, serde_json::json!({"source": "placeholder", "value": 85}));
    }

    #[test]
    fn test_reading_map_keeps_tag() {
        let r = Reading::Placeholder(2.0).map(|v| v * 2.0);
        assert_eq!(r, Reading::Placeholder(4.0));
        assert!(!r.is_measured());
        assert!(Reading::Measured(1.0).is_measured());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.61834, 3), 1.618);
        assert_eq!(round_to(87.25, 1), 87.3);
        assert_eq!(round_to(-2.04, 1), -2.0);
    }
}
