//! Synthetic meshes for unit tests.

use crate::landmarks::{Landmark, MESH_POINT_COUNT};
use crate::types::{LandmarkSet, Point};

pub(crate) struct FaceBuilder {
    points: Vec<Point>,
}

impl FaceBuilder {
    /// Every point at the same position.
    pub(crate) fn uniform(x: f64, y: f64) -> Self {
        Self {
            points: vec![Point::new(x, y, 0.0); MESH_POINT_COUNT],
        }
    }

    /// A level, mirrored frontal face centered on x = 0.5.
    ///
    /// Coordinates are dyadic so mirrored offsets are bit-identical.
    /// Zygomatic width 0.625, glabella-to-chin 0.625 (ratio 1.6 after
    /// scaling), inner-eye distance equal to glabella-to-nose-tip (midface
    /// ratio 1.0), eye corners level (tilt 0).
    pub(crate) fn frontal() -> Self {
        Self::uniform(0.5, 0.5)
            .set(Landmark::NoseTip, 0.5, 0.5)
            .set(Landmark::Subnasale, 0.5, 0.53125)
            .set(Landmark::Glabella, 0.5, 0.25)
            .set(Landmark::Chin, 0.5, 0.875)
            .set(Landmark::LeftEyeInner, 0.375, 0.375)
            .set(Landmark::RightEyeInner, 0.625, 0.375)
            .set(Landmark::LeftEyeOuter, 0.25, 0.375)
            .set(Landmark::RightEyeOuter, 0.75, 0.375)
            .set(Landmark::LeftZygoma, 0.1875, 0.4375)
            .set(Landmark::RightZygoma, 0.8125, 0.4375)
            .set(Landmark::LeftGonion, 0.25, 0.75)
            .set(Landmark::RightGonion, 0.75, 0.75)
            .set(Landmark::LeftJaw, 0.3125, 0.8125)
            .set(Landmark::RightJaw, 0.6875, 0.8125)
            .set(Landmark::LeftMouthCorner, 0.4375, 0.6875)
            .set(Landmark::RightMouthCorner, 0.5625, 0.6875)
    }

    pub(crate) fn set(mut self, landmark: Landmark, x: f64, y: f64) -> Self {
        self.points[landmark.index()] = Point::new(x, y, 0.0);
        self
    }

    pub(crate) fn points(self) -> Vec<Point> {
        self.points
    }

    pub(crate) fn build(self) -> LandmarkSet {
        LandmarkSet::try_from(self.points).expect("builder always yields a full mesh")
    }
}
