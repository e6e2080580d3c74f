//! Named anatomical landmarks of the 468-point face mesh.
//!
//! Every scorer reads points through [`Landmark`] rather than raw mesh
//! indices, so the anatomical contract with the landmark detector lives in
//! this one table.

use serde::Serialize;

/// Number of points in a face mesh accepted by the engine.
pub const MESH_POINT_COUNT: usize = 468;

/// Anatomical landmarks the engine reads, mapped to their mesh index.
///
/// "Left" and "right" are labels from the mesh tables, not a guarantee of
/// which image side a point lands on. Scorers only use pair membership and
/// absolute offsets, never the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    NoseTip,
    Subnasale,
    /// Upper forehead reference point; also the top of the measured face height.
    Glabella,
    Chin,
    LeftEyeInner,
    LeftEyeOuter,
    RightEyeInner,
    RightEyeOuter,
    LeftJaw,
    RightJaw,
    LeftGonion,
    RightGonion,
    LeftZygoma,
    RightZygoma,
    LeftMouthCorner,
    RightMouthCorner,
}

impl Landmark {
    /// All named landmarks.
    pub const ALL: [Landmark; 16] = [
        Landmark::NoseTip,
        Landmark::Subnasale,
        Landmark::Glabella,
        Landmark::Chin,
        Landmark::LeftEyeInner,
        Landmark::LeftEyeOuter,
        Landmark::RightEyeInner,
        Landmark::RightEyeOuter,
        Landmark::LeftJaw,
        Landmark::RightJaw,
        Landmark::LeftGonion,
        Landmark::RightGonion,
        Landmark::LeftZygoma,
        Landmark::RightZygoma,
        Landmark::LeftMouthCorner,
        Landmark::RightMouthCorner,
    ];

    /// Mesh index of this landmark.
    pub const fn index(self) -> usize {
        match self {
            Landmark::NoseTip => 1,
            Landmark::Subnasale => 2,
            Landmark::Glabella => 10,
            Landmark::Chin => 152,
            Landmark::LeftEyeInner => 133,
            Landmark::LeftEyeOuter => 33,
            Landmark::RightEyeInner => 362,
            Landmark::RightEyeOuter => 263,
            Landmark::LeftJaw => 58,
            Landmark::RightJaw => 288,
            Landmark::LeftGonion => 172,
            Landmark::RightGonion => 397,
            Landmark::LeftZygoma => 454,
            Landmark::RightZygoma => 234,
            Landmark::LeftMouthCorner => 61,
            Landmark::RightMouthCorner => 291,
        }
    }

    /// Human-readable name, as printed by `hoves landmarks`.
    pub const fn name(self) -> &'static str {
        match self {
            Landmark::NoseTip => "nose tip",
            Landmark::Subnasale => "subnasale",
            Landmark::Glabella => "glabella",
            Landmark::Chin => "chin",
            Landmark::LeftEyeInner => "left eye inner corner",
            Landmark::LeftEyeOuter => "left eye outer corner",
            Landmark::RightEyeInner => "right eye inner corner",
            Landmark::RightEyeOuter => "right eye outer corner",
            Landmark::LeftJaw => "left jaw",
            Landmark::RightJaw => "right jaw",
            Landmark::LeftGonion => "left gonion",
            Landmark::RightGonion => "right gonion",
            Landmark::LeftZygoma => "left zygoma",
            Landmark::RightZygoma => "right zygoma",
            Landmark::LeftMouthCorner => "left mouth corner",
            Landmark::RightMouthCorner => "right mouth corner",
        }
    }
}

/// Left/right pairs compared against the midline by the symmetry scorer.
pub const SYMMETRY_PAIRS: [(Landmark, Landmark); 4] = [
    (Landmark::LeftEyeOuter, Landmark::RightEyeOuter),
    (Landmark::LeftGonion, Landmark::RightGonion),
    (Landmark::LeftZygoma, Landmark::RightZygoma),
    (Landmark::LeftMouthCorner, Landmark::RightMouthCorner),
];
