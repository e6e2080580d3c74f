//! Planar geometry over mesh points. Depth (`z`) is ignored throughout.

use crate::types::Point;

/// Euclidean distance in the image plane.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Angle of the vector `p1 → p2` in degrees, in `(-180, 180]`.
///
/// Image y grows downward, so a vector pointing up the image has a negative
/// angle. Callers that want "upward is positive" negate the result.
pub fn angle_degrees(p1: &Point, p2: &Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y, 0.0)
    }

    #[test]
    fn test_distance_pythagorean() {
        assert!((distance(&p(0.0, 0.0), &p(0.3, 0.4)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_distance_ignores_depth() {
        let a = Point::new(0.1, 0.1, 0.0);
        let b = Point::new(0.1, 0.1, 0.9);
        assert_eq!(distance(&a, &b), 0.0);
    }

    #[test]
    fn test_angle_axes() {
        let o = p(0.5, 0.5);
        assert!((angle_degrees(&o, &p(0.6, 0.5))).abs() < 1e-12);
        assert!((angle_degrees(&o, &p(0.5, 0.6)) - 90.0).abs() < 1e-12);
        assert!((angle_degrees(&o, &p(0.5, 0.4)) + 90.0).abs() < 1e-12);
        assert!((angle_degrees(&o, &p(0.4, 0.5)) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_coincident_points() {
        let o = p(0.5, 0.5);
        assert_eq!(angle_degrees(&o, &o), 0.0);
    }
}
