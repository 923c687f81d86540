//! Vector and angle helpers
//!
//! Positions are plain `(f32, f32)` tuples throughout the engine.

use std::f32::consts::{PI, TAU};

// ============================================================================
// Points & vectors
// ============================================================================

#[inline]
pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

/// Squared distance (comparison only, skips the sqrt)
#[inline]
pub fn distance_sq(a: (f32, f32), b: (f32, f32)) -> f32 {
    (b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)
}

/// Unit vector, or `None` for a (near) zero vector
#[inline]
pub fn normalize(v: (f32, f32)) -> Option<(f32, f32)> {
    let len = (v.0.powi(2) + v.1.powi(2)).sqrt();
    if len > 0.001 {
        Some((v.0 / len, v.1 / len))
    } else {
        None
    }
}

#[inline]
pub fn angle_to_direction(angle: f32) -> (f32, f32) {
    (angle.cos(), angle.sin())
}

/// Heading from `from` toward `to`. Coincident points give 0.
#[inline]
pub fn angle_between(from: (f32, f32), to: (f32, f32)) -> f32 {
    (to.1 - from.1).atan2(to.0 - from.0)
}

#[inline]
pub fn lerp(from: (f32, f32), to: (f32, f32), t: f32) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
}

pub fn centroid(points: &[(f32, f32)]) -> Option<(f32, f32)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f32;
    let sum = points.iter().fold((0.0, 0.0), |acc, p| (acc.0 + p.0, acc.1 + p.1));
    Some((sum.0 / n, sum.1 / n))
}

// ============================================================================
// Angles
// ============================================================================

/// Wrap an angle into `[-PI, PI)`
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Signed shortest rotation from `from` to `to`
#[inline]
pub fn angle_diff(to: f32, from: f32) -> f32 {
    normalize_angle(to - from)
}

/// Blend two headings along the shorter arc. `weight` = 1 returns `toward`.
#[inline]
pub fn blend_angles(base: f32, toward: f32, weight: f32) -> f32 {
    normalize_angle(base + angle_diff(toward, base) * weight.clamp(0.0, 1.0))
}

// ============================================================================
// Segments
// ============================================================================

/// Shortest distance from a point to a segment (projection clamped to the
/// segment). A zero-length segment degrades to point distance.
pub fn point_to_segment_distance(
    point: (f32, f32),
    seg_start: (f32, f32),
    seg_end: (f32, f32),
) -> f32 {
    let (px, py) = point;
    let (x1, y1) = seg_start;
    let (x2, y2) = seg_end;

    let len_sq = (x2 - x1).powi(2) + (y2 - y1).powi(2);
    if len_sq < 0.0001 {
        return distance(point, seg_start);
    }

    let t = (((px - x1) * (x2 - x1) + (py - y1) * (y2 - y1)) / len_sq).clamp(0.0, 1.0);
    let closest = (x1 + t * (x2 - x1), y1 + t * (y2 - y1));
    distance(point, closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert!((distance((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 0.001);
        assert!(distance((1.0, 1.0), (1.0, 1.0)).abs() < 0.001);
        assert!((distance_sq((0.0, 0.0), (3.0, 4.0)) - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert!(normalize((0.0, 0.0)).is_none());
        let n = normalize((3.0, 4.0)).unwrap();
        assert!((n.0 - 0.6).abs() < 0.001);
        assert!((n.1 - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_angle_diff_takes_short_way() {
        let from = 170f32.to_radians();
        let to = -170f32.to_radians();
        let diff = angle_diff(to, from);
        assert!((diff - 20f32.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn test_blend_angles_across_wrap() {
        let base = 170f32.to_radians();
        let toward = -170f32.to_radians();
        let mid = blend_angles(base, toward, 0.5);
        assert!((mid.abs() - PI).abs() < 1e-4);
    }

    #[test]
    fn test_point_to_segment_distance() {
        let d = point_to_segment_distance((5.0, 3.0), (0.0, 0.0), (10.0, 0.0));
        assert!((d - 3.0).abs() < 0.001);

        // Beyond the start point
        let d2 = point_to_segment_distance((-2.0, 0.0), (0.0, 0.0), (10.0, 0.0));
        assert!((d2 - 2.0).abs() < 0.001);

        // Beyond the end point
        let d3 = point_to_segment_distance((12.0, 0.0), (0.0, 0.0), (10.0, 0.0));
        assert!((d3 - 2.0).abs() < 0.001);

        // Degenerate segment
        let d4 = point_to_segment_distance((3.0, 4.0), (0.0, 0.0), (0.0, 0.0));
        assert!((d4 - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_centroid() {
        assert!(centroid(&[]).is_none());
        let c = centroid(&[(0.0, 0.0), (10.0, 20.0)]).unwrap();
        assert_eq!(c, (5.0, 10.0));
    }
}
