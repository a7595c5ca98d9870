//! Half-plane polygon clipping (Sutherland–Hodgman, single plane)
//!
//! Clipping a convex polygon by a half-plane always yields a convex polygon
//! or the empty polygon.

use crate::polygon::{Point, Polygon};

/// The half-plane `a * x + b * y - c <= 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl HalfPlane {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Points at least as close to `site` as to `other`
    ///
    /// Expands `|p - site|² <= |p - other|²` into
    /// `2(o.x - s.x)p.x + 2(o.y - s.y)p.y - (|o|² - |s|²) <= 0`.
    pub fn bisector(site: Point, other: Point) -> Self {
        Self {
            a: 2.0 * (other.x - site.x),
            b: 2.0 * (other.y - site.y),
            c: (other.x * other.x - site.x * site.x) + (other.y * other.y - site.y * site.y),
        }
    }

    /// Signed value; `<= 0` means kept
    #[inline]
    pub fn classify(&self, point: Point) -> f64 {
        self.a * point.x + self.b * point.y - self.c
    }

    /// Clip `polygon` to this half-plane
    #[inline]
    pub fn clip(&self, polygon: &Polygon) -> Polygon {
        clip_polygon(polygon, |p| self.classify(p))
    }
}

/// Clip a convex polygon against the half-plane `classify(p) <= 0`
///
/// Walks every edge `(prev, curr)` once:
///
/// - inside → inside: keep `curr`
/// - inside → outside: emit the crossing
/// - outside → inside: emit the crossing, then `curr`
/// - outside → outside: drop
///
/// A polygon entirely inside comes back vertex-for-vertex unchanged; one
/// entirely outside comes back empty. A vertex lying exactly on the line
/// next to an outside vertex is emitted twice (once as the crossing); the
/// zero-length edge does not change area or convexity.
///
/// # Degenerate crossings
///
/// The crossing parameter is `t = c(prev) / (c(prev) - c(curr))`. When the
/// denominator is zero or `t` is not finite (a classifier returning NaN),
/// no crossing is emitted for that edge: it is treated as lying wholly on
/// `prev`'s side, and `curr` is still kept when it is inside. Finite `t` is
/// clamped to `[0, 1]` so the crossing never leaves the edge.
pub fn clip_polygon<F>(polygon: &Polygon, classify: F) -> Polygon
where
    F: Fn(Point) -> f64,
{
    let vertices = polygon.vertices();
    let Some(&last) = vertices.last() else {
        return Polygon::empty();
    };

    let mut output = Vec::with_capacity(vertices.len() + 1);
    let mut prev = last;
    let mut prev_value = classify(prev);

    for &curr in vertices {
        let curr_value = classify(curr);
        let prev_inside = prev_value <= 0.0;
        let curr_inside = curr_value <= 0.0;

        if prev_inside != curr_inside {
            if let Some(t) = crossing(prev_value, curr_value) {
                output.push(prev + (curr - prev) * t);
            }
        }
        if curr_inside {
            output.push(curr);
        }

        prev = curr;
        prev_value = curr_value;
    }

    Polygon::new(output)
}

/// Interpolation parameter of the zero crossing, if well defined
#[inline]
fn crossing(prev_value: f64, curr_value: f64) -> Option<f64> {
    let denominator = prev_value - curr_value;
    if denominator == 0.0 {
        return None;
    }
    let t = prev_value / denominator;
    t.is_finite().then(|| t.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> Polygon {
        Polygon::rectangle(10.0, 10.0)
    }

    #[test]
    fn test_noop_clip() {
        let poly = square();
        let clipped = clip_polygon(&poly, |p| p.x - 20.0);
        assert_eq!(clipped, poly);
    }

    #[test]
    fn test_full_exclusion() {
        let clipped = clip_polygon(&square(), |p| 20.0 - p.x);
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let clipped = clip_polygon(&Polygon::empty(), |p| p.x);
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_half_clip() {
        let clipped = clip_polygon(&square(), |p| p.x - 5.0);
        assert_eq!(clipped.len(), 4);
        assert_abs_diff_eq!(clipped.area(), 50.0, epsilon = 1e-9);
        assert!(clipped.vertices().iter().all(|v| v.x <= 5.0));
        assert!(clipped.is_convex());
    }

    #[test]
    fn test_corner_clip_adds_vertex() {
        // Cut off the (10, 10) corner
        let clipped = clip_polygon(&square(), |p| p.x + p.y - 15.0);
        assert_eq!(clipped.len(), 5);
        assert_abs_diff_eq!(clipped.area(), 100.0 - 12.5, epsilon = 1e-9);
        assert!(clipped.is_convex());
    }

    #[test]
    fn test_boundary_vertices_are_kept() {
        // Line through two vertices: both count as inside, and the crossings
        // land on them again as zero-length edges
        let clipped = clip_polygon(&square(), |p| p.x + p.y - 10.0);
        assert_eq!(clipped.len(), 5);
        assert!(clipped.vertices().iter().all(|v| v.x + v.y <= 10.0));
        assert_abs_diff_eq!(clipped.area(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nan_classification_emits_no_crossing() {
        let corner = Point::new(10.0, 10.0);
        let clipped = clip_polygon(&square(), |p| if p == corner { f64::NAN } else { -1.0 });

        assert_eq!(
            clipped.vertices(),
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)]
        );
    }

    #[test]
    fn test_crossing_guard() {
        assert_eq!(crossing(1.0, 1.0), None);
        assert_eq!(crossing(f64::NAN, -1.0), None);
        assert_eq!(crossing(2.0, -2.0), Some(0.5));
        assert_eq!(crossing(-1.0, 3.0), Some(0.25));
    }

    #[test]
    fn test_bisector_classification() {
        let plane = HalfPlane::bisector(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(plane.classify(Point::new(4.0, 3.0)) < 0.0);
        assert_eq!(plane.classify(Point::new(5.0, 7.0)), 0.0);
        assert!(plane.classify(Point::new(6.0, -1.0)) > 0.0);

        let clipped = plane.clip(&square());
        assert_abs_diff_eq!(clipped.area(), 50.0, epsilon = 1e-9);
    }
}
