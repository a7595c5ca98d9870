//! Convex Polygon Type
//!
//! An implicitly closed ring of points. Every polygon produced by this crate
//! is simple and convex (or empty): the bounding rectangle is convex and
//! clipping a convex polygon by a half-plane keeps it convex.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};

/// A planar point
pub type Point = DVec2;

/// An ordered, implicitly closed ring of vertices
///
/// The last vertex connects back to the first. Polygons are treated as
/// immutable values: clipping always returns a fresh polygon.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from vertices in winding order
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// The empty polygon (a fully clipped away region)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Axis-aligned rectangle `[(0,0), (w,0), (w,h), (0,h)]`
    ///
    /// # Example
    ///
    /// ```
    /// use blue_voronoi::Polygon;
    ///
    /// let rect = Polygon::rectangle(10.0, 4.0);
    /// assert_eq!(rect.len(), 4);
    /// assert_eq!(rect.area(), 40.0);
    /// ```
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(vec![
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over edges as `(prev, curr)` pairs, wrapping around
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[(i + n - 1) % n], self.vertices[i]))
    }

    /// Shoelace area, positive for counter-clockwise winding
    pub fn signed_area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        0.5 * self.edges().map(|(a, b)| a.perp_dot(b)).sum::<f64>()
    }

    /// Unsigned shoelace area
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid
    ///
    /// Degenerate (zero-area) polygons fall back to the mean of their vertices.
    /// Returns `None` for the empty polygon.
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }

        let signed_area = self.signed_area();
        if signed_area.abs() <= f64::EPSILON {
            let sum: Point = self.vertices.iter().copied().sum();
            return Some(sum / self.vertices.len() as f64);
        }

        let weighted: Point = self
            .edges()
            .map(|(a, b)| (a + b) * a.perp_dot(b))
            .sum();
        Some(weighted / (6.0 * signed_area))
    }

    /// Boundary-inclusive point-in-polygon test for convex polygons
    ///
    /// Works for either winding order.
    pub fn contains(&self, point: Point) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }

        let mut sign = 0.0_f64;
        for (a, b) in self.edges() {
            let cross = (b - a).perp_dot(point - a);
            if cross == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Check that all turns go the same way (collinear runs allowed)
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }

        let mut sign = 0.0_f64;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let turn = (b - a).perp_dot(c - b);
            if turn == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Reject bounding polygons with fewer than 3 vertices
    pub fn validate_bounding(&self) -> Result<()> {
        if self.vertices.len() < 3 {
            return Err(VoronoiError::InvalidArgument(format!(
                "bounding polygon needs at least 3 vertices (got {})",
                self.vertices.len()
            )));
        }
        Ok(())
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
