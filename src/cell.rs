//! Voronoi Cell Structure
//!
//! Pairs a site with the convex region of the bounding polygon that is at
//! least as close to that site as to any other.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::polygon::{Point, Polygon};

/// A single Voronoi cell inside the bounding polygon
///
/// Cells come out of tessellation in the same order as the input sites.
///
/// # Empty Cells
///
/// The polygon may have zero vertices when the site is fully dominated by
/// the others, which can happen with near-duplicate sites.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// The generating site
    pub site: Point,

    /// The site's region, clipped to the bounding polygon
    pub cell: Polygon,
}

impl Cell {
    pub fn new(site: Point, cell: Polygon) -> Self {
        Self { site, cell }
    }

    /// Get the vertex count (polygon complexity)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.cell.len()
    }

    /// True when the site was clipped away entirely
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cell.is_empty()
    }

    /// Shoelace area of the cell polygon
    #[inline]
    pub fn area(&self) -> f64 {
        self.cell.area()
    }

    /// Centroid of the cell polygon, `None` for an empty cell
    ///
    /// This is where Lloyd's relaxation moves the site.
    #[inline]
    pub fn centroid(&self) -> Option<Point> {
        self.cell.centroid()
    }

    /// Check whether a point falls inside this cell (boundary inclusive)
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.cell.contains(point)
    }
}
