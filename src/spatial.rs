//! Spatial indexing for fast position-to-cell lookups
//!
//! This module is only available with the `spatial-index` feature.

use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

use crate::polygon::Point;

/// KD-tree over Voronoi sites
///
/// A point belongs to the cell of its nearest site, so a nearest-neighbor
/// query answers "which cell contains this point" without testing polygons.
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Query: O(log n)
#[derive(Clone)]
pub struct SiteIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
}

impl SiteIndex {
    /// Build an index from sites, keyed by their position in `sites`
    ///
    /// # Example
    ///
    /// ```
    /// use blue_voronoi::{Point, SiteIndex};
    ///
    /// let sites = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)];
    /// let index = SiteIndex::new(&sites);
    /// assert_eq!(index.find_nearest(Point::new(9.0, 1.0)), 1);
    /// ```
    pub fn new(sites: &[Point]) -> Self {
        let points: Vec<[f64; 2]> = sites.iter().map(|s| [s.x, s.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Index of the site nearest to `position`
    pub fn find_nearest(&self, position: Point) -> usize {
        let result = self.tree.nearest_one::<SquaredEuclidean>(&[position.x, position.y]);
        result.item
    }
}
