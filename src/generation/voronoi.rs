//! Voronoi cell construction by half-plane clipping
//!
//! Each site's cell starts as the bounding polygon and is clipped against the
//! perpendicular bisector of every other site. Cells are computed
//! independently of one another, so the per-site map can run in parallel
//! (`parallel` feature) without changing the output order.
//!
//! Cost is `O(n² · m)` for `n` sites and average cell vertex count `m`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::clip::HalfPlane;
use crate::cell::Cell;
use crate::error::{Result, VoronoiError};
use crate::polygon::{Point, Polygon};
use crate::util::Timed;

/// Compute the Voronoi cell of `site` inside `bounding`
///
/// Folds over every other site, clipping the running polygon to the side of
/// the bisector closer to `site`. Sites with exactly equal coordinates to
/// `site` are skipped; near-duplicates are not and may leave a sliver or an
/// empty cell.
///
/// `all_sites` may contain `site` itself.
pub fn compute_cell(site: Point, all_sites: &[Point], bounding: &Polygon) -> Polygon {
    all_sites
        .iter()
        .filter(|&&other| other != site)
        .fold(bounding.clone(), |cell, &other| {
            if cell.is_empty() {
                return cell;
            }
            HalfPlane::bisector(site, other).clip(&cell)
        })
}

/// Compute the clipped Voronoi diagram of `sites`
///
/// Returns one cell per site, in input order. The cells partition
/// `bounding`: their areas sum to the bounding area and their interiors are
/// disjoint.
///
/// # Errors
///
/// Returns `InvalidArgument` if `sites` is empty, any site has a NaN or
/// infinite coordinate, or `bounding` has fewer than 3 vertices. Nothing is
/// computed in that case.
///
/// # Example
///
/// ```
/// use blue_voronoi::{compute_voronoi, Point, Polygon};
///
/// let sites = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
/// let cells = compute_voronoi(&sites, &Polygon::rectangle(10.0, 10.0)).unwrap();
///
/// assert_eq!(cells.len(), 2);
/// assert_eq!(cells[0].area(), 50.0);
/// ```
pub fn compute_voronoi(sites: &[Point], bounding: &Polygon) -> Result<Vec<Cell>> {
    if sites.is_empty() {
        return Err(VoronoiError::InvalidArgument(
            "site list must not be empty".to_string(),
        ));
    }
    if let Some((index, site)) = sites.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(VoronoiError::InvalidArgument(format!(
            "site {} has non-finite coordinates {:?}",
            index, site
        )));
    }
    bounding.validate_bounding()?;

    let _t = Timed::debug("Voronoi cells");

    #[cfg(feature = "parallel")]
    let iter = sites.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = sites.iter();

    let cells: Vec<Cell> = iter
        .map(|&site| Cell::new(site, compute_cell(site, sites, bounding)))
        .collect();

    let empty = cells.iter().filter(|c| c.is_empty()).count();
    if empty > 0 {
        log::debug!("[Voronoi] {} of {} cells clipped away", empty, cells.len());
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon {
        Polygon::rectangle(10.0, 10.0)
    }

    #[test]
    fn test_single_site_is_bounding() {
        let cells = compute_voronoi(&[Point::new(3.0, 4.0)], &square()).unwrap();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].cell, square());
    }

    #[test]
    fn test_compute_cell_skips_self() {
        let site = Point::new(2.0, 2.0);
        let cell = compute_cell(site, &[site, site], &square());
        assert_eq!(cell, square());
    }

    #[test]
    fn test_two_sites_bisect() {
        let sites = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let cells = compute_voronoi(&sites, &square()).unwrap();

        assert_relative_eq!(cells[0].area(), 50.0);
        assert_relative_eq!(cells[1].area(), 50.0);
        assert!(cells[0].cell.vertices().iter().all(|v| v.x <= 5.0));
        assert!(cells[1].cell.vertices().iter().all(|v| v.x >= 5.0));
    }

    #[test]
    fn test_cells_keep_input_order() {
        let sites = [
            Point::new(8.0, 8.0),
            Point::new(1.0, 1.0),
            Point::new(8.0, 1.0),
        ];
        let cells = compute_voronoi(&sites, &square()).unwrap();
        for (cell, site) in cells.iter().zip(sites.iter()) {
            assert_eq!(cell.site, *site);
            assert!(cell.contains(*site));
        }
    }

    #[test]
    fn test_cells_are_convex() {
        let sites = [
            Point::new(2.0, 3.0),
            Point::new(7.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(1.0, 8.0),
            Point::new(9.0, 9.0),
        ];
        let cells = compute_voronoi(&sites, &square()).unwrap();
        for cell in &cells {
            assert!(cell.cell.is_convex());
        }
    }

    #[test]
    fn test_duplicate_sites_share_cell() {
        // Exact duplicates skip each other, so both get the same region
        let sites = [
            Point::new(2.0, 5.0),
            Point::new(2.0, 5.0),
            Point::new(8.0, 5.0),
        ];
        let cells = compute_voronoi(&sites, &square()).unwrap();
        assert_eq!(cells[0].cell, cells[1].cell);
        assert_relative_eq!(cells[0].area(), 50.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            compute_voronoi(&[], &square()),
            Err(VoronoiError::InvalidArgument(_))
        ));

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let sites = [Point::new(2.0, 2.0), Point::new(bad, 1.0), Point::new(8.0, 8.0)];
            assert!(matches!(
                compute_voronoi(&sites, &square()),
                Err(VoronoiError::InvalidArgument(_))
            ));
        }

        let degenerate = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(matches!(
            compute_voronoi(&[Point::new(0.5, 0.0)], &degenerate),
            Err(VoronoiError::InvalidArgument(_))
        ));
    }
}
