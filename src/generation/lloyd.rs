//! Lloyd's Relaxation for uniform site distribution
//!
//! Lloyd's Relaxation iteratively evens out a site set by moving each site to
//! the centroid of its clipped Voronoi cell.

use super::voronoi::compute_voronoi;
use crate::error::{ensure_positive, Result, VoronoiError};
use crate::polygon::{Point, Polygon};

/// Options for Lloyd's relaxation algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LloydOptions {
    /// Maximum number of iterations to run
    pub max_iterations: usize,
    /// Stop when the largest site displacement falls below this fraction of
    /// `sqrt(bounding area)`. Set to 0.0 to always run every iteration.
    pub convergence_threshold: f64,
}

impl Default for LloydOptions {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            convergence_threshold: 0.01,
        }
    }
}

/// Apply Lloyd's Relaxation to a site set
///
/// Each iteration computes the clipped Voronoi diagram and moves every site to
/// its cell's centroid. Sites whose cell is empty stay where they are. The
/// number and order of sites never change.
///
/// # Errors
///
/// Same validation as [`compute_voronoi`], plus `InvalidArgument` for a
/// negative or non-finite convergence threshold.
pub fn lloyd_relaxation(
    mut sites: Vec<Point>,
    bounding: &Polygon,
    options: LloydOptions,
) -> Result<Vec<Point>> {
    if !(options.convergence_threshold >= 0.0 && options.convergence_threshold.is_finite()) {
        return Err(VoronoiError::InvalidArgument(format!(
            "convergence threshold must be >= 0 (got {})",
            options.convergence_threshold
        )));
    }
    bounding.validate_bounding()?;
    ensure_positive("bounding area", bounding.area())?;

    let convergence = options.convergence_threshold * bounding.area().sqrt();
    let mut iterations_run = 0;
    let mut converged = false;

    for iteration in 0..options.max_iterations {
        let cells = compute_voronoi(&sites, bounding)?;

        let mut max_displacement: f64 = 0.0;
        sites = cells
            .iter()
            .map(|cell| {
                let moved = cell.centroid().unwrap_or(cell.site);
                max_displacement = max_displacement.max(moved.distance(cell.site));
                moved
            })
            .collect();
        iterations_run = iteration + 1;

        log::debug!(
            "[Lloyd] Iter {}: max_disp={:.6}",
            iterations_run,
            max_displacement
        );

        if convergence > 0.0 && max_displacement < convergence {
            converged = true;
            break;
        }
    }

    log::info!(
        "[Lloyd] Finished: {} iterations (of max {}), converged={}",
        iterations_run,
        options.max_iterations,
        converged
    );

    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::poisson::sample_seeded;

    fn spread(sites: &[Point]) -> f64 {
        // Smallest pairwise distance; relaxation should not shrink it much
        let mut best = f64::INFINITY;
        for (i, p) in sites.iter().enumerate() {
            for q in &sites[i + 1..] {
                best = best.min(p.distance(*q));
            }
        }
        best
    }

    #[test]
    fn test_lloyd_relaxation() {
        let bounding = Polygon::rectangle(20.0, 20.0);
        let sites = sample_seeded(20.0, 20.0, 3.0, 30, 42).unwrap();
        let count = sites.len();

        let relaxed = lloyd_relaxation(sites, &bounding, LloydOptions::default()).unwrap();

        assert_eq!(relaxed.len(), count);
        for p in &relaxed {
            assert!(bounding.contains(*p));
        }
    }

    #[test]
    fn test_lloyd_moves_clustered_sites_apart() {
        let bounding = Polygon::rectangle(10.0, 10.0);
        let sites = vec![Point::new(4.9, 5.0), Point::new(5.1, 5.0)];
        let options = LloydOptions {
            max_iterations: 1,
            convergence_threshold: 0.0,
        };

        let relaxed = lloyd_relaxation(sites.clone(), &bounding, options).unwrap();
        assert!(spread(&relaxed) > spread(&sites));
        // Cell centroids of the two halves
        assert!((relaxed[0].x - 2.5).abs() < 1e-9);
        assert!((relaxed[1].x - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_lloyd_determinism() {
        let bounding = Polygon::rectangle(15.0, 15.0);
        let sites = sample_seeded(15.0, 15.0, 2.5, 30, 12345).unwrap();

        let a = lloyd_relaxation(sites.clone(), &bounding, LloydOptions::default()).unwrap();
        let b = lloyd_relaxation(sites, &bounding, LloydOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_lloyd_zero_iterations_is_identity() {
        let bounding = Polygon::rectangle(10.0, 10.0);
        let sites = vec![Point::new(1.0, 1.0), Point::new(3.0, 7.0)];
        let options = LloydOptions {
            max_iterations: 0,
            ..Default::default()
        };
        assert_eq!(lloyd_relaxation(sites.clone(), &bounding, options).unwrap(), sites);
    }

    #[test]
    fn test_lloyd_options_default() {
        let options = LloydOptions::default();
        assert_eq!(options.max_iterations, 5);
        assert!((options.convergence_threshold - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_lloyd_invalid_threshold() {
        let options = LloydOptions {
            max_iterations: 3,
            convergence_threshold: -1.0,
        };
        let result = lloyd_relaxation(vec![Point::new(1.0, 1.0)], &Polygon::rectangle(2.0, 2.0), options);
        assert!(matches!(result, Err(VoronoiError::InvalidArgument(_))));
    }
}
