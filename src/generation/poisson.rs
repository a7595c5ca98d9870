//! Poisson-Disk Blue-Noise Sampling
//!
//! Bridson's algorithm over a rectangle: every accepted point spawns up to
//! `k` candidates in the annulus `[min_dist, 2 * min_dist)` around it, and
//! candidates are rejected through a background grid lookup.
//!
//! # Guarantees
//!
//! - Every pair of returned points is at least `min_dist` apart
//! - Every point lies in `[0, width) x [0, height)`
//!
//! The number of points is not fixed; it scales with `area / min_dist²`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::{SQRT_2, TAU};

use super::grid::SpatialGrid;
use crate::error::{ensure_positive, Result, VoronoiError};
use crate::polygon::Point;

/// Candidates tried around an active point before it is retired
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Sample with the default attempt count
///
/// `rng` must return values uniformly distributed in `[0, 1)`.
///
/// # Example
///
/// ```
/// use blue_voronoi::generation::sample;
///
/// let mut state = 1u64;
/// let lcg = move || {
///     state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
///     (state >> 11) as f64 / (1u64 << 53) as f64
/// };
///
/// let points = sample(20.0, 10.0, 2.0, lcg).unwrap();
/// assert!(!points.is_empty());
/// ```
pub fn sample<F>(width: f64, height: f64, min_dist: f64, rng: F) -> Result<Vec<Point>>
where
    F: FnMut() -> f64,
{
    sample_with(width, height, min_dist, DEFAULT_MAX_ATTEMPTS, rng)
}

/// Sample from a ChaCha8 stream seeded with `seed`
///
/// The same arguments always produce the same point set.
pub fn sample_seeded(
    width: f64,
    height: f64,
    min_dist: f64,
    max_attempts: u32,
    seed: u64,
) -> Result<Vec<Point>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    sample_with(width, height, min_dist, max_attempts, || rng.gen::<f64>())
}

/// Bridson sampling with an explicit attempt count
///
/// # Errors
///
/// Returns `InvalidArgument` if `width`, `height` or `min_dist` is not a
/// positive finite number, if `max_attempts` is zero, or if the rectangle is
/// so large relative to `min_dist` that the acceleration grid cannot be built.
pub fn sample_with<F>(
    width: f64,
    height: f64,
    min_dist: f64,
    max_attempts: u32,
    mut rng: F,
) -> Result<Vec<Point>>
where
    F: FnMut() -> f64,
{
    ensure_positive("width", width)?;
    ensure_positive("height", height)?;
    ensure_positive("min_dist", min_dist)?;
    if max_attempts == 0 {
        return Err(VoronoiError::InvalidArgument(
            "max_attempts must be at least 1".to_string(),
        ));
    }

    let mut grid = SpatialGrid::new(width, height, min_dist / SQRT_2)?;
    let in_bounds = |p: Point| p.x >= 0.0 && p.x < width && p.y >= 0.0 && p.y < height;

    let seed = Point::new(rng() * width, rng() * height);
    let mut points = vec![seed];
    let mut active = vec![seed];
    grid.insert(seed);

    while !active.is_empty() {
        let index = ((rng() * active.len() as f64) as usize).min(active.len() - 1);
        let origin = active[index];

        let mut accepted = None;
        for _ in 0..max_attempts {
            let radius = min_dist * (1.0 + rng());
            let angle = TAU * rng();
            let candidate = origin + Point::from_angle(angle) * radius;

            if in_bounds(candidate) && !grid.has_neighbor_within(candidate, min_dist) {
                accepted = Some(candidate);
                break;
            }
        }

        match accepted {
            Some(candidate) => {
                points.push(candidate);
                active.push(candidate);
                grid.insert(candidate);
            }
            // Saturated: no room left around this point
            None => {
                active.swap_remove(index);
            }
        }
    }

    log::debug!(
        "[Poisson] {} points in {}x{} (min_dist {})",
        points.len(),
        width,
        height,
        min_dist
    );

    Ok(points)
}
