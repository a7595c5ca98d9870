//! Site sampling and Voronoi generation pipeline
//!
//! Samples blue-noise sites with Bridson's Poisson-disk algorithm, optionally
//! evens them out with Lloyd's relaxation, and tessellates the bounding
//! rectangle by half-plane clipping.

mod grid;
mod poisson;
mod clip;
mod voronoi;
mod lloyd;

pub use poisson::{sample, sample_seeded, sample_with, DEFAULT_MAX_ATTEMPTS};
pub use clip::{clip_polygon, HalfPlane};
pub use voronoi::{compute_cell, compute_voronoi};
pub use lloyd::{lloyd_relaxation, LloydOptions};

use crate::config::DiagramConfig;
use crate::error::Result;
use crate::polygon::Point;
use crate::util::Timed;

/// Generate the sites described by a configuration
///
/// Deterministic in `config`: the same configuration yields the same sites.
pub fn generate_sites(config: &DiagramConfig) -> Result<Vec<Point>> {
    // Step 1: Blue-noise sites
    let sites = {
        let _t = Timed::info("Poisson sampling");
        poisson::sample_seeded(
            config.width,
            config.height,
            config.min_distance,
            config.max_attempts,
            config.seed,
        )?
    };

    // Step 2: Lloyd's relaxation with convergence detection
    if config.lloyd_iterations == 0 {
        return Ok(sites);
    }

    let _t = Timed::info("Lloyd relaxation");
    let options = LloydOptions {
        max_iterations: config.lloyd_iterations,
        convergence_threshold: config.lloyd_convergence,
    };
    lloyd::lloyd_relaxation(sites, &config.bounding(), options)
}
