//! Diagram Configuration and Builder
//!
//! This module provides configuration types for deterministic blue-noise
//! Voronoi diagram generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, Result, VoronoiError};
use crate::generation::DEFAULT_MAX_ATTEMPTS;
use crate::polygon::Polygon;

/// Configuration for deterministic diagram generation
///
/// The same configuration always produces the same sites and cells, so only
/// the configuration needs to be stored to reproduce a diagram.
///
/// # Example
///
/// ```rust
/// use blue_voronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .seed(42)
///     .dimensions(200.0, 100.0)
///     .unwrap()
///     .min_distance(8.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: DiagramConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Seed for the sampler's ChaCha8 stream
    pub seed: u64,

    /// Width of the sampling rectangle
    pub width: f64,

    /// Height of the sampling rectangle
    pub height: f64,

    /// Minimum distance between any two sites
    pub min_distance: f64,

    /// Candidates tried around each active point (Bridson's `k`)
    pub max_attempts: u32,

    /// Number of Lloyd's Relaxation iterations applied after sampling
    ///
    /// - 0: Raw blue-noise sites (default)
    /// - 2-5: Progressively more regular, honeycomb-like cells
    pub lloyd_iterations: usize,

    /// Convergence threshold for Lloyd's relaxation, as a fraction of
    /// `sqrt(width * height)`. 0.0 runs every iteration.
    pub lloyd_convergence: f64,
}

impl DiagramConfig {
    /// The rectangle `[(0,0), (w,0), (w,h), (0,h)]` the diagram is clipped to
    #[inline]
    pub fn bounding(&self) -> Polygon {
        Polygon::rectangle(self.width, self.height)
    }

    /// Rough expected site count, `area / min_distance²` scaled by Bridson's packing
    #[inline]
    pub fn approximate_site_count(&self) -> usize {
        (0.6 * self.width * self.height / (self.min_distance * self.min_distance)) as usize
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 100.0,
            height: 100.0,
            min_distance: 10.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            lloyd_iterations: 0,
            lloyd_convergence: 0.01,
        }
    }
}

/// Builder for creating DiagramConfig with validation
///
/// Each fallible setter validates its input immediately, so an invalid value
/// is reported where it was supplied.
///
/// # Example
///
/// ```rust
/// use blue_voronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .seed(12345)
///     .min_distance(5.0)
///     .unwrap()
///     .lloyd_iterations(3)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(config.seed, 12345);
/// ```
#[derive(Debug, Clone)]
pub struct DiagramConfigBuilder {
    seed: Option<u64>,
    config: DiagramConfig,
}

impl DiagramConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - dimensions: 100 x 100
    /// - min_distance: 10
    /// - max_attempts: 30
    /// - lloyd_iterations: 0
    /// - lloyd_convergence: 0.01
    pub fn new() -> Self {
        Self {
            seed: None,
            config: DiagramConfig::default(),
        }
    }

    /// Set the random seed for site sampling
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the sampling rectangle
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is not positive and finite
    pub fn dimensions(mut self, width: f64, height: f64) -> Result<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        self.config.width = width;
        self.config.height = height;
        Ok(self)
    }

    /// Set the minimum distance between sites
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the distance is not positive and finite
    pub fn min_distance(mut self, min_distance: f64) -> Result<Self> {
        ensure_positive("min_distance", min_distance)?;
        self.config.min_distance = min_distance;
        Ok(self)
    }

    /// Set the number of candidates tried per active point
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `attempts` is zero
    pub fn max_attempts(mut self, attempts: u32) -> Result<Self> {
        if attempts == 0 {
            return Err(VoronoiError::InvalidArgument(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        self.config.max_attempts = attempts;
        Ok(self)
    }

    /// Set the number of Lloyd's Relaxation iterations
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if iterations > 20 (excessive and impractical)
    pub fn lloyd_iterations(mut self, iterations: usize) -> Result<Self> {
        if iterations > 20 {
            return Err(VoronoiError::InvalidArgument(format!(
                "Lloyd iterations must be <= 20 (got {})",
                iterations
            )));
        }
        self.config.lloyd_iterations = iterations;
        Ok(self)
    }

    /// Set the convergence threshold for Lloyd's relaxation
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if threshold is negative or not finite
    pub fn lloyd_convergence(mut self, threshold: f64) -> Result<Self> {
        if !(threshold >= 0.0 && threshold.is_finite()) {
            return Err(VoronoiError::InvalidArgument(format!(
                "Lloyd convergence threshold must be >= 0 (got {})",
                threshold
            )));
        }
        self.config.lloyd_convergence = threshold;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<DiagramConfig> {
        Ok(DiagramConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            ..self.config
        })
    }
}

impl Default for DiagramConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
