//! Blue-noise sampling and clipped Voronoi tessellation
//!
//! Generates Poisson-disk point sets inside a rectangle and partitions a
//! convex bounding polygon into the Voronoi cells of those points.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use blue_voronoi::*;
//!
//! let config = DiagramConfigBuilder::new()
//!     .seed(42)
//!     .dimensions(800.0, 600.0).unwrap()
//!     .min_distance(25.0).unwrap()
//!     .lloyd_iterations(2).unwrap()
//!     .build().unwrap();
//!
//! let diagram = VoronoiDiagram::generate(config).unwrap();
//! for cell in diagram.cells() {
//!     println!("{:?}: {} vertices", cell.site, cell.vertex_count());
//! }
//! ```
//!
//! The building blocks are usable on their own:
//!
//! ```rust
//! use blue_voronoi::*;
//!
//! let sites = generation::sample_seeded(100.0, 100.0, 10.0, 30, 7).unwrap();
//! let cells = compute_voronoi(&sites, &Polygon::rectangle(100.0, 100.0)).unwrap();
//! assert_eq!(cells.len(), sites.len());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-cell lookups using KD-tree
//! - `parallel`: Computes Voronoi cells on the rayon thread pool
//! - `serde`: Enables serialization support for configuration, polygons and cells

// Modules
pub mod error;
pub mod polygon;
pub mod config;
pub mod cell;
pub mod generation;
pub mod diagram;
mod util;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{VoronoiError, Result};
pub use polygon::{Point, Polygon};
pub use config::{DiagramConfig, DiagramConfigBuilder};
pub use cell::Cell;
pub use diagram::VoronoiDiagram;
pub use generation::{
    clip_polygon, compute_cell, compute_voronoi, generate_sites, lloyd_relaxation, HalfPlane,
    LloydOptions,
};

#[cfg(feature = "spatial-index")]
pub use spatial::SiteIndex;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
