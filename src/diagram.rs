//! VoronoiDiagram main structure

use crate::cell::Cell;
use crate::config::DiagramConfig;
use crate::error::{Result, VoronoiError};
use crate::generation::{compute_voronoi, generate_sites};
use crate::polygon::{Point, Polygon};
use crate::util::Timed;

#[cfg(feature = "spatial-index")]
use crate::spatial::SiteIndex;

/// A complete clipped Voronoi tessellation
///
/// Holds one cell per site, in site order, together with the bounding
/// polygon the cells partition.
///
/// # Examples
///
/// ```
/// use blue_voronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .seed(42)
///     .dimensions(100.0, 60.0)
///     .unwrap()
///     .min_distance(10.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let diagram = VoronoiDiagram::generate(config).unwrap();
/// println!("Generated {} cells", diagram.cell_count());
///
/// let area: f64 = diagram.cells().iter().map(|c| c.area()).sum();
/// assert!((area - 6000.0).abs() < 1e-6 * 6000.0);
/// ```
#[derive(Clone)]
pub struct VoronoiDiagram {
    /// Configuration used to generate this diagram, if it came from one
    config: Option<DiagramConfig>,

    /// Polygon the cells are clipped to
    bounding: Polygon,

    /// All cells (indexed by site position)
    cells: Vec<Cell>,

    /// Nearest-site index for position-to-cell lookups
    #[cfg(feature = "spatial-index")]
    site_index: SiteIndex,
}

impl VoronoiDiagram {
    /// Sample sites from a configuration and tessellate its rectangle
    ///
    /// The same configuration always produces the same diagram.
    pub fn generate(config: DiagramConfig) -> Result<Self> {
        let _t = Timed::info("Diagram generation");
        let sites = generate_sites(&config)?;
        let mut diagram = Self::from_sites(&sites, config.bounding())?;
        diagram.config = Some(config);
        Ok(diagram)
    }

    /// Tessellate caller-supplied sites inside a convex bounding polygon
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `sites` is empty or `bounding` has fewer
    /// than 3 vertices.
    pub fn from_sites(sites: &[Point], bounding: Polygon) -> Result<Self> {
        let cells = compute_voronoi(sites, &bounding)?;

        #[cfg(feature = "spatial-index")]
        let site_index = SiteIndex::new(sites);

        Ok(Self {
            config: None,
            bounding,
            cells,
            #[cfg(feature = "spatial-index")]
            site_index,
        })
    }

    /// Configuration used to generate this diagram (`None` for `from_sites`)
    #[inline]
    pub fn config(&self) -> Option<&DiagramConfig> {
        self.config.as_ref()
    }

    #[inline]
    pub fn bounding(&self) -> &Polygon {
        &self.bounding
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get a cell by index, `None` when out of range
    #[inline]
    pub fn get_cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get a cell by index
    ///
    /// # Errors
    ///
    /// Returns `CellNotFound` when the index is out of range
    pub fn cell(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or(VoronoiError::CellNotFound(index))
    }

    /// Iterate over sites in cell order
    pub fn sites(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(|c| c.site)
    }

    /// Sum of cell areas; equals the bounding area for distinct sites
    pub fn total_area(&self) -> f64 {
        self.cells.iter().map(Cell::area).sum()
    }

    /// Index of the cell containing `position`
    ///
    /// Answers through the nearest-site index. For positions outside the
    /// bounding polygon this is the cell whose unclipped region would hold it.
    #[cfg(feature = "spatial-index")]
    pub fn find_cell_at(&self, position: Point) -> usize {
        self.site_index.find_nearest(position)
    }
}
