//! Background acceleration grid for Poisson-disk sampling
//!
//! Cells are `min_dist / sqrt(2)` wide, so a cell's diagonal equals the
//! minimum distance and no cell can ever hold two accepted samples.
//!
//! A conflicting sample can sit up to `sqrt(2)` cell widths away along an
//! axis, i.e. two cells over, so neighbor queries scan a 5x5 block.

use crate::error::{Result, VoronoiError};
use crate::polygon::Point;

/// Cells scanned on each side of the query cell
const SEARCH_RADIUS: usize = 2;

/// Largest grid allocated for one sampling run (~1.5 GB of cells)
pub(crate) const MAX_GRID_CELLS: usize = 1 << 26;

/// Fixed-cell-size occupancy grid over `[0, width) x [0, height)`
#[derive(Debug, Clone)]
pub(crate) struct SpatialGrid {
    cell_size: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Option<Point>>,
}

impl SpatialGrid {
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the grid would exceed `MAX_GRID_CELLS`
    pub(crate) fn new(width: f64, height: f64, cell_size: f64) -> Result<Self> {
        let cols_f = (width / cell_size).ceil().max(1.0);
        let rows_f = (height / cell_size).ceil().max(1.0);
        let too_large = || {
            VoronoiError::InvalidArgument(format!(
                "sampling grid of {} x {} cells exceeds the limit of {} cells",
                cols_f, rows_f, MAX_GRID_CELLS
            ))
        };

        // Compare in f64 first so the usize casts below cannot saturate
        if !(cols_f <= MAX_GRID_CELLS as f64 && rows_f <= MAX_GRID_CELLS as f64) {
            return Err(too_large());
        }
        let (cols, rows) = (cols_f as usize, rows_f as usize);
        let count = cols
            .checked_mul(rows)
            .filter(|&n| n <= MAX_GRID_CELLS)
            .ok_or_else(too_large)?;

        Ok(Self {
            cell_size,
            cols,
            rows,
            cells: vec![None; count],
        })
    }

    /// Grid coordinates `(col, row)` of a point inside the sampling rectangle
    #[inline]
    pub(crate) fn cell_of(&self, point: Point) -> (usize, usize) {
        let col = ((point.x / self.cell_size).floor() as usize).min(self.cols - 1);
        let row = ((point.y / self.cell_size).floor() as usize).min(self.rows - 1);
        (col, row)
    }

    pub(crate) fn insert(&mut self, point: Point) {
        let (col, row) = self.cell_of(point);
        let slot = &mut self.cells[row * self.cols + col];
        debug_assert!(slot.is_none(), "grid cell already occupied");
        *slot = Some(point);
    }

    /// Any stored point strictly closer than `min_dist` to `point`?
    ///
    /// Only valid for `min_dist <= cell_size * sqrt(2)`.
    pub(crate) fn has_neighbor_within(&self, point: Point, min_dist: f64) -> bool {
        let (col, row) = self.cell_of(point);
        let min_dist_sq = min_dist * min_dist;

        let col_range =
            col.saturating_sub(SEARCH_RADIUS)..=(col + SEARCH_RADIUS).min(self.cols - 1);
        for r in row.saturating_sub(SEARCH_RADIUS)..=(row + SEARCH_RADIUS).min(self.rows - 1) {
            for c in col_range.clone() {
                if let Some(other) = self.cells[r * self.cols + c] {
                    if other.distance_squared(point) < min_dist_sq {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[cfg(test)]
    pub(crate) fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }
}
