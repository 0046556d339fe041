//! Static tile grid
//!
//! A fixed-size grid of cells addressed by integer column/row. Only the
//! `SOLID` flag takes part in collision.

use bitflags::bitflags;

use crate::shapes::Rect;
use tilefall_math::Vec2;

bitflags! {
    /// Per-cell tile flags
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        /// The cell blocks movement
        const SOLID = 1 << 0;
    }
}

/// A grid of tiles with a uniform pixel size
///
/// Dimensions are fixed at creation. Coordinates outside the grid are never
/// solid, and edits to them are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct TileGrid {
    columns: usize,
    rows: usize,
    tile_size: f64,
    /// Row-major cell storage
    cells: Vec<TileFlags>,
}

impl TileGrid {
    /// Create an empty grid
    pub fn new(columns: usize, rows: usize, tile_size: f64) -> Self {
        Self {
            columns,
            rows,
            tile_size,
            cells: vec![TileFlags::empty(); columns * rows],
        }
    }

    /// Build a grid from text rows, `#` marks a solid cell
    ///
    /// The grid is as wide as the longest row. Any other character is empty.
    pub fn from_rows(rows: &[&str], tile_size: f64) -> Self {
        let columns = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(columns, rows.len(), tile_size);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    grid.cells[row * columns + col] = TileFlags::SOLID;
                }
            }
        }
        grid
    }

    /// Fill an entire row with solid tiles
    pub fn with_solid_row(mut self, row: usize) -> Self {
        for col in 0..self.columns {
            self.set_solid(col as i32, row as i32, true);
        }
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Edge length of a tile in pixels
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some(row * self.columns + col)
    }

    /// Flags at a cell, empty when out of bounds
    pub fn flags(&self, col: i32, row: i32) -> TileFlags {
        self.index(col, row)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Whether the cell blocks movement
    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        self.flags(col, row).contains(TileFlags::SOLID)
    }

    /// Set or clear the solid flag of a cell
    ///
    /// Returns `false` (and changes nothing) when the cell is out of bounds.
    pub fn set_solid(&mut self, col: i32, row: i32, solid: bool) -> bool {
        match self.index(col, row) {
            Some(i) => {
                self.cells[i].set(TileFlags::SOLID, solid);
                true
            }
            None => false,
        }
    }

    /// Pixel rectangle covered by a cell
    pub fn tile_rect(&self, col: usize, row: usize) -> Rect {
        Rect::new(
            col as f64 * self.tile_size,
            row as f64 * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    /// Cell containing a pixel position
    ///
    /// The result may lie outside the grid; pass it to [`TileGrid::is_solid`]
    /// or [`TileGrid::set_solid`], which treat such cells as empty.
    pub fn cell_at(&self, point: Vec2) -> (i32, i32) {
        (
            (point.x / self.tile_size).floor() as i32,
            (point.y / self.tile_size).floor() as i32,
        )
    }

    /// Iterate solid cells in row-major order (rows, then columns)
    pub fn solid_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, flags)| flags.contains(TileFlags::SOLID))
            .map(move |(i, _)| (i % self.columns, i / self.columns))
    }

    /// Number of solid cells
    pub fn solid_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|flags| flags.contains(TileFlags::SOLID))
            .count()
    }
}
