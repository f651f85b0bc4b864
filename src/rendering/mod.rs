mod grid;
mod layout;
mod screen;
mod hud;

pub use grid::CellGrid;
pub use layout::Layout;
pub use screen::ScreenRenderer;
pub use hud::draw_hud;

use crate::domain::Rgb;
use crate::error::{Result, SpriteoscopeError};

/// Display surface the kaleidoscope paints into.
///
/// Cells are allocated once by `create_grid`; afterwards only their colors
/// change. Several updates in one tick may hit the same cell, and the last
/// one applied wins.
pub trait GridRenderer: Sized {
    /// Allocate rows x cols cells, each roughly `cell_size_hint` pixels wide
    fn create_grid(rows: usize, cols: usize, cell_size_hint: f32) -> Result<Self>;

    /// Set the displayed color of one cell
    fn apply_update(&mut self, row: usize, col: usize, color: Rgb);

    /// Grid dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);
}

/// In-memory renderer with no display surface
#[derive(Clone, Debug)]
pub struct HeadlessRenderer {
    grid: CellGrid,
    writes: u64,
}

impl HeadlessRenderer {
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Total updates applied since creation
    pub const fn writes(&self) -> u64 {
        self.writes
    }
}

impl GridRenderer for HeadlessRenderer {
    fn create_grid(rows: usize, cols: usize, _cell_size_hint: f32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SpriteoscopeError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            grid: CellGrid::new(rows, cols),
            writes: 0,
        })
    }

    fn apply_update(&mut self, row: usize, col: usize, color: Rgb) {
        self.grid.set(row, col, color);
        self.writes += 1;
    }

    fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }
}
