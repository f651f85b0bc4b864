use macroquad::prelude::*;

use super::{CellGrid, GridRenderer, Layout};
use crate::domain::Rgb;
use crate::error::Result;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::new(rgb.r, rgb.g, rgb.b, 1.0)
    }
}

/// Draws the cell grid into the macroquad window
pub struct ScreenRenderer {
    grid: CellGrid,
    layout: Layout,
}

impl ScreenRenderer {
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Draw every lit cell; the background is expected to be cleared to black
    pub fn draw(&self) {
        let size = self.layout.cell_size();
        for (row, col, color) in self.grid.iter_cells() {
            if color.is_black() {
                continue;
            }
            let (x, y) = self.layout.cell_origin(row, col);
            draw_rectangle(x, y, size, size, color.into());
        }
    }
}

impl GridRenderer for ScreenRenderer {
    /// Fits the grid to the current window. The hint is an upper bound on
    /// cell size; a non-positive hint means "as large as fits".
    fn create_grid(rows: usize, cols: usize, cell_size_hint: f32) -> Result<Self> {
        let (width, height) = (screen_width(), screen_height());
        let fitted = Layout::fit(width, height, rows, cols)?;
        let layout = if cell_size_hint > 0.0 && cell_size_hint < fitted.cell_size() {
            Layout::with_cell_size(width, height, rows, cols, cell_size_hint)?
        } else {
            fitted
        };

        tracing::info!(
            rows,
            cols,
            cell_size = layout.cell_size(),
            width,
            height,
            "grid created"
        );

        Ok(Self {
            grid: CellGrid::new(rows, cols),
            layout,
        })
    }

    fn apply_update(&mut self, row: usize, col: usize, color: Rgb) {
        self.grid.set(row, col, color);
    }

    fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }
}
