use crate::error::{Result, SpriteoscopeError};

/// Maps grid cells onto a viewport.
///
/// Cells are square, sized so the whole grid fits, and the grid is centered.
/// Row 0 is at the bottom of the viewport, column 0 at the left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    viewport_width: f32,
    viewport_height: f32,
    rows: usize,
    cols: usize,
    cell_size: f32,
}

impl Layout {
    /// Largest square cell size that fits rows x cols in the viewport
    pub fn fit(viewport_width: f32, viewport_height: f32, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SpriteoscopeError::EmptyGrid { rows, cols });
        }
        let cell_size = (viewport_width / cols as f32).min(viewport_height / rows as f32);
        Self::with_cell_size(viewport_width, viewport_height, rows, cols, cell_size)
    }

    /// Centered layout with an explicit cell size
    pub fn with_cell_size(
        viewport_width: f32,
        viewport_height: f32,
        rows: usize,
        cols: usize,
        cell_size: f32,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SpriteoscopeError::EmptyGrid { rows, cols });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SpriteoscopeError::ViewportTooSmall {
                width: viewport_width,
                height: viewport_height,
            });
        }
        Ok(Self {
            viewport_width,
            viewport_height,
            rows,
            cols,
            cell_size,
        })
    }

    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Top-left screen corner (y down) of the cell at (row, col)
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let center_x = self.viewport_width / 2.0;
        let center_y = self.viewport_height / 2.0;
        let dx = (col as f32 - (self.cols / 2) as f32) * self.cell_size;
        let dy = (row as f32 - (self.rows / 2) as f32) * self.cell_size;
        (center_x + dx, center_y - dy - self.cell_size)
    }
}
