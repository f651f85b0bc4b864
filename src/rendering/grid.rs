use crate::domain::Rgb;

/// Fixed rows x cols array of cell colors.
/// Allocated once; updates only ever change colors in place.
#[derive(Clone, Debug)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Rgb>,
}

impl CellGrid {
    /// Create a grid with every cell black
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Rgb::BLACK; rows * cols],
        }
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Color at (row, col), or None off the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set the color at (row, col); writes off the grid are ignored
    pub fn set(&mut self, row: usize, col: usize, color: Rgb) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = color;
        }
    }

    /// Number of cells currently showing a non-black color
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_black()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &color)| (idx / self.cols, idx % self.cols, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_black() {
        let grid = CellGrid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert!(grid.iter_cells().all(|(_, _, c)| c.is_black()));
        assert_eq!(grid.iter_cells().count(), 12);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = CellGrid::new(4, 3);
        grid.set(3, 2, Rgb::WHITE);
        assert_eq!(grid.get(3, 2), Some(Rgb::WHITE));
        assert_eq!(grid.get(2, 3), None);
        assert_eq!(grid.lit_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_write_ignored() {
        let mut grid = CellGrid::new(2, 2);
        grid.set(2, 0, Rgb::WHITE);
        grid.set(0, 2, Rgb::WHITE);
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn test_iter_positions_row_major() {
        let mut grid = CellGrid::new(2, 3);
        grid.set(1, 2, Rgb::WHITE);
        let lit: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, c)| !c.is_black())
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(lit, vec![(1, 2)]);
    }
}
