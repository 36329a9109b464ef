/// Character grid the rasterizer writes into
use crate::color::{glyph, Attr};
use serde::{Deserialize, Serialize};

/// One grid cell: a glyph and its colour attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub glyph: char,
    pub color: Attr,
}

impl Cell {
    pub const fn new(glyph: char, color: Attr) -> Self {
        Self { glyph, color }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(glyph::BLANK, Attr::FG_BLACK)
    }
}

/// A fixed-size `width × height` grid of cells.
///
/// `set` must ignore coordinates outside `[0, width) × [0, height)` and `get`
/// returns `None` for them; drawing code relies on both never faulting.
pub trait Surface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn set(&mut self, x: i32, y: i32, cell: Cell);
    fn get(&self, x: i32, y: i32) -> Option<Cell>;

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }
}

/// In-memory row-major cell buffer
#[derive(Debug, Clone, PartialEq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CharGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Resize and clear to the default cell
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, an empty grid simply has no rows
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells carrying `color`
    pub fn count_color(&self, color: Attr) -> usize {
        self.cells.iter().filter(|c| c.color == color).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }
}

impl Surface for CharGrid {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut grid = CharGrid::new(4, 3);
        let before = grid.clone();
        grid.set(-1, 0, Cell::new('x', Attr::FG_RED));
        grid.set(4, 0, Cell::new('x', Attr::FG_RED));
        grid.set(0, 3, Cell::new('x', Attr::FG_RED));
        assert_eq!(grid, before);
        assert_eq!(grid.get(4, 0), None);
    }

    #[test]
    fn test_row_major_layout() {
        let mut grid = CharGrid::new(4, 3);
        grid.set(1, 2, Cell::new('x', Attr::FG_RED));
        assert_eq!(grid.row(2)[1].glyph, 'x');
        assert_eq!(grid.cells()[2 * 4 + 1].glyph, 'x');
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_resize_clears() {
        let mut grid = CharGrid::new(2, 2);
        grid.clear(Cell::new('#', Attr::FG_WHITE));
        grid.resize(3, 1);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 1);
        assert!(grid.cells().iter().all(|c| *c == Cell::default()));
    }
}
