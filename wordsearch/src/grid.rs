//! Puzzle grid and its cells.

use std::fmt;

use crate::direction::Direction;

/// Side length of the square puzzle grid.
pub const GRID_SIZE: usize = 10;

/// Letters used for the fill pass.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not yet assigned a letter.
    #[default]
    Empty,
    Letter(char),
}

impl Cell {
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(ch) => Some(ch),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A `GRID_SIZE` x `GRID_SIZE` matrix of cells, indexed `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A grid with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.get(row, col)?.letter()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().flatten()
    }

    /// True once no cell is empty.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Rows as strings, with `.` standing in for empty cells.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.letter().unwrap_or('.'))
                    .collect::<String>()
            })
            .collect()
    }

    /// Read `len` letters starting at `(row, col)` along `direction`.
    ///
    /// Returns `None` if the run leaves the grid or crosses an empty cell.
    pub fn read(&self, row: usize, col: usize, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                let (r, c) = direction.step(row, col, i)?;
                self.letter(r, c)
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.letter().unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new();
        assert!(!grid.is_filled());
        assert_eq!(grid.rows(), vec![".".repeat(GRID_SIZE); GRID_SIZE]);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = Grid::new();
        assert_eq!(grid.get(0, 0), Some(Cell::Empty));
        assert_eq!(grid.get(GRID_SIZE, 0), None);
        assert_eq!(grid.get(0, GRID_SIZE), None);
    }

    #[test]
    fn read_follows_direction() {
        let mut grid = Grid::new();
        grid.set(3, 3, Cell::Letter('D'));
        grid.set(2, 4, Cell::Letter('O'));
        grid.set(1, 5, Cell::Letter('G'));
        assert_eq!(grid.read(3, 3, Direction::NorthEast, 3).as_deref(), Some("DOG"));
        assert_eq!(grid.read(1, 5, Direction::SouthWest, 3).as_deref(), Some("GOD"));
        assert_eq!(grid.read(3, 3, Direction::NorthEast, 4), None);
    }

    #[test]
    fn display_renders_one_line_per_row() {
        let mut grid = Grid::new();
        grid.set(0, 0, Cell::Letter('A'));
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), GRID_SIZE);
        assert_eq!(lines[0], "A . . . . . . . . .");
    }
}
