// grid.rs - Grid types for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

pub const ALIVE: bool = true;
pub const DEAD: bool = false;

/// Neighbour offsets in reading order, centre excluded.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Rectangular R×C board of cell states, stored row-major.
///
/// Both dimensions are at least 1 for the lifetime of the value; every
/// grid derived from another one inherits its dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid. Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "grid dimensions must be at least 1x1, got {rows}x{cols}");
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("grid dimensions {rows}x{cols} overflow"));
        Self {
            rows,
            cols,
            cells: vec![DEAD; len],
        }
    }

    /// Adopts row-major cell states; `cells` must hold exactly `rows * cols` entries.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(cells.len()) {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Adopts an already-parsed matrix, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 {
            return Err(Error::InvalidDimensions { rows: rows.len(), cols });
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow { row: index, expected: cols, found: row.len() });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { rows: rows.len(), cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    /// Coordinate reached from (row, col) by the offset, wrapping on both axes.
    pub fn wrap(&self, row: usize, col: usize, dr: isize, dc: isize) -> (usize, usize) {
        let r = (row as isize + dr).rem_euclid(self.rows as isize) as usize;
        let c = (col as isize + dc).rem_euclid(self.cols as isize) as usize;
        (r, c)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    pub fn is_any_alive(&self) -> bool {
        self.cells.contains(&ALIVE)
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Owned nested copy; mutating it never touches this grid.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    /// Hash of dimensions and cell states, used to spot repeated generations.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|&cell| if cell { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.alive_count(), 0);
        assert!(!grid.is_any_alive());
    }

    #[test]
    #[should_panic]
    fn zero_dimension_panics() {
        let _ = Grid::new(0, 5);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
        assert!(matches!(err, Error::RaggedRow { row: 1, expected: 2, found: 1 }));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert!(matches!(Grid::from_rows(vec![]), Err(Error::InvalidDimensions { .. })));
        assert!(matches!(Grid::from_rows(vec![vec![]]), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn from_cells_checks_length() {
        let grid = Grid::from_cells(2, 2, vec![true, false, false, true]).unwrap();
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
        assert!(matches!(Grid::from_cells(2, 2, vec![true; 3]), Err(Error::InvalidDimensions { .. })));
        assert!(matches!(Grid::from_cells(0, 2, vec![]), Err(Error::InvalidDimensions { .. })));
        assert!(Grid::from_cells(usize::MAX, 2, vec![true]).is_err());
    }

    #[test]
    fn wrap_is_non_negative_on_both_axes() {
        let grid = Grid::new(3, 5);
        assert_eq!(grid.wrap(0, 0, -1, -1), (2, 4));
        assert_eq!(grid.wrap(2, 4, 1, 1), (0, 0));
        assert_eq!(grid.wrap(1, 2, 0, 0), (1, 2));

        let single = Grid::new(1, 1);
        assert_eq!(single.wrap(0, 0, -1, 1), (0, 0));
    }

    #[test]
    fn to_rows_is_a_detached_copy() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, ALIVE);
        let mut copy = grid.to_rows();
        copy[0][0] = ALIVE;
        assert_eq!(copy, vec![vec![true, true], vec![false, false]]);
        assert!(!grid.get(0, 0));
    }

    #[test]
    fn alive_cells_in_row_major_order() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, ALIVE);
        grid.set(0, 2, ALIVE);
        let cells: Vec<_> = grid.alive_cells().collect();
        assert_eq!(cells, vec![(0, 2), (2, 0)]);
    }

    #[test]
    fn fingerprint_tracks_contents() {
        let mut a = Grid::new(4, 4);
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        a.set(1, 1, ALIVE);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn display_marks_live_cells() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, ALIVE);
        assert_eq!(grid.to_string(), "...\n..#\n");
    }
}
