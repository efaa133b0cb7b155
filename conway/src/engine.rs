// engine.rs - Generation stepping on a wrap-around board

use crate::community;
use crate::grid::{Grid, ALIVE, DEAD, NEIGHBOR_OFFSETS};
use crate::patterns;

/// Owns the current generation and the cached number of live cells.
#[derive(Debug, Clone)]
pub struct GameOfLife {
    grid: Grid,
    total_alive_cells: usize,
    generation: u64,
}

impl Default for GameOfLife {
    /// 5x5 board with five live cells; dies off after four generations.
    fn default() -> Self {
        Self::from_grid(patterns::default_grid())
    }
}

impl GameOfLife {
    pub fn from_grid(grid: Grid) -> Self {
        let total_alive_cells = grid.alive_count();
        Self {
            grid,
            total_alive_cells,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn total_alive_cells(&self) -> usize {
        self.total_alive_cells
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell_state(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col)
    }

    /// True if at least one cell on the board is alive.
    pub fn is_alive(&self) -> bool {
        self.grid.is_any_alive()
    }

    /// Live cells among the 8 toroidal neighbours of (row, col), in 0..=8.
    pub fn alive_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| self.grid.wrap(row, col, dr, dc))
            .filter(|&(r, c)| self.grid.get(r, c) == ALIVE)
            .count() as u8
    }

    /// Next generation as a fresh grid. Reads only from the current one.
    pub fn compute_new_grid(&self) -> Grid {
        let mut future = Grid::new(self.grid.rows(), self.grid.cols());
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let count = self.alive_neighbors(row, col);
                future.set(row, col, next_state(self.grid.get(row, col), count));
            }
        }
        future
    }

    pub fn next_generation(&mut self) {
        self.grid = self.compute_new_grid();
        self.total_alive_cells = self.grid.alive_count();
        self.generation += 1;
        log::trace!(
            "generation {}: {} alive",
            self.generation,
            self.total_alive_cells
        );
    }

    pub fn next_generations(&mut self, n: usize) {
        for _ in 0..n {
            self.next_generation();
        }
    }

    /// Number of 8-connected groups of live cells on the current board.
    pub fn communities(&self) -> usize {
        community::count_communities(&self.grid)
    }
}

/// Applies loneliness, overpopulation, reproduction and survival.
#[rustfmt::skip]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 0..=1) => DEAD,  // Loneliness
        (true, 4..)   => DEAD,  // Overpopulation
        (false, 3)    => ALIVE, // Reproduction
        (state, _)    => state,
    }
}
