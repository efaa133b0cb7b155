// history.rs - Spotting boards that repeat within a short window

use crate::grid::Grid;

/// Ring buffer of recent board fingerprints.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    grid_history: Vec<u64>,
    history_count: usize,
    capacity: usize,
}

impl CycleDetector {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "cycle history needs at least one slot");
        Self {
            grid_history: Vec::with_capacity(capacity),
            history_count: 0,
            capacity,
        }
    }

    /// True if `grid` matches one of the last `capacity` boards observed;
    /// otherwise remembers it, evicting the oldest entry when full.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let current_hash = grid.fingerprint();
        if self.grid_history.contains(&current_hash) {
            return true;
        }
        if self.grid_history.len() < self.capacity {
            self.grid_history.push(current_hash);
        } else {
            self.grid_history[self.history_count % self.capacity] = current_hash;
        }
        self.history_count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.grid_history.clear();
        self.history_count = 0;
    }
}
