// union_find.rs - Weighted quick-union over the cells of an R×C board

use std::collections::HashSet;

use crate::grid::Grid;

/// Disjoint sets of board cells, indexed by `row * cols + col`.
///
/// Smaller trees hang under the root of larger ones and `find` compresses
/// every path it walks, so lookups are near constant time. Built fresh for
/// each community count and dropped afterwards.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    rows: usize,
    cols: usize,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl WeightedQuickUnion {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "union-find needs at least one cell");
        let n = rows * cols;
        Self {
            rows,
            cols,
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn id(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} union-find",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Root id of the set holding (row, col).
    pub fn find(&mut self, row: usize, col: usize) -> usize {
        let start = self.id(row, col);
        self.root(start)
    }

    fn root(&mut self, start: usize) -> usize {
        let mut root = start;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every node on the path straight at the root.
        let mut node = start;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    pub fn union(&mut self, row1: usize, col1: usize, row2: usize, col2: usize) {
        let a = self.find(row1, col1);
        let b = self.find(row2, col2);
        if a == b {
            return;
        }

        // Ties keep the first root on top.
        let (big, small) = if self.size[a] >= self.size[b] { (a, b) } else { (b, a) };
        self.parent[small] = big;
        self.size[big] += self.size[small];
    }

    #[cfg(test)]
    pub fn connected(&mut self, row1: usize, col1: usize, row2: usize, col2: usize) -> bool {
        self.find(row1, col1) == self.find(row2, col2)
    }

    /// Size of the set holding (row, col).
    #[cfg(test)]
    pub fn set_size(&mut self, row: usize, col: usize) -> usize {
        let root = self.find(row, col);
        self.size[root]
    }

    /// Distinct roots reached from live cells of `live`. Dead cells are
    /// never queried, so a set made only of dead cells never counts.
    pub fn component_count(&mut self, live: &Grid) -> usize {
        assert!(
            live.rows() == self.rows && live.cols() == self.cols,
            "live mask is {}x{}, union-find is {}x{}",
            live.rows(),
            live.cols(),
            self.rows,
            self.cols
        );

        let mut roots = HashSet::new();
        for (row, col) in live.alive_cells() {
            roots.insert(self.find(row, col));
        }
        roots.len()
    }
}
