// community.rs - Counting 8-connected groups of live cells

use crate::grid::Grid;
use crate::union_find::WeightedQuickUnion;

/// Half of the neighbourhood (E, SE, S, SW). Visiting it from every cell
/// covers each undirected toroidal edge.
const FORWARD_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 1), (1, 0), (1, -1)];

/// Number of communities on `grid`, wrapping on both axes.
pub fn count_communities(grid: &Grid) -> usize {
    let mut uf = WeightedQuickUnion::new(grid.rows(), grid.cols());

    for (row, col) in grid.alive_cells() {
        for &(dr, dc) in &FORWARD_OFFSETS {
            let (r, c) = grid.wrap(row, col, dr, dc);
            if grid.get(r, c) {
                uf.union(row, col, r, c);
            }
        }
    }

    let communities = uf.component_count(grid);
    log::debug!(
        "{} communities among {} live cells on {}x{} board",
        communities,
        grid.alive_count(),
        grid.rows(),
        grid.cols()
    );
    communities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ALIVE;

    fn grid_with(rows: usize, cols: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(r, c) in cells {
            grid.set(r, c, ALIVE);
        }
        grid
    }

    #[test]
    fn empty_board_has_none() {
        assert_eq!(count_communities(&Grid::new(6, 6)), 0);
    }

    #[test]
    fn diagonal_contact_joins() {
        assert_eq!(count_communities(&grid_with(5, 5, &[(1, 1), (2, 2)])), 1);
        assert_eq!(count_communities(&grid_with(5, 5, &[(1, 3), (2, 2)])), 1);
    }

    #[test]
    fn wrap_joins_opposite_edges() {
        assert_eq!(count_communities(&grid_with(5, 5, &[(0, 2), (4, 2)])), 1);
        assert_eq!(count_communities(&grid_with(5, 5, &[(2, 0), (2, 4)])), 1);
        assert_eq!(count_communities(&grid_with(5, 5, &[(0, 0), (4, 4)])), 1);
        assert_eq!(count_communities(&grid_with(5, 5, &[(0, 4), (4, 0)])), 1);
    }

    #[test]
    fn separated_cells_stay_apart() {
        assert_eq!(count_communities(&grid_with(6, 6, &[(0, 0), (2, 2), (4, 4)])), 3);
    }

    #[test]
    fn tiny_boards_wrap_onto_themselves() {
        assert_eq!(count_communities(&grid_with(1, 1, &[(0, 0)])), 1);
        assert_eq!(count_communities(&grid_with(1, 3, &[(0, 0), (0, 2)])), 1);
        assert_eq!(count_communities(&grid_with(2, 2, &[(0, 0), (1, 1)])), 1);
    }
}
