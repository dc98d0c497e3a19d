//! Neighbor counting at the edges of the grid.

use crate::grid::{Coord, Grid};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the grid behaves at its edges when neighbors are counted.
///
/// The policy is a plain value: swapping it on a [`World`](crate::World)
/// never touches the grid contents, and both variants are pure functions
/// of the grid snapshot they are given.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary {
    /// Coordinates outside the grid are treated as absent.
    ///
    /// Cells on the edges and corners have fewer than 8 candidate
    /// neighbors.
    #[educe(Default)]
    Bordered,

    /// The grid wraps around: each edge is adjacent to the opposite edge.
    Toroidal,
}

impl Boundary {
    /// Counts the living cells in the 3×3 neighborhood centered on
    /// `coord`, excluding the center cell itself.
    ///
    /// The result is in `[0, 8]`.
    pub fn count_live_neighbors(self, grid: &Grid, coord: Coord) -> u8 {
        let (row, col) = coord;
        let mut count = 0;
        for delta_row in -1..=1 {
            for delta_col in -1..=1 {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }
                let neighbor = match self {
                    Boundary::Bordered => {
                        let neighbor = (row + delta_row, col + delta_col);
                        if !grid.contains(neighbor) {
                            continue;
                        }
                        neighbor
                    }
                    // `rem_euclid` keeps the index non-negative even when
                    // the neighbor coordinate is -1.
                    Boundary::Toroidal => (
                        (row + delta_row).rem_euclid(grid.rows()),
                        (col + delta_col).rem_euclid(grid.cols()),
                    ),
                };
                if grid.cell(neighbor) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bordered_corner() {
        let mut grid = Grid::new(4, 4).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                grid.set((row, col), true).unwrap();
            }
        }
        assert_eq!(Boundary::Bordered.count_live_neighbors(&grid, (0, 0)), 3);
        assert_eq!(Boundary::Bordered.count_live_neighbors(&grid, (0, 2)), 5);
        assert_eq!(Boundary::Bordered.count_live_neighbors(&grid, (2, 2)), 8);
    }

    #[test]
    fn toroidal_wraps() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set((3, 3), true).unwrap();
        assert_eq!(Boundary::Toroidal.count_live_neighbors(&grid, (0, 0)), 1);
        assert_eq!(Boundary::Bordered.count_live_neighbors(&grid, (0, 0)), 0);
    }

    #[test]
    fn center_is_excluded() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set((1, 1), true).unwrap();
        for boundary in [Boundary::Bordered, Boundary::Toroidal] {
            assert_eq!(boundary.count_live_neighbors(&grid, (1, 1)), 0);
        }
    }

    #[test]
    fn toroidal_single_row() {
        // On a 1×3 torus the row above and below wrap to the row itself,
        // so all 8 candidates land on the three existing cells and the
        // live one is seen three times.
        let mut grid = Grid::new(1, 3).unwrap();
        grid.set((0, 1), true).unwrap();
        assert_eq!(Boundary::Toroidal.count_live_neighbors(&grid, (0, 0)), 3);
        assert_eq!(Boundary::Bordered.count_live_neighbors(&grid, (0, 0)), 1);
    }
}
