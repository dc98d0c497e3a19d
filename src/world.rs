//! The world.

use crate::{
    boundary::Boundary,
    config::Config,
    error::Error,
    grid::{Coord, Grid},
};
use rand::{rngs::StdRng, SeedableRng};
use std::mem;

/// The world.
///
/// Owns the current generation, a scratch buffer that the next generation
/// is written into, and the active [`Boundary`] policy.
///
/// The world is a plain request/response component: every operation runs
/// to completion on the invoking thread, and nothing is locked or retried
/// internally. Callers that share a world between threads must serialize
/// access themselves.
pub struct World {
    /// The current generation.
    grid: Grid,

    /// The buffer the next generation is written into during a step.
    ///
    /// Always all-dead between steps. It swaps roles with
    /// [`grid`](#structfield.grid) at the end of every step instead of
    /// being reallocated, and is never visible to the caller.
    scratch: Grid,

    /// The active neighbor-counting policy.
    boundary: Boundary,

    /// The source of randomness for [`randomize_board`](Self::randomize_board).
    rng: StdRng,

    /// Number of completed steps since the current board shape was created.
    generation: u64,
}

impl World {
    /// Creates a new world from the configuration.
    ///
    /// All cells start dead. Returns [`Error::InvalidSize`] unless both
    /// dimensions are positive.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let grid = Grid::new(config.rows, config.cols)?;
        let scratch = Grid::blank(config.rows, config.cols);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(World {
            grid,
            scratch,
            boundary: config.boundary,
            rng,
            generation: 0,
        })
    }

    /// Advances the world by one generation and returns the new one.
    ///
    /// For every cell, the number of living neighbors is taken from the
    /// pre-step generation via the active [`Boundary`] policy, and then:
    ///
    /// 1. any living cell with two or three living neighbors survives;
    /// 2. any dead cell with exactly three living neighbors becomes alive;
    /// 3. every other cell is dead in the next generation.
    ///
    /// The next generation is computed entirely against the old one, so
    /// the scan order cannot influence the outcome.
    pub fn step(&mut self) -> &Grid {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let coord = (row, col);
                let neighbors = self.boundary.count_live_neighbors(&self.grid, coord);
                let alive = self.grid.cell(coord);
                let next = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                self.scratch.put(coord, next);
            }
        }
        mem::swap(&mut self.grid, &mut self.scratch);
        self.scratch.clear();
        self.generation += 1;
        &self.grid
    }

    /// Gets the state of the cell at `coord`.
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate lies outside the grid.
    pub fn get_cell(&self, coord: Coord) -> Result<bool, Error> {
        self.grid.get(coord)
    }

    /// Sets the state of a single cell in the current generation.
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate lies outside the grid.
    pub fn set_cell(&mut self, coord: Coord, alive: bool) -> Result<(), Error> {
        self.grid.set(coord, alive)
    }

    /// A read view of the current generation.
    ///
    /// Reflects the most recently completed [`step`](Self::step) or the
    /// most recent edit, never a partially computed next generation.
    #[inline]
    pub fn cells(&self) -> &Grid {
        &self.grid
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear_board(&mut self) {
        self.grid.clear();
    }

    /// Flips an unbiased coin for every cell, using the world's own
    /// random number generator.
    pub fn randomize_board(&mut self) {
        self.grid.randomize(&mut self.rng);
    }

    /// Replaces the current generation wholesale.
    ///
    /// The board takes the dimensions of `grid`, and the generation
    /// counter restarts.
    pub fn load(&mut self, grid: Grid) {
        if self.scratch.rows() != grid.rows() || self.scratch.cols() != grid.cols() {
            self.scratch = Grid::blank(grid.rows(), grid.cols());
        }
        self.grid = grid;
        self.generation = 0;
    }

    /// Replaces the board with an all-dead `size × size` grid.
    ///
    /// When the board already has exactly that shape this is a no-op and
    /// the contents are preserved. Returns [`Error::InvalidSize`] when
    /// `size` is not positive, leaving the board untouched.
    pub fn resize(&mut self, size: i32) -> Result<(), Error> {
        if size <= 0 {
            return Err(Error::InvalidSize(size));
        }
        if size == self.grid.rows() && size == self.grid.cols() {
            return Ok(());
        }
        self.grid = Grid::blank(size, size);
        self.scratch = Grid::blank(size, size);
        self.generation = 0;
        Ok(())
    }

    /// Replaces the neighbor-counting policy.
    ///
    /// Takes effect on the next [`step`](Self::step); the grid contents
    /// are not altered.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }

    /// The active neighbor-counting policy.
    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// The number of rows of the board.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    /// The number of columns of the board.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// Number of completed steps since the current board shape was created.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
