//! World configuration.

use crate::{boundary::Boundary, error::Error, world::World};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of rows.
    #[educe(Default = 100)]
    pub rows: i32,

    /// Number of columns.
    #[educe(Default = 100)]
    pub cols: i32,

    /// How neighbors are counted at the edges of the grid.
    pub boundary: Boundary,

    /// Seed for the world's random number generator.
    ///
    /// `None` means that the generator is seeded from entropy, so every
    /// [`randomize_board`](World::randomize_board) call produces a fresh
    /// board. Setting a seed makes the boards reproducible.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given dimensions.
    pub fn new(rows: i32, cols: i32) -> Self {
        Config {
            rows,
            cols,
            ..Config::default()
        }
    }

    /// Sets the boundary policy.
    pub fn set_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the seed for the world's random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns [`Error::InvalidSize`] unless both dimensions are positive.
    pub fn world(&self) -> Result<World, Error> {
        World::new(self)
    }
}
