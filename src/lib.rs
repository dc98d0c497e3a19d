//! __lifegrid__ is a simulation engine for
//! [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life).
//!
//! It owns the grid data model and the per-generation transition
//! algorithm; rendering, cell-editing UIs, and the stepping/timing driver
//! are the caller's concern.
//!
//! The engine supports two runtime-swappable edge behaviors:
//! [`Bordered`](Boundary::Bordered), where cells outside the grid are
//! treated as absent, and [`Toroidal`](Boundary::Toroidal), where the
//! grid wraps around.
//!
//! # Example
//!
//! ```
//! use lifegrid::{Boundary, Config};
//!
//! # fn main() -> Result<(), lifegrid::Error> {
//! let mut world = Config::new(10, 10)
//!     .set_boundary(Boundary::Toroidal)
//!     .set_seed(12345)
//!     .world()?;
//! world.randomize_board();
//! world.step();
//! println!("{}", world.cells());
//! # Ok(())
//! # }
//! ```

mod boundary;
mod config;
mod error;
mod grid;
mod world;

pub use boundary::Boundary;
pub use config::Config;
pub use error::Error;
pub use grid::{Coord, Grid};
pub use world::World;
