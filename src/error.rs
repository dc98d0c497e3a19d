//! All kinds of errors in this crate.

use crate::grid::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Cell at {0:?} is outside the grid.
    OutOfRange(Coord),
    /// Grid size {0} should be positive.
    InvalidSize(i32),
}
