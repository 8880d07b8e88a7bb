use std::{convert::TryFrom, fmt};

/// The coordinates of a cell in the board.
///
/// Ordering is by `x` first, then `y`. A `Coordinate` on its own carries no bounds;
/// use [`Dimensions::coordinate`][crate::board::Dimensions::coordinate] to build one that
/// has been checked against a particular board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Position one step away along the given unit displacement, in signed space. The
    /// result may lie off the board in either direction.
    pub(crate) fn offset(self, (dx, dy): (i64, i64)) -> (i64, i64) {
        (
            saturating_i64(self.x).saturating_add(dx),
            saturating_i64(self.y).saturating_add(dy),
        )
    }
}

/// Convert a coordinate component to signed space, clamping at `i64::MAX`.
pub(crate) fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::max_value())
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
