//! Errors used by the `Board` and `BoardSetup`.

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when a board is requested with a non-positive size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("board size {size} is invalid, must be > 0")]
pub struct InvalidBoardSize {
    size: i64,
}

impl InvalidBoardSize {
    pub(crate) fn new(size: i64) -> Self {
        Self { size }
    }

    /// The size that was requested.
    pub fn size(&self) -> i64 {
        self.size
    }
}

/// Error returned when a coordinate falls outside the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate ({x}, {y}) is outside a board of size {size}")]
pub struct BoundsError {
    x: i64,
    y: i64,
    size: usize,
}

impl BoundsError {
    pub(crate) fn new(x: i64, y: i64, size: usize) -> Self {
        Self { x, y, size }
    }

    /// Horizontal component of the rejected position.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Vertical component of the rejected position.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Size of the board the position was checked against.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The starting position is not on the board.
    #[error("the starting position is out of bounds")]
    OutOfBounds,
    /// Another ship already starts at the same position.
    #[error("another ship already starts at that position")]
    DuplicateStartPosition,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place ship at ({x}, {y}): {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    x: usize,
    y: usize,
}

impl PlaceError {
    pub(crate) fn new(reason: CannotPlaceReason, x: usize, y: usize) -> Self {
        Self { reason, x, y }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The position where placement was attempted.
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// The position where placement was attempted as a [`Coordinate`]. This may lie off
    /// the board when the reason is [`CannotPlaceReason::OutOfBounds`].
    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}
