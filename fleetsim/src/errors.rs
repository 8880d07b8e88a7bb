//! The crate-wide error type.

use thiserror::Error;

use crate::{
    board::{BoundsError, CannotPlaceReason, InvalidBoardSize, PlaceError},
    game::{CannotActReason, ReplayError},
    parse::{ParseError, ParseErrorReason},
};

/// Kind of failure, independent of where it was detected. Every failure stops the
/// current run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The board size is missing, not a number, or not positive.
    InvalidBoardSize,
    /// A coordinate falls outside the board.
    OutOfBounds,
    /// Two ships were placed at the same starting coordinate.
    DuplicateStartPosition,
    /// A heading letter other than `N`, `E`, `S` or `W`.
    UnknownHeading,
    /// An action character other than `M`, `L` or `R`.
    UnknownActionToken,
    /// An operation line that is not a coordinate optionally followed by tokens.
    MalformedOperation,
    /// The ships line contains something other than ship descriptors.
    MalformedShip,
    /// An action was directed at a ship that has already been sunk.
    ShipSunk,
    /// An action was directed at a cell with no ship in it.
    NoShipPresent,
}

/// Any failure from reading a scenario through to the end of its replay.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The board could not be created.
    #[error(transparent)]
    BoardSize(#[from] InvalidBoardSize),

    /// A ship could not be placed during setup.
    #[error(transparent)]
    Place(#[from] PlaceError),

    /// An operation names a coordinate that is not on the board.
    #[error("operation {operation} is directed off the board: {source}")]
    Origin {
        operation: usize,
        #[source]
        source: BoundsError,
    },

    /// An action failed during replay.
    #[error(transparent)]
    Replay(#[from] ReplayError),
}

impl Error {
    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(err) => match err.reason() {
                ParseErrorReason::InvalidBoardSize => ErrorKind::InvalidBoardSize,
                ParseErrorReason::OutOfBounds => ErrorKind::OutOfBounds,
                ParseErrorReason::MalformedShip => ErrorKind::MalformedShip,
                ParseErrorReason::UnknownHeading => ErrorKind::UnknownHeading,
                ParseErrorReason::MalformedOperation => ErrorKind::MalformedOperation,
                ParseErrorReason::UnknownActionToken(_) => ErrorKind::UnknownActionToken,
            },
            Error::BoardSize(_) => ErrorKind::InvalidBoardSize,
            Error::Place(err) => match err.reason() {
                CannotPlaceReason::OutOfBounds => ErrorKind::OutOfBounds,
                CannotPlaceReason::DuplicateStartPosition => ErrorKind::DuplicateStartPosition,
            },
            Error::Origin { .. } => ErrorKind::OutOfBounds,
            Error::Replay(err) => match err.reason() {
                CannotActReason::ShipSunk => ErrorKind::ShipSunk,
                CannotActReason::NoShipPresent => ErrorKind::NoShipPresent,
                CannotActReason::OutOfBounds(_) => ErrorKind::OutOfBounds,
            },
        }
    }
}
