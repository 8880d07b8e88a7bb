use thiserror::Error;

use crate::{
    board::{BoundsError, Coordinate},
    game::Action,
};

/// Reason why an action could not be carried out.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotActReason {
    /// The targeted ship has already been sunk.
    #[error("the ship has already been sunk")]
    ShipSunk,
    /// There is no ship in the targeted cell.
    #[error("there is no ship in the targeted cell")]
    NoShipPresent,
    /// A move would take the ship off the board.
    #[error("the move would leave the board: {0}")]
    OutOfBounds(BoundsError),
}

/// Error returned when a single action fails.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not {action} at {coord}: {reason}")]
pub struct ActionError {
    reason: CannotActReason,
    action: Action,
    coord: Coordinate,
}

impl ActionError {
    pub(crate) fn new(reason: CannotActReason, action: Action, coord: Coordinate) -> Self {
        Self {
            reason,
            action,
            coord,
        }
    }

    /// Get the reason the action failed.
    pub fn reason(&self) -> CannotActReason {
        self.reason
    }

    /// The action that failed.
    pub fn action(&self) -> Action {
        self.action
    }

    /// The cell the action was directed at.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }
}

/// Error that stopped a replay. Identifies the operation and the action within it.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("operation {operation} failed at action {action}: {source}")]
pub struct ReplayError {
    /// Index of the failed operation, in input order.
    operation: usize,
    /// Index of the failed action within its operation.
    action: usize,
    #[source]
    source: ActionError,
}

impl ReplayError {
    pub(crate) fn new(operation: usize, action: usize, source: ActionError) -> Self {
        Self {
            operation,
            action,
            source,
        }
    }

    /// Index of the failed operation, in input order.
    pub fn operation(&self) -> usize {
        self.operation
    }

    /// Index of the failed action within its operation.
    pub fn action_index(&self) -> usize {
        self.action
    }

    /// The underlying action failure.
    pub fn action_error(&self) -> &ActionError {
        &self.source
    }

    /// Shortcut for the reason of the underlying action failure.
    pub fn reason(&self) -> CannotActReason {
        self.source.reason()
    }
}
