//! Implementation of the simulation as a whole: the actions a ship can take, the
//! operations that group them, and the replay loop that applies operations in order.
//!
//! A [`GameModel`] is built once, with every ship placed and every operation's origin
//! checked against the board. It is then consumed by a [`Replay`], which mutates the
//! board as operations run.
use log::debug;

use crate::{
    board::{Board, BoardSetup, BoundsError},
    errors::Error,
    parse::Scenario,
};

pub use self::{
    actions::{Action, ActionOutcome},
    errors::{ActionError, CannotActReason, ReplayError},
    operation::Operation,
    replay::{Replay, ReplayEvent, ReplayState},
};

mod actions;
mod errors;
mod operation;
mod replay;

/// A board after setup together with the operations to replay against it.
#[derive(Debug, Clone)]
pub struct GameModel {
    board: Board,
    operations: Vec<Operation>,
}

impl GameModel {
    /// Construct a game model. Fails if any operation's origin is not on the board.
    pub fn new(board: Board, operations: Vec<Operation>) -> Result<Self, BoundsError> {
        for op in &operations {
            board.dimensions().check(*op.origin())?;
        }
        Ok(Self { board, operations })
    }

    /// Build a game model from parsed input: create the board, place every ship in
    /// input order, then check every operation's origin. Nothing is replayed.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, Error> {
        let mut setup = BoardSetup::with_size(scenario.board_size)?;
        for ship in &scenario.ships {
            setup.place(ship.x, ship.y, ship.heading)?;
        }
        let dim = *setup.dimensions();
        let operations = scenario
            .operations
            .iter()
            .enumerate()
            .map(|(index, op)| {
                dim.coordinate(op.x, op.y)
                    .map(|origin| Operation::new(origin, op.actions.clone()))
                    .map_err(|source| Error::Origin {
                        operation: index,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "game model ready: size {}, {} ships, {} operations",
            dim.size(),
            setup.len(),
            operations.len()
        );
        Ok(Self {
            board: setup.start(),
            operations,
        })
    }

    /// The board as it stands before any operation runs.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The operations, in input order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    fn into_parts(self) -> (Board, Vec<Operation>) {
        (self.board, self.operations)
    }

    /// Start a step-by-step replay of this model.
    pub fn replay(self) -> Replay {
        Replay::new(self)
    }

    /// Replay every operation and return the final board, or the first failure.
    pub fn run(self) -> Result<Board, ReplayError> {
        let mut replay = self.replay();
        replay.run()?;
        Ok(replay.into_board())
    }
}
