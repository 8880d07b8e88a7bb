//! Sequential replay of operations against a board.
use log::{debug, info, warn};

use crate::{
    board::Board,
    game::{ActionOutcome, GameModel, Operation, ReplayError},
    ships::ShipId,
};

/// Progress of a [`Replay`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReplayState {
    /// No operation has run yet.
    NotStarted,
    /// At least one operation has run and more remain.
    InProgress,
    /// Every operation ran without error.
    Completed,
    /// An action failed. Nothing further will run.
    Failed,
}

/// Record of a single successfully applied action.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ReplayEvent {
    /// Index of the operation, in input order.
    pub operation: usize,
    /// Index of the action within its operation.
    pub action: usize,
    /// What happened.
    pub outcome: ActionOutcome,
}

impl ReplayEvent {
    /// The ship that was acted on.
    pub fn ship(&self) -> ShipId {
        self.outcome.ship()
    }
}

/// Drives a sequence of operations against a board, strictly in order.
///
/// When an operation starts, the ship at its origin is looked up on the board as it
/// stands after every earlier operation. Each action then goes back through the board
/// for that ship's current record, so a ship that moves partway through an operation
/// keeps receiving the rest of its actions. The first failing action stops the replay
/// for good.
#[derive(Debug, Clone)]
pub struct Replay {
    board: Board,
    operations: Vec<Operation>,
    next: usize,
    state: ReplayState,
    error: Option<ReplayError>,
    history: Vec<ReplayEvent>,
}

impl Replay {
    /// Prepare to replay the operations of a game model against its board.
    pub fn new(model: GameModel) -> Self {
        let (board, operations) = model.into_parts();
        Self {
            board,
            operations,
            next: 0,
            state: ReplayState::NotStarted,
            error: None,
            history: Vec::new(),
        }
    }

    /// Current state of the replay.
    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// The board as left by the operations run so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Extract the board.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Every action applied so far, in execution order.
    pub fn history(&self) -> &[ReplayEvent] {
        &self.history
    }

    /// The error that stopped the replay, if it failed.
    pub fn error(&self) -> Option<&ReplayError> {
        self.error.as_ref()
    }

    /// Number of operations that have run to completion.
    pub fn completed_operations(&self) -> usize {
        self.next
    }

    /// Run the next operation. Returns the state afterwards.
    ///
    /// Stepping a completed replay does nothing. Stepping a failed replay returns the
    /// original error again.
    pub fn step(&mut self) -> Result<ReplayState, ReplayError> {
        match self.state {
            ReplayState::Completed => return Ok(ReplayState::Completed),
            ReplayState::Failed => {
                if let Some(err) = self.error {
                    return Err(err);
                }
            }
            ReplayState::NotStarted | ReplayState::InProgress => {}
        }
        let index = self.next;
        if let Some(op) = self.operations.get(index) {
            self.state = ReplayState::InProgress;
            debug!("operation {}: {}", index, op);
            let origin = *op.origin();
            let ship = self.board.first_ship_at(&origin);
            for (action_index, &action) in op.actions().iter().enumerate() {
                match action.act(&mut self.board, ship, origin) {
                    Ok(outcome) => self.history.push(ReplayEvent {
                        operation: index,
                        action: action_index,
                        outcome,
                    }),
                    Err(err) => {
                        let err = ReplayError::new(index, action_index, err);
                        warn!("replay failed: {}", err);
                        self.state = ReplayState::Failed;
                        self.error = Some(err);
                        return Err(err);
                    }
                }
            }
            self.next += 1;
        }
        if self.next == self.operations.len() {
            info!(
                "replay completed: {} operations, {} actions",
                self.operations.len(),
                self.history.len()
            );
            self.state = ReplayState::Completed;
        }
        Ok(self.state)
    }

    /// Run every remaining operation, stopping at the first failure.
    pub fn run(&mut self) -> Result<(), ReplayError> {
        while self.step()? != ReplayState::Completed {}
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{BoardSetup, Coordinate},
        game::{Action, CannotActReason},
        ships::Heading,
    };

    fn replay(
        size: i64,
        ships: &[(usize, usize, Heading)],
        ops: &[(usize, usize, Option<&str>)],
    ) -> Replay {
        let mut setup = BoardSetup::with_size(size).unwrap();
        for &(x, y, heading) in ships {
            setup.place(x, y, heading).unwrap();
        }
        let operations = ops
            .iter()
            .map(|&(x, y, tokens)| {
                Operation::new(Coordinate::new(x, y), Action::parse_tokens(tokens).unwrap())
            })
            .collect();
        Replay::new(GameModel::new(setup.start(), operations).unwrap())
    }

    #[test]
    fn empty_replay_completes_on_first_step() {
        let mut replay = replay(3, &[(0, 0, Heading::North)], &[]);
        assert_eq!(replay.state(), ReplayState::NotStarted);
        assert_eq!(replay.step(), Ok(ReplayState::Completed));
        assert!(replay.history().is_empty());
    }

    #[test]
    fn states_advance_per_operation() {
        let mut replay = replay(
            10,
            &[(1, 1, Heading::North), (5, 5, Heading::East)],
            &[(1, 1, Some("L")), (5, 5, None)],
        );
        assert_eq!(replay.step(), Ok(ReplayState::InProgress));
        assert_eq!(replay.completed_operations(), 1);
        assert_eq!(replay.step(), Ok(ReplayState::Completed));
        assert_eq!(replay.step(), Ok(ReplayState::Completed));
        assert_eq!(replay.history().len(), 2);
        assert!(replay.board().ship(ShipId(1)).unwrap().sunk());
    }

    #[test]
    fn move_then_turn_follows_the_ship() {
        let mut replay = replay(10, &[(3, 4, Heading::South)], &[(3, 4, Some("MRL"))]);
        replay.run().unwrap();
        assert_eq!(replay.state(), ReplayState::Completed);
        let ship = replay.board().ship(ShipId(0)).unwrap();
        assert_eq!(ship.coord(), Coordinate::new(3, 5));
        assert_eq!(ship.heading(), Heading::South);
        assert!(!ship.sunk());
        assert!(replay.board().ships_at(&Coordinate::new(3, 4)).is_empty());
        assert_eq!(replay.history().len(), 3);
    }

    #[test]
    fn later_operations_see_earlier_moves() {
        // The second operation names the old cell, which is now empty.
        let mut replay = replay(
            10,
            &[(3, 4, Heading::South)],
            &[(3, 4, Some("M")), (3, 4, Some("L"))],
        );
        let err = replay.run().unwrap_err();
        assert_eq!(err.operation(), 1);
        assert_eq!(err.action_index(), 0);
        assert_eq!(err.reason(), CannotActReason::NoShipPresent);
        assert_eq!(replay.state(), ReplayState::Failed);
        let ship = replay.board().ship(ShipId(0)).unwrap();
        assert_eq!(ship.coord(), Coordinate::new(3, 5));
        assert_eq!(ship.heading(), Heading::South);
    }

    #[test]
    fn failure_stops_everything_after_it() {
        let mut replay = replay(
            10,
            &[(0, 0, Heading::North), (5, 5, Heading::East)],
            &[(5, 5, Some("M")), (0, 0, Some("M")), (6, 5, Some("M"))],
        );
        let err = replay.run().unwrap_err();
        assert_eq!(err.operation(), 1);
        assert!(matches!(err.reason(), CannotActReason::OutOfBounds(_)));
        assert_eq!(replay.step(), Err(err));
        assert_eq!(replay.completed_operations(), 1);
        assert_eq!(
            replay.board().ship(ShipId(1)).unwrap().coord(),
            Coordinate::new(6, 5)
        );
    }

    #[test]
    fn a_ship_moving_into_an_occupied_cell_is_not_targeted_first() {
        let mut replay = replay(
            10,
            &[(2, 2, Heading::East), (3, 2, Heading::North)],
            &[(2, 2, Some("M")), (3, 2, None), (3, 2, Some("L"))],
        );
        let err = replay.run().unwrap_err();
        // The resident ship was shot, and it is still first in line for the turn.
        assert_eq!(err.operation(), 2);
        assert_eq!(err.reason(), CannotActReason::ShipSunk);
        assert!(replay.board().ship(ShipId(1)).unwrap().sunk());
        assert!(!replay.board().ship(ShipId(0)).unwrap().sunk());
    }
}
