//! The four things an operation can do to a ship.
use std::fmt;

use log::debug;

use crate::{
    board::{Board, Coordinate},
    game::{ActionError, CannotActReason},
    ships::{Heading, Rotation, ShipId},
};

/// A single action applied to the ship in a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// Move one cell forward along the ship's heading.
    Move,
    /// Turn a quarter turn counter-clockwise.
    TurnLeft,
    /// Turn a quarter turn clockwise.
    TurnRight,
    /// Sink whichever ship is in the cell.
    Shoot,
}

/// Result of a successfully applied action.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActionOutcome {
    /// The ship moved from one cell to another.
    Moved {
        ship: ShipId,
        from: Coordinate,
        to: Coordinate,
    },
    /// The ship changed heading.
    Turned {
        ship: ShipId,
        from: Heading,
        to: Heading,
    },
    /// The ship was sunk.
    Sunk { ship: ShipId },
}

impl ActionOutcome {
    /// Get the id of the ship that was acted on.
    pub fn ship(&self) -> ShipId {
        match *self {
            ActionOutcome::Moved { ship, .. }
            | ActionOutcome::Turned { ship, .. }
            | ActionOutcome::Sunk { ship } => ship,
        }
    }
}

impl Action {
    /// Look up the action for a character of an operation's token string.
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'M' => Some(Action::Move),
            'L' => Some(Action::TurnLeft),
            'R' => Some(Action::TurnRight),
            _ => None,
        }
    }

    /// Token character for this action. Shoot has no token; it is what an operation
    /// without a token string means.
    pub fn token(self) -> Option<char> {
        match self {
            Action::Move => Some('M'),
            Action::TurnLeft => Some('L'),
            Action::TurnRight => Some('R'),
            Action::Shoot => None,
        }
    }

    /// Build the action list for an operation. No token string means a single
    /// [`Action::Shoot`]; otherwise each character maps to one action in order.
    /// Returns the first character that is not a valid token on failure.
    pub fn parse_tokens(tokens: Option<&str>) -> Result<Vec<Action>, char> {
        match tokens {
            None => Ok(vec![Action::Shoot]),
            Some(tokens) => tokens
                .chars()
                .map(|c| Action::from_token(c).ok_or(c))
                .collect(),
        }
    }

    /// Apply this action.
    ///
    /// `ship` is the ship the operation is directed at, resolved from `origin` by the
    /// caller. Move and the turns act on it through the board, which re-reads its
    /// current state. Shoot ignores `ship` and resolves the occupant of `origin`
    /// through the board at the moment it runs. An `origin` off the board fails with
    /// [`CannotActReason::OutOfBounds`] before anything else is checked.
    pub fn act(
        self,
        board: &mut Board,
        ship: Option<ShipId>,
        origin: Coordinate,
    ) -> Result<ActionOutcome, ActionError> {
        let fail = |reason| ActionError::new(reason, self, origin);
        board
            .dimensions()
            .check(origin)
            .map_err(|err| fail(CannotActReason::OutOfBounds(err)))?;
        let outcome = match self {
            Action::Move => {
                let ship = ship.ok_or_else(|| fail(CannotActReason::NoShipPresent))?;
                let (from, to) = board.apply_move(ship).map_err(fail)?;
                ActionOutcome::Moved { ship, from, to }
            }
            Action::TurnLeft | Action::TurnRight => {
                let ship = ship.ok_or_else(|| fail(CannotActReason::NoShipPresent))?;
                let rotation = if self == Action::TurnLeft {
                    Rotation::Left
                } else {
                    Rotation::Right
                };
                let (from, to) = board.apply_turn(ship, rotation).map_err(fail)?;
                ActionOutcome::Turned { ship, from, to }
            }
            Action::Shoot => {
                let ship = board
                    .first_ship_at(&origin)
                    .ok_or_else(|| fail(CannotActReason::NoShipPresent))?;
                board.apply_shoot(ship).map_err(fail)?;
                ActionOutcome::Sunk { ship }
            }
        };
        debug!("{} at {}: {:?}", self, origin, outcome);
        Ok(outcome)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Action::Move => "move",
            Action::TurnLeft => "turn left",
            Action::TurnRight => "turn right",
            Action::Shoot => "shoot",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSetup;

    fn single_ship(x: usize, y: usize, heading: Heading) -> (Board, ShipId, Coordinate) {
        let mut setup = BoardSetup::with_size(10).unwrap();
        let id = setup.place(x, y, heading).unwrap();
        (setup.start(), id, Coordinate::new(x, y))
    }

    #[test]
    fn no_token_string_is_a_single_shot() {
        assert_eq!(Action::parse_tokens(None), Ok(vec![Action::Shoot]));
    }

    #[test]
    fn tokens_map_in_order() {
        assert_eq!(
            Action::parse_tokens(Some("MRL")),
            Ok(vec![Action::Move, Action::TurnRight, Action::TurnLeft])
        );
        assert_eq!(Action::parse_tokens(Some("MLBLA")), Err('B'));
        assert_eq!(Action::parse_tokens(Some("m")), Err('m'));
    }

    #[test]
    fn turn_left_from_south_faces_east() {
        let (mut board, id, coord) = single_ship(0, 0, Heading::South);
        let outcome = Action::TurnLeft.act(&mut board, Some(id), coord).unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::Turned {
                ship: id,
                from: Heading::South,
                to: Heading::East
            }
        );
    }

    #[test]
    fn turn_right_from_west_faces_north() {
        let (mut board, id, coord) = single_ship(0, 0, Heading::West);
        Action::TurnRight.act(&mut board, Some(id), coord).unwrap();
        assert_eq!(board.ship(id).unwrap().heading(), Heading::North);
    }

    #[test]
    fn turning_a_sunk_ship_fails() {
        let (mut board, id, coord) = single_ship(0, 0, Heading::South);
        Action::Shoot.act(&mut board, Some(id), coord).unwrap();
        let err = Action::TurnLeft.act(&mut board, Some(id), coord).unwrap_err();
        assert_eq!(err.reason(), CannotActReason::ShipSunk);
        assert_eq!(err.action(), Action::TurnLeft);
        assert_eq!(board.ship(id).unwrap().heading(), Heading::South);
    }

    #[test]
    fn acting_without_a_ship_fails() {
        let (mut board, _, _) = single_ship(5, 5, Heading::North);
        let empty = Coordinate::new(0, 0);
        for &action in &[Action::Move, Action::TurnLeft, Action::TurnRight] {
            let err = action.act(&mut board, None, empty).unwrap_err();
            assert_eq!(err.reason(), CannotActReason::NoShipPresent);
            assert_eq!(err.coord(), &empty);
        }
        let err = Action::Shoot.act(&mut board, None, empty).unwrap_err();
        assert_eq!(err.reason(), CannotActReason::NoShipPresent);
    }

    #[test]
    fn shoot_resolves_the_cell_itself() {
        let (mut board, id, coord) = single_ship(1, 2, Heading::North);
        let outcome = Action::Shoot.act(&mut board, None, coord).unwrap();
        assert_eq!(outcome, ActionOutcome::Sunk { ship: id });
        assert!(board.ship(id).unwrap().sunk());

        let err = Action::Shoot.act(&mut board, None, coord).unwrap_err();
        assert_eq!(err.reason(), CannotActReason::ShipSunk);
        assert!(board.ship(id).unwrap().sunk());
    }

    #[test]
    fn origins_off_the_board_are_out_of_bounds() {
        let (mut board, id, _) = single_ship(4, 4, Heading::North);
        let far = Coordinate::new(50, 50);
        let err = Action::Shoot.act(&mut board, None, far).unwrap_err();
        assert!(matches!(err.reason(), CannotActReason::OutOfBounds(_)));
        let err = Action::Move.act(&mut board, Some(id), far).unwrap_err();
        match err.reason() {
            CannotActReason::OutOfBounds(bounds) => assert_eq!((bounds.x(), bounds.y()), (50, 50)),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(board.ship(id).unwrap().coord(), Coordinate::new(4, 4));
        assert!(!board.ship(id).unwrap().sunk());
    }

    #[test]
    fn move_off_the_edge_fails() {
        let (mut board, id, coord) = single_ship(4, 0, Heading::North);
        let err = Action::Move.act(&mut board, Some(id), coord).unwrap_err();
        assert!(matches!(err.reason(), CannotActReason::OutOfBounds(_)));
        assert_eq!(board.ship(id).unwrap().coord(), coord);
    }
}
