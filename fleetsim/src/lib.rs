//! Simulation of turn-based naval movement and combat on a square grid.
//!
//! A scenario establishes a board of fixed size, places ships with a starting
//! [`Coordinate`] and [`Heading`], then replays a list of [`Operation`]s. Each operation
//! names a coordinate and a sequence of [`Action`]s. Moves and turns follow the ship
//! found at that coordinate when the operation starts; a shot hits whichever ship is
//! first in the cell.
//!
//! ```
//! use fleetsim::{parse, GameModel, Heading};
//!
//! let scenario = parse::parse_scenario("10\n(3, 4, S)\n(3, 4) MRL\n").unwrap();
//! let board = GameModel::from_scenario(&scenario).unwrap().run().unwrap();
//! let ship = board.iter_ships().next().unwrap();
//! assert_eq!((ship.coord().x, ship.coord().y), (3, 5));
//! assert_eq!(ship.heading(), Heading::South);
//! ```

pub use crate::{
    board::{Board, BoardSetup, Coordinate, Dimensions},
    errors::{Error, ErrorKind},
    game::{Action, GameModel, Operation, Replay, ReplayState},
    ships::{Heading, Rotation, Ship, ShipId},
};

pub mod board;
mod errors;
pub mod game;
pub mod parse;
pub mod ships;
