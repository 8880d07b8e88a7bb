//! Types used for defining ships and their headings.
use std::fmt;

use crate::{
    board::{Coordinate, Dimensions},
    game::CannotActReason,
};

pub use self::heading::{Heading, Rotation};

mod heading;

/// Identifies a ship within a single board. IDs are handed out in placement order, so
/// they double as the ship's index in placement order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Index of this ship in placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single ship: where it is, which way it faces, and whether it has been sunk.
///
/// Once sunk a ship is frozen. Every mutating method checks the sunk flag first and
/// leaves the ship untouched when it fails.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    coord: Coordinate,
    heading: Heading,
    sunk: bool,
}

impl Ship {
    /// Create an afloat ship at the given position.
    pub fn new(coord: Coordinate, heading: Heading) -> Self {
        Self {
            coord,
            heading,
            sunk: false,
        }
    }

    /// Current position of the ship.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Current heading of the ship.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    fn ensure_afloat(&self) -> Result<(), CannotActReason> {
        if self.sunk {
            Err(CannotActReason::ShipSunk)
        } else {
            Ok(())
        }
    }

    /// Compute the cell one step ahead of the ship without moving it.
    ///
    /// Fails with [`CannotActReason::ShipSunk`] if the ship is sunk and with
    /// [`CannotActReason::OutOfBounds`] if the step would leave the board.
    pub fn destination(&self, dim: &Dimensions) -> Result<Coordinate, CannotActReason> {
        self.ensure_afloat()?;
        let (x, y) = self.coord.offset(self.heading.delta());
        dim.coordinate_signed(x, y).map_err(CannotActReason::OutOfBounds)
    }

    /// Only the board may update positions, since it must keep its occupancy in sync.
    pub(crate) fn set_coord(&mut self, coord: Coordinate) {
        self.coord = coord;
    }

    /// Turn a quarter turn in the given direction, returning the new heading.
    pub fn turn(&mut self, rotation: Rotation) -> Result<Heading, CannotActReason> {
        self.ensure_afloat()?;
        self.heading = self.heading.rotate(rotation);
        Ok(self.heading)
    }

    /// Mark the ship as sunk. Fails without changing anything if it was already sunk.
    pub fn sink(&mut self) -> Result<(), CannotActReason> {
        self.ensure_afloat()?;
        self.sunk = true;
        Ok(())
    }
}
