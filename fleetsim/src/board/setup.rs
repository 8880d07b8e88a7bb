//! Implements the setup phase of the board.
use log::debug;

use crate::{
    board::{Board, CannotPlaceReason, Dimensions, Grid, InvalidBoardSize, PlaceError},
    ships::{Heading, Ship, ShipId},
};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow acting on them.
///
/// Ships may not share a starting cell. Once play begins ships are free to end up in the
/// same cell, which is why placement only exists here.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Ships in the order they were placed.
    ships: Vec<Ship>,
}

impl BoardSetup {
    /// Begin setup by constructing a new empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
        }
    }

    /// Begin setup of a square board with the given side length.
    pub fn with_size(size: i64) -> Result<Self, InvalidBoardSize> {
        Dimensions::try_new(size).map(Self::new)
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of ships placed so far.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if no ships have been placed.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Get the ship that starts at the given coordinate, if any.
    pub fn get_coord(&self, x: usize, y: usize) -> Option<&Ship> {
        let coord = self.grid.dim.coordinate(x, y).ok()?;
        self.grid
            .ships_at(&coord)
            .first()
            .map(|id| &self.ships[id.0])
    }

    /// Attempts to place a new ship at the given position. The position is checked
    /// against the board bounds first, then against the ships already placed.
    pub fn place(&mut self, x: usize, y: usize, heading: Heading) -> Result<ShipId, PlaceError> {
        let coord = self
            .grid
            .dim
            .coordinate(x, y)
            .map_err(|_| PlaceError::new(CannotPlaceReason::OutOfBounds, x, y))?;
        let id = ShipId(self.ships.len());
        if !self.grid.ships_at(&coord).is_empty() {
            return Err(PlaceError::new(
                CannotPlaceReason::DuplicateStartPosition,
                x,
                y,
            ));
        }
        self.grid.push(id, coord);
        self.ships.push(Ship::new(coord, heading));
        debug!("placed ship {} at {} heading {}", id, coord, heading);
        Ok(id)
    }

    /// Finish setup and start play with the current placements. A board with no ships
    /// is allowed.
    pub fn start(self) -> Board {
        Board {
            grid: self.grid,
            ships: self.ships,
        }
    }
}
