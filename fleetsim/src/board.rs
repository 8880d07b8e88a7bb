//! Types that make up the game board.

use log::trace;

use crate::{
    game::CannotActReason,
    ships::{Heading, Rotation, Ship, ShipId},
};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{BoundsError, CannotPlaceReason, InvalidBoardSize, PlaceError},
    setup::BoardSetup,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// IDs of the ships in this cell, in order of arrival.
    ids: &'a [ShipId],

    /// All ships on the board, indexed by ID.
    ships: &'a [Ship],
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// IDs of the ships occupying this cell, in order of arrival.
    pub fn ids(&self) -> &'a [ShipId] {
        self.ids
    }

    /// Iterate over the ships occupying this cell, in order of arrival.
    pub fn ships(&self) -> impl 'a + Iterator<Item = &'a Ship> {
        let ships = self.ships;
        self.ids.iter().map(move |id| &ships[id.0])
    }

    /// The ship that actions on this cell are directed at, if any.
    pub fn first(&self) -> Option<&'a Ship> {
        self.ids.first().map(|id| &self.ships[id.0])
    }

    /// Returns true if no ship is in this cell.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The board during play. Owns every ship and tracks which cells they occupy.
///
/// Each cell keeps its ships in order of arrival: ships placed during setup come first,
/// and a ship that moves in is appended after any ships already there. The first ship in
/// a cell is the one that actions on that cell are directed at.
#[derive(Debug, Clone)]
pub struct Board {
    /// Occupied cells.
    grid: Grid,

    /// All ships, indexed by [`ShipId`].
    ships: Vec<Ship>,
}

impl Board {
    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Get the ship with the specified ID if it exists.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Number of ships on the board, sunk or not.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if the board has no ships at all.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Returns true if every ship on the board has been sunk.
    pub fn fleet_sunk(&self) -> bool {
        self.ships.iter().all(Ship::sunk)
    }

    /// IDs of the ships in the given cell in order of arrival. Empty if the cell is
    /// vacant or off the board.
    pub fn ships_at(&self, coord: &Coordinate) -> &[ShipId] {
        self.grid.ships_at(coord)
    }

    /// The ship that actions on the given cell are directed at: the earliest arrival.
    pub fn first_ship_at(&self, coord: &Coordinate) -> Option<ShipId> {
        self.ships_at(coord).first().copied()
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn get_coord(&self, coord: Coordinate) -> Option<CellRef<'_>> {
        self.grid.dim.check(coord).ok().map(|coord| CellRef {
            coord,
            ids: self.grid.ships_at(&coord),
            ships: &self.ships,
        })
    }

    /// Get an iterator over the board's rows. Each row is an iterator over its cells.
    pub fn iter_board(
        &self,
    ) -> impl Iterator<Item = impl Iterator<Item = CellRef<'_>> + '_> + '_ {
        let grid = &self.grid;
        let ships = &self.ships[..];
        grid.dim.iter_coordinates().map(move |row| {
            row.map(move |coord| CellRef {
                coord,
                ids: grid.ships_at(&coord),
                ships,
            })
        })
    }

    fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship, CannotActReason> {
        self.ships.get_mut(id.0).ok_or(CannotActReason::NoShipPresent)
    }

    /// Move a ship one cell forward along its heading, keeping the occupancy grid in
    /// sync. Returns the previous and the new position.
    pub fn apply_move(&mut self, id: ShipId) -> Result<(Coordinate, Coordinate), CannotActReason> {
        let dim = self.grid.dim;
        let ship = self.ship_mut(id)?;
        let from = ship.coord();
        let to = ship.destination(&dim)?;
        ship.set_coord(to);
        self.grid.relocate(id, &from, to);
        trace!("ship {} relocated {} -> {}", id, from, to);
        Ok((from, to))
    }

    /// Turn a ship a quarter turn. Returns the previous and the new heading.
    pub fn apply_turn(
        &mut self,
        id: ShipId,
        rotation: Rotation,
    ) -> Result<(Heading, Heading), CannotActReason> {
        let ship = self.ship_mut(id)?;
        let from = ship.heading();
        let to = ship.turn(rotation)?;
        Ok((from, to))
    }

    /// Sink a ship. Fails if it was already sunk.
    pub fn apply_shoot(&mut self, id: ShipId) -> Result<(), CannotActReason> {
        self.ship_mut(id)?.sink()
    }
}
