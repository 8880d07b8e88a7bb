//! Defines the occupancy grid. This is shared between the board's setup and playing
//! versions.

use std::collections::BTreeMap;

use crate::{
    board::{Coordinate, Dimensions},
    ships::ShipId,
};

/// Grid structure shared between [`BoardSetup`] and [`Board`]. Only occupied cells are
/// stored.
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    /// Dimensions of this board.
    pub(crate) dim: Dimensions,
    /// IDs of the ships in each occupied cell, in order of arrival.
    cells: BTreeMap<Coordinate, Vec<ShipId>>,
}

impl Grid {
    pub(crate) fn new(dim: Dimensions) -> Self {
        Self {
            dim,
            cells: BTreeMap::new(),
        }
    }

    /// IDs of the ships in the given cell. Empty for vacant cells and for coordinates
    /// off the board.
    pub(crate) fn ships_at(&self, coord: &Coordinate) -> &[ShipId] {
        self.cells.get(coord).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a ship to the given cell.
    pub(crate) fn push(&mut self, ship: ShipId, coord: Coordinate) {
        self.cells.entry(coord).or_default().push(ship);
    }

    /// Move a ship's entry from one cell to another. The ship is removed from `from` and
    /// appended to `to` in a single step; both coordinates must already be validated.
    pub(crate) fn relocate(&mut self, ship: ShipId, from: &Coordinate, to: Coordinate) {
        if let Some(ships) = self.cells.get_mut(from) {
            ships.retain(|&id| id != ship);
            if ships.is_empty() {
                self.cells.remove(from);
            }
        }
        self.push(ship, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relocate_drops_emptied_cells() {
        let mut grid = Grid::new(Dimensions::try_new(1_000_000).unwrap());
        let (a, b) = (Coordinate::new(999_999, 0), Coordinate::new(999_999, 1));
        grid.push(ShipId(0), a);
        grid.push(ShipId(1), b);
        grid.relocate(ShipId(0), &a, b);
        assert!(grid.ships_at(&a).is_empty());
        assert_eq!(grid.ships_at(&b), &[ShipId(1), ShipId(0)]);
        assert_eq!(grid.cells.len(), 1);
    }
}
