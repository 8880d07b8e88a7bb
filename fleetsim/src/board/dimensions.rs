use std::convert::TryFrom;

use crate::board::{coordinate::saturating_i64, BoundsError, Coordinate, InvalidBoardSize};

/// Dimensions of a square board. Both axes run over `0..size`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    size: usize,
}

impl Dimensions {
    /// Create [`Dimensions`] for a square board with the given side length. Fails if
    /// `size` is not positive.
    pub fn try_new(size: i64) -> Result<Self, InvalidBoardSize> {
        match usize::try_from(size) {
            Ok(size) if size > 0 => Ok(Self { size }),
            _ => Err(InvalidBoardSize::new(size)),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Build a [`Coordinate`] from `x` and `y`, failing if it does not lie on the board.
    pub fn coordinate(&self, x: usize, y: usize) -> Result<Coordinate, BoundsError> {
        self.check(Coordinate::new(x, y))
    }

    /// Return the coordinate if it lies on the board.
    pub fn check(&self, coord: Coordinate) -> Result<Coordinate, BoundsError> {
        if self.contains(&coord) {
            Ok(coord)
        } else {
            Err(BoundsError::new(
                saturating_i64(coord.x),
                saturating_i64(coord.y),
                self.size,
            ))
        }
    }

    /// Build a [`Coordinate`] from signed components, as produced by moving off an edge.
    pub(crate) fn coordinate_signed(&self, x: i64, y: i64) -> Result<Coordinate, BoundsError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(ux), Ok(uy)) if ux < self.size && uy < self.size => Ok(Coordinate::new(ux, uy)),
            _ => Err(BoundsError::new(x, y, self.size)),
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |y| (0..size).map(move |x| Coordinate { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_sizes() {
        assert_eq!(Dimensions::try_new(0).unwrap_err().size(), 0);
        assert_eq!(Dimensions::try_new(-5).unwrap_err().size(), -5);
        assert_eq!(Dimensions::try_new(1).unwrap().size(), 1);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn accepts_sizes_whose_area_overflows() {
        let dim = Dimensions::try_new(4_294_967_296).unwrap();
        assert_eq!(dim.size(), 4_294_967_296);
        assert!(dim.coordinate(4_294_967_295, 4_294_967_295).is_ok());
        assert!(Dimensions::try_new(i64::max_value()).is_ok());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_rejected_positions_saturate() {
        let dim = Dimensions::try_new(5).unwrap();
        let err = dim.coordinate(usize::max_value(), 2).unwrap_err();
        assert_eq!((err.x(), err.y()), (i64::max_value(), 2));
        let (x, y) = Coordinate::new(usize::max_value(), 0).offset((1, 0));
        assert_eq!((x, y), (i64::max_value(), 0));
        assert!(dim.coordinate_signed(x, y).is_err());
    }

    #[test]
    fn bounds_are_half_open() {
        let dim = Dimensions::try_new(5).unwrap();
        assert!(dim.coordinate(0, 0).is_ok());
        assert!(dim.coordinate(4, 4).is_ok());
        let err = dim.coordinate(6, 5).unwrap_err();
        assert_eq!((err.x(), err.y(), err.size()), (6, 5, 5));
        assert!(dim.coordinate(5, 0).is_err());
        assert!(dim.coordinate_signed(-1, 0).is_err());
        assert_eq!(dim.coordinate_signed(2, 3).unwrap(), Coordinate::new(2, 3));
    }

    #[test]
    fn rows_are_listed_top_down() {
        let dim = Dimensions::try_new(3).unwrap();
        let rows: Vec<Vec<_>> = dim.iter_coordinates().map(|row| row.collect()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][2], Coordinate::new(2, 1));
    }
}
