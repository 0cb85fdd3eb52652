//! Implements the square dimensions of a board.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Square dimensions of a board. The size is fixed at construction and
/// applies to both axes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows and columns on the board.
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified size.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None => {
                if size == 0 {
                    panic!("Dimensions must be nonzero");
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        size,
                        size,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified size.
    /// Returns `None` if `size` is 0 or `size * size` exceeds
    /// `usize::max_value()`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Get the size of these [`Dimensions`], the shared row and column count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the linear total number of cells.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Check if the given [`Coordinate`] lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.size + coord.col)
    }

    /// Convert a linear index back into a [`Coordinate`]. The result is only
    /// on the board when `idx` is less than [`total_size`][Dimensions::total_size].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            row: idx / self.size,
            col: idx % self.size,
        }
    }

    /// Get an iterator over rows of the board. Each row is an iterator over
    /// the coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }

    /// Iterate the keys of every major diagonal on the board, from the
    /// bottom-left corner's diagonal to the top-right corner's.
    pub fn major_diagonals(&self) -> impl Iterator<Item = isize> {
        let limit = self.size as isize - 1;
        -limit..=limit
    }

    /// Iterate the keys of every minor diagonal on the board, from the
    /// top-left corner's diagonal to the bottom-right corner's.
    pub fn minor_diagonals(&self) -> impl Iterator<Item = usize> {
        0..=2 * (self.size - 1)
    }

    /// Iterate the coordinates of the cells on the major diagonal with the
    /// given key, top to bottom. Empty if no cell lies on that diagonal.
    pub fn major_diagonal_cells(&self, key: isize) -> impl Iterator<Item = Coordinate> {
        let size = self.size as isize;
        (0..size).filter_map(move |row| {
            let col = row + key;
            if 0 <= col && col < size {
                Some(Coordinate::new(row as usize, col as usize))
            } else {
                None
            }
        })
    }

    /// Iterate the coordinates of the cells on the minor diagonal with the
    /// given key, top to bottom. Empty if no cell lies on that diagonal.
    pub fn minor_diagonal_cells(&self, key: usize) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size).filter_map(move |row| {
            key.checked_sub(row)
                .filter(|&col| col < size)
                .map(|col| Coordinate::new(row, col))
        })
    }

    /// Check if the given [`Coordinate`] is in bounds for these
    /// [`Dimensions`]. If so, return it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.size && c.col < self.size {
            Some(coord)
        } else {
            None
        }
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a standard 8x8 chess board.
    fn default() -> Self {
        Self { size: 8 }
    }
}
