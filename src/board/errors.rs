//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when creating a board with an unusable size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid board dimension: {size}")]
pub struct InvalidDimension {
    /// The size that was rejected.
    size: usize,
}

impl InvalidDimension {
    /// Create an [`InvalidDimension`] for the rejected size.
    pub(super) fn new(size: usize) -> Self {
        Self { size }
    }

    /// The size that was rejected.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Reason why an occupancy matrix could not be converted into a board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidMatrixReason {
    /// The matrix had no rows at all.
    #[error("matrix has no rows")]
    Empty,
    /// A row's length did not match the matrix's outer length.
    #[error("row {row} has {len} cells, expected {expected}")]
    InvalidShape {
        /// Index of the offending row.
        row: usize,
        /// Number of cells the row actually held.
        len: usize,
        /// Number of cells every row must hold.
        expected: usize,
    },
    /// A cell held a value other than 0 or 1.
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The value the cell held.
        value: u8,
    },
}

/// Error caused when attempting to build a board from a malformed matrix.
#[derive(Error)]
#[error("could not build board from matrix: {reason}")]
pub struct MatrixError {
    /// Why the matrix was rejected.
    #[source]
    reason: InvalidMatrixReason,

    /// The matrix that was rejected.
    matrix: Vec<Vec<u8>>,
}

impl MatrixError {
    /// Construct a matrix error from a reason and the rejected matrix.
    pub(super) fn new(reason: InvalidMatrixReason, matrix: Vec<Vec<u8>>) -> Self {
        Self { reason, matrix }
    }

    /// Get the reason the matrix was rejected.
    pub fn reason(&self) -> InvalidMatrixReason {
        self.reason
    }

    /// Get a reference to the matrix that was rejected.
    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    /// Extract the rejected matrix from this error.
    pub fn into_matrix(self) -> Vec<Vec<u8>> {
        self.matrix
    }
}

impl Debug for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error returned when an operation addresses a cell or attack line outside
/// the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum OutOfBounds {
    /// A (row, col) coordinate lay outside the grid.
    #[error("coordinate {0:?} is out of bounds")]
    Coordinate(Coordinate),
    /// A row index was not less than the board size.
    #[error("row index {0} is out of bounds")]
    Row(usize),
    /// A column index was not less than the board size.
    #[error("column index {0} is out of bounds")]
    Column(usize),
}
