//! Types that make up the conflict-checked board.

use std::fmt;

use enumflags2::BitFlags;

#[cfg(feature = "rng_gen")]
use rand::Rng;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{InvalidDimension, InvalidMatrixReason, MatrixError, OutOfBounds},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;


/// Attack lines through a cell. A conflict on a line means the line holds two
/// or more pieces which could capture each other.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum AttackLine {
    /// The cell's row.
    Row = 0b0001,
    /// The cell's column.
    Column = 0b0010,
    /// The top-left to bottom-right diagonal through the cell.
    MajorDiagonal = 0b0100,
    /// The top-right to bottom-left diagonal through the cell.
    MinorDiagonal = 0b1000,
}

/// Result of toggling a single cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ToggleOutcome {
    /// The cell was empty and now holds a piece.
    Placed,
    /// The cell held a piece which has been removed.
    Removed,
}

impl ToggleOutcome {
    /// Whether the toggled cell now holds a piece.
    pub fn occupied(self) -> bool {
        match self {
            ToggleOutcome::Placed => true,
            ToggleOutcome::Removed => false,
        }
    }
}

/// Notification delivered to change listeners after each successful toggle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ChangeEvent {
    /// Coordinate of the cell that changed.
    coord: Coordinate,

    /// What the toggle did to the cell.
    outcome: ToggleOutcome,
}

impl ChangeEvent {
    /// The coordinate of the cell that changed.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// What the toggle did to the cell.
    pub fn outcome(&self) -> ToggleOutcome {
        self.outcome
    }
}

/// Callback invoked with every [`ChangeEvent`]. The execution model is
/// single-threaded, so listeners are plain boxed closures.
type ChangeListener = Box<dyn Fn(&ChangeEvent)>;

/// A square board tracking piece occupancy, able to report whether any two
/// pieces attack each other along a row, a column, or a diagonal.
pub struct Board {
    /// Occupancy cells.
    grid: Grid,

    /// Listeners notified after each successful toggle.
    listeners: Vec<ChangeListener>,
}

impl Board {
    /// Construct an empty board of the given size. Fails if `size` is zero.
    pub fn new(size: usize) -> Result<Self, InvalidDimension> {
        match Dimensions::try_new(size) {
            Some(dim) => Ok(Self::with_dimensions(dim)),
            None => Err(InvalidDimension::new(size)),
        }
    }

    /// Construct an empty board with the given [`Dimensions`].
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            listeners: Vec::new(),
        }
    }

    /// Construct a board from a matrix of 0/1 occupancy values, inferring the
    /// size from the outer length. The error hands the rejected matrix back
    /// through [`MatrixError::into_matrix`].
    pub fn from_matrix(matrix: Vec<Vec<u8>>) -> Result<Self, MatrixError> {
        match Self::check_matrix(&matrix) {
            Err(reason) => Err(MatrixError::new(reason, matrix)),
            Ok(dim) => {
                let mut grid = Grid::new(dim);
                for (row, cells) in matrix.iter().enumerate() {
                    for (col, &value) in cells.iter().enumerate() {
                        grid[Coordinate::new(row, col)] = value == 1;
                    }
                }
                Ok(Self {
                    grid,
                    listeners: Vec::new(),
                })
            }
        }
    }

    /// Validate the shape and cell values of an occupancy matrix, returning
    /// the dimensions it implies.
    fn check_matrix(matrix: &[Vec<u8>]) -> Result<Dimensions, InvalidMatrixReason> {
        let dim = match Dimensions::try_new(matrix.len()) {
            Some(dim) => dim,
            None => return Err(InvalidMatrixReason::Empty),
        };
        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != dim.size() {
                return Err(InvalidMatrixReason::InvalidShape {
                    row,
                    len: cells.len(),
                    expected: dim.size(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value > 1 {
                    return Err(InvalidMatrixReason::InvalidValue { row, col, value });
                }
            }
        }
        Ok(dim)
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of rows (and columns) on this board.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Get the occupancy of the cell at the given coordinate. Returns `None`
    /// if the coordinate is out of bounds.
    pub fn get<C: Into<Coordinate>>(&self, coord: C) -> Option<bool> {
        self.grid.get(coord.into()).copied()
    }

    /// Iterate the rows of the board as occupancy slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.grid.cells.chunks(self.grid.dim.size())
    }

    /// Export the board as a matrix of 0/1 values, the inverse of
    /// [`Board::from_matrix`].
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|cells| cells.iter().map(|&cell| cell as u8).collect())
            .collect()
    }

    /// Total number of pieces currently on the board.
    pub fn piece_count(&self) -> usize {
        self.grid.cells.iter().filter(|&&cell| cell).count()
    }

    /// Register a callback invoked after every successful
    /// [`toggle_piece`][Board::toggle_piece] with the change that occurred.
    /// Listeners are called in registration order.
    pub fn add_change_listener<F>(&mut self, listener: F)
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Flip the cell at the given coordinate between empty and occupied,
    /// returning what the toggle did. Fails if the coordinate is out of
    /// bounds, in which case no listener is notified.
    pub fn toggle_piece<C: Into<Coordinate>>(
        &mut self,
        coord: C,
    ) -> Result<ToggleOutcome, OutOfBounds> {
        let coord = coord.into();
        let outcome = match self.grid.get_mut(&coord) {
            None => return Err(OutOfBounds::Coordinate(coord)),
            Some(cell) => {
                *cell = !*cell;
                if *cell {
                    ToggleOutcome::Placed
                } else {
                    ToggleOutcome::Removed
                }
            }
        };
        let event = ChangeEvent { coord, outcome };
        for listener in &self.listeners {
            listener(&event);
        }
        Ok(outcome)
    }

    /// Check whether the given row holds two or more pieces. Fails if `row`
    /// is not less than the board size.
    pub fn has_row_conflict_at(&self, row: usize) -> Result<bool, OutOfBounds> {
        if row < self.size() {
            Ok(self.pieces_in_row(row) > 1)
        } else {
            Err(OutOfBounds::Row(row))
        }
    }

    /// Check whether the given column holds two or more pieces. Fails if
    /// `col` is not less than the board size.
    pub fn has_col_conflict_at(&self, col: usize) -> Result<bool, OutOfBounds> {
        if col < self.size() {
            Ok(self.pieces_in_col(col) > 1)
        } else {
            Err(OutOfBounds::Column(col))
        }
    }

    /// Check whether the major (top-left to bottom-right) diagonal with the
    /// given key holds two or more pieces. Keys are derived from coordinates
    /// by [`Coordinate::major_diagonal`]; a key with no cells on the board
    /// yields `false` rather than an error, since edge cells legitimately
    /// derive keys past the board's corners.
    pub fn has_major_diagonal_conflict_at(&self, key: isize) -> bool {
        self.pieces_on_major_diagonal(key) > 1
    }

    /// Check whether the minor (top-right to bottom-left) diagonal with the
    /// given key holds two or more pieces. A key with no cells on the board
    /// yields `false`, as for the major diagonal check.
    pub fn has_minor_diagonal_conflict_at(&self, key: usize) -> bool {
        self.pieces_on_minor_diagonal(key) > 1
    }

    /// Check whether any row on the board holds two or more pieces.
    pub fn has_any_row_conflicts(&self) -> bool {
        (0..self.size()).any(|row| self.pieces_in_row(row) > 1)
    }

    /// Check whether any column on the board holds two or more pieces.
    pub fn has_any_col_conflicts(&self) -> bool {
        (0..self.size()).any(|col| self.pieces_in_col(col) > 1)
    }

    /// Check whether any major diagonal on the board holds two or more
    /// pieces.
    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        self.grid
            .dim
            .major_diagonals()
            .any(|key| self.pieces_on_major_diagonal(key) > 1)
    }

    /// Check whether any minor diagonal on the board holds two or more
    /// pieces.
    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        self.grid
            .dim
            .minor_diagonals()
            .any(|key| self.pieces_on_minor_diagonal(key) > 1)
    }

    /// Check whether any two rooks on the board could capture each other,
    /// that is whether any row or column conflicts.
    pub fn has_any_rooks_conflicts(&self) -> bool {
        self.has_any_row_conflicts() || self.has_any_col_conflicts()
    }

    /// Check whether any two queens on the board could capture each other,
    /// that is whether any row, column, or diagonal conflicts.
    pub fn has_any_queens_conflicts(&self) -> bool {
        self.has_any_rooks_conflicts()
            || self.has_any_major_diagonal_conflicts()
            || self.has_any_minor_diagonal_conflicts()
    }

    /// Get the set of attack lines through the given cell which hold two or
    /// more pieces. Used for per-cell conflict highlighting. Fails if the
    /// coordinate is out of bounds.
    pub fn conflicts_on<C: Into<Coordinate>>(
        &self,
        coord: C,
    ) -> Result<BitFlags<AttackLine>, OutOfBounds> {
        let coord = coord.into();
        if !self.grid.dim.contains(&coord) {
            return Err(OutOfBounds::Coordinate(coord));
        }
        let mut lines = BitFlags::empty();
        if self.pieces_in_row(coord.row) > 1 {
            lines |= AttackLine::Row;
        }
        if self.pieces_in_col(coord.col) > 1 {
            lines |= AttackLine::Column;
        }
        if self.pieces_on_major_diagonal(coord.major_diagonal()) > 1 {
            lines |= AttackLine::MajorDiagonal;
        }
        if self.pieces_on_minor_diagonal(coord.minor_diagonal()) > 1 {
            lines |= AttackLine::MinorDiagonal;
        }
        Ok(lines)
    }

    /// Check whether a queen on the given cell would be attacked along any of
    /// the four lines through it. Fails if the coordinate is out of bounds.
    pub fn has_any_queen_conflicts_on<C: Into<Coordinate>>(
        &self,
        coord: C,
    ) -> Result<bool, OutOfBounds> {
        self.conflicts_on(coord).map(|lines| !lines.is_empty())
    }

    /// Number of pieces in the given row. The row must be in bounds.
    fn pieces_in_row(&self, row: usize) -> usize {
        self.grid.row(row).iter().filter(|&&cell| cell).count()
    }

    /// Number of pieces in the given column. The column must be in bounds.
    fn pieces_in_col(&self, col: usize) -> usize {
        (0..self.size())
            .filter(|&row| self.grid[Coordinate::new(row, col)])
            .count()
    }

    /// Number of pieces on the major diagonal with the given key. Keys with
    /// no cells on the board count zero pieces.
    fn pieces_on_major_diagonal(&self, key: isize) -> usize {
        self.grid
            .dim
            .major_diagonal_cells(key)
            .filter(|coord| self.grid[coord])
            .count()
    }

    /// Number of pieces on the minor diagonal with the given key. Keys with
    /// no cells on the board count zero pieces.
    fn pieces_on_minor_diagonal(&self, key: usize) -> usize {
        self.grid
            .dim
            .minor_diagonal_cells(key)
            .filter(|coord| self.grid[coord])
            .count()
    }
}

impl Default for Board {
    /// Construct an empty board with the default dimensions, a standard 8x8
    /// chess board.
    fn default() -> Self {
        Self::with_dimensions(Dimensions::default())
    }
}

// Listeners are opaque, so Debug reports how many are registered rather than
// deriving.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(feature = "rng_gen")]
impl Board {
    /// Construct a board of the given size with `pieces` pieces scattered
    /// over distinct cells chosen uniformly at random. Fails if `size` is
    /// zero. Panics if `pieces` exceeds the number of cells on the board.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        pieces: usize,
        rng: &mut R,
    ) -> Result<Self, InvalidDimension> {
        let mut board = Self::new(size)?;
        let dim = board.grid.dim;
        for idx in rand::seq::index::sample(rng, dim.total_size(), pieces).iter() {
            board.grid[dim.un_linearize(idx)] = true;
        }
        Ok(board)
    }
}
