use error_chain::bail;
use itertools::{iproduct, Itertools};
use std::fmt;
use std::slice;

use crate::cells::{CellStatus, Position};
use crate::errors::*;
use crate::layouts::MazeLayout;
use crate::units::{CellsCount, ColumnIndex, ColumnsCount, RowIndex, RowsCount};


/// Row-major storage of the status of every cell in a rectangular maze.
///
/// The dimensions and the set of wall cells are fixed at construction, only the statuses of open
/// cells change afterwards.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    cells: Vec<CellStatus>,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, walls: {}, visited: {}, path: {}",
               self.rows, self.columns,
               self.count(CellStatus::Wall),
               self.count(CellStatus::Visited),
               self.count(CellStatus::Path))
    }
}

impl Grid {
    pub fn from_layout(layout: MazeLayout) -> Grid {
        let (rows, columns) = (layout.rows(), layout.columns());
        Grid {
            cells: layout.into_cells(),
            rows,
            columns,
        }
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.cells.len())
    }

    /// Is the position within the grid's dimensions. All four edges are checked.
    #[inline]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows, self.columns);
        pos.row >= 0 && pos.column >= 0 &&
        pos.row < rows as isize && pos.column < columns as isize
    }

    /// Convert a position to a one dimensional index in the range 0...grid.size().
    /// Returns None if the position is outside the grid.
    #[inline]
    pub fn position_to_index(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some(pos.row as usize * self.columns.0 + pos.column as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn status(&self, pos: Position) -> Option<CellStatus> {
        self.position_to_index(pos).map(|index| self.cells[index])
    }

    /// Change the status of an open cell.
    ///
    /// Fails if the position is outside the grid, if the cell is a wall or if `status` is `Wall`.
    pub fn set_status(&mut self, pos: Position, status: CellStatus) -> Result<()> {
        let index = self.position_to_index(pos)
            .ok_or_else(|| ErrorKind::InvalidPosition(pos))?;

        if self.cells[index].is_wall() || status.is_wall() {
            bail!(ErrorKind::WallIsImmutable(pos));
        }
        self.cells[index] = status;
        Ok(())
    }

    /// Turn every open cell back to `Unvisited`.
    pub fn reset_traversal(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| !cell.is_wall()) {
            *cell = CellStatus::Unvisited;
        }
    }

    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|&&cell| cell == status).count()
    }

    /// All positions holding `status`, in row-major order.
    pub fn positions_with(&self, status: CellStatus) -> Vec<Position> {
        self.iter()
            .zip(self.cells.iter())
            .filter(|&(_, &cell)| cell == status)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Every position of the grid in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.rows.0, 0..self.columns.0)
            .map(|(row, column)| Position::from_indices(RowIndex(row), ColumnIndex(column)))
    }

    /// The cell statuses one row at a time, top row first.
    #[inline]
    pub fn iter_row(&self) -> slice::Chunks<CellStatus> {
        self.cells.chunks(self.columns.0)
    }

    /// Numeric cell codes per row, the inverse of `MazeLayout::from_codes`.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.iter_row()
            .map(|row| row.iter().map(|cell| cell.code()).collect_vec())
            .collect()
    }
}
