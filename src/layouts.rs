use error_chain::bail;

use crate::cells::CellStatus;
use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

const CLASSIC_ROWS: usize = 11;
const CLASSIC_COLUMNS: usize = 17;

// 0 is a wall, 1 is open.
const CLASSIC: [[u8; CLASSIC_COLUMNS]; CLASSIC_ROWS] =
    [[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
     [0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0],
     [0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0],
     [0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0],
     [0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
     [0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0],
     [0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0],
     [0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0],
     [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
     [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
     [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0]];

/// A rectangular table of cell statuses that a `Grid` is built from.
///
/// Construction checks the shape of the data, so any `MazeLayout` is non-empty and every row has
/// the same number of columns.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MazeLayout {
    cells: Vec<CellStatus>,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl MazeLayout {
    /// Build a layout from rows of numeric cell codes (see `CellStatus::from_code`).
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<MazeLayout> {

        let columns_count = rows.first().map_or(0, |first| first.as_ref().len());
        if columns_count == 0 {
            bail!(ErrorKind::EmptyLayout);
        }

        let mut cells = Vec::with_capacity(rows.len() * columns_count);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns_count {
                bail!(ErrorKind::RaggedLayout(row_index, columns_count, row.len()));
            }
            for (column_index, &code) in row.iter().enumerate() {
                let status = CellStatus::from_code(code)
                    .ok_or_else(|| ErrorKind::UnknownCellCode(row_index, column_index, code))?;
                cells.push(status);
            }
        }

        Ok(MazeLayout {
            cells,
            rows: RowsCount(rows.len()),
            columns: ColumnsCount(columns_count),
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Row-major cell statuses.
    #[inline]
    pub fn cells(&self) -> &[CellStatus] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<CellStatus> {
        self.cells
    }
}

/// The 11 x 17 maze that the driver solves.
pub fn classic() -> MazeLayout {
    MazeLayout {
        cells: CLASSIC.iter()
            .flat_map(|row| row.iter())
            .map(|&code| if code == 0 { CellStatus::Wall } else { CellStatus::Unvisited })
            .collect(),
        rows: RowsCount(CLASSIC_ROWS),
        columns: ColumnsCount(CLASSIC_COLUMNS),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn classic_dimensions() {
        let layout = classic();
        assert_eq!(layout.rows(), RowsCount(11));
        assert_eq!(layout.columns(), ColumnsCount(17));
        assert_eq!(layout.cells().len(), 11 * 17);
    }

    #[test]
    fn classic_matches_numeric_codes() {
        assert_eq!(classic(), MazeLayout::from_codes(&CLASSIC).unwrap());
    }

    #[test]
    fn classic_opening_and_exit_are_open() {
        let layout = classic();
        assert_eq!(layout.cells()[1], CellStatus::Unvisited);
        assert_eq!(layout.cells()[10 * 17 + 15], CellStatus::Unvisited);
        assert_eq!(layout.cells()[0], CellStatus::Wall);
    }

    #[test]
    fn from_codes_row_major() {
        let layout = MazeLayout::from_codes(&[vec![0u8, 1], vec![2, 3]]).unwrap();
        assert_eq!(layout.rows(), RowsCount(2));
        assert_eq!(layout.columns(), ColumnsCount(2));
        assert_eq!(layout.cells(),
                   &[CellStatus::Wall, CellStatus::Unvisited, CellStatus::Visited, CellStatus::Path]);
    }

    #[test]
    fn empty_layouts_are_rejected() {
        let no_rows: Vec<Vec<u8>> = vec![];
        match MazeLayout::from_codes(&no_rows) {
            Err(Error(ErrorKind::EmptyLayout, _)) => {}
            other => panic!("expected EmptyLayout, got {:?}", other),
        }
        let empty_rows: Vec<Vec<u8>> = vec![vec![], vec![]];
        match MazeLayout::from_codes(&empty_rows) {
            Err(Error(ErrorKind::EmptyLayout, _)) => {}
            other => panic!("expected EmptyLayout, got {:?}", other),
        }
    }

    #[test]
    fn ragged_layouts_are_rejected() {
        let rows = vec![vec![0u8, 1, 0], vec![0, 1], vec![0, 1, 0]];
        match MazeLayout::from_codes(&rows) {
            Err(Error(ErrorKind::RaggedLayout(1, 3, 2), _)) => {}
            other => panic!("expected RaggedLayout, got {:?}", other),
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let rows = vec![vec![0u8, 1, 0], vec![0, 7, 0]];
        match MazeLayout::from_codes(&rows) {
            Err(Error(ErrorKind::UnknownCellCode(1, 1, 7), _)) => {}
            other => panic!("expected UnknownCellCode, got {:?}", other),
        }
    }
}
