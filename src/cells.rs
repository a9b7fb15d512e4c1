use smallvec::SmallVec;
use std::fmt;

use crate::units::{ColumnIndex, RowIndex};

/// The traversal state of a single maze cell.
///
/// `Wall` is fixed for the life of a grid, every other status can change while a maze is
/// traversed.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellStatus {
    Wall,
    Unvisited,
    Visited,
    Path,
}

impl CellStatus {
    /// Decode the numeric cell code used by maze layouts.
    /// 0 is a wall, 1 an open cell, 2 a visited cell and 3 a cell on a solution path.
    pub fn from_code(code: u8) -> Option<CellStatus> {
        match code {
            0 => Some(CellStatus::Wall),
            1 => Some(CellStatus::Unvisited),
            2 => Some(CellStatus::Visited),
            3 => Some(CellStatus::Path),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            CellStatus::Wall => 0,
            CellStatus::Unvisited => 1,
            CellStatus::Visited => 2,
            CellStatus::Path => 3,
        }
    }

    /// The single character used when rendering a grid as text.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            CellStatus::Wall => '.',
            CellStatus::Unvisited => ' ',
            CellStatus::Visited => '+',
            CellStatus::Path => '*',
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellStatus::Wall
    }
}

/// A (row, column) coordinate into a grid.
///
/// The components are signed so that a position one step beyond the top or left edge of a grid
/// is representable; whether a position lies inside a particular grid is the grid's question.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Position {
    pub row: isize,
    pub column: isize,
}

impl Position {
    pub fn new(row: isize, column: isize) -> Position {
        Position { row, column }
    }

    pub fn from_indices(row_index: RowIndex, column_index: ColumnIndex) -> Position {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, column_index);
        Position::new(row as isize, col as isize)
    }

    /// Are the two positions one orthogonal step apart?
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.column - other.column).abs() == 1
    }
}

impl From<(isize, isize)> for Position {
    fn from(row_column_pair: (isize, isize)) -> Position {
        Position::new(row_column_pair.0, row_column_pair.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

pub type PositionSmallVec = SmallVec<[Position; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// The order in which moves away from a cell are tried. Changing it changes which path is found
/// through a maze with more than one route.
pub const SEARCH_ORDER: [CompassPrimary; 4] = [CompassPrimary::East,
                                               CompassPrimary::South,
                                               CompassPrimary::West,
                                               CompassPrimary::North];

/// Creates a new `Position` offset 1 cell away in the given direction.
/// The result may be outside of any grid.
#[inline]
pub fn offset_position(pos: Position, dir: CompassPrimary) -> Position {
    let (row, column) = (pos.row, pos.column);
    match dir {
        CompassPrimary::North => Position::new(row - 1, column),
        CompassPrimary::South => Position::new(row + 1, column),
        CompassPrimary::East => Position::new(row, column + 1),
        CompassPrimary::West => Position::new(row, column - 1),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn status_codes() {
        let all = [CellStatus::Wall, CellStatus::Unvisited, CellStatus::Visited, CellStatus::Path];
        for status in &all {
            assert_eq!(CellStatus::from_code(status.code()), Some(*status));
        }
        assert_eq!(CellStatus::from_code(4), None);
        assert_eq!(CellStatus::from_code(255), None);
    }

    #[test]
    fn glyphs() {
        assert_eq!(CellStatus::Wall.glyph(), '.');
        assert_eq!(CellStatus::Unvisited.glyph(), ' ');
        assert_eq!(CellStatus::Visited.glyph(), '+');
        assert_eq!(CellStatus::Path.glyph(), '*');
    }

    #[test]
    fn offsets() {
        let p = Position::new(0, 0);
        assert_eq!(offset_position(p, CompassPrimary::North), Position::new(-1, 0));
        assert_eq!(offset_position(p, CompassPrimary::South), Position::new(1, 0));
        assert_eq!(offset_position(p, CompassPrimary::East), Position::new(0, 1));
        assert_eq!(offset_position(p, CompassPrimary::West), Position::new(0, -1));
    }

    #[test]
    fn search_order_is_east_south_west_north() {
        assert_eq!(SEARCH_ORDER,
                   [CompassPrimary::East,
                    CompassPrimary::South,
                    CompassPrimary::West,
                    CompassPrimary::North]);
    }

    #[test]
    fn adjacency() {
        let gc = |r, c| Position::new(r, c);
        assert!(gc(1, 1).is_adjacent(gc(0, 1)));
        assert!(gc(1, 1).is_adjacent(gc(1, 2)));
        assert!(!gc(1, 1).is_adjacent(gc(1, 1)));
        assert!(!gc(1, 1).is_adjacent(gc(2, 2)));
        assert!(!gc(1, 1).is_adjacent(gc(1, 3)));
    }
}
