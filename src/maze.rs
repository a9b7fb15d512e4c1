use error_chain::bail;
use std::fmt;

use crate::cells::{offset_position, CellStatus, Position, PositionSmallVec, SEARCH_ORDER};
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_displays;
use crate::layouts::{self, MazeLayout};
use crate::units::{ColumnsCount, RowsCount};


/// A grid together with the fixed entry and exit positions a traversal runs between.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    entry: Position,
    exit: Position,
}

impl Maze {
    /// Build a maze with the entry at (0, 1), near the top left corner, and the exit at
    /// (rows - 1, columns - 2), near the bottom right corner.
    ///
    /// The entry cell is marked `Visited`.
    pub fn new(layout: MazeLayout) -> Result<Maze> {
        let RowsCount(rows) = layout.rows();
        let ColumnsCount(columns) = layout.columns();
        let entry = Position::new(0, 1);
        let exit = Position::new(rows as isize - 1, columns as isize - 2);
        Maze::with_endpoints(layout, entry, exit)
    }

    /// The embedded 11 x 17 maze.
    pub fn classic() -> Result<Maze> {
        Maze::new(layouts::classic())
    }

    /// Build a maze with explicit entry and exit positions. Both must be inside the grid and
    /// not on a wall.
    pub fn with_endpoints(layout: MazeLayout, entry: Position, exit: Position) -> Result<Maze> {
        let grid = Grid::from_layout(layout);
        check_endpoint(&grid, "entry", entry)?;
        check_endpoint(&grid, "exit", exit)?;

        let mut maze = Maze { grid, entry, exit };
        maze.grid.set_status(entry, CellStatus::Visited)?;
        Ok(maze)
    }

    #[inline]
    pub fn entry(&self) -> Position {
        self.entry
    }

    #[inline]
    pub fn exit(&self) -> Position {
        self.exit
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.grid.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.grid.columns()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn status(&self, pos: Position) -> Option<CellStatus> {
        self.grid.status(pos)
    }

    /// Change the status of an open cell, walls are rejected.
    #[inline]
    pub fn mark(&mut self, pos: Position, status: CellStatus) -> Result<()> {
        self.grid.set_status(pos, status)
    }

    /// A move onto `pos` is valid when it is inside the grid and the cell is neither a wall nor
    /// already visited.
    pub fn is_move_valid(&self, pos: Position) -> bool {
        match self.grid.status(pos) {
            Some(CellStatus::Wall) | Some(CellStatus::Visited) | None => false,
            Some(CellStatus::Unvisited) | Some(CellStatus::Path) => true,
        }
    }

    /// All valid moves away from `pos`, east first, then south, west and north.
    pub fn candidate_moves(&self, pos: Position) -> PositionSmallVec {
        SEARCH_ORDER.iter()
            .map(|&dir| offset_position(pos, dir))
            .filter(|&next| self.is_move_valid(next))
            .collect()
    }

    /// The first valid move away from `pos` in east, south, west, north order, or None at a
    /// dead end.
    pub fn next_move(&self, pos: Position) -> Option<Position> {
        SEARCH_ORDER.iter()
            .map(|&dir| offset_position(pos, dir))
            .find(|&next| self.is_move_valid(next))
    }

    /// Put every open cell back to `Unvisited` and re-mark the entry `Visited`.
    pub fn reset(&mut self) -> Result<()> {
        self.grid.reset_traversal();
        self.grid.set_status(self.entry, CellStatus::Visited)
    }

    pub fn render(&self) -> String {
        grid_displays::render_grid(&self.grid)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

fn check_endpoint(grid: &Grid, name: &'static str, pos: Position) -> Result<()> {
    match grid.status(pos) {
        None => bail!(ErrorKind::EndpointOutOfBounds(name, pos)),
        Some(CellStatus::Wall) => bail!(ErrorKind::EndpointOnWall(name, pos)),
        Some(_) => Ok(()),
    }
}
