// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get at them.
#![allow(deprecated)]

use error_chain::*;

use crate::cells::Position;

error_chain! {

    errors {
        EmptyLayout {
            description("maze layout has no cells")
            display("maze layout has no cells")
        }
        RaggedLayout(row: usize, expected: usize, found: usize) {
            description("maze layout rows differ in length")
            display("maze layout row {} has {} columns, expected {}", row, found, expected)
        }
        UnknownCellCode(row: usize, column: usize, code: u8) {
            description("unknown maze cell code")
            display("unknown cell code {} at row {} column {}", code, row, column)
        }
        EndpointOutOfBounds(name: &'static str, pos: Position) {
            description("maze endpoint outside of the grid")
            display("maze {} {} is outside of the grid", name, pos)
        }
        EndpointOnWall(name: &'static str, pos: Position) {
            description("maze endpoint on a wall")
            display("maze {} {} is on a wall", name, pos)
        }
        InvalidPosition(pos: Position) {
            description("position outside of the grid")
            display("position {} is outside of the grid", pos)
        }
        WallIsImmutable(pos: Position) {
            description("walls cannot be changed")
            display("cannot change the wall cell at {}", pos)
        }
        Unsolvable(entry: Position, exit: Position) {
            description("maze has no solution")
            display("no path from entry {} to exit {}", entry, exit)
        }
    }
}
