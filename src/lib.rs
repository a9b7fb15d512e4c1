//! **mazes** models a fixed grid maze and finds a way through it by depth first traversal,
//! recording every cell visited on the way and the final path with dead ends removed.

pub mod cells;
pub mod errors;
pub mod grid;
pub mod grid_displays;
pub mod layouts;
pub mod maze;
pub mod traversal;
pub mod units;
