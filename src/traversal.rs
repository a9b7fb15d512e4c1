use error_chain::bail;
use log::{debug, trace};

use crate::cells::{CellStatus, Position};
use crate::errors::*;
use crate::maze::Maze;


/// What a single step of a depth first traversal did.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum TraversalStep {
    /// Moved onto a fresh cell and marked it `Visited`.
    Advanced(Position),
    /// Hit a dead end and dropped this position from the trail.
    Backtracked(Position),
    /// The trail ends at the maze exit.
    ReachedExit,
    /// The trail is empty, every cell reachable from the entry has been visited.
    Exhausted,
}

/// The outcome of a successful traversal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Solution {
    path: Vec<Position>,
    visit_order: Vec<Position>,
    backtracks: usize,
}

impl Solution {
    /// The route from entry to exit with the dead end excursions removed.
    #[inline]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Every cell the traversal entered, in the order it was first entered. Starts with the entry.
    #[inline]
    pub fn visit_order(&self) -> &[Position] {
        &self.visit_order
    }

    #[inline]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    pub fn into_path(self) -> Vec<Position> {
        self.path
    }
}

/// Depth first search from a maze's entry to its exit using an explicit backtracking stack.
///
/// Moves are tried east, south, west then north, so the same maze always gives the same path.
/// The maze cells are updated in place as the search goes: every entered cell becomes `Visited`,
/// and once the exit is reached the cells left on the trail become `Path`.
#[derive(Debug)]
pub struct DepthFirstTraversal<'a> {
    maze: &'a mut Maze,
    trail: Vec<Position>,
    visit_order: Vec<Position>,
    backtracks: usize,
}

impl<'a> DepthFirstTraversal<'a> {
    /// Start a traversal. Any statuses left by an earlier traversal are cleared first.
    pub fn new(maze: &'a mut Maze) -> Result<DepthFirstTraversal<'a>> {
        maze.reset()?;
        let entry = maze.entry();
        debug!("traversal start: entry={} exit={}", entry, maze.exit());

        let cells_count = maze.grid().size().0;
        let mut visit_order = Vec::with_capacity(cells_count);
        visit_order.push(entry);
        Ok(DepthFirstTraversal {
            maze,
            trail: vec![entry],
            visit_order,
            backtracks: 0,
        })
    }

    /// The current trail, entry first.
    #[inline]
    pub fn trail(&self) -> &[Position] {
        &self.trail
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &*self.maze
    }

    /// Advance the search by one move or one backtrack.
    ///
    /// Once `ReachedExit` or `Exhausted` is returned every further call returns the same value.
    pub fn step(&mut self) -> Result<TraversalStep> {

        let current = match self.trail.last() {
            Some(&pos) => pos,
            None => return Ok(TraversalStep::Exhausted),
        };

        if current == self.maze.exit() {
            return Ok(TraversalStep::ReachedExit);
        }

        if let Some(next) = self.maze.next_move(current) {
            self.maze.mark(next, CellStatus::Visited)?;
            self.trail.push(next);
            self.visit_order.push(next);
            trace!("advance {} -> {}", current, next);
            Ok(TraversalStep::Advanced(next))
        } else {
            self.trail.pop();
            self.backtracks += 1;
            trace!("backtrack from dead end {}", current);
            Ok(TraversalStep::Backtracked(current))
        }
    }

    /// Step until the exit is reached or the reachable cells run out.
    ///
    /// On success the trail is re-marked as `Path`. An exhausted search fails with
    /// `ErrorKind::Unsolvable` and leaves the maze in its fully explored state.
    pub fn run(mut self) -> Result<Solution> {
        loop {
            match self.step()? {
                TraversalStep::ReachedExit => return self.finish(),
                TraversalStep::Exhausted => {
                    let (entry, exit) = (self.maze.entry(), self.maze.exit());
                    debug!("traversal exhausted after {} visits: no path from {} to {}",
                           self.visit_order.len(), entry, exit);
                    bail!(ErrorKind::Unsolvable(entry, exit));
                }
                TraversalStep::Advanced(_) | TraversalStep::Backtracked(_) => {}
            }
        }
    }

    fn finish(self) -> Result<Solution> {
        for &pos in &self.trail {
            self.maze.mark(pos, CellStatus::Path)?;
        }
        debug!("traversal solved: path length {}, {} cells visited, {} backtracks",
               self.trail.len(), self.visit_order.len(), self.backtracks);

        Ok(Solution {
            path: self.trail,
            visit_order: self.visit_order,
            backtracks: self.backtracks,
        })
    }
}

/// Find a path from the maze entry to its exit, marking the maze cells as it goes.
///
/// Cells on the returned path end up `Path`, cells entered and then backtracked out of stay
/// `Visited`. If the exit cannot be reached the error kind is `ErrorKind::Unsolvable` and no cell
/// is marked `Path`.
pub fn traverse(maze: &mut Maze) -> Result<Solution> {
    DepthFirstTraversal::new(maze)?.run()
}
