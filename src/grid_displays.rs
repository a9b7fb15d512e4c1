use std::fmt;

use crate::grid::Grid;


// A blank line first, then one text line per grid row. Every cell glyph is followed by a single
// space, trailing space included.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        let mut output = String::with_capacity(1 + self.size().0 * 2 + self.rows().0);
        output.push('\n');
        for row in self.iter_row() {
            for cell in row {
                output.push(cell.glyph());
                output.push(' ');
            }
            output.push('\n');
        }
        f.write_str(&output)
    }
}

/// Render the grid to an owned string, see the `Display` impl for the layout.
pub fn render_grid(grid: &Grid) -> String {
    grid.to_string()
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::{CellStatus, Position};
    use crate::layouts::{self, MazeLayout};

    #[test]
    fn render_small_grid() {
        let mut g = Grid::from_layout(MazeLayout::from_codes(&[[0u8, 1, 0], [1, 1, 1], [0, 0, 1]])
                                          .unwrap());
        assert_eq!(render_grid(&g), "\n.   . \n      \n. .   \n");

        g.set_status(Position::new(0, 1), CellStatus::Visited).unwrap();
        g.set_status(Position::new(1, 1), CellStatus::Path).unwrap();
        assert_eq!(render_grid(&g), "\n. + . \n  *   \n. .   \n");
    }

    #[test]
    fn render_is_repeatable() {
        let g = Grid::from_layout(layouts::classic());
        assert_eq!(render_grid(&g), render_grid(&g));
        assert_eq!(render_grid(&g), format!("{}", g));
    }

    #[test]
    fn render_line_shape() {
        let g = Grid::from_layout(layouts::classic());
        let text = render_grid(&g);
        assert!(text.starts_with('\n'));
        let lines = text[1..].lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 11);
        for line in lines {
            assert_eq!(line.chars().count(), 17 * 2);
            assert!(line.chars().skip(1).step_by(2).all(|c| c == ' '));
        }
    }
}
