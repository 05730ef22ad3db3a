//! Text rendering of Veitch diagrams.
//!
//! Every cell of the diagram becomes a 4×8 block of characters with its value in
//! the middle. Variable labels are drawn outside of the grid: `A` on the left, `B`
//! above, `C` and `E` below, `D` on the right. For each maximal run of rows
//! (columns) on which a variable holds, a bar marks the run and the letter is
//! centered on it.
//!
//! Contours outline the terms of the drawn DNF. A contour that wraps around the
//! grid is left open towards the edge it wraps across.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::dnf::Dnf;
//! use qmc_rs::render::RenderConfig;
//! use qmc_rs::veitch::VeitchDiagram;
//!
//! let (f, n) = Dnf::parse("AB+A'B", None).unwrap();
//! let diagram = VeitchDiagram::build(n, &f, &Dnf::new(), true).unwrap();
//! let config = RenderConfig {
//!     draw_labels: false,
//!     ..RenderConfig::default()
//! };
//! let expected = "\
//! +-------+-------+
//! | +---+ |       |
//! | | 1 | |   0   |
//! | |   | |       |
//! +-|---|-+-------+
//! | |   | |       |
//! | | 1 | |   0   |
//! | +---+ |       |
//! +-------+-------+";
//! assert_eq!(diagram.render_with_config(&config), expected);
//! ```

use std::fmt;

use crate::types::Var;
use crate::veitch::{Contour, VeitchDiagram};

/// Text rows per cell.
const CELL_HEIGHT: usize = 4;
/// Text columns per cell.
const CELL_WIDTH: usize = 8;
/// Text columns per label on the left or right.
const LABEL_WIDTH: usize = 4;
/// Text rows per label above or below.
const LABEL_HEIGHT: usize = 2;

/// Configuration options for diagram rendering.
///
/// Use `RenderConfig::default()` to draw everything.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Draw the grid lines between cells (default: true)
    pub draw_borders: bool,
    /// Outline the contours of the drawn terms (default: true)
    pub draw_contours: bool,
    /// Draw the variable labels around the grid (default: true)
    pub draw_labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            draw_borders: true,
            draw_contours: true,
            draw_labels: true,
        }
    }
}

/// Where the label of a variable goes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Above = 0,
    Below = 1,
    Left = 2,
    Right = 3,
}

impl Side {
    fn of(var: Var) -> Self {
        match var.position() {
            1 => Side::Above,
            2 | 4 => Side::Below,
            3 => Side::Right,
            _ => Side::Left,
        }
    }
}

/// Position of the grid inside the picture.
#[derive(Debug, Copy, Clone)]
struct Layout {
    start_x: usize,
    start_y: usize,
    /// One past the last column of the grid
    end_x: usize,
    /// One past the last row of the grid
    end_y: usize,
}

/// A rectangle of characters.
struct Canvas {
    lines: Vec<Vec<char>>,
}

impl Canvas {
    fn new(height: usize, width: usize) -> Self {
        Self {
            lines: vec![vec![' '; width]; height],
        }
    }

    fn set(&mut self, y: usize, x: usize, c: char) {
        self.lines[y][x] = c;
    }

    /// Draws a line character; crossing a different line makes a junction.
    fn put(&mut self, y: usize, x: usize, c: char) {
        let slot = &mut self.lines[y][x];
        *slot = if *slot != ' ' && *slot != c { '+' } else { c };
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for &c in line {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl VeitchDiagram {
    /// Renders the diagram with labels and contours, optionally without grid lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_rs::veitch::VeitchDiagram;
    ///
    /// let diagram = VeitchDiagram::new(3).unwrap();
    /// let text = diagram.render(true);
    /// assert_eq!(text.lines().count(), 2 + 4 * 2 + 1 + 2);
    /// ```
    pub fn render(&self, draw_borders: bool) -> String {
        self.render_with_config(&RenderConfig {
            draw_borders,
            ..RenderConfig::default()
        })
    }

    /// Renders the diagram with custom configuration.
    ///
    /// Lines are separated by `\n`, without a trailing newline, and padded with
    /// spaces to equal width.
    pub fn render_with_config(&self, config: &RenderConfig) -> String {
        let (height, width) = (self.height(), self.width());

        // Number of labels on each side
        let mut margins = [0usize; 4];
        if config.draw_labels {
            for position in 0..self.variable_count() {
                margins[Side::of(Var::new(position)) as usize] += 1;
            }
        }
        let start_x = LABEL_WIDTH * margins[Side::Left as usize];
        let start_y = LABEL_HEIGHT * margins[Side::Above as usize];
        let layout = Layout {
            start_x,
            start_y,
            end_x: start_x + CELL_WIDTH * width + 1,
            end_y: start_y + CELL_HEIGHT * height + 1,
        };
        let mut canvas = Canvas::new(
            layout.end_y + LABEL_HEIGHT * margins[Side::Below as usize],
            layout.end_x + LABEL_WIDTH * margins[Side::Right as usize],
        );

        if config.draw_labels {
            self.draw_labels(&mut canvas, &layout, margins);
        }
        self.draw_grid(&mut canvas, &layout, config.draw_borders);
        if config.draw_contours {
            for contour in self.contours() {
                draw_contour(&mut canvas, &layout, contour, height, width);
            }
        }
        canvas.to_string()
    }

    fn draw_labels(&self, canvas: &mut Canvas, layout: &Layout, mut margins: [usize; 4]) {
        let Layout {
            start_x,
            start_y,
            end_x,
            end_y,
        } = *layout;

        // Outermost labels first
        for position in (0..self.variable_count()).rev() {
            let var = Var::new(position);
            let side = Side::of(var);
            let depth = margins[side as usize];
            match side {
                Side::Left | Side::Right => {
                    let (bar_x, letter_x) = if side == Side::Left {
                        let x = start_x - LABEL_WIDTH * depth;
                        (x + 2, x)
                    } else {
                        let x = end_x + LABEL_WIDTH * depth;
                        (x - 3, x - 1)
                    };
                    for run in self.rows_for(var, false).chunk_by(|a, b| b - a == 1) {
                        for &row in run {
                            for k in 1..CELL_HEIGHT {
                                canvas.set(start_y + CELL_HEIGHT * row + k, bar_x, '|');
                            }
                        }
                        let middle = start_y + 2 * (run[0] + run[run.len() - 1]) + 2;
                        canvas.set(middle, letter_x, var.letter());
                    }
                }
                Side::Above | Side::Below => {
                    let (bar_y, letter_y) = if side == Side::Above {
                        let y = start_y - LABEL_HEIGHT * depth;
                        (y + 1, y)
                    } else {
                        let y = end_y + LABEL_HEIGHT * depth;
                        (y - 2, y - 1)
                    };
                    for run in self.columns_for(var, false).chunk_by(|a, b| b - a == 1) {
                        for &column in run {
                            for k in 1..CELL_WIDTH {
                                canvas.set(bar_y, start_x + CELL_WIDTH * column + k, '-');
                            }
                        }
                        let middle = start_x + 4 * (run[0] + run[run.len() - 1]) + 4;
                        canvas.set(letter_y, middle, var.letter());
                    }
                }
            }
            margins[side as usize] -= 1;
        }
    }

    fn draw_grid(&self, canvas: &mut Canvas, layout: &Layout, draw_borders: bool) {
        for y in layout.start_y..layout.end_y {
            for x in layout.start_x..layout.end_x {
                let (dy, dx) = (y - layout.start_y, x - layout.start_x);
                let on_row_line = dy % CELL_HEIGHT == 0;
                let on_column_line = dx % CELL_WIDTH == 0;
                if draw_borders {
                    match (on_row_line, on_column_line) {
                        (true, false) => canvas.set(y, x, '-'),
                        (false, true) => canvas.set(y, x, '|'),
                        (true, true) => canvas.set(y, x, '+'),
                        (false, false) => {}
                    }
                }
                if dy % CELL_HEIGHT == 2 && dx % CELL_WIDTH == 4 {
                    canvas.set(y, x, self.cell(dy / CELL_HEIGHT, dx / CELL_WIDTH).symbol());
                }
            }
        }
    }
}

/// Outlines the cells of `contour` on a `height × width` grid.
fn draw_contour(canvas: &mut Canvas, layout: &Layout, contour: &Contour, height: usize, width: usize) {
    let full_rows = contour.rows.len() == height;
    let full_columns = contour.columns.len() == width;

    for &i in &contour.rows {
        for &j in &contour.columns {
            let cx = layout.start_x + CELL_WIDTH * j + 4;
            let cy = layout.start_y + CELL_HEIGHT * i + 2;

            // Neighbours inside the contour; a contour spanning a whole axis does not wrap
            let above = contour.rows.contains(&((i + height - 1) % height)) && !(full_rows && i == 0);
            let below = contour.rows.contains(&((i + 1) % height)) && !(full_rows && i == height - 1);
            let left = contour.columns.contains(&((j + width - 1) % width)) && !(full_columns && j == 0);
            let right = contour.columns.contains(&((j + 1) % width)) && !(full_columns && j == width - 1);

            if !above {
                for x in cx - 2..=cx + 2 {
                    canvas.put(cy - 1, x, '-');
                }
            }
            if !below {
                for x in cx - 2..=cx + 2 {
                    canvas.put(cy + 1, x, '-');
                }
            }
            if !right {
                for y in cy - 1..=cy + 1 {
                    canvas.put(y, cx + 2, '|');
                }
            }
            if !left {
                for y in cy - 1..=cy + 1 {
                    canvas.put(y, cx - 2, '|');
                }
            }

            // Corners
            if !above && !left {
                canvas.set(cy - 1, cx - 2, '+');
            }
            if !above && !right {
                canvas.set(cy - 1, cx + 2, '+');
            }
            if !below && !left {
                canvas.set(cy + 1, cx - 2, '+');
            }
            if !below && !right {
                canvas.set(cy + 1, cx + 2, '+');
            }

            // Bridges across the grid lines
            if right && j != width - 1 {
                for k in 3..=4 {
                    if !above {
                        canvas.set(cy - 1, cx + k, '-');
                    }
                    if !below {
                        canvas.set(cy + 1, cx + k, '-');
                    }
                }
            }
            if left && j != 0 {
                for k in 3..=4 {
                    if !above {
                        canvas.set(cy - 1, cx - k, '-');
                    }
                    if !below {
                        canvas.set(cy + 1, cx - k, '-');
                    }
                }
            }
            if above && i != 0 {
                if !left {
                    canvas.set(cy - 2, cx - 2, '|');
                }
                if !right {
                    canvas.set(cy - 2, cx + 2, '|');
                }
            }
        }
    }
}

impl fmt::Display for VeitchDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_with_config(&RenderConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnf::Dnf;
    use crate::implicant::Implicant;

    fn diagram(terms: &[&str], dont_care: &[&str], n: u32, should_minimize: bool) -> VeitchDiagram {
        let parse = |terms: &[&str]| -> Dnf {
            terms
                .iter()
                .map(|t| Implicant::from_literal(t, Some(n)).unwrap())
                .collect()
        };
        VeitchDiagram::build(n, &parse(terms), &parse(dont_care), should_minimize).unwrap()
    }

    fn unlabeled() -> RenderConfig {
        RenderConfig {
            draw_labels: false,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_two_variables_with_labels() {
        let d = diagram(&["AB", "A'B"], &[], 2, true);
        let expected = [
            "        B            ",
            "     -------         ",
            "    +-------+-------+",
            "  | | +---+ |       |",
            "A | | | 1 | |   0   |",
            "  | | |   | |       |",
            "    +-|---|-+-------+",
            "    | |   | |       |",
            "    | | 1 | |   0   |",
            "    | +---+ |       |",
            "    +-------+-------+",
        ]
        .join("\n");
        assert_eq!(d.render(true), expected);
        assert_eq!(d.to_string(), expected);
    }

    #[test]
    fn test_contour_wraps_around_columns() {
        let d = diagram(&["ABC'", "AB'C'", "A'BC'", "A'B'C'"], &[], 3, true);
        let expected = [
            "            B                        ",
            "     ------- -------                 ",
            "    +-------+-------+-------+-------+",
            "  | | ----+ |       |       | +---- |",
            "A | |   1 | |   0   |   0   | | 1   |",
            "  | |     | |       |       | |     |",
            "    +-----|-+-------+-------+-|-----+",
            "    |     | |       |       | |     |",
            "    |   1 | |   0   |   0   | | 1   |",
            "    | ----+ |       |       | +---- |",
            "    +-------+-------+-------+-------+",
            "             ------- -------         ",
            "                    C                ",
        ]
        .join("\n");
        assert_eq!(d.render(true), expected);
    }

    #[test]
    fn test_without_borders() {
        let d = diagram(&["C'"], &[], 3, false);
        let expected = [
            "            B                        ",
            "     ------- -------                 ",
            "                                     ",
            "  |   ----+                   +----  ",
            "A |     1 |     0       0     | 1    ",
            "  |       |                   |      ",
            "          |                   |      ",
            "          |                   |      ",
            "        1 |     0       0     | 1    ",
            "      ----+                   +----  ",
            "                                     ",
            "             ------- -------         ",
            "                    C                ",
        ]
        .join("\n");
        assert_eq!(d.render(false), expected);
    }

    #[test]
    fn test_four_variables_with_dont_care() {
        let d = diagram(&["AB'", "BCD"], &["A'B'CD"], 4, true);
        let expected = [
            "            B                            ",
            "     ------- -------                     ",
            "    +-------+-------+-------+-------+    ",
            "  | |       |       | +-----------+ |    ",
            "  | |   0   |   0   | | 1   |   1 | |    ",
            "  | |       |       | |     |     | |    ",
            "A   +-------+-------+-|-----+-----|-+    ",
            "  | |       | +-------+---+ |     | | |  ",
            "  | |   0   | | 1   | | 1 | |   1 | | |  ",
            "  | |       | |     | +---+-------+ | |  ",
            "    +-------+-|-----+-----|-+-------+   D",
            "    |       | |     |     | |       | |  ",
            "    |   0   | | 1   |   1 | |   0   | |  ",
            "    |       | +-----------+ |       | |  ",
            "    +-------+-------+-------+-------+    ",
            "    |       |       |       |       |    ",
            "    |   0   |   0   |   0   |   0   |    ",
            "    |       |       |       |       |    ",
            "    +-------+-------+-------+-------+    ",
            "             ------- -------             ",
            "                    C                    ",
        ]
        .join("\n");
        assert_eq!(d.to_string(), expected);
    }

    #[test]
    fn test_contour_wraps_around_rows() {
        let d = diagram(&["D'"], &[], 4, false);
        let expected = [
            "+-------+-------+-------+-------+",
            "| |     |       |       |     | |",
            "| | 1   |   1   |   1   |   1 | |",
            "| +---------------------------+ |",
            "+-------+-------+-------+-------+",
            "|       |       |       |       |",
            "|   0   |   0   |   0   |   0   |",
            "|       |       |       |       |",
            "+-------+-------+-------+-------+",
            "|       |       |       |       |",
            "|   0   |   0   |   0   |   0   |",
            "|       |       |       |       |",
            "+-------+-------+-------+-------+",
            "| +---------------------------+ |",
            "| | 1   |   1   |   1   |   1 | |",
            "| |     |       |       |     | |",
            "+-------+-------+-------+-------+",
        ]
        .join("\n");
        assert_eq!(d.render_with_config(&unlabeled()), expected);
    }

    #[test]
    fn test_dont_care_symbol() {
        let d = diagram(&["AB"], &["A'B'"], 2, true);
        let expected = [
            "+-------+-------+",
            "| +---+ |       |",
            "| | 1 | |   0   |",
            "| +---+ |       |",
            "+-------+-------+",
            "|       |       |",
            "|   0   |   x   |",
            "|       |       |",
            "+-------+-------+",
        ]
        .join("\n");
        assert_eq!(d.render_with_config(&unlabeled()), expected);
    }

    #[test]
    fn test_single_variable_without_contours() {
        let d = diagram(&["A"], &[], 1, false);
        let config = RenderConfig {
            draw_contours: false,
            ..RenderConfig::default()
        };
        let expected = [
            "    +-------+",
            "  | |       |",
            "A | |   1   |",
            "  | |       |",
            "    +-------+",
            "    |       |",
            "    |   0   |",
            "    |       |",
            "    +-------+",
        ]
        .join("\n");
        assert_eq!(d.render_with_config(&config), expected);
    }

    #[test]
    fn test_five_variable_dimensions() {
        let d = VeitchDiagram::new(5).unwrap();
        let text = d.render(true);
        let lines: Vec<&str> = text.lines().collect();
        // B above; C and E below; A left; D right
        assert_eq!(lines.len(), 2 + 4 * 4 + 1 + 4);
        assert!(lines.iter().all(|line| line.chars().count() == 4 + 8 * 8 + 1 + 4));
        assert!(!text.ends_with('\n'));
        for letter in ['A', 'B', 'C', 'D', 'E'] {
            assert!(text.contains(letter));
        }
    }
}
