//! Veitch (Karnaugh) diagram layout for functions of up to five variables.
//!
//! A diagram is a `height × width` grid holding one cell per minterm. Each variable
//! is laid out along exactly one axis: the un-negated variable holds on a fixed set
//! of rows or columns, and the negated one on the complement. Adjacent cells differ
//! in exactly one variable, including across the grid edges, so every implicant
//! occupies a (possibly wrapping) rectangle, its [`Contour`].
//!
//! | n | grid | rows        | columns        |
//! |---|------|-------------|----------------|
//! | 1 | 2×1  | A           |                |
//! | 2 | 2×2  | A           | B              |
//! | 3 | 2×4  | A           | B, C           |
//! | 4 | 4×4  | A, D        | B, C           |
//! | 5 | 4×8  | A, D        | B, C, E        |
//!
//! See [`render`][crate::render] for the textual picture.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::dnf::Dnf;
//! use qmc_rs::veitch::{Cell, VeitchDiagram};
//!
//! let (f, n) = Dnf::parse("AB+A'B", None).unwrap();
//! let diagram = VeitchDiagram::build(n, &f, &Dnf::new(), true).unwrap();
//! assert_eq!((diagram.height(), diagram.width()), (2, 2));
//! // Minimized to B, which holds on column 0
//! assert_eq!(diagram.contours().len(), 1);
//! assert_eq!(diagram.cell(1, 0), Cell::One);
//! assert_eq!(diagram.cell(1, 1), Cell::Zero);
//! ```

use std::fmt;

use log::debug;

use crate::dnf::Dnf;
use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::qmc::minimize;
use crate::types::Var;

/// Largest variable count a diagram can be laid out for.
pub const MAX_DIAGRAM_VARIABLES: u32 = 5;

// Rows (columns) on which the un-negated letter holds, indexed by [n - 1][letter].
// An empty entry means the letter lies along the other axis.
const ROW_TABLE: [[&[usize]; 5]; 5] = [
    [&[0], &[], &[], &[], &[]],
    [&[0], &[], &[], &[], &[]],
    [&[0], &[], &[], &[], &[]],
    [&[0, 1], &[], &[], &[1, 2], &[]],
    [&[0, 1], &[], &[], &[1, 2], &[]],
];
const COLUMN_TABLE: [[&[usize]; 5]; 5] = [
    [&[], &[], &[], &[], &[]],
    [&[], &[0], &[], &[], &[]],
    [&[], &[0, 1], &[1, 2], &[], &[]],
    [&[], &[0, 1], &[1, 2], &[], &[]],
    [&[], &[0, 1, 4, 5], &[1, 2, 5, 6], &[], &[0, 1, 2, 3]],
];

/// Value of a diagram cell.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Zero,
    One,
    DontCare,
}

impl Cell {
    /// Character shown in the rendered diagram.
    pub fn symbol(self) -> char {
        match self {
            Cell::Zero => '0',
            Cell::One => '1',
            Cell::DontCare => 'x',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The cells covered by an implicant: every combination of `rows` and `columns`.
///
/// Indices are sorted. A contour may wrap around the grid, e.g. rows `{0, 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contour {
    pub rows: Vec<usize>,
    pub columns: Vec<usize>,
}

impl Contour {
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.rows.contains(&row) && self.columns.contains(&column)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the `(row, column)` pairs, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .flat_map(move |&row| self.columns.iter().map(move |&column| (row, column)))
    }
}

/// A filled Veitch diagram of an `n`-variable function, `1 <= n <= 5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VeitchDiagram {
    variable_count: u32,
    /// Row-major, `height * width` cells
    cells: Vec<Cell>,
    contours: Vec<Contour>,
}

impl VeitchDiagram {
    /// Creates an empty diagram (every cell [`Cell::Zero`]) for `n` variables.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalVariableCount`] unless `1 <= n <= 5`.
    pub fn new(n: u32) -> Result<Self> {
        if n == 0 || n > MAX_DIAGRAM_VARIABLES {
            return Err(Error::IllegalVariableCount { count: n });
        }
        let (height, width) = dimensions(n);
        Ok(Self {
            variable_count: n,
            cells: vec![Cell::Zero; height * width],
            contours: Vec::new(),
        })
    }

    /// Creates the diagram of the function `dnf` with don't-cares `dont_care`.
    ///
    /// When `should_minimize` is set, `dnf` is first replaced by its first MDNF (see
    /// [`minimize`]), so that the contours show a minimal cover. Every term that is
    /// not itself a don't-care term contributes a contour and sets its cells to
    /// [`Cell::One`]. Don't-care terms then set their remaining [`Cell::Zero`] cells
    /// to [`Cell::DontCare`].
    ///
    /// # Errors
    ///
    /// - [`Error::IllegalVariableCount`] unless `1 <= n <= 5`;
    /// - [`Error::ImplicantOutOfRange`] if a term uses a variable outside of `n`;
    /// - any error of [`minimize`].
    pub fn build(n: u32, dnf: &Dnf, dont_care: &Dnf, should_minimize: bool) -> Result<Self> {
        let mut diagram = Self::new(n)?;
        if let Some(&term) = dnf.iter().chain(dont_care).find(|term| !term.fits(n)) {
            return Err(Error::ImplicantOutOfRange { implicant: term, count: n });
        }

        let minimized;
        let dnf = if should_minimize {
            minimized = minimize(n, dnf, dont_care)?.into_iter().next().unwrap_or_default();
            debug!("veitch: drawing an MDNF of {} terms", minimized.len());
            &minimized
        } else {
            dnf
        };

        for term in dnf.iter().filter(|term| !dont_care.contains(term)) {
            let contour = diagram.contour_of(term);
            debug!(
                "veitch: contour of {}: rows {:?}, columns {:?}",
                term.to_literal(n).unwrap_or_default(),
                contour.rows,
                contour.columns
            );
            for (row, column) in contour.cells() {
                diagram.set(row, column, Cell::One);
            }
            diagram.contours.push(contour);
        }
        for term in dont_care {
            let contour = diagram.contour_of(term);
            for (row, column) in contour.cells() {
                if diagram.cell(row, column) == Cell::Zero {
                    diagram.set(row, column, Cell::DontCare);
                }
            }
        }
        Ok(diagram)
    }

    pub fn variable_count(&self) -> u32 {
        self.variable_count
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        dimensions(self.variable_count).0
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        dimensions(self.variable_count).1
    }

    /// Contours of the drawn terms, in the order of the DNF.
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Value of the cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside of the grid.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < self.height() && column < self.width(),
            "Cell ({}, {}) outside of {}x{} diagram",
            row,
            column,
            self.height(),
            self.width()
        );
        self.cells[row * self.width() + column]
    }

    /// Iterates over the rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width())
    }

    fn set(&mut self, row: usize, column: usize, cell: Cell) {
        let width = self.width();
        self.cells[row * width + column] = cell;
    }

    /// Rows on which the literal `var` (negated if `negated`) holds.
    ///
    /// Empty when `var` is laid out along the columns or is not a variable of this diagram.
    pub fn rows_for(&self, var: Var, negated: bool) -> Vec<usize> {
        axis_for(&ROW_TABLE, self.variable_count, var, negated, self.height())
    }

    /// Columns on which the literal `var` (negated if `negated`) holds.
    ///
    /// Empty when `var` is laid out along the rows or is not a variable of this diagram.
    pub fn columns_for(&self, var: Var, negated: bool) -> Vec<usize> {
        axis_for(&COLUMN_TABLE, self.variable_count, var, negated, self.width())
    }

    /// Computes the cells covered by `implicant`.
    ///
    /// Variables outside of this diagram are ignored.
    pub fn contour_of(&self, implicant: &Implicant) -> Contour {
        let mut rows: Vec<usize> = (0..self.height()).collect();
        let mut columns: Vec<usize> = (0..self.width()).collect();
        for lit in implicant.literals(self.variable_count) {
            let on_rows = self.rows_for(lit.var(), lit.is_negated());
            if !on_rows.is_empty() {
                rows.retain(|row| on_rows.contains(row));
                continue;
            }
            let on_columns = self.columns_for(lit.var(), lit.is_negated());
            columns.retain(|column| on_columns.contains(column));
        }
        Contour { rows, columns }
    }

    /// The minterm whose cell is `(row, column)`.
    pub fn minterm_at(&self, row: usize, column: usize) -> Implicant {
        let n = self.variable_count;
        let mut minterm = Implicant::new(0, 0);
        for position in 0..n {
            let var = Var::new(position);
            let on_rows = self.rows_for(var, false);
            let holds = if on_rows.is_empty() {
                self.columns_for(var, false).contains(&column)
            } else {
                on_rows.contains(&row)
            };
            minterm = minterm.with_variable(var.bit(n), holds);
        }
        minterm
    }
}

/// `(height, width)` of the grid for `n` variables.
fn dimensions(n: u32) -> (usize, usize) {
    if n == 1 {
        (2, 1)
    } else {
        (1 << (n / 2), 1 << n.div_ceil(2))
    }
}

fn axis_for(table: &[[&[usize]; 5]; 5], n: u32, var: Var, negated: bool, size: usize) -> Vec<usize> {
    let position = var.position() as usize;
    if n == 0 || position >= n as usize {
        return Vec::new();
    }
    let holds = table[n as usize - 1][position];
    if !negated || holds.is_empty() {
        holds.to_vec()
    } else {
        (0..size).filter(|i| !holds.contains(i)).collect()
    }
}
