//! Karnaugh maps
//!
//! A [`KarnaughMap`] lays a truth table out on a toroidal grid whose rows and
//! columns follow the reflected Gray code, so that neighbouring cells (including
//! across the wrap-around edges) differ in exactly one variable.
//!
//! The first `n / 2` variables index the rows and the remaining ones index the
//! columns:
//!
//! | variables | rows x cols | row vars | col vars |
//! |-----------|-------------|----------|----------|
//! | 1         | 1 x 2       | 0        | 1        |
//! | 2         | 2 x 2       | 1        | 1        |
//! | 3         | 2 x 4       | 1        | 2        |
//! | 4         | 4 x 4       | 2        | 2        |
//! | 5         | 4 x 8       | 2        | 3        |

pub mod groups;

pub use groups::{find_groups, select_groups, Group};

use crate::error::{MinimizeError, Result};
use crate::form::NormalForm;
use crate::term::{Term, Variables};
use crate::truth_table::TruthTable;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Largest variable count a Karnaugh map is built for
pub const MAX_VARIABLES: usize = 5;

/// Reflected Gray code over `bits` bits
///
/// Built iteratively: starting from `[""]`, each step prefixes the current
/// sequence with `0` and its reverse with `1`.
///
/// ```
/// use logic_minimizer::karnaugh::gray_code;
///
/// assert_eq!(gray_code(2), vec!["00", "01", "11", "10"]);
/// ```
pub fn gray_code(bits: usize) -> Vec<String> {
    let mut codes = vec![String::new()];
    for _ in 0..bits {
        let mut next = Vec::with_capacity(codes.len() * 2);
        next.extend(codes.iter().map(|c| format!("0{}", c)));
        next.extend(codes.iter().rev().map(|c| format!("1{}", c)));
        codes = next;
    }
    codes
}

/// A truth table on a Gray-code-ordered toroidal grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KarnaughMap {
    variables: Variables,
    form: NormalForm,
    num_row_vars: usize,
    row_codes: Vec<String>,
    col_codes: Vec<String>,
    /// `cells[row][col]` is true where the function has the target value
    cells: Vec<Vec<bool>>,
}

impl KarnaughMap {
    /// Build the map of `table` for the given target form
    ///
    /// Cells hold `true` where the function equals the form's target value:
    /// the result for sum-of-products, its negation for product-of-sums.
    ///
    /// # Errors
    ///
    /// Returns [`MinimizeError::UnsupportedVariableCount`] for fewer than one or
    /// more than [`MAX_VARIABLES`] variables.
    pub fn build(table: &TruthTable, form: NormalForm) -> Result<Self> {
        let n = table.num_vars();
        if !(1..=MAX_VARIABLES).contains(&n) {
            return Err(MinimizeError::UnsupportedVariableCount {
                count: n,
                max: MAX_VARIABLES,
            });
        }

        let num_row_vars = n / 2;
        let row_codes = gray_code(num_row_vars);
        let col_codes = gray_code(n - num_row_vars);
        let row_index: HashMap<&str, usize> = row_codes
            .iter()
            .enumerate()
            .map(|(i, code)| (code.as_str(), i))
            .collect();
        let col_index: HashMap<&str, usize> = col_codes
            .iter()
            .enumerate()
            .map(|(i, code)| (code.as_str(), i))
            .collect();

        let mut cells = vec![vec![false; col_codes.len()]; row_codes.len()];
        let mut placed = vec![vec![false; col_codes.len()]; row_codes.len()];
        let target = form.target();

        for row in table.rows() {
            let bits: String = row
                .assignment
                .iter()
                .map(|&b| if b { '1' } else { '0' })
                .collect();
            let (row_bits, col_bits) = bits.split_at(num_row_vars);
            let (r, c) = (row_index[row_bits], col_index[col_bits]);
            if placed[r][c] {
                return Err(MinimizeError::DuplicateEncodingConflict { encoding: bits });
            }
            placed[r][c] = true;
            cells[r][c] = row.result == target;
        }

        debug!(
            "Karnaugh map {}x{} ({} row var(s), {} col var(s))",
            row_codes.len(),
            col_codes.len(),
            num_row_vars,
            n - num_row_vars
        );

        Ok(KarnaughMap {
            variables: table.variables().clone(),
            form,
            num_row_vars,
            row_codes,
            col_codes,
            cells,
        })
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.row_codes.len()
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        self.col_codes.len()
    }

    /// The variable order
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// The form this map was built for
    pub fn form(&self) -> NormalForm {
        self.form
    }

    /// Variables indexing the rows
    pub fn row_variables(&self) -> &[Arc<str>] {
        &self.variables.as_slice()[..self.num_row_vars]
    }

    /// Variables indexing the columns
    pub fn col_variables(&self) -> &[Arc<str>] {
        &self.variables.as_slice()[self.num_row_vars..]
    }

    /// Gray code label of each row
    pub fn row_labels(&self) -> &[String] {
        &self.row_codes
    }

    /// Gray code label of each column
    pub fn col_labels(&self) -> &[String] {
        &self.col_codes
    }

    /// Whether cell `(row, col)` holds the target value
    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// The grid, row by row
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// The fully specified term of the assignment at `(row, col)`
    pub fn assignment(&self, row: usize, col: usize) -> Term {
        let bits: Vec<bool> = self.row_codes[row]
            .chars()
            .chain(self.col_codes[col].chars())
            .map(|c| c == '1')
            .collect();
        Term::minterm(&bits)
    }

    /// Coordinates of every target cell, row-major
    pub fn target_cells(&self) -> Vec<(usize, usize)> {
        (0..self.rows())
            .flat_map(|r| (0..self.cols()).map(move |c| (r, c)))
            .filter(|&(r, c)| self.cells[r][c])
            .collect()
    }
}
