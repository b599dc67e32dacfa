//! Truth tables
//!
//! A [`TruthTable`] holds exactly one row per assignment of its variables, in
//! canonical ascending binary order (variable 0 is the most significant bit).
//! It is built once per minimization call and read-only afterwards.

use crate::error::{MinimizeError, Result};
use crate::term::{Term, Variables};
use std::collections::HashSet;

/// One row of a truth table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// Value of each variable, in variable order
    pub assignment: Vec<bool>,
    /// Value of the function for this assignment
    pub result: bool,
}

impl Row {
    /// The fully specified term for this row
    pub fn term(&self) -> Term {
        Term::minterm(&self.assignment)
    }
}

/// The complete truth table of a Boolean function
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    variables: Variables,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Create a table from results listed in canonical order
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_minimizer::{TruthTable, Variables};
    ///
    /// let vars = Variables::new(&["a", "b"]).unwrap();
    /// // a AND b
    /// let table = TruthTable::from_results(vars, &[false, false, false, true]).unwrap();
    /// assert_eq!(table.minterms().len(), 1);
    /// ```
    pub fn from_results(variables: Variables, results: &[bool]) -> Result<Self> {
        let n = variables.len();
        let expected = row_count(n, results.len())?;
        if results.len() != expected {
            return Err(MinimizeError::RowCount {
                expected,
                actual: results.len(),
            });
        }
        let rows = results
            .iter()
            .enumerate()
            .map(|(index, &result)| Row {
                assignment: assignment_of(index, n),
                result,
            })
            .collect();
        Ok(TruthTable { variables, rows })
    }

    /// Create a table by evaluating `f` on every assignment
    ///
    /// ```
    /// use logic_minimizer::{TruthTable, Variables};
    ///
    /// let vars = Variables::new(&["a", "b", "c"]).unwrap();
    /// let table = TruthTable::from_fn(vars, |v| (v[0] && v[1]) || v[2]);
    /// assert_eq!(table.minterms().len(), 5);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `2^n` rows cannot be indexed by `usize`.
    pub fn from_fn<F>(variables: Variables, mut f: F) -> Self
    where
        F: FnMut(&[bool]) -> bool,
    {
        let n = variables.len();
        let Ok(size) = row_count(n, 0) else {
            panic!("truth table over {} variables is too large", n);
        };
        let rows = (0..size)
            .map(|index| {
                let assignment = assignment_of(index, n);
                let result = f(&assignment);
                Row { assignment, result }
            })
            .collect();
        TruthTable { variables, rows }
    }

    /// Create a table from rows in any order
    ///
    /// The rows are validated (one row per assignment) and sorted into
    /// canonical order.
    pub fn from_rows(variables: Variables, rows: Vec<Row>) -> Result<Self> {
        let n = variables.len();
        let expected = row_count(n, rows.len())?;
        if rows.len() != expected {
            return Err(MinimizeError::RowCount {
                expected,
                actual: rows.len(),
            });
        }
        let mut seen = HashSet::with_capacity(expected);
        let mut indexed = Vec::with_capacity(expected);
        for row in rows {
            if row.assignment.len() != n {
                return Err(MinimizeError::LengthMismatch {
                    expected: n,
                    actual: row.assignment.len(),
                });
            }
            let index = index_of(&row.assignment);
            if !seen.insert(index) {
                return Err(MinimizeError::DuplicateEncodingConflict {
                    encoding: row.term().to_string(),
                });
            }
            indexed.push((index, row));
        }
        indexed.sort_by_key(|(index, _)| *index);
        Ok(TruthTable {
            variables,
            rows: indexed.into_iter().map(|(_, row)| row).collect(),
        })
    }

    /// The variable order
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Rows in canonical order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Terms of the rows where the function is true
    pub fn minterms(&self) -> Vec<Term> {
        self.terms_where(true)
    }

    /// Terms of the rows where the function is false
    pub fn maxterms(&self) -> Vec<Term> {
        self.terms_where(false)
    }

    pub(crate) fn terms_where(&self, result: bool) -> Vec<Term> {
        self.rows
            .iter()
            .filter(|row| row.result == result)
            .map(Row::term)
            .collect()
    }
}

/// `2^n`, or a `RowCount` error when it does not fit in `usize`
fn row_count(n: usize, actual: usize) -> Result<usize> {
    u32::try_from(n)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(MinimizeError::RowCount {
            expected: usize::MAX,
            actual,
        })
}

fn assignment_of(index: usize, n: usize) -> Vec<bool> {
    (0..n).map(|i| (index >> (n - 1 - i)) & 1 == 1).collect()
}

fn index_of(assignment: &[bool]) -> usize {
    assignment
        .iter()
        .fold(0, |acc, &bit| (acc << 1) | usize::from(bit))
}
