//! Two-level normal forms and minimized results

use crate::render;
use crate::term::{Term, Variables};
use std::fmt;
use std::str::FromStr;

/// The canonical two-level form being minimized
///
/// Sum-of-products covers the rows where the function is true (minterms);
/// product-of-sums covers the rows where it is false (maxterms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalForm {
    /// Disjunction of conjunctions (SOP / DNF)
    SumOfProducts,
    /// Conjunction of disjunctions (POS / CNF)
    ProductOfSums,
}

impl NormalForm {
    /// The function value whose rows this form covers
    pub fn target(self) -> bool {
        matches!(self, NormalForm::SumOfProducts)
    }

    /// Formula for an empty cover: `"0"` for SOP, `"1"` for POS
    pub fn empty_formula(self) -> &'static str {
        match self {
            NormalForm::SumOfProducts => "0",
            NormalForm::ProductOfSums => "1",
        }
    }

    /// Formula for a cover holding the all-don't-care term
    pub fn full_formula(self) -> &'static str {
        match self {
            NormalForm::SumOfProducts => "1",
            NormalForm::ProductOfSums => "0",
        }
    }

    /// Operator joining literals inside one term
    pub(crate) fn literal_joiner(self) -> &'static str {
        match self {
            NormalForm::SumOfProducts => " & ",
            NormalForm::ProductOfSums => " | ",
        }
    }

    /// Operator joining terms
    pub(crate) fn term_joiner(self) -> &'static str {
        match self {
            NormalForm::SumOfProducts => " | ",
            NormalForm::ProductOfSums => " & ",
        }
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalForm::SumOfProducts => write!(f, "sum-of-products"),
            NormalForm::ProductOfSums => write!(f, "product-of-sums"),
        }
    }
}

impl FromStr for NormalForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sop" | "dnf" | "sum-of-products" => Ok(NormalForm::SumOfProducts),
            "pos" | "cnf" | "product-of-sums" => Ok(NormalForm::ProductOfSums),
            other => Err(format!("unknown normal form '{}'", other)),
        }
    }
}

/// A minimized two-level formula
///
/// Holds the selected implicants as [`Term`]s over the target rows of its form.
/// `Display` renders the canonical string.
///
/// # Examples
///
/// ```
/// use logic_minimizer::{Minimizable, NormalForm, TruthTable, Variables};
///
/// let vars = Variables::new(&["a", "b"]).unwrap();
/// let table = TruthTable::from_fn(vars, |v| v[0] || v[1]);
/// let sop = table.minimize(NormalForm::SumOfProducts).unwrap();
/// assert_eq!(sop.to_string(), "(a) | (b)");
/// assert!(sop.evaluate(&[false, true]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimized {
    form: NormalForm,
    variables: Variables,
    terms: Vec<Term>,
}

impl Minimized {
    /// Wrap selected terms; they are stored sorted and deduplicated
    pub fn new(form: NormalForm, variables: Variables, mut terms: Vec<Term>) -> Self {
        terms.sort();
        terms.dedup();
        Minimized {
            form,
            variables,
            terms,
        }
    }

    /// The form of this formula
    pub fn form(&self) -> NormalForm {
        self.form
    }

    /// The variable order
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// The selected implicants
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms (products for SOP, sums for POS)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the cover is empty (constant `0` for SOP, `1` for POS)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of literals
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(Term::fixed_count).sum()
    }

    /// Evaluate the formula on a full assignment
    ///
    /// A SOP is true iff some product matches. A POS term describes a block of
    /// false rows, so the formula is false iff some term matches.
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        let hit = self.terms.iter().any(|t| t.matches(assignment));
        match self.form {
            NormalForm::SumOfProducts => hit,
            NormalForm::ProductOfSums => !hit,
        }
    }
}

impl fmt::Display for Minimized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_formula(
            &self.terms,
            &self.variables,
            self.form,
        ))
    }
}
