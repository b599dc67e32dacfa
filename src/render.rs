//! Rendering terms and formulas as strings
//!
//! Output is canonical: literals follow the variable order, terms are
//! parenthesized and sorted lexicographically, so the same cover always prints
//! the same string.

use crate::form::NormalForm;
use crate::term::{Literal, Term, Variables};

/// Render one literal
///
/// In sum-of-products a literal fixed to 1 prints as `x` and one fixed to 0 as
/// `!x`. Product-of-sums terms describe false rows, so the polarity is flipped.
pub fn render_literal(literal: &Literal, form: NormalForm) -> String {
    if literal.value == form.target() {
        literal.variable.to_string()
    } else {
        format!("!{}", literal.variable)
    }
}

/// Render one term as a conjunction (SOP) or disjunction (POS)
///
/// The all-don't-care term renders as the constant it denotes.
pub fn render_term(term: &Term, variables: &Variables, form: NormalForm) -> String {
    if term.is_tautology() {
        return form.full_formula().to_string();
    }
    term.literals(variables)
        .iter()
        .map(|literal| render_literal(literal, form))
        .collect::<Vec<_>>()
        .join(form.literal_joiner())
}

/// Render a complete cover
///
/// ```
/// use logic_minimizer::render::render_formula;
/// use logic_minimizer::{NormalForm, Term, Variables};
///
/// let vars = Variables::new(&["a", "b", "c"]).unwrap();
/// let terms: Vec<Term> = vec!["--1".parse().unwrap(), "01-".parse().unwrap()];
/// assert_eq!(
///     render_formula(&terms, &vars, NormalForm::SumOfProducts),
///     "(!a & b) | (c)"
/// );
/// ```
pub fn render_formula(terms: &[Term], variables: &Variables, form: NormalForm) -> String {
    if terms.is_empty() {
        return form.empty_formula().to_string();
    }
    if terms.iter().any(Term::is_tautology) {
        return form.full_formula().to_string();
    }
    let mut rendered: Vec<String> = terms
        .iter()
        .map(|term| format!("({})", render_term(term, variables, form)))
        .collect();
    rendered.sort();
    rendered.dedup();
    rendered.join(form.term_joiner())
}
