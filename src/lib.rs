//! # Logic Minimizer
//!
//! Two-level minimization of Boolean functions given by their complete truth
//! table. A function can be minimized into a sum-of-products (covering the
//! rows where it is true) or a product-of-sums (covering the rows where it is
//! false) with three independent methods:
//!
//! - **Consensus**: Quine-McCluskey prime implicant generation followed by an
//!   essential-first greedy cover
//! - **Tabular**: the same primes with an explicit coverage matrix and
//!   Petrick's method for the part the essential implicants leave uncovered
//! - **Geometric**: maximal rectangles on a Gray-code-ordered, toroidal
//!   Karnaugh map (up to five variables)
//!
//! All three produce logically equivalent formulas.
//!
//! ## Quick Start
//!
//! ```
//! use logic_minimizer::{minimize_product_of_sums, minimize_sum_of_products, Method};
//! use logic_minimizer::{TruthTable, Variables};
//!
//! # fn main() -> Result<(), logic_minimizer::MinimizeError> {
//! let vars = Variables::new(&["a", "b", "c"])?;
//! // !(!a -> !b) | c
//! let table = TruthTable::from_fn(vars, |v| (!v[0] && v[1]) || v[2]);
//!
//! assert_eq!(minimize_sum_of_products(&table, Method::Consensus)?, "(!a & b) | (c)");
//! assert_eq!(minimize_product_of_sums(&table, Method::Geometric)?, "(!a | c) & (b | c)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Format
//!
//! Sum-of-products joins parenthesized conjunctions with `" | "`; product-of-sums
//! joins parenthesized disjunctions with `" & "`. A negated variable is written
//! `!x`. Literals follow the variable order and terms are sorted, so output is
//! stable across runs and methods. Constant functions print as `"0"` or `"1"`.
//!
//! ## Working with the Intermediate Steps
//!
//! Each stage of the pipelines is public, so the merge stages, coverage matrix
//! or Karnaugh grid can be inspected or displayed:
//!
//! ```
//! use logic_minimizer::karnaugh::{find_groups, KarnaughMap};
//! use logic_minimizer::{Consensus, NormalForm, TruthTable, Variables};
//!
//! # fn main() -> Result<(), logic_minimizer::MinimizeError> {
//! let vars = Variables::new(&["a", "b", "c"])?;
//! let table = TruthTable::from_fn(vars, |v| (!v[0] && v[1]) || v[2]);
//!
//! let consensus = Consensus::run(&table.minterms());
//! assert_eq!(consensus.stages().len(), 3);
//!
//! let map = KarnaughMap::build(&table, NormalForm::SumOfProducts)?;
//! assert_eq!(find_groups(&map).len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! Every call is a pure function of its inputs. Tables and results are plain
//! values (`Send + Sync`), so separate threads can minimize the same table
//! concurrently without synchronization.

pub mod consensus;
pub mod cover;
pub mod error;
pub mod form;
pub mod karnaugh;
pub mod minimize;
pub mod render;
pub mod term;
pub mod truth_table;

pub use consensus::{prime_implicants, Consensus};
pub use error::MinimizeError;
pub use form::{Minimized, NormalForm};
pub use minimize::{minimize_product_of_sums, minimize_sum_of_products, Method, Minimizable};
pub use term::{decode, encode, Literal, Term, Variables};
pub use truth_table::{Row, TruthTable};

/// Configuration for a minimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Minimization method
    pub method: Method,
    /// Maximum number of intermediate products kept while expanding Petrick's
    /// product; beyond it the tabular method falls back to the greedy cover
    pub petrick_limit: usize,
    /// Drop selected implicants made redundant by later selections
    pub irredundant: bool,
    /// Run the tabular method instead of failing when the geometric method
    /// cannot handle the variable count
    pub geometric_fallback: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            method: Method::Consensus,
            petrick_limit: 4096,
            irredundant: true,
            geometric_fallback: false,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration using `method`, other settings at their defaults
    pub fn with_method(method: Method) -> Self {
        MinimizerConfig {
            method,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinimizerConfig::new();
        assert_eq!(config.method, Method::Consensus);
        assert!(config.irredundant);
        assert!(!config.geometric_fallback);
        assert!(config.petrick_limit > 0);
    }

    #[test]
    fn test_with_method() {
        let config = MinimizerConfig::with_method(Method::Tabular);
        assert_eq!(config.method, Method::Tabular);
        assert_eq!(config.petrick_limit, MinimizerConfig::default().petrick_limit);
    }

    #[test]
    fn test_public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TruthTable>();
        assert_send_sync::<Minimized>();
        assert_send_sync::<MinimizerConfig>();
        assert_send_sync::<karnaugh::KarnaughMap>();
    }
}
