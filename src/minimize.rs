//! Minimization pipelines
//!
//! Three methods produce equivalent two-level formulas from a truth table:
//!
//! - [`Method::Consensus`]: prime implicants by consensus, then essential-first
//!   greedy cover (most new coverage, then fewest variables)
//! - [`Method::Tabular`]: the same primes and coverage matrix, with the residual
//!   solved exactly by Petrick's method
//! - [`Method::Geometric`]: maximal rectangles on a Karnaugh map, then
//!   essential-first greedy cover (fewest variables, then most new coverage)

use crate::consensus::prime_implicants;
use crate::cover::{self, CoverageMatrix, Strategy, TieBreak};
use crate::error::{MinimizeError, Result};
use crate::form::{Minimized, NormalForm};
use crate::karnaugh::{select_groups, KarnaughMap};
use crate::term::Term;
use crate::truth_table::TruthTable;
use crate::MinimizerConfig;
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

/// Minimization method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Quine-McCluskey consensus with greedy cover
    #[default]
    Consensus,
    /// Quine-McCluskey with coverage matrix and Petrick's method
    Tabular,
    /// Karnaugh map grouping
    Geometric,
}

impl Method {
    /// All methods, in declaration order
    pub const ALL: [Method; 3] = [Method::Consensus, Method::Tabular, Method::Geometric];
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Consensus => write!(f, "consensus"),
            Method::Tabular => write!(f, "tabular"),
            Method::Geometric => write!(f, "geometric"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "consensus" | "calculation" => Ok(Method::Consensus),
            "tabular" | "table" => Ok(Method::Tabular),
            "geometric" | "karnaugh" => Ok(Method::Geometric),
            other => Err(format!("unknown minimization method '{}'", other)),
        }
    }
}

/// Types that can be minimized into a two-level formula
///
/// All methods take `&self` and return a new [`Minimized`] value; the input is
/// never modified.
///
/// ```
/// use logic_minimizer::{Method, Minimizable, MinimizerConfig, NormalForm, TruthTable, Variables};
///
/// # fn main() -> Result<(), logic_minimizer::MinimizeError> {
/// let vars = Variables::new(&["a", "b", "c"])?;
/// let table = TruthTable::from_fn(vars, |v| (!v[0] && v[1]) || v[2]);
///
/// let config = MinimizerConfig {
///     method: Method::Geometric,
///     ..Default::default()
/// };
/// let pos = table.minimize_with_config(NormalForm::ProductOfSums, &config)?;
/// assert_eq!(pos.to_string(), "(!a | c) & (b | c)");
/// # Ok(())
/// # }
/// ```
pub trait Minimizable {
    /// Minimize with the default configuration (consensus method)
    fn minimize(&self, form: NormalForm) -> Result<Minimized> {
        self.minimize_with_config(form, &MinimizerConfig::default())
    }

    /// Minimize with an explicit configuration
    fn minimize_with_config(&self, form: NormalForm, config: &MinimizerConfig)
        -> Result<Minimized>;
}

impl Minimizable for TruthTable {
    fn minimize_with_config(
        &self,
        form: NormalForm,
        config: &MinimizerConfig,
    ) -> Result<Minimized> {
        let targets = self.terms_where(form.target());
        if targets.is_empty() {
            debug!("no target rows for {}, result is constant", form);
            return Ok(Minimized::new(form, self.variables().clone(), Vec::new()));
        }

        debug!(
            "minimizing {} over {} variable(s), {} target row(s), method {}",
            form,
            self.num_vars(),
            targets.len(),
            config.method
        );
        let terms = match config.method {
            Method::Consensus => {
                algebraic(&targets, Strategy::Greedy(TieBreak::CoverageFirst), config)?
            }
            Method::Tabular => algebraic(&targets, Strategy::Petrick, config)?,
            Method::Geometric => match KarnaughMap::build(self, form) {
                Ok(map) => select_groups(&map, config)?
                    .iter()
                    .map(|group| group.term().clone())
                    .collect(),
                Err(MinimizeError::UnsupportedVariableCount { count, .. })
                    if config.geometric_fallback =>
                {
                    warn!(
                        "Karnaugh map unavailable for {} variable(s), using the tabular method",
                        count
                    );
                    algebraic(&targets, Strategy::Petrick, config)?
                }
                Err(err) => return Err(err),
            },
        };
        Ok(Minimized::new(form, self.variables().clone(), terms))
    }
}

/// Prime implicants of `targets`, then a cover selected with `strategy`
fn algebraic(targets: &[Term], strategy: Strategy, config: &MinimizerConfig) -> Result<Vec<Term>> {
    let primes = prime_implicants(targets);
    let matrix = CoverageMatrix::build(&primes, targets, Term::covers, Term::fixed_count);
    let selection = cover::solve(&matrix, strategy, config)?;
    Ok(selection
        .chosen
        .into_iter()
        .map(|i| primes[i].clone())
        .collect())
}

/// Minimize `table` into a sum-of-products string
///
/// ```
/// use logic_minimizer::{minimize_sum_of_products, Method, TruthTable, Variables};
///
/// let vars = Variables::new(&["a", "b", "c"]).unwrap();
/// let table = TruthTable::from_fn(vars, |v| (v[0] && v[1]) || v[2]);
/// assert_eq!(
///     minimize_sum_of_products(&table, Method::Tabular).unwrap(),
///     "(a & b) | (c)"
/// );
/// ```
pub fn minimize_sum_of_products(table: &TruthTable, method: Method) -> Result<String> {
    minimize_to_string(table, NormalForm::SumOfProducts, method)
}

/// Minimize `table` into a product-of-sums string
pub fn minimize_product_of_sums(table: &TruthTable, method: Method) -> Result<String> {
    minimize_to_string(table, NormalForm::ProductOfSums, method)
}

fn minimize_to_string(table: &TruthTable, form: NormalForm, method: Method) -> Result<String> {
    table
        .minimize_with_config(form, &MinimizerConfig::with_method(method))
        .map(|minimized| minimized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Variables;
    use test_log::test;

    fn canonical() -> TruthTable {
        let vars = Variables::new(&["a", "b", "c"]).unwrap();
        TruthTable::from_fn(vars, |v| (!v[0] && v[1]) || v[2])
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("Karnaugh".parse::<Method>(), Ok(Method::Geometric));
        assert_eq!("tabular".parse::<Method>(), Ok(Method::Tabular));
        assert!("espresso".parse::<Method>().is_err());
        assert_eq!(Method::default(), Method::Consensus);
    }

    #[test]
    fn test_canonical_all_methods() {
        let table = canonical();
        for method in Method::ALL {
            assert_eq!(
                minimize_sum_of_products(&table, method).unwrap(),
                "(!a & b) | (c)",
                "{}",
                method
            );
            assert_eq!(
                minimize_product_of_sums(&table, method).unwrap(),
                "(!a | c) & (b | c)",
                "{}",
                method
            );
        }
    }

    #[test]
    fn test_geometric_fallback() {
        let names: Vec<String> = (0..6).map(|i| format!("x{}", i)).collect();
        let table = TruthTable::from_fn(Variables::new(&names).unwrap(), |v| v[0] && v[5]);

        assert_eq!(
            minimize_sum_of_products(&table, Method::Geometric).unwrap_err(),
            MinimizeError::UnsupportedVariableCount { count: 6, max: 5 }
        );

        let config = MinimizerConfig {
            method: Method::Geometric,
            geometric_fallback: true,
            ..Default::default()
        };
        let sop = table
            .minimize_with_config(NormalForm::SumOfProducts, &config)
            .unwrap();
        assert_eq!(sop.to_string(), "(x0 & x5)");
    }

    #[test]
    fn test_constant_tables() {
        let vars = Variables::new(&["a", "b"]).unwrap();
        let ones = TruthTable::from_fn(vars.clone(), |_| true);
        let zeros = TruthTable::from_fn(vars, |_| false);
        for method in Method::ALL {
            assert_eq!(minimize_sum_of_products(&ones, method).unwrap(), "1");
            assert_eq!(minimize_product_of_sums(&ones, method).unwrap(), "1");
            assert_eq!(minimize_sum_of_products(&zeros, method).unwrap(), "0");
            assert_eq!(minimize_product_of_sums(&zeros, method).unwrap(), "0");
        }
    }
}
