//! Set cover selection shared by every minimization pipeline
//!
//! A [`CoverageMatrix`] records which candidates (prime implicants or Karnaugh
//! groups) cover which targets (minterms, maxterms or grid cells). [`solve`] then
//! selects a covering subset:
//!
//! 1. essential candidates (sole coverer of some target) are taken unconditionally;
//! 2. the residual targets are covered greedily under a [`TieBreak`] policy, or
//!    exactly with Petrick's method;
//! 3. optionally, selections made redundant by later picks are dropped.
//!
//! Both the algebraic and the geometric pipelines go through this module so
//! their selection behavior cannot drift apart.

mod petrick;

pub use petrick::petrick;

use crate::error::{MinimizeError, Result};
use crate::MinimizerConfig;
use log::{debug, trace, warn};

/// Order in which the greedy residual step ranks candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Most newly covered targets first, then fewest fixed variables
    CoverageFirst,
    /// Fewest fixed variables first, then most newly covered targets
    GeneralityFirst,
}

/// How targets left over after essential selection are covered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Greedy set cover under the given policy
    Greedy(TieBreak),
    /// Petrick's method, falling back to greedy coverage-first when the
    /// expansion grows past `MinimizerConfig::petrick_limit`
    Petrick,
}

/// Coverage relation between candidates and targets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageMatrix {
    /// `rows[target][candidate]`
    rows: Vec<Vec<bool>>,
    /// Number of fixed variables of each candidate
    costs: Vec<usize>,
}

impl CoverageMatrix {
    /// Build the matrix from any coverage predicate
    ///
    /// `cost` ranks candidates for tie-breaking; lower is more general.
    pub fn build<C, T, P, W>(candidates: &[C], targets: &[T], covers: P, cost: W) -> Self
    where
        P: Fn(&C, &T) -> bool,
        W: Fn(&C) -> usize,
    {
        let rows: Vec<Vec<bool>> = targets
            .iter()
            .map(|target| candidates.iter().map(|c| covers(c, target)).collect())
            .collect();
        for (t, row) in rows.iter().enumerate() {
            trace!(
                "coverage row {}: {}",
                t,
                row.iter().map(|&b| if b { '1' } else { '0' }).collect::<String>()
            );
        }
        CoverageMatrix {
            rows,
            costs: candidates.iter().map(cost).collect(),
        }
    }

    /// Number of targets (rows)
    pub fn num_targets(&self) -> usize {
        self.rows.len()
    }

    /// Number of candidates (columns)
    pub fn num_candidates(&self) -> usize {
        self.costs.len()
    }

    /// The raw matrix, one row per target
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Check if `candidate` covers `target`
    pub fn covers(&self, candidate: usize, target: usize) -> bool {
        self.rows[target][candidate]
    }

    /// Cost of a candidate
    pub fn cost(&self, candidate: usize) -> usize {
        self.costs[candidate]
    }

    /// Candidates covering `target`, in index order
    pub fn covering(&self, target: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[target]
            .iter()
            .enumerate()
            .filter(|(_, &covered)| covered)
            .map(|(candidate, _)| candidate)
    }

    /// Targets covered by `candidate`, in index order
    pub fn covered_by(&self, candidate: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| row[candidate])
            .map(|(target, _)| target)
    }

    /// Candidates that are the only coverer of at least one target
    ///
    /// Listed in the order their first uniquely covered target appears.
    pub fn essentials(&self) -> Vec<usize> {
        let mut essentials = Vec::new();
        for target in 0..self.num_targets() {
            let mut covering = self.covering(target);
            if let (Some(only), None) = (covering.next(), covering.next()) {
                if !essentials.contains(&only) {
                    essentials.push(only);
                }
            }
        }
        essentials
    }
}

/// The candidates chosen by [`solve`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Essential candidates
    pub essential: Vec<usize>,
    /// Every chosen candidate (essentials first), in selection order
    pub chosen: Vec<usize>,
}

/// Select a cover of all targets
pub fn solve(
    matrix: &CoverageMatrix,
    strategy: Strategy,
    config: &MinimizerConfig,
) -> Result<Selection> {
    let uncoverable = (0..matrix.num_targets())
        .filter(|&t| matrix.covering(t).next().is_none())
        .count();
    if uncoverable > 0 {
        return Err(MinimizeError::IncompleteCover {
            uncovered: uncoverable,
        });
    }

    let mut covered = vec![false; matrix.num_targets()];
    let essential = matrix.essentials();
    for &candidate in &essential {
        for target in matrix.covered_by(candidate) {
            covered[target] = true;
        }
    }
    debug!(
        "{} essential candidate(s) cover {}/{} targets",
        essential.len(),
        covered.iter().filter(|&&c| c).count(),
        covered.len()
    );

    let mut chosen = essential.clone();
    let residual: Vec<usize> = (0..covered.len()).filter(|&t| !covered[t]).collect();
    if !residual.is_empty() {
        let policy = match strategy {
            Strategy::Greedy(policy) => Some(policy),
            Strategy::Petrick => match petrick(matrix, &residual, config.petrick_limit) {
                Some(product) => {
                    debug!("Petrick selected {:?}", product);
                    chosen.extend(product);
                    None
                }
                None => {
                    warn!(
                        "Petrick expansion exceeded {} products, falling back to greedy",
                        config.petrick_limit
                    );
                    Some(TieBreak::CoverageFirst)
                }
            },
        };
        if let Some(policy) = policy {
            greedy(matrix, policy, &mut covered, &mut chosen)?;
        }
    }

    if config.irredundant {
        drop_redundant(matrix, &essential, &mut chosen);
    }

    Ok(Selection { essential, chosen })
}

fn greedy(
    matrix: &CoverageMatrix,
    policy: TieBreak,
    covered: &mut [bool],
    chosen: &mut Vec<usize>,
) -> Result<()> {
    while covered.iter().any(|&c| !c) {
        let mut best: Option<(usize, usize, usize)> = None;
        for candidate in 0..matrix.num_candidates() {
            if chosen.contains(&candidate) {
                continue;
            }
            let count = matrix
                .covered_by(candidate)
                .filter(|&t| !covered[t])
                .count();
            if count == 0 {
                continue;
            }
            let cost = matrix.cost(candidate);
            let better = match best {
                None => true,
                Some((_, best_count, best_cost)) => match policy {
                    TieBreak::CoverageFirst => {
                        count > best_count || (count == best_count && cost < best_cost)
                    }
                    TieBreak::GeneralityFirst => {
                        cost < best_cost || (cost == best_cost && count > best_count)
                    }
                },
            };
            if better {
                best = Some((candidate, count, cost));
            }
        }

        let Some((candidate, count, _)) = best else {
            return Err(MinimizeError::IncompleteCover {
                uncovered: covered.iter().filter(|&&c| !c).count(),
            });
        };
        trace!("greedy picked candidate {} covering {} new", candidate, count);
        for target in matrix.covered_by(candidate) {
            covered[target] = true;
        }
        chosen.push(candidate);
    }
    Ok(())
}

/// Drop non-essential selections whose targets are all covered by the others,
/// latest selection first
fn drop_redundant(matrix: &CoverageMatrix, essential: &[usize], chosen: &mut Vec<usize>) {
    let mut i = chosen.len();
    while i > 0 {
        i -= 1;
        let candidate = chosen[i];
        if essential.contains(&candidate) {
            continue;
        }
        let redundant = matrix.covered_by(candidate).all(|target| {
            chosen
                .iter()
                .any(|&other| other != candidate && matrix.covers(other, target))
        });
        if redundant {
            debug!("dropping redundant candidate {}", candidate);
            chosen.remove(i);
        }
    }
}

#[cfg(test)]
mod tests;
