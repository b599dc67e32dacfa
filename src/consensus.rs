//! Prime implicant generation by iterative consensus (Quine-McCluskey)
//!
//! Starting from the target minterms, every stage merges all pairs of terms that
//! differ in exactly one specified position. Terms that take part in no merge are
//! prime; the merged terms form the next stage.

use crate::term::Term;
use log::{debug, trace};
use std::collections::BTreeSet;

/// The outcome of a consensus run: every merge stage and the prime implicants
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consensus {
    stages: Vec<Vec<Term>>,
    primes: Vec<Term>,
}

impl Consensus {
    /// Run consensus over the given terms
    ///
    /// Duplicate input terms are merged. An empty input yields no stages and no
    /// primes.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_minimizer::{Consensus, Term};
    ///
    /// let terms: Vec<Term> = ["001", "011", "101", "111"]
    ///     .iter()
    ///     .map(|s| s.parse().unwrap())
    ///     .collect();
    /// let consensus = Consensus::run(&terms);
    /// assert_eq!(consensus.primes().len(), 1);
    /// assert_eq!(consensus.primes()[0].to_string(), "--1");
    /// ```
    pub fn run(terms: &[Term]) -> Self {
        let mut current: Vec<Term> = terms
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let mut stages = Vec::new();
        let mut primes = BTreeSet::new();

        while !current.is_empty() {
            let mut used = vec![false; current.len()];
            let mut next = BTreeSet::new();

            for i in 0..current.len() {
                for j in (i + 1)..current.len() {
                    if let Some(position) = current[i].combinable(&current[j]) {
                        let merged = current[i].combine(position);
                        trace!("merge {} + {} => {}", current[i], current[j], merged);
                        used[i] = true;
                        used[j] = true;
                        next.insert(merged);
                    }
                }
            }

            primes.extend(
                current
                    .iter()
                    .zip(&used)
                    .filter(|(_, &was_used)| !was_used)
                    .map(|(term, _)| term.clone()),
            );

            let next: Vec<Term> = next.into_iter().collect();
            debug!(
                "consensus stage {}: {} terms, {} merged into {}",
                stages.len() + 1,
                current.len(),
                used.iter().filter(|&&u| u).count(),
                next.len()
            );

            stages.push(std::mem::replace(&mut current, next));
        }

        debug!("consensus found {} prime implicants", primes.len());
        Consensus {
            stages,
            primes: primes.into_iter().collect(),
        }
    }

    /// Every stage, starting with the deduplicated input terms
    pub fn stages(&self) -> &[Vec<Term>] {
        &self.stages
    }

    /// The prime implicants, sorted and deduplicated
    pub fn primes(&self) -> &[Term] {
        &self.primes
    }

    /// Consume the run and return the prime implicants
    pub fn into_primes(self) -> Vec<Term> {
        self.primes
    }
}

/// All prime implicants of the function whose target terms are `terms`
pub fn prime_implicants(terms: &[Term]) -> Vec<Term> {
    Consensus::run(terms).into_primes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn terms(list: &[&str]) -> Vec<Term> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn strings(terms: &[Term]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_canonical_sop_primes() {
        let primes = prime_implicants(&terms(&["001", "010", "011", "101", "111"]));
        assert_eq!(strings(&primes), vec!["--1", "01-"]);
    }

    #[test]
    fn test_canonical_pos_primes() {
        let primes = prime_implicants(&terms(&["000", "100", "110"]));
        assert_eq!(strings(&primes), vec!["-00", "1-0"]);
    }

    #[test]
    fn test_stages_are_recorded() {
        let consensus = Consensus::run(&terms(&["001", "010", "011", "101", "111"]));
        let stages = consensus.stages();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].len(), 5);
        assert_eq!(strings(&stages[1]), vec!["-01", "-11", "0-1", "01-", "1-1"]);
        assert_eq!(strings(&stages[2]), vec!["--1"]);
    }

    #[test]
    fn test_duplicates_are_merged() {
        let primes = prime_implicants(&terms(&["01", "01", "11"]));
        assert_eq!(strings(&primes), vec!["-1"]);
    }

    #[test]
    fn test_xor_has_no_merges() {
        let primes = prime_implicants(&terms(&["01", "10"]));
        assert_eq!(strings(&primes), vec!["01", "10"]);
    }

    #[test]
    fn test_full_cube_collapses_to_tautology() {
        let all: Vec<Term> = (0..8).map(|i| Term::from_index(i, 3)).collect();
        let primes = prime_implicants(&all);
        assert_eq!(primes.len(), 1);
        assert!(primes[0].is_tautology());
    }

    #[test]
    fn test_empty_input() {
        let consensus = Consensus::run(&[]);
        assert!(consensus.stages().is_empty());
        assert!(consensus.primes().is_empty());
    }

    #[test]
    fn test_primes_cover_every_input() {
        let input = terms(&["0000", "0001", "0011", "0111", "1111", "1000", "1010"]);
        let primes = prime_implicants(&input);
        for term in &input {
            assert!(primes.iter().any(|p| p.covers(term)), "{} uncovered", term);
        }
        for (i, a) in primes.iter().enumerate() {
            for b in &primes[i + 1..] {
                assert!(a.combinable(b).is_none());
            }
        }
    }
}
