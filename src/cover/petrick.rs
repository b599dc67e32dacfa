//! Petrick's method
//!
//! The residual targets form a product of sums over candidate indices: each
//! target contributes the sum of the candidates covering it. Multiplying out
//! gives every cover as a product term; the shortest one is selected.

use super::CoverageMatrix;
use log::trace;
use std::collections::BTreeSet;

/// Find a minimum cover of `targets` by expanding Petrick's product
///
/// Dominated products (supersets of another product) are absorbed after every
/// multiplication step. Among the shortest products, the one with the fewest
/// total fixed variables wins, then the first one encountered.
///
/// Returns `None` as soon as the number of intermediate products exceeds
/// `limit`, or if some target has no covering candidate.
pub fn petrick(matrix: &CoverageMatrix, targets: &[usize], limit: usize) -> Option<Vec<usize>> {
    let mut clauses: Vec<BTreeSet<usize>> = Vec::new();
    for &target in targets {
        let clause: BTreeSet<usize> = matrix.covering(target).collect();
        if clause.is_empty() {
            return None;
        }
        absorb_into(&mut clauses, clause);
    }
    trace!("Petrick: {} clause(s) after absorption", clauses.len());

    let mut products: Vec<BTreeSet<usize>> = vec![BTreeSet::new()];
    for clause in &clauses {
        let mut next: Vec<BTreeSet<usize>> = Vec::new();
        for product in &products {
            for &candidate in clause {
                let mut extended = product.clone();
                extended.insert(candidate);
                absorb_into(&mut next, extended);
                if next.len() > limit {
                    trace!("Petrick: product limit {} exceeded", limit);
                    return None;
                }
            }
        }
        products = next;
    }

    let mut best: Option<(usize, usize, &BTreeSet<usize>)> = None;
    for product in &products {
        let cost: usize = product.iter().map(|&c| matrix.cost(c)).sum();
        let better = match best {
            None => true,
            Some((len, best_cost, _)) => {
                product.len() < len || (product.len() == len && cost < best_cost)
            }
        };
        if better {
            best = Some((product.len(), cost, product));
        }
    }
    best.map(|(_, _, product)| product.iter().copied().collect())
}

/// Insert `set` unless an existing set is a subset of it; remove existing
/// supersets of `set`
fn absorb_into(sets: &mut Vec<BTreeSet<usize>>, set: BTreeSet<usize>) {
    if sets.iter().any(|existing| existing.is_subset(&set)) {
        return;
    }
    sets.retain(|existing| !existing.is_superset(&set));
    sets.push(set);
}
