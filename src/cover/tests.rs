//! Tests for the cover module

use super::*;

/// Candidates given as explicit target sets
fn matrix(candidates: &[&[usize]], num_targets: usize, costs: &[usize]) -> CoverageMatrix {
    let targets: Vec<usize> = (0..num_targets).collect();
    let indexed: Vec<(usize, &[usize])> = candidates.iter().copied().enumerate().collect();
    CoverageMatrix::build(
        &indexed,
        &targets,
        |(_, set), target| set.contains(target),
        |(i, _)| costs[*i],
    )
}

fn config() -> MinimizerConfig {
    MinimizerConfig::default()
}

#[test]
fn test_matrix_shape() {
    let m = matrix(&[&[0, 1], &[1, 2]], 3, &[1, 1]);
    assert_eq!(m.num_targets(), 3);
    assert_eq!(m.num_candidates(), 2);
    assert!(m.covers(0, 0));
    assert!(!m.covers(1, 0));
    assert_eq!(m.covering(1).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(m.covered_by(1).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(m.rows()[2], vec![false, true]);
}

#[test]
fn test_essentials() {
    let m = matrix(&[&[0, 1], &[1, 2], &[1]], 3, &[1, 1, 1]);
    assert_eq!(m.essentials(), vec![0, 1]);
}

#[test]
fn test_essentials_cover_everything() {
    let m = matrix(&[&[0, 1], &[1, 2], &[1]], 3, &[1, 1, 1]);
    for strategy in [
        Strategy::Greedy(TieBreak::CoverageFirst),
        Strategy::Greedy(TieBreak::GeneralityFirst),
        Strategy::Petrick,
    ] {
        let selection = solve(&m, strategy, &config()).unwrap();
        assert_eq!(selection.essential, vec![0, 1]);
        assert_eq!(selection.chosen, vec![0, 1]);
    }
}

#[test]
fn test_coverage_first_prefers_count() {
    // X = {0, 1} cost 2, Y = {0, 1, 2} cost 3, Z = {2} cost 1
    let m = matrix(&[&[0, 1], &[0, 1, 2], &[2]], 3, &[2, 3, 1]);
    let selection = solve(&m, Strategy::Greedy(TieBreak::CoverageFirst), &config()).unwrap();
    assert!(selection.essential.is_empty());
    assert_eq!(selection.chosen, vec![1]);
}

#[test]
fn test_generality_first_prefers_cost() {
    let m = matrix(&[&[0, 1], &[0, 1, 2], &[2]], 3, &[2, 3, 1]);
    let selection = solve(&m, Strategy::Greedy(TieBreak::GeneralityFirst), &config()).unwrap();
    assert_eq!(selection.chosen, vec![2, 0]);
}

#[test]
fn test_coverage_first_breaks_ties_by_cost() {
    let m = matrix(&[&[0, 1], &[1, 2], &[0, 2]], 3, &[3, 1, 2]);
    let mut cfg = config();
    cfg.irredundant = false;
    let selection = solve(&m, Strategy::Greedy(TieBreak::CoverageFirst), &cfg).unwrap();
    assert_eq!(selection.chosen[0], 1);
}

// A = {0,1,2,3}, B = {0,1,4}, C = {2,3,5}, D = {4}, F = {5}
const TRAP: [&[usize]; 5] = [&[0, 1, 2, 3], &[0, 1, 4], &[2, 3, 5], &[4], &[5]];

#[test]
fn test_greedy_without_irredundant_keeps_extra() {
    let m = matrix(&TRAP, 6, &[1; 5]);
    let mut cfg = config();
    cfg.irredundant = false;
    let selection = solve(&m, Strategy::Greedy(TieBreak::CoverageFirst), &cfg).unwrap();
    assert_eq!(selection.chosen, vec![0, 1, 2]);
}

#[test]
fn test_irredundant_pass_drops_subsumed_pick() {
    let m = matrix(&TRAP, 6, &[1; 5]);
    let selection = solve(&m, Strategy::Greedy(TieBreak::CoverageFirst), &config()).unwrap();
    assert_eq!(selection.chosen, vec![1, 2]);
}

#[test]
fn test_petrick_finds_minimum() {
    let m = matrix(&TRAP, 6, &[1; 5]);
    let mut cfg = config();
    cfg.irredundant = false;
    let selection = solve(&m, Strategy::Petrick, &cfg).unwrap();
    assert_eq!(selection.chosen, vec![1, 2]);
}

#[test]
fn test_petrick_direct() {
    let m = matrix(&TRAP, 6, &[1; 5]);
    let targets: Vec<usize> = (0..6).collect();
    assert_eq!(petrick(&m, &targets, 100), Some(vec![1, 2]));
}

#[test]
fn test_petrick_prefers_cheaper_product() {
    // Both {0} and {1} cover everything; 1 is cheaper.
    let m = matrix(&[&[0, 1], &[0, 1]], 2, &[3, 2]);
    assert_eq!(petrick(&m, &[0, 1], 100), Some(vec![1]));
}

#[test]
fn test_petrick_limit_falls_back_to_greedy() {
    let m = matrix(&TRAP, 6, &[1; 5]);
    let targets: Vec<usize> = (0..6).collect();
    assert_eq!(petrick(&m, &targets, 1), None);

    let mut cfg = config();
    cfg.petrick_limit = 1;
    let selection = solve(&m, Strategy::Petrick, &cfg).unwrap();
    // greedy A, B, C, then the irredundant pass removes A
    assert_eq!(selection.chosen, vec![1, 2]);
}

#[test]
fn test_petrick_stops_inside_a_multiplication_step() {
    // Two disjoint targets with three coverers each: the second step would
    // produce nine products, the limit is hit on the fifth.
    let m = matrix(&[&[0], &[0], &[0], &[1], &[1], &[1]], 2, &[1; 6]);
    assert_eq!(petrick(&m, &[0, 1], 4), None);
    assert_eq!(petrick(&m, &[0, 1], 9).map(|p| p.len()), Some(2));
}

#[test]
fn test_uncoverable_target() {
    let m = matrix(&[&[0]], 2, &[1]);
    let err = solve(&m, Strategy::Greedy(TieBreak::CoverageFirst), &config()).unwrap_err();
    assert_eq!(err, MinimizeError::IncompleteCover { uncovered: 1 });
}

#[test]
fn test_no_targets() {
    let m = matrix(&[&[]], 0, &[1]);
    let selection = solve(&m, Strategy::Petrick, &config()).unwrap();
    assert!(selection.chosen.is_empty());
}
