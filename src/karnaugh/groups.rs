//! Rectangular groups on a Karnaugh map
//!
//! A group is a toroidally wrapping rectangle of target cells with power-of-two
//! sides whose cells form a single subcube, so it corresponds to exactly one
//! implicant. [`find_groups`] enumerates the maximal ones and [`select_groups`]
//! picks a cover with the shared set cover solver.

use super::KarnaughMap;
use crate::cover::{self, CoverageMatrix, Strategy, TieBreak};
use crate::error::Result;
use crate::term::Term;
use crate::MinimizerConfig;
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// A rectangular block of target cells and the implicant it stands for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    anchor: (usize, usize),
    height: usize,
    width: usize,
    cells: BTreeSet<(usize, usize)>,
    term: Term,
}

impl Group {
    /// Top-left cell of the rectangle (before wrapping)
    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    /// Height and width
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Cells in the group
    pub fn cells(&self) -> &BTreeSet<(usize, usize)> {
        &self.cells
    }

    /// Number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The implicant: variables shared by all cells are fixed, others don't-care
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Check if the group contains a cell
    pub fn contains(&self, cell: &(usize, usize)) -> bool {
        self.cells.contains(cell)
    }
}

fn powers_of_two(limit: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(1usize), |&p| Some(p * 2)).take_while(move |&p| p <= limit)
}

/// The term fixing exactly the variables on which all cells agree
fn common_term(map: &KarnaughMap, cells: &BTreeSet<(usize, usize)>) -> Term {
    let mut iter = cells.iter().map(|&(r, c)| map.assignment(r, c));
    let Some(first) = iter.next() else {
        return Term::new(Vec::new());
    };
    let mut bits = first.bits().to_vec();
    for term in iter {
        for (bit, other) in bits.iter_mut().zip(term.bits()) {
            if *bit != *other {
                *bit = None;
            }
        }
    }
    Term::new(bits)
}

/// Enumerate every maximal group of target cells
///
/// Every anchor and every power-of-two height and width is tried, wrapping
/// around the edges. Rectangles that contain a non-target cell, or whose cells
/// do not form one subcube, are rejected. Duplicates (full-width or full-height
/// rectangles reached from different anchors) are merged, and rectangles that
/// are strict subsets of another are discarded. The result is ordered by
/// number of fixed variables, then anchor.
pub fn find_groups(map: &KarnaughMap) -> Vec<Group> {
    let (rows, cols) = (map.rows(), map.cols());
    let num_vars = map.variables().len();
    let mut seen: HashSet<Vec<(usize, usize)>> = HashSet::new();
    let mut groups = Vec::new();

    for height in powers_of_two(rows) {
        for width in powers_of_two(cols) {
            for r in 0..rows {
                for c in 0..cols {
                    let cells: BTreeSet<(usize, usize)> = (0..height)
                        .flat_map(|i| (0..width).map(move |j| ((r + i) % rows, (c + j) % cols)))
                        .collect();
                    if !cells.iter().all(|&(cr, cc)| map.cell(cr, cc)) {
                        continue;
                    }
                    let term = common_term(map, &cells);
                    if cells.len() != 1 << (num_vars - term.fixed_count()) {
                        continue;
                    }
                    if !seen.insert(cells.iter().copied().collect()) {
                        continue;
                    }
                    groups.push(Group {
                        anchor: (r, c),
                        height,
                        width,
                        cells,
                        term,
                    });
                }
            }
        }
    }

    let mut maximal: Vec<Group> = groups
        .iter()
        .filter(|g| {
            !groups
                .iter()
                .any(|other| other.size() > g.size() && g.cells.is_subset(&other.cells))
        })
        .cloned()
        .collect();
    maximal.sort_by_key(|g| (g.term.fixed_count(), g.anchor));
    debug!(
        "Karnaugh grouping: {} rectangle(s), {} maximal",
        groups.len(),
        maximal.len()
    );
    maximal
}

/// Select a cover of all target cells from the maximal groups
///
/// Essential groups come first; the remaining cells are covered preferring
/// groups with fewer fixed variables, then groups covering more new cells.
pub fn select_groups(map: &KarnaughMap, config: &MinimizerConfig) -> Result<Vec<Group>> {
    let targets = map.target_cells();
    if targets.is_empty() {
        return Ok(Vec::new());
    }
    let candidates = find_groups(map);
    let matrix = CoverageMatrix::build(
        &candidates,
        &targets,
        |group, cell| group.contains(cell),
        |group| group.term().fixed_count(),
    );
    let selection = cover::solve(
        &matrix,
        Strategy::Greedy(TieBreak::GeneralityFirst),
        config,
    )?;
    Ok(selection
        .chosen
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect())
}
