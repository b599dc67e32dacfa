//! Ternary term algebra
//!
//! This module provides the value types every minimization pipeline is built on:
//! - [`Variables`]: the fixed, ordered variable set; position = bit position
//! - [`Literal`]: a `(variable, value)` pair
//! - [`Term`]: a positional ternary vector over `{0, 1, don't-care}`
//!
//! A term's textual form is a ternary string such as `"01-"`, where `-` marks a
//! don't-care position. Terms are immutable: combining two terms returns a new one.

use crate::error::{MinimizeError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The character used for don't-care positions in ternary strings
pub const WILDCARD: char = '-';

/// An ordered set of variable names
///
/// The order fixes the bit position of every variable in every encoding, so the
/// same `Variables` value must be shared by all pipelines of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variables {
    /// Ordered names by position
    names: Vec<Arc<str>>,
    /// Fast lookup: name -> position
    index: HashMap<Arc<str>, usize>,
}

impl Variables {
    /// Create a variable order from a list of names
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_minimizer::Variables;
    ///
    /// let vars = Variables::new(&["a", "b", "c"]).unwrap();
    /// assert_eq!(vars.len(), 3);
    /// assert_eq!(vars.position("b"), Some(1));
    /// ```
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut ordered = Vec::with_capacity(names.len());
        let mut index = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            let name: Arc<str> = Arc::from(name.as_ref());
            if index.insert(Arc::clone(&name), position).is_some() {
                return Err(MinimizeError::DuplicateVariable { name });
            }
            ordered.push(name);
        }
        Ok(Variables {
            names: ordered,
            index,
        })
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there are no variables
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at position
    pub fn get(&self, position: usize) -> Option<&Arc<str>> {
        self.names.get(position)
    }

    /// Position of a variable name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Names in order
    pub fn as_slice(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Iterate over names in order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<str>> {
        self.names.iter()
    }
}

/// A variable together with the value it is fixed to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Variable name
    pub variable: Arc<str>,
    /// Value of the variable inside the term
    pub value: bool,
}

impl Literal {
    /// Create a literal
    pub fn new(variable: &str, value: bool) -> Self {
        Literal {
            variable: Arc::from(variable),
            value,
        }
    }
}

/// A positional ternary term
///
/// Each position is `Some(false)` (0), `Some(true)` (1) or `None` (don't-care).
/// A term without don't-cares is a minterm (or maxterm, depending on the target
/// form); a term with don't-cares is an implicant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    bits: Arc<[Option<bool>]>,
}

impl Term {
    /// Create a term from its positional values
    pub fn new(bits: Vec<Option<bool>>) -> Self {
        Term { bits: bits.into() }
    }

    /// Create a fully specified term from an assignment
    pub fn minterm(assignment: &[bool]) -> Self {
        Term {
            bits: assignment.iter().map(|&b| Some(b)).collect(),
        }
    }

    /// Create the fully specified term for a canonical row index
    ///
    /// Variable 0 is the most significant bit.
    pub fn from_index(index: usize, num_vars: usize) -> Self {
        Term {
            bits: (0..num_vars)
                .map(|i| Some((index >> (num_vars - 1 - i)) & 1 == 1))
                .collect(),
        }
    }

    /// Build a term from literals, leaving unmentioned variables as don't-care
    pub fn from_literals(literals: &[Literal], variables: &Variables) -> Result<Self> {
        let mut bits = vec![None; variables.len()];
        for literal in literals {
            let position = variables.position(&literal.variable).ok_or_else(|| {
                MinimizeError::UnknownVariable {
                    name: Arc::clone(&literal.variable),
                }
            })?;
            match bits[position] {
                Some(existing) if existing != literal.value => {
                    let encoding = Term::new(bits).to_string();
                    return Err(MinimizeError::DuplicateEncodingConflict { encoding });
                }
                _ => bits[position] = Some(literal.value),
            }
        }
        Ok(Term::new(bits))
    }

    /// The literals fixed by this term, in variable order
    ///
    /// # Panics
    ///
    /// Panics if `variables` is shorter than the term.
    pub fn literals(&self, variables: &Variables) -> Vec<Literal> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, bit)| {
                bit.map(|value| Literal {
                    variable: Arc::clone(&variables.as_slice()[i]),
                    value,
                })
            })
            .collect()
    }

    /// Positional values
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the term has no positions
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Value at a position
    pub fn get(&self, position: usize) -> Option<bool> {
        self.bits.get(position).copied().flatten()
    }

    /// Number of specified (non-don't-care) positions
    pub fn fixed_count(&self) -> usize {
        self.bits.iter().filter(|b| b.is_some()).count()
    }

    /// Check if every position is don't-care
    pub fn is_tautology(&self) -> bool {
        self.bits.iter().all(|b| b.is_none())
    }

    /// Check if every position is specified
    pub fn is_minterm(&self) -> bool {
        self.bits.iter().all(|b| b.is_some())
    }

    /// Check if this implicant covers `minterm`
    ///
    /// True iff every position fixed here is fixed to the same value in `minterm`.
    /// This is the one coverage predicate shared by all pipelines.
    ///
    /// ```
    /// use logic_minimizer::Term;
    ///
    /// let implicant: Term = "0-1".parse().unwrap();
    /// assert!(implicant.covers(&"011".parse().unwrap()));
    /// assert!(!implicant.covers(&"010".parse().unwrap()));
    /// ```
    pub fn covers(&self, minterm: &Term) -> bool {
        self.bits.len() == minterm.bits.len()
            && self
                .bits
                .iter()
                .zip(minterm.bits.iter())
                .all(|(mine, theirs)| mine.is_none() || mine == theirs)
    }

    /// Check if a full assignment satisfies this term
    pub fn matches(&self, assignment: &[bool]) -> bool {
        self.bits.len() == assignment.len()
            && self
                .bits
                .iter()
                .zip(assignment)
                .all(|(bit, &value)| bit.map_or(true, |b| b == value))
    }

    /// Find the single position at which two terms can be merged
    ///
    /// Returns `Some(position)` iff the terms agree everywhere except one position
    /// where both are specified and differ. A don't-care in only one of the two
    /// terms at any position makes them not combinable: they span differently
    /// sized sets of minterms.
    pub fn combinable(&self, other: &Term) -> Option<usize> {
        if self.bits.len() != other.bits.len() {
            return None;
        }
        let mut difference = None;
        for (i, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if a == b {
                continue;
            }
            if a.is_none() || b.is_none() || difference.is_some() {
                return None;
            }
            difference = Some(i);
        }
        difference
    }

    /// Copy of this term with `position` widened to don't-care
    pub fn combine(&self, position: usize) -> Term {
        let mut bits = self.bits.to_vec();
        bits[position] = None;
        Term::new(bits)
    }
}

impl From<Vec<Option<bool>>> for Term {
    fn from(bits: Vec<Option<bool>>) -> Self {
        Term::new(bits)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            let c = match bit {
                Some(false) => '0',
                Some(true) => '1',
                None => WILDCARD,
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Term {
    type Err = MinimizeError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                WILDCARD => Ok(None),
                _ => Err(MinimizeError::InvalidTernary {
                    character,
                    position,
                }),
            })
            .collect::<Result<Vec<_>>>()
            .map(Term::new)
    }
}

/// Encode literals as a ternary string over `variables`
///
/// # Examples
///
/// ```
/// use logic_minimizer::{encode, Literal, Variables};
///
/// let vars = Variables::new(&["a", "b", "c"]).unwrap();
/// let term = [Literal::new("a", false), Literal::new("b", true)];
/// assert_eq!(encode(&term, &vars).unwrap(), "01-");
/// ```
pub fn encode(literals: &[Literal], variables: &Variables) -> Result<String> {
    Term::from_literals(literals, variables).map(|term| term.to_string())
}

/// Decode a ternary string into the literals it fixes
///
/// Don't-care positions are omitted from the result.
pub fn decode(ternary: &str, variables: &Variables) -> Result<Vec<Literal>> {
    let term: Term = ternary.parse()?;
    if term.len() != variables.len() {
        return Err(MinimizeError::LengthMismatch {
            expected: variables.len(),
            actual: term.len(),
        });
    }
    Ok(term.literals(variables))
}
