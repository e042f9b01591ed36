//! Dice and the shrinking selection pool.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A die: an ordered, fixed-length sequence of positive integer faces.
///
/// Face values are arbitrary positive integers rather than 1..=6, which
/// is what makes non-transitive sets possible. Immutable once built;
/// construction goes through [`crate::validate::parse_dice`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<i64>,
}

impl Die {
    /// Build a die from validated faces.
    pub fn new(faces: Vec<i64>) -> Self {
        debug_assert!(faces.iter().all(|f| *f > 0));
        Self { faces }
    }

    /// All faces, in input order.
    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face value at the given index.
    ///
    /// Panics if `index` is out of bounds; roll indices come from the
    /// fairness protocol with `range = len()`.
    pub fn face(&self, index: usize) -> i64 {
        self.faces[index]
    }
}

impl fmt::Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Die({})", self)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for face in &self.faces {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", face)?;
            first = false;
        }
        Ok(())
    }
}

/// The pool of dice still available for selection.
///
/// Owned by the game for its duration; shrinks by exactly one die per
/// selection and never regrows.
#[derive(Clone, Debug)]
pub struct DicePool {
    dice: Vec<Die>,
}

impl DicePool {
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    /// Dice still available, in input order.
    pub fn remaining(&self) -> &[Die] {
        &self.dice
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Remove and return the die at `index`.
    ///
    /// Panics if `index` is out of bounds; selection indices are
    /// constrained to the remaining pool before they reach here.
    pub fn take(&mut self, index: usize) -> Die {
        self.dice.remove(index)
    }
}
