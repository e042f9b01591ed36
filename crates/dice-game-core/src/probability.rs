//! Pairwise win probabilities between dice.

use crate::dice::Die;

/// Probability that `a` strictly beats `b` over all face pairs.
///
/// Ties count for neither side, so `win_probability(a, b) +
/// win_probability(b, a)` can fall short of 1. O(n^2) in the face
/// count, which stays in the tens.
pub fn win_probability(a: &Die, b: &Die) -> f64 {
    let wins = a
        .faces()
        .iter()
        .map(|x| b.faces().iter().filter(|y| x > y).count())
        .sum::<usize>();
    wins as f64 / (a.len() * b.len()) as f64
}

/// Full pairwise matrix over the pool, rows and columns in input order.
///
/// Advisory only: rendered for the user before selection, never
/// consulted by the fairness protocol.
pub fn probability_matrix(dice: &[Die]) -> Vec<Vec<f64>> {
    dice.iter()
        .map(|a| dice.iter().map(|b| win_probability(a, b)).collect())
        .collect()
}
