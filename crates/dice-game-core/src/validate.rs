//! Startup validation of raw die specifications.

use thiserror::Error;

use crate::dice::Die;

/// Minimum number of dice a game needs.
pub const MIN_DICE: usize = 3;

/// Minimum number of faces per die.
pub const MIN_FACES: usize = 6;

/// Rejection reasons for the raw dice input, in report-priority order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all dice must have the same number of faces")]
    MismatchedFaceCounts,

    #[error("every die needs at least {MIN_FACES} faces")]
    TooFewFaces,

    #[error("at least {MIN_DICE} dice are required")]
    TooFewDice,

    #[error("face `{0}` is not an integer")]
    NotAnInteger(String),

    #[error("faces must be positive, got {0}")]
    NonPositiveFace(i64),
}

/// Parse raw die specifications (comma-separated face lists) into dice.
///
/// Checks, in order: equal face counts across dice, per-die face count,
/// dice count, numeric well-formedness, positivity. The first violated
/// rule is reported. On success the dice come back in input order.
pub fn parse_dice(specs: &[String]) -> Result<Vec<Die>, ValidationError> {
    let raw: Vec<Vec<&str>> = specs
        .iter()
        .map(|spec| spec.split(',').collect())
        .collect();

    if let Some(first) = raw.first() {
        if raw.iter().any(|faces| faces.len() != first.len()) {
            return Err(ValidationError::MismatchedFaceCounts);
        }
    }
    if raw.iter().any(|faces| faces.len() < MIN_FACES) {
        return Err(ValidationError::TooFewFaces);
    }
    if raw.len() < MIN_DICE {
        return Err(ValidationError::TooFewDice);
    }

    let mut parsed: Vec<Vec<i64>> = Vec::with_capacity(raw.len());
    for faces in &raw {
        let mut values = Vec::with_capacity(faces.len());
        for token in faces {
            let token = token.trim();
            let value: i64 = token
                .parse()
                .map_err(|_| ValidationError::NotAnInteger(token.to_string()))?;
            values.push(value);
        }
        parsed.push(values);
    }

    if let Some(bad) = parsed.iter().flatten().find(|value| **value <= 0) {
        return Err(ValidationError::NonPositiveFace(*bad));
    }

    Ok(parsed.into_iter().map(Die::new).collect())
}
