use crate::choice::Choice;
use crate::error::GameError;

/// Result of a round from the point of view of party A
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    PartyAWins,
    PartyBWins,
    Tie,
}

impl Outcome {
    pub fn invert(&self) -> Self {
        match self {
            Self::PartyAWins => Self::PartyBWins,
            Self::PartyBWins => Self::PartyAWins,
            _ => Self::Tie,
        }
    }
}

pub fn resolve(a: Choice, b: Choice) -> Outcome {
    a.attack(b)
}

/// Parses both names before comparing, so an out-of-set name never
/// produces an outcome.
pub fn resolve_names(a: &str, b: &str) -> Result<Outcome, GameError> {
    let a: Choice = a.parse()?;
    let b: Choice = b.parse()?;
    Ok(resolve(a, b))
}
