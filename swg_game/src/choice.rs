use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use crate::outcome::Outcome;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Choice {
    Snake,
    Water,
    Gun,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Snake, Choice::Water, Choice::Gun];

    /// The one choice this choice defeats. Each choice appears exactly once
    /// on each side, which closes the table into a single cycle.
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Snake => Choice::Water,
            Choice::Water => Choice::Gun,
            Choice::Gun => Choice::Snake,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Choice::Snake => "drinks",
            Choice::Water => "ruins",
            Choice::Gun => "kills",
        }
    }

    pub fn attack(&self, target: Choice) -> Outcome {
        if *self == target {
            Outcome::Tie
        } else if self.beats() == target {
            Outcome::PartyAWins
        } else {
            Outcome::PartyBWins
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Choice::Snake => "snake",
            Choice::Water => "water",
            Choice::Gun => "gun",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "snake" | "s" => Ok(Choice::Snake),
            "water" | "w" => Ok(Choice::Water),
            "gun" | "g" => Ok(Choice::Gun),
            _ => Err(GameError::InvalidOption(trimmed.to_owned())),
        }
    }
}

impl Distribution<Choice> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("SNAKE".parse::<Choice>(), Ok(Choice::Snake));
        assert_eq!(" Water\n".parse::<Choice>(), Ok(Choice::Water));
        assert_eq!("g".parse::<Choice>(), Ok(Choice::Gun));
        assert_eq!("W".parse::<Choice>(), Ok(Choice::Water));
    }

    #[test]
    fn parse_rejects_unknown() {
        for input in ["rock", "", "snakes", "paper"].iter() {
            let result: Result<Choice, _> = input.parse();
            assert_eq!(result, Err(GameError::InvalidOption(input.to_string())));
        }
    }

    #[test]
    fn dominance_is_single_cycle() {
        for start in Choice::ALL.iter() {
            assert_ne!(start.beats(), *start);
            assert_eq!(start.beats().beats().beats(), *start);
        }

        // Every choice is beaten by exactly one other
        let beaten: HashSet<Choice> = Choice::ALL.iter().map(|x| x.beats()).collect();
        assert_eq!(beaten.len(), Choice::ALL.len());
    }

    #[test]
    fn no_transitive_ordering() {
        // A chain a > b > c would need a to beat c as well
        for a in Choice::ALL.iter() {
            let b = a.beats();
            let c = b.beats();
            assert_eq!(a.attack(c), Outcome::PartyBWins);
        }
    }

    #[test]
    fn random_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Choice> = (0..200).map(|_| rng.gen::<Choice>()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn display_round_trips() {
        for choice in Choice::ALL.iter() {
            assert_eq!(choice.to_string().parse::<Choice>(), Ok(*choice));
        }
    }
}
