use rand::Rng;
use std::fmt;

use crate::choice::Choice;
use crate::outcome::Outcome;

/// A single play. Party A is the player, party B the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

impl Round {
    pub fn new(player: Choice, computer: Choice) -> Self {
        Self {
            player,
            computer,
            outcome: player.attack(computer),
        }
    }

    pub fn play<R: Rng + ?Sized>(player: Choice, rng: &mut R) -> Self {
        Self::new(player, rng.gen())
    }

    pub fn describe(&self) -> String {
        match self.outcome {
            Outcome::PartyAWins => format!(
                "You win! {} {} {}.",
                self.player,
                self.player.verb(),
                self.computer
            ),
            Outcome::PartyBWins => format!(
                "You lose! {} {} {}.",
                self.computer,
                self.computer.verb(),
                self.player
            ),
            Outcome::Tie => format!("It's a tie! Both chose {}.", self.player),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Score {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::PartyAWins => self.wins += 1,
            Outcome::PartyBWins => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "wins: {} | losses: {} | ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn describe_each_outcome() {
        let win = Round::new(Choice::Snake, Choice::Water);
        assert_eq!(win.describe(), "You win! snake drinks water.");

        let loss = Round::new(Choice::Snake, Choice::Gun);
        assert_eq!(loss.describe(), "You lose! gun kills snake.");

        let tie = Round::new(Choice::Water, Choice::Water);
        assert_eq!(tie.describe(), "It's a tie! Both chose water.");
    }

    #[test]
    fn seeded_play_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for choice in Choice::ALL.iter().cycle().take(30) {
            assert_eq!(Round::play(*choice, &mut a), Round::play(*choice, &mut b));
        }
    }

    #[test]
    fn score_tallies_rounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut score = Score::default();
        for choice in Choice::ALL.iter().cycle().take(25) {
            let round = Round::play(*choice, &mut rng);
            score.record(&round.outcome);
        }
        assert_eq!(score.rounds(), 25);
    }

    #[test]
    fn score_display() {
        let mut score = Score::default();
        score.record(&Outcome::PartyAWins);
        score.record(&Outcome::PartyAWins);
        score.record(&Outcome::Tie);
        assert_eq!(score.to_string(), "wins: 2 | losses: 0 | ties: 1");
    }
}
