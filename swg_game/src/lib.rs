//! ## Game
//! Rules for Snake, Water & Gun.
//! ### Modules
//! - Choice (the three options and the cyclic dominance table)
//! - Outcome (resolving a pair of choices)
//! - Round (a single play and the running score)
//!
//! ### Example
//! ```
//! use swg_game::{resolve, Choice, Outcome};
//!
//! assert_eq!(resolve(Choice::Snake, Choice::Water), Outcome::PartyAWins);
//! ```
mod choice;
mod error;
mod outcome;
mod round;

pub use choice::Choice;
pub use error::GameError;
pub use outcome::{resolve, resolve_names, Outcome};
pub use round::{Round, Score};
