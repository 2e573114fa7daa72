//! Quiz core: the country pool, game constants and the session state machine.
//!
//! Nothing in here knows about the terminal. The front end drives a
//! [`session::QuizSession`] through its operations and reads its state back
//! for display.

pub mod session;

/// A country identifier as shown to the player.
pub type Country = &'static str;

/// The fixed pool every game draws from, in display order.
pub const COUNTRIES: [Country; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Spain", "UK",
    "Ukraine", "US",
];

/// Flags offered per round.
pub const CHOICES: usize = 3;

/// Rounds in one game. Advancing past the last one finishes the game.
pub const ROUNDS_PER_GAME: u32 = 8;

/// Points awarded for a correct pick.
pub const POINTS_PER_CORRECT: u32 = 10;

const _: () = assert!(COUNTRIES.len() >= CHOICES);
