// Library interface for phrase-wheel
// The binary and the integration tests both drive the game through this crate

pub mod cli;
pub mod game_state;
pub mod logging;
pub mod phrase;
pub mod round;
pub mod tui;

// Re-export commonly used items for easier testing
pub use game_state::{GameInterface, PuzzleView, game_loop};
pub use phrase::PhraseGenerator;
pub use round::{
    Action, GuessOutcome, PLACEHOLDER, RoundEngine, RoundError, SolveOutcome, State, letter_of,
};
