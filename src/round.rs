//! Round/turn state machine and phrase masking.
//!
//! # State Machine
//! - `WaitingToStart` → `RoundStarted` on `start_round`
//! - `RoundStarted` → `WaitingForUserInput` on `begin_turn`
//! - `WaitingForUserInput` → `GuessingLetter` (spin) or `Solving` (solve)
//! - `GuessingLetter` / `Solving` → `GameOver` once the phrase is solved,
//!   otherwise back to `WaitingForUserInput`
//!
//! The engine never renders anything. Every operation returns a value the
//! presentation layer turns into messages.

use crate::debug_log;
use crate::game_state::PuzzleView;
use crate::phrase::PhraseGenerator;
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use thiserror::Error;

pub const PLACEHOLDER: char = '-';

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    WaitingToStart,
    RoundStarted,
    WaitingForUserInput,
    GuessingLetter,
    Solving,
    /// Handled by the game loop by starting a fresh round.
    RoundOver,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Spin,
    Solve,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuessOutcome {
    /// The letter was revealed at this many positions.
    Hit(usize),
    Miss,
    Solved,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolveOutcome {
    Solved,
    Incorrect,
}

/// Recoverable player mistakes. None of these end the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("Invalid entry, must be a valid alphabetical character.")]
    InvalidGuess,
    #[error("The letter '{0}' has already been guessed.")]
    DuplicateGuess(char),
    #[error("Sorry, but there is no puzzle to solve.")]
    NoActivePuzzle,
    #[error("Invalid entry, resetting.")]
    InvalidAction(String),
}

/// The uppercase letter a guess stands for. Only the first character counts.
pub fn letter_of(input: &str) -> Option<char> {
    input
        .chars()
        .next()
        .filter(|c| c.is_alphabetic())
        .map(upper_char)
}

// One-to-one case mapping: characters whose uppercase form is longer ('ß') stay as they are
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Owns all state for the current round.
#[derive(Debug)]
pub struct RoundEngine<R = StdRng> {
    generator: PhraseGenerator<R>,
    challenge: String,
    masked: Vec<char>,
    guessed: BTreeSet<char>,
    state: State,
}

impl<R: Rng> RoundEngine<R> {
    pub fn new(generator: PhraseGenerator<R>) -> Self {
        Self {
            generator,
            challenge: String::new(),
            masked: Vec::new(),
            guessed: BTreeSet::new(),
            state: State::WaitingToStart,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn challenge_phrase(&self) -> &str {
        &self.challenge
    }

    pub fn masked_phrase(&self) -> String {
        self.masked.iter().collect()
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// A round has started and is not yet solved.
    pub fn has_active_puzzle(&self) -> bool {
        !self.challenge.is_empty() && self.state != State::GameOver
    }

    fn ensure_active(&self) -> Result<(), RoundError> {
        if self.has_active_puzzle() {
            Ok(())
        } else {
            Err(RoundError::NoActivePuzzle)
        }
    }

    /// Snapshot of what the player is allowed to see.
    pub fn view(&self) -> PuzzleView {
        PuzzleView {
            masked: self.masked_phrase(),
            guessed: self.guessed.iter().copied().collect(),
            hidden: self.hidden_count(),
        }
    }

    /// Draw a fresh phrase and reset the mask and guess history.
    pub fn start_round(&mut self) {
        let phrase = self.generator.generate_challenge();
        self.start_round_with(&phrase);
    }

    /// Start a round on a known phrase. The phrase is uppercased.
    pub fn start_round_with(&mut self, phrase: &str) {
        self.challenge = phrase.chars().map(upper_char).collect();
        self.masked = self
            .challenge
            .chars()
            .map(|c| if c == ' ' { ' ' } else { PLACEHOLDER })
            .collect();
        self.guessed.clear();
        self.state = State::RoundStarted;
        debug_log!("start_round() - {} characters to reveal", self.hidden_count());
    }

    pub fn begin_turn(&mut self) {
        if matches!(self.state, State::RoundStarted | State::WaitingForUserInput) {
            self.state = State::WaitingForUserInput;
        }
    }

    /// Interpret the top-level menu choice.
    ///
    /// # Errors
    /// `NoActivePuzzle` before a round starts or after it is solved; the state
    /// is left as it was. `InvalidAction` for anything other than `1`/`spin`
    /// or `2`/`solve`.
    pub fn choose_action(&mut self, input: &str) -> Result<Action, RoundError> {
        self.ensure_active()?;
        let action = match input.trim().to_ascii_lowercase().as_str() {
            "1" | "spin" => Action::Spin,
            "2" | "solve" => Action::Solve,
            _ => {
                self.state = State::WaitingForUserInput;
                return Err(RoundError::InvalidAction(input.to_string()));
            }
        };
        self.state = match action {
            Action::Spin => State::GuessingLetter,
            Action::Solve => State::Solving,
        };
        debug_log!("choose_action() - {:?}", action);
        Ok(action)
    }

    /// Guess a single letter. Only the first character of `input` counts.
    ///
    /// # Errors
    /// `InvalidGuess` for empty input or a non-letter first character,
    /// `DuplicateGuess` if the letter was already tried this round,
    /// `NoActivePuzzle` before a round starts or after it is solved.
    pub fn guess_letter(&mut self, input: &str) -> Result<GuessOutcome, RoundError> {
        self.ensure_active()?;
        let result = self.apply_letter(input);
        self.state = match result {
            Ok(GuessOutcome::Solved) => State::GameOver,
            _ => State::WaitingForUserInput,
        };
        debug_log!("guess_letter({:?}) - {:?}", input, result);
        result
    }

    fn apply_letter(&mut self, input: &str) -> Result<GuessOutcome, RoundError> {
        let letter = letter_of(input).ok_or(RoundError::InvalidGuess)?;

        if !self.guessed.insert(letter) {
            return Err(RoundError::DuplicateGuess(letter));
        }

        let mut hits = 0;
        for (slot, c) in self.masked.iter_mut().zip(self.challenge.chars()) {
            if c == letter {
                *slot = c;
                hits += 1;
            }
        }

        Ok(if self.is_revealed() {
            GuessOutcome::Solved
        } else if hits == 0 {
            GuessOutcome::Miss
        } else {
            GuessOutcome::Hit(hits)
        })
    }

    /// Guess the whole phrase, ignoring ASCII letter case.
    ///
    /// # Errors
    /// `NoActivePuzzle` before a round starts or after it is solved.
    pub fn solve_attempt(&mut self, guess: &str) -> Result<SolveOutcome, RoundError> {
        self.ensure_active()?;

        if guess.eq_ignore_ascii_case(&self.challenge) {
            self.masked = self.challenge.chars().collect();
            self.state = State::GameOver;
            debug_log!("solve_attempt() - solved");
            Ok(SolveOutcome::Solved)
        } else {
            self.state = State::WaitingForUserInput;
            debug_log!("solve_attempt() - incorrect");
            Ok(SolveOutcome::Incorrect)
        }
    }

    fn is_revealed(&self) -> bool {
        self.masked.iter().copied().eq(self.challenge.chars())
    }

    fn hidden_count(&self) -> usize {
        self.masked.iter().filter(|&&c| c == PLACEHOLDER).count()
    }
}
