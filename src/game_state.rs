use crate::info_log;
use crate::round::{
    Action, GuessOutcome, RoundEngine, RoundError, SolveOutcome, State, letter_of,
};
use rand::Rng;

/// What the player is allowed to see of the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PuzzleView {
    pub masked: String,
    /// Letters tried so far, alphabetical.
    pub guessed: Vec<char>,
    /// Letters still covered by the placeholder.
    pub hidden: usize,
}

/// Presentation seam between the game loop and a concrete frontend.
///
/// Reads return `None` when no more input is available (end of stream or the
/// player quitting); the loop then exits cleanly. Display methods never fail:
/// frontends log their own rendering errors.
pub trait GameInterface {
    fn show_welcome(&mut self);
    fn show_puzzle(&mut self, view: &PuzzleView);
    fn read_action(&mut self) -> Option<String>;
    fn show_spinning(&mut self);
    fn read_letter(&mut self) -> Option<String>;
    fn read_solution(&mut self) -> Option<String>;
    fn show_guess_outcome(&mut self, letter: char, outcome: GuessOutcome, view: &PuzzleView);
    fn show_solve_outcome(&mut self, outcome: SolveOutcome, view: &PuzzleView);
    fn show_error(&mut self, error: &RoundError);
    /// Wait for the player to dismiss the last message.
    fn acknowledge(&mut self) -> Option<String>;
    fn show_victory(&mut self, phrase: &str);
    fn show_exit(&mut self);
}

impl<T: GameInterface + ?Sized> GameInterface for &mut T {
    fn show_welcome(&mut self) {
        (**self).show_welcome();
    }
    fn show_puzzle(&mut self, view: &PuzzleView) {
        (**self).show_puzzle(view);
    }
    fn read_action(&mut self) -> Option<String> {
        (**self).read_action()
    }
    fn show_spinning(&mut self) {
        (**self).show_spinning();
    }
    fn read_letter(&mut self) -> Option<String> {
        (**self).read_letter()
    }
    fn read_solution(&mut self) -> Option<String> {
        (**self).read_solution()
    }
    fn show_guess_outcome(&mut self, letter: char, outcome: GuessOutcome, view: &PuzzleView) {
        (**self).show_guess_outcome(letter, outcome, view);
    }
    fn show_solve_outcome(&mut self, outcome: SolveOutcome, view: &PuzzleView) {
        (**self).show_solve_outcome(outcome, view);
    }
    fn show_error(&mut self, error: &RoundError) {
        (**self).show_error(error);
    }
    fn acknowledge(&mut self) -> Option<String> {
        (**self).acknowledge()
    }
    fn show_victory(&mut self, phrase: &str) {
        (**self).show_victory(phrase);
    }
    fn show_exit(&mut self) {
        (**self).show_exit();
    }
}

enum TurnResult {
    Continue,
    Quit,
}

/// Run the welcome sequence and one round to completion.
///
/// Returns the engine state at exit: `GameOver` when the phrase was solved,
/// anything else when input ran out first.
pub fn game_loop<R: Rng, I: GameInterface>(engine: &mut RoundEngine<R>, mut ui: I) -> State {
    ui.show_welcome();
    if ui.acknowledge().is_none() {
        ui.show_exit();
        return engine.state();
    }
    engine.start_round();
    info_log!("game_loop() - round started");

    loop {
        match engine.state() {
            State::RoundOver => {
                engine.start_round();
                continue;
            }
            State::GameOver => {
                ui.show_victory(engine.challenge_phrase());
                let _ = ui.acknowledge();
                break;
            }
            _ => {}
        }

        if let TurnResult::Quit = perform_turn(engine, &mut ui) {
            info_log!("game_loop() - input closed, exiting");
            ui.show_exit();
            break;
        }
    }
    engine.state()
}

fn perform_turn<R: Rng, I: GameInterface>(engine: &mut RoundEngine<R>, ui: &mut I) -> TurnResult {
    engine.begin_turn();
    ui.show_puzzle(&engine.view());

    let Some(input) = ui.read_action() else {
        return TurnResult::Quit;
    };

    match engine.choose_action(&input) {
        Ok(Action::Spin) => spin(engine, ui),
        Ok(Action::Solve) => solve(engine, ui),
        Err(e) => report(ui, &e),
    }
}

fn spin<R: Rng, I: GameInterface>(engine: &mut RoundEngine<R>, ui: &mut I) -> TurnResult {
    ui.show_spinning();
    let Some(input) = ui.read_letter() else {
        return TurnResult::Quit;
    };

    match engine.guess_letter(&input) {
        Ok(GuessOutcome::Solved) => TurnResult::Continue,
        Ok(outcome) => {
            if let Some(letter) = letter_of(&input) {
                ui.show_guess_outcome(letter, outcome, &engine.view());
            }
            acknowledge(ui)
        }
        Err(e) => report(ui, &e),
    }
}

fn solve<R: Rng, I: GameInterface>(engine: &mut RoundEngine<R>, ui: &mut I) -> TurnResult {
    if !engine.has_active_puzzle() {
        return report(ui, &RoundError::NoActivePuzzle);
    }
    let Some(guess) = ui.read_solution() else {
        return TurnResult::Quit;
    };

    match engine.solve_attempt(&guess) {
        Ok(SolveOutcome::Solved) => TurnResult::Continue,
        Ok(outcome) => {
            ui.show_solve_outcome(outcome, &engine.view());
            acknowledge(ui)
        }
        Err(e) => report(ui, &e),
    }
}

fn report<I: GameInterface>(ui: &mut I, error: &RoundError) -> TurnResult {
    ui.show_error(error);
    acknowledge(ui)
}

fn acknowledge<I: GameInterface>(ui: &mut I) -> TurnResult {
    match ui.acknowledge() {
        Some(_) => TurnResult::Continue,
        None => TurnResult::Quit,
    }
}
