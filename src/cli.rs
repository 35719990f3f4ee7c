use crate::debug_log;
use crate::game_state::{GameInterface, PuzzleView};
use crate::round::{GuessOutcome, RoundError, SolveOutcome};
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Phrase wheel options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Seed for phrase selection; random when omitted
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Pause between the dots of the spinning animation, in milliseconds
    #[arg(long = "delay-ms", default_value_t = 250)]
    pub delay_ms: u64,
}

impl Cli {
    #[must_use]
    pub fn spin_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const LOGO: [&str; 12] = [
    r" _       _ _                 __       _____   ___",
    r"( )  _  ( ) )               (  )     (  _  )/ ___)",
    r"| | ( ) | | |__    __    __  | |     | ( ) | (__",
    r"| | | | | |  _  \/ __ \/ __ \| |     | | | |  __)",
    r"| (_/ \_) | | | |  ___/  ___/| |     | (_) | |",
    r" \__/\___/(_) (_)\____)\____)___)    (_____)_)",
    r"      ___              _",
    r"     (  _ \           ( )_",
    r"     | (_(_)  _   _ __|  _)_   _  ___    __",
    r"     |  _)  / _ \(  __) | ( ) ( )  _  \/ __ \",
    r"     | |   ( (_) ) |  | |_| (_) | ( ) |  ___/",
    r"     (_)    \___/(_)   \__)\___/(_) (_)\____)",
];

pub const ACTION_PROMPT: &str = "Press 1 to spin or 2 to solve: ";
pub const SPIN_MESSAGE: &str = "Spinning the wheel .";
pub const SPIN_EXTRA_DOTS: usize = 4;
pub const LETTER_PROMPT: &str = "Please guess a letter: ";
pub const SOLUTION_PROMPT: &str = "Please enter your solution: ";
pub const VICTORY_MESSAGE: &str = "Congratulations, you've solved the puzzle!!";

// Message shown for a guess that did not finish the puzzle.
#[must_use]
pub fn guess_outcome_message(letter: char, outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Hit(count) => {
            format!("Great job, '{letter}' is in the phrase {count} time(s).")
        }
        GuessOutcome::Miss => format!("Hard luck, '{letter}' is not in the phrase."),
        GuessOutcome::Solved => format!("'{letter}' completes the phrase!"),
    }
}

#[must_use]
pub fn solve_outcome_message(outcome: SolveOutcome) -> &'static str {
    match outcome {
        SolveOutcome::Solved => VICTORY_MESSAGE,
        SolveOutcome::Incorrect => "Sorry, but that is incorrect.",
    }
}

#[must_use]
pub fn guessed_letters_line(guessed: &[char]) -> String {
    if guessed.is_empty() {
        return "Guessed letters: none".to_string();
    }
    let letters: Vec<String> = guessed.iter().map(char::to_string).collect();
    format!("Guessed letters: {}", letters.join(", "))
}

#[must_use]
pub fn hidden_letters_line(hidden: usize) -> String {
    format!("Letters left to find: {hidden}")
}

/// Line-oriented console frontend.
///
/// Reads one line per prompt from `reader` and writes plain text with ANSI
/// colours to `writer`.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    spin_delay: Duration,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W, spin_delay: Duration) -> Self {
        Self {
            reader,
            writer,
            spin_delay,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Option<String> {
        if let Err(e) = self.writer.flush() {
            debug_log!("read_line() - flush failed: {}", e);
        }
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                debug_log!("read_line() - read failed: {}", e);
                None
            }
        }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = write!(self.writer, "{text}") {
            debug_log!("write() - {}", e);
        }
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            debug_log!("write_line() - {}", e);
        }
    }

    fn blank_line(&mut self) {
        self.write_line("");
    }

    fn write_colored(&mut self, color: Color, text: &str) {
        if let Err(e) = queue!(self.writer, SetForegroundColor(color)) {
            debug_log!("write_colored() - {}", e);
        }
        self.write(text);
        if let Err(e) = queue!(self.writer, ResetColor) {
            debug_log!("write_colored() - {}", e);
        }
    }

    fn clear(&mut self) {
        if let Err(e) = queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0)) {
            debug_log!("clear() - {}", e);
        }
    }

    fn show_logo(&mut self) {
        for line in LOGO {
            self.write_line(line);
        }
    }

    fn show_message(&mut self, color: Color, message: &str) {
        self.blank_line();
        self.write_colored(color, message);
        self.write(" Press Enter to continue . . .");
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn show_welcome(&mut self) {
        self.clear();
        self.blank_line();
        self.write_line("Welcome to . . .");
        self.blank_line();
        self.show_logo();
        self.blank_line();
        self.blank_line();
        self.write("Press Enter to start . . .");
    }

    fn show_puzzle(&mut self, view: &PuzzleView) {
        self.clear();
        self.show_logo();
        self.blank_line();
        self.write_line("The puzzle is:");
        self.blank_line();
        self.write_line(&view.masked);
        self.blank_line();
        self.write_line(&guessed_letters_line(&view.guessed));
        self.write_line(&hidden_letters_line(view.hidden));
        self.blank_line();
    }

    fn read_action(&mut self) -> Option<String> {
        self.write(ACTION_PROMPT);
        self.read_line()
    }

    fn show_spinning(&mut self) {
        self.write_colored(Color::Magenta, SPIN_MESSAGE);
        for _ in 0..SPIN_EXTRA_DOTS {
            if let Err(e) = self.writer.flush() {
                debug_log!("show_spinning() - {}", e);
            }
            if !self.spin_delay.is_zero() {
                thread::sleep(self.spin_delay);
            }
            self.write_colored(Color::Magenta, " .");
        }
        self.blank_line();
    }

    fn read_letter(&mut self) -> Option<String> {
        self.write(LETTER_PROMPT);
        self.read_line()
    }

    fn read_solution(&mut self) -> Option<String> {
        self.write(SOLUTION_PROMPT);
        self.read_line()
    }

    fn show_guess_outcome(&mut self, letter: char, outcome: GuessOutcome, view: &PuzzleView) {
        self.write_line(&view.masked);
        let color = match outcome {
            GuessOutcome::Miss => Color::Red,
            GuessOutcome::Hit(_) | GuessOutcome::Solved => Color::Green,
        };
        self.show_message(color, &guess_outcome_message(letter, outcome));
    }

    fn show_solve_outcome(&mut self, outcome: SolveOutcome, _view: &PuzzleView) {
        let color = match outcome {
            SolveOutcome::Solved => Color::Green,
            SolveOutcome::Incorrect => Color::Red,
        };
        self.show_message(color, solve_outcome_message(outcome));
    }

    fn show_error(&mut self, error: &RoundError) {
        let color = match error {
            RoundError::NoActivePuzzle => Color::Red,
            _ => Color::DarkYellow,
        };
        self.show_message(color, &error.to_string());
    }

    fn acknowledge(&mut self) -> Option<String> {
        self.read_line()
    }

    fn show_victory(&mut self, phrase: &str) {
        self.blank_line();
        self.write_line(phrase);
        self.blank_line();
        self.write_colored(Color::Green, VICTORY_MESSAGE);
        self.write(" Press Enter to exit the game . . .");
    }

    fn show_exit(&mut self) {
        self.blank_line();
        self.write_line("Goodbye.");
        if let Err(e) = self.writer.flush() {
            debug_log!("show_exit() - {}", e);
        }
    }
}
