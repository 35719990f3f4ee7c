//! TUI (Terminal User Interface) frontend for the phrase wheel
//!
//! This module provides a full-screen alternative to the line-oriented console
//! frontend, built on Ratatui.
//!
//! # Input Modes
//! - `Line`: the player types text, ENTER submits it
//! - `Acknowledge`: any key dismisses the current message
//!
//! ESC in either mode ends the game.

use crate::cli::{
    ACTION_PROMPT, LETTER_PROMPT, SOLUTION_PROMPT, SPIN_EXTRA_DOTS, SPIN_MESSAGE,
    VICTORY_MESSAGE, guess_outcome_message, guessed_letters_line, hidden_letters_line,
    solve_outcome_message,
};
use crate::game_state::{GameInterface, PuzzleView};
use crate::round::{GuessOutcome, RoundError, SolveOutcome};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::thread;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_INPUT_LENGTH: usize = 64;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const PUZZLE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Yellow);
const MISS_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const SPIN_STYLE: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq)]
enum InputMode {
    Line,
    Acknowledge,
}

#[derive(Debug, PartialEq)]
enum KeyResult {
    Pending,
    Submitted(String),
    Quit,
}

/// Full-screen frontend.
///
/// Restores the terminal on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: PuzzleView,
    prompt: &'static str,
    current_input: String,
    mode: InputMode,
    message: String,
    message_style: Style,
    status: String,
    spin_delay: Duration,
}

impl TuiInterface {
    /// Switch the terminal to raw mode and the alternate screen.
    ///
    /// # Errors
    /// Any terminal setup failure.
    pub fn new(spin_delay: Duration) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: PuzzleView::default(),
            prompt: "",
            current_input: String::new(),
            mode: InputMode::Acknowledge,
            message: String::new(),
            message_style: MESSAGE_STYLE,
            status: "Ready to start".to_string(),
            spin_delay,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let view = &self.view;
        let prompt = self.prompt;
        let input = &self.current_input;
        let mode = self.mode;
        let message = Span::styled(self.message.as_str(), self.message_style);
        let status = self.status.as_str();
        self.terminal.draw(|f| {
            render(f, view, prompt, input, mode, message, status);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn set_message(&mut self, message: impl Into<String>, style: Style) {
        self.message = message.into();
        self.message_style = style;
    }

    /// Block until the player submits a line (or any key in acknowledge mode).
    fn read_input(&mut self, mode: InputMode, prompt: &'static str) -> Option<String> {
        self.mode = mode;
        self.prompt = prompt;
        self.current_input.clear();
        loop {
            if self.draw().is_err() {
                info_log!("read_input() - Draw failed, returning Quit");
                return None;
            }
            match Self::poll_key() {
                Ok(Some(key)) => match self.handle_key(key) {
                    KeyResult::Pending => {}
                    KeyResult::Submitted(line) => {
                        self.prompt = "";
                        return Some(line);
                    }
                    KeyResult::Quit => return None,
                },
                Ok(None) => {}
                Err(e) => {
                    debug_log!("read_input() - Input error: {}", e);
                    return None;
                }
            }
        }
    }

    fn poll_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            // Only Press events, Release and Repeat would double the input
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            other => {
                debug_log!("poll_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        apply_key(self.mode, &mut self.current_input, key)
    }
}

/// Applies one key press to the line being edited.
fn apply_key(mode: InputMode, input: &mut String, key: KeyEvent) -> KeyResult {
    if key.code == KeyCode::Esc {
        info_log!("apply_key() - ESC pressed, quitting");
        return KeyResult::Quit;
    }
    if mode == InputMode::Acknowledge {
        return KeyResult::Submitted(String::new());
    }

    match key.code {
        KeyCode::Enter => KeyResult::Submitted(std::mem::take(input)),
        KeyCode::Backspace => {
            input.pop();
            KeyResult::Pending
        }
        KeyCode::Char(_) if has_modifier_keys(&key) => {
            debug_log!("apply_key() - Ignoring input with modifier: {:?}", key.modifiers);
            KeyResult::Pending
        }
        KeyCode::Char(c) if !c.is_control() && c != '\u{FFFD}' => {
            if input.chars().count() < MAX_INPUT_LENGTH {
                input.push(c);
            }
            KeyResult::Pending
        }
        _ => {
            debug_log!("apply_key() - Ignoring key: {:?}", key.code);
            KeyResult::Pending
        }
    }
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(event::KeyModifiers::ALT)
        || key.modifiers.contains(event::KeyModifiers::CONTROL)
}

fn render(
    f: &mut Frame,
    view: &PuzzleView,
    prompt: &str,
    input: &str,
    mode: InputMode,
    message: Span,
    status: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(8), // Puzzle
            Constraint::Min(4),    // Message
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Status
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_puzzle(f, chunks[1], view);
    render_message(f, chunks[2], message);
    render_prompt(f, chunks[3], prompt, input);
    render_block_text(f, chunks[4], status, HEADER_STYLE, "Status");
    render_block_text(f, chunks[5], instructions(mode), Style::default().fg(Color::Gray), "");
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("WHEEL OF FORTUNE")
        .style(HEADER_STYLE)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_puzzle(f: &mut Frame, area: Rect, view: &PuzzleView) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(spaced(&view.masked), PUZZLE_STYLE)),
        Line::from(""),
        Line::from(guessed_letters_line(&view.guessed)),
        Line::from(hidden_letters_line(view.hidden)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Puzzle").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, area: Rect, message: Span) {
    let paragraph = Paragraph::new(Line::from(message))
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_prompt(f: &mut Frame, area: Rect, prompt: &str, input: &str) {
    let line = if prompt.is_empty() {
        Line::from("")
    } else {
        Line::from(vec![
            Span::raw(prompt),
            Span::styled(input, PUZZLE_STYLE),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    };
    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_block_text(f: &mut Frame, area: Rect, text: &str, style: Style, title: &str) {
    let paragraph = Paragraph::new(text.to_string())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(paragraph, area);
}

fn instructions(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Line => "Type your answer | ENTER: Submit | BACKSPACE: Delete | ESC: Quit",
        InputMode::Acknowledge => "Press any key to continue | ESC: Quit",
    }
}

/// Widen the puzzle so single letters read as tiles.
fn spaced(masked: &str) -> String {
    masked
        .chars()
        .map(|c| if c == ' ' { "  ".to_string() } else { format!("{c} ") })
        .collect::<String>()
        .trim_end()
        .to_string()
}

impl GameInterface for TuiInterface {
    fn show_welcome(&mut self) {
        self.set_message("Welcome to . . . WHEEL OF FORTUNE", HEADER_STYLE);
        self.status = "Press any key to start".to_string();
        self.draw_or_log();
    }

    fn show_puzzle(&mut self, view: &PuzzleView) {
        self.view = view.clone();
        self.status = "Spin to guess a letter or solve the whole phrase".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<String> {
        self.read_input(InputMode::Line, ACTION_PROMPT)
    }

    fn show_spinning(&mut self) {
        let mut text = SPIN_MESSAGE.to_string();
        self.set_message(text.clone(), SPIN_STYLE);
        self.status = "Spinning...".to_string();
        self.draw_or_log();
        for _ in 0..SPIN_EXTRA_DOTS {
            if !self.spin_delay.is_zero() {
                thread::sleep(self.spin_delay);
            }
            text.push_str(" .");
            self.set_message(text.clone(), SPIN_STYLE);
            self.draw_or_log();
        }
    }

    fn read_letter(&mut self) -> Option<String> {
        self.status = "Guess a letter".to_string();
        self.read_input(InputMode::Line, LETTER_PROMPT)
    }

    fn read_solution(&mut self) -> Option<String> {
        self.status = "Solve the puzzle".to_string();
        self.read_input(InputMode::Line, SOLUTION_PROMPT)
    }

    fn show_guess_outcome(&mut self, letter: char, outcome: GuessOutcome, view: &PuzzleView) {
        self.view = view.clone();
        let style = match outcome {
            GuessOutcome::Miss => MISS_STYLE,
            GuessOutcome::Hit(_) | GuessOutcome::Solved => SUCCESS_STYLE,
        };
        self.set_message(guess_outcome_message(letter, outcome), style);
        self.status = format!("Guessed '{letter}'");
        self.draw_or_log();
    }

    fn show_solve_outcome(&mut self, outcome: SolveOutcome, view: &PuzzleView) {
        self.view = view.clone();
        let style = match outcome {
            SolveOutcome::Solved => SUCCESS_STYLE,
            SolveOutcome::Incorrect => MISS_STYLE,
        };
        self.set_message(solve_outcome_message(outcome), style);
        self.draw_or_log();
    }

    fn show_error(&mut self, error: &RoundError) {
        self.set_message(error.to_string(), ERROR_STYLE);
        self.status = "Try again".to_string();
        self.draw_or_log();
    }

    fn acknowledge(&mut self) -> Option<String> {
        self.read_input(InputMode::Acknowledge, "")
    }

    fn show_victory(&mut self, phrase: &str) {
        self.view.masked = phrase.to_string();
        self.view.hidden = 0;
        self.set_message(VICTORY_MESSAGE, SUCCESS_STYLE);
        self.status = "Game Over - press any key to exit".to_string();
        self.draw_or_log();
    }

    fn show_exit(&mut self) {
        self.set_message("Exiting...", MESSAGE_STYLE);
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
