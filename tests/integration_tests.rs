// Integration tests for the phrase-wheel game
// These drive the whole loop through the console frontend with scripted input

use phrase_wheel::cli::{ACTION_PROMPT, CliInterface, VICTORY_MESSAGE};
use phrase_wheel::*;
use std::io::Cursor;
use std::time::Duration;

fn play(seed: u64, input: &str) -> (State, String, RoundEngine) {
    let mut engine = RoundEngine::new(PhraseGenerator::seeded(seed));
    let mut ui = CliInterface::new(Cursor::new(input), Vec::new(), Duration::ZERO);
    let state = game_loop(&mut engine, &mut ui);
    let output = String::from_utf8_lossy(&ui.into_writer()).into_owned();
    (state, output, engine)
}

fn phrase_for(seed: u64) -> String {
    PhraseGenerator::seeded(seed).generate_challenge()
}

fn distinct_letters(phrase: &str) -> Vec<char> {
    let mut letters: Vec<char> = phrase.chars().filter(|c| *c != ' ').collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}

#[test]
fn test_end_to_end_solve_outright() {
    let phrase = phrase_for(21);
    let input = format!("\n2\n{}\n\n", phrase.to_lowercase());

    let (state, output, engine) = play(21, &input);

    assert_eq!(state, State::GameOver);
    assert_eq!(engine.masked_phrase(), phrase);
    assert!(output.contains("Welcome to . . ."));
    assert!(output.contains(VICTORY_MESSAGE));
}

#[test]
fn test_finished_round_rejects_further_play() {
    let phrase = phrase_for(21);
    let (_, _, mut engine) = play(21, &format!("\n2\n{phrase}\n\n"));

    assert!(!engine.has_active_puzzle());
    assert_eq!(engine.choose_action("1"), Err(RoundError::NoActivePuzzle));
    assert_eq!(engine.guess_letter("z"), Err(RoundError::NoActivePuzzle));
    assert_eq!(engine.state(), State::GameOver);
    assert_eq!(engine.masked_phrase(), phrase);
}

#[test]
fn test_end_to_end_spell_out_phrase() {
    let phrase = phrase_for(5);
    let letters = distinct_letters(&phrase);

    // Every non-winning guess needs one acknowledgement line
    let mut input = String::from("\n");
    for (i, letter) in letters.iter().enumerate() {
        input.push_str(&format!("1\n{letter}\n"));
        if i + 1 < letters.len() {
            input.push('\n');
        }
    }
    input.push('\n');

    let (state, output, engine) = play(5, &input);

    assert_eq!(state, State::GameOver);
    assert_eq!(engine.masked_phrase(), phrase);
    assert_eq!(
        output.matches("Great job").count(),
        letters.len() - 1,
        "every guess but the last should report a hit"
    );
    assert!(output.contains(VICTORY_MESSAGE));
}

#[test]
fn test_eof_before_start() {
    let (state, output, engine) = play(1, "");
    assert_eq!(state, State::WaitingToStart);
    assert!(!engine.has_active_puzzle());
    assert!(output.contains("Goodbye."));
}

#[test]
fn test_eof_mid_round_exits_cleanly() {
    let (state, output, engine) = play(2, "\n1\n");
    assert_eq!(state, State::GuessingLetter);
    assert!(engine.has_active_puzzle());
    assert!(output.contains("Goodbye."));
    assert!(!output.contains(VICTORY_MESSAGE));
}

#[test]
fn test_invalid_action_reprompts() {
    let (_, output, _) = play(3, "\nspinny\n\n");
    assert!(output.contains("Invalid entry, resetting."));
    assert_eq!(output.matches(ACTION_PROMPT).count(), 2);
}

#[test]
fn test_word_actions_are_accepted() {
    let phrase = phrase_for(4);
    let input = format!("\nSOLVE\n{phrase}\n\n");
    let (state, _, _) = play(4, &input);
    assert_eq!(state, State::GameOver);
}

#[test]
fn test_miss_duplicate_and_invalid_messages() {
    let input = "\n1\nq\n\n1\nQuiet\n\n1\n7\n\n1\n\n\n";
    let (state, output, engine) = play(6, input);

    assert_eq!(state, State::WaitingForUserInput);
    assert!(output.contains("Hard luck, 'Q' is not in the phrase."));
    assert!(output.contains("The letter 'Q' has already been guessed."));
    assert_eq!(
        output
            .matches("Invalid entry, must be a valid alphabetical character.")
            .count(),
        2
    );
    assert_eq!(engine.guessed_letters().len(), 1);
    assert!(engine.masked_phrase().chars().all(|c| c == PLACEHOLDER || c == ' '));
}

#[test]
fn test_incorrect_solve_keeps_round_going() {
    let phrase = phrase_for(9);
    let input = format!("\n2\nNOT THE ANSWER\n\n2\n{phrase}\n\n");

    let (state, output, _) = play(9, &input);

    assert!(output.contains("Sorry, but that is incorrect."));
    assert_eq!(state, State::GameOver);
}

#[test]
fn test_hit_reports_count_and_mask() {
    let phrase = phrase_for(12);
    let letter = phrase.chars().find(|c| *c != ' ').unwrap();
    let expected_hits = phrase.chars().filter(|c| *c == letter).count();

    let input = format!("\n1\n{}\n\n", letter.to_ascii_lowercase());
    let (_, output, engine) = play(12, &input);

    assert!(output.contains(&format!(
        "Great job, '{letter}' is in the phrase {expected_hits} time(s)."
    )));
    assert!(output.contains(&engine.masked_phrase()));
    assert!(output.contains(&format!("Guessed letters: {letter}")));
}

#[test]
fn test_known_phrase_example() {
    let mut engine = RoundEngine::new(PhraseGenerator::seeded(0));
    engine.start_round_with("I WILL PAINT A DOG");
    assert_eq!(engine.masked_phrase(), "- ---- ----- - ---");

    assert_eq!(engine.guess_letter("i"), Ok(GuessOutcome::Hit(3)));
    assert_eq!(engine.masked_phrase(), "I -I-- --I-- - ---");

    assert_eq!(engine.guess_letter("5"), Err(RoundError::InvalidGuess));
    assert_eq!(engine.guess_letter(""), Err(RoundError::InvalidGuess));
}
