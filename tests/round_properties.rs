// Property tests for phrase masking and the guess/solve operations

use phrase_wheel::*;
use proptest::prelude::*;

fn engine_for(seed: u64) -> RoundEngine {
    let mut engine = RoundEngine::new(PhraseGenerator::seeded(seed));
    engine.start_round();
    engine
}

proptest! {
    #[test]
    fn initial_mask_matches_phrase_shape(seed in any::<u64>()) {
        let engine = engine_for(seed);
        let phrase: Vec<char> = engine.challenge_phrase().chars().collect();
        let mask: Vec<char> = engine.masked_phrase().chars().collect();

        prop_assert_eq!(mask.len(), phrase.len());
        for (m, p) in mask.iter().zip(&phrase) {
            if *p == ' ' {
                prop_assert_eq!(*m, ' ');
            } else {
                prop_assert_eq!(*m, PLACEHOLDER);
            }
        }
    }

    #[test]
    fn guessing_every_letter_solves_on_the_last(seed in any::<u64>(), order_seed in any::<u64>()) {
        let mut engine = engine_for(seed);
        let phrase = engine.challenge_phrase().to_string();
        let mut letters: Vec<char> = phrase.chars().filter(|c| *c != ' ').collect();
        letters.sort_unstable();
        letters.dedup();
        // Deterministic shuffle so the guess order varies between cases
        let len = letters.len();
        letters.rotate_left((order_seed as usize) % len);

        for (i, letter) in letters.iter().enumerate() {
            let outcome = engine.guess_letter(&letter.to_string());
            if i + 1 == len {
                prop_assert_eq!(outcome, Ok(GuessOutcome::Solved));
            } else {
                prop_assert!(matches!(outcome, Ok(GuessOutcome::Hit(n)) if n > 0));
            }
            // Mask positions are placeholder, space or the real letter
            for (m, p) in engine.masked_phrase().chars().zip(phrase.chars()) {
                prop_assert!(m == p || (m == PLACEHOLDER && p != ' '));
            }
        }
        prop_assert_eq!(engine.masked_phrase(), phrase);
        prop_assert_eq!(engine.state(), State::GameOver);
    }

    #[test]
    fn absent_letter_is_a_miss(seed in any::<u64>(), letter in proptest::char::range('A', 'Z')) {
        let mut engine = engine_for(seed);
        prop_assume!(!engine.challenge_phrase().contains(letter));
        let before = engine.masked_phrase();

        prop_assert_eq!(engine.guess_letter(&letter.to_string()), Ok(GuessOutcome::Miss));
        prop_assert_eq!(engine.masked_phrase(), before);
    }

    #[test]
    fn second_guess_is_duplicate(seed in any::<u64>(), letter in proptest::char::range('a', 'z')) {
        let mut engine = engine_for(seed);
        let first = engine.guess_letter(&letter.to_string());
        prop_assume!(first != Ok(GuessOutcome::Solved));
        let mask = engine.masked_phrase();

        let upper = letter.to_ascii_uppercase();
        prop_assert_eq!(
            engine.guess_letter(&upper.to_string()),
            Err(RoundError::DuplicateGuess(upper))
        );
        prop_assert_eq!(engine.masked_phrase(), mask);
        prop_assert_eq!(engine.guessed_letters().len(), 1);
    }

    #[test]
    fn solve_ignores_case(seed in any::<u64>(), flips in proptest::collection::vec(any::<bool>(), 64)) {
        let mut engine = engine_for(seed);
        let guess: String = engine
            .challenge_phrase()
            .chars()
            .zip(flips.iter().cycle())
            .map(|(c, &lower)| if lower { c.to_ascii_lowercase() } else { c })
            .collect();

        prop_assert_eq!(engine.solve_attempt(&guess), Ok(SolveOutcome::Solved));
        prop_assert_eq!(engine.masked_phrase(), engine.challenge_phrase());
    }

    #[test]
    fn non_letter_first_character_is_invalid(seed in any::<u64>(), input in "[0-9 !?.,-][a-zA-Z]{0,3}") {
        let mut engine = engine_for(seed);
        prop_assert_eq!(engine.guess_letter(&input), Err(RoundError::InvalidGuess));
        prop_assert!(engine.guessed_letters().is_empty());
    }
}

#[test]
fn solve_without_round_has_no_puzzle() {
    let mut engine = RoundEngine::new(PhraseGenerator::seeded(0));
    assert_eq!(engine.solve_attempt(""), Err(RoundError::NoActivePuzzle));
    assert_eq!(engine.solve_attempt("I LOVED SNOW"), Err(RoundError::NoActivePuzzle));
}
