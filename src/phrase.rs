use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SUBJECTS: [&str; 10] = [
    "I", "You", "Kim", "Shruthi", "Josh", "Andrea", "People", "We", "They", "Mary",
];

pub const VERBS: [&str; 10] = [
    "will search for",
    "will get",
    "will find",
    "attained",
    "found",
    "will start interacting",
    "will accept",
    "accepted",
    "loved",
    "will paint",
];

pub const OBJECTS: [&str; 14] = [
    "an offer",
    "an apple",
    "a car",
    "an orange",
    "a treasure",
    "a surface",
    "snow",
    "alligators",
    "good code",
    "a dog",
    "cookies",
    "foxes",
    "aubergines",
    "zebras",
];

/// Builds challenge phrases of the form `SUBJECT VERB OBJECT`.
///
/// The randomness source is injected so rounds can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct PhraseGenerator<R = StdRng> {
    rng: R,
}

impl PhraseGenerator<StdRng> {
    /// Deterministic generator; the same seed yields the same sequence of phrases.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PhraseGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick one subject, verb and object uniformly and join them, uppercased.
    pub fn generate_challenge(&mut self) -> String {
        let subject = pick(&mut self.rng, &SUBJECTS);
        let verb = pick(&mut self.rng, &VERBS);
        let object = pick(&mut self.rng, &OBJECTS);
        format!("{subject} {verb} {object}").to_uppercase()
    }
}

fn pick<'a, R: Rng>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}
