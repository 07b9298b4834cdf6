//! Difficulty-bucketed word bank.

use crate::{rng, rng::SeededRng, GenerationError};

pub use crate::word_list::WORD_LIST;

/// Hardest difficulty band.
pub const MAX_DIFFICULTY: usize = 5;

/// Number of difficulty bands, `0..=MAX_DIFFICULTY`.
pub const DIFFICULTY_BANDS: usize = MAX_DIFFICULTY + 1;

/// Word counts keyed by difficulty band.
pub type BandCounts = [usize; DIFFICULTY_BANDS];

/// Difficulty band of a word: one band per two letters past the second,
/// capped at [`MAX_DIFFICULTY`].
#[must_use]
pub fn difficulty_for_length(length: usize) -> usize {
    (length.saturating_sub(2) / 2).min(MAX_DIFFICULTY)
}

/// Words partitioned by difficulty. Every draw removes the word from the bank,
/// so no word is ever handed out twice.
#[derive(Clone, Debug)]
pub struct WordBank {
    buckets: [Vec<String>; DIFFICULTY_BANDS],
}

impl WordBank {
    /// Shuffles the whole word list with `rng` and buckets it by length.
    pub fn build<S: AsRef<str>>(words: &[S], rng: &mut SeededRng) -> Self {
        let mut shuffled: Vec<String> = words
            .iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        rng::shuffle(&mut shuffled, rng);

        let mut buckets: [Vec<String>; DIFFICULTY_BANDS] = Default::default();
        for word in shuffled {
            let difficulty = difficulty_for_length(word.chars().count());
            buckets[difficulty].push(word);
        }
        Self { buckets }
    }

    /// Removes and returns the last word of the requested band.
    ///
    /// Difficulties above [`MAX_DIFFICULTY`] draw from the hardest band.
    pub fn draw(&mut self, difficulty: usize) -> Option<String> {
        self.buckets[difficulty.min(MAX_DIFFICULTY)].pop()
    }

    /// Number of words left in the requested band.
    #[must_use]
    pub fn available(&self, difficulty: usize) -> usize {
        self.buckets[difficulty.min(MAX_DIFFICULTY)].len()
    }

    /// Fails when any band holds fewer words than `required`.
    pub fn ensure_capacity(&self, required: &BandCounts) -> Result<(), GenerationError> {
        for (difficulty, needed) in required.iter().copied().enumerate() {
            let available = self.available(difficulty);
            if needed > available {
                return Err(GenerationError::WordBankExhausted {
                    difficulty,
                    required: needed,
                    available,
                });
            }
        }
        Ok(())
    }
}
