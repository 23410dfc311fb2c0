//! Partially redacted view of an answer

use crate::random::RandomSource;
use std::fmt;

/// Placeholder shown for a hidden character
pub const MASK_GLYPH: char = '_';

/// An answer with some characters replaced by [`MASK_GLYPH`]
///
/// Always holds exactly as many characters as the answer it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedWord {
    text: String,
    revealed: usize,
}

impl MaskedWord {
    /// Mask an answer with one independent coin flip per character
    ///
    /// Heads shows the character, tails hides it. Spaces get no special
    /// treatment.
    ///
    /// # Examples
    /// ```
    /// use hungman::core::MaskedWord;
    /// use hungman::random::SeededRandom;
    ///
    /// let mut rng = SeededRandom::with_seed(1);
    /// let masked = MaskedWord::reveal("banana", &mut rng);
    /// assert_eq!(masked.char_count(), 6);
    /// ```
    pub fn reveal<R: RandomSource + ?Sized>(answer: &str, rng: &mut R) -> Self {
        Self::from_flags(answer, answer.chars().map(|_| rng.coin_flip()))
    }

    /// Mask an answer using explicit per-character reveal flags
    ///
    /// Characters beyond the last flag are hidden.
    pub fn from_flags(answer: &str, flags: impl IntoIterator<Item = bool>) -> Self {
        let mut flags = flags.into_iter();
        let mut revealed = 0;

        let text = answer
            .chars()
            .map(|ch| {
                if flags.next().unwrap_or(false) {
                    revealed += 1;
                    ch
                } else {
                    MASK_GLYPH
                }
            })
            .collect();

        Self { text, revealed }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters, equal to the answer's
    #[inline]
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of positions showing the original character
    #[inline]
    #[must_use]
    pub const fn revealed_count(&self) -> usize {
        self.revealed
    }
}

impl fmt::Display for MaskedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
