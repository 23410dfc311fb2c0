//! Word lists for the guessing game
//!
//! The list is read once from a line-delimited text file and stays read-only
//! for the rest of the session.

pub mod loader;

use crate::random::RandomSource;

pub use loader::{LoadError, load_from_file, load_from_reader};

/// Conventional word list location, relative to the working directory
pub const DEFAULT_WORDS_PATH: &str = "words.txt";

/// Number of lines in the shipped `words.txt`
///
/// Lists of any other size still load; a mismatch is only logged.
pub const EXPECTED_WORD_COUNT: usize = 116;

/// Ordered collection of candidate answers
///
/// Entries may be short phrases with embedded spaces. Repeats are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Wrap an ordered list of answers
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Pick one answer uniformly at random
    ///
    /// # Panics
    /// Panics if the list is empty. Lists returned by the loader never are.
    pub fn choose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_int(self.words.len())]
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
