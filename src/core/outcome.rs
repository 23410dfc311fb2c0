//! Judging guesses and play-again replies

/// Result of comparing a guess with the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Exact, case-sensitive comparison of the raw guess with the answer
    ///
    /// # Examples
    /// ```
    /// use hungman::core::Outcome;
    ///
    /// assert_eq!(Outcome::judge("apple", "apple"), Outcome::Win);
    /// assert_eq!(Outcome::judge("Apple", "apple"), Outcome::Lose);
    /// ```
    #[must_use]
    pub fn judge(guess: &str, answer: &str) -> Self {
        if guess == answer { Self::Win } else { Self::Lose }
    }

    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// Whether a play-again reply asks for another round
///
/// Only the first character counts: `y` or `Y` means yes. Anything else,
/// including an empty reply, means no.
#[must_use]
pub fn wants_another_round(response: &str) -> bool {
    matches!(response.chars().next(), Some('y' | 'Y'))
}
