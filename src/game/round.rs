//! A single round of guessing
//!
//! Runs strictly in order: select an answer, render its mask, await the
//! guess, judge it, then await the play-again reply.

use super::read_line;
use crate::core::{MaskedWord, Outcome, wants_another_round};
use crate::output::{
    print_continue_prompt, print_guess_prompt, print_masked, print_outcome, print_title,
};
use crate::random::RandomSource;
use crate::wordlists::WordList;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// How a round finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The player asked for another round
    Continue,
    /// The player declined, or input ran out
    Stop,
}

/// Per-round state: the chosen answer and what the player sees
#[derive(Debug, Clone)]
pub struct Round<'a> {
    answer: &'a str,
    masked: Option<MaskedWord>,
}

impl<'a> Round<'a> {
    /// Select an answer uniformly from the list
    ///
    /// # Panics
    /// Panics if `words` is empty.
    pub fn begin<R: RandomSource + ?Sized>(words: &'a WordList, rng: &mut R) -> Self {
        let answer = words.choose(rng);
        Self {
            answer,
            masked: None,
        }
    }

    /// Round over a known answer, skipping selection
    #[cfg(test)]
    pub(crate) const fn with_answer(answer: &'a str) -> Self {
        Self {
            answer,
            masked: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &'a str {
        self.answer
    }

    /// Draw the masked view of the answer
    pub fn render<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &MaskedWord {
        self.masked.insert(MaskedWord::reveal(self.answer, rng))
    }

    /// The masked view, once rendered
    #[cfg(test)]
    pub(crate) const fn masked(&self) -> Option<&MaskedWord> {
        self.masked.as_ref()
    }

    #[must_use]
    pub fn judge(&self, guess: &str) -> Outcome {
        Outcome::judge(guess, self.answer)
    }
}

/// Play one full round against the console
///
/// End of input at either prompt stops the session instead of failing.
///
/// # Errors
/// Returns any I/O error from `input` or `output`.
///
/// # Panics
/// Panics if `words` is empty.
pub fn play_round<R, I, W>(
    words: &WordList,
    rng: &mut R,
    input: &mut I,
    output: &mut W,
) -> io::Result<RoundEnd>
where
    R: RandomSource + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut round = Round::begin(words, rng);
    debug!(answer = round.answer(), "selected answer");

    print_title(output)?;
    let masked = round.render(rng);
    debug!(
        masked = masked.as_str(),
        hidden = masked.char_count() - masked.revealed_count(),
        "rendered mask"
    );
    print_masked(output, masked)?;

    print_guess_prompt(output)?;
    let Some(guess) = read_line(input)? else {
        debug!("input closed while awaiting guess");
        writeln!(output)?;
        return Ok(RoundEnd::Stop);
    };

    let outcome = round.judge(&guess);
    debug!(win = outcome.is_win(), guess = guess.as_str(), "judged guess");
    print_outcome(output, outcome, round.answer())?;

    print_continue_prompt(output)?;
    let reply = read_line(input)?.unwrap_or_default();
    writeln!(output)?;

    if wants_another_round(&reply) {
        Ok(RoundEnd::Continue)
    } else {
        Ok(RoundEnd::Stop)
    }
}
