//! Session loop
//!
//! Plays rounds back to back for as long as the player keeps saying yes.

use super::round::{RoundEnd, play_round};
use crate::output::print_farewell;
use crate::random::RandomSource;
use crate::wordlists::WordList;
use std::io::{self, BufRead, Write};

/// What happened over a session; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub rounds_played: usize,
}

/// Run rounds until the player declines to continue
///
/// At least one round is always played.
///
/// # Errors
/// Returns any I/O error from `input` or `output`.
///
/// # Panics
/// Panics if `words` is empty.
pub fn run_session<R, I, W>(
    words: &WordList,
    rng: &mut R,
    input: &mut I,
    output: &mut W,
) -> io::Result<SessionSummary>
where
    R: RandomSource + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut playing = true;

    while playing {
        let end = play_round(words, rng, input, output)?;
        summary.rounds_played += 1;
        playing = end == RoundEnd::Continue;
    }

    print_farewell(output)?;
    Ok(summary)
}
