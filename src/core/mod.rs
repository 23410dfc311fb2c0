//! Core domain types for a guessing round
//!
//! Pure logic with no console I/O: masking an answer, judging a guess, and
//! reading a play-again reply.

mod mask;
mod outcome;

pub use mask::{MASK_GLYPH, MaskedWord};
pub use outcome::{Outcome, wants_another_round};
