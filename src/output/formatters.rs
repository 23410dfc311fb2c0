//! Formatting utilities for terminal output

/// Repeat `motif` until the line is exactly `width` characters long
///
/// The final repetition is cut short if `width` is not a multiple of the
/// motif length.
#[must_use]
pub fn frame_line(motif: &str, width: usize) -> String {
    motif.chars().cycle().take(width).collect()
}

/// Wrap `text` between two copies of `motif`, padded by single spaces
#[must_use]
pub fn framed_text(motif: &str, text: &str) -> String {
    format!("{motif} {text} {motif}")
}
