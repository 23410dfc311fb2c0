//! Display functions for a round

use super::formatters::{frame_line, framed_text};
use crate::core::{MaskedWord, Outcome};
use colored::Colorize;
use std::io::{self, Write};

const TITLE: &str = "Try to guess my word!";
const WIN_TEXT: &str = "You win!";
const LOSE_TEXT: &str = "Not this time.";

/// Print the banner that opens a round
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_title<W: Write>(out: &mut W) -> io::Result<()> {
    let line = framed_text(":", TITLE);
    let border = frame_line(":", line.chars().count());

    writeln!(out)?;
    writeln!(out, "{}", border.bright_cyan())?;
    writeln!(out, "{}", line.bright_cyan().bold())?;
    writeln!(out, "{}", border.bright_cyan())?;
    writeln!(out)
}

/// Print the masked answer, tab-indented
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_masked<W: Write>(out: &mut W, masked: &MaskedWord) -> io::Result<()> {
    writeln!(out, "\t{masked}")?;
    writeln!(out)
}

/// Prompt for the guess without ending the line
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_guess_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "What could it be? ")?;
    out.flush()
}

/// Print the win or lose banner; a loss discloses the answer
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_outcome<W: Write>(out: &mut W, outcome: Outcome, answer: &str) -> io::Result<()> {
    writeln!(out)?;
    match outcome {
        Outcome::Win => {
            let line = framed_text(":)", WIN_TEXT);
            let border = frame_line(":)", line.chars().count());

            writeln!(out, "{}", border.green())?;
            writeln!(out, "{}", line.bright_green().bold())?;
            writeln!(out, "{}", border.green())
        }
        Outcome::Lose => {
            let line = framed_text(":(", LOSE_TEXT);
            let reveal = framed_text(":(", &format!("Correct answer is \"{answer}\"."));
            let width = line.chars().count().max(reveal.chars().count());
            let border = frame_line(":(", width);

            writeln!(out, "{}", border.red())?;
            writeln!(out, "{}", line.bright_red().bold())?;
            writeln!(out, "{}", reveal.bright_red())?;
            writeln!(out, "{}", border.red())
        }
    }
}

/// Ask whether to play another round
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_continue_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "Play again? (y/n) ")?;
    out.flush()
}

/// Sign-off once the player stops
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Thanks for playing!")
}
