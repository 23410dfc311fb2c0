//! Interactive play
//!
//! A round picks an answer, shows a masked view, takes one guess and asks
//! whether to go again. A session repeats rounds until the player stops.

pub mod round;
pub mod session;

pub use round::{Round, RoundEnd, play_round};
pub use session::{SessionSummary, run_session};

use std::io::{self, BufRead};

/// Read one line of player input
///
/// Only the `\n` or `\r\n` terminator is removed; everything else, leading and
/// trailing spaces included, is returned verbatim. Bytes that are not valid
/// UTF-8 become U+FFFD rather than failing the read. Returns `None` at end of
/// input.
///
/// # Errors
/// Returns any error from the input source.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_only_terminator() {
        let mut input = Cursor::new("  Apple pie \nnext\r\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("  Apple pie "));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("next"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn read_line_empty_line_is_not_eof() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn read_line_replaces_invalid_utf8() {
        let mut input = Cursor::new(b"caf\xe9\r\nnext\n".to_vec());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("caf\u{FFFD}"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn read_line_final_line_without_newline() {
        let mut input = Cursor::new("cat");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("cat"));
    }
}
