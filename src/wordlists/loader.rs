//! Word list loading utilities
//!
//! Reads one answer per line, keeping file order.

use super::{EXPECTED_WORD_COUNT, WordList};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Failure to produce a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open word list {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading word list: {source}")]
    Read {
        #[from]
        source: io::Error,
    },

    #[error("word list contains no words")]
    Empty,
}

/// Load a word list from a file
///
/// The file is closed before this returns.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be opened, and otherwise the
/// same errors as [`load_from_reader`].
///
/// # Examples
/// ```no_run
/// use hungman::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let words = load_from_reader(BufReader::new(file))?;
    info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Load a word list from any line-oriented reader
///
/// Each line becomes one entry with its `\n` or `\r\n` terminator removed.
/// Blank lines are skipped; every other line, spaces included, is kept as is.
///
/// # Errors
///
/// Returns [`LoadError::Read`] on an I/O failure and [`LoadError::Empty`] if
/// no entries remain.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<WordList, LoadError> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            words.push(line);
        }
    }

    if words.is_empty() {
        return Err(LoadError::Empty);
    }

    if words.len() != EXPECTED_WORD_COUNT {
        warn!(
            expected = EXPECTED_WORD_COUNT,
            found = words.len(),
            "word list size differs from the shipped list"
        );
    }

    Ok(WordList::new(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn keeps_file_order_and_strips_terminators() {
        let words = load_from_reader(Cursor::new("cat\ndog\r\nice cream\n")).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words.get(0), Some("cat"));
        assert_eq!(words.get(1), Some("dog"));
        assert_eq!(words.get(2), Some("ice cream"));
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let words = load_from_reader(Cursor::new("cat\ndog")).unwrap();
        assert_eq!(words.as_slice(), ["cat", "dog"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let words = load_from_reader(Cursor::new("cat\n\n\r\ndog\n\n")).unwrap();
        assert_eq!(words.as_slice(), ["cat", "dog"]);
    }

    #[test]
    fn surrounding_spaces_are_preserved() {
        let words = load_from_reader(Cursor::new(" hot dog \n")).unwrap();
        assert_eq!(words.get(0), Some(" hot dog "));
    }

    #[test]
    fn undecodable_line_is_a_read_error() {
        let err = load_from_reader(Cursor::new(b"cat\n\xff\xfe\n".to_vec())).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().starts_with("failed reading word list"));
    }

    #[test]
    fn duplicates_are_allowed() {
        let words = load_from_reader(Cursor::new("cat\ncat\n")).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn empty_source_is_an_error() {
        assert!(matches!(
            load_from_reader(Cursor::new("")),
            Err(LoadError::Empty)
        ));
        assert!(matches!(
            load_from_reader(Cursor::new("\n\n")),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_file_fails_to_open() {
        let path = std::env::temp_dir().join("hungman-no-such-dir/words.txt");
        let err = load_from_file(&path).unwrap_err();

        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn loads_from_file_on_disk() {
        let path = std::env::temp_dir().join(format!(
            "hungman-loader-{}-words.txt",
            std::process::id()
        ));
        std::fs::write(&path, "cat\ndog\n").unwrap();

        let result = load_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap().as_slice(), ["cat", "dog"]);
    }
}
