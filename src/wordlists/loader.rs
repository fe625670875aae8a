//! Word list loading utilities
//!
//! Loads dictionary files as raw lines; normalization and length filtering
//! happen inside the search, so oddly formatted entries are passed through
//! here and skipped there.

use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary entries from a newline-separated file
///
/// Blank lines are dropped; everything else is returned as-is.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordraw::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect();

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_keeps_entries_raw() {
        let mut file = tempfile_path("wordraw_loader_raw");
        writeln!(file.1, "apple\n  THICK  \n\ntoolong").unwrap();
        drop(file.1);

        let words = load_from_file(&file.0).unwrap();
        assert_eq!(words, ["apple", "  THICK  ", "toolong"]);

        std::fs::remove_file(&file.0).ok();
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/wordraw-words.txt").is_err());
    }

    fn tempfile_path(stem: &str) -> (std::path::PathBuf, std::fs::File) {
        let path = std::env::temp_dir().join(format!("{stem}-{}.txt", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        (path, file)
    }
}
