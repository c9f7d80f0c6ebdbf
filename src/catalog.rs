//! Shared line-catalogue reader.
//!
//! All plain-text data files use the same format: UTF-8, one entry per
//! line, `#` starts a comment line, blank lines are ignored.

use crate::error::ConfigError;
use std::path::Path;

/// Parse catalogue content into trimmed entries.
pub(crate) fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a catalogue file from disk, failing fast on I/O errors.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_lines(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blanks() {
        let entries = parse_lines("# header\n\nAlpha\n  Beta  \n# trailing\nGamma\n");
        assert_eq!(entries, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn read_lines_reports_the_missing_path() {
        let err = read_lines(Path::new("/nonexistent/catalogue.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalogue.txt"));
    }
}
