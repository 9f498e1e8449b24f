use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("could not read reference text from '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reference text is empty")]
    EmptySource,
    #[error("line index {index} out of range for text with {count} lines")]
    OutOfRange { index: usize, count: usize },
}

/// The reference text, split into lines once at load time and read-only from
/// then on. Every real line keeps its terminating newline (the final line may
/// lack one) and the sequence always ends with one empty sentinel line, so
/// the engine's traversal has a defined terminal line to land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextModel {
    lines: Vec<String>,
}

impl TextModel {
    pub fn from_path(path: &Path) -> Result<Self, TextError> {
        let raw = fs::read_to_string(path).map_err(|source| TextError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&raw)
    }

    pub fn from_text(raw: &str) -> Result<Self, TextError> {
        if raw.is_empty() {
            return Err(TextError::EmptySource);
        }

        let mut lines: Vec<String> = raw.split_inclusive('\n').map(str::to_string).collect();
        lines.push(String::new());

        Ok(Self { lines })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_at(&self, index: usize) -> Result<&str, TextError> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(TextError::OutOfRange {
                index,
                count: self.lines.len(),
            })
    }

    pub fn is_last_line(&self, index: usize) -> bool {
        index + 1 == self.lines.len()
    }

    /// Total number of characters across all lines, terminators included.
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_lines_keep_terminators_and_end_with_sentinel() {
        let text = TextModel::from_text("hello\nworld\n").unwrap();

        assert_eq!(text.line_count(), 3);
        assert_eq!(text.line_at(0).unwrap(), "hello\n");
        assert_eq!(text.line_at(1).unwrap(), "world\n");
        assert_eq!(text.line_at(2).unwrap(), "");
        assert!(text.is_last_line(2));
        assert!(!text.is_last_line(1));
    }

    #[test]
    fn test_final_line_without_newline_is_kept() {
        let text = TextModel::from_text("hello\nworld").unwrap();

        assert_eq!(text.line_count(), 3);
        assert_eq!(text.line_at(1).unwrap(), "world");
        assert_eq!(text.line_at(2).unwrap(), "");
    }

    #[test]
    fn test_single_newline_is_one_real_line() {
        let text = TextModel::from_text("\n").unwrap();

        assert_eq!(text.line_count(), 2);
        assert_eq!(text.line_at(0).unwrap(), "\n");
        assert_eq!(text.line_at(1).unwrap(), "");
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert_matches!(TextModel::from_text(""), Err(TextError::EmptySource));
    }

    #[test]
    fn test_line_at_out_of_range() {
        let text = TextModel::from_text("hi\n").unwrap();

        assert_matches!(
            text.line_at(5),
            Err(TextError::OutOfRange { index: 5, count: 2 })
        );
    }

    #[test]
    fn test_char_count_includes_terminators() {
        let text = TextModel::from_text("ab\ncd\n").unwrap();
        assert_eq!(text.char_count(), 6);
    }

    #[test]
    fn test_from_path_reads_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one\ntwo\n").unwrap();

        let text = TextModel::from_path(file.path()).unwrap();
        assert_eq!(text.line_count(), 3);
        assert_eq!(text.line_at(0).unwrap(), "one\n");
    }

    #[test]
    fn test_from_path_missing_file_is_source_unavailable() {
        let result = TextModel::from_path(Path::new("/nonexistent/tapline.txt"));
        assert_matches!(result, Err(TextError::SourceUnavailable { .. }));
    }
}
