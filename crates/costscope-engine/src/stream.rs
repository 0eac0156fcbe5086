use crate::parser::{ParsedLine, parse_line};
use crate::{Error, Result};
use costscope_types::{FileStats, MessageRecord, ParseError};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Everything recovered from one log file: the usable messages, the lines
/// that were not, and the accounting for both.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub messages: Vec<MessageRecord>,
    pub errors: Vec<ParseError>,
    pub stats: FileStats,
}

/// Stream a JSONL file line by line, recovering from every per-line
/// failure. The file is never materialized whole.
///
/// Only opening or reading the file itself returns an `Err`; that is the
/// single file-level failure distinguished from per-line errors.
pub async fn parse_file(path: &Path) -> Result<ParsedFile> {
    let file = File::open(path).await.map_err(Error::Io)?;
    let mut lines = BufReader::new(file).lines();

    let mut parsed = ParsedFile::default();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        parsed.stats.total_lines += 1;

        match parse_line(&line, line_number) {
            ParsedLine::Empty => parsed.stats.empty_lines += 1,
            ParsedLine::Message(message) => {
                parsed.stats.successful_lines += 1;
                parsed.messages.push(*message);
            }
            ParsedLine::Error(error) => {
                parsed.stats.malformed_lines += 1;
                parsed.errors.push(error);
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_log(dir: &TempDir, name: &str, lines: &[&str]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    #[tokio::test]
    async fn accounts_for_every_line_kind() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "session.jsonl",
            &[
                r#"{"timestamp":"2026-01-01T00:00:00Z","message":{"id":"m1"}}"#,
                "",
                "not json at all",
                r#"{"timestamp":"2026-01-01T00:01:00Z","message":{"role":"user"}}"#,
                r#"{"timestamp":"2026-01-01T00:02:00Z","message":{"id":"m2"}}"#,
            ],
        );

        let parsed = parse_file(&path).await.unwrap();
        assert_eq!(parsed.stats.total_lines, 5);
        assert_eq!(parsed.stats.empty_lines, 1);
        assert_eq!(parsed.stats.malformed_lines, 2);
        assert_eq!(parsed.stats.successful_lines, 2);
        assert_eq!(parsed.messages.len(), 2);
        assert_eq!(parsed.errors.len(), 2);
        assert_eq!(parsed.errors[0].line_number, 3);
        assert_eq!(parsed.errors[1].line_number, 4);
    }

    #[tokio::test]
    async fn file_with_only_junk_is_a_success_with_no_messages() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "junk.jsonl", &["garbage", "", "{broken"]);

        let parsed = parse_file(&path).await.unwrap();
        assert!(parsed.messages.is_empty());
        assert_eq!(parsed.stats.malformed_lines, 2);
        assert_eq!(parsed.stats.empty_lines, 1);
    }

    #[tokio::test]
    async fn missing_file_is_a_file_level_error() {
        let dir = TempDir::new().unwrap();
        let result = parse_file(&dir.path().join("absent.jsonl")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
