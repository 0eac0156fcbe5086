use crate::usage::TokenUsage;
use serde::{Deserialize, Serialize};

/// One fully parsed and defaulted log record.
///
/// `message_id` is the only field a record must carry to count as a message;
/// everything else is defaulted by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub message_id: String,
    /// ISO-8601; generation time when the record carried none.
    pub timestamp: String,
    pub is_sidechain: bool,
    pub role: String,
    pub model: String,
    pub usage: TokenUsage,
    /// Cost of this message alone, rounded to 4 decimal places.
    pub cost: f64,
    pub content: Option<String>,
    pub session_id: Option<String>,
    pub agent_id: Option<String>,
    pub parent_uuid: Option<String>,
}

/// Diagnostic record for one unusable log line. Never fatal; collected and
/// surfaced only on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseError {
    /// 1-indexed.
    pub line_number: usize,
    pub message: String,
    /// At most 100 characters of the offending line.
    pub line_preview: String,
}

impl ParseError {
    pub fn new(line_number: usize, message: impl Into<String>, line: &str) -> Self {
        Self {
            line_number,
            message: message.into(),
            line_preview: preview(line),
        }
    }
}

fn preview(line: &str) -> String {
    line.chars().take(100).collect()
}

/// Per-file line accounting from the streaming parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub total_lines: usize,
    pub empty_lines: usize,
    pub malformed_lines: usize,
    pub successful_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_to_100_chars() {
        let long = "x".repeat(250);
        let error = ParseError::new(3, "malformed content at line 3", &long);
        assert_eq!(error.line_preview.chars().count(), 100);
        assert_eq!(error.line_number, 3);
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let line = "é".repeat(150);
        let error = ParseError::new(1, "malformed content at line 1", &line);
        assert_eq!(error.line_preview.chars().count(), 100);
    }
}
