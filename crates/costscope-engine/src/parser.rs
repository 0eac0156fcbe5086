use crate::pricing;
use crate::schema::{RawBlock, RawContent, RawRecord};
use costscope_types::{MessageRecord, ParseError, TokenUsage};

/// Outcome of parsing a single log line.
#[derive(Debug)]
pub enum ParsedLine {
    /// Whitespace-only line; skipped without being an error.
    Empty,
    Message(Box<MessageRecord>),
    Error(ParseError),
}

/// Parse one raw log line. `line_number` is 1-indexed.
///
/// All failures come back as `ParsedLine::Error` values so callers can keep
/// streaming; this function itself never fails. A record without a message
/// id is an error rather than a message, since nothing downstream could
/// deduplicate or track it.
pub fn parse_line(line: &str, line_number: usize) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ParsedLine::Empty;
    }

    let record: RawRecord = match serde_json::from_str(trimmed) {
        Ok(record) => record,
        Err(_) => {
            return ParsedLine::Error(ParseError::new(
                line_number,
                format!("malformed content at line {}", line_number),
                line,
            ));
        }
    };

    let message = record.message.unwrap_or_default();
    let Some(message_id) = message.id else {
        return ParsedLine::Error(ParseError::new(
            line_number,
            format!("missing message id at line {}", line_number),
            line,
        ));
    };

    let usage = message
        .usage
        .map(|raw| {
            TokenUsage::from_raw(
                raw.input_tokens,
                raw.cache_creation_input_tokens,
                raw.cache_read_input_tokens,
                raw.output_tokens,
            )
        })
        .unwrap_or_default();

    ParsedLine::Message(Box::new(MessageRecord {
        message_id,
        timestamp: record
            .timestamp
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
        is_sidechain: record.is_sidechain,
        role: message.role.unwrap_or_else(|| "unknown".to_string()),
        model: message.model.unwrap_or_else(|| "unknown".to_string()),
        cost: pricing::cost_of(Some(&usage)),
        usage,
        content: message.content.and_then(flatten_content),
        session_id: record.session_id,
        agent_id: record.agent_id,
        parent_uuid: record.parent_uuid,
    }))
}

/// Plain strings pass through; block lists keep only `text` blocks,
/// newline-joined. Non-text blocks are ignored, not errors.
fn flatten_content(content: RawContent) -> Option<String> {
    match content {
        RawContent::Text(text) => Some(text),
        RawContent::Blocks(blocks) => {
            let parts: Vec<String> = blocks
                .into_iter()
                .filter_map(|block| match block {
                    RawBlock::Text { text } => text,
                    RawBlock::Unknown => None,
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("\n"))
            }
        }
        RawContent::Other(_) => None,
    }
}
