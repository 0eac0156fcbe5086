use crate::stream::parse_file;
use costscope_types::{MessageRecord, SessionSummary, round4};
use std::path::Path;

/// Reduce one log file into a session summary.
///
/// Returns `None` when the file is unreadable or yields no usable messages;
/// such a file contributes nothing to its project rather than producing an
/// empty session.
pub async fn aggregate_file(path: &Path) -> Option<SessionSummary> {
    let parsed = parse_file(path).await.ok()?;
    summarize(path, &parsed.messages)
}

/// Summarize an already-parsed message list. `None` when the list is empty.
pub fn summarize(path: &Path, messages: &[MessageRecord]) -> Option<SessionSummary> {
    let first_message = messages.first()?;

    let message_count = messages.len();
    let sidechain_count = messages.iter().filter(|m| m.is_sidechain).count();
    let sidechain_percentage =
        ((sidechain_count as f64 / message_count as f64) * 100.0).round() as u8;

    let total_cost = round4(messages.iter().map(|m| m.cost).sum());
    let total_tokens = messages.iter().map(|m| m.usage.total()).sum();

    // ISO-8601 strings order lexicographically; no timezone parsing here.
    let first_message_time = messages.iter().map(|m| m.timestamp.as_str()).min()?;
    let last_message_time = messages.iter().map(|m| m.timestamp.as_str()).max()?;

    let session_id = first_message
        .session_id
        .clone()
        .unwrap_or_else(|| "unknown".to_string());

    Some(SessionSummary {
        filename: path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string()),
        session_id,
        message_count,
        total_cost,
        sidechain_count,
        sidechain_percentage,
        total_tokens,
        first_message_time: first_message_time.to_string(),
        last_message_time: last_message_time.to_string(),
    })
}
