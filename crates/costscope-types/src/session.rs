use crate::usage::TokenUsage;
use serde::{Deserialize, Serialize};

/// Summary of one session file. Derived data, rebuilt wholesale on every
/// scan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub filename: String,
    pub session_id: String,
    pub message_count: usize,
    /// Sum of per-message costs, rounded to 4 decimal places.
    pub total_cost: f64,
    pub sidechain_count: usize,
    /// 0..=100.
    pub sidechain_percentage: u8,
    pub total_tokens: u64,
    pub first_message_time: String,
    pub last_message_time: String,
}

/// One row of a session's per-message breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetail {
    pub message_id: String,
    pub timestamp: String,
    pub role: String,
    pub model: String,
    pub usage: TokenUsage,
    pub cost: f64,
    pub is_sidechain: bool,
}

/// Full on-demand view of one session: the same summary the scanner would
/// produce plus every message, re-read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    pub summary: SessionSummary,
    pub messages: Vec<MessageDetail>,
}
