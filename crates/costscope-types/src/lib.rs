//! Core domain types for costscope: token usage, parsed messages, session
//! and project summaries, and the scan snapshot. Schemas only; parsing and
//! aggregation logic live in `costscope-engine` and `costscope-runtime`.

mod message;
mod project;
mod session;
mod usage;
mod util;

pub use message::{FileStats, MessageRecord, ParseError};
pub use project::{ProjectSummary, RefreshReport, Snapshot};
pub use session::{MessageDetail, SessionDetail, SessionSummary};
pub use usage::{CacheTier, TokenUsage};
pub use util::round4;
