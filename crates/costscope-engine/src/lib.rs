//! The parse-and-aggregate half of the costscope pipeline: turns raw JSONL
//! log lines into typed messages, streams whole files with per-line
//! recovery, and reduces a file's messages into a session summary.
//!
//! Every line-level failure here is a value, never an error; the only
//! fallible operation is opening or reading a file.

mod error;
pub mod parser;
pub mod pricing;
mod schema;
pub mod session;
pub mod stream;

pub use error::{Error, Result};
pub use parser::{ParsedLine, parse_line};
pub use pricing::cost_of;
pub use session::{aggregate_file, summarize};
pub use stream::{ParsedFile, parse_file};
