//! Orchestration for the costscope scan pipeline: recursive log discovery,
//! concurrent per-project scanning, the single-slot snapshot cache, and the
//! on-demand detail lookups that bypass it.
//!
//! Control flows top-down (root scan fans out to projects, projects fan out
//! to files) while failures are absorbed bottom-up: a bad line never fails
//! its file, a bad file never fails its project, and a bad project never
//! fails the scan. Only a missing or inaccessible root is terminal, and
//! even that is an error value, not a panic.

pub mod cache;
pub mod client;
pub mod config;
mod error;
pub mod log;
pub mod lookup;
pub mod scanner;
pub mod walker;

pub use cache::SnapshotCache;
pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use log::{NullLog, ScanLog, StderrLog};
pub use lookup::DetailLookup;
