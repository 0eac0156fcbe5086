use crate::session::SessionSummary;
use serde::{Deserialize, Serialize};

/// Aggregate over every session found under one project directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub name: String,
    pub path: String,
    pub total_sessions: usize,
    /// Session costs are summed first and rounded once, at this level.
    pub total_cost: f64,
    /// Max of the sessions' `last_message_time`.
    pub last_activity: String,
    pub sessions: Vec<SessionSummary>,
}

/// Complete, immutable result of one scan pass over all projects. A scan
/// either yields one of these or an explicit failure; partial snapshots do
/// not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub projects: Vec<ProjectSummary>,
    pub scanned_at: String,
    pub scan_duration_ms: u64,
    pub total_projects: usize,
}

/// Outcome of an explicit refresh (cache drop plus uncached rescan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReport {
    pub scanned_at: String,
    pub duration_ms: u64,
    pub projects_scanned: usize,
}
