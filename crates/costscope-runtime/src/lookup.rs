use crate::log::ScanLog;
use crate::scanner::scan_project;
use crate::walker::log_files_under;
use crate::{Error, Result};
use costscope_engine::{parse_file, summarize};
use costscope_types::{MessageDetail, SessionDetail, SessionSummary};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// On-demand reads that bypass the snapshot cache and go back to disk,
/// because they need data the cached snapshot deliberately does not keep
/// (full message bodies).
pub struct DetailLookup<'a> {
    root: &'a Path,
    log: Arc<dyn ScanLog>,
}

impl<'a> DetailLookup<'a> {
    pub fn new(root: &'a Path, log: Arc<dyn ScanLog>) -> Self {
        Self { root, log }
    }

    /// Session list for one project, freshly derived.
    pub async fn sessions_of(&self, project: &str) -> Result<Vec<SessionSummary>> {
        let dir = self.project_dir(project).await?;
        let summary = scan_project(project, &dir, Arc::clone(&self.log)).await?;
        Ok(summary.sessions)
    }

    /// Full per-message breakdown of one session.
    ///
    /// Files are scanned sequentially: this is a single on-demand lookup,
    /// so correctness and simplicity win over fan-out here. A file matches
    /// when its first message carries the requested session id.
    pub async fn detail_of(&self, project: &str, session_id: &str) -> Result<SessionDetail> {
        let dir = self.project_dir(project).await?;

        for file in log_files_under(&dir, self.log.as_ref()) {
            let parsed = match parse_file(&file).await {
                Ok(parsed) => parsed,
                Err(err) => {
                    self.log
                        .warn(&format!("skipping unreadable file {}: {}", file.display(), err));
                    continue;
                }
            };

            let first_session_id = parsed
                .messages
                .first()
                .and_then(|message| message.session_id.as_deref());
            if first_session_id != Some(session_id) {
                continue;
            }

            let Some(summary) = summarize(&file, &parsed.messages) else {
                continue;
            };

            let messages = parsed
                .messages
                .into_iter()
                .map(|message| MessageDetail {
                    message_id: message.message_id,
                    timestamp: message.timestamp,
                    role: message.role,
                    model: message.model,
                    usage: message.usage,
                    cost: message.cost,
                    is_sidechain: message.is_sidechain,
                })
                .collect();

            return Ok(SessionDetail { summary, messages });
        }

        Err(Error::SessionNotFound {
            project: project.to_string(),
            session_id: session_id.to_string(),
        })
    }

    /// Resolve a project directory by name, or the explicit not-found value.
    async fn project_dir(&self, project: &str) -> Result<PathBuf> {
        let dir = self.root.join(project);
        match tokio::fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => Ok(dir),
            _ => Err(Error::ProjectNotFound(project.to_string())),
        }
    }
}
