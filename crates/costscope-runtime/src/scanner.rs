use crate::log::ScanLog;
use crate::walker::log_files_under;
use crate::{Error, Result};
use chrono::Utc;
use costscope_engine::aggregate_file;
use costscope_types::{ProjectSummary, SessionSummary, Snapshot, round4};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Aggregate every log file under one project directory, one task per file.
///
/// Files that are unreadable or hold no usable messages simply contribute
/// no session; this function does not fail on their account.
pub async fn scan_project(
    name: &str,
    path: &Path,
    log: Arc<dyn ScanLog>,
) -> Result<ProjectSummary> {
    let files = log_files_under(path, log.as_ref());

    let tasks = files
        .into_iter()
        .map(|file| tokio::spawn(async move { aggregate_file(&file).await }));

    let mut sessions: Vec<SessionSummary> = Vec::new();
    for joined in join_all(tasks).await {
        if let Some(session) = joined.map_err(Error::Join)? {
            sessions.push(session);
        }
    }

    // Newest activity first; filename breaks ties so rescans are stable.
    sessions.sort_by(|a, b| {
        b.last_message_time
            .cmp(&a.last_message_time)
            .then_with(|| a.filename.cmp(&b.filename))
    });

    let total_cost = round4(sessions.iter().map(|s| s.total_cost).sum());
    let last_activity = sessions
        .iter()
        .map(|s| s.last_message_time.clone())
        .max()
        // Unreachable once zero-session projects are filtered out, but a
        // project must never panic for being empty.
        .unwrap_or_else(|| Utc::now().to_rfc3339());

    Ok(ProjectSummary {
        name: name.to_string(),
        path: path.to_string_lossy().to_string(),
        total_sessions: sessions.len(),
        total_cost,
        last_activity,
        sessions,
    })
}

/// Scan every project directory under the root and assemble a snapshot.
///
/// The root must exist and be a directory; that is the only terminal
/// failure. Individual project directories that fail to scan are warned
/// about and skipped, and projects with zero sessions are dropped.
pub async fn scan_root(root: &Path, log: Arc<dyn ScanLog>) -> Result<Snapshot> {
    match tokio::fs::metadata(root).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(Error::RootAccess {
                path: root.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::RootNotFound(root.to_path_buf()));
        }
        Err(err) => {
            return Err(Error::RootAccess {
                path: root.to_path_buf(),
                reason: err.to_string(),
            });
        }
    }

    let started = Instant::now();
    let dirs = project_dirs(root, log.as_ref()).await?;

    let tasks = dirs.into_iter().map(|(name, path)| {
        let log = Arc::clone(&log);
        tokio::spawn(async move { scan_project(&name, &path, log).await })
    });

    let mut projects: Vec<ProjectSummary> = Vec::new();
    for joined in join_all(tasks).await {
        match joined {
            Ok(Ok(project)) => {
                if project.total_sessions > 0 {
                    projects.push(project);
                }
            }
            Ok(Err(err)) => log.warn(&format!("skipping project: {}", err)),
            Err(err) => log.warn(&format!("project scan task failed: {}", err)),
        }
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Snapshot {
        total_projects: projects.len(),
        projects,
        scanned_at: Utc::now().to_rfc3339(),
        scan_duration_ms: started.elapsed().as_millis() as u64,
    })
}

/// Immediate subdirectories of the root, each a candidate project. Sorted
/// by name for reproducible fan-out.
async fn project_dirs(root: &Path, log: &dyn ScanLog) -> Result<Vec<(String, PathBuf)>> {
    let mut reader = tokio::fs::read_dir(root)
        .await
        .map_err(|err| Error::RootAccess {
            path: root.to_path_buf(),
            reason: err.to_string(),
        })?;

    let mut dirs = Vec::new();
    loop {
        match reader.next_entry().await {
            Ok(Some(entry)) => match entry.file_type().await {
                Ok(file_type) if file_type.is_dir() => {
                    let name = entry.file_name().to_string_lossy().to_string();
                    dirs.push((name, entry.path()));
                }
                Ok(_) => {}
                Err(err) => log.warn(&format!(
                    "skipping unreadable entry {}: {}",
                    entry.path().display(),
                    err
                )),
            },
            Ok(None) => break,
            Err(err) => {
                log.warn(&format!(
                    "stopping enumeration under {}: {}",
                    root.display(),
                    err
                ));
                break;
            }
        }
    }

    dirs.sort();
    Ok(dirs)
}
