use crate::log::ScanLog;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect every `.jsonl` file under `dir`, sorted so repeated
/// scans of an unchanged tree produce identical output.
///
/// Unreadable entries (permissions on a subtree, dangling links) are warned
/// about and skipped; they never abort the walk.
pub fn log_files_under(dir: &Path, log: &dyn ScanLog) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log.warn(&format!(
                    "skipping unreadable entry under {}: {}",
                    dir.display(),
                    err
                ));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_none_or(|ext| ext != "jsonl") {
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort();
    files
}
