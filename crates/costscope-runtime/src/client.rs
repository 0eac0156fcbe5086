use crate::cache::SnapshotCache;
use crate::config::Config;
use crate::log::{NullLog, ScanLog};
use crate::lookup::DetailLookup;
use crate::scanner::scan_root;
use crate::Result;
use costscope_types::{RefreshReport, SessionDetail, SessionSummary, Snapshot};
use std::sync::Arc;

/// Facade over the scan pipeline. Owns the snapshot cache explicitly (no
/// globals) and exposes the subsystem's four public operations.
pub struct Client {
    config: Config,
    cache: SnapshotCache,
    log: Arc<dyn ScanLog>,
}

impl Client {
    pub fn new(config: Config, log: Arc<dyn ScanLog>) -> Self {
        Self {
            config,
            cache: SnapshotCache::new(),
            log,
        }
    }

    /// Convenience constructor for embedders that want diagnostics dropped.
    pub fn with_null_log(config: Config) -> Self {
        Self::new(config, Arc::new(NullLog))
    }

    /// Full snapshot of all projects. Served from the cache when allowed
    /// and warm; otherwise a fresh scan, cached only on success.
    pub async fn scan_all(&self, use_cache: bool) -> Result<Arc<Snapshot>> {
        if use_cache && let Some(snapshot) = self.cache.get() {
            return Ok(snapshot);
        }

        let snapshot = Arc::new(scan_root(&self.config.log_root, Arc::clone(&self.log)).await?);
        self.cache.store(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Freshly derived session list for one project; bypasses the cache.
    pub async fn sessions_of(&self, project: &str) -> Result<Vec<SessionSummary>> {
        self.lookup().sessions_of(project).await
    }

    /// Full per-message breakdown for one session; bypasses the cache.
    pub async fn detail_of(&self, project: &str, session_id: &str) -> Result<SessionDetail> {
        self.lookup().detail_of(project, session_id).await
    }

    /// Drop the cache, then rescan uncached.
    ///
    /// The clear and the scan are intentionally not atomic as a pair: a
    /// concurrent cached read between them may observe the cold slot or the
    /// old snapshot for a moment. The last completed scan wins.
    pub async fn refresh(&self) -> Result<RefreshReport> {
        self.cache.clear();
        let snapshot = self.scan_all(false).await?;
        Ok(RefreshReport {
            scanned_at: snapshot.scanned_at.clone(),
            duration_ms: snapshot.scan_duration_ms,
            projects_scanned: snapshot.total_projects,
        })
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn lookup(&self) -> DetailLookup<'_> {
        DetailLookup::new(&self.config.log_root, Arc::clone(&self.log))
    }
}
