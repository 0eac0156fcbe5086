use costscope_types::Snapshot;
use std::sync::{Arc, Mutex};

/// Single-slot cache for the last successful snapshot.
///
/// Cold until a scan succeeds, warm afterwards until cleared. The lock is
/// held only to read or swap the slot, never across a scan, so concurrent
/// scans run independently and the last one to finish wins. A failed scan
/// never touches the slot.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    slot: Mutex<Option<Arc<Snapshot>>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached snapshot, if warm.
    pub fn get(&self) -> Option<Arc<Snapshot>> {
        self.slot.lock().unwrap().clone()
    }

    /// Replace the slot with a fresh snapshot.
    pub fn store(&self, snapshot: Arc<Snapshot>) {
        *self.slot.lock().unwrap() = Some(snapshot);
    }

    /// Unconditionally drop back to cold.
    pub fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }

    pub fn is_warm(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Arc<Snapshot> {
        Arc::new(Snapshot {
            projects: Vec::new(),
            scanned_at: "2026-01-01T00:00:00Z".to_string(),
            scan_duration_ms: 1,
            total_projects: 0,
        })
    }

    #[test]
    fn starts_cold() {
        let cache = SnapshotCache::new();
        assert!(!cache.is_warm());
        assert!(cache.get().is_none());
    }

    #[test]
    fn store_makes_it_warm_and_get_returns_the_same_snapshot() {
        let cache = SnapshotCache::new();
        let stored = snapshot();
        cache.store(Arc::clone(&stored));
        assert!(cache.is_warm());
        assert!(Arc::ptr_eq(&cache.get().unwrap(), &stored));
    }

    #[test]
    fn clear_always_returns_to_cold() {
        let cache = SnapshotCache::new();
        cache.clear();
        assert!(!cache.is_warm());

        cache.store(snapshot());
        cache.clear();
        assert!(!cache.is_warm());
    }

    #[test]
    fn store_replaces_rather_than_merges() {
        let cache = SnapshotCache::new();
        let first = snapshot();
        let second = snapshot();
        cache.store(Arc::clone(&first));
        cache.store(Arc::clone(&second));
        assert!(Arc::ptr_eq(&cache.get().unwrap(), &second));
    }
}
