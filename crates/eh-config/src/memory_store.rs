//! In-memory gallery store

use eh_client::{AppEnv, Gallery, GalleryDetail, GalleryState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::persistence::{merge_fetched_state, Persistence, PersistenceError};

/// Everything the store holds, in a serializable form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StoreSnapshot {
    pub galleries: BTreeMap<String, Gallery>,
    pub details: BTreeMap<String, GalleryDetail>,
    pub states: BTreeMap<String, GalleryState>,
    pub app_env: AppEnv,
}

/// Mutex-backed store, shared between the state loop and command tasks
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<StoreSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    pub(crate) fn snapshot(&self) -> Result<StoreSnapshot, PersistenceError> {
        Ok(self.lock()?.clone())
    }

    /// Number of listing records stored
    pub fn gallery_count(&self) -> usize {
        self.lock().map(|inner| inner.galleries.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreSnapshot>, PersistenceError> {
        self.inner.lock().map_err(|_| PersistenceError::Poisoned)
    }
}

impl Persistence for MemoryStore {
    fn add_galleries(&self, galleries: &[Gallery]) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        for gallery in galleries {
            inner.galleries.insert(gallery.gid.clone(), gallery.clone());
        }
        Ok(())
    }

    fn fetch_gallery(&self, gid: &str) -> Result<Option<Gallery>, PersistenceError> {
        Ok(self.lock()?.galleries.get(gid).cloned())
    }

    fn add_detail(&self, detail: &GalleryDetail) -> Result<(), PersistenceError> {
        self.lock()?
            .details
            .insert(detail.gid.clone(), detail.clone());
        Ok(())
    }

    fn fetch_detail(&self, gid: &str) -> Result<Option<GalleryDetail>, PersistenceError> {
        Ok(self.lock()?.details.get(gid).cloned())
    }

    fn update_fetched_state(&self, state: &GalleryState) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        let stored = inner
            .states
            .entry(state.gid.clone())
            .or_insert_with(|| GalleryState::new(state.gid.clone()));
        merge_fetched_state(stored, state);
        Ok(())
    }

    fn update_contents(
        &self,
        gid: &str,
        contents: &BTreeMap<u32, String>,
    ) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        let stored = inner
            .states
            .entry(gid.to_string())
            .or_insert_with(|| GalleryState::new(gid));
        stored
            .contents
            .extend(contents.iter().map(|(k, v)| (*k, v.clone())));
        Ok(())
    }

    fn update_reading_progress(&self, gid: &str, progress: u32) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        inner
            .states
            .entry(gid.to_string())
            .or_insert_with(|| GalleryState::new(gid))
            .reading_progress = progress;
        Ok(())
    }

    fn fetch_gallery_state_non_nil(&self, gid: &str) -> Result<GalleryState, PersistenceError> {
        Ok(self
            .lock()?
            .states
            .get(gid)
            .cloned()
            .unwrap_or_else(|| GalleryState::new(gid)))
    }

    fn fetch_app_env(&self) -> Result<AppEnv, PersistenceError> {
        Ok(self.lock()?.app_env.clone())
    }

    fn update_app_env(&self, env: &AppEnv) -> Result<(), PersistenceError> {
        self.lock()?.app_env = env.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_galleries_upserts_by_gid() {
        let store = MemoryStore::new();
        store
            .add_galleries(&[Gallery::new("1", "a", "First"), Gallery::new("2", "b", "Second")])
            .unwrap();
        store
            .add_galleries(&[Gallery::new("1", "a", "Renamed")])
            .unwrap();

        assert_eq!(store.gallery_count(), 2);
        let stored = store.fetch_gallery("1").unwrap().unwrap();
        assert_eq!(stored.title, "Renamed");
        assert!(store.fetch_gallery("3").unwrap().is_none());
    }

    #[test]
    fn test_fetch_gallery_state_non_nil_defaults() {
        let store = MemoryStore::new();
        let state = store.fetch_gallery_state_non_nil("42").unwrap();
        assert_eq!(state.gid, "42");
        assert!(state.previews.is_empty());
    }

    #[test]
    fn test_update_contents_new_wins() {
        let store = MemoryStore::new();
        let first = BTreeMap::from([(0, "old".to_string()), (1, "keep".to_string())]);
        let second = BTreeMap::from([(0, "new".to_string())]);
        store.update_contents("1", &first).unwrap();
        store.update_contents("1", &second).unwrap();

        let state = store.fetch_gallery_state_non_nil("1").unwrap();
        assert_eq!(state.contents.get(&0).map(String::as_str), Some("new"));
        assert_eq!(state.contents.get(&1).map(String::as_str), Some("keep"));
    }

    #[test]
    fn test_reading_progress_and_app_env() {
        let store = MemoryStore::new();
        store.update_reading_progress("7", 12).unwrap();
        assert_eq!(
            store.fetch_gallery_state_non_nil("7").unwrap().reading_progress,
            12
        );

        let mut env = AppEnv::default();
        env.history_keywords.push("tag".to_string());
        store.update_app_env(&env).unwrap();
        assert_eq!(store.fetch_app_env().unwrap(), env);
    }
}
