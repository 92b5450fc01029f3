//! Persistence collaborator
//!
//! The state core treats the store as durable, idempotent upserts keyed by
//! gallery id. Reads may fail softly; writes that fail are fatal for the
//! caller.

use eh_client::{AppEnv, Gallery, GalleryDetail, GalleryState};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A writer panicked while holding the store lock
    #[error("store lock poisoned")]
    Poisoned,
}

/// Gallery store keyed by gallery id
pub trait Persistence: Send + Sync {
    /// Upsert listing records
    fn add_galleries(&self, galleries: &[Gallery]) -> Result<(), PersistenceError>;

    fn fetch_gallery(&self, gid: &str) -> Result<Option<Gallery>, PersistenceError>;

    fn add_detail(&self, detail: &GalleryDetail) -> Result<(), PersistenceError>;

    fn fetch_detail(&self, gid: &str) -> Result<Option<GalleryDetail>, PersistenceError>;

    /// Merge freshly fetched per-gallery state into the stored one
    ///
    /// Empty collections and `None` in `state` leave the stored values alone.
    fn update_fetched_state(&self, state: &GalleryState) -> Result<(), PersistenceError>;

    /// Merge page contents; new values win
    fn update_contents(
        &self,
        gid: &str,
        contents: &BTreeMap<u32, String>,
    ) -> Result<(), PersistenceError>;

    fn update_reading_progress(&self, gid: &str, progress: u32) -> Result<(), PersistenceError>;

    /// Stored state for `gid`, or an empty one when nothing is stored
    fn fetch_gallery_state_non_nil(&self, gid: &str) -> Result<GalleryState, PersistenceError>;

    fn fetch_app_env(&self) -> Result<AppEnv, PersistenceError>;

    fn update_app_env(&self, env: &AppEnv) -> Result<(), PersistenceError>;
}

/// Merge `new` into `stored` following the `update_fetched_state` rules
pub(crate) fn merge_fetched_state(stored: &mut GalleryState, new: &GalleryState) {
    if !new.tags.is_empty() {
        stored.tags = new.tags.clone();
    }
    if !new.comments.is_empty() {
        stored.comments = new.comments.clone();
    }
    if new.preview_config.is_some() {
        stored.preview_config = new.preview_config;
    }
    stored
        .previews
        .extend(new.previews.iter().map(|(k, v)| (*k, v.clone())));
    stored
        .thumbnails
        .extend(new.thumbnails.iter().map(|(k, v)| (*k, v.clone())));
    stored
        .contents
        .extend(new.contents.iter().map(|(k, v)| (*k, v.clone())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use eh_client::{GalleryTag, PreviewConfig};

    #[test]
    fn test_merge_keeps_stored_when_new_is_empty() {
        let mut stored = GalleryState::new("1");
        stored.tags = vec![GalleryTag {
            namespace: "artist".to_string(),
            content: vec!["someone".to_string()],
        }];
        stored.preview_config = Some(PreviewConfig::Large { rows: 2 });
        stored.previews.insert(0, "a".to_string());

        let mut new = GalleryState::new("1");
        new.previews.insert(1, "b".to_string());
        merge_fetched_state(&mut stored, &new);

        assert_eq!(stored.tags.len(), 1);
        assert_eq!(stored.preview_config, Some(PreviewConfig::Large { rows: 2 }));
        assert_eq!(stored.previews.len(), 2);
    }
}
