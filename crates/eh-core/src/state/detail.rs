use eh_client::{AppError, PreviewConfig};
use std::collections::BTreeMap;

/// Detail page state, keyed by gallery id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub detail_loading: BTreeMap<String, bool>,
    pub detail_load_errors: BTreeMap<String, AppError>,
    pub archive_funds_loading: bool,
    /// gid -> image index -> preview URL
    pub previews: BTreeMap<String, BTreeMap<u32, String>>,
    /// gid -> detail page -> loading
    pub previews_loading: BTreeMap<String, BTreeMap<u32, bool>>,
    pub preview_config: PreviewConfig,

    pub pending_jump_page_indices: BTreeMap<String, u32>,
    pub pending_jump_comment_ids: BTreeMap<String, String>,
}

impl DetailState {
    pub fn is_detail_loading(&self, gid: &str) -> bool {
        self.detail_loading.get(gid).copied().unwrap_or(false)
    }

    pub fn is_previews_loading(&self, gid: &str, page: u32) -> bool {
        self.previews_loading
            .get(gid)
            .and_then(|pages| pages.get(&page))
            .copied()
            .unwrap_or(false)
    }

    /// Merge previews, keeping entries already present
    pub fn update_previews(&mut self, gid: &str, previews: &BTreeMap<u32, String>) {
        if previews.is_empty() {
            return;
        }
        let stored = self.previews.entry(gid.to_string()).or_default();
        for (index, url) in previews {
            stored.entry(*index).or_insert_with(|| url.clone());
        }
    }
}
