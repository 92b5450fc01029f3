//! Reading content state
//!
//! All maps are two-level: gallery id, then page number or image index.
//! A missing gid entry means nothing was ever requested for that gallery.

use eh_client::AppError;
use std::collections::BTreeMap;

type PageMap<T> = BTreeMap<String, BTreeMap<u32, T>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentState {
    /// gid -> image index -> image page URL
    pub thumbnails: PageMap<String>,
    pub mpv_keys: BTreeMap<String, String>,
    pub mpv_image_keys: PageMap<String>,
    /// gid -> image index -> image URL
    pub contents: PageMap<String>,
    /// gid -> detail page -> loading
    pub contents_loading: PageMap<bool>,
    pub contents_load_errors: PageMap<AppError>,
    /// gid -> image index -> loading
    pub mpv_image_loading: PageMap<bool>,
}

/// Merge `new` into `stored[gid]`; new values win
fn merge<T: Clone>(stored: &mut PageMap<T>, gid: &str, new: &BTreeMap<u32, T>) {
    if new.is_empty() {
        return;
    }
    stored
        .entry(gid.to_string())
        .or_default()
        .extend(new.iter().map(|(k, v)| (*k, v.clone())));
}

fn flag(map: &PageMap<bool>, gid: &str, key: u32) -> bool {
    map.get(gid)
        .and_then(|pages| pages.get(&key))
        .copied()
        .unwrap_or(false)
}

impl ContentState {
    pub fn update_thumbnails(&mut self, gid: &str, thumbnails: &BTreeMap<u32, String>) {
        merge(&mut self.thumbnails, gid, thumbnails);
    }

    pub fn update_contents(&mut self, gid: &str, contents: &BTreeMap<u32, String>) {
        merge(&mut self.contents, gid, contents);
    }

    pub fn is_contents_loading(&self, gid: &str, page: u32) -> bool {
        flag(&self.contents_loading, gid, page)
    }

    pub fn is_mpv_image_loading(&self, gid: &str, index: u32) -> bool {
        flag(&self.mpv_image_loading, gid, index)
    }

    pub fn set_contents_loading(&mut self, gid: &str, page: u32, loading: bool) {
        self.contents_loading
            .entry(gid.to_string())
            .or_default()
            .insert(page, loading);
    }

    /// Mark a page as failed and no longer loading
    pub fn fail_page(&mut self, gid: &str, page: u32, error: AppError) {
        self.set_contents_loading(gid, page, false);
        self.contents_load_errors
            .entry(gid.to_string())
            .or_default()
            .insert(page, error);
    }
}
