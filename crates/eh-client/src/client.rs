//! Gallery client trait
//!
//! This module defines the `GalleryClient` trait that the network layer
//! implements. Every method resolves to a typed `Result<T, AppError>`;
//! implementations must never panic past this boundary.

use crate::error::AppError;
use crate::types::{
    ArchiveFunds, DetailPayload, Filter, Gallery, Greeting, ListPage, MpvKeys,
    ProfileVerification, RateRequest, TagTranslator, ToplistsType, TranslatableLanguage, User,
    VoteRequest,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Position to continue a listing from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Id of the last gallery already shown
    pub last_id: String,
    /// Page to fetch
    pub page: u32,
}

impl PageCursor {
    pub fn new(last_id: impl Into<String>, page: u32) -> Self {
        Self {
            last_id: last_id.into(),
            page,
        }
    }
}

/// Gallery site client
///
/// Implementations must be `Send + Sync` so commands can share one client
/// across spawned tasks.
///
/// # Example
///
/// ```rust,ignore
/// use eh_client::{GalleryClient, PageCursor};
///
/// async fn next_page(client: &dyn GalleryClient, last_id: &str) {
///     let cursor = PageCursor::new(last_id, 2);
///     let _ = client.fetch_frontpage_items(Some(&cursor)).await;
/// }
/// ```
#[async_trait]
pub trait GalleryClient: Send + Sync {
    // === Profile ===

    /// Fetch the tag translation table unless it is older than `updated_date`
    ///
    /// Returns `AppError::NoUpdates` when the published table is not newer.
    async fn fetch_tag_translator(
        &self,
        language: TranslatableLanguage,
        updated_date: DateTime<Utc>,
    ) -> Result<TagTranslator, AppError>;

    async fn fetch_greeting(&self) -> Result<Greeting, AppError>;

    async fn fetch_user_info(&self, uid: &str) -> Result<User, AppError>;

    /// Favorite folder names keyed by folder index
    async fn fetch_favorite_names(&self) -> Result<BTreeMap<i32, String>, AppError>;

    /// Resolve a gallery or image page link to its listing record
    async fn fetch_gallery_by_url(
        &self,
        url: &str,
        is_gallery_url: bool,
    ) -> Result<Gallery, AppError>;

    // === Listings ===

    /// Search results; `cursor` is `None` for the first page
    async fn fetch_search_items(
        &self,
        keyword: &str,
        filter: &Filter,
        cursor: Option<&PageCursor>,
    ) -> Result<ListPage, AppError>;

    async fn fetch_frontpage_items(
        &self,
        cursor: Option<&PageCursor>,
    ) -> Result<ListPage, AppError>;

    /// Popular galleries; single page
    async fn fetch_popular_items(&self) -> Result<ListPage, AppError>;

    async fn fetch_watched_items(&self, cursor: Option<&PageCursor>)
        -> Result<ListPage, AppError>;

    /// Favorites of folder `index` (-1 for all folders)
    async fn fetch_favorites_items(
        &self,
        index: i32,
        cursor: Option<&PageCursor>,
    ) -> Result<ListPage, AppError>;

    /// Toplist entries; toplists paginate by page number only
    async fn fetch_toplists_items(
        &self,
        toplists_type: ToplistsType,
        page: Option<u32>,
    ) -> Result<ListPage, AppError>;

    // === Gallery ===

    async fn fetch_gallery_detail(&self, gallery_url: &str) -> Result<DetailPayload, AppError>;

    async fn fetch_archive_funds(&self, gallery_url: &str) -> Result<ArchiveFunds, AppError>;

    /// Preview image URLs of one detail page keyed by image index
    async fn fetch_gallery_previews(&self, url: &str) -> Result<BTreeMap<u32, String>, AppError>;

    /// Image page URLs of one detail page keyed by image index
    async fn fetch_thumbnail_urls(&self, url: &str) -> Result<BTreeMap<u32, String>, AppError>;

    /// Resolve image page URLs to image URLs
    async fn fetch_gallery_normal_contents(
        &self,
        thumbnails: &BTreeMap<u32, String>,
    ) -> Result<BTreeMap<u32, String>, AppError>;

    async fn fetch_mpv_keys(&self, mpv_url: &str) -> Result<MpvKeys, AppError>;

    /// Resolve one image through the multi-page viewer api
    async fn fetch_gallery_mpv_content(
        &self,
        gid: i64,
        index: u32,
        mpv_key: &str,
        image_key: &str,
    ) -> Result<String, AppError>;

    // === Account ===

    async fn create_profile(&self, name: &str) -> Result<(), AppError>;

    async fn verify_profile(&self) -> Result<ProfileVerification, AppError>;

    async fn add_favorite(&self, gid: &str, token: &str, fav_index: i32) -> Result<(), AppError>;

    async fn delete_favorite(&self, gid: &str) -> Result<(), AppError>;

    async fn rate(&self, request: &RateRequest) -> Result<(), AppError>;

    async fn comment(&self, gallery_url: &str, content: &str) -> Result<(), AppError>;

    async fn edit_comment(
        &self,
        gallery_url: &str,
        comment_id: &str,
        content: &str,
    ) -> Result<(), AppError>;

    async fn vote_comment(&self, request: &VoteRequest) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cursor_new() {
        let cursor = PageCursor::new("42", 3);
        assert_eq!(cursor.last_id, "42");
        assert_eq!(cursor.page, 3);
    }
}
