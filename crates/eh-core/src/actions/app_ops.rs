//! App operation actions
//!
//! Synchronous bookkeeping: settings, search history, cached per-gallery data
//! and cross-screen jump hints.

use eh_client::{AppIconType, Setting};

#[derive(Debug, Clone, PartialEq)]
pub enum AppOpsAction {
    ResetUser,
    ResetFilters,
    SaveReadingProgress { gid: String, progress: u32 },
    /// Bytes currently used by the image cache
    UpdateDiskImageCacheSize(u64),
    UpdateAppIconType(AppIconType),
    /// Record a submitted search keyword
    UpdateHistoryKeywords(String),
    ClearHistoryKeywords,
    UpdateSearchKeyword(String),
    UpdateSetting(Setting),
    ReplaceGalleryCommentJumpId(Option<String>),
    UpdateIsSlideMenuClosed(bool),
    /// Load stored previews of a gallery into state
    FulfillGalleryPreviews { gid: String },
    /// Load stored contents and thumbnails of a gallery into state
    FulfillGalleryContents { gid: String },
    /// `None` clears the corresponding hint
    UpdatePendingJumpInfos {
        gid: String,
        page_index: Option<u32>,
        comment_id: Option<String>,
    },
}
