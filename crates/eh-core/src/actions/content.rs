//! Reading content actions
//!
//! Loading one page of contents is a chain: thumbnails first, then either
//! the normal image pages or the multi-page viewer keys depending on what
//! the thumbnails link to.

use eh_client::{AppError, MpvKeys};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentAction {
    /// Fetch the image page links of the detail page holding image `index`
    FetchThumbnailUrls { gid: String, index: u32 },
    FetchThumbnailUrlsDone {
        gid: String,
        page: u32,
        result: Result<BTreeMap<u32, String>, AppError>,
    },
    FetchGalleryNormalContents {
        gid: String,
        page: u32,
        thumbnails: BTreeMap<u32, String>,
    },
    FetchGalleryNormalContentsDone {
        gid: String,
        page: u32,
        result: Result<BTreeMap<u32, String>, AppError>,
    },
    FetchMpvKeys {
        gid: String,
        page: u32,
        mpv_url: String,
    },
    FetchMpvKeysDone {
        gid: String,
        page: u32,
        result: Result<MpvKeys, AppError>,
    },
    FetchGalleryMpvContent { gid: String, index: u32 },
    FetchGalleryMpvContentDone {
        gid: String,
        index: u32,
        result: Result<String, AppError>,
    },
}

impl ContentAction {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ContentAction::FetchThumbnailUrlsDone { result: Err(_), .. }
                | ContentAction::FetchGalleryNormalContentsDone { result: Err(_), .. }
                | ContentAction::FetchMpvKeysDone { result: Err(_), .. }
                | ContentAction::FetchGalleryMpvContentDone { result: Err(_), .. }
        )
    }
}
