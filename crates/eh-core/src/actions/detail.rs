use eh_client::{AppError, ArchiveFunds, DetailPayload};
use std::collections::BTreeMap;

/// Gallery detail page actions
#[derive(Debug, Clone, PartialEq)]
pub enum DetailAction {
    FetchGalleryDetail { gid: String },
    FetchGalleryDetailDone {
        gid: String,
        result: Result<DetailPayload, AppError>,
    },
    FetchGalleryArchiveFunds { gid: String },
    FetchGalleryArchiveFundsDone(Result<ArchiveFunds, AppError>),
    /// Fetch the detail page holding preview `index`
    FetchGalleryPreviews { gid: String, index: u32 },
    FetchGalleryPreviewsDone {
        gid: String,
        page: u32,
        result: Result<BTreeMap<u32, String>, AppError>,
    },
}

impl DetailAction {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            DetailAction::FetchGalleryDetailDone { result: Err(_), .. }
                | DetailAction::FetchGalleryArchiveFundsDone(Err(_))
                | DetailAction::FetchGalleryPreviewsDone { result: Err(_), .. }
        )
    }
}
