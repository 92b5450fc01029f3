//! Gallery listing actions
//!
//! Each paginated list has a first-page trigger, a "more" trigger and a
//! `Done` for each. Keyed families carry their key in every variant. A
//! "more" `Done` carries the list generation it was started in; results
//! from an older generation are discarded.

use eh_client::{AppError, Gallery, ListPage, ToplistsType};

use crate::state::ListKey;

#[derive(Debug, Clone, PartialEq)]
pub enum HomeAction {
    // Reverse lookup
    /// Resolve a pasted gallery or image page link
    FetchGalleryByUrl { url: String, is_gallery_url: bool },
    FetchGalleryByUrlDone {
        gid: String,
        result: Result<Gallery, AppError>,
    },

    // Search
    FetchSearchItems { keyword: String },
    FetchSearchItemsDone {
        keyword: String,
        result: Result<ListPage, AppError>,
    },
    FetchMoreSearchItems { keyword: String },
    FetchMoreSearchItemsDone {
        keyword: String,
        generation: u64,
        result: Result<ListPage, AppError>,
    },

    // Frontpage
    FetchFrontpageItems,
    FetchFrontpageItemsDone(Result<ListPage, AppError>),
    FetchMoreFrontpageItems,
    FetchMoreFrontpageItemsDone {
        generation: u64,
        result: Result<ListPage, AppError>,
    },

    // Popular (single page)
    FetchPopularItems,
    FetchPopularItemsDone(Result<ListPage, AppError>),

    // Watched
    FetchWatchedItems,
    FetchWatchedItemsDone(Result<ListPage, AppError>),
    FetchMoreWatchedItems,
    FetchMoreWatchedItemsDone {
        generation: u64,
        result: Result<ListPage, AppError>,
    },

    // Favorites, keyed by folder index (-1 for all folders)
    FetchFavoritesItems(i32),
    FetchFavoritesItemsDone {
        index: i32,
        result: Result<ListPage, AppError>,
    },
    FetchMoreFavoritesItems(i32),
    FetchMoreFavoritesItemsDone {
        index: i32,
        generation: u64,
        result: Result<ListPage, AppError>,
    },

    // Toplists, keyed by ranking period
    FetchToplistsItems(ToplistsType),
    FetchToplistsItemsDone {
        toplists_type: ToplistsType,
        result: Result<ListPage, AppError>,
    },
    FetchMoreToplistsItems(ToplistsType),
    FetchMoreToplistsItemsDone {
        toplists_type: ToplistsType,
        generation: u64,
        result: Result<ListPage, AppError>,
    },

    /// Delayed "more" fetch after an empty page
    ///
    /// Dropped when `generation` no longer matches the list, i.e. the list
    /// was reset by a fresh first-page fetch in the meantime.
    GapSkipRetry {
        list: ListKey,
        generation: u64,
        retry: Box<HomeAction>,
    },
}

impl HomeAction {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            HomeAction::FetchGalleryByUrlDone { result: Err(_), .. }
                | HomeAction::FetchSearchItemsDone { result: Err(_), .. }
                | HomeAction::FetchMoreSearchItemsDone { result: Err(_), .. }
                | HomeAction::FetchFrontpageItemsDone(Err(_))
                | HomeAction::FetchMoreFrontpageItemsDone { result: Err(_), .. }
                | HomeAction::FetchPopularItemsDone(Err(_))
                | HomeAction::FetchWatchedItemsDone(Err(_))
                | HomeAction::FetchMoreWatchedItemsDone { result: Err(_), .. }
                | HomeAction::FetchFavoritesItemsDone { result: Err(_), .. }
                | HomeAction::FetchMoreFavoritesItemsDone { result: Err(_), .. }
                | HomeAction::FetchToplistsItemsDone { result: Err(_), .. }
                | HomeAction::FetchMoreToplistsItemsDone { result: Err(_), .. }
        )
    }

    /// Listing page carried by a successful list `Done`
    pub fn list_page(&self) -> Option<&ListPage> {
        match self {
            HomeAction::FetchSearchItemsDone { result: Ok(page), .. }
            | HomeAction::FetchMoreSearchItemsDone { result: Ok(page), .. }
            | HomeAction::FetchFrontpageItemsDone(Ok(page))
            | HomeAction::FetchMoreFrontpageItemsDone { result: Ok(page), .. }
            | HomeAction::FetchPopularItemsDone(Ok(page))
            | HomeAction::FetchWatchedItemsDone(Ok(page))
            | HomeAction::FetchMoreWatchedItemsDone { result: Ok(page), .. }
            | HomeAction::FetchFavoritesItemsDone { result: Ok(page), .. }
            | HomeAction::FetchMoreFavoritesItemsDone { result: Ok(page), .. }
            | HomeAction::FetchToplistsItemsDone { result: Ok(page), .. }
            | HomeAction::FetchMoreToplistsItemsDone { result: Ok(page), .. } => Some(page),
            _ => None,
        }
    }
}
