//! Commands
//!
//! A `Command` describes one unit of asynchronous work with only the plain
//! values the reducer extracted from state. Running it against a
//! `GalleryClient` always yields exactly one `*Done` action.

use chrono::{DateTime, Utc};
use eh_client::{
    Filter, GalleryClient, PageCursor, RateRequest, ToplistsType, TranslatableLanguage,
    VoteRequest,
};
use std::collections::BTreeMap;

use crate::actions::{
    AccountAction, Action, ContentAction, DetailAction, HomeAction, SettingsAction,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Profile
    FetchTagTranslator {
        language: TranslatableLanguage,
        updated_date: DateTime<Utc>,
    },
    FetchGreeting,
    FetchUserInfo { uid: String },
    FetchFavoriteNames,
    FetchGalleryByUrl {
        gid: String,
        url: String,
        is_gallery_url: bool,
    },

    // Listings
    FetchSearchItems { keyword: String, filter: Filter },
    FetchMoreSearchItems {
        keyword: String,
        filter: Filter,
        cursor: PageCursor,
        generation: u64,
    },
    FetchFrontpageItems,
    FetchMoreFrontpageItems { cursor: PageCursor, generation: u64 },
    FetchPopularItems,
    FetchWatchedItems,
    FetchMoreWatchedItems { cursor: PageCursor, generation: u64 },
    FetchFavoritesItems { index: i32 },
    FetchMoreFavoritesItems {
        index: i32,
        cursor: PageCursor,
        generation: u64,
    },
    FetchToplistsItems { toplists_type: ToplistsType },
    FetchMoreToplistsItems {
        toplists_type: ToplistsType,
        page: u32,
        generation: u64,
    },

    // Gallery
    FetchGalleryDetail { gid: String, gallery_url: String },
    FetchGalleryArchiveFunds { gid: String, gallery_url: String },
    FetchGalleryPreviews { gid: String, url: String, page: u32 },
    FetchThumbnailUrls { gid: String, url: String, page: u32 },
    FetchGalleryNormalContents {
        gid: String,
        page: u32,
        thumbnails: BTreeMap<u32, String>,
    },
    FetchMpvKeys {
        gid: String,
        page: u32,
        mpv_url: String,
    },
    FetchGalleryMpvContent {
        gid: String,
        gid_value: i64,
        index: u32,
        mpv_key: String,
        image_key: String,
    },

    // Account
    CreateEhProfile { name: String },
    VerifyEhProfile,
    AddFavorite {
        gid: String,
        token: String,
        fav_index: i32,
    },
    DeleteFavorite { gid: String },
    Rate { gid: String, request: RateRequest },
    Comment {
        gid: String,
        gallery_url: String,
        content: String,
    },
    EditComment {
        gid: String,
        gallery_url: String,
        comment_id: String,
        content: String,
    },
    VoteComment { gid: String, request: VoteRequest },
}

impl Command {
    /// Perform the work and wrap the outcome in the matching `Done` action
    pub async fn run(self, client: &dyn GalleryClient) -> Action {
        match self {
            Command::FetchTagTranslator {
                language,
                updated_date,
            } => SettingsAction::FetchTagTranslatorDone(
                client.fetch_tag_translator(language, updated_date).await,
            )
            .into(),
            Command::FetchGreeting => {
                SettingsAction::FetchGreetingDone(client.fetch_greeting().await).into()
            }
            Command::FetchUserInfo { uid } => {
                SettingsAction::FetchUserInfoDone(client.fetch_user_info(&uid).await).into()
            }
            Command::FetchFavoriteNames => {
                SettingsAction::FetchFavoriteNamesDone(client.fetch_favorite_names().await).into()
            }
            Command::FetchGalleryByUrl {
                gid,
                url,
                is_gallery_url,
            } => {
                let result = client.fetch_gallery_by_url(&url, is_gallery_url).await;
                HomeAction::FetchGalleryByUrlDone { gid, result }.into()
            }

            Command::FetchSearchItems { keyword, filter } => {
                let result = client.fetch_search_items(&keyword, &filter, None).await;
                HomeAction::FetchSearchItemsDone { keyword, result }.into()
            }
            Command::FetchMoreSearchItems {
                keyword,
                filter,
                cursor,
                generation,
            } => {
                let result = client
                    .fetch_search_items(&keyword, &filter, Some(&cursor))
                    .await;
                HomeAction::FetchMoreSearchItemsDone {
                    keyword,
                    generation,
                    result,
                }
                .into()
            }
            Command::FetchFrontpageItems => {
                HomeAction::FetchFrontpageItemsDone(client.fetch_frontpage_items(None).await)
                    .into()
            }
            Command::FetchMoreFrontpageItems { cursor, generation } => {
                let result = client.fetch_frontpage_items(Some(&cursor)).await;
                HomeAction::FetchMoreFrontpageItemsDone { generation, result }.into()
            }
            Command::FetchPopularItems => {
                HomeAction::FetchPopularItemsDone(client.fetch_popular_items().await).into()
            }
            Command::FetchWatchedItems => {
                HomeAction::FetchWatchedItemsDone(client.fetch_watched_items(None).await).into()
            }
            Command::FetchMoreWatchedItems { cursor, generation } => {
                let result = client.fetch_watched_items(Some(&cursor)).await;
                HomeAction::FetchMoreWatchedItemsDone { generation, result }.into()
            }
            Command::FetchFavoritesItems { index } => {
                let result = client.fetch_favorites_items(index, None).await;
                HomeAction::FetchFavoritesItemsDone { index, result }.into()
            }
            Command::FetchMoreFavoritesItems {
                index,
                cursor,
                generation,
            } => {
                let result = client.fetch_favorites_items(index, Some(&cursor)).await;
                HomeAction::FetchMoreFavoritesItemsDone {
                    index,
                    generation,
                    result,
                }
                .into()
            }
            Command::FetchToplistsItems { toplists_type } => {
                let result = client.fetch_toplists_items(toplists_type, None).await;
                HomeAction::FetchToplistsItemsDone {
                    toplists_type,
                    result,
                }
                .into()
            }
            Command::FetchMoreToplistsItems {
                toplists_type,
                page,
                generation,
            } => {
                let result = client.fetch_toplists_items(toplists_type, Some(page)).await;
                HomeAction::FetchMoreToplistsItemsDone {
                    toplists_type,
                    generation,
                    result,
                }
                .into()
            }

            Command::FetchGalleryDetail { gid, gallery_url } => {
                let result = client.fetch_gallery_detail(&gallery_url).await;
                DetailAction::FetchGalleryDetailDone { gid, result }.into()
            }
            Command::FetchGalleryArchiveFunds { gallery_url, .. } => {
                DetailAction::FetchGalleryArchiveFundsDone(
                    client.fetch_archive_funds(&gallery_url).await,
                )
                .into()
            }
            Command::FetchGalleryPreviews { gid, url, page } => {
                let result = client.fetch_gallery_previews(&url).await;
                DetailAction::FetchGalleryPreviewsDone { gid, page, result }.into()
            }
            Command::FetchThumbnailUrls { gid, url, page } => {
                let result = client.fetch_thumbnail_urls(&url).await;
                ContentAction::FetchThumbnailUrlsDone { gid, page, result }.into()
            }
            Command::FetchGalleryNormalContents {
                gid,
                page,
                thumbnails,
            } => {
                let result = client.fetch_gallery_normal_contents(&thumbnails).await;
                ContentAction::FetchGalleryNormalContentsDone { gid, page, result }.into()
            }
            Command::FetchMpvKeys { gid, page, mpv_url } => {
                let result = client.fetch_mpv_keys(&mpv_url).await;
                ContentAction::FetchMpvKeysDone { gid, page, result }.into()
            }
            Command::FetchGalleryMpvContent {
                gid,
                gid_value,
                index,
                mpv_key,
                image_key,
            } => {
                let result = client
                    .fetch_gallery_mpv_content(gid_value, index, &mpv_key, &image_key)
                    .await;
                ContentAction::FetchGalleryMpvContentDone { gid, index, result }.into()
            }

            Command::CreateEhProfile { name } => {
                AccountAction::CreateEhProfileDone(client.create_profile(&name).await).into()
            }
            Command::VerifyEhProfile => {
                AccountAction::VerifyEhProfileDone(client.verify_profile().await).into()
            }
            Command::AddFavorite {
                gid,
                token,
                fav_index,
            } => {
                let result = client.add_favorite(&gid, &token, fav_index).await;
                AccountAction::AddFavoriteDone { gid, result }.into()
            }
            Command::DeleteFavorite { gid } => {
                let result = client.delete_favorite(&gid).await;
                AccountAction::DeleteFavoriteDone { gid, result }.into()
            }
            Command::Rate { gid, request } => {
                let result = client.rate(&request).await;
                AccountAction::RateDone { gid, result }.into()
            }
            Command::Comment {
                gid,
                gallery_url,
                content,
            } => {
                let result = client.comment(&gallery_url, &content).await;
                AccountAction::CommentDone { gid, result }.into()
            }
            Command::EditComment {
                gid,
                gallery_url,
                comment_id,
                content,
            } => {
                let result = client
                    .edit_comment(&gallery_url, &comment_id, &content)
                    .await;
                AccountAction::EditCommentDone { gid, result }.into()
            }
            Command::VoteComment { gid, request } => {
                let result = client.vote_comment(&request).await;
                AccountAction::VoteCommentDone { gid, result }.into()
            }
        }
    }
}
