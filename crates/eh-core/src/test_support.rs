//! Fakes shared by the unit tests

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use eh_client::{
    AppError, ArchiveFunds, DetailPayload, Filter, Gallery, GalleryClient, GalleryDetail,
    GalleryState, Greeting, ListPage, MpvKeys, PageCursor, PageNumber, ProfileVerification,
    RateRequest, TagTranslator, ToplistsType, TranslatableLanguage, User, VoteRequest,
};
use eh_config::MemoryStore;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::commands::Command;
use crate::dispatcher::Dispatcher;
use crate::effect::{Context, Effect};
use crate::executor::CommandExecutor;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn gallery(gid: &str) -> Gallery {
    Gallery::new(gid, format!("token{}", gid), format!("Gallery {}", gid))
}

pub fn list_page(current: u32, maximum: u32, gids: &[&str]) -> ListPage {
    ListPage::new(
        PageNumber::new(current, maximum),
        gids.iter().map(|gid| gallery(gid)).collect(),
    )
}

/// Context with no gap-skip delay and a fixed clock
pub fn context(store: &MemoryStore) -> Context<'_> {
    Context {
        persistence: store,
        gap_skip_delay: Duration::ZERO,
        now: fixed_now(),
    }
}

pub fn commands(effects: &[Effect]) -> Vec<Command> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Command(command) => Some(command.clone()),
            _ => None,
        })
        .collect()
}

/// Gallery client returning canned data
///
/// Listing calls pop queued pages and fail with `NotFound` once the queue
/// is empty. Every call is recorded.
#[derive(Default)]
pub struct FakeClient {
    pages: Mutex<VecDeque<Result<ListPage, AppError>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, page: Result<ListPage, AppError>) {
        self.pages.lock().unwrap().push_back(page);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_page(&self) -> Result<ListPage, AppError> {
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AppError::NotFound))
    }
}

fn cursor_label(cursor: Option<&PageCursor>) -> String {
    match cursor {
        Some(cursor) => format!("{}@{}", cursor.last_id, cursor.page),
        None => "first".to_string(),
    }
}

#[async_trait]
impl GalleryClient for FakeClient {
    async fn fetch_tag_translator(
        &self,
        language: TranslatableLanguage,
        _updated_date: DateTime<Utc>,
    ) -> Result<TagTranslator, AppError> {
        self.record(format!("fetch_tag_translator({:?})", language));
        Err(AppError::NoUpdates)
    }

    async fn fetch_greeting(&self) -> Result<Greeting, AppError> {
        self.record("fetch_greeting".to_string());
        Ok(Greeting {
            gained_exp: Some(10),
            update_time: Some(fixed_now()),
            ..Greeting::default()
        })
    }

    async fn fetch_user_info(&self, uid: &str) -> Result<User, AppError> {
        self.record(format!("fetch_user_info({})", uid));
        Ok(User {
            display_name: Some("panda".to_string()),
            ..User::default()
        })
    }

    async fn fetch_favorite_names(&self) -> Result<BTreeMap<i32, String>, AppError> {
        self.record("fetch_favorite_names".to_string());
        Ok(BTreeMap::from([(0, "Favorites 0".to_string())]))
    }

    async fn fetch_gallery_by_url(
        &self,
        url: &str,
        _is_gallery_url: bool,
    ) -> Result<Gallery, AppError> {
        self.record(format!("fetch_gallery_by_url({})", url));
        Ok(gallery("1"))
    }

    async fn fetch_search_items(
        &self,
        keyword: &str,
        _filter: &Filter,
        cursor: Option<&PageCursor>,
    ) -> Result<ListPage, AppError> {
        self.record(format!(
            "fetch_search_items({}, {})",
            keyword,
            cursor_label(cursor)
        ));
        self.next_page()
    }

    async fn fetch_frontpage_items(
        &self,
        cursor: Option<&PageCursor>,
    ) -> Result<ListPage, AppError> {
        self.record(format!("fetch_frontpage_items({})", cursor_label(cursor)));
        self.next_page()
    }

    async fn fetch_popular_items(&self) -> Result<ListPage, AppError> {
        self.record("fetch_popular_items".to_string());
        self.next_page()
    }

    async fn fetch_watched_items(
        &self,
        cursor: Option<&PageCursor>,
    ) -> Result<ListPage, AppError> {
        self.record(format!("fetch_watched_items({})", cursor_label(cursor)));
        self.next_page()
    }

    async fn fetch_favorites_items(
        &self,
        index: i32,
        cursor: Option<&PageCursor>,
    ) -> Result<ListPage, AppError> {
        self.record(format!(
            "fetch_favorites_items({}, {})",
            index,
            cursor_label(cursor)
        ));
        self.next_page()
    }

    async fn fetch_toplists_items(
        &self,
        toplists_type: ToplistsType,
        page: Option<u32>,
    ) -> Result<ListPage, AppError> {
        self.record(format!("fetch_toplists_items({:?}, {:?})", toplists_type, page));
        self.next_page()
    }

    async fn fetch_gallery_detail(&self, gallery_url: &str) -> Result<DetailPayload, AppError> {
        self.record(format!("fetch_gallery_detail({})", gallery_url));
        Ok(DetailPayload {
            detail: GalleryDetail::new("1", "Detail"),
            state: GalleryState::with_previews("1", BTreeMap::from([(0, "p0".to_string())])),
            api_key: Some("apikey".to_string()),
        })
    }

    async fn fetch_archive_funds(&self, gallery_url: &str) -> Result<ArchiveFunds, AppError> {
        self.record(format!("fetch_archive_funds({})", gallery_url));
        Ok(ArchiveFunds {
            current_gp: "1000".to_string(),
            current_credits: "50".to_string(),
        })
    }

    async fn fetch_gallery_previews(&self, url: &str) -> Result<BTreeMap<u32, String>, AppError> {
        self.record(format!("fetch_gallery_previews({})", url));
        Ok(BTreeMap::from([(0, "p0".to_string())]))
    }

    async fn fetch_thumbnail_urls(&self, url: &str) -> Result<BTreeMap<u32, String>, AppError> {
        self.record(format!("fetch_thumbnail_urls({})", url));
        Ok(BTreeMap::from([(
            0,
            "https://e-hentai.org/s/abc/1-1".to_string(),
        )]))
    }

    async fn fetch_gallery_normal_contents(
        &self,
        thumbnails: &BTreeMap<u32, String>,
    ) -> Result<BTreeMap<u32, String>, AppError> {
        self.record(format!("fetch_gallery_normal_contents({})", thumbnails.len()));
        Ok(thumbnails
            .keys()
            .map(|index| (*index, format!("https://img.example/{}", index)))
            .collect())
    }

    async fn fetch_mpv_keys(&self, mpv_url: &str) -> Result<MpvKeys, AppError> {
        self.record(format!("fetch_mpv_keys({})", mpv_url));
        Ok(MpvKeys {
            mpv_key: "mk".to_string(),
            image_keys: BTreeMap::from([(0, "ik".to_string())]),
        })
    }

    async fn fetch_gallery_mpv_content(
        &self,
        gid: i64,
        index: u32,
        mpv_key: &str,
        image_key: &str,
    ) -> Result<String, AppError> {
        self.record(format!("fetch_gallery_mpv_content({}, {})", gid, index));
        Ok(format!(
            "https://img.example/{}/{}/{}/{}",
            gid, index, mpv_key, image_key
        ))
    }

    async fn create_profile(&self, name: &str) -> Result<(), AppError> {
        self.record(format!("create_profile({})", name));
        Ok(())
    }

    async fn verify_profile(&self) -> Result<ProfileVerification, AppError> {
        self.record("verify_profile".to_string());
        Ok(ProfileVerification {
            profile_value: Some(1),
            profile_not_found: false,
        })
    }

    async fn add_favorite(&self, gid: &str, token: &str, fav_index: i32) -> Result<(), AppError> {
        self.record(format!("add_favorite({}, {}, {})", gid, token, fav_index));
        Ok(())
    }

    async fn delete_favorite(&self, gid: &str) -> Result<(), AppError> {
        self.record(format!("delete_favorite({})", gid));
        Ok(())
    }

    async fn rate(&self, request: &RateRequest) -> Result<(), AppError> {
        self.record(format!("rate({}, {})", request.gid, request.rating));
        Ok(())
    }

    async fn comment(&self, gallery_url: &str, _content: &str) -> Result<(), AppError> {
        self.record(format!("comment({})", gallery_url));
        Ok(())
    }

    async fn edit_comment(
        &self,
        gallery_url: &str,
        comment_id: &str,
        _content: &str,
    ) -> Result<(), AppError> {
        self.record(format!("edit_comment({}, {})", gallery_url, comment_id));
        Ok(())
    }

    async fn vote_comment(&self, request: &VoteRequest) -> Result<(), AppError> {
        self.record(format!("vote_comment({}, {})", request.gid, request.comment_id));
        Ok(())
    }
}

/// Executor that records commands instead of running them
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    commands: Arc<Mutex<Vec<Command>>>,
}

impl RecordingExecutor {
    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, command: Command, _dispatcher: Dispatcher) {
        self.commands.lock().unwrap().push(command);
    }
}
