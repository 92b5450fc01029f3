//! Gallery site data transfer objects
//!
//! These types are what the client returns and what the persistence layer
//! stores. They carry no behaviour beyond small derived helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use strum::{EnumIter, IntoEnumIterator};

use crate::DEFAULT_HOST;

/// Gallery category as shown on listing pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Doujinshi,
    Manga,
    ArtistCg,
    GameCg,
    Western,
    NonH,
    ImageSet,
    Cosplay,
    AsianPorn,
    #[default]
    Misc,
    Private,
}

/// Minimal listing record
///
/// Two galleries are equal when their ids are equal, regardless of the
/// remaining fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    pub gid: String,
    pub token: String,
    pub title: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub gallery_url: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub posted_date: DateTime<Utc>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl Gallery {
    pub fn new(gid: impl Into<String>, token: impl Into<String>, title: impl Into<String>) -> Self {
        let gid = gid.into();
        let token = token.into();
        let gallery_url = format!("https://{}/g/{}/{}/", DEFAULT_HOST, gid, token);
        Self {
            gid,
            token,
            title: title.into(),
            category: Category::default(),
            cover_url: None,
            gallery_url,
            rating: 0.0,
            page_count: 0,
            posted_date: DateTime::<Utc>::default(),
            uploader: None,
            language: None,
        }
    }
}

impl PartialEq for Gallery {
    fn eq(&self, other: &Self) -> bool {
        self.gid == other.gid
    }
}

impl Eq for Gallery {}

/// Current and highest known page of a paginated listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNumber {
    pub current: u32,
    pub maximum: u32,
}

impl PageNumber {
    /// Create a page number, raising `maximum` to `current` if needed
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current,
            maximum: maximum.max(current),
        }
    }

    /// Whether pages beyond `current` are known to exist
    pub fn has_next(&self) -> bool {
        self.current < self.maximum
    }
}

/// One page of a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    pub page_number: PageNumber,
    pub galleries: Vec<Gallery>,
}

impl ListPage {
    pub fn new(page_number: PageNumber, galleries: Vec<Gallery>) -> Self {
        Self {
            page_number,
            galleries,
        }
    }
}

/// Full gallery metadata from the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryDetail {
    pub gid: String,
    pub title: String,
    pub jpn_title: Option<String>,
    pub category: Category,
    pub cover_url: String,
    pub language: String,
    pub uploader: String,
    pub posted_date: DateTime<Utc>,
    pub rating: f32,
    pub user_rating: f32,
    pub rating_count: u32,
    pub favored_count: u32,
    pub page_count: u32,
    pub size_count: f32,
    pub size_type: String,
    pub torrent_count: u32,
    pub is_favored: bool,
    pub archive_url: Option<String>,
    pub parent_url: Option<String>,
}

impl GalleryDetail {
    pub fn new(gid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            gid: gid.into(),
            title: title.into(),
            jpn_title: None,
            category: Category::default(),
            cover_url: String::new(),
            language: String::new(),
            uploader: String::new(),
            posted_date: DateTime::<Utc>::default(),
            rating: 0.0,
            user_rating: 0.0,
            rating_count: 0,
            favored_count: 0,
            page_count: 0,
            size_count: 0.0,
            size_type: String::new(),
            torrent_count: 0,
            is_favored: false,
            archive_url: None,
            parent_url: None,
        }
    }
}

/// A tag namespace with its values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryTag {
    pub namespace: String,
    pub content: Vec<String>,
}

/// A comment on a gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryComment {
    pub comment_id: String,
    pub author: String,
    pub content: String,
    pub commented_date: DateTime<Utc>,
    pub score: Option<String>,
    pub votable: bool,
    pub editable: bool,
}

/// Layout of the preview grid on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewConfig {
    Normal { rows: u32 },
    Large { rows: u32 },
}

impl PreviewConfig {
    /// Number of previews per detail page
    pub fn batch_size(&self) -> u32 {
        match self {
            PreviewConfig::Normal { rows } => rows.saturating_mul(10),
            PreviewConfig::Large { rows } => rows.saturating_mul(5),
        }
    }

    /// Detail page holding the preview at `index`
    pub fn page_number(&self, index: u32) -> u32 {
        match self.batch_size() {
            0 => 0,
            size => index / size,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig::Normal { rows: 4 }
    }
}

/// Per-gallery fetched state owned by the persistence layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryState {
    pub gid: String,
    #[serde(default)]
    pub tags: Vec<GalleryTag>,
    #[serde(default)]
    pub comments: Vec<GalleryComment>,
    #[serde(default)]
    pub preview_config: Option<PreviewConfig>,
    #[serde(default)]
    pub previews: BTreeMap<u32, String>,
    #[serde(default)]
    pub reading_progress: u32,
    #[serde(default)]
    pub thumbnails: BTreeMap<u32, String>,
    #[serde(default)]
    pub contents: BTreeMap<u32, String>,
}

impl GalleryState {
    pub fn new(gid: impl Into<String>) -> Self {
        Self {
            gid: gid.into(),
            ..Default::default()
        }
    }

    pub fn with_previews(gid: impl Into<String>, previews: BTreeMap<u32, String>) -> Self {
        Self {
            previews,
            ..Self::new(gid)
        }
    }
}

/// Daily login bonus message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub gained_exp: Option<u32>,
    pub gained_credits: Option<u32>,
    pub gained_gp: Option<u32>,
    pub gained_hath: Option<u32>,
    pub update_time: Option<DateTime<Utc>>,
}

/// Member profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub apiuid: String,
    pub apikey: Option<String>,
    pub current_gp: Option<String>,
    pub current_credits: Option<String>,
    pub favorite_names: Option<BTreeMap<i32, String>>,
    pub greeting: Option<Greeting>,
}

/// Search filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub excluded_categories: Vec<Category>,
    pub advanced: bool,
    pub search_gallery_name: bool,
    pub search_gallery_tags: bool,
    pub search_gallery_description: bool,
    pub show_expunged: bool,
    pub minimum_rating_activated: bool,
    pub minimum_rating: u8,
    pub page_range_activated: bool,
    pub page_lower_bound: Option<u32>,
    pub page_upper_bound: Option<u32>,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            excluded_categories: Vec::new(),
            advanced: false,
            search_gallery_name: true,
            search_gallery_tags: true,
            search_gallery_description: false,
            show_expunged: false,
            minimum_rating_activated: false,
            minimum_rating: 2,
            page_range_activated: false,
            page_lower_bound: None,
            page_upper_bound: None,
        }
    }
}

/// Which mirror the client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryHost {
    #[default]
    EHentai,
    ExHentai,
}

impl GalleryHost {
    pub fn domain(&self) -> &'static str {
        match self {
            GalleryHost::EHentai => DEFAULT_HOST,
            GalleryHost::ExHentai => "exhentai.org",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoLockPolicy {
    #[default]
    Never,
    Instantly,
    Seconds15,
    Minutes1,
    Minutes5,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppIconType {
    #[default]
    Default,
    Ukiyoe,
    Developer,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    pub gallery_host: GalleryHost,
    pub translates_tags: bool,
    pub redirects_links_to_selected_host: bool,
    pub detects_links_from_pasteboard: bool,
    pub allows_resign_active_blur: bool,
    pub auto_lock_policy: AutoLockPolicy,
    pub app_icon_type: AppIconType,
    /// Bytes used by the on-disk image cache
    pub disk_image_cache_size: u64,
}

impl Default for Setting {
    fn default() -> Self {
        Self {
            gallery_host: GalleryHost::default(),
            translates_tags: true,
            redirects_links_to_selected_host: false,
            detects_links_from_pasteboard: false,
            allows_resign_active_blur: true,
            auto_lock_policy: AutoLockPolicy::default(),
            app_icon_type: AppIconType::default(),
            disk_image_cache_size: 0,
        }
    }
}

/// Languages the tag database is published in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum TranslatableLanguage {
    #[default]
    Japanese,
    SimplifiedChinese,
    TraditionalChinese,
}

impl TranslatableLanguage {
    pub fn language_code(&self) -> &'static str {
        match self {
            TranslatableLanguage::Japanese => "ja",
            TranslatableLanguage::SimplifiedChinese => "zh-Hans",
            TranslatableLanguage::TraditionalChinese => "zh-Hant",
        }
    }

    /// First language whose code appears in the given locale identifier
    pub fn from_locale(locale: &str) -> Option<Self> {
        Self::iter().find(|language| locale.contains(language.language_code()))
    }
}

/// Tag translation table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTranslator {
    pub language: TranslatableLanguage,
    pub updated_date: DateTime<Utc>,
    pub contents: HashMap<String, String>,
}

impl TagTranslator {
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        match self.contents.get(text) {
            Some(translated) if !translated.is_empty() => translated.as_str(),
            _ => text,
        }
    }
}

/// Everything persisted about the app as a single record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppEnv {
    pub user: User,
    pub filter: Filter,
    pub setting: Setting,
    pub tag_translator: TagTranslator,
    pub history_keywords: Vec<String>,
}

/// Ranking period of a toplist
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum ToplistsType {
    Yesterday,
    PastMonth,
    PastYear,
    #[default]
    AllTime,
}

impl ToplistsType {
    pub fn raw_value(&self) -> u32 {
        match self {
            ToplistsType::Yesterday => 0,
            ToplistsType::PastMonth => 1,
            ToplistsType::PastYear => 2,
            ToplistsType::AllTime => 3,
        }
    }

    /// Category id used by the toplist endpoint
    pub fn category_index(&self) -> u32 {
        match self {
            ToplistsType::Yesterday => 15,
            ToplistsType::PastMonth => 13,
            ToplistsType::PastYear => 12,
            ToplistsType::AllTime => 11,
        }
    }
}

/// Result of a detail page fetch
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPayload {
    pub detail: GalleryDetail,
    pub state: GalleryState,
    /// Api key scraped from the page, if present
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFunds {
    pub current_gp: String,
    pub current_credits: String,
}

/// Multi-page viewer keys for a gallery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpvKeys {
    pub mpv_key: String,
    pub image_keys: BTreeMap<u32, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileVerification {
    pub profile_value: Option<i64>,
    pub profile_not_found: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentVote {
    Up,
    Down,
}

impl CommentVote {
    pub fn value(&self) -> i8 {
        match self {
            CommentVote::Up => 1,
            CommentVote::Down => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequest {
    pub apiuid: i64,
    pub apikey: String,
    pub gid: i64,
    pub token: String,
    /// 1..=10, half stars
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRequest {
    pub apiuid: i64,
    pub apikey: String,
    pub gid: i64,
    pub token: String,
    pub comment_id: i64,
    pub vote: CommentVote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_equality_by_id() {
        let a = Gallery::new("1", "aaa", "First");
        let mut b = Gallery::new("1", "bbb", "Other title");
        b.rating = 4.5;
        assert_eq!(a, b);
        assert_ne!(a, Gallery::new("2", "aaa", "First"));
    }

    #[test]
    fn test_page_number_clamps_maximum() {
        let page = PageNumber::new(4, 2);
        assert_eq!(page.current, 4);
        assert_eq!(page.maximum, 4);
        assert!(!page.has_next());
        assert!(PageNumber::new(1, 3).has_next());
    }

    #[test]
    fn test_preview_batch_size() {
        assert_eq!(PreviewConfig::default().batch_size(), 40);
        assert_eq!(PreviewConfig::Large { rows: 4 }.batch_size(), 20);
        assert_eq!(PreviewConfig::default().page_number(39), 0);
        assert_eq!(PreviewConfig::default().page_number(40), 1);
        assert_eq!(PreviewConfig::Normal { rows: 0 }.page_number(12), 0);
    }

    #[test]
    fn test_preview_batch_size_saturates() {
        let huge = PreviewConfig::Normal { rows: u32::MAX };
        assert_eq!(huge.batch_size(), u32::MAX);
        assert_eq!(huge.page_number(u32::MAX - 1), 0);
        assert_eq!(PreviewConfig::Large { rows: u32::MAX / 2 }.batch_size(), u32::MAX);
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(
            TranslatableLanguage::from_locale("ja-JP"),
            Some(TranslatableLanguage::Japanese)
        );
        assert_eq!(
            TranslatableLanguage::from_locale("zh-Hant-TW"),
            Some(TranslatableLanguage::TraditionalChinese)
        );
        assert_eq!(TranslatableLanguage::from_locale("en-US"), None);
    }

    #[test]
    fn test_tag_translator_falls_back_to_source() {
        let mut translator = TagTranslator::default();
        translator
            .contents
            .insert("female".to_string(), "女性".to_string());
        translator.contents.insert("empty".to_string(), String::new());
        assert_eq!(translator.translate("female"), "女性");
        assert_eq!(translator.translate("empty"), "empty");
        assert_eq!(translator.translate("male"), "male");
    }

    #[test]
    fn test_toplists_indices() {
        assert_eq!(ToplistsType::AllTime.raw_value(), 3);
        assert_eq!(ToplistsType::Yesterday.category_index(), 15);
        assert_eq!(ToplistsType::iter().count(), 4);
    }

    #[test]
    fn test_app_env_partial_deserialize() {
        let json = r#"{"history_keywords": ["a", "b"]}"#;
        let env: AppEnv = serde_json::from_str(json).unwrap();
        assert_eq!(env.history_keywords, vec!["a", "b"]);
        assert!(env.setting.translates_tags);
        assert_eq!(env.filter, Filter::default());
    }
}
