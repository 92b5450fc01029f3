//! UI environment flags

use eh_client::ToplistsType;
use strum::Display;

/// Which listing the home screen shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum HomeListType {
    Search,
    #[default]
    Frontpage,
    Popular,
    Watched,
    Favorites,
    Toplists,
    Downloaded,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeViewSheetState {
    Setting,
    Filter,
    NewDawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingViewSheetState {
    WebviewLogin,
    WebviewConfig,
    WebviewMyTags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingViewActionSheetState {
    Logout,
    ClearImageCaches,
    ClearWebCaches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterViewActionSheetState {
    ResetFilters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailViewSheetState {
    Archive,
    Torrents,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentViewSheetState {
    Comment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentState {
    pub is_app_unlocked: bool,
    pub blur_radius: f32,
    pub is_slide_menu_closed: bool,
    pub nav_bar_hidden: bool,
    /// Selected favorites folder, -1 means all folders
    pub favorites_index: i32,
    pub toplists_type: ToplistsType,
    pub home_list_type: HomeListType,
    pub home_view_sheet_state: Option<HomeViewSheetState>,
    pub setting_view_sheet_state: Option<SettingViewSheetState>,
    pub setting_view_action_sheet_state: Option<SettingViewActionSheetState>,
    pub filter_view_action_sheet_state: Option<FilterViewActionSheetState>,
    pub detail_view_sheet_state: Option<DetailViewSheetState>,
    pub comment_view_sheet_state: Option<CommentViewSheetState>,

    // Gallery link reverse lookup
    pub gallery_reverse_id: Option<String>,
    pub gallery_reverse_loading: bool,
    pub gallery_reverse_load_failed: bool,
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self {
            is_app_unlocked: true,
            blur_radius: 0.0,
            is_slide_menu_closed: true,
            nav_bar_hidden: false,
            favorites_index: -1,
            toplists_type: ToplistsType::AllTime,
            home_list_type: HomeListType::default(),
            home_view_sheet_state: None,
            setting_view_sheet_state: None,
            setting_view_action_sheet_state: None,
            filter_view_action_sheet_state: None,
            detail_view_sheet_state: None,
            comment_view_sheet_state: None,
            gallery_reverse_id: None,
            gallery_reverse_loading: false,
            gallery_reverse_load_failed: false,
        }
    }
}
