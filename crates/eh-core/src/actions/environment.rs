use eh_client::ToplistsType;

use crate::state::{
    CommentViewSheetState, DetailViewSheetState, FilterViewActionSheetState, HomeListType,
    HomeViewSheetState, SettingViewActionSheetState, SettingViewSheetState,
};

/// UI flag toggles
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentAction {
    ToggleApp { unlocked: bool },
    ToggleBlur { effect_on: bool },
    ToggleHomeList(HomeListType),
    /// Select a favorites folder, -1 for all folders
    ToggleFavorites(i32),
    ToggleToplists(ToplistsType),
    ToggleNavBar { hidden: bool },
    ToggleHomeViewSheet(Option<HomeViewSheetState>),
    ToggleSettingViewSheet(Option<SettingViewSheetState>),
    ToggleSettingViewActionSheet(Option<SettingViewActionSheetState>),
    ToggleFilterViewActionSheet(Option<FilterViewActionSheetState>),
    ToggleDetailViewSheet(Option<DetailViewSheetState>),
    ToggleCommentViewSheet(Option<CommentViewSheetState>),
}
