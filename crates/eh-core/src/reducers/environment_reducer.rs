//! Environment Reducer
//!
//! Plain flag updates; never produces effects.

use crate::actions::EnvironmentAction;
use crate::state::EnvironmentState;

/// Blur applied while the app is in the background
const BLUR_RADIUS: f32 = 10.0;

pub fn reduce_environment(
    mut state: EnvironmentState,
    action: &EnvironmentAction,
) -> EnvironmentState {
    match action {
        EnvironmentAction::ToggleApp { unlocked } => {
            state.is_app_unlocked = *unlocked;
        }
        EnvironmentAction::ToggleBlur { effect_on } => {
            state.blur_radius = if *effect_on { BLUR_RADIUS } else { 0.0 };
        }
        EnvironmentAction::ToggleHomeList(list_type) => {
            log::debug!("Home list switched to {}", list_type);
            state.home_list_type = *list_type;
        }
        EnvironmentAction::ToggleFavorites(index) => {
            state.favorites_index = *index;
        }
        EnvironmentAction::ToggleToplists(toplists_type) => {
            state.toplists_type = *toplists_type;
        }
        EnvironmentAction::ToggleNavBar { hidden } => {
            state.nav_bar_hidden = *hidden;
        }
        EnvironmentAction::ToggleHomeViewSheet(sheet) => {
            state.home_view_sheet_state = *sheet;
        }
        EnvironmentAction::ToggleSettingViewSheet(sheet) => {
            state.setting_view_sheet_state = *sheet;
        }
        EnvironmentAction::ToggleSettingViewActionSheet(sheet) => {
            state.setting_view_action_sheet_state = *sheet;
        }
        EnvironmentAction::ToggleFilterViewActionSheet(sheet) => {
            state.filter_view_action_sheet_state = *sheet;
        }
        EnvironmentAction::ToggleDetailViewSheet(sheet) => {
            state.detail_view_sheet_state = *sheet;
        }
        EnvironmentAction::ToggleCommentViewSheet(sheet) => {
            state.comment_view_sheet_state = *sheet;
        }
    }

    state
}
