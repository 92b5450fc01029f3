//! App Ops Reducer
//!
//! Synchronous bookkeeping across the state tree. Changes to the persisted
//! part of the state are written back as an `AppEnv` update.

use eh_client::{Filter, User};

use crate::actions::AppOpsAction;
use crate::effect::{Context, Effect, PersistOp};
use crate::state::AppState;

pub fn reduce_app_ops(
    mut state: AppState,
    action: &AppOpsAction,
    ctx: &Context,
) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        AppOpsAction::ResetUser => {
            state.settings.user = User::default();
            effects.push(Effect::persist_app_env(&state));
        }
        AppOpsAction::ResetFilters => {
            state.settings.filter = Filter::default();
            effects.push(Effect::persist_app_env(&state));
        }
        AppOpsAction::SaveReadingProgress { gid, progress } => {
            effects.push(Effect::Persist(PersistOp::UpdateReadingProgress {
                gid: gid.clone(),
                progress: *progress,
            }));
        }
        AppOpsAction::UpdateDiskImageCacheSize(size) => {
            state.settings.setting.disk_image_cache_size = *size;
            effects.push(Effect::persist_app_env(&state));
        }
        AppOpsAction::UpdateAppIconType(icon_type) => {
            state.settings.setting.app_icon_type = *icon_type;
            effects.push(Effect::persist_app_env(&state));
        }
        AppOpsAction::UpdateHistoryKeywords(text) => {
            if !text.is_empty() {
                state.home.insert_history_keyword(text);
                effects.push(Effect::persist_app_env(&state));
            }
        }
        AppOpsAction::ClearHistoryKeywords => {
            state.home.history_keywords.clear();
            effects.push(Effect::persist_app_env(&state));
        }
        AppOpsAction::UpdateSearchKeyword(text) => {
            state.home.search_keyword = text.clone();
        }
        AppOpsAction::UpdateSetting(setting) => {
            state.settings.setting = setting.clone();
            effects.push(Effect::persist_app_env(&state));
        }
        AppOpsAction::ReplaceGalleryCommentJumpId(gid) => {
            state.environment.gallery_reverse_id = gid.clone();
        }
        AppOpsAction::UpdateIsSlideMenuClosed(closed) => {
            state.environment.is_slide_menu_closed = *closed;
        }
        AppOpsAction::FulfillGalleryPreviews { gid } => {
            let stored = ctx.gallery_state(gid);
            state.detail.previews.insert(gid.clone(), stored.previews);
        }
        AppOpsAction::FulfillGalleryContents { gid } => {
            let stored = ctx.gallery_state(gid);
            state.content.contents.insert(gid.clone(), stored.contents);
            state.content.thumbnails.insert(gid.clone(), stored.thumbnails);
        }
        AppOpsAction::UpdatePendingJumpInfos {
            gid,
            page_index,
            comment_id,
        } => {
            match page_index {
                Some(index) => {
                    state
                        .detail
                        .pending_jump_page_indices
                        .insert(gid.clone(), *index);
                }
                None => {
                    state.detail.pending_jump_page_indices.remove(gid);
                }
            }
            match comment_id {
                Some(id) => {
                    state
                        .detail
                        .pending_jump_comment_ids
                        .insert(gid.clone(), id.clone());
                }
                None => {
                    state.detail.pending_jump_comment_ids.remove(gid);
                }
            }
        }
    }

    (state, effects)
}
