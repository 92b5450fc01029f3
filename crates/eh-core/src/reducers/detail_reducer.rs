//! Detail Reducer
//!
//! Detail page, archive funds and preview pages of a single gallery.

use eh_client::urls::detail_page_url;
use eh_client::{GalleryState, User};

use crate::actions::DetailAction;
use crate::commands::Command;
use crate::effect::{Context, Effect, PersistOp};
use crate::state::AppState;

pub fn reduce_detail(
    mut state: AppState,
    action: &DetailAction,
    ctx: &Context,
) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        DetailAction::FetchGalleryDetail { gid } => {
            let detail = &mut state.detail;
            detail.detail_load_errors.remove(gid);

            if !detail.is_detail_loading(gid) {
                detail.detail_loading.insert(gid.clone(), true);
                effects.push(Effect::Command(Command::FetchGalleryDetail {
                    gid: gid.clone(),
                    gallery_url: ctx.gallery_url(gid),
                }));
            }
        }
        DetailAction::FetchGalleryDetailDone { gid, result } => {
            state.detail.detail_loading.insert(gid.clone(), false);

            match result {
                Ok(payload) => {
                    if let Some(api_key) = &payload.api_key {
                        state.settings.user.apikey = Some(api_key.clone());
                        effects.push(Effect::persist_app_env(&state));
                    }
                    if let Some(config) = payload.state.preview_config {
                        state.detail.preview_config = config;
                    }
                    state.detail.update_previews(gid, &payload.state.previews);

                    effects.push(Effect::Persist(PersistOp::AddDetail(payload.detail.clone())));
                    effects.push(Effect::Persist(PersistOp::UpdateFetchedState(
                        payload.state.clone(),
                    )));
                }
                Err(error) => {
                    state.detail.detail_load_errors.insert(gid.clone(), error.clone());
                }
            }
        }

        DetailAction::FetchGalleryArchiveFunds { gid } => {
            if !state.detail.archive_funds_loading {
                state.detail.archive_funds_loading = true;
                effects.push(Effect::Command(Command::FetchGalleryArchiveFunds {
                    gid: gid.clone(),
                    gallery_url: ctx.gallery_url(gid),
                }));
            }
        }
        DetailAction::FetchGalleryArchiveFundsDone(result) => {
            state.detail.archive_funds_loading = false;

            if let Ok(funds) = result {
                state.settings.update_user(&User {
                    current_gp: Some(funds.current_gp.clone()),
                    current_credits: Some(funds.current_credits.clone()),
                    ..User::default()
                });
                effects.push(Effect::persist_app_env(&state));
            }
        }

        DetailAction::FetchGalleryPreviews { gid, index } => {
            let detail = &mut state.detail;
            let page = detail.preview_config.page_number(*index);

            if !detail.is_previews_loading(gid, page) {
                detail
                    .previews_loading
                    .entry(gid.clone())
                    .or_default()
                    .insert(page, true);
                effects.push(Effect::Command(Command::FetchGalleryPreviews {
                    gid: gid.clone(),
                    url: detail_page_url(&ctx.gallery_url(gid), page),
                    page,
                }));
            }
        }
        DetailAction::FetchGalleryPreviewsDone { gid, page, result } => {
            if let Some(pages) = state.detail.previews_loading.get_mut(gid) {
                pages.insert(*page, false);
            }

            if let Ok(previews) = result {
                state.detail.update_previews(gid, previews);
                if !previews.is_empty() {
                    effects.push(Effect::Persist(PersistOp::UpdateFetchedState(
                        GalleryState::with_previews(gid.clone(), previews.clone()),
                    )));
                }
            }
        }
    }

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commands, context, gallery};
    use eh_client::{AppError, ArchiveFunds, DetailPayload, GalleryDetail, PreviewConfig};
    use eh_config::{MemoryStore, Persistence};
    use std::collections::BTreeMap;

    fn store_with_gallery() -> MemoryStore {
        let store = MemoryStore::new();
        store.add_galleries(&[gallery("1")]).unwrap();
        store
    }

    #[test]
    fn test_fetch_detail_guard_and_url() {
        let store = store_with_gallery();
        let ctx = context(&store);
        let mut state = AppState::default();
        state
            .detail
            .detail_load_errors
            .insert("1".to_string(), AppError::NetworkingFailed);

        let action = DetailAction::FetchGalleryDetail {
            gid: "1".to_string(),
        };
        let (state, effects) = reduce_detail(state, &action, &ctx);
        assert!(state.detail.detail_load_errors.is_empty());
        assert_eq!(
            commands(&effects),
            vec![Command::FetchGalleryDetail {
                gid: "1".to_string(),
                gallery_url: "https://e-hentai.org/g/1/token1/".to_string(),
            }]
        );

        let (_, effects) = reduce_detail(state, &action, &ctx);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_detail_done_applies_payload() {
        let store = MemoryStore::new();
        let mut fetched = GalleryState::with_previews("1", BTreeMap::from([(0, "new".to_string())]));
        fetched.preview_config = Some(PreviewConfig::Large { rows: 2 });
        let payload = DetailPayload {
            detail: GalleryDetail::new("1", "Detail"),
            state: fetched.clone(),
            api_key: Some("key".to_string()),
        };

        let mut state = AppState::default();
        state
            .detail
            .previews
            .insert("1".to_string(), BTreeMap::from([(0, "old".to_string())]));

        let (state, effects) = reduce_detail(
            state,
            &DetailAction::FetchGalleryDetailDone {
                gid: "1".to_string(),
                result: Ok(payload),
            },
            &context(&store),
        );

        assert_eq!(state.settings.user.apikey.as_deref(), Some("key"));
        assert_eq!(state.detail.preview_config, PreviewConfig::Large { rows: 2 });
        assert_eq!(state.detail.previews["1"][&0], "old");
        assert!(!state.detail.is_detail_loading("1"));
        assert_eq!(effects.len(), 3);
        assert!(effects.contains(&Effect::Persist(PersistOp::UpdateFetchedState(fetched))));
    }

    #[test]
    fn test_detail_failure_recorded() {
        let store = MemoryStore::new();
        let (state, effects) = reduce_detail(
            AppState::default(),
            &DetailAction::FetchGalleryDetailDone {
                gid: "1".to_string(),
                result: Err(AppError::Expunged {
                    reason: "copyright".to_string(),
                }),
            },
            &context(&store),
        );
        assert!(effects.is_empty());
        assert!(matches!(
            state.detail.detail_load_errors.get("1"),
            Some(AppError::Expunged { .. })
        ));
    }

    #[test]
    fn test_archive_funds_update_user() {
        let store = MemoryStore::new();
        let ctx = context(&store);
        let (state, _) = reduce_detail(
            AppState::default(),
            &DetailAction::FetchGalleryArchiveFunds {
                gid: "1".to_string(),
            },
            &ctx,
        );
        assert!(state.detail.archive_funds_loading);

        let (state, effects) = reduce_detail(
            state,
            &DetailAction::FetchGalleryArchiveFundsDone(Ok(ArchiveFunds {
                current_gp: "1000".to_string(),
                current_credits: "50".to_string(),
            })),
            &ctx,
        );
        assert!(!state.detail.archive_funds_loading);
        assert_eq!(state.settings.user.current_gp.as_deref(), Some("1000"));
        assert_eq!(effects, vec![Effect::persist_app_env(&state)]);
    }

    #[test]
    fn test_previews_page_from_index() {
        let store = store_with_gallery();
        let ctx = context(&store);
        let action = DetailAction::FetchGalleryPreviews {
            gid: "1".to_string(),
            index: 45,
        };

        let (state, effects) = reduce_detail(AppState::default(), &action, &ctx);
        assert!(state.detail.is_previews_loading("1", 1));
        assert_eq!(
            commands(&effects),
            vec![Command::FetchGalleryPreviews {
                gid: "1".to_string(),
                url: "https://e-hentai.org/g/1/token1/?p=1".to_string(),
                page: 1,
            }]
        );

        let (state, effects) = reduce_detail(state, &action, &ctx);
        assert!(effects.is_empty());

        let previews = BTreeMap::from([(40, "p40".to_string())]);
        let (state, effects) = reduce_detail(
            state,
            &DetailAction::FetchGalleryPreviewsDone {
                gid: "1".to_string(),
                page: 1,
                result: Ok(previews.clone()),
            },
            &ctx,
        );
        assert!(!state.detail.is_previews_loading("1", 1));
        assert_eq!(state.detail.previews["1"], previews);
        assert_eq!(
            effects,
            vec![Effect::Persist(PersistOp::UpdateFetchedState(
                GalleryState::with_previews("1", previews)
            ))]
        );
    }
}
