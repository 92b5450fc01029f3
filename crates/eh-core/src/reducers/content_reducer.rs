//! Content Reducer
//!
//! A page of reading contents stays `loading` through the whole chain:
//! thumbnails, then normal contents or MPV keys. Only the final `Done`
//! (or a failure on the way) clears it.

use eh_client::urls::{detail_page_url, is_mpv_url};
use eh_client::{AppError, GalleryState, PreviewConfig};
use std::collections::BTreeMap;

use crate::actions::{Action, ContentAction};
use crate::commands::Command;
use crate::effect::{Context, Effect, PersistOp};
use crate::state::ContentState;

pub fn reduce_content(
    mut state: ContentState,
    action: &ContentAction,
    preview_config: &PreviewConfig,
    ctx: &Context,
) -> (ContentState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        ContentAction::FetchThumbnailUrls { gid, index } => {
            let page = preview_config.page_number(*index);
            if let Some(errors) = state.contents_load_errors.get_mut(gid) {
                errors.remove(&page);
            }

            if !state.is_contents_loading(gid, page) {
                state.set_contents_loading(gid, page, true);
                effects.push(Effect::Command(Command::FetchThumbnailUrls {
                    gid: gid.clone(),
                    url: detail_page_url(&ctx.gallery_url(gid), page),
                    page,
                }));
            }
        }
        ContentAction::FetchThumbnailUrlsDone { gid, page, result } => match result {
            Ok(thumbnails) => {
                let Some(first) = thumbnails.values().next() else {
                    state.fail_page(gid, *page, AppError::NotFound);
                    return (state, effects);
                };

                let next = if is_mpv_url(first) {
                    ContentAction::FetchMpvKeys {
                        gid: gid.clone(),
                        page: *page,
                        mpv_url: first.clone(),
                    }
                } else {
                    ContentAction::FetchGalleryNormalContents {
                        gid: gid.clone(),
                        page: *page,
                        thumbnails: thumbnails.clone(),
                    }
                };

                state.update_thumbnails(gid, thumbnails);
                effects.push(Effect::Persist(PersistOp::UpdateFetchedState(GalleryState {
                    thumbnails: thumbnails.clone(),
                    ..GalleryState::new(gid.clone())
                })));
                effects.push(Effect::Dispatch(Action::Content(next)));
            }
            Err(error) => state.fail_page(gid, *page, error.clone()),
        },

        ContentAction::FetchGalleryNormalContents {
            gid,
            page,
            thumbnails,
        } => {
            effects.push(Effect::Command(Command::FetchGalleryNormalContents {
                gid: gid.clone(),
                page: *page,
                thumbnails: thumbnails.clone(),
            }));
        }
        ContentAction::FetchGalleryNormalContentsDone { gid, page, result } => match result {
            Ok(contents) => {
                state.set_contents_loading(gid, *page, false);
                state.update_contents(gid, contents);
                effects.push(Effect::Persist(PersistOp::UpdateContents {
                    gid: gid.clone(),
                    contents: contents.clone(),
                }));
            }
            Err(error) => state.fail_page(gid, *page, error.clone()),
        },

        ContentAction::FetchMpvKeys { gid, page, mpv_url } => {
            effects.push(Effect::Command(Command::FetchMpvKeys {
                gid: gid.clone(),
                page: *page,
                mpv_url: mpv_url.clone(),
            }));
        }
        ContentAction::FetchMpvKeysDone { gid, page, result } => match result {
            Ok(keys) => {
                state.set_contents_loading(gid, *page, false);
                state.mpv_keys.insert(gid.clone(), keys.mpv_key.clone());
                state
                    .mpv_image_keys
                    .insert(gid.clone(), keys.image_keys.clone());
            }
            Err(error) => state.fail_page(gid, *page, error.clone()),
        },

        ContentAction::FetchGalleryMpvContent { gid, index } => {
            let Ok(gid_value) = gid.parse::<i64>() else {
                log::warn!("Gallery id {} is not numeric", gid);
                return (state, effects);
            };
            let Some(mpv_key) = state.mpv_keys.get(gid).cloned() else {
                return (state, effects);
            };
            let Some(image_key) = state
                .mpv_image_keys
                .get(gid)
                .and_then(|keys| keys.get(index))
                .cloned()
            else {
                return (state, effects);
            };

            // The viewer loads images one by one from here on
            state.contents_loading.remove(gid);
            state.contents_load_errors.remove(gid);

            if !state.is_mpv_image_loading(gid, *index) {
                state
                    .mpv_image_loading
                    .entry(gid.clone())
                    .or_default()
                    .insert(*index, true);
                effects.push(Effect::Command(Command::FetchGalleryMpvContent {
                    gid: gid.clone(),
                    gid_value,
                    index: *index,
                    mpv_key,
                    image_key,
                }));
            }
        }
        ContentAction::FetchGalleryMpvContentDone { gid, index, result } => {
            if let Some(loading) = state.mpv_image_loading.get_mut(gid) {
                loading.insert(*index, false);
            }
            if let Ok(image_url) = result {
                let contents = BTreeMap::from([(*index, image_url.clone())]);
                state.update_contents(gid, &contents);
                effects.push(Effect::Persist(PersistOp::UpdateContents {
                    gid: gid.clone(),
                    contents,
                }));
            }
        }
    }

    (state, effects)
}
