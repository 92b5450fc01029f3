//! Home Reducer
//!
//! Routes listing actions to their [`ListSlot`](crate::state::ListSlot) and turns the slot's
//! [`PageOutcome`] into effects. Every list, plain or keyed, goes through
//! the same four helpers below.

use eh_client::urls::{parse_gallery_link, parse_gid, redirect_to_host};
use eh_client::{AppError, ListPage, PageCursor};

use crate::actions::{Action, AppOpsAction, HomeAction};
use crate::commands::Command;
use crate::effect::{Context, Effect, PersistOp};
use crate::state::{AppState, HomeState, ListKey, PageOutcome};

pub fn reduce_home(
    mut state: AppState,
    action: &HomeAction,
    ctx: &Context,
) -> (AppState, Vec<Effect>) {
    let effects = match action {
        HomeAction::FetchGalleryByUrl {
            url,
            is_gallery_url,
        } => {
            let env = &mut state.environment;
            env.gallery_reverse_load_failed = false;

            let Some(parsed) = parse_gallery_link(url) else {
                return (state, Vec::new());
            };
            if env.gallery_reverse_loading {
                return (state, Vec::new());
            }
            let Some(gid) = parse_gid(&parsed, *is_gallery_url) else {
                log::warn!("No gallery id in {}", url);
                return (state, Vec::new());
            };
            env.gallery_reverse_loading = true;

            let setting = &state.settings.setting;
            let url = if setting.redirects_links_to_selected_host {
                redirect_to_host(url, setting.gallery_host)
            } else {
                url.clone()
            };
            vec![Effect::Command(Command::FetchGalleryByUrl {
                gid,
                url,
                is_gallery_url: *is_gallery_url,
            })]
        }
        HomeAction::FetchGalleryByUrlDone { gid, result } => {
            state.environment.gallery_reverse_loading = false;
            match result {
                Ok(gallery) => {
                    state.environment.gallery_reverse_id = Some(gallery.gid.clone());
                    vec![Effect::Persist(PersistOp::AddGalleries(vec![
                        gallery.clone(),
                    ]))]
                }
                Err(_) => {
                    state.environment.gallery_reverse_load_failed = true;
                    vec![Effect::Dispatch(
                        AppOpsAction::UpdatePendingJumpInfos {
                            gid: gid.clone(),
                            page_index: None,
                            comment_id: None,
                        }
                        .into(),
                    )]
                }
            }
        }

        HomeAction::FetchSearchItems { keyword } => {
            let command = Command::FetchSearchItems {
                keyword: keyword.clone(),
                filter: state.settings.filter.clone(),
            };
            begin_first_page(&mut state.home, ListKey::Search, command)
        }
        HomeAction::FetchSearchItemsDone { keyword, result } => {
            let retry = HomeAction::FetchMoreSearchItems {
                keyword: keyword.clone(),
            };
            finish_first_page(&mut state.home, ListKey::Search, result, retry, ctx)
        }
        HomeAction::FetchMoreSearchItems { keyword } => {
            let filter = state.settings.filter.clone();
            begin_more_page(&mut state.home, ListKey::Search, |cursor, generation| {
                Command::FetchMoreSearchItems {
                    keyword: keyword.clone(),
                    filter,
                    cursor,
                    generation,
                }
            })
        }
        HomeAction::FetchMoreSearchItemsDone {
            keyword,
            generation,
            result,
        } => {
            let retry = HomeAction::FetchMoreSearchItems {
                keyword: keyword.clone(),
            };
            finish_more_page(
                &mut state.home,
                ListKey::Search,
                *generation,
                result,
                retry,
                ctx,
            )
        }

        HomeAction::FetchFrontpageItems => begin_first_page(
            &mut state.home,
            ListKey::Frontpage,
            Command::FetchFrontpageItems,
        ),
        HomeAction::FetchFrontpageItemsDone(result) => finish_first_page(
            &mut state.home,
            ListKey::Frontpage,
            result,
            HomeAction::FetchMoreFrontpageItems,
            ctx,
        ),
        HomeAction::FetchMoreFrontpageItems => {
            begin_more_page(&mut state.home, ListKey::Frontpage, |cursor, generation| {
                Command::FetchMoreFrontpageItems { cursor, generation }
            })
        }
        HomeAction::FetchMoreFrontpageItemsDone { generation, result } => finish_more_page(
            &mut state.home,
            ListKey::Frontpage,
            *generation,
            result,
            HomeAction::FetchMoreFrontpageItems,
            ctx,
        ),

        HomeAction::FetchPopularItems => begin_first_page(
            &mut state.home,
            ListKey::Popular,
            Command::FetchPopularItems,
        ),
        HomeAction::FetchPopularItemsDone(result) => {
            let outcome = state.home.popular.finish_single_page(result);
            outcome_effects(outcome, ListKey::Popular, 0, None, ctx)
        }

        HomeAction::FetchWatchedItems => begin_first_page(
            &mut state.home,
            ListKey::Watched,
            Command::FetchWatchedItems,
        ),
        HomeAction::FetchWatchedItemsDone(result) => finish_first_page(
            &mut state.home,
            ListKey::Watched,
            result,
            HomeAction::FetchMoreWatchedItems,
            ctx,
        ),
        HomeAction::FetchMoreWatchedItems => {
            begin_more_page(&mut state.home, ListKey::Watched, |cursor, generation| {
                Command::FetchMoreWatchedItems { cursor, generation }
            })
        }
        HomeAction::FetchMoreWatchedItemsDone { generation, result } => finish_more_page(
            &mut state.home,
            ListKey::Watched,
            *generation,
            result,
            HomeAction::FetchMoreWatchedItems,
            ctx,
        ),

        HomeAction::FetchFavoritesItems(index) => begin_first_page(
            &mut state.home,
            ListKey::Favorites(*index),
            Command::FetchFavoritesItems { index: *index },
        ),
        HomeAction::FetchFavoritesItemsDone { index, result } => finish_first_page(
            &mut state.home,
            ListKey::Favorites(*index),
            result,
            HomeAction::FetchMoreFavoritesItems(*index),
            ctx,
        ),
        HomeAction::FetchMoreFavoritesItems(index) => {
            begin_more_page(
                &mut state.home,
                ListKey::Favorites(*index),
                |cursor, generation| Command::FetchMoreFavoritesItems {
                    index: *index,
                    cursor,
                    generation,
                },
            )
        }
        HomeAction::FetchMoreFavoritesItemsDone {
            index,
            generation,
            result,
        } => finish_more_page(
            &mut state.home,
            ListKey::Favorites(*index),
            *generation,
            result,
            HomeAction::FetchMoreFavoritesItems(*index),
            ctx,
        ),

        HomeAction::FetchToplistsItems(toplists_type) => begin_first_page(
            &mut state.home,
            ListKey::Toplists(*toplists_type),
            Command::FetchToplistsItems {
                toplists_type: *toplists_type,
            },
        ),
        HomeAction::FetchToplistsItemsDone {
            toplists_type,
            result,
        } => finish_first_page(
            &mut state.home,
            ListKey::Toplists(*toplists_type),
            result,
            HomeAction::FetchMoreToplistsItems(*toplists_type),
            ctx,
        ),
        HomeAction::FetchMoreToplistsItems(toplists_type) => begin_more_page(
            &mut state.home,
            ListKey::Toplists(*toplists_type),
            |cursor, generation| Command::FetchMoreToplistsItems {
                toplists_type: *toplists_type,
                page: cursor.page,
                generation,
            },
        ),
        HomeAction::FetchMoreToplistsItemsDone {
            toplists_type,
            generation,
            result,
        } => finish_more_page(
            &mut state.home,
            ListKey::Toplists(*toplists_type),
            *generation,
            result,
            HomeAction::FetchMoreToplistsItems(*toplists_type),
            ctx,
        ),

        HomeAction::GapSkipRetry {
            list,
            generation,
            retry,
        } => {
            let current = state.home.slot(*list).map(|slot| slot.generation);
            if current != Some(*generation) {
                log::debug!(
                    "Dropping stale retry for {:?} (generation {} != {:?})",
                    list,
                    generation,
                    current
                );
                Vec::new()
            } else {
                return reduce_home(state, retry, ctx);
            }
        }
    };

    (state, effects)
}

fn begin_first_page(home: &mut HomeState, key: ListKey, command: Command) -> Vec<Effect> {
    if home.slot_mut(key).begin_fetch() {
        vec![Effect::Command(command)]
    } else {
        log::debug!("{:?} is already loading", key);
        Vec::new()
    }
}

fn finish_first_page(
    home: &mut HomeState,
    key: ListKey,
    result: &Result<ListPage, AppError>,
    retry: HomeAction,
    ctx: &Context,
) -> Vec<Effect> {
    let slot = home.slot_mut(key);
    let outcome = slot.finish_fetch(result);
    outcome_effects(outcome, key, slot.generation, Some(retry), ctx)
}

/// "More" on a keyed list that was never fetched is ignored
///
/// The command is stamped with the slot generation so its result can be
/// matched against the list it was started for.
fn begin_more_page(
    home: &mut HomeState,
    key: ListKey,
    command: impl FnOnce(PageCursor, u64) -> Command,
) -> Vec<Effect> {
    let Some(slot) = home.existing_slot_mut(key) else {
        return Vec::new();
    };
    match slot.begin_fetch_more() {
        Some(cursor) => vec![Effect::Command(command(cursor, slot.generation))],
        None => Vec::new(),
    }
}

fn finish_more_page(
    home: &mut HomeState,
    key: ListKey,
    generation: u64,
    result: &Result<ListPage, AppError>,
    retry: HomeAction,
    ctx: &Context,
) -> Vec<Effect> {
    let Some(slot) = home.existing_slot_mut(key) else {
        log::warn!("Page for unknown list {:?}", key);
        return Vec::new();
    };
    let outcome = slot.finish_fetch_more(generation, result);
    outcome_effects(outcome, key, slot.generation, Some(retry), ctx)
}

fn outcome_effects(
    outcome: PageOutcome,
    key: ListKey,
    generation: u64,
    retry: Option<HomeAction>,
    ctx: &Context,
) -> Vec<Effect> {
    match (outcome, retry) {
        (PageOutcome::Settled, _) | (PageOutcome::GapSkip, None) => Vec::new(),
        (PageOutcome::Persist(galleries), _) => {
            vec![Effect::Persist(PersistOp::AddGalleries(galleries))]
        }
        (PageOutcome::GapSkip, Some(retry)) => {
            log::debug!("Empty page in {:?}, skipping ahead", key);
            vec![Effect::DispatchAfter {
                delay: ctx.gap_skip_delay,
                action: Action::Home(HomeAction::GapSkipRetry {
                    list: key,
                    generation,
                    retry: Box::new(retry),
                }),
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commands, context, gallery, list_page};
    use eh_client::{Filter, GalleryHost, PageNumber, ToplistsType};
    use eh_config::MemoryStore;

    fn reduce(state: AppState, action: HomeAction) -> (AppState, Vec<Effect>) {
        let store = MemoryStore::new();
        reduce_home(state, &action, &context(&store))
    }

    /// The action scheduled by a gap-skip, if any
    fn scheduled(effects: &[Effect]) -> Option<HomeAction> {
        effects.iter().find_map(|effect| match effect {
            Effect::DispatchAfter {
                action: Action::Home(action),
                ..
            } => Some(action.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_fetch_frontpage_then_done() {
        let (state, effects) = reduce(AppState::default(), HomeAction::FetchFrontpageItems);
        assert!(state.home.frontpage.loading);
        assert_eq!(commands(&effects), vec![Command::FetchFrontpageItems]);

        let page = list_page(1, 3, &["1", "2"]);
        let (state, effects) = reduce(state, HomeAction::FetchFrontpageItemsDone(Ok(page.clone())));
        assert!(!state.home.frontpage.loading);
        assert_eq!(state.home.frontpage.items, page.galleries);
        assert_eq!(
            effects,
            vec![Effect::Persist(PersistOp::AddGalleries(page.galleries))]
        );
    }

    #[test]
    fn test_duplicate_fetch_is_noop() {
        let (state, _) = reduce(AppState::default(), HomeAction::FetchWatchedItems);
        let (again, effects) = reduce(state.clone(), HomeAction::FetchWatchedItems);
        assert!(effects.is_empty());
        assert_eq!(again, state);
    }

    #[test]
    fn test_search_uses_filter() {
        let mut state = AppState::default();
        state.settings.filter = Filter {
            show_expunged: true,
            ..Filter::default()
        };
        let (_, effects) = reduce(
            state.clone(),
            HomeAction::FetchSearchItems {
                keyword: "neko".to_string(),
            },
        );
        assert_eq!(
            commands(&effects),
            vec![Command::FetchSearchItems {
                keyword: "neko".to_string(),
                filter: state.settings.filter,
            }]
        );
    }

    #[test]
    fn test_empty_search_page_retries_same_keyword() {
        let (state, _) = reduce(
            AppState::default(),
            HomeAction::FetchSearchItems {
                keyword: "neko".to_string(),
            },
        );
        let (state, effects) = reduce(
            state,
            HomeAction::FetchSearchItemsDone {
                keyword: "neko".to_string(),
                result: Ok(list_page(1, 3, &[])),
            },
        );

        let retry = scheduled(&effects).unwrap();
        let (_, effects) = reduce(state, retry);
        assert_eq!(
            commands(&effects),
            vec![Command::FetchMoreSearchItems {
                keyword: "neko".to_string(),
                filter: Filter::default(),
                cursor: PageCursor::new("", 2),
                generation: 1,
            }]
        );
    }

    #[test]
    fn test_gap_skip_terminates_at_maximum() {
        let (mut state, _) = reduce(AppState::default(), HomeAction::FetchFrontpageItems);
        let mut done = HomeAction::FetchFrontpageItemsDone(Ok(list_page(1, 5, &[])));
        let mut retries = 0;

        loop {
            let (next, effects) = reduce(state, done);
            state = next;
            let Some(retry) = scheduled(&effects) else {
                break;
            };
            retries += 1;
            assert!(retries <= 5);

            let (next, effects) = reduce(state, retry);
            state = next;
            let launched = commands(&effects);
            let [Command::FetchMoreFrontpageItems { cursor, generation }] = launched.as_slice()
            else {
                panic!("expected a single more command");
            };
            done = HomeAction::FetchMoreFrontpageItemsDone {
                generation: *generation,
                result: Ok(list_page(cursor.page, 5, &[])),
            };
        }

        assert_eq!(retries, 4);
        assert!(state.home.frontpage.not_found);
        assert_eq!(state.home.frontpage.page_number, PageNumber::new(5, 5));
    }

    #[test]
    fn test_stale_gap_skip_retry_dropped() {
        let (state, _) = reduce(AppState::default(), HomeAction::FetchFrontpageItems);
        let (state, effects) = reduce(
            state,
            HomeAction::FetchFrontpageItemsDone(Ok(list_page(1, 3, &[]))),
        );
        let retry = scheduled(&effects).unwrap();

        // A fresh fetch resets the list before the retry fires
        let (state, _) = reduce(state, HomeAction::FetchFrontpageItems);
        let (after, effects) = reduce(state.clone(), retry);
        assert!(effects.is_empty());
        assert_eq!(after, state);
    }

    #[test]
    fn test_more_from_previous_search_discarded() {
        let search = |keyword: &str| HomeAction::FetchSearchItems {
            keyword: keyword.to_string(),
        };
        let (state, _) = reduce(AppState::default(), search("a"));
        let (state, _) = reduce(
            state,
            HomeAction::FetchSearchItemsDone {
                keyword: "a".to_string(),
                result: Ok(list_page(1, 9, &["a1"])),
            },
        );
        let (state, effects) = reduce(
            state,
            HomeAction::FetchMoreSearchItems {
                keyword: "a".to_string(),
            },
        );
        let launched = commands(&effects);
        let [Command::FetchMoreSearchItems { generation, .. }] = launched.as_slice() else {
            panic!("expected a more command, got {:?}", launched);
        };

        // A new keyword resets the list while the old "more" is in flight
        let (state, _) = reduce(state, search("b"));
        let (state, _) = reduce(
            state,
            HomeAction::FetchSearchItemsDone {
                keyword: "b".to_string(),
                result: Ok(list_page(1, 2, &["b1"])),
            },
        );
        let (after, effects) = reduce(
            state.clone(),
            HomeAction::FetchMoreSearchItemsDone {
                keyword: "a".to_string(),
                generation: *generation,
                result: Ok(list_page(2, 9, &["a2"])),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(after, state);
        assert_eq!(after.home.search.items, vec![gallery("b1")]);
        assert_eq!(after.home.search.page_number, PageNumber::new(1, 2));
        assert!(!after.home.search.more_loading);
    }

    #[test]
    fn test_favorites_keyed_independently() {
        let (state, _) = reduce(AppState::default(), HomeAction::FetchFavoritesItems(3));
        let (state, effects) = reduce(state, HomeAction::FetchFavoritesItems(0));

        assert_eq!(
            commands(&effects),
            vec![Command::FetchFavoritesItems { index: 0 }]
        );
        assert!(state.home.favorites.is_loading(3));
        assert!(state.home.favorites.is_loading(0));
        assert!(!state.home.favorites.contains(1));
    }

    #[test]
    fn test_more_on_unfetched_key_ignored() {
        let (state, effects) = reduce(AppState::default(), HomeAction::FetchMoreFavoritesItems(2));
        assert!(effects.is_empty());
        assert!(!state.home.favorites.contains(2));

        let (state, effects) = reduce(
            state,
            HomeAction::FetchMoreFavoritesItemsDone {
                index: 2,
                generation: 1,
                result: Ok(list_page(2, 3, &["1"])),
            },
        );
        assert!(effects.is_empty());
        assert!(!state.home.favorites.contains(2));
    }

    #[test]
    fn test_keyed_more_failure_allows_retry() {
        let mut state = AppState::default();
        state
            .home
            .favorites
            .entry(1)
            .finish_fetch(&Ok(list_page(1, 3, &["1"])));

        let (state, _) = reduce(state, HomeAction::FetchMoreFavoritesItems(1));
        let (state, _) = reduce(
            state,
            HomeAction::FetchMoreFavoritesItemsDone {
                index: 1,
                generation: 0,
                result: Err(AppError::NetworkingFailed),
            },
        );
        let slot = state.home.favorites.get(1).unwrap();
        assert!(slot.more_load_failed);
        assert!(!slot.more_loading);

        let (_, effects) = reduce(state, HomeAction::FetchMoreFavoritesItems(1));
        assert_eq!(
            commands(&effects),
            vec![Command::FetchMoreFavoritesItems {
                index: 1,
                cursor: PageCursor::new("1", 2),
                generation: 0,
            }]
        );
    }

    #[test]
    fn test_toplists_more_uses_page() {
        let mut state = AppState::default();
        state
            .home
            .toplists
            .entry(ToplistsType::PastYear)
            .finish_fetch(&Ok(list_page(3, 9, &["1"])));

        let (_, effects) = reduce(state, HomeAction::FetchMoreToplistsItems(ToplistsType::PastYear));
        assert_eq!(
            commands(&effects),
            vec![Command::FetchMoreToplistsItems {
                toplists_type: ToplistsType::PastYear,
                page: 4,
                generation: 0,
            }]
        );
    }

    #[test]
    fn test_popular_empty_keeps_items() {
        let (state, _) = reduce(AppState::default(), HomeAction::FetchPopularItems);
        let (state, _) = reduce(
            state,
            HomeAction::FetchPopularItemsDone(Ok(list_page(0, 0, &["1"]))),
        );
        let (state, _) = reduce(state, HomeAction::FetchPopularItems);
        let (state, effects) = reduce(
            state,
            HomeAction::FetchPopularItemsDone(Ok(list_page(0, 0, &[]))),
        );

        assert!(effects.is_empty());
        assert!(state.home.popular.not_found);
        assert_eq!(state.home.popular.items, vec![gallery("1")]);
    }

    #[test]
    fn test_reverse_lookup_redirects_host() {
        let mut state = AppState::default();
        state.settings.setting.redirects_links_to_selected_host = true;
        state.settings.setting.gallery_host = GalleryHost::ExHentai;

        let (state, effects) = reduce(
            state,
            HomeAction::FetchGalleryByUrl {
                url: "https://e-hentai.org/g/123/abc/".to_string(),
                is_gallery_url: true,
            },
        );
        assert!(state.environment.gallery_reverse_loading);
        assert_eq!(
            commands(&effects),
            vec![Command::FetchGalleryByUrl {
                gid: "123".to_string(),
                url: "https://exhentai.org/g/123/abc/".to_string(),
                is_gallery_url: true,
            }]
        );
    }

    #[test]
    fn test_reverse_lookup_rejects_short_url() {
        let mut state = AppState::default();
        state.environment.gallery_reverse_load_failed = true;
        let (state, effects) = reduce(
            state,
            HomeAction::FetchGalleryByUrl {
                url: "https://e-hentai.org/g/".to_string(),
                is_gallery_url: true,
            },
        );
        assert!(effects.is_empty());
        assert!(!state.environment.gallery_reverse_loading);
        assert!(!state.environment.gallery_reverse_load_failed);
    }

    #[test]
    fn test_reverse_lookup_done() {
        let (state, effects) = reduce(
            AppState::default(),
            HomeAction::FetchGalleryByUrlDone {
                gid: "1".to_string(),
                result: Ok(gallery("1")),
            },
        );
        assert_eq!(state.environment.gallery_reverse_id.as_deref(), Some("1"));
        assert_eq!(
            effects,
            vec![Effect::Persist(PersistOp::AddGalleries(vec![gallery("1")]))]
        );

        let (state, effects) = reduce(
            state,
            HomeAction::FetchGalleryByUrlDone {
                gid: "2".to_string(),
                result: Err(AppError::NotFound),
            },
        );
        assert!(state.environment.gallery_reverse_load_failed);
        assert_eq!(
            effects,
            vec![Effect::Dispatch(
                AppOpsAction::UpdatePendingJumpInfos {
                    gid: "2".to_string(),
                    page_index: None,
                    comment_id: None,
                }
                .into()
            )]
        );
    }
}
