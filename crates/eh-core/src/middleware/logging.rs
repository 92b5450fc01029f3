use crate::actions::{Action, ContentAction, DetailAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
///
/// Failed `Done` actions go to the error level. Results carrying whole
/// pages or tables are reduced to counts.
#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if action.is_failure() {
            log::error!("Action failed: {:?}", action);
        } else if let Some(summary) = summarize(action) {
            log::trace!("Action: {}", summary);
        } else {
            log::trace!("Action: {:?}", action);
        }

        true // Always pass action through
    }
}

/// Short description of actions with bulky payloads
fn summarize(action: &Action) -> Option<String> {
    match action {
        Action::Home(home) => home.list_page().map(|page| {
            format!(
                "listing page {}/{} with {} galleries",
                page.page_number.current,
                page.page_number.maximum,
                page.galleries.len()
            )
        }),
        Action::Settings(SettingsAction::FetchTagTranslatorDone(Ok(translator))) => Some(format!(
            "tag translator {:?} with {} entries",
            translator.language,
            translator.contents.len()
        )),
        Action::Detail(DetailAction::FetchGalleryDetailDone {
            gid,
            result: Ok(payload),
        }) => Some(format!(
            "detail of {} with {} previews and {} comments",
            gid,
            payload.state.previews.len(),
            payload.state.comments.len()
        )),
        Action::Detail(DetailAction::FetchGalleryPreviewsDone {
            gid,
            page,
            result: Ok(previews),
        }) => Some(format!(
            "{} previews of {} page {}",
            previews.len(),
            gid,
            page
        )),
        Action::Content(ContentAction::FetchThumbnailUrlsDone {
            gid,
            page,
            result: Ok(thumbnails),
        }) => Some(format!(
            "{} thumbnails of {} page {}",
            thumbnails.len(),
            gid,
            page
        )),
        Action::Content(ContentAction::FetchGalleryNormalContentsDone {
            gid,
            page,
            result: Ok(contents),
        }) => Some(format!(
            "{} contents of {} page {}",
            contents.len(),
            gid,
            page
        )),
        Action::Content(ContentAction::FetchGalleryNormalContents {
            gid,
            page,
            thumbnails,
        }) => Some(format!(
            "fetch {} contents of {} page {}",
            thumbnails.len(),
            gid,
            page
        )),
        Action::Content(ContentAction::FetchMpvKeysDone {
            gid,
            result: Ok(keys),
            ..
        }) => Some(format!(
            "mpv keys of {} for {} images",
            gid,
            keys.image_keys.len()
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::HomeAction;
    use crate::test_support::list_page;
    use eh_client::AppError;
    use tokio::sync::mpsc;

    #[test]
    fn test_summarize_listing() {
        let action = Action::Home(HomeAction::FetchFrontpageItemsDone(Ok(list_page(
            1,
            3,
            &["1", "2"],
        ))));
        assert_eq!(
            summarize(&action).as_deref(),
            Some("listing page 1/3 with 2 galleries")
        );
        assert!(summarize(&Action::Home(HomeAction::FetchFrontpageItems)).is_none());
    }

    #[test]
    fn test_always_passes_through() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = LoggingMiddleware::new();
        let state = AppState::default();

        assert!(middleware.handle(&Action::None, &state, &dispatcher));
        assert!(middleware.handle(
            &Action::Home(HomeAction::FetchPopularItemsDone(Err(AppError::ParseFailed))),
            &state,
            &dispatcher
        ));
    }
}
