//! Reducer output besides the new state
//!
//! The reducer never touches the network or the store itself. It returns
//! effects, and the `Store` applies them after committing the new state.

use chrono::{DateTime, Utc};
use eh_client::{AppEnv, Gallery, GalleryDetail, GalleryState};
use eh_config::{Persistence, PersistenceError};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::actions::Action;
use crate::commands::Command;
use crate::state::AppState;

/// Side effect requested by a reduction
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Launch asynchronous work; at most one per reduction
    Command(Command),
    /// Write to the persistence collaborator
    Persist(PersistOp),
    /// Queue a follow-up action
    Dispatch(Action),
    /// Queue a follow-up action once `delay` has passed
    DispatchAfter { delay: Duration, action: Action },
}

impl Effect {
    /// Store the persisted part of `state`
    pub fn persist_app_env(state: &AppState) -> Self {
        Effect::Persist(PersistOp::UpdateAppEnv(state.app_env()))
    }
}

/// One write to the persistence collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum PersistOp {
    AddGalleries(Vec<Gallery>),
    AddDetail(GalleryDetail),
    UpdateFetchedState(GalleryState),
    UpdateContents {
        gid: String,
        contents: BTreeMap<u32, String>,
    },
    UpdateReadingProgress { gid: String, progress: u32 },
    UpdateAppEnv(AppEnv),
}

impl PersistOp {
    pub fn apply(&self, persistence: &dyn Persistence) -> Result<(), PersistenceError> {
        match self {
            PersistOp::AddGalleries(galleries) => persistence.add_galleries(galleries),
            PersistOp::AddDetail(detail) => persistence.add_detail(detail),
            PersistOp::UpdateFetchedState(state) => persistence.update_fetched_state(state),
            PersistOp::UpdateContents { gid, contents } => {
                persistence.update_contents(gid, contents)
            }
            PersistOp::UpdateReadingProgress { gid, progress } => {
                persistence.update_reading_progress(gid, *progress)
            }
            PersistOp::UpdateAppEnv(env) => persistence.update_app_env(env),
        }
    }
}

/// Read-only environment of a reduction
///
/// Reads from the store are lookups only; a failed read is logged and
/// treated as "not stored".
pub struct Context<'a> {
    pub persistence: &'a dyn Persistence,
    /// Delay of the retry after an empty page
    pub gap_skip_delay: Duration,
    /// Wall clock at the time of the reduction
    pub now: DateTime<Utc>,
}

impl<'a> Context<'a> {
    pub fn new(persistence: &'a dyn Persistence, gap_skip_delay: Duration) -> Self {
        Self {
            persistence,
            gap_skip_delay,
            now: Utc::now(),
        }
    }

    pub fn gallery(&self, gid: &str) -> Option<Gallery> {
        match self.persistence.fetch_gallery(gid) {
            Ok(gallery) => gallery,
            Err(e) => {
                log::warn!("Failed to read gallery {}: {}", gid, e);
                None
            }
        }
    }

    /// Stored gallery URL, empty when the gallery is unknown
    pub fn gallery_url(&self, gid: &str) -> String {
        self.gallery(gid)
            .map(|gallery| gallery.gallery_url)
            .unwrap_or_default()
    }

    pub fn gallery_token(&self, gid: &str) -> Option<String> {
        self.gallery(gid).map(|gallery| gallery.token)
    }

    pub fn gallery_state(&self, gid: &str) -> GalleryState {
        match self.persistence.fetch_gallery_state_non_nil(gid) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Failed to read gallery state {}: {}", gid, e);
                GalleryState::new(gid)
            }
        }
    }
}
