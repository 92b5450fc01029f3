//! Unidirectional state core of the gallery browser
//!
//! A single `AppState` tree is owned by the [`Store`]. Everything that
//! happens is an [`Action`]; the root [`reduce`] function turns
//! `(state, action)` into a new state plus [`Effect`]s. Asynchronous work is
//! described by a [`Command`] and run by a [`CommandExecutor`], which feeds
//! the outcome back in as a `*Done` action.
//!
//! # Architecture
//!
//! ```text
//!   Dispatcher::dispatch ──▶ Store loop (single task)
//!                              │ middleware (logging)
//!                              │ reduce(state, action, ctx)
//!                              │ commit + publish (watch channel)
//!                              ▼
//!      ┌──────────────┬────────┴──────┬──────────────────┐
//!      ▼              ▼               ▼                  ▼
//!   Command       Persist op      Dispatch        DispatchAfter
//!   (executor)    (Persistence)   (follow-up)     (gap-skip retry)
//!      │
//!      └──▶ GalleryClient ──▶ *Done action ──▶ Dispatcher
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use eh_core::{Action, HomeAction, Store};
//!
//! async fn browse(config: &eh_config::AppConfig, client: Arc<dyn GalleryClient>) -> anyhow::Result<()> {
//!     let store = Store::from_config(config, client)?;
//!     let dispatcher = store.dispatcher().clone();
//!     let handle = tokio::spawn(store.run());
//!
//!     dispatcher.dispatch(HomeAction::FetchFrontpageItems.into());
//!     // ...
//!     dispatcher.dispatch(Action::Quit);
//!     handle.await??;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod commands;
pub mod dispatcher;
pub mod effect;
pub mod executor;
pub mod logger;
pub mod middleware;
pub mod reducer;
pub mod reducers;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use actions::{
    AccountAction, Action, AppOpsAction, ContentAction, DetailAction, EnvironmentAction,
    HomeAction, SettingsAction,
};
pub use commands::Command;
pub use dispatcher::Dispatcher;
pub use effect::{Context, Effect, PersistOp};
pub use executor::{ClientExecutor, CommandExecutor};
pub use middleware::{LoggingMiddleware, Middleware};
pub use reducer::reduce;
pub use state::{AppState, HomeState, KeyedLists, ListKey, ListSlot};
pub use store::{Store, StoreError};
