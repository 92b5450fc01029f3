//! Application state tree
//!
//! The whole tree is owned by the `Store` and only ever replaced by the
//! reducer. Observers get snapshots through the store's watch channel.

mod app;
mod content;
mod detail;
mod environment;
mod home;
mod settings;

pub use app::AppState;
pub use content::ContentState;
pub use detail::DetailState;
pub use environment::{
    CommentViewSheetState, DetailViewSheetState, EnvironmentState, FilterViewActionSheetState,
    HomeListType, HomeViewSheetState, SettingViewActionSheetState, SettingViewSheetState,
};
pub use home::{HomeState, KeyedLists, ListKey, ListSlot, PageOutcome};
pub use settings::SettingsState;
