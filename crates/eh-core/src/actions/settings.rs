//! Profile related actions

use eh_client::{AppError, Greeting, TagTranslator, User};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    /// Refresh the tag table for the language matching `locale` (e.g. "zh-Hans-CN")
    FetchTagTranslator { locale: String },
    FetchTagTranslatorDone(Result<TagTranslator, AppError>),
    FetchGreeting,
    FetchGreetingDone(Result<Greeting, AppError>),
    FetchUserInfo,
    FetchUserInfoDone(Result<User, AppError>),
    FetchFavoriteNames,
    FetchFavoriteNamesDone(Result<BTreeMap<i32, String>, AppError>),
}

impl SettingsAction {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            SettingsAction::FetchTagTranslatorDone(Err(_))
                | SettingsAction::FetchGreetingDone(Err(_))
                | SettingsAction::FetchUserInfoDone(Err(_))
                | SettingsAction::FetchFavoriteNamesDone(Err(_))
        )
    }
}
