use eh_client::AppEnv;
use eh_config::Persistence;

use super::{ContentState, DetailState, EnvironmentState, HomeState, SettingsState};

/// Application state - the single source of truth
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub running: bool,
    pub environment: EnvironmentState,
    pub settings: SettingsState,
    pub home: HomeState,
    pub detail: DetailState,
    pub content: ContentState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            environment: EnvironmentState::default(),
            settings: SettingsState::default(),
            home: HomeState::default(),
            detail: DetailState::default(),
            content: ContentState::default(),
        }
    }
}

impl AppState {
    /// Initial state from defaults and the persisted `AppEnv`
    pub fn from_app_env(env: AppEnv) -> Self {
        let mut state = Self::default();
        state.settings.user = env.user;
        state.settings.filter = env.filter;
        state.settings.setting = env.setting;
        state.settings.tag_translator = env.tag_translator;
        state.home.history_keywords = env.history_keywords;
        state
    }

    /// Load the initial state, falling back to defaults when the store
    /// cannot be read
    pub fn load(persistence: &dyn Persistence) -> Self {
        match persistence.fetch_app_env() {
            Ok(env) => Self::from_app_env(env),
            Err(e) => {
                log::warn!("Failed to load app env, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// The persisted part of the state
    pub fn app_env(&self) -> AppEnv {
        AppEnv {
            user: self.settings.user.clone(),
            filter: self.settings.filter.clone(),
            setting: self.settings.setting.clone(),
            tag_translator: self.settings.tag_translator.clone(),
            history_keywords: self.home.history_keywords.clone(),
        }
    }
}
