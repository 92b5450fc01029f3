//! Settings Reducer
//!
//! Profile fetches. Everything these touch lives in the persisted `AppEnv`,
//! so each applied result is written back.

use eh_client::{AppError, Greeting, TagTranslator, TranslatableLanguage};

use crate::actions::SettingsAction;
use crate::commands::Command;
use crate::effect::{Context, Effect};
use crate::state::AppState;

pub fn reduce_settings(
    mut state: AppState,
    action: &SettingsAction,
    ctx: &Context,
) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    let settings = &mut state.settings;

    match action {
        SettingsAction::FetchTagTranslator { locale } => {
            match TranslatableLanguage::from_locale(locale) {
                None => {
                    log::info!("No tag translation for locale {}", locale);
                    settings.tag_translator = TagTranslator::default();
                    settings.setting.translates_tags = false;
                    effects.push(Effect::persist_app_env(&state));
                }
                Some(language) => {
                    if settings.tag_translator.language != language {
                        settings.tag_translator = TagTranslator {
                            language,
                            ..TagTranslator::default()
                        };
                    }
                    effects.push(Effect::Command(Command::FetchTagTranslator {
                        language,
                        updated_date: settings.tag_translator.updated_date,
                    }));
                }
            }
        }
        SettingsAction::FetchTagTranslatorDone(result) => {
            if let Ok(translator) = result {
                settings.tag_translator = translator.clone();
                effects.push(Effect::persist_app_env(&state));
            }
        }

        SettingsAction::FetchGreeting => {
            if !settings.greeting_loading {
                settings.greeting_loading = true;
                effects.push(Effect::Command(Command::FetchGreeting));
            }
        }
        SettingsAction::FetchGreetingDone(result) => {
            settings.greeting_loading = false;

            let greeting = match result {
                Ok(greeting) => Some(greeting.clone()),
                // Nothing to collect today; remember that we asked
                Err(AppError::ParseFailed) => Some(Greeting {
                    update_time: Some(ctx.now),
                    ..Greeting::default()
                }),
                Err(_) => None,
            };
            if let Some(greeting) = greeting {
                if settings.insert_greeting(greeting) {
                    effects.push(Effect::persist_app_env(&state));
                }
            }
        }

        SettingsAction::FetchUserInfo => {
            let uid = settings.user.apiuid.clone();
            if !uid.is_empty() && !settings.user_info_loading {
                settings.user_info_loading = true;
                effects.push(Effect::Command(Command::FetchUserInfo { uid }));
            }
        }
        SettingsAction::FetchUserInfoDone(result) => {
            settings.user_info_loading = false;
            if let Ok(user) = result {
                settings.update_user(user);
                effects.push(Effect::persist_app_env(&state));
            }
        }

        SettingsAction::FetchFavoriteNames => {
            if !settings.favorite_names_loading {
                settings.favorite_names_loading = true;
                effects.push(Effect::Command(Command::FetchFavoriteNames));
            }
        }
        SettingsAction::FetchFavoriteNamesDone(result) => {
            settings.favorite_names_loading = false;
            if let Ok(names) = result {
                settings.user.favorite_names = Some(names.clone());
                effects.push(Effect::persist_app_env(&state));
            }
        }
    }

    (state, effects)
}
