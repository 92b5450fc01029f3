//! Profile and preference state
//!
//! `user`, `filter`, `setting` and `tag_translator` are part of the
//! persisted `AppEnv`; the loading flags are transient.

use eh_client::{Filter, Greeting, Setting, TagTranslator, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    pub user: User,
    pub filter: Filter,
    pub setting: Setting,
    pub tag_translator: TagTranslator,

    pub user_info_loading: bool,
    pub favorite_names_loading: bool,
    pub greeting_loading: bool,

    /// Profile the site should serve pages with
    pub selected_profile: Option<i64>,
    /// Set once a profile creation was requested by verification
    pub profile_creation_requested: bool,
}

impl SettingsState {
    /// Merge the fields a profile page fetch provides
    ///
    /// Funds are only taken when both values are present.
    pub fn update_user(&mut self, user: &User) {
        if let Some(display_name) = &user.display_name {
            self.user.display_name = Some(display_name.clone());
        }
        if let Some(avatar_url) = &user.avatar_url {
            self.user.avatar_url = Some(avatar_url.clone());
        }
        if let (Some(gp), Some(credits)) = (&user.current_gp, &user.current_credits) {
            self.user.current_gp = Some(gp.clone());
            self.user.current_credits = Some(credits.clone());
        }
    }

    /// Store `greeting` if it is newer than the stored one
    ///
    /// Greetings without an update time are ignored. Returns whether the
    /// stored greeting changed.
    pub fn insert_greeting(&mut self, greeting: Greeting) -> bool {
        let Some(incoming) = greeting.update_time else {
            return false;
        };

        let replace = match &self.user.greeting {
            None => true,
            Some(stored) => stored.update_time.is_some_and(|stored| stored < incoming),
        };
        if replace {
            self.user.greeting = Some(greeting);
        }
        replace
    }
}
