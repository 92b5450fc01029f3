//! Actions module
//!
//! Every event the state core reacts to is an `Action`. Actions are tagged by
//! domain; each domain has its own sub-enum and its own reducer.
//!
//! Every `Fetch*` trigger has exactly one paired `*Done` action carrying a
//! `Result<T, AppError>`. Triggers never do work themselves, they only make
//! the reducer emit a `Command`.

pub mod account;
pub mod app_ops;
pub mod content;
pub mod detail;
pub mod environment;
pub mod home;
pub mod settings;

pub use account::AccountAction;
pub use app_ops::AppOpsAction;
pub use content::ContentAction;
pub use detail::DetailAction;
pub use environment::EnvironmentAction;
pub use home::HomeAction;
pub use settings::SettingsAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Bookkeeping on settings, history and per-gallery caches
    AppOps(AppOpsAction),
    /// UI flags (sheets, menus, lock state)
    Environment(EnvironmentAction),
    /// Profile related fetches
    Settings(SettingsAction),
    /// Gallery listings
    Home(HomeAction),
    /// Gallery detail pages
    Detail(DetailAction),
    /// Reading contents
    Content(ContentAction),
    /// Account mutations
    Account(AccountAction),
    /// Stop the dispatch loop
    Quit,
    None,
}

impl Action {
    /// Whether this is a `*Done` action carrying an error
    pub fn is_failure(&self) -> bool {
        match self {
            Action::Settings(action) => action.is_failure(),
            Action::Home(action) => action.is_failure(),
            Action::Detail(action) => action.is_failure(),
            Action::Content(action) => action.is_failure(),
            Action::Account(action) => action.is_failure(),
            Action::AppOps(_) | Action::Environment(_) | Action::Quit | Action::None => false,
        }
    }
}

impl From<AppOpsAction> for Action {
    fn from(action: AppOpsAction) -> Self {
        Action::AppOps(action)
    }
}

impl From<EnvironmentAction> for Action {
    fn from(action: EnvironmentAction) -> Self {
        Action::Environment(action)
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::Settings(action)
    }
}

impl From<HomeAction> for Action {
    fn from(action: HomeAction) -> Self {
        Action::Home(action)
    }
}

impl From<DetailAction> for Action {
    fn from(action: DetailAction) -> Self {
        Action::Detail(action)
    }
}

impl From<ContentAction> for Action {
    fn from(action: ContentAction) -> Self {
        Action::Content(action)
    }
}

impl From<AccountAction> for Action {
    fn from(action: AccountAction) -> Self {
        Action::Account(action)
    }
}
