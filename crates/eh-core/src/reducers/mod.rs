//! Domain reducers
//!
//! One reducer per action domain. The root `reducer::reduce` routes each
//! action to exactly one of them.

pub mod account_reducer;
pub mod app_ops_reducer;
pub mod content_reducer;
pub mod detail_reducer;
pub mod environment_reducer;
pub mod home_reducer;
pub mod settings_reducer;
