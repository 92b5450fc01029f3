use crate::actions::Action;
use crate::effect::{Context, Effect};
use crate::reducers::{
    account_reducer, app_ops_reducer, content_reducer, detail_reducer, environment_reducer,
    home_reducer, settings_reducer,
};
use crate::state::AppState;

/// Root reducer that routes each action to its domain reducer
///
/// Pure apart from reads through `ctx`: takes state and action, returns the
/// new state and the effects the store has to perform. At most one of the
/// effects is a `Command`.
pub fn reduce(mut state: AppState, action: &Action, ctx: &Context) -> (AppState, Vec<Effect>) {
    let (state, effects) = match action {
        Action::Quit => {
            log::debug!("Quit requested");
            state.running = false;
            (state, Vec::new())
        }
        Action::None => (state, Vec::new()),
        Action::Environment(action) => {
            state.environment = environment_reducer::reduce_environment(state.environment, action);
            (state, Vec::new())
        }
        Action::AppOps(action) => app_ops_reducer::reduce_app_ops(state, action, ctx),
        Action::Settings(action) => settings_reducer::reduce_settings(state, action, ctx),
        Action::Home(action) => home_reducer::reduce_home(state, action, ctx),
        Action::Detail(action) => detail_reducer::reduce_detail(state, action, ctx),
        Action::Content(action) => {
            let (content, effects) = content_reducer::reduce_content(
                state.content,
                action,
                &state.detail.preview_config,
                ctx,
            );
            state.content = content;
            (state, effects)
        }
        Action::Account(action) => account_reducer::reduce_account(state, action, ctx),
    };

    debug_assert!(
        effects
            .iter()
            .filter(|effect| matches!(effect, Effect::Command(_)))
            .count()
            <= 1,
        "more than one command for {:?}",
        action
    );

    (state, effects)
}
