//! Account Reducer
//!
//! Profile setup and gallery mutations. Rating and voting need the
//! member's api credentials; without them the action is dropped.

use eh_client::{RateRequest, User, VoteRequest};

use crate::actions::{AccountAction, Action, DetailAction};
use crate::commands::Command;
use crate::effect::{Context, Effect};
use crate::state::AppState;

/// Name of the site profile created for the app
pub const PROFILE_NAME: &str = "EhPanda";

/// Numeric api credentials of the member plus the gallery's numeric id and token
struct ApiCredentials {
    apiuid: i64,
    apikey: String,
    gid: i64,
    token: String,
}

impl ApiCredentials {
    fn resolve(user: &User, gid: &str, ctx: &Context) -> Option<Self> {
        if user.apiuid.is_empty() {
            return None;
        }
        let apikey = user.apikey.clone()?;
        let token = ctx.gallery_token(gid)?;
        let apiuid = user.apiuid.parse().ok()?;
        let gid = gid.parse().ok()?;
        Some(Self {
            apiuid,
            apikey,
            gid,
            token,
        })
    }
}

pub fn reduce_account(
    mut state: AppState,
    action: &AccountAction,
    ctx: &Context,
) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        AccountAction::CreateEhProfile { name } => {
            effects.push(Effect::Command(Command::CreateEhProfile { name: name.clone() }));
        }
        AccountAction::CreateEhProfileDone(result) => {
            if result.is_ok() {
                effects.push(Effect::Dispatch(AccountAction::VerifyEhProfile.into()));
            }
        }
        AccountAction::VerifyEhProfile => {
            effects.push(Effect::Command(Command::VerifyEhProfile));
        }
        AccountAction::VerifyEhProfileDone(result) => {
            if let Ok(verification) = result {
                let settings = &mut state.settings;
                if let Some(profile) = verification.profile_value {
                    settings.selected_profile = Some(profile);
                } else if verification.profile_not_found {
                    if !settings.profile_creation_requested {
                        settings.profile_creation_requested = true;
                        effects.push(Effect::Dispatch(
                            AccountAction::CreateEhProfile {
                                name: PROFILE_NAME.to_string(),
                            }
                            .into(),
                        ));
                    }
                } else {
                    log::error!("Found profile but failed in parsing value");
                }
            }
        }

        AccountAction::AddFavorite { gid, fav_index } => {
            effects.push(Effect::Command(Command::AddFavorite {
                gid: gid.clone(),
                token: ctx.gallery_token(gid).unwrap_or_default(),
                fav_index: *fav_index,
            }));
        }
        AccountAction::DeleteFavorite { gid } => {
            effects.push(Effect::Command(Command::DeleteFavorite { gid: gid.clone() }));
        }
        AccountAction::Rate { gid, rating } => {
            match ApiCredentials::resolve(&state.settings.user, gid, ctx) {
                Some(credentials) => {
                    effects.push(Effect::Command(Command::Rate {
                        gid: gid.clone(),
                        request: RateRequest {
                            apiuid: credentials.apiuid,
                            apikey: credentials.apikey,
                            gid: credentials.gid,
                            token: credentials.token,
                            rating: *rating,
                        },
                    }));
                }
                None => log::warn!("Missing credentials to rate gallery {}", gid),
            }
        }
        AccountAction::Comment { gid, content } => {
            effects.push(Effect::Command(Command::Comment {
                gid: gid.clone(),
                gallery_url: ctx.gallery_url(gid),
                content: content.clone(),
            }));
        }
        AccountAction::EditComment {
            gid,
            comment_id,
            content,
        } => {
            effects.push(Effect::Command(Command::EditComment {
                gid: gid.clone(),
                gallery_url: ctx.gallery_url(gid),
                comment_id: comment_id.clone(),
                content: content.clone(),
            }));
        }
        AccountAction::VoteComment {
            gid,
            comment_id,
            vote,
        } => {
            let request = ApiCredentials::resolve(&state.settings.user, gid, ctx).and_then(
                |credentials| {
                    Some(VoteRequest {
                        apiuid: credentials.apiuid,
                        apikey: credentials.apikey,
                        gid: credentials.gid,
                        token: credentials.token,
                        comment_id: comment_id.parse().ok()?,
                        vote: *vote,
                    })
                },
            );
            match request {
                Some(request) => effects.push(Effect::Command(Command::VoteComment {
                    gid: gid.clone(),
                    request,
                })),
                None => log::warn!("Cannot vote on comment {} of gallery {}", comment_id, gid),
            }
        }

        AccountAction::AddFavoriteDone { gid, result }
        | AccountAction::DeleteFavoriteDone { gid, result }
        | AccountAction::RateDone { gid, result }
        | AccountAction::CommentDone { gid, result }
        | AccountAction::EditCommentDone { gid, result }
        | AccountAction::VoteCommentDone { gid, result } => {
            if result.is_ok() {
                effects.push(Effect::Dispatch(Action::Detail(
                    DetailAction::FetchGalleryDetail { gid: gid.clone() },
                )));
            }
        }
    }

    (state, effects)
}
