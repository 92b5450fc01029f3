//! Account actions
//!
//! Mutations of the member's data on the site. Successful gallery
//! mutations refresh the gallery detail.

use eh_client::{AppError, CommentVote, ProfileVerification};

#[derive(Debug, Clone, PartialEq)]
pub enum AccountAction {
    CreateEhProfile { name: String },
    CreateEhProfileDone(Result<(), AppError>),
    VerifyEhProfile,
    VerifyEhProfileDone(Result<ProfileVerification, AppError>),
    AddFavorite { gid: String, fav_index: i32 },
    AddFavoriteDone { gid: String, result: Result<(), AppError> },
    DeleteFavorite { gid: String },
    DeleteFavoriteDone { gid: String, result: Result<(), AppError> },
    /// `rating` is in half stars, 1..=10
    Rate { gid: String, rating: u8 },
    RateDone { gid: String, result: Result<(), AppError> },
    Comment { gid: String, content: String },
    CommentDone { gid: String, result: Result<(), AppError> },
    EditComment {
        gid: String,
        comment_id: String,
        content: String,
    },
    EditCommentDone { gid: String, result: Result<(), AppError> },
    VoteComment {
        gid: String,
        comment_id: String,
        vote: CommentVote,
    },
    VoteCommentDone { gid: String, result: Result<(), AppError> },
}

impl AccountAction {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            AccountAction::CreateEhProfileDone(Err(_))
                | AccountAction::VerifyEhProfileDone(Err(_))
                | AccountAction::AddFavoriteDone { result: Err(_), .. }
                | AccountAction::DeleteFavoriteDone { result: Err(_), .. }
                | AccountAction::RateDone { result: Err(_), .. }
                | AccountAction::CommentDone { result: Err(_), .. }
                | AccountAction::EditCommentDone { result: Err(_), .. }
                | AccountAction::VoteCommentDone { result: Err(_), .. }
        )
    }
}
