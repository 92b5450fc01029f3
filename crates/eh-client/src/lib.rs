//! Gallery site client interface
//!
//! This crate provides the boundary between the state core and the network
//! layer that talks to the gallery site. The network layer itself (HTTP and
//! HTML scraping) lives behind the `GalleryClient` trait, so the core only
//! ever sees typed results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GalleryClient trait                 │
//! │  - fetch_search_items()                          │
//! │  - fetch_gallery_detail()                        │
//! │  - fetch_thumbnail_urls()  ...                   │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!        Result<T, AppError> for every call
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use eh_client::{GalleryClient, ListPage, AppError};
//!
//! async fn first_page(client: &dyn GalleryClient) -> Result<ListPage, AppError> {
//!     client.fetch_frontpage_items(None).await
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;
pub mod urls;

/// Default gallery host
pub const DEFAULT_HOST: &str = "e-hentai.org";

pub use client::{GalleryClient, PageCursor};
pub use error::AppError;
pub use types::{
    AppEnv, AppIconType, ArchiveFunds, AutoLockPolicy, Category, CommentVote, DetailPayload,
    Filter, Gallery, GalleryComment, GalleryDetail, GalleryHost, GalleryState, GalleryTag,
    Greeting, ListPage, MpvKeys, PageNumber, PreviewConfig, ProfileVerification, RateRequest,
    Setting, TagTranslator, ToplistsType, TranslatableLanguage, User, VoteRequest,
};
