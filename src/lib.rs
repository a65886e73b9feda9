//! # Video Indexer client for Rust
//!
//! Async client for the [Azure Video Indexer](https://api-portal.videoindexer.ai/)
//! REST API. Authorize against an account, list videos, fetch thumbnails and
//! playback URLs, read the computed insights, and upload new videos.
//!
//! ## Quick start
//!
//! ```no_run
//! use videoindexer::{Client, Credentials, InsightsSummary};
//!
//! #[tokio::main]
//! async fn main() -> videoindexer::Result<()> {
//!     let client = Client::new();
//!
//!     // Reads VIDEOINDEXER_ACCOUNTID, VIDEOINDEXER_APIKEY, VIDEOINDEXER_REGION
//!     let Some(session) = client.authorize_with(&Credentials::from_env()).await? else {
//!         eprintln!("credentials missing");
//!         return Ok(());
//!     };
//!
//!     let results = client.list_videos(&session).await?;
//!     for video in &results.videos {
//!         println!("{} | {} | {}", video.id, video.state, video.name);
//!     }
//!
//!     if let Some(video) = results.videos.first() {
//!         let insights = client.get_insights(&session, &video.id).await?;
//!         print!("{}", InsightsSummary::from_playlist(&insights));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Sessions
//!
//! Account tokens last about an hour and are not refreshed. When a call fails
//! with [`VideoIndexerError::is_unauthorized`], authorize again and retry.
//!
//! ```no_run
//! use videoindexer::{Client, UploadRequest};
//!
//! # async fn example(client: Client, session: videoindexer::Session) -> videoindexer::Result<()> {
//! let body = client
//!     .upload_video(
//!         &session,
//!         &UploadRequest::public_url("Keynote", "https://example.com/keynote.mp4"),
//!     )
//!     .await?;
//! let video = videoindexer::Video::from_upload_response(&body)?;
//! println!("indexing {}", video.id);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod errors;
mod models;
mod session;
mod summary;
mod thumbnails;

pub use client::{Client, ClientBuilder, MAX_LOCAL_UPLOAD_BYTES};
pub use config::{AppSettings, Credentials};
pub use errors::{Result, VideoIndexerError};
pub use models::{
    Appearance, AudioEffect, Block, Brand, Emotion, Face, FramePattern, InsightDuration, Insights,
    Instance, Keyframe, Keyword, Label, NamedEntity, NextPage, OcrLine, Playlist, Scene,
    SearchResults, Sentiment, Shot, Speaker, Statistics, SummarizedInsights,
    TextualContentModeration, TimeRange, Topic, TranscriptLine, UploadMethod, UploadRequest,
    Video, VideoState, VideosRange, VisualContentModeration,
};
pub use session::Session;
pub use summary::{InsightsSummary, Occurrences};
pub use thumbnails::{FolderSink, KeyframeThumbnail, ThumbnailSink};
