//! Quick-start examples for the Video Indexer Rust client.
//!
//! Run with:
//!   VIDEOINDEXER_ACCOUNTID=... VIDEOINDEXER_APIKEY=... VIDEOINDEXER_REGION=trial \
//!     cargo run --example quickstart
//!
//! Or put the same keys in an `appsettings.json` next to the working directory.

use tracing_subscriber::EnvFilter;
use videoindexer::{AppSettings, Client, InsightsSummary, UploadRequest, Video};

#[tokio::main]
async fn main() -> videoindexer::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // -----------------------------------------------------------------------
    // 1. Connect (environment overrides appsettings.json)
    // -----------------------------------------------------------------------
    let settings = AppSettings::load("appsettings.json")?;
    let client = Client::new();

    let Some(session) = client.authorize_with(&settings.credentials()).await? else {
        println!("Authorization error. Please verify that you entered valid Azure Video Indexer credentials and try again.");
        return Ok(());
    };
    println!("Video Indexer connection authorized for account {}", session.account_id());
    println!();

    // -----------------------------------------------------------------------
    // 2. List videos (first page only)
    // -----------------------------------------------------------------------
    let results = client.list_videos(&session).await?;
    println!("Search results found: {} video entries.", results.videos.len());
    for video in &results.videos {
        println!(
            "  {} | {} | {} | {}s",
            video.id, video.state, video.name, video.duration_in_seconds
        );
    }
    if results.has_more() {
        println!("  (more videos available)");
    }
    println!();

    // -----------------------------------------------------------------------
    // 3. Thumbnail, playback URL and insights of the first video
    // -----------------------------------------------------------------------
    if let Some(video) = results.videos.first() {
        if !video.thumbnail_id.is_empty() {
            let thumbnail = client
                .get_thumbnail(&session, &video.id, &video.thumbnail_id)
                .await?;
            println!("Thumbnail: {} bytes", thumbnail.len());
        }

        let url = client.get_video_playback_url(&session, &video.id).await?;
        println!("Playback URL: {url}");

        let insights = client.get_insights(&session, &video.id).await?;
        println!("Current Video Name: {}", insights.name);
        print!("{}", InsightsSummary::from_playlist(&insights));
        println!();
    }

    // -----------------------------------------------------------------------
    // 4. Upload from a public URL
    // -----------------------------------------------------------------------
    let request = UploadRequest::public_url("Sample video", "https://example.com/sample.mp4")
        .description("Uploaded by the quickstart");
    match client.upload_video(&session, &request).await {
        Ok(body) => {
            let video = Video::from_upload_response(&body)?;
            println!("Uploaded! Video ID: {} (state: {})", video.id, video.state);
        }
        Err(err) if err.is_unauthorized() => {
            println!("Access token expired, authorize again: {err}");
        }
        Err(err) => println!("Upload failed: {err}"),
    }

    Ok(())
}
