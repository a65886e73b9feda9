//! Console sample: export keyframe thumbnails of a video or upload a local file.
//!
//!   cargo run --example console -- --download-thumbnails <VIDEO_ID> --save-to-folder ./thumbs
//!   cargo run --example console -- --upload ./clip.mp4 --name "My clip" --description "..."
//!
//! Credentials come from `appsettings.json` and the `VIDEOINDEXER_*` variables.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use videoindexer::{AppSettings, Client, FolderSink, Session, UploadRequest, VideoIndexerError};

#[derive(Parser, Debug)]
#[command(name = "videoindexer-console", about = "Hello Video Indexer!")]
struct Cli {
    /// Settings file with the account credentials.
    #[arg(long, default_value = "appsettings.json")]
    settings: PathBuf,

    /// Save the keyframe thumbnails of this video.
    #[arg(long = "download-thumbnails", visible_alias = "dt", value_name = "VIDEO_ID")]
    download_thumbnails: Option<String>,

    /// Folder for saved thumbnails; the video id becomes a subfolder.
    /// Without it nothing is saved.
    #[arg(long = "save-to-folder", value_name = "DIR")]
    save_to_folder: Option<PathBuf>,

    /// Upload this local video file.
    #[arg(long, visible_alias = "up", value_name = "FILE")]
    upload: Option<String>,

    /// Name of the uploaded video (required with --upload).
    #[arg(long)]
    name: Option<String>,

    #[arg(long, visible_alias = "desc", default_value = "")]
    description: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    println!("Hello Video Indexer!");

    if let Err(err) = run(cli).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> videoindexer::Result<()> {
    let settings = AppSettings::load(&cli.settings)?;
    let client = Client::new();

    let Some(session) = client.authorize_with(&settings.credentials()).await? else {
        println!("Authorization error. Please verify that you entered valid Azure Video Indexer credentials and try again.");
        return Ok(());
    };
    println!("Video Indexer connection authorized.");

    if let Some(video_id) = cli.download_thumbnails.as_deref() {
        match cli.save_to_folder.as_deref() {
            Some(folder) => save_thumbnails(&client, &session, video_id, folder).await?,
            None => println!(
                "No --save-to-folder given; thumbnails of video {video_id} were not saved."
            ),
        }
    }

    if let Some(file) = cli.upload.as_deref() {
        let Some(name) = cli.name.as_deref().filter(|n| !n.is_empty()) else {
            println!("Upload Error: Name of video to upload is missing (--name).");
            return Ok(());
        };
        println!("Uploading video: {name}. Please wait...");
        let request = UploadRequest::local_file(name, file).description(&cli.description);
        let body = client.upload_video(&session, &request).await?;
        println!("Operation completed: {body}");
    }

    Ok(())
}

async fn save_thumbnails(
    client: &Client,
    session: &Session,
    video_id: &str,
    folder: &Path,
) -> videoindexer::Result<()> {
    let started = Instant::now();
    println!("Saving all shot thumbnails for video id: {video_id}. Please wait...");

    let mut sink = FolderSink::create(folder, video_id).await?;
    match client
        .export_keyframe_thumbnails(session, video_id, &mut sink)
        .await
    {
        Ok(count) => {
            println!(
                "[Elapsed time: {:.1?}] Operation completed for video {video_id}. Total of {count} thumbnails extracted to {}.",
                started.elapsed(),
                sink.dir().display()
            );
            Ok(())
        }
        Err(err @ VideoIndexerError::RemoteService { .. }) => {
            println!(
                "Video Indexer API error retrieving indexed insights for video {video_id} in account {}:\n{err}",
                session.account_id()
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}
