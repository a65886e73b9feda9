//! Export of the keyframe thumbnails of an indexed video.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::client::Client;
use crate::errors::Result;
use crate::session::Session;

/// One keyframe thumbnail and where it sits in the video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframeThumbnail {
    pub video_id: String,
    pub video_name: String,
    pub shot_id: i64,
    pub keyframe_id: i64,
    pub thumbnail_id: String,
    /// Start of the keyframe instance, e.g. "0:00:05.3".
    pub start_time: String,
    /// `{videoId}_{shotId}_{keyframeId}_{n}.jpg`, `n` counting every keyframe instance.
    pub file_name: String,
}

impl KeyframeThumbnail {
    /// Descriptive metadata for storage backends that support it.
    pub fn metadata(&self) -> [(&'static str, String); 5] {
        [
            ("videoid", self.video_id.clone()),
            ("videoname", self.video_name.clone()),
            ("shotid", self.shot_id.to_string()),
            ("keyframeid", self.keyframe_id.to_string()),
            ("starttime", self.start_time.clone()),
        ]
    }
}

/// Destination for exported thumbnails: a folder, blob storage, ...
pub trait ThumbnailSink {
    fn store(
        &mut self,
        thumbnail: &KeyframeThumbnail,
        image: &[u8],
    ) -> impl Future<Output = Result<()>>;
}

/// Writes thumbnails to `{root}/{video_id}/{file_name}`.
#[derive(Debug, Clone)]
pub struct FolderSink {
    dir: PathBuf,
}

impl FolderSink {
    /// Create the per-video folder if needed.
    pub async fn create(root: impl AsRef<Path>, video_id: &str) -> Result<Self> {
        let dir = root.as_ref().join(video_id);
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ThumbnailSink for FolderSink {
    async fn store(&mut self, thumbnail: &KeyframeThumbnail, image: &[u8]) -> Result<()> {
        let path = self.dir.join(&thumbnail.file_name);
        debug!(path = %path.display(), "saving thumbnail image file");
        tokio::fs::write(&path, image).await?;
        Ok(())
    }
}

impl Client {
    /// Fetch every keyframe thumbnail of a video and hand it to `sink`.
    ///
    /// Instances without a thumbnail id and empty images are skipped. Returns
    /// the number of thumbnails stored.
    pub async fn export_keyframe_thumbnails<S: ThumbnailSink>(
        &self,
        session: &Session,
        video_id: &str,
        sink: &mut S,
    ) -> Result<usize> {
        let playlist = self.get_insights(session, video_id).await?;

        let mut instance_count = 0usize;
        let mut stored = 0usize;

        for video in &playlist.videos {
            let Some(insights) = video.insights.as_ref() else {
                continue;
            };
            debug!(video_id = %video.id, shots = insights.shots.len(), "exporting shot thumbnails");

            for shot in &insights.shots {
                for keyframe in &shot.key_frames {
                    for instance in &keyframe.instances {
                        let n = instance_count;
                        instance_count += 1;

                        if instance.thumbnail_id.is_empty() {
                            continue;
                        }

                        let image = self
                            .get_thumbnail(session, video_id, &instance.thumbnail_id)
                            .await?;
                        if image.is_empty() {
                            continue;
                        }

                        let thumbnail = KeyframeThumbnail {
                            video_id: video_id.to_string(),
                            video_name: playlist.name.clone(),
                            shot_id: shot.id,
                            keyframe_id: keyframe.id,
                            thumbnail_id: instance.thumbnail_id.clone(),
                            start_time: instance.start.clone(),
                            file_name: format!("{video_id}_{}_{}_{n}.jpg", shot.id, keyframe.id),
                        };
                        sink.store(&thumbnail, &image).await?;
                        stored += 1;
                    }
                }
            }
        }

        info!(%video_id, stored, "keyframe thumbnail export finished");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumbnail() -> KeyframeThumbnail {
        KeyframeThumbnail {
            video_id: "v1".into(),
            video_name: "Demo".into(),
            shot_id: 3,
            keyframe_id: 9,
            thumbnail_id: "t-9".into(),
            start_time: "0:00:05.3".into(),
            file_name: "v1_3_9_0.jpg".into(),
        }
    }

    #[test]
    fn metadata_pairs() {
        let meta = thumbnail().metadata();
        assert_eq!(meta[0], ("videoid", "v1".to_string()));
        assert_eq!(meta[2], ("shotid", "3".to_string()));
        assert_eq!(meta[3], ("keyframeid", "9".to_string()));
        assert_eq!(meta[4], ("starttime", "0:00:05.3".to_string()));
    }

    #[tokio::test]
    async fn folder_sink_writes_under_video_folder() {
        let root = tempfile::tempdir().unwrap();
        let mut sink = FolderSink::create(root.path(), "v1").await.unwrap();
        assert!(sink.dir().ends_with("v1"));

        sink.store(&thumbnail(), b"\xff\xd8jpeg").await.unwrap();

        let written = std::fs::read(root.path().join("v1").join("v1_3_9_0.jpg")).unwrap();
        assert_eq!(written, b"\xff\xd8jpeg");
    }
}
