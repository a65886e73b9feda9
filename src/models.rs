use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::Result;

/// Maps JSON `null` to `T::default()`. The service sends `null` for empty
/// lists and unset strings; records never expose a nullable collection.
fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

/// How the video bytes reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMethod {
    /// `source` is a local path (or `file://` URL) sent as a multipart body.
    #[default]
    LocalFile,
    /// `source` is a public URL the service downloads itself.
    PublicUrl,
    /// The file goes to blob storage first; that step is the caller's.
    SendToBlobStorage,
}

/// Parameters for [`Client::upload_video`](crate::Client::upload_video).
///
/// ```
/// use videoindexer::UploadRequest;
///
/// let req = UploadRequest::public_url("Launch keynote", "https://example.com/keynote.mp4")
///     .description("Product launch")
///     .public(true);
/// assert_eq!(req.privacy(), "public");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    /// Required; the upload is rejected locally when empty.
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub source: Option<String>,
    pub method: UploadMethod,
}

impl UploadRequest {
    pub fn new(name: impl Into<String>, method: UploadMethod) -> Self {
        Self {
            name: name.into(),
            method,
            ..Self::default()
        }
    }

    /// Upload the bytes of a local file (at most 2 GiB).
    pub fn local_file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, UploadMethod::LocalFile).source(path)
    }

    /// Let the service fetch the video from `url` (up to 30 GB / 4 hours).
    pub fn public_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, UploadMethod::PublicUrl).source(url)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Value of the `privacy` query parameter.
    pub fn privacy(&self) -> &'static str {
        if self.is_public {
            "public"
        } else {
            "private"
        }
    }
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

/// First page of a `Videos/Search` call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResults {
    #[serde(rename = "results", deserialize_with = "null_default")]
    pub videos: Vec<Video>,
    pub next_page: NextPage,
}

impl SearchResults {
    /// `true` when the service holds more results than this page. The client
    /// does not fetch further pages.
    pub fn has_more(&self) -> bool {
        !self.next_page.done
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NextPage {
    pub page_size: i64,
    pub skip: i64,
    pub done: bool,
}

/// Processing state reported in [`Video::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoState {
    Uploaded,
    Processing,
    Processed,
    Failed,
    Quarantined,
    Unknown,
}

impl VideoState {
    pub fn parse(state: &str) -> Self {
        match state.to_ascii_lowercase().as_str() {
            "uploaded" => Self::Uploaded,
            "processing" => Self::Processing,
            "processed" => Self::Processed,
            "failed" => Self::Failed,
            "quarantined" => Self::Quarantined,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    pub account_id: String,
    pub id: String,
    pub partition: Option<serde_json::Value>,
    pub external_id: Option<serde_json::Value>,
    pub external_url: Option<serde_json::Value>,
    pub metadata: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub description: Option<String>,
    /// ISO 8601.
    pub created: Option<String>,
    pub last_modified: Option<String>,
    pub last_indexed: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub privacy_mode: String,
    #[serde(deserialize_with = "null_default")]
    pub user_name: String,
    pub is_owned: bool,
    pub is_base: bool,
    pub has_source_video_file: bool,
    /// "Uploaded", "Processing", "Processed", "Failed" or "Quarantined".
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    #[serde(deserialize_with = "null_default")]
    pub moderation_state: String,
    #[serde(deserialize_with = "null_default")]
    pub review_state: String,
    /// e.g. "100%".
    #[serde(deserialize_with = "null_default")]
    pub processing_progress: String,
    pub duration_in_seconds: i64,
    #[serde(deserialize_with = "null_default")]
    pub thumbnail_video_id: String,
    #[serde(deserialize_with = "null_default")]
    pub thumbnail_id: String,
    #[serde(deserialize_with = "null_default")]
    pub search_matches: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub indexing_preset: String,
    #[serde(deserialize_with = "null_default")]
    pub streaming_preset: String,
    #[serde(deserialize_with = "null_default")]
    pub source_language: String,
    #[serde(deserialize_with = "null_default")]
    pub source_languages: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub languages: Vec<String>,
    pub detect_source_language: bool,
    #[serde(deserialize_with = "null_default")]
    pub language_auto_detect_mode: String,
    pub linguistic_model_id: Option<String>,
    pub person_model_id: Option<String>,
    pub failure_code: Option<String>,
    pub failure_message: Option<String>,
    /// Present only in the per-video detailed view, once processed.
    pub insights: Option<Insights>,
    pub is_adult: bool,
    pub published_url: Option<String>,
    pub published_proxy_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub view_token: String,
}

impl Video {
    pub fn state(&self) -> VideoState {
        VideoState::parse(&self.state)
    }

    pub fn is_processed(&self) -> bool {
        self.state() == VideoState::Processed
    }

    /// Failed or quarantined: the video will not be indexed.
    pub fn is_failed(&self) -> bool {
        matches!(self.state(), VideoState::Failed | VideoState::Quarantined)
    }

    /// Parse the body returned by [`Client::upload_video`](crate::Client::upload_video).
    pub fn from_upload_response(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

/// Response of the `Videos/{id}/Index` call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Playlist {
    pub partition: Option<serde_json::Value>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub privacy_mode: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    pub account_id: String,
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub user_name: String,
    pub created: Option<String>,
    pub is_owned: bool,
    pub is_editable: bool,
    pub is_base: bool,
    pub duration_in_seconds: i64,
    pub summarized_insights: Option<SummarizedInsights>,
    #[serde(deserialize_with = "null_default")]
    pub videos: Vec<Video>,
    #[serde(deserialize_with = "null_default")]
    pub videos_ranges: Vec<VideosRange>,
}

/// Detailed insights of a single video. Elements carry [`Instance`]s.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Insights {
    #[serde(deserialize_with = "null_default")]
    pub version: String,
    /// "0:01:23.45".
    #[serde(deserialize_with = "null_default")]
    pub duration: String,
    #[serde(deserialize_with = "null_default")]
    pub source_language: String,
    #[serde(deserialize_with = "null_default")]
    pub source_languages: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub transcript: Vec<TranscriptLine>,
    #[serde(deserialize_with = "null_default")]
    pub ocr: Vec<OcrLine>,
    #[serde(deserialize_with = "null_default")]
    pub keywords: Vec<Keyword>,
    #[serde(deserialize_with = "null_default")]
    pub topics: Vec<Topic>,
    #[serde(deserialize_with = "null_default")]
    pub faces: Vec<Face>,
    #[serde(deserialize_with = "null_default")]
    pub labels: Vec<Label>,
    #[serde(deserialize_with = "null_default")]
    pub scenes: Vec<Scene>,
    #[serde(deserialize_with = "null_default")]
    pub shots: Vec<Shot>,
    #[serde(deserialize_with = "null_default")]
    pub brands: Vec<Brand>,
    #[serde(deserialize_with = "null_default")]
    pub named_locations: Vec<NamedEntity>,
    #[serde(deserialize_with = "null_default")]
    pub named_people: Vec<NamedEntity>,
    #[serde(deserialize_with = "null_default")]
    pub sentiments: Vec<Sentiment>,
    #[serde(deserialize_with = "null_default")]
    pub emotions: Vec<Emotion>,
    #[serde(deserialize_with = "null_default")]
    pub visual_content_moderation: Vec<VisualContentModeration>,
    #[serde(deserialize_with = "null_default")]
    pub blocks: Vec<Block>,
    #[serde(deserialize_with = "null_default")]
    pub frame_patterns: Vec<FramePattern>,
    #[serde(deserialize_with = "null_default")]
    pub speakers: Vec<Speaker>,
    pub textual_content_moderation: Option<TextualContentModeration>,
    pub statistics: Option<Statistics>,
}

/// Account-level summary of a playlist. Elements carry [`Appearance`]s.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarizedInsights {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub privacy_mode: String,
    pub duration: Option<InsightDuration>,
    #[serde(deserialize_with = "null_default")]
    pub thumbnail_video_id: String,
    #[serde(deserialize_with = "null_default")]
    pub thumbnail_id: String,
    #[serde(deserialize_with = "null_default")]
    pub audio_effects: Vec<AudioEffect>,
    #[serde(deserialize_with = "null_default")]
    pub faces: Vec<Face>,
    #[serde(deserialize_with = "null_default")]
    pub keywords: Vec<Keyword>,
    #[serde(deserialize_with = "null_default")]
    pub sentiments: Vec<Sentiment>,
    #[serde(deserialize_with = "null_default")]
    pub emotions: Vec<Emotion>,
    #[serde(deserialize_with = "null_default")]
    pub labels: Vec<Label>,
    #[serde(deserialize_with = "null_default")]
    pub frame_patterns: Vec<FramePattern>,
    #[serde(deserialize_with = "null_default")]
    pub brands: Vec<Brand>,
    #[serde(deserialize_with = "null_default")]
    pub named_locations: Vec<NamedEntity>,
    #[serde(deserialize_with = "null_default")]
    pub named_people: Vec<NamedEntity>,
    pub statistics: Option<Statistics>,
    #[serde(deserialize_with = "null_default")]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightDuration {
    #[serde(deserialize_with = "null_default")]
    pub time: String,
    pub seconds: f64,
}

/// A time range in the summarized view.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appearance {
    #[serde(deserialize_with = "null_default")]
    pub start_time: String,
    #[serde(deserialize_with = "null_default")]
    pub end_time: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

/// A time range in the detailed view, with optional per-instance metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    /// Set on keyframe and face instances; empty otherwise.
    #[serde(deserialize_with = "null_default")]
    pub thumbnail_id: String,
    #[serde(deserialize_with = "null_default")]
    pub brand_type: String,
    #[serde(deserialize_with = "null_default")]
    pub instance_source: String,
    #[serde(deserialize_with = "null_default")]
    pub adjusted_start: String,
    #[serde(deserialize_with = "null_default")]
    pub adjusted_end: String,
    #[serde(deserialize_with = "null_default")]
    pub start: String,
    #[serde(deserialize_with = "null_default")]
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub correspondence_count: i64,
    /// Keyed by speaker id.
    #[serde(deserialize_with = "null_default")]
    pub speaker_talk_to_listen_ratio: HashMap<String, f64>,
    #[serde(deserialize_with = "null_default")]
    pub speaker_longest_monolog: HashMap<String, i64>,
    #[serde(deserialize_with = "null_default")]
    pub speaker_number_of_fragments: HashMap<String, i64>,
    #[serde(deserialize_with = "null_default")]
    pub speaker_word_count: HashMap<String, i64>,
}

/// Clapping, speech, silence, ...
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioEffect {
    pub id: i64,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Face {
    pub id: i64,
    /// "Unknown #N" for faces that match no known person.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub video_id: String,
    pub reference_id: Option<String>,
    pub reference_type: Option<String>,
    pub confidence: f64,
    pub description: Option<String>,
    pub title: Option<String>,
    pub known_person_id: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub thumbnail_id: String,
    /// Seconds on screen.
    pub seen_duration: f64,
    pub seen_duration_ratio: f64,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Keyword {
    pub is_transcript: bool,
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    pub confidence: f64,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sentiment {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub sentiment_key: String,
    /// "Positive", "Neutral" or "Negative".
    #[serde(deserialize_with = "null_default")]
    pub sentiment_type: String,
    pub seen_duration_ratio: f64,
    pub average_score: f64,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Emotion {
    pub id: i64,
    /// "Joy", "Sad", "Anger", "Fear".
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    pub seen_duration_ratio: f64,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

/// Visual objects and actions: person, indoor, outdoor, ...
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FramePattern {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub confidence: f64,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub reference_id: Option<String>,
    pub reference_type: Option<String>,
    pub reference_url: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    pub confidence: f64,
    pub seen_duration: f64,
    pub is_custom: bool,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

/// A named person or location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedEntity {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub reference_id: Option<String>,
    pub reference_url: Option<String>,
    pub confidence: f64,
    pub description: Option<String>,
    pub seen_duration: f64,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    pub is_custom: bool,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

/// A topic inferred from the transcript.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Topic {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub reference_id: Option<String>,
    pub reference_type: Option<String>,
    pub reference_url: Option<String>,
    pub iptc_name: Option<String>,
    pub iab_name: Option<String>,
    pub confidence: f64,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub appearances: Vec<Appearance>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

/// Banned words detected in the transcript.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextualContentModeration {
    pub id: i64,
    pub banned_words_count: i64,
    pub banned_words_ratio: f64,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscriptLine {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    pub confidence: f64,
    pub speaker_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

/// Text read from the frames, with its bounding box in pixels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrLine {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    pub confidence: f64,
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scene {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shot {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub key_frames: Vec<Keyframe>,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

/// Keyframe instances carry the thumbnail id of the frame.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Keyframe {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualContentModeration {
    pub id: i64,
    pub adult_score: f64,
    pub racy_score: f64,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Speaker {
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideosRange {
    #[serde(deserialize_with = "null_default")]
    pub video_id: String,
    pub range: Option<TimeRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeRange {
    #[serde(deserialize_with = "null_default")]
    pub start: String,
    #[serde(deserialize_with = "null_default")]
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instance(start: &str, end: &str) -> serde_json::Value {
        json!({ "start": start, "end": end, "adjustedStart": start, "adjustedEnd": end })
    }

    fn appearance(start: f64, end: f64) -> serde_json::Value {
        json!({
            "startTime": "0:00:00",
            "endTime": "0:00:01",
            "startSeconds": start,
            "endSeconds": end,
        })
    }

    #[test]
    fn empty_playlist_defaults_every_collection() {
        let playlist: Playlist = serde_json::from_str("{}").unwrap();
        assert!(playlist.videos.is_empty());
        assert!(playlist.videos_ranges.is_empty());
        assert!(playlist.summarized_insights.is_none());

        let insights: Insights = serde_json::from_str("{}").unwrap();
        assert!(insights.faces.is_empty());
        assert!(insights.shots.is_empty());
        assert!(insights.transcript.is_empty());
        assert!(insights.statistics.is_none());
    }

    #[test]
    fn null_collections_become_empty() {
        let payload = json!({
            "id": "v1",
            "faces": null,
            "keywords": null,
            "sourceLanguages": null,
            "statistics": { "speakerWordCount": null, "correspondenceCount": 2 },
        });
        let insights: SummarizedInsights = serde_json::from_value(payload).unwrap();
        assert!(insights.faces.is_empty());
        assert!(insights.keywords.is_empty());
        let stats = insights.statistics.unwrap();
        assert_eq!(stats.correspondence_count, 2);
        assert!(stats.speaker_word_count.is_empty());
    }

    #[test]
    fn every_element_type_deserializes_with_instances_and_appearances() {
        let payload = json!({
            "id": "v1",
            "name": "demo",
            "summarizedInsights": {
                "id": "v1",
                "duration": { "time": "0:00:10", "seconds": 10.0 },
                "audioEffects": [{ "id": 1, "type": "Clapping", "instances": [instance("0:00:01", "0:00:02")] }],
                "faces": [{ "id": 1, "name": "Jane Doe", "confidence": 0.9,
                            "appearances": [appearance(0.0, 1.0)],
                            "instances": [instance("0:00:00", "0:00:01")] }],
                "keywords": [{ "id": 1, "name": "rust", "appearances": [], "instances": [] }],
                "sentiments": [{ "id": 1, "sentimentType": "Positive", "averageScore": 0.8,
                                 "appearances": [appearance(1.0, 2.0)] }],
                "emotions": [{ "id": 1, "type": "Joy", "appearances": [appearance(2.0, 3.0)] }],
                "labels": [{ "id": 1, "name": "indoor" }],
                "framePatterns": [{ "id": 1, "name": "Black", "confidence": 1.0 }],
                "brands": [{ "id": 1, "name": "Contoso", "tags": ["retail"], "isCustom": true,
                             "instances": [{ "brandType": "Transcript", "instanceSource": "Transcript",
                                             "start": "0:00:03", "end": "0:00:04" }] }],
                "namedLocations": [{ "id": 1, "name": "Seattle" }],
                "namedPeople": [{ "id": 2, "name": "Ada" }],
                "topics": [{ "id": 1, "name": "Technology", "iabName": "Technology & Computing" }],
            },
            "videos": [{
                "id": "v1",
                "state": "Processed",
                "insights": {
                    "transcript": [{ "id": 1, "text": "hello", "speakerId": 1,
                                     "instances": [instance("0:00:00", "0:00:01")] }],
                    "ocr": [{ "id": 1, "text": "EXIT", "left": 10, "top": 20, "width": 30, "height": 40 }],
                    "scenes": [{ "id": 1 }],
                    "shots": [{ "id": 1, "keyFrames": [{ "id": 7,
                                "instances": [{ "thumbnailId": "t-1", "start": "0:00:00", "end": "0:00:01" }] }] }],
                    "visualContentModeration": [{ "id": 1, "adultScore": 0.1, "racyScore": 0.2 }],
                    "textualContentModeration": { "id": 0, "bannedWordsCount": 0, "bannedWordsRatio": 0.0 },
                    "blocks": [{ "id": 0 }],
                    "speakers": [{ "id": 1, "name": "Speaker #1" }],
                },
            }],
            "videosRanges": [{ "videoId": "v1", "range": { "start": "0:00:00", "end": "0:00:10" } }],
        });

        let playlist: Playlist = serde_json::from_value(payload).unwrap();
        let summary = playlist.summarized_insights.as_ref().unwrap();
        assert_eq!(summary.faces[0].appearances.len(), 1);
        assert_eq!(summary.faces[0].instances[0].start, "0:00:00");
        assert_eq!(summary.audio_effects[0].kind, "Clapping");
        assert_eq!(summary.emotions[0].kind, "Joy");
        assert_eq!(summary.brands[0].instances[0].brand_type, "Transcript");
        assert_eq!(summary.topics[0].iab_name.as_deref(), Some("Technology & Computing"));
        assert!(summary.labels[0].appearances.is_empty());

        let video = &playlist.videos[0];
        assert!(video.is_processed());
        let insights = video.insights.as_ref().unwrap();
        assert_eq!(insights.ocr[0].width, 30);
        assert_eq!(insights.shots[0].key_frames[0].instances[0].thumbnail_id, "t-1");
        assert_eq!(insights.speakers[0].name, "Speaker #1");
        assert_eq!(playlist.videos_ranges[0].range.as_ref().unwrap().end, "0:00:10");

        // Re-serializing and parsing again keeps every modeled field.
        let text = serde_json::to_string(&playlist).unwrap();
        let again: Playlist = serde_json::from_str(&text).unwrap();
        assert_eq!(again, playlist);
    }

    #[test]
    fn search_results_reads_results_and_next_page() {
        let payload = json!({
            "results": [{ "id": "a", "name": "first", "state": "Processing", "thumbnailId": "th" }],
            "nextPage": { "pageSize": 25, "skip": 0, "done": false },
        });
        let results: SearchResults = serde_json::from_value(payload).unwrap();
        assert_eq!(results.videos.len(), 1);
        assert_eq!(results.videos[0].state(), VideoState::Processing);
        assert!(results.has_more());
    }

    #[test]
    fn video_state_is_case_insensitive() {
        assert_eq!(VideoState::parse("processed"), VideoState::Processed);
        assert_eq!(VideoState::parse("Quarantined"), VideoState::Quarantined);
        assert_eq!(VideoState::parse("Deleting"), VideoState::Unknown);

        let video = Video {
            state: "Failed".into(),
            ..Video::default()
        };
        assert!(video.is_failed());
    }

    #[test]
    fn upload_response_parses_into_video() {
        let video = Video::from_upload_response(
            r#"{"accountId":"acc","id":"new-id","name":"clip","state":"Uploaded","description":null}"#,
        )
        .unwrap();
        assert_eq!(video.id, "new-id");
        assert_eq!(video.state(), VideoState::Uploaded);
        assert!(video.description.is_none());

        assert!(Video::from_upload_response("not json").is_err());
    }

    #[test]
    fn upload_request_builders() {
        let req = UploadRequest::local_file("clip", "/tmp/clip.mp4").description("d");
        assert_eq!(req.method, UploadMethod::LocalFile);
        assert_eq!(req.source.as_deref(), Some("/tmp/clip.mp4"));
        assert_eq!(req.privacy(), "private");
        assert_eq!(req.description, "d");
    }
}
