use std::path::{Path, PathBuf};

use hyper::ext::ReasonPhrase;
use reqwest::multipart::{Form, Part};
use reqwest::{redirect, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::Credentials;
use crate::errors::{Result, VideoIndexerError};
use crate::models::{Playlist, SearchResults, UploadMethod, UploadRequest};
use crate::session::Session;

const DEFAULT_BASE_URL: &str = "https://api.videoindexer.ai";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

const ERROR_EMPTY_VIDEO_NAME: &str = "The video name cannot be empty.";
const ERROR_INVALID_URL: &str = "The video url is invalid.";

/// Largest file the service accepts through a multipart upload (2 GiB).
pub const MAX_LOCAL_UPLOAD_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use videoindexer::ClientBuilder;
///
/// # fn example() -> videoindexer::Result<()> {
/// let client = ClientBuilder::new()
///     .base_url("http://localhost:8080")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: String,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (defaults to `https://api.videoindexer.ai`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the [`Client`].
    ///
    /// The transport never follows redirects: the service answers some calls
    /// with signed URLs that belong to the caller.
    pub fn build(self) -> Result<Client> {
        let http = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(VideoIndexerError::Http)?;

        Ok(Client {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Video Indexer API client.
///
/// The client holds no account state. [`authorize`](Self::authorize) returns a
/// [`Session`] that every other call takes by reference, so one client can
/// serve several accounts at once.
///
/// # Example
///
/// ```no_run
/// use videoindexer::Client;
///
/// # async fn example() -> videoindexer::Result<()> {
/// let client = Client::new();
/// let Some(session) = client.authorize("account-id", "api-key", "trial").await? else {
///     return Ok(());
/// };
///
/// let results = client.list_videos(&session).await?;
/// println!("{} videos", results.videos.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client against the public service endpoint.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    pub fn new() -> Self {
        ClientBuilder::new()
            .build()
            .expect("failed to build HTTP client")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Obtain an account access token.
    ///
    /// Returns `Ok(None)` without sending anything when an argument is empty,
    /// and also when the service answers with an empty token. The API key is
    /// only sent on this request.
    ///
    /// # Errors
    ///
    /// - [`VideoIndexerError::RemoteService`] if the service rejects the credentials.
    pub async fn authorize(
        &self,
        account_id: &str,
        api_key: &str,
        location: &str,
    ) -> Result<Option<Session>> {
        for (value, what) in [
            (account_id, "account ID"),
            (api_key, "API key"),
            (location, "location"),
        ] {
            if value.trim().is_empty() {
                warn!("{what} is missing, not requesting an access token");
                return Ok(None);
            }
        }

        let url = format!(
            "{}/auth/{location}/Accounts/{account_id}/AccessToken",
            self.base_url
        );
        debug!(%location, %account_id, "requesting account access token");

        let response = self
            .http
            .get(&url)
            .query(&[("allowEdit", "true")])
            .header(SUBSCRIPTION_KEY_HEADER, api_key)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let token = unquote(&response.text().await?);
        if token.is_empty() {
            warn!(%account_id, "service returned an empty access token");
            return Ok(None);
        }

        Ok(Some(Session::new(
            account_id.to_string(),
            location.to_string(),
            token,
        )))
    }

    /// [`authorize`](Self::authorize) with credentials from configuration.
    pub async fn authorize_with(&self, credentials: &Credentials) -> Result<Option<Session>> {
        self.authorize(
            &credentials.account_id,
            &credentials.api_key,
            &credentials.location,
        )
        .await
    }

    /// List the account's videos. Only the first page is returned; check
    /// [`SearchResults::has_more`].
    pub async fn list_videos(&self, session: &Session) -> Result<SearchResults> {
        self.get_json(session, "/Videos/Search").await
    }

    /// Fetch a thumbnail image (usually JPEG).
    pub async fn get_thumbnail(
        &self,
        session: &Session,
        video_id: &str,
        thumbnail_id: &str,
    ) -> Result<Vec<u8>> {
        let response = self
            .get(
                session,
                &format!("/Videos/{video_id}/Thumbnails/{thumbnail_id}"),
            )
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch a signed download URL for the source video.
    pub async fn get_video_playback_url(&self, session: &Session, video_id: &str) -> Result<String> {
        let response = self
            .get(session, &format!("/Videos/{video_id}/SourceFile/DownloadUrl"))
            .await?;
        let text = response.text().await?;

        // The body is a JSON string literal.
        Ok(serde_json::from_str::<String>(&text)?)
    }

    /// Fetch the full insight graph of a video, including streaming URLs.
    pub async fn get_insights(&self, session: &Session, video_id: &str) -> Result<Playlist> {
        self.get_json(
            session,
            &format!("/Videos/{video_id}/Index?includeStreamingUrls"),
        )
        .await
    }

    /// Upload a video and start indexing it.
    ///
    /// Returns the response body verbatim; use
    /// [`Video::from_upload_response`](crate::Video::from_upload_response) to
    /// parse it.
    ///
    /// # Errors
    ///
    /// - [`VideoIndexerError::InvalidArgument`] if the name is empty, the
    ///   source is malformed, or a local file exceeds [`MAX_LOCAL_UPLOAD_BYTES`].
    ///   Nothing is sent in that case.
    /// - [`VideoIndexerError::Io`] if the local file cannot be read.
    /// - [`VideoIndexerError::RemoteService`] if the service rejects the upload.
    pub async fn upload_video(&self, session: &Session, request: &UploadRequest) -> Result<String> {
        if request.name.is_empty() {
            return Err(VideoIndexerError::InvalidArgument(
                ERROR_EMPTY_VIDEO_NAME.into(),
            ));
        }
        let source = parse_source(request)?;

        let mut query: Vec<(&str, String)> = vec![
            ("accessToken", session.access_token().to_string()),
            ("name", request.name.clone()),
            ("description", request.description.clone()),
            ("privacy", request.privacy().to_string()),
            ("partition", "partition".to_string()),
        ];
        let mut form = None;

        match (request.method, source) {
            (UploadMethod::LocalFile, Some(VideoSource::File(path))) => {
                let bytes = read_video_file(&path).await?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "video.mp4".to_string());
                debug!(path = %path.display(), size = bytes.len(), "uploading local video");
                form = Some(Form::new().part("file", Part::bytes(bytes).file_name(file_name)));
            }
            (UploadMethod::PublicUrl, Some(VideoSource::Url(url))) => {
                debug!(%url, "submitting public video url");
                query.push(("videoUrl", url.to_string()));
            }
            (UploadMethod::SendToBlobStorage, _) => {
                warn!(
                    name = %request.name,
                    "blob storage uploads happen outside the client, sending no video content"
                );
            }
            _ => {
                return Err(VideoIndexerError::InvalidArgument(ERROR_INVALID_URL.into()));
            }
        }

        let url = format!("{}/Videos", session.account_url(&self.base_url));
        let mut req = self.http.post(&url).query(&query);
        if let Some(form) = form {
            req = req.multipart(form);
        }

        let response = ensure_success(req.send().await?).await?;
        Ok(response.text().await?)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// GET an account-scoped path, authenticating with the session token.
    ///
    /// `path` is relative to `{location}/Accounts/{accountId}` and may carry
    /// its own query string; the token is appended to it.
    async fn get(&self, session: &Session, path: &str) -> Result<Response> {
        let url = format!("{}{path}", session.account_url(&self.base_url));
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .query(&[("accessToken", session.access_token())])
            .send()
            .await?;

        ensure_success(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, session: &Session, path: &str) -> Result<T> {
        let text = self.get(session, path).await?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

enum VideoSource {
    File(PathBuf),
    Url(Url),
}

/// Check the upload source against its method before any I/O happens.
fn parse_source(request: &UploadRequest) -> Result<Option<VideoSource>> {
    let invalid = || VideoIndexerError::InvalidArgument(ERROR_INVALID_URL.into());

    let source = match request.source.as_deref().map(str::trim) {
        None if request.method == UploadMethod::SendToBlobStorage => return Ok(None),
        None | Some("") => return Err(invalid()),
        Some(s) => s,
    };

    match request.method {
        UploadMethod::PublicUrl => {
            let url = Url::parse(source).map_err(|_| invalid())?;
            if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
                return Err(invalid());
            }
            Ok(Some(VideoSource::Url(url)))
        }
        UploadMethod::LocalFile | UploadMethod::SendToBlobStorage => {
            if source.starts_with("file:") {
                let path = Url::parse(source)
                    .ok()
                    .and_then(|u| u.to_file_path().ok())
                    .ok_or_else(invalid)?;
                Ok(Some(VideoSource::File(path)))
            } else {
                Ok(Some(VideoSource::File(PathBuf::from(source))))
            }
        }
    }
}

async fn read_video_file(path: &Path) -> Result<Vec<u8>> {
    let size = tokio::fs::metadata(path).await?.len();
    if size > MAX_LOCAL_UPLOAD_BYTES {
        return Err(VideoIndexerError::InvalidArgument(format!(
            "{} is {size} bytes, local uploads are limited to {MAX_LOCAL_UPLOAD_BYTES} bytes; \
             upload it somewhere public and use UploadMethod::PublicUrl",
            path.display()
        )));
    }
    Ok(tokio::fs::read(path).await?)
}

/// Map a non-success response to [`VideoIndexerError::RemoteService`].
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // hyper keeps non-standard HTTP/1 phrases ("404 Video Not Indexed Yet").
    let reason = response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown Status".to_string());
    let body = response.text().await.ok().filter(|t| !t.is_empty());
    warn!(status = status.as_u16(), %reason, "Video Indexer request failed");

    Err(VideoIndexerError::RemoteService {
        status_code: status.as_u16(),
        reason,
        body,
    })
}

fn unquote(text: &str) -> String {
    text.replace('"', "").trim().to_string()
}
