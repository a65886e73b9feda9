use thiserror::Error;

/// All errors that can occur when using the Video Indexer client.
///
/// A failed token acquisition caused by missing credentials is not an error:
/// [`Client::authorize`](crate::Client::authorize) reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum VideoIndexerError {
    /// The service answered with a non-success status.
    #[error("Video Indexer API error {status_code}: {reason}")]
    RemoteService {
        status_code: u16,
        /// HTTP reason phrase, e.g. "Unauthorized".
        reason: String,
        /// Response text, when the service sent one.
        body: Option<String>,
    },

    /// A local precondition failed before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A transport-level HTTP error from reqwest.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An I/O error, typically from reading a local video or writing a thumbnail.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A response body that does not match the expected JSON shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl VideoIndexerError {
    /// `true` for HTTP 401, which the service returns once the access token
    /// has expired. Callers re-authorize and retry themselves.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::RemoteService { status_code: 401, .. })
    }

    /// Status code of a remote failure, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteService { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// A convenience alias for `Result<T, VideoIndexerError>`.
pub type Result<T> = std::result::Result<T, VideoIndexerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_display_carries_reason() {
        let err = VideoIndexerError::RemoteService {
            status_code: 404,
            reason: "Not Found".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "Video Indexer API error 404: Not Found");
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_is_detected() {
        let err = VideoIndexerError::RemoteService {
            status_code: 401,
            reason: "Unauthorized".into(),
            body: Some("token expired".into()),
        };
        assert!(err.is_unauthorized());
        assert!(VideoIndexerError::InvalidArgument("x".into())
            .status_code()
            .is_none());
    }
}
