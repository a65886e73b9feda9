use std::fmt;

use crate::errors::{Result, VideoIndexerError};

/// An authorized connection to one Video Indexer account.
///
/// Obtained from [`Client::authorize`](crate::Client::authorize) and passed
/// to every other call. The access token expires after about an hour; it is
/// never refreshed, so callers authorize again when a call fails with
/// [`VideoIndexerError::is_unauthorized`].
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    account_id: String,
    location: String,
    access_token: String,
}

impl Session {
    pub(crate) fn new(account_id: String, location: String, access_token: String) -> Self {
        Self {
            account_id,
            location,
            access_token,
        }
    }

    /// Rebuild a session from a previously issued token.
    ///
    /// Returns [`VideoIndexerError::InvalidArgument`] if any part is empty.
    pub fn from_parts(
        account_id: impl Into<String>,
        location: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        let (account_id, location, access_token) =
            (account_id.into(), location.into(), access_token.into());

        for (value, what) in [
            (&account_id, "account ID"),
            (&location, "location"),
            (&access_token, "access token"),
        ] {
            if value.trim().is_empty() {
                return Err(VideoIndexerError::InvalidArgument(format!(
                    "session {what} cannot be empty"
                )));
            }
        }

        Ok(Self::new(account_id, location, access_token))
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Azure region, e.g. `westus2` or `trial`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// `{base}/{location}/Accounts/{accountId}`, the prefix of every account call.
    pub(crate) fn account_url(&self, base_url: &str) -> String {
        format!("{base_url}/{}/Accounts/{}", self.location, self.account_id)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("location", &self.location)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
