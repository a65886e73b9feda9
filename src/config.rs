//! Account credentials from the environment or an `appsettings.json` file.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::errors::Result;

pub const ENV_ACCOUNT_ID: &str = "VIDEOINDEXER_ACCOUNTID";
pub const ENV_API_KEY: &str = "VIDEOINDEXER_APIKEY";
pub const ENV_REGION: &str = "VIDEOINDEXER_REGION";
pub const ENV_BLOB_STORAGE_NAME: &str = "AZURE_BLOB_STORAGE_NAME";
pub const ENV_BLOB_STORAGE_CONNECTION_STRING: &str = "AZURE_BLOB_STORAGE_CONNECTION_STRING";

/// What [`Client::authorize_with`](crate::Client::authorize_with) needs.
///
/// Missing values are empty strings; authorization then reports `None`
/// instead of sending a request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: String,
    pub api_key: String,
    /// Azure region of the account, e.g. `trial` or `westus2`.
    pub location: String,
}

impl Credentials {
    pub fn new(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
            location: location.into(),
        }
    }

    /// Read `VIDEOINDEXER_ACCOUNTID`, `VIDEOINDEXER_APIKEY` and `VIDEOINDEXER_REGION`.
    pub fn from_env() -> Self {
        Self {
            account_id: env_or_default(ENV_ACCOUNT_ID),
            api_key: env_or_default(ENV_API_KEY),
            location: env_or_default(ENV_REGION),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.account_id.is_empty() && !self.api_key.is_empty() && !self.location.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_key", &"<redacted>")
            .field("location", &self.location)
            .finish()
    }
}

/// The settings file shipped next to the demos.
///
/// ```json
/// {
///   "VIDEOINDEXER_ACCOUNTID": "...",
///   "VIDEOINDEXER_APIKEY": "...",
///   "VIDEOINDEXER_REGION": "trial",
///   "AZURE_BLOB_STORAGE_NAME": "",
///   "AZURE_BLOB_STORAGE_CONNECTION_STRING": ""
/// }
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    #[serde(rename = "VIDEOINDEXER_ACCOUNTID")]
    pub account_id: String,
    #[serde(rename = "VIDEOINDEXER_APIKEY")]
    pub api_key: String,
    #[serde(rename = "VIDEOINDEXER_REGION")]
    pub region: String,
    /// Storage account for a caller-written blob [`ThumbnailSink`](crate::ThumbnailSink).
    /// The client itself never reads it.
    #[serde(rename = "AZURE_BLOB_STORAGE_NAME")]
    pub blob_storage_name: String,
    /// Connection string for the same blob sink; passed through untouched.
    #[serde(rename = "AZURE_BLOB_STORAGE_CONNECTION_STRING")]
    pub blob_storage_connection_string: String,
}

impl AppSettings {
    /// Parse a settings file. Unknown keys are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Settings from `path` if it exists, with environment variables taking
    /// precedence over file values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut settings = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using environment only");
            Self::default()
        };
        settings.apply_env_with(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Override fields with non-empty values from `lookup`, keyed by the
    /// `VIDEOINDEXER_*` and `AZURE_BLOB_*` variable names.
    fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for (name, field) in [
            (ENV_ACCOUNT_ID, &mut self.account_id),
            (ENV_API_KEY, &mut self.api_key),
            (ENV_REGION, &mut self.region),
            (ENV_BLOB_STORAGE_NAME, &mut self.blob_storage_name),
            (
                ENV_BLOB_STORAGE_CONNECTION_STRING,
                &mut self.blob_storage_connection_string,
            ),
        ] {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                *field = value;
            }
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.account_id, &self.api_key, &self.region)
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("account_id", &self.account_id)
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .field("blob_storage_name", &self.blob_storage_name)
            .field("blob_storage_connection_string", &"<redacted>")
            .finish()
    }
}

fn env_or_default(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "VIDEOINDEXER_ACCOUNTID": "acc-1",
                "VIDEOINDEXER_APIKEY": "key-1",
                "VIDEOINDEXER_REGION": "trial",
                "Logging": {{ "LogLevel": "Debug" }}
            }}"#
        )
        .unwrap();

        let settings = AppSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.account_id, "acc-1");
        assert!(settings.blob_storage_name.is_empty());

        let creds = settings.credentials();
        assert_eq!(creds, Credentials::new("acc-1", "key-1", "trial"));
        assert!(creds.is_complete());
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(AppSettings::from_file(file.path()).is_err());
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut settings = AppSettings {
            account_id: "file-acc".into(),
            api_key: "file-key".into(),
            region: "trial".into(),
            blob_storage_name: "file-store".into(),
            ..AppSettings::default()
        };

        settings.apply_env_with(|name| match name {
            ENV_ACCOUNT_ID => Some("env-acc".into()),
            ENV_API_KEY => Some(String::new()),
            ENV_BLOB_STORAGE_CONNECTION_STRING => Some("AccountName=env".into()),
            _ => None,
        });

        assert_eq!(settings.account_id, "env-acc");
        // Empty and unset variables keep the file value.
        assert_eq!(settings.api_key, "file-key");
        assert_eq!(settings.region, "trial");
        assert_eq!(settings.blob_storage_name, "file-store");
        assert_eq!(settings.blob_storage_connection_string, "AccountName=env");
    }

    #[test]
    fn blob_settings_are_read_but_not_credentials() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "VIDEOINDEXER_ACCOUNTID": "acc-1",
                "AZURE_BLOB_STORAGE_NAME": "thumbs",
                "AZURE_BLOB_STORAGE_CONNECTION_STRING": "AccountName=thumbs;AccountKey=k"
            }}"#
        )
        .unwrap();

        let settings = AppSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.blob_storage_name, "thumbs");
        assert_eq!(
            settings.blob_storage_connection_string,
            "AccountName=thumbs;AccountKey=k"
        );
        assert_eq!(settings.credentials(), Credentials::new("acc-1", "", ""));
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials::new("acc", "super-secret", "trial");
        assert!(!format!("{creds:?}").contains("super-secret"));

        let settings = AppSettings {
            api_key: "super-secret".into(),
            blob_storage_connection_string: "AccountKey=abc".into(),
            ..AppSettings::default()
        };
        let dbg = format!("{settings:?}");
        assert!(!dbg.contains("super-secret"));
        assert!(!dbg.contains("AccountKey"));
    }

    #[test]
    fn incomplete_credentials() {
        assert!(!Credentials::new("acc", "", "trial").is_complete());
        assert!(!Credentials::default().is_complete());
    }
}
