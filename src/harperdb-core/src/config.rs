use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::utils::basic_token;

/// Connection settings for a HarperDB instance
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Operations API endpoint, e.g. `http://localhost:9925`
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Pre-encoded Basic auth token, used verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Either a set of username and password or a token is required to authenticate with HarperDB.")]
    MissingAuth,

    #[error("Both username and password are required to authenticate with HarperDB.")]
    IncompleteCredentials,
}

/// Credentials resolved from a valid [`ClientConfig`]
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { username: String, password: String },
    Token(String),
}

impl Credentials {
    /// Value sent after `Basic ` in the `Authorization` header
    pub fn token(&self) -> String {
        match self {
            Credentials::Basic { username, password } => basic_token(username, password),
            Credentials::Token(token) => token.clone(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
        }
    }
}

impl ClientConfig {
    pub fn with_credentials(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: Some(username.into()),
            password: Some(password.into()),
            token: None,
        }
    }

    pub fn with_token(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            token: Some(token.into()),
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: ClientConfig = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Read `HARPERDB_URL`, `HARPERDB_USERNAME`, `HARPERDB_PASSWORD` and `HARPERDB_TOKEN`
    pub fn from_env() -> anyhow::Result<Self> {
        let url = std::env::var("HARPERDB_URL").context("HARPERDB_URL is not set")?;
        Ok(Self {
            url,
            username: std::env::var("HARPERDB_USERNAME").ok(),
            password: std::env::var("HARPERDB_PASSWORD").ok(),
            token: std::env::var("HARPERDB_TOKEN").ok(),
        })
    }

    /// Check the auth fields and resolve them into [`Credentials`].
    ///
    /// Empty strings count as unset. A token takes precedence over a
    /// username/password pair when both are supplied.
    pub fn validate(&self) -> Result<Credentials, ConfigError> {
        let present = |field: &Option<String>| field.clone().filter(|value| !value.is_empty());

        match (present(&self.token), present(&self.username), present(&self.password)) {
            (None, None, None) => Err(ConfigError::MissingAuth),
            (_, Some(_), None) | (_, None, Some(_)) => Err(ConfigError::IncompleteCredentials),
            (Some(token), _, _) => {
                if self.username.is_some() {
                    tracing::debug!("token supplied, ignoring username and password");
                }
                Ok(Credentials::Token(token))
            }
            (None, Some(username), Some(password)) => Ok(Credentials::Basic { username, password }),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |field: &Option<String>| field.as_ref().map(|_| "<redacted>");
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("token", &redact(&self.token))
            .finish()
    }
}
