//! Configuration for the WaniKani API client.

use crate::error::{Error, Result};

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

/// Production API host. Resource paths (`/v2/...`) are joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://api.wanikani.com";

/// API revision sent in the `Wanikani-Revision` header.
pub const DEFAULT_REVISION: &str = "20170710";

/// Client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host of the API, e.g. [`DEFAULT_BASE_URL`].
    pub base_url: String,
    /// Personal API token, sent as a bearer token with every request.
    pub api_token: String,
    /// Value of the `Wanikani-Revision` header.
    pub revision: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Default timeout applied to every request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("revision", &self.revision)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the production API with the given token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: api_token.into(),
            revision: DEFAULT_REVISION.to_string(),
            user_agent: concat!("wanikani-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `WANIKANI_API_TOKEN`: API token (required)
    /// - `WANIKANI_API_URL`: Base URL (optional, defaults to [`DEFAULT_BASE_URL`])
    /// - `WANIKANI_TIMEOUT_SECS`: Request timeout in seconds (optional)
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("WANIKANI_API_TOKEN")
            .map_err(|_| Error::Config("missing environment variable WANIKANI_API_TOKEN".into()))?;

        let mut config = Self::new(api_token);

        if let Ok(url) = env::var("WANIKANI_API_URL") {
            config.base_url = url;
        }

        if let Ok(secs) = env::var("WANIKANI_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::Config(format!("WANIKANI_TIMEOUT_SECS is not a number: {:?}", secs))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the API revision
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    /// Builder-style method to set the User-Agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout<T: Into<Option<Duration>>>(mut self, timeout: T) -> Self {
        self.timeout = timeout.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_token.is_empty() {
            return Err(Error::Config("API token mustn't be empty".into()));
        }

        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must use http or https, got {}",
                url.scheme()
            )));
        }

        if self.timeout.map_or(false, |t| t.is_zero()) {
            return Err(Error::Config("timeout cannot be zero".into()));
        }

        Ok(())
    }
}
