use super::config::ClientConfig;
use super::error::{Error, Result};
use super::params::Id;
use super::request::ApiRequest;

use reqwest::header::{self, HeaderMap, HeaderValue};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use std::time::Duration;

use tracing::{debug, instrument};

use url::Url;

const REVISION_HEADER: &str = "wanikani-revision";

/// Position in a collection to start listing from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cursor {
    /// Resources with an id strictly greater than this one.
    After(Id),
    /// Resources with an id strictly smaller than this one.
    Before(Id),
}

/// Client struct.
///
/// Holds only immutable configuration; cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl Client {
    /// Create a new client for the production API, authenticating with the given API token.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_token))
    }

    /// Create a new client with specific configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&config.user_agent)?,
        );
        headers.insert(REVISION_HEADER, HeaderValue::from_str(&config.revision)?);

        // Resource paths are joined relative to the base, so it must end with `/` for a path
        // prefix like `/proxy` to be kept.
        let mut base_url = Url::parse(&config.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        match reqwest::Client::builder().default_headers(headers).build() {
            Ok(c) => Ok(Client {
                client: c,
                base_url,
                timeout: config.timeout,
            }),
            Err(e) => Err(Error::Config(format!("{:?}", e))),
        }
    }

    /// A copy of this client whose requests time out after `timeout` instead of the configured
    /// default.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    /// The URL resource paths are joined onto. Always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Timeout applied to each request, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Perform `request` and decode the JSON response into `T`.
    ///
    /// Non-2xx statuses are turned into errors; nothing is retried.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let mut url = self
            .base_url
            .join(request.path.trim_start_matches('/'))?;
        if !request.query.is_empty() {
            url.set_query(Some(&request.query));
        }

        debug!(%url, "dispatching request");

        let mut builder = self.client.request(request.method, url);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = request.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(Error::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(Error::Transport)?;

        debug!(status = status.as_u16(), len = body.len(), "received response");

        if !status.is_success() {
            return Err(Error::from_status(status.as_u16(), error_message(&body)));
        }

        serde_json::from_slice(&body).map_err(Error::Decode)
    }
}

/// Extract the reason from an error payload like `{"error": "Not found", "code": 404}`.
fn error_message(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
}
