use reqwest::Method;

use serde::Serialize;

use crate::error::{Error, Result};

/// A request to the API, described as plain data.
///
/// Every operation of [`Client`](crate::client::Client) builds exactly one of these and hands it
/// to the dispatcher. `path` is relative to the base URL, `query` is already URL-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: String::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: String::new(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            query: String::new(),
            body: Some(body),
        }
    }

    /// Replace the query string with the encoding of `params`.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        self.query = encode_query(params)?;
        Ok(self)
    }
}

/// Encode parameters as a URL query string. Fields skipped by the parameter type's `Serialize`
/// impl (unset filters) don't produce a key. Keys come out in field declaration order.
pub fn encode_query<Q: Serialize + ?Sized>(params: &Q) -> Result<String> {
    Ok(serde_urlencoded::to_string(params)?)
}

/// Encode parameters as a JSON request body of the form `{"<key>": {...}}`.
///
/// The inner object goes through [`serde_json::Value`], so its keys are sorted.
pub fn encode_body<B: Serialize + ?Sized>(key: &str, params: &B) -> Result<String> {
    let value = serde_json::to_value(params).map_err(|e| Error::Encode(e.to_string()))?;

    let mut envelope = serde_json::Map::new();
    envelope.insert(key.to_string(), value);

    serde_json::to_string(&envelope).map_err(|e| Error::Encode(e.to_string()))
}
