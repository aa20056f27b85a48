use reqwest::header::InvalidHeaderValue;

use thiserror::Error;

/// Result type for `wanikani`, using [`Error`].
pub type Result<T> = ::std::result::Result<T, Error>;

/// Enum for `wanikani` errors.
///
/// HTTP statuses are classified as follows: `404` becomes [`Error::NotFound`], `422` becomes
/// [`Error::Unprocessable`] and every other non-2xx status becomes [`Error::Api`].
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter required by the operation was not set. Nothing was sent to the API.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// The request couldn't be sent or its response couldn't be read.
    #[error("couldn't send request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered `404 Not Found`. Contains the reason given by the API, if available.
    #[error("HTTP error 404: {}", describe(&404, .message))]
    NotFound { message: Option<String> },

    /// The API answered `422 Unprocessable Entity`, meaning it rejected the parameters.
    #[error("HTTP error 422: {}", describe(&422, .message))]
    Unprocessable { message: Option<String> },

    /// Any other non-2xx HTTP status. The first value is the status code, the second is the
    /// reason of the failure given by the API, if available.
    #[error("HTTP error {status}: {}", describe(.status, .message))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// The response body doesn't match the expected schema.
    #[error("couldn't decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The parameters couldn't be encoded into a query string or a request body.
    #[error("couldn't encode parameters: {0}")]
    Encode(String),

    /// The client couldn't be configured. Contains a description of the error.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The HTTP status code returned by the API, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { .. } => Some(404),
            Error::Unprocessable { .. } => Some(422),
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Classify an HTTP status code and the error message from the API.
    pub(crate) fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => Error::NotFound { message },
            422 => Error::Unprocessable { message },
            _ => Error::Api { status, message },
        }
    }
}

fn describe<'a>(status: &u16, message: &'a Option<String>) -> &'a str {
    match message {
        Some(message) => message,
        // Give em a generic reason
        None => generic_reason(*status),
    }
}

fn generic_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request: The request was malformed",
        401 => "Unauthorized: Missing or invalid API token",
        403 => "Forbidden: The API token lacks the permission for this action",
        404 => "Not Found",
        422 => "Unprocessable Entity: The given parameters were invalid",
        429 => "Too Many Requests: Rate limit exceeded, try again later",
        500 => "Internal Server Error: Some unknown error occurred on the server",
        503 => "Service Unavailable: The server cannot currently handle the request",
        _ => "Unexpected response",
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Error {
        Error::Config(format!("Invalid header value: {}", e))
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Config(format!("Invalid URL: {}", e))
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(e: serde_urlencoded::ser::Error) -> Error {
        Error::Encode(e.to_string())
    }
}
