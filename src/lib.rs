//! Wrapper crate for the [WaniKani](https://www.wanikani.com) v2 API.
//!
//! ## Usage
//!
//! First, create a [`Client`] with your personal API token. Tokens are generated from the
//! WaniKani settings page; read-only tokens are enough for `get` and `list` calls.
//!
//! ```no_run
//! # use wanikani::client::Client;
//! # fn main() -> Result<(), wanikani::error::Error> {
//! let client = Client::new("my-api-token")?;
//! # Ok(()) }
//! ```
//!
//! Every operation takes a parameter object and performs exactly one request. For example you
//! can get the spaced repetition system #1 like this:
//!
//! ```no_run
//! # use wanikani::client::Client;
//! # use wanikani::spaced_repetition_system::SpacedRepetitionSystemGetParams;
//! # #[tokio::main]
//! # async fn main() -> Result<(), wanikani::error::Error> {
//! # let client = Client::new("my-api-token")?;
//! let srs = client
//!     .spaced_repetition_system_get(SpacedRepetitionSystemGetParams::new().id(1))
//!     .await?;
//!
//! println!("{} has {} stages", srs.data.name, srs.data.stages.len());
//! # Ok(()) }
//! ```
//!
//! List operations return one [`Page`] at a time. Use [`Page::next_cursor`] to ask for the
//! following one.
//!
//! ## Notes from the official API:
//!
//! ### Revisions
//!
//! > The API is versioned by revision. Revisions are specified with the `Wanikani-Revision`
//! > header. [[...]](https://docs.api.wanikani.com/20170710/#revisions-aka-versioning)
//!
//! `wanikani` sends revision `20170710` unless told otherwise through
//! [`ClientConfig::with_revision`].
//!
//! ### Rate Limiting
//!
//! > Requests are limited to 60 per minute. [[...]](https://docs.api.wanikani.com/20170710/#rate-limit)
//!
//! `wanikani` doesn't throttle nor retry requests. Going over the limit results in an
//! [`Error::Api`] with status `429`.
//!
//! [`Client`]: client/struct.Client.html
//! [`Page`]: object/struct.Page.html
//! [`Page::next_cursor`]: object/struct.Page.html#method.next_cursor
//! [`ClientConfig::with_revision`]: config/struct.ClientConfig.html#method.with_revision
//! [`Error::Api`]: error/enum.Error.html#variant.Api

mod utils;

/// Client related structures.
pub mod client;

/// Client configuration.
pub mod config;

/// Error management.
pub mod error;

/// Response envelopes shared by every resource.
pub mod object;

/// Parameters shared by every resource.
pub mod params;

/// Requests as plain data, and parameter encoding.
pub mod request;

/// Spaced repetition systems.
pub mod spaced_repetition_system;

/// Study materials.
pub mod study_material;

/// Subject kinds.
pub mod subject;
