use http::Method;
use std::error::Error as StdError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// All errors returned by the adapter.
///
/// Non-success HTTP statuses are *not* errors here; raw operations hand
/// back 4xx/5xx responses as ordinary results and leave status inspection
/// to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Transport failure (`reqwest`/`ureq`).
    ///
    /// `source` preserves the transport crate's native error unchanged.
    #[error("Transport error during {method} {url}: {source}")]
    Transport {
        method: Method,
        url: Box<str>,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Request construction failure.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}
