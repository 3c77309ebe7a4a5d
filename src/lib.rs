//! One-shot HTTP operations – **async** *or* **blocking** at compile time.
//!
//! Every operation builds a throwaway client, sends exactly one request,
//! and returns either a decoded value or the raw response. Non-success
//! HTTP statuses are ordinary results; only transport and JSON failures
//! surface as [`Error`]s.

// compile-time guard: enable at least one client kind.
#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("Enable at least one of: `async` (default) or `blocking`.");

mod auth;
mod content;
mod error;
mod response;

#[cfg(feature = "async")]
mod adapter;
#[cfg(feature = "blocking")]
pub mod blocking;

#[cfg(feature = "async")]
pub use adapter::*;
pub use content::Content;
pub use error::{Error, Result};
pub use response::{RawResponse, ResponseEnvelope};
