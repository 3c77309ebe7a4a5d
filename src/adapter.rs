//! Asynchronous one-shot operations built on `reqwest`.
//!
//! Every operation acquires a fresh [`reqwest::Client`], issues exactly one
//! request, and drops the client when the call returns – on success and on
//! error alike. No state survives a call and nothing is shared between
//! calls, so concurrent invocations cannot interfere with each other.

use crate::{
    Content, RawResponse, ResponseEnvelope,
    auth::bearer_value,
    error::{Error, Result},
};
use http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use reqwest::Client;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[cfg(feature = "rustls")]
fn ensure_rustls_provider() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[cfg(not(feature = "rustls"))]
fn ensure_rustls_provider() {}

/// Build the call-scoped client with transport defaults.
fn client() -> Result<Client> {
    ensure_rustls_provider();

    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| Error::InvalidConfig {
            message: "failed to build HTTP client".into(),
            source: Some(Box::new(err)),
        })
}

/// Issue the single request an operation is allowed.
async fn dispatch(
    method: Method,
    url: &str,
    token: Option<&str>,
    content: Option<Content>,
) -> Result<RawResponse> {
    let client = client()?;

    let mut req = client.request(method.clone(), url);
    if let Some(token) = token {
        req = req.header(AUTHORIZATION, bearer_value(token)?);
    }
    if let Some(content) = content {
        if let Some(content_type) = content.content_type {
            req = req.header(CONTENT_TYPE, content_type);
        }
        req = req.body(content.bytes);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(%method, url, "sending request");

    let map_err = |source: reqwest::Error| Error::Transport {
        method: method.clone(),
        url: url.into(),
        source: Box::new(source),
    };

    let resp = req.send().await.map_err(map_err)?;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = resp.bytes().await.map_err(map_err)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

    Ok(RawResponse {
        status,
        headers,
        body: body.to_vec(),
    })
}

async fn fetch_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T> {
    let resp = dispatch(Method::GET, url, token, None).await?;
    Ok(resp.json()?)
}

/// `GET url` – decode the JSON body as `T`.
///
/// The HTTP status is not consulted: the body that came back is decoded as
/// `T`, and a body that does not parse is a loud [`Error::Json`], never a
/// default value.
pub async fn get<T: DeserializeOwned>(url: &str) -> Result<T> {
    fetch_json(url, None).await
}

/// `GET url?query` – decode the JSON body as `T`.
///
/// `query` is appended after a literal `?` exactly as given; the adapter
/// performs no URL-encoding, so the caller supplies an already-encoded
/// string such as `"a=1&b=2"`.
pub async fn get_with_query<T: DeserializeOwned>(url: &str, query: &str) -> Result<T> {
    fetch_json(&format!("{url}?{query}"), None).await
}

/// `GET url` with optional bearer auth – decode the JSON body as `T`.
///
/// `Some(token)` sends `Authorization: Bearer <token>`; `None` sends no
/// `Authorization` header at all.
pub async fn get_with_token<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T> {
    fetch_json(url, token).await
}

/// `GET url` – decode the body as a [`ResponseEnvelope`].
///
/// This operation is intentionally asymmetric, and callers relying on it
/// should read carefully: on a success status the body is re-interpreted as
/// envelope JSON (a malformed body is a loud [`Error::Json`]); on any other
/// status the body is discarded undecoded and only the original status code
/// is carried back.
pub async fn get_envelope(url: &str) -> Result<ResponseEnvelope> {
    let resp = dispatch(Method::GET, url, None, None).await?;
    if resp.status.is_success() {
        Ok(resp.json()?)
    } else {
        Ok(ResponseEnvelope::from_status(resp.status))
    }
}

/// `POST url` with `content` attached.
pub async fn post(url: &str, content: Content) -> Result<RawResponse> {
    dispatch(Method::POST, url, None, Some(content)).await
}

/// `POST url` with `content` attached and optional bearer auth.
pub async fn post_with_token(
    url: &str,
    content: Content,
    token: Option<&str>,
) -> Result<RawResponse> {
    dispatch(Method::POST, url, token, Some(content)).await
}

/// `PUT url` with `content` attached and optional bearer auth.
pub async fn put(url: &str, content: Content, token: Option<&str>) -> Result<RawResponse> {
    dispatch(Method::PUT, url, token, Some(content)).await
}

/// `PATCH url` with `content` attached.
///
/// The request method is literally `PATCH`, not a POST with an override
/// header.
pub async fn patch(url: &str, content: Content) -> Result<RawResponse> {
    dispatch(Method::PATCH, url, None, Some(content)).await
}

/// `PATCH url` with `content` attached and optional bearer auth.
pub async fn patch_with_token(
    url: &str,
    content: Content,
    token: Option<&str>,
) -> Result<RawResponse> {
    dispatch(Method::PATCH, url, token, Some(content)).await
}

/// `DELETE url` with optional bearer auth.
pub async fn delete(url: &str, token: Option<&str>) -> Result<RawResponse> {
    dispatch(Method::DELETE, url, token, None).await
}
