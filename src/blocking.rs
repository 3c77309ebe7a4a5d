//! Blocking one-shot operations built on `ureq`.
//!
//! Mirrors the asynchronous surface one for one: a fresh [`ureq::Agent`]
//! per call, the same request shape, the same response and error types.

use crate::{
    Content, RawResponse, ResponseEnvelope,
    auth::bearer_value,
    error::{Error, Result},
};
use http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use ureq::Agent;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the call-scoped agent with transport defaults.
fn agent() -> Agent {
    // Non-success statuses come back as plain responses, not ureq errors.
    Agent::new_with_config(
        Agent::config_builder()
            .http_status_as_error(false)
            .user_agent(USER_AGENT)
            .build(),
    )
}

/// Issue the single request an operation is allowed.
fn dispatch(
    method: Method,
    url: &str,
    token: Option<&str>,
    content: Option<Content>,
) -> Result<RawResponse> {
    let agent = agent();
    let auth = match token {
        Some(token) => Some(bearer_value(token)?),
        None => None,
    };

    let method_for_error = method.clone();
    let map_err = |source: ureq::Error| Error::Transport {
        method: method_for_error.clone(),
        url: url.into(),
        source: Box::new(source),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(%method, url, "sending request");

    let mut response = match method {
        Method::GET => {
            let mut req = agent.get(url);
            if let Some(auth) = &auth {
                req = req.header(AUTHORIZATION, auth);
            }
            req.call().map_err(map_err)?
        }
        Method::DELETE => {
            let mut req = agent.delete(url);
            if let Some(auth) = &auth {
                req = req.header(AUTHORIZATION, auth);
            }
            req.call().map_err(map_err)?
        }
        Method::POST => {
            let mut req = agent.post(url);
            if let Some(auth) = &auth {
                req = req.header(AUTHORIZATION, auth);
            }
            match content {
                Some(content) => {
                    let req = match content.content_type {
                        Some(content_type) => req.header(CONTENT_TYPE, content_type),
                        None => req,
                    };
                    req.send(content.bytes).map_err(map_err)?
                }
                None => req.send_empty().map_err(map_err)?,
            }
        }
        Method::PUT => {
            let mut req = agent.put(url);
            if let Some(auth) = &auth {
                req = req.header(AUTHORIZATION, auth);
            }
            match content {
                Some(content) => {
                    let req = match content.content_type {
                        Some(content_type) => req.header(CONTENT_TYPE, content_type),
                        None => req,
                    };
                    req.send(content.bytes).map_err(map_err)?
                }
                None => req.send_empty().map_err(map_err)?,
            }
        }
        Method::PATCH => {
            let mut req = agent.patch(url);
            if let Some(auth) = &auth {
                req = req.header(AUTHORIZATION, auth);
            }
            match content {
                Some(content) => {
                    let req = match content.content_type {
                        Some(content_type) => req.header(CONTENT_TYPE, content_type),
                        None => req,
                    };
                    req.send(content.bytes).map_err(map_err)?
                }
                None => req.send_empty().map_err(map_err)?,
            }
        }
        other => {
            return Err(Error::InvalidConfig {
                message: format!("unsupported HTTP method: {other}").into_boxed_str(),
                source: None,
            });
        }
    };

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_vec()
        .map_err(map_err)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

    Ok(RawResponse {
        status,
        headers,
        body,
    })
}

fn fetch_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T> {
    let resp = dispatch(Method::GET, url, token, None)?;
    Ok(resp.json()?)
}

/// `GET url` – decode the JSON body as `T`.
///
/// The HTTP status is not consulted; see [`crate::get`].
pub fn get<T: DeserializeOwned>(url: &str) -> Result<T> {
    fetch_json(url, None)
}

/// `GET url?query` – decode the JSON body as `T`.
///
/// `query` is appended after a literal `?` exactly as given, with no
/// URL-encoding.
pub fn get_with_query<T: DeserializeOwned>(url: &str, query: &str) -> Result<T> {
    fetch_json(&format!("{url}?{query}"), None)
}

/// `GET url` with optional bearer auth – decode the JSON body as `T`.
pub fn get_with_token<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T> {
    fetch_json(url, token)
}

/// `GET url` – decode the body as a [`ResponseEnvelope`].
///
/// Same asymmetric contract as [`crate::get_envelope`]: the body is decoded
/// only on a success status, otherwise the status code alone is carried
/// back.
pub fn get_envelope(url: &str) -> Result<ResponseEnvelope> {
    let resp = dispatch(Method::GET, url, None, None)?;
    if resp.status.is_success() {
        Ok(resp.json()?)
    } else {
        Ok(ResponseEnvelope::from_status(resp.status))
    }
}

/// `POST url` with `content` attached.
pub fn post(url: &str, content: Content) -> Result<RawResponse> {
    dispatch(Method::POST, url, None, Some(content))
}

/// `POST url` with `content` attached and optional bearer auth.
pub fn post_with_token(url: &str, content: Content, token: Option<&str>) -> Result<RawResponse> {
    dispatch(Method::POST, url, token, Some(content))
}

/// `PUT url` with `content` attached and optional bearer auth.
pub fn put(url: &str, content: Content, token: Option<&str>) -> Result<RawResponse> {
    dispatch(Method::PUT, url, token, Some(content))
}

/// `PATCH url` with `content` attached.
pub fn patch(url: &str, content: Content) -> Result<RawResponse> {
    dispatch(Method::PATCH, url, None, Some(content))
}

/// `PATCH url` with `content` attached and optional bearer auth.
pub fn patch_with_token(url: &str, content: Content, token: Option<&str>) -> Result<RawResponse> {
    dispatch(Method::PATCH, url, token, Some(content))
}

/// `DELETE url` with optional bearer auth.
pub fn delete(url: &str, token: Option<&str>) -> Result<RawResponse> {
    dispatch(Method::DELETE, url, token, None)
}
