use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Transport-level response returned without interpretation.
///
/// Raw operations return this for every status; a 4xx/5xx is a normal
/// result, and the caller inspects `status` to detect application-level
/// failure.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    #[must_use]
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Body shape decoded by the plain envelope GET on success statuses.
///
/// Wire keys are PascalCase (`{"StatusCode":200,"ReasonPhrase":"OK"}`);
/// every field is defaulted so partial bodies decode, and unknown keys are
/// ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub reason_phrase: Option<String>,
}

impl ResponseEnvelope {
    /// Envelope carrying only a status code, used when the transport status
    /// was non-success and the body is discarded undecoded.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        Self {
            status_code: status.as_u16(),
            reason_phrase: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
