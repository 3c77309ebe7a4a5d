use http::HeaderValue;
use serde::Serialize;

/// Opaque request payload with an associated media type.
///
/// Write operations attach the bytes as-is and set `Content-Type` only when
/// one was provided; the adapter itself is content-type agnostic.
#[derive(Clone, Debug)]
pub struct Content {
    pub bytes: Vec<u8>,
    pub content_type: Option<HeaderValue>,
}

impl Content {
    #[must_use]
    pub fn bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: None,
        }
    }

    #[must_use]
    pub fn bytes_with_content_type(bytes: Vec<u8>, content_type: HeaderValue) -> Self {
        Self {
            bytes,
            content_type: Some(content_type),
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::bytes(text.into().into_bytes())
    }

    #[must_use]
    pub fn text_with_content_type(text: impl Into<String>, content_type: HeaderValue) -> Self {
        Self::bytes_with_content_type(text.into().into_bytes(), content_type)
    }

    /// Serialize `value` as a JSON payload tagged `application/json`.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::bytes_with_content_type(
            serde_json::to_vec(value)?,
            HeaderValue::from_static("application/json"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_has_no_content_type() {
        let content = Content::text("ping");
        assert_eq!(content.bytes, b"ping");
        assert!(content.content_type.is_none());
    }

    #[test]
    fn json_sets_media_type() {
        let content = Content::json(&json!({ "a": 1 })).unwrap();
        assert_eq!(content.bytes, br#"{"a":1}"#);
        assert_eq!(
            content.content_type.as_ref().and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }
}
