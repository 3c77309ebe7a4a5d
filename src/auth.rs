use crate::Error;
use http::HeaderValue;

/// Format an `Authorization` header value as `Bearer <token>`.
///
/// Callers attach the result only when a token was supplied; an absent
/// token must leave the request without an `Authorization` header at all.
pub(crate) fn bearer_value(token: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(&format!("Bearer {token}")).map_err(|err| Error::InvalidConfig {
        message: "invalid bearer token for Authorization header".into(),
        source: Some(Box::new(err)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_value_formats_token() {
        let value = bearer_value("sesame").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer sesame");
    }

    #[test]
    fn bearer_value_keeps_empty_token() {
        // `Some("")` still sends a header; only `None` suppresses it.
        let value = bearer_value("").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer ");
    }

    #[test]
    fn bearer_value_rejects_control_bytes() {
        let err = bearer_value("to\nken").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}
