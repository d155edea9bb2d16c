use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Request-level failures of the webhook endpoint.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// Signature header missing or not matching the body.
    #[error("Signature verification failed!")]
    AuthenticationFailure,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl WebhookError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthenticationFailure => StatusCode::UNAUTHORIZED,
            Self::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Startup configuration problems. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WEBHOOK_SECRET is not set")]
    SecretMissing,

    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("invalid bind address {addr}: {source}")]
    InvalidBindAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_failure_maps_to_401_with_fixed_body() {
        let err = WebhookError::AuthenticationFailure;
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Signature verification failed!");
    }

    #[test]
    fn malformed_payload_maps_to_400() {
        let err = WebhookError::MalformedPayload("empty from list".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Malformed payload: empty from list");
    }
}
