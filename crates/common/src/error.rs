//! Error taxonomy for ticker lookups.
//!
//! Every failure mode the client can hit surfaces as its own variant so
//! presentation layers can pick messaging off the kind instead of parsing
//! strings. Missing or mistyped fields inside an otherwise successful
//! response are not errors; they degrade to `None` on the quote itself.

use thiserror::Error;

/// Failure modes surfaced by the lookup client.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Empty or whitespace-only ticker supplied by the caller.
    #[error("invalid ticker: {0:?}")]
    InvalidTicker(String),

    /// Missing or empty API credential. Operator action required.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Upstream has no data for the ticker, or no price for it.
    #[error("no data found for {0}")]
    NotFound(String),

    /// Upstream rejected the credential (HTTP 401).
    #[error("invalid credential")]
    Authentication,

    /// Upstream throttled the request (HTTP 429).
    #[error("rate limited by provider")]
    RateLimited,

    /// Any other non-2xx status, or a response body that was not valid
    /// JSON of the expected shape.
    #[error("provider error: {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// Transport-level failure: timeout, refused connection, DNS.
    #[error("provider unreachable: {0}")]
    Unavailable(String),
}

impl LookupError {
    /// True when the user can fix the problem by correcting their input,
    /// false when the failure needs an operator or a later retry.
    pub fn user_correctable(&self) -> bool {
        matches!(
            self,
            LookupError::InvalidTicker(_) | LookupError::NotFound(_)
        )
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Upstream {
                status: err.status().map(|s| s.as_u16()),
                message: "malformed response".to_string(),
            }
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 => LookupError::Authentication,
                429 => LookupError::RateLimited,
                code => LookupError::Upstream {
                    status: Some(code),
                    message: format!("unexpected status {}", status),
                },
            }
        } else {
            LookupError::Unavailable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_correctable_classification() {
        assert!(LookupError::InvalidTicker(" ".to_string()).user_correctable());
        assert!(LookupError::NotFound("XXXX".to_string()).user_correctable());

        assert!(!LookupError::Configuration("no key".to_string()).user_correctable());
        assert!(!LookupError::Authentication.user_correctable());
        assert!(!LookupError::RateLimited.user_correctable());
        assert!(!LookupError::Unavailable("timeout".to_string()).user_correctable());
        assert!(!LookupError::Upstream {
            status: Some(500),
            message: "unexpected status 500".to_string(),
        }
        .user_correctable());
    }

    #[test]
    fn test_display_messages() {
        let err = LookupError::NotFound("XXXX".to_string());
        assert_eq!(err.to_string(), "no data found for XXXX");

        let err = LookupError::Upstream {
            status: Some(500),
            message: "unexpected status 500 Internal Server Error".to_string(),
        };
        assert!(err.to_string().contains("500"));

        assert_eq!(
            LookupError::Authentication.to_string(),
            "invalid credential"
        );
    }
}
