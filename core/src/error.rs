//! Error types for the seller API client.
//!
//! # Design
//! Every failure inside a call aborts it and surfaces here; nothing is retried
//! or logged on the way out. A non-200 status whose body decodes into the
//! common error envelope is *not* an error at this level: it comes back as an
//! [`Envelope`](crate::Envelope) carrying the error payload, and the caller
//! decides what the status means.

use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::Transport) or a response
/// body stream.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`Client::request`](crate::Client::request) and every
/// endpoint method built on it.
#[derive(Debug, Error)]
pub enum Error {
    /// The request body could not be serialized to JSON. Nothing was sent.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Base URL and path did not concatenate into a valid URL.
    #[error("invalid request url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The call context expired before or during the round-trip.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The transport failed. The underlying error is passed through as is.
    #[error(transparent)]
    Transport(BoxError),

    /// The response body could not be read in full.
    #[error("failed to read response body: {0}")]
    Read(#[source] BoxError),

    /// The response body did not decode into the success type or the common
    /// error envelope.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Errors raised by the default-value query projector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// The zero-value check needs value equality, and the type holds a field
    /// that has none (a `Vec`, directly or through a nested struct).
    #[error("type {type_name} is not comparable")]
    NotComparable { type_name: &'static str },
}

/// Errors raised while assembling a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or not valid unicode.
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_is_passed_through_verbatim() {
        let inner: BoxError = "connection refused".into();
        let err = Error::Transport(inner);
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn not_comparable_names_the_type() {
        let err = ProjectError::NotComparable { type_name: "Params" };
        assert_eq!(err.to_string(), "type Params is not comparable");
    }

    #[test]
    fn decode_error_keeps_its_source() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = Error::Decode(source);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to decode response body"));
    }
}
