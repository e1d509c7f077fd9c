//! Response envelope and the common error shape.
//!
//! # Design
//! The HTTP status alone picks what the body decodes into: `200` yields the
//! caller's success type, anything else the common [`ErrorEnvelope`]. The
//! result is a tagged [`Payload`], so exactly one of the two is ever present.
//!
//! Endpoint response types embed a [`CommonResponse`] by composition and
//! receive the status code and error fields through
//! [`Envelope::copy_common_fields`] once decoding is done.

use serde::{Deserialize, Serialize};

/// Common error shape returned by the API for every non-200 status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "typeUrl", default)]
    pub type_url: String,
    #[serde(default)]
    pub value: String,
}

/// Decoded body of a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Success(T),
    Error(ErrorEnvelope),
}

/// Outcome of one call: the raw status, response headers, and the payload the
/// status selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub payload: Payload<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(self.payload, Payload::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match &self.payload {
            Payload::Success(value) => Some(value),
            Payload::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorEnvelope> {
        match &self.payload {
            Payload::Success(_) => None,
            Payload::Error(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorEnvelope> {
        match self.payload {
            Payload::Success(value) => Ok(value),
            Payload::Error(error) => Err(error),
        }
    }

    /// Write the status code, and the error fields when there are any, into
    /// a response's common block.
    pub fn copy_common_fields(&self, into: &mut CommonResponse) {
        into.status_code = self.status_code;
        if let Payload::Error(error) = &self.payload {
            into.code = error.code;
            into.message = error.message.clone();
            into.details = error.details.clone();
        }
    }
}

impl<T: CommonFields + Default> Envelope<T> {
    /// Flatten into the endpoint response type. On a non-200 status the
    /// response is default-initialized and only its common block is filled.
    pub fn into_response(self) -> T {
        let mut common = CommonResponse::default();
        self.copy_common_fields(&mut common);
        let mut response = match self.payload {
            Payload::Success(value) => value,
            Payload::Error(_) => T::default(),
        };
        *response.common_mut() = common;
        response
    }
}

/// Status code and error fields shared by every endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonResponse {
    pub status_code: u16,
    pub code: i64,
    pub message: String,
    pub details: Vec<ErrorDetail>,
}

impl CommonResponse {
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }
}

/// Access to a response's embedded [`CommonResponse`].
pub trait CommonFields {
    fn common(&self) -> &CommonResponse;
    fn common_mut(&mut self) -> &mut CommonResponse;
}

/// Implement [`CommonFields`] for response types whose common block lives in
/// a field named `common`.
#[macro_export]
macro_rules! common_fields {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::envelope::CommonFields for $ty {
                fn common(&self) -> &$crate::envelope::CommonResponse {
                    &self.common
                }

                fn common_mut(&mut self) -> &mut $crate::envelope::CommonResponse {
                    &mut self.common
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Listing {
        #[serde(skip)]
        common: CommonResponse,
        total: u32,
    }

    crate::common_fields!(Listing);

    fn error_envelope() -> ErrorEnvelope {
        ErrorEnvelope {
            code: 7,
            message: "forbidden".to_string(),
            details: vec![ErrorDetail {
                type_url: "type.googleapis.com/google.rpc.ErrorInfo".to_string(),
                value: "seller-blocked".to_string(),
            }],
        }
    }

    #[test]
    fn error_envelope_decodes_wire_shape() {
        let body = r#"{"code":3,"message":"bad filter","details":[{"typeUrl":"t","value":"v"}]}"#;
        let error: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(error.code, 3);
        assert_eq!(error.message, "bad filter");
        assert_eq!(error.details[0].type_url, "t");
        assert_eq!(error.details[0].value, "v");
    }

    #[test]
    fn error_envelope_tolerates_missing_details() {
        let error: ErrorEnvelope =
            serde_json::from_str(r#"{"code":16,"message":"Client-Id and Api-Key headers are required"}"#)
                .unwrap();
        assert_eq!(error.code, 16);
        assert!(error.details.is_empty());
    }

    #[test]
    fn success_envelope_exposes_only_success() {
        let envelope = Envelope {
            status_code: 200,
            headers: Vec::new(),
            payload: Payload::Success(5u32),
        };
        assert!(envelope.is_success());
        assert_eq!(envelope.success(), Some(&5));
        assert!(envelope.error().is_none());
        assert_eq!(envelope.into_result(), Ok(5));
    }

    #[test]
    fn error_envelope_exposes_only_error() {
        let envelope: Envelope<u32> = Envelope {
            status_code: 403,
            headers: Vec::new(),
            payload: Payload::Error(error_envelope()),
        };
        assert!(!envelope.is_success());
        assert!(envelope.success().is_none());
        assert_eq!(envelope.error().unwrap().code, 7);
    }

    #[test]
    fn into_response_copies_status_on_success() {
        let envelope = Envelope {
            status_code: 200,
            headers: Vec::new(),
            payload: Payload::Success(Listing {
                common: CommonResponse::default(),
                total: 3,
            }),
        };
        let response = envelope.into_response();
        assert_eq!(response.total, 3);
        assert_eq!(response.common().status_code, 200);
        assert!(response.common().is_ok());
        assert!(response.common().message.is_empty());
    }

    #[test]
    fn into_response_copies_error_fields() {
        let envelope: Envelope<Listing> = Envelope {
            status_code: 403,
            headers: Vec::new(),
            payload: Payload::Error(error_envelope()),
        };
        let response = envelope.into_response();
        assert_eq!(response.total, 0);
        assert_eq!(response.common.status_code, 403);
        assert_eq!(response.common.code, 7);
        assert_eq!(response.common.message, "forbidden");
        assert_eq!(response.common.details.len(), 1);
        assert!(!response.common.is_ok());
    }
}
