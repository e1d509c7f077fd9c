//! Typed client for the marketplace seller REST API.
//!
//! # Overview
//! Every endpoint method funnels into [`Client::request`], which serializes
//! the request body to JSON, projects the same request into query pairs,
//! sends it through a [`Transport`], and decodes the reply into either the
//! endpoint's success type or the common [`ErrorEnvelope`].
//!
//! # Design
//! - The network sits behind the [`Transport`] trait. [`ReqwestTransport`] is
//!   the default; `FakeTransport` (behind the `testing` feature) records
//!   requests and replays a canned reply for tests.
//! - A non-200 status is data, not an [`Error`]: it arrives as an
//!   [`Envelope`] with [`Payload::Error`].
//! - Query projection is driven by per-type field tables generated with
//!   [`query_params!`], which also carry each field's default value.
//! - Endpoint groups live under [`api`] and borrow the client, e.g.
//!   `client.products().list(&ctx, &params)`.

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod http;
pub mod query;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use context::Context;
pub use envelope::{CommonFields, CommonResponse, Envelope, ErrorDetail, ErrorEnvelope, Payload};
pub use error::{BoxError, ConfigError, Error, ProjectError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ResponseBody};
pub use query::{QueryPairs, QueryParams, QueryValue};
#[cfg(any(test, feature = "testing"))]
pub use testing::FakeTransport;
pub use transport::{ReqwestTransport, Transport};
