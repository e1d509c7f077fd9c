//! The seller API client and its single request path.
//!
//! # Design
//! `Client` holds an immutable [`ClientConfig`] and a [`Transport`] behind an
//! `Arc`; clones share both, and no call mutates either. Every endpoint method
//! funnels into [`Client::request`], which:
//!
//! 1. refuses an already expired [`Context`];
//! 2. serializes the request object as the JSON body;
//! 3. joins base URL and path by plain concatenation;
//! 4. applies the content type, the static headers, then per-call headers;
//! 5. projects the same request object into query pairs and appends them to
//!    whatever query the path already carried;
//! 6. runs the transport and drains the body within the context's deadline;
//! 7. decodes the body into the caller's type on `200`, into the common error
//!    envelope otherwise.
//!
//! Failures abort the call and are returned as they are: no retries, no
//! partially filled envelopes.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::context::Context;
use crate::envelope::{Envelope, Payload};
use crate::error::{ConfigError, Error, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::{QueryPairs, QueryParams};
use crate::transport::{ReqwestTransport, Transport};

const STATUS_OK: u16 = 200;

#[derive(Debug)]
pub struct Client<T = ReqwestTransport> {
    inner: Arc<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    config: ClientConfig,
    transport: T,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Client<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            inner: Arc::new(Inner { config, transport }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Execute one call.
    ///
    /// `body` is sent as JSON and projected into query pairs; `None` sends
    /// neither. `extra_headers` apply to this call only and win over the
    /// configured static headers.
    ///
    /// A non-200 status with a well-formed error body is not an `Err`: the
    /// returned [`Envelope`] carries [`Payload::Error`] and the raw status.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn request<P, R>(
        &self,
        ctx: &Context,
        method: HttpMethod,
        path: &str,
        body: Option<&P>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Envelope<R>>
    where
        P: Serialize + QueryParams,
        R: DeserializeOwned,
    {
        if ctx.is_expired() {
            return Err(Error::DeadlineExceeded);
        }
        let request = self.build_request(method, path, body, extra_headers)?;
        debug!(url = %request.url, "dispatching request");

        let exchange = async {
            let HttpResponse {
                status,
                headers,
                body,
            } = self
                .inner
                .transport
                .round_trip(request)
                .await
                .map_err(Error::Transport)?;
            let bytes = body.read_all().await.map_err(Error::Read)?;
            Ok::<_, Error>((status, headers, bytes))
        };
        let (status, headers, bytes) = match ctx.remaining() {
            Some(remaining) => tokio::time::timeout(remaining, exchange)
                .await
                .map_err(|_| Error::DeadlineExceeded)??,
            None => exchange.await?,
        };
        debug!(status, bytes = bytes.len(), "received response");

        let payload = if status == STATUS_OK {
            Payload::Success(serde_json::from_slice(&bytes).map_err(Error::Decode)?)
        } else {
            Payload::Error(serde_json::from_slice(&bytes).map_err(Error::Decode)?)
        };
        Ok(Envelope {
            status_code: status,
            headers,
            payload,
        })
    }

    fn build_request<P>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&P>,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpRequest>
    where
        P: Serialize + QueryParams,
    {
        let payload = body
            .map(|body| serde_json::to_vec(body))
            .transpose()
            .map_err(Error::Serialization)?;

        let raw = format!("{}{}", self.inner.config.base_url(), path);
        let mut url = Url::parse(&raw).map_err(|source| Error::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        let query = QueryPairs::from_request(body);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }

        let mut request = HttpRequest::new(method, url);
        if payload.is_some() {
            request.set_header("Content-Type", "application/json");
        }
        for (name, value) in self.inner.config.headers() {
            request.set_header(name, value);
        }
        for (name, value) in extra_headers {
            request.set_header(name, value);
        }
        request.body = payload;
        Ok(request)
    }
}
