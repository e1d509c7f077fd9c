//! Pluggable transports.
//!
//! A transport has exactly one job: take a prepared [`HttpRequest`] and
//! produce a raw [`HttpResponse`] or an error. The client core never looks
//! behind this trait, so tests can substitute
//! [`FakeTransport`](crate::testing::FakeTransport) for a real socket.
//!
//! Implementations are shared by every call made through a client and must
//! be safe for concurrent use.

use std::future::Future;

use futures::{StreamExt, TryStreamExt};

use crate::error::BoxError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, ResponseBody};

pub trait Transport: Send + Sync + 'static {
    fn round_trip(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, BoxError>> + Send;
}

/// Production transport over a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, TLS roots, pool limits).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}

impl Transport for ReqwestTransport {
    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let chunks = response.bytes_stream().map_err(BoxError::from).boxed();

        Ok(HttpResponse {
            status,
            headers,
            body: ResponseBody::from_stream(chunks),
        })
    }
}
