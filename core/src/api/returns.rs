//! FBO returns.
//!
//! Unlike most endpoints this one is a GET; its parameters reach the server
//! through the projected query string.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::{CommonResponse, Envelope};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

#[derive(Debug)]
pub struct Returns<'a, T> {
    pub(crate) client: &'a Client<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFboReturnsParams {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub posting_number: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub status: String,
    #[serde(default)]
    pub last_id: i64,
    #[serde(default)]
    pub limit: i64,
}

crate::query_params!(ListFboReturnsParams {
    posting_number => "posting_number",
    status => "status",
    last_id => "last_id",
    limit => "limit" = "50",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFboReturnsResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub returns: Vec<FboReturn>,
    #[serde(default)]
    pub last_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FboReturn {
    pub id: i64,
    pub posting_number: String,
    pub sku: i64,
    pub status_name: String,
    pub accepted_from_customer_moment: String,
    pub returned_to_ozon_moment: String,
}

crate::common_fields!(ListFboReturnsResponse);

impl<T: Transport> Returns<'_, T> {
    pub async fn list_fbo(&self, ctx: &Context, params: &ListFboReturnsParams) -> Result<ListFboReturnsResponse> {
        let envelope: Envelope<ListFboReturnsResponse> = self
            .client
            .request(ctx, HttpMethod::Get, "/v3/returns/company/fbo", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::fake_client;

    #[tokio::test]
    async fn list_fbo_sends_filters_as_query() {
        let (client, transport) = fake_client(
            200,
            r#"{"returns":[{"id":1000015552,"posting_number":"12345678-0001-1","sku":1234567,"status_name":"returned"}],"last_id":1000015552}"#,
        );
        let params = ListFboReturnsParams {
            status: "returned".to_string(),
            ..Default::default()
        };

        let response = client.returns().list_fbo(&Context::background(), &params).await.unwrap();

        assert_eq!(response.returns.len(), 1);
        assert_eq!(response.last_id, 1000015552);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.url.query(), Some("status=returned&limit=50"));
        assert!(sent.body.is_some());
    }
}
