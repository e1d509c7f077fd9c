//! FBS (fulfilled by seller) postings.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::{CommonResponse, Envelope};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

#[derive(Debug)]
pub struct Fbs<'a, T> {
    pub(crate) client: &'a Client<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFbsPostingsParams {
    /// `ASC` or `DESC`.
    pub dir: String,
    pub filter: FbsPostingFilter,
    pub limit: i64,
    pub offset: i64,
    pub with: PostingAdditionalFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FbsPostingFilter {
    /// RFC 3339 timestamp.
    pub since: String,
    /// RFC 3339 timestamp.
    pub to: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warehouse_id: Vec<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingAdditionalFields {
    pub analytics_data: bool,
    pub barcodes: bool,
    pub financial_data: bool,
    pub translit: bool,
}

crate::query_value!(nested FbsPostingFilter, PostingAdditionalFields);

crate::query_params!(
    ListFbsPostingsParams {
        dir => "dir" = "ASC",
        filter => "filter",
        limit => "limit" = "100",
        offset => "offset",
        with => "with",
    };
    FbsPostingFilter {
        since => "since",
        to => "to",
        status => "status",
        warehouse_id => "warehouse_id",
    };
    PostingAdditionalFields {
        analytics_data => "analytics_data",
        barcodes => "barcodes",
        financial_data => "financial_data",
        translit => "translit",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFbsPostingsResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: FbsPostingPage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FbsPostingPage {
    pub postings: Vec<FbsPosting>,
    pub has_next: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FbsPosting {
    pub posting_number: String,
    pub order_id: i64,
    pub order_number: String,
    pub status: String,
    pub tracking_number: String,
    pub in_process_at: String,
    pub shipment_date: String,
    pub products: Vec<PostingProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingProduct {
    pub sku: i64,
    pub name: String,
    pub offer_id: String,
    pub price: String,
    pub quantity: i32,
    pub currency_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFbsPostingParams {
    pub posting_number: String,
    pub with: PostingAdditionalFields,
}

crate::query_params!(GetFbsPostingParams {
    posting_number => "posting_number",
    with => "with",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFbsPostingResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: FbsPosting,
}

crate::common_fields!(ListFbsPostingsResponse, GetFbsPostingResponse);

impl<T: Transport> Fbs<'_, T> {
    pub async fn list_postings(
        &self,
        ctx: &Context,
        params: &ListFbsPostingsParams,
    ) -> Result<ListFbsPostingsResponse> {
        let envelope: Envelope<ListFbsPostingsResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v3/posting/fbs/list", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }

    pub async fn get_posting(
        &self,
        ctx: &Context,
        params: &GetFbsPostingParams,
    ) -> Result<GetFbsPostingResponse> {
        let envelope: Envelope<GetFbsPostingResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v3/posting/fbs/get", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }
}
