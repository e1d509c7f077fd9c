//! Product catalogue: listing, details, and stock updates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::{CommonResponse, Envelope};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

#[derive(Debug)]
pub struct Products<'a, T> {
    pub(crate) client: &'a Client<T>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    All,
    Visible,
    Invisible,
    EmptyStock,
    NotModerated,
    Moderated,
    Archived,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::All => "ALL",
            Visibility::Visible => "VISIBLE",
            Visibility::Invisible => "INVISIBLE",
            Visibility::EmptyStock => "EMPTY_STOCK",
            Visibility::NotModerated => "NOT_MODERATED",
            Visibility::Moderated => "MODERATED",
            Visibility::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListProductsParams {
    pub filter: ProductFilter,
    pub last_id: String,
    pub limit: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub offer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub product_id: Vec<i64>,
    #[serde(default)]
    pub visibility: Visibility,
}

crate::query_value!(display Visibility);
crate::query_value!(nested ProductFilter);

crate::query_params!(
    ListProductsParams {
        filter => "filter",
        last_id => "last_id",
        limit => "limit" = "100",
    };
    ProductFilter {
        offer_id => "offer_id",
        product_id => "product_id",
        visibility => "visibility",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListProductsResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: ListProductsResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListProductsResult {
    pub items: Vec<ProductListItem>,
    pub total: i32,
    pub last_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductListItem {
    pub product_id: i64,
    pub offer_id: String,
    pub archived: bool,
    pub has_fbo_stocks: bool,
    pub has_fbs_stocks: bool,
    pub is_discounted: bool,
}

/// Identify the product by exactly one of the three fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInfoParams {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub offer_id: String,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub product_id: i64,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub sku: i64,
}

crate::query_params!(ProductInfoParams {
    offer_id => "offer_id",
    product_id => "product_id",
    sku => "sku",
});

fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInfoResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: ProductDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDetails {
    pub id: i64,
    pub name: String,
    pub offer_id: String,
    pub barcode: String,
    pub price: String,
    pub old_price: String,
    pub currency_code: String,
    pub stocks: ProductStocks,
    pub visible: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductStocks {
    pub coming: i32,
    pub present: i32,
    pub reserved: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateStocksParams {
    pub stocks: Vec<StockUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub offer_id: String,
    pub product_id: i64,
    pub stock: i64,
    pub warehouse_id: i64,
}

crate::query_value!(nested StockUpdate);

crate::query_params!(
    UpdateStocksParams {
        stocks => "stocks",
    };
    StockUpdate {
        offer_id => "offer_id",
        product_id => "product_id",
        stock => "stock",
        warehouse_id => "warehouse_id",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateStocksResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: Vec<StockUpdateResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockUpdateResult {
    pub warehouse_id: i64,
    pub product_id: i64,
    pub offer_id: String,
    pub updated: bool,
    pub errors: Vec<StockUpdateError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockUpdateError {
    pub code: String,
    pub message: String,
}

crate::common_fields!(ListProductsResponse, ProductInfoResponse, UpdateStocksResponse);

impl<T: Transport> Products<'_, T> {
    /// Page through the seller's products. Pass the previous page's
    /// `last_id` to continue.
    pub async fn list(&self, ctx: &Context, params: &ListProductsParams) -> Result<ListProductsResponse> {
        let envelope: Envelope<ListProductsResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v3/product/list", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }

    pub async fn info(&self, ctx: &Context, params: &ProductInfoParams) -> Result<ProductInfoResponse> {
        let envelope: Envelope<ProductInfoResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v2/product/info", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }

    /// Set available stock per warehouse.
    pub async fn update_stocks(
        &self,
        ctx: &Context,
        params: &UpdateStocksParams,
    ) -> Result<UpdateStocksResponse> {
        let envelope: Envelope<UpdateStocksResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v2/products/stocks", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{fake_client, sent_json};
    use crate::query::project;

    #[tokio::test]
    async fn list_sends_filter_and_projects_defaults() {
        let (client, transport) = fake_client(
            200,
            r#"{"result":{"items":[{"product_id":223681945,"offer_id":"136748"}],"total":1,"last_id":"bnVsbA=="}}"#,
        );
        let params = ListProductsParams {
            filter: ProductFilter {
                offer_id: vec!["136748".to_string()],
                visibility: Visibility::Visible,
                ..Default::default()
            },
            ..Default::default()
        };

        let response = client.products().list(&Context::background(), &params).await.unwrap();

        assert_eq!(response.common.status_code, 200);
        assert_eq!(response.result.total, 1);
        assert_eq!(response.result.items[0].product_id, 223681945);
        assert_eq!(response.result.last_id, "bnVsbA==");

        let body = sent_json(&transport);
        assert_eq!(body["filter"]["offer_id"][0], "136748");
        assert_eq!(body["filter"]["visibility"], "VISIBLE");
        assert!(body["filter"].get("product_id").is_none());
        assert_eq!(body["limit"], 0);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_values("limit"), vec!["100"]);
        assert!(sent.query_values("last_id").is_empty());
        assert_eq!(sent.query_values("filter").len(), 1);
    }

    #[test]
    fn list_params_are_not_comparable_by_value() {
        assert!(project(&ListProductsParams::default()).is_err());
    }

    #[tokio::test]
    async fn info_decodes_details() {
        let (client, transport) = fake_client(
            200,
            r#"{"result":{"id":137208233,"name":"Tea set","offer_id":"143210586","price":"2999.0000","currency_code":"RUB","stocks":{"coming":0,"present":13,"reserved":2},"visible":true}}"#,
        );
        let params = ProductInfoParams {
            offer_id: "143210586".to_string(),
            ..Default::default()
        };

        let response = client.products().info(&Context::background(), &params).await.unwrap();

        assert_eq!(response.result.id, 137208233);
        assert_eq!(response.result.stocks.present, 13);
        assert!(response.result.visible);

        let body = sent_json(&transport);
        assert_eq!(body, serde_json::json!({"offer_id": "143210586"}));
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_values("offer_id"), vec!["143210586"]);
        assert!(sent.query_values("sku").is_empty());
    }

    #[test]
    fn info_params_project_by_value() {
        let pairs = project(&ProductInfoParams {
            sku: 42,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(pairs.iter().collect::<Vec<_>>(), vec![("sku", "42")]);
    }

    #[tokio::test]
    async fn update_stocks_repeats_stocks_query_key() {
        let (client, transport) = fake_client(
            200,
            r#"{"result":[{"warehouse_id":22142605386000,"product_id":118597312,"offer_id":"PH11042","updated":true,"errors":[]}]}"#,
        );
        let params = UpdateStocksParams {
            stocks: vec![
                StockUpdate {
                    offer_id: "PH11042".to_string(),
                    product_id: 118597312,
                    stock: 100,
                    warehouse_id: 22142605386000,
                },
                StockUpdate {
                    offer_id: "PH11043".to_string(),
                    stock: 5,
                    warehouse_id: 22142605386000,
                    ..Default::default()
                },
            ],
        };

        let response = client
            .products()
            .update_stocks(&Context::background(), &params)
            .await
            .unwrap();

        assert!(response.result[0].updated);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_values("stocks").len(), 2);
        assert_eq!(sent_json(&transport)["stocks"][1]["offer_id"], "PH11043");
    }

    #[tokio::test]
    async fn update_stocks_surfaces_validation_error() {
        let (client, _) = fake_client(
            400,
            r#"{"code":3,"message":"invalid stock","details":[{"typeUrl":"type.googleapis.com/ozon.StockError","value":"negative"}]}"#,
        );

        let response = client
            .products()
            .update_stocks(&Context::background(), &UpdateStocksParams::default())
            .await
            .unwrap();

        assert_eq!(response.common.status_code, 400);
        assert_eq!(response.common.code, 3);
        assert_eq!(response.common.details[0].value, "negative");
        assert!(response.result.is_empty());
    }
}
