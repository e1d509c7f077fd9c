//! Analytics reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::{CommonResponse, Envelope};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

#[derive(Debug)]
pub struct Analytics<'a, T> {
    pub(crate) client: &'a Client<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarehouseType {
    All,
    ExpressDarkStore,
    NotExpressDarkStore,
}

impl fmt::Display for WarehouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WarehouseType::All => "ALL",
            WarehouseType::ExpressDarkStore => "EXPRESS_DARK_STORE",
            WarehouseType::NotExpressDarkStore => "NOT_EXPRESS_DARK_STORE",
        })
    }
}

crate::query_value!(display WarehouseType);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StocksOnWarehousesParams {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub warehouse_type: Option<WarehouseType>,
}

crate::query_params!(StocksOnWarehousesParams {
    limit => "limit" = "100",
    offset => "offset",
    warehouse_type => "warehouse_type" = "ALL",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StocksOnWarehousesResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: StocksOnWarehousesResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StocksOnWarehousesResult {
    pub rows: Vec<StockRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockRow {
    pub sku: i64,
    pub item_code: String,
    pub item_name: String,
    pub free_to_sell_amount: i64,
    pub promised_amount: i64,
    pub reserved_amount: i64,
    pub warehouse_name: String,
}

crate::common_fields!(StocksOnWarehousesResponse);

impl<T: Transport> Analytics<'_, T> {
    /// Stock levels per product and warehouse.
    pub async fn stocks_on_warehouses(
        &self,
        ctx: &Context,
        params: &StocksOnWarehousesParams,
    ) -> Result<StocksOnWarehousesResponse> {
        let envelope: Envelope<StocksOnWarehousesResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v2/analytics/stock_on_warehouses", Some(params), &[])
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
    async fn stocks_on_warehouses_decodes_rows() {
        let (client, transport) = fake_client(
            200,
            r#"{"result":{"rows":[{"sku":100011,"item_code":"TEST 1","item_name":"Tea","free_to_sell_amount":12,"promised_amount":0,"reserved_amount":1,"warehouse_name":"Khorugino"}]}}"#,
        );

        let response = client
            .analytics()
            .stocks_on_warehouses(&Context::background(), &StocksOnWarehousesParams::default())
            .await
            .unwrap();

        assert_eq!(response.result.rows[0].free_to_sell_amount, 12);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_values("limit"), vec!["100"]);
        assert_eq!(sent.query_values("warehouse_type"), vec!["ALL"]);
        assert!(sent.query_values("offset").is_empty());
        assert_eq!(sent_json(&transport), serde_json::json!({"limit": 0, "offset": 0}));
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let pairs = project(&StocksOnWarehousesParams {
            limit: 10,
            offset: 20,
            warehouse_type: Some(WarehouseType::ExpressDarkStore),
        })
        .unwrap();
        assert_eq!(pairs.get("limit"), Some("10"));
        assert_eq!(pairs.get("offset"), Some("20"));
        assert_eq!(pairs.get("warehouse_type"), Some("EXPRESS_DARK_STORE"));
    }

    #[test]
    fn zero_params_project_nothing_by_value() {
        assert!(project(&StocksOnWarehousesParams::default()).unwrap().is_empty());
    }
}
