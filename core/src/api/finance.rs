//! Finance: the transaction ledger.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::{CommonResponse, Envelope};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

#[derive(Debug)]
pub struct Finance<'a, T> {
    pub(crate) client: &'a Client<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTransactionsParams {
    pub filter: TransactionFilter,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub date: DateRange,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub operation_type: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub posting_number: String,
    /// `all`, `orders`, `returns`, `services`, `compensation`,
    /// `transferDelivery` or `other`.
    pub transaction_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

crate::query_value!(nested TransactionFilter, DateRange);

crate::query_params!(
    ListTransactionsParams {
        filter => "filter",
        page => "page" = "1",
        page_size => "page_size" = "1000",
    };
    TransactionFilter {
        date => "date",
        operation_type => "operation_type",
        posting_number => "posting_number",
        transaction_type => "transaction_type" = "all",
    };
    DateRange {
        from => "from",
        to => "to",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTransactionsResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: TransactionPage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionPage {
    pub operations: Vec<Operation>,
    pub page_count: i64,
    pub row_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    pub operation_id: i64,
    pub operation_type: String,
    pub operation_date: String,
    pub operation_type_name: String,
    pub delivery_charge: f64,
    pub return_delivery_charge: f64,
    pub accruals_for_sale: f64,
    pub sale_commission: f64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub posting: OperationPosting,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationPosting {
    pub delivery_schema: String,
    pub order_date: String,
    pub posting_number: String,
    pub warehouse_id: i64,
}

crate::common_fields!(ListTransactionsResponse);

impl<T: Transport> Finance<'_, T> {
    pub async fn list_transactions(
        &self,
        ctx: &Context,
        params: &ListTransactionsParams,
    ) -> Result<ListTransactionsResponse> {
        let envelope: Envelope<ListTransactionsResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v3/finance/transaction/list", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{fake_client, sent_json};

    #[tokio::test]
    async fn list_transactions_decodes_operations() {
        let (client, transport) = fake_client(
            200,
            r#"{"result":{"operations":[{"operation_id":11401182187840,"operation_type":"MarketplaceMarketingActionCostOperation","operation_date":"2024-11-01 00:00:00","amount":-6.46,"type":"services","posting":{"posting_number":"","warehouse_id":0}}],"page_count":1,"row_count":1}}"#,
        );
        let params = ListTransactionsParams {
            filter: TransactionFilter {
                date: DateRange {
                    from: "2024-11-01T00:00:00.000Z".to_string(),
                    to: "2024-11-02T00:00:00.000Z".to_string(),
                },
                ..Default::default()
            },
            ..Default::default()
        };

        let response = client
            .finance()
            .list_transactions(&Context::background(), &params)
            .await
            .unwrap();

        assert_eq!(response.result.row_count, 1);
        let operation = &response.result.operations[0];
        assert_eq!(operation.kind, "services");
        assert!((operation.amount + 6.46).abs() < f64::EPSILON);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_values("page"), vec!["1"]);
        assert_eq!(sent.query_values("page_size"), vec!["1000"]);
        let body = sent_json(&transport);
        assert_eq!(body["page"], 0);
        assert_eq!(body["filter"]["date"]["from"], "2024-11-01T00:00:00.000Z");
        assert_eq!(body["filter"]["transaction_type"], "");
    }
}
