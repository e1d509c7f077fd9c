//! Verify request building and envelope decoding against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Bodies are compared as parsed JSON, not raw strings, so field order inside
//! a body does not matter. Query pairs are compared in order: projection
//! follows declared field order.

use seller_core::api::analytics::StocksOnWarehousesParams;
use seller_core::api::chats::ChatHistoryParams;
use seller_core::api::returns::ListFboReturnsParams;
use seller_core::{Client, ClientConfig, Context, ErrorDetail, FakeTransport, HttpMethod, HttpRequest};

const BASE_URL: &str = "http://localhost:3000";

fn client(transport: &FakeTransport) -> Client<FakeTransport> {
    Client::with_transport(
        ClientConfig::new(BASE_URL).with_credentials("836", "0c9a2b1e-key"),
        transport.clone(),
    )
}

/// Run the endpoint named by a vector and return the request it sent.
async fn send(endpoint: &str, params: serde_json::Value) -> HttpRequest {
    let transport = FakeTransport::new(200, "{}", &[]);
    let client = client(&transport);
    let ctx = Context::background();

    match endpoint {
        "warehouses.list" => {
            client.warehouses().list(&ctx).await.unwrap();
        }
        "returns.list_fbo" => {
            let params: ListFboReturnsParams = serde_json::from_value(params).unwrap();
            client.returns().list_fbo(&ctx, &params).await.unwrap();
        }
        "chats.history" => {
            let params: ChatHistoryParams = serde_json::from_value(params).unwrap();
            client.chats().history(&ctx, &params).await.unwrap();
        }
        "analytics.stocks_on_warehouses" => {
            let params: StocksOnWarehousesParams = serde_json::from_value(params).unwrap();
            client.analytics().stocks_on_warehouses(&ctx, &params).await.unwrap();
        }
        other => panic!("unknown endpoint: {other}"),
    }

    transport.last_request().unwrap()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];

        let request = send(case["endpoint"].as_str().unwrap(), case["params"].clone()).await;

        let method: HttpMethod = expected["method"].as_str().unwrap().parse().unwrap();
        assert_eq!(request.method, method, "{name}: method");
        assert_eq!(request.url.path(), expected["path"].as_str().unwrap(), "{name}: path");

        let query: Vec<(String, String)> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let expected_query: Vec<(String, String)> = expected["query"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| {
                let pair = pair.as_array().unwrap();
                (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(query, expected_query, "{name}: query");

        assert_eq!(request.header("Client-Id"), Some("836"), "{name}: client id");
        assert_eq!(request.header("Api-Key"), Some("0c9a2b1e-key"), "{name}: api key");

        match (&request.body, &expected["body"]) {
            (None, serde_json::Value::Null) => {
                assert!(request.header("Content-Type").is_none(), "{name}: content type");
            }
            (Some(body), expected_body) => {
                let body: serde_json::Value = serde_json::from_slice(body).unwrap();
                assert_eq!(&body, expected_body, "{name}: body");
                assert_eq!(request.header("Content-Type"), Some("application/json"), "{name}: content type");
            }
            (None, expected_body) => panic!("{name}: expected body {expected_body}, none sent"),
        }
    }
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn envelope_test_vectors() {
    let raw = include_str!("../../test-vectors/envelopes.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected"];
        let status = u16::try_from(case["status"].as_u64().unwrap()).unwrap();
        let transport = FakeTransport::new(status, case["body"].as_str().unwrap(), &[]);

        let response = client(&transport)
            .warehouses()
            .list(&Context::background())
            .await
            .unwrap();

        let common = &response.common;
        assert_eq!(u64::from(common.status_code), expected["status_code"].as_u64().unwrap(), "{name}: status");
        assert_eq!(common.code, expected["code"].as_i64().unwrap(), "{name}: code");
        assert_eq!(common.message, expected["message"].as_str().unwrap(), "{name}: message");
        let details: Vec<ErrorDetail> = serde_json::from_value(expected["details"].clone()).unwrap();
        assert_eq!(common.details, details, "{name}: details");
        assert_eq!(
            response.result.len() as u64,
            expected["result_len"].as_u64().unwrap(),
            "{name}: result"
        );
    }
}
