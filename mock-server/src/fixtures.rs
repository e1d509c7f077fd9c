//! Canned seller data served by the mock endpoints.

use serde_json::{json, Value};

pub fn warehouses() -> Value {
    json!([
        {
            "warehouse_id": 15588127982000i64,
            "name": "Main FBS warehouse",
            "is_rfbs": false,
            "has_entrusted_acceptance": false,
            "can_print_act_in_advance": true,
            "status": "created",
            "first_mile_type": {
                "dropoff_point_id": "",
                "dropoff_timeslot_id": 0,
                "first_mile_is_changing": false,
                "first_mile_type": "PickUp"
            },
            "working_days": ["1", "2", "3", "4", "5"]
        },
        {
            "warehouse_id": 22341900000000i64,
            "name": "Regional rFBS warehouse",
            "is_rfbs": true,
            "has_entrusted_acceptance": false,
            "can_print_act_in_advance": false,
            "status": "created",
            "first_mile_type": {
                "dropoff_point_id": "dp-17",
                "dropoff_timeslot_id": 3,
                "first_mile_is_changing": false,
                "first_mile_type": "DropOff"
            },
            "working_days": ["1", "2", "3", "4", "5", "6"]
        }
    ])
}

pub fn products() -> Vec<Value> {
    vec![
        json!({
            "id": 214887921,
            "sku": 1200000001,
            "name": "Ceramic mug, 350 ml",
            "offer_id": "mug-350",
            "barcode": "4600000000011",
            "price": "490.0000",
            "old_price": "590.0000",
            "currency_code": "RUB",
            "stocks": {"coming": 0, "present": 12, "reserved": 2},
            "visible": true,
            "created_at": "2021-10-21T15:48:03.529178Z"
        }),
        json!({
            "id": 214887922,
            "sku": 1200000002,
            "name": "Linen tea towel",
            "offer_id": "towel-linen",
            "barcode": "4600000000028",
            "price": "320.0000",
            "old_price": "",
            "currency_code": "RUB",
            "stocks": {"coming": 10, "present": 0, "reserved": 0},
            "visible": false,
            "created_at": "2022-02-11T09:12:44.102931Z"
        }),
    ]
}

pub fn postings() -> Vec<Value> {
    vec![
        json!({
            "posting_number": "05708065-0029-1",
            "order_id": 680420041,
            "order_number": "05708065-0029",
            "status": "awaiting_packaging",
            "tracking_number": "",
            "in_process_at": "2022-05-13T07:07:32Z",
            "shipment_date": "2022-05-13T10:00:00Z",
            "products": [{
                "sku": 1200000001,
                "name": "Ceramic mug, 350 ml",
                "offer_id": "mug-350",
                "price": "490.0000",
                "quantity": 1,
                "currency_code": "RUB"
            }]
        }),
        json!({
            "posting_number": "05708065-0031-1",
            "order_id": 680420077,
            "order_number": "05708065-0031",
            "status": "delivered",
            "tracking_number": "RP123456789RU",
            "in_process_at": "2022-05-10T11:41:02Z",
            "shipment_date": "2022-05-11T10:00:00Z",
            "products": [{
                "sku": 1200000002,
                "name": "Linen tea towel",
                "offer_id": "towel-linen",
                "price": "320.0000",
                "quantity": 2,
                "currency_code": "RUB"
            }]
        }),
    ]
}

pub fn operations() -> Vec<Value> {
    vec![
        json!({
            "operation_id": 11401182187i64,
            "operation_type": "MarketplaceMarketingActionCostOperation",
            "operation_date": "2022-05-13 00:00:00",
            "operation_type_name": "Promotion services",
            "delivery_charge": 0,
            "return_delivery_charge": 0,
            "accruals_for_sale": 0,
            "sale_commission": 0,
            "amount": -6.46,
            "type": "services",
            "posting": {
                "delivery_schema": "",
                "order_date": "",
                "posting_number": "",
                "warehouse_id": 0
            }
        }),
        json!({
            "operation_id": 11401182201i64,
            "operation_type": "OperationAgentDeliveredToCustomer",
            "operation_date": "2022-05-14 00:00:00",
            "operation_type_name": "Delivery to customer",
            "delivery_charge": 0,
            "return_delivery_charge": 0,
            "accruals_for_sale": 640,
            "sale_commission": -76.8,
            "amount": 563.2,
            "type": "orders",
            "posting": {
                "delivery_schema": "FBS",
                "order_date": "2022-05-10 11:41:02",
                "posting_number": "05708065-0031-1",
                "warehouse_id": 15588127982000i64
            }
        }),
    ]
}

pub fn stock_rows() -> Vec<Value> {
    vec![
        json!({
            "sku": 1200000001,
            "item_code": "mug-350",
            "item_name": "Ceramic mug, 350 ml",
            "free_to_sell_amount": 10,
            "promised_amount": 0,
            "reserved_amount": 2,
            "warehouse_name": "Main FBS warehouse"
        }),
        json!({
            "sku": 1200000002,
            "item_code": "towel-linen",
            "item_name": "Linen tea towel",
            "free_to_sell_amount": 0,
            "promised_amount": 10,
            "reserved_amount": 0,
            "warehouse_name": "Main FBS warehouse"
        }),
    ]
}

pub fn fbo_returns() -> Vec<Value> {
    vec![
        json!({
            "id": 1000015552,
            "posting_number": "05708065-0031-1",
            "sku": 1200000002,
            "status_name": "returned_to_ozon",
            "accepted_from_customer_moment": "2022-05-20T08:00:00Z",
            "returned_to_ozon_moment": "2022-05-22T12:30:00Z"
        }),
        json!({
            "id": 1000015561,
            "posting_number": "05708065-0029-1",
            "sku": 1200000001,
            "status_name": "waiting_for_seller",
            "accepted_from_customer_moment": "2022-05-24T09:15:00Z",
            "returned_to_ozon_moment": ""
        }),
        json!({
            "id": 1000015570,
            "posting_number": "05708065-0031-1",
            "sku": 1200000002,
            "status_name": "returned_to_ozon",
            "accepted_from_customer_moment": "2022-05-25T16:40:00Z",
            "returned_to_ozon_moment": "2022-05-27T10:05:00Z"
        }),
    ]
}
