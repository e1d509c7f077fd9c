use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::CommonResponse;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::query::NoParams;
use crate::transport::Transport;

#[derive(Debug)]
pub struct Warehouses<'a, T> {
    pub(crate) client: &'a Client<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListWarehousesResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: Vec<Warehouse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Warehouse {
    pub warehouse_id: i64,
    pub name: String,
    pub is_rfbs: bool,
    pub has_entrusted_acceptance: bool,
    pub can_print_act_in_advance: bool,
    pub status: String,
    pub first_mile_type: FirstMileType,
    pub working_days: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstMileType {
    pub dropoff_point_id: String,
    pub dropoff_timeslot_id: i64,
    pub first_mile_is_changing: bool,
    pub first_mile_type: String,
}

crate::common_fields!(ListWarehousesResponse);

impl<T: Transport> Warehouses<'_, T> {
    /// Warehouses registered for the seller. The call takes no parameters.
    pub async fn list(&self, ctx: &Context) -> Result<ListWarehousesResponse> {
        let envelope = self
            .client
            .request::<NoParams, ListWarehousesResponse>(ctx, HttpMethod::Post, "/v1/warehouse/list", None, &[])
            .await?;
        Ok(envelope.into_response())
    }
}
