use serde::Serialize;
use uuid::Uuid;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{ScalePlan, ScalePlanCreate, ScalePlanUpdate};

const SCALE_PLANS_URL: &str = "/scale-plans";

/// Create embeds the owning trade id alongside the plan fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScalePlanCreateBody<'a> {
    live_trade_id: Uuid,
    #[serde(flatten)]
    plan: &'a ScalePlanCreate,
}

pub async fn create_scale_plan(
    api: &ApiClient,
    live_trade_id: Uuid,
    payload: &ScalePlanCreate,
) -> Result<ScalePlan, ApiError> {
    let body = ScalePlanCreateBody {
        live_trade_id,
        plan: payload,
    };
    api.post(SCALE_PLANS_URL, &body).await
}

pub async fn update_scale_plan(
    api: &ApiClient,
    id: Uuid,
    payload: &ScalePlanUpdate,
) -> Result<ScalePlan, ApiError> {
    api.patch(&format!("{SCALE_PLANS_URL}/{id}"), payload).await
}

pub async fn delete_scale_plan(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("{SCALE_PLANS_URL}/{id}")).await
}
