//! REST bindings for trades. Each function maps to one endpoint and does
//! nothing beyond (de)serialization; failures arrive pre-normalized from
//! the shared client.

use uuid::Uuid;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{Trade, TradeCreate, TradeUpdate};

const TRADES_URL: &str = "/trades";

/// List every journaled trade with embedded scale plans and annotations.
pub async fn get_trades(api: &ApiClient) -> Result<Vec<Trade>, ApiError> {
    api.get(TRADES_URL).await
}

pub async fn get_trade(api: &ApiClient, id: Uuid) -> Result<Trade, ApiError> {
    api.get(&format!("{TRADES_URL}/{id}")).await
}

pub async fn create_trade(api: &ApiClient, payload: &TradeCreate) -> Result<Trade, ApiError> {
    api.post(TRADES_URL, payload).await
}

/// Full replace (PUT) of a trade and its scale plans.
pub async fn replace_trade(
    api: &ApiClient,
    id: Uuid,
    payload: &TradeCreate,
) -> Result<Trade, ApiError> {
    api.put(&format!("{TRADES_URL}/{id}"), payload).await
}

pub async fn update_trade(
    api: &ApiClient,
    id: Uuid,
    payload: &TradeUpdate,
) -> Result<Trade, ApiError> {
    api.patch(&format!("{TRADES_URL}/{id}"), payload).await
}

pub async fn delete_trade(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("{TRADES_URL}/{id}")).await
}

/// Mark a trade invalidated. The compensating undo is a plain status PATCH.
pub async fn invalidate_trade(api: &ApiClient, id: Uuid) -> Result<Trade, ApiError> {
    api.post_empty(&format!("{TRADES_URL}/{id}/invalidate")).await
}
