//! Legacy alias for the trade endpoints. Older backends expose the same
//! resources under `/live-trades`; the payloads are identical.

use uuid::Uuid;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{Trade, TradeCreate, TradeUpdate};

const LIVE_TRADES_URL: &str = "/live-trades";

pub async fn get_live_trades(api: &ApiClient) -> Result<Vec<Trade>, ApiError> {
    api.get(LIVE_TRADES_URL).await
}

pub async fn create_live_trade(api: &ApiClient, payload: &TradeCreate) -> Result<Trade, ApiError> {
    api.post(LIVE_TRADES_URL, payload).await
}

pub async fn update_live_trade(
    api: &ApiClient,
    id: Uuid,
    payload: &TradeUpdate,
) -> Result<Trade, ApiError> {
    api.patch(&format!("{LIVE_TRADES_URL}/{id}"), payload).await
}

pub async fn delete_live_trade(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("{LIVE_TRADES_URL}/{id}")).await
}
