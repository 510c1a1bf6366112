use uuid::Uuid;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{TradeIdea, TradeIdeaCreate, TradeIdeaUpdate};

const TRADE_IDEAS_URL: &str = "/trade-ideas";

pub async fn get_trade_ideas(api: &ApiClient) -> Result<Vec<TradeIdea>, ApiError> {
    api.get(TRADE_IDEAS_URL).await
}

pub async fn create_trade_idea(
    api: &ApiClient,
    payload: &TradeIdeaCreate,
) -> Result<TradeIdea, ApiError> {
    api.post(TRADE_IDEAS_URL, payload).await
}

pub async fn update_trade_idea(
    api: &ApiClient,
    id: Uuid,
    payload: &TradeIdeaUpdate,
) -> Result<TradeIdea, ApiError> {
    api.patch(&format!("{TRADE_IDEAS_URL}/{id}"), payload).await
}

pub async fn delete_trade_idea(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("{TRADE_IDEAS_URL}/{id}")).await
}
