use uuid::Uuid;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{Execution, ExecutionCreate, ExecutionUpdate};

const EXECUTIONS_URL: &str = "/executions";

/// List fills, optionally scoped to one trade.
pub async fn get_executions(
    api: &ApiClient,
    trade_id: Option<Uuid>,
) -> Result<Vec<Execution>, ApiError> {
    match trade_id {
        Some(id) => {
            api.get_query(EXECUTIONS_URL, &[("tradeId", id.to_string())])
                .await
        }
        None => api.get(EXECUTIONS_URL).await,
    }
}

pub async fn get_execution(api: &ApiClient, id: Uuid) -> Result<Execution, ApiError> {
    api.get(&format!("{EXECUTIONS_URL}/{id}")).await
}

pub async fn create_execution(
    api: &ApiClient,
    payload: &ExecutionCreate,
) -> Result<Execution, ApiError> {
    api.post(EXECUTIONS_URL, payload).await
}

/// Record a fill against a plan, letting the backend settle plan status.
pub async fn execute_plan(
    api: &ApiClient,
    payload: &ExecutionCreate,
) -> Result<Execution, ApiError> {
    api.post(&format!("{EXECUTIONS_URL}/execute"), payload).await
}

pub async fn update_execution(
    api: &ApiClient,
    id: Uuid,
    payload: &ExecutionUpdate,
) -> Result<Execution, ApiError> {
    api.patch(&format!("{EXECUTIONS_URL}/{id}"), payload).await
}

pub async fn delete_execution(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("{EXECUTIONS_URL}/{id}")).await
}
