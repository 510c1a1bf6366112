use std::sync::Arc;

use uuid::Uuid;

use crate::api::{self, ApiClient};
use crate::errors::ApiError;
use crate::models::{Execution, ExecutionCreate, ExecutionUpdate};
use crate::services::cache::QueryCache;
use crate::services::notifier::{CrudAction, Notifier};
use crate::validation::Validate;

const DOMAIN: &str = "execution";
const EXECUTE_DOMAIN: &str = "trade execution";

#[derive(Clone)]
pub struct ExecutionService {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Notifier,
}

impl ExecutionService {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Notifier) -> Self {
        Self { api, cache, notifier }
    }

    /// Cached unscoped fill list.
    pub async fn list(&self) -> Result<Vec<Execution>, ApiError> {
        if let Some(executions) = self.cache.executions.fresh().await {
            return Ok(executions);
        }
        self.refetch().await
    }

    pub async fn refetch(&self) -> Result<Vec<Execution>, ApiError> {
        let executions = api::executions::get_executions(&self.api, None).await?;
        self.cache.executions.store(executions.clone()).await;
        Ok(executions)
    }

    /// Fills for one trade. Scoped reads bypass the unscoped cache slot.
    pub async fn list_for_trade(&self, trade_id: Uuid) -> Result<Vec<Execution>, ApiError> {
        api::executions::get_executions(&self.api, Some(trade_id)).await
    }

    /// Record a fill against a plan. The backend settles plan status, so
    /// the trade lists go stale too.
    pub async fn execute_plan(&self, payload: &ExecutionCreate) -> Result<Execution, ApiError> {
        if let Err(issues) = payload.validate() {
            let err = ApiError::Validation(issues);
            self.notifier
                .mutation_error(CrudAction::Create, EXECUTE_DOMAIN, &err);
            return Err(err);
        }

        match api::executions::execute_plan(&self.api, payload).await {
            Ok(execution) => {
                self.invalidate_lists().await;
                self.notifier.mutation_success(
                    CrudAction::Create,
                    EXECUTE_DOMAIN,
                    Some("Executed plan successfully".into()),
                );
                Ok(execution)
            }
            Err(err) => {
                self.notifier
                    .mutation_error(CrudAction::Create, EXECUTE_DOMAIN, &err);
                Err(err)
            }
        }
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &ExecutionUpdate,
    ) -> Result<Execution, ApiError> {
        match api::executions::update_execution(&self.api, id, payload).await {
            Ok(execution) => {
                self.invalidate_lists().await;
                self.notifier.mutation_success(CrudAction::Update, DOMAIN, None);
                Ok(execution)
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Update, DOMAIN, &err);
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        match api::executions::delete_execution(&self.api, id).await {
            Ok(()) => {
                self.invalidate_lists().await;
                self.notifier.mutation_success(CrudAction::Delete, DOMAIN, None);
                Ok(())
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Delete, DOMAIN, &err);
                Err(err)
            }
        }
    }

    async fn invalidate_lists(&self) {
        self.cache.executions.invalidate().await;
        self.cache.trades.invalidate().await;
        self.cache.live_trades.invalidate().await;
    }
}
