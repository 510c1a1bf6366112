use std::sync::Arc;

use uuid::Uuid;

use crate::api::{self, ApiClient};
use crate::errors::ApiError;
use crate::models::{ScalePlan, ScalePlanCreate, ScalePlanUpdate};
use crate::services::cache::QueryCache;
use crate::services::notifier::{CrudAction, Notifier};
use crate::validation::Validate;

const DOMAIN: &str = "scale plan";

/// Mutations for scale plans. Plans render inside the trade views, so every
/// mutation invalidates the trade lists rather than a plan-scoped cache.
#[derive(Clone)]
pub struct ScalePlanService {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Notifier,
}

impl ScalePlanService {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Notifier) -> Self {
        Self { api, cache, notifier }
    }

    pub async fn create(
        &self,
        live_trade_id: Uuid,
        payload: &ScalePlanCreate,
    ) -> Result<ScalePlan, ApiError> {
        if let Err(issues) = payload.validate() {
            let err = ApiError::Validation(issues);
            self.notifier.mutation_error(CrudAction::Create, DOMAIN, &err);
            return Err(err);
        }

        match api::scale_plans::create_scale_plan(&self.api, live_trade_id, payload).await {
            Ok(plan) => {
                self.invalidate_trades().await;
                self.notifier.mutation_success(CrudAction::Create, DOMAIN, None);
                Ok(plan)
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Create, DOMAIN, &err);
                Err(err)
            }
        }
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &ScalePlanUpdate,
    ) -> Result<ScalePlan, ApiError> {
        match api::scale_plans::update_scale_plan(&self.api, id, payload).await {
            Ok(plan) => {
                self.invalidate_trades().await;
                self.notifier.mutation_success(CrudAction::Update, DOMAIN, None);
                Ok(plan)
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Update, DOMAIN, &err);
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        match api::scale_plans::delete_scale_plan(&self.api, id).await {
            Ok(()) => {
                self.invalidate_trades().await;
                self.notifier.mutation_success(CrudAction::Delete, DOMAIN, None);
                Ok(())
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Delete, DOMAIN, &err);
                Err(err)
            }
        }
    }

    async fn invalidate_trades(&self) {
        self.cache.trades.invalidate().await;
        self.cache.live_trades.invalidate().await;
    }
}
