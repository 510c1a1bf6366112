//! Cached reads and notifying mutations for journaled trades. Mutations
//! invalidate the trade list, its legacy alias, and the trade-idea list
//! (promotions change both sides), then surface a notification. Nothing
//! retries automatically; the user resubmits.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::{self, ApiClient};
use crate::errors::ApiError;
use crate::models::{Trade, TradeCreate, TradeStatus, TradeUpdate};
use crate::services::cache::QueryCache;
use crate::services::notifier::{CrudAction, Notifier};
use crate::validation::Validate;

const DOMAIN: &str = "trade";

#[derive(Clone)]
pub struct TradeService {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Notifier,
}

impl TradeService {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Notifier) -> Self {
        Self { api, cache, notifier }
    }

    /// Cached trade list; hits the network only when the cache is stale.
    pub async fn list(&self) -> Result<Vec<Trade>, ApiError> {
        if let Some(trades) = self.cache.trades.fresh().await {
            return Ok(trades);
        }
        self.refetch().await
    }

    /// Force a network read and repopulate the cache (refetch-on-focus).
    pub async fn refetch(&self) -> Result<Vec<Trade>, ApiError> {
        let trades = api::trades::get_trades(&self.api).await?;
        self.cache.trades.store(trades.clone()).await;
        Ok(trades)
    }

    pub async fn get(&self, id: Uuid) -> Result<Trade, ApiError> {
        api::trades::get_trade(&self.api, id).await
    }

    pub async fn create(&self, payload: &TradeCreate) -> Result<Trade, ApiError> {
        if let Err(issues) = payload.validate() {
            let err = ApiError::Validation(issues);
            self.notifier.mutation_error(CrudAction::Create, DOMAIN, &err);
            return Err(err);
        }

        match api::trades::create_trade(&self.api, payload).await {
            Ok(trade) => {
                self.invalidate_lists().await;
                self.notifier.mutation_success(CrudAction::Create, DOMAIN, None);
                tracing::info!(trade_id = %trade.id, symbol = %trade.symbol, "Trade created");
                Ok(trade)
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Create, DOMAIN, &err);
                Err(err)
            }
        }
    }

    /// Full replace of a trade and its scale plans, re-validated like a
    /// create.
    pub async fn replace(&self, id: Uuid, payload: &TradeCreate) -> Result<Trade, ApiError> {
        if let Err(issues) = payload.validate() {
            let err = ApiError::Validation(issues);
            self.notifier.mutation_error(CrudAction::Update, DOMAIN, &err);
            return Err(err);
        }

        match api::trades::replace_trade(&self.api, id, payload).await {
            Ok(trade) => {
                self.invalidate_lists().await;
                self.notifier.mutation_success(CrudAction::Update, DOMAIN, None);
                Ok(trade)
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Update, DOMAIN, &err);
                Err(err)
            }
        }
    }

    /// Partial update. `message` overrides the default success wording for
    /// flows like closing or restoring a trade.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &TradeUpdate,
        message: Option<String>,
    ) -> Result<Trade, ApiError> {
        match api::trades::update_trade(&self.api, id, payload).await {
            Ok(trade) => {
                self.invalidate_lists().await;
                self.notifier.mutation_success(CrudAction::Update, DOMAIN, message);
                Ok(trade)
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Update, DOMAIN, &err);
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        match api::trades::delete_trade(&self.api, id).await {
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

    /// Mark a trade invalidated, returning an undo handle that can restore
    /// the status it had before.
    pub async fn invalidate(&self, id: Uuid) -> Result<TradeInvalidation, ApiError> {
        let previous_status = self.find_status(id).await?;

        match api::trades::invalidate_trade(&self.api, id).await {
            Ok(_) => {
                self.invalidate_lists().await;
                self.notifier
                    .mutation_success(CrudAction::Update, DOMAIN, Some("Trade invalidated".into()));
                Ok(TradeInvalidation {
                    service: self.clone(),
                    trade_id: id,
                    previous_status,
                })
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Update, DOMAIN, &err);
                Err(err)
            }
        }
    }

    /// Status lookup for the undo handle: cheap cache scan first, GET as
    /// the fallback.
    async fn find_status(&self, id: Uuid) -> Result<TradeStatus, ApiError> {
        if let Some(trades) = self.cache.trades.fresh().await {
            if let Some(trade) = trades.iter().find(|t| t.id == id) {
                return Ok(trade.status);
            }
        }
        Ok(self.get(id).await?.status)
    }

    async fn invalidate_lists(&self) {
        self.cache.trades.invalidate().await;
        self.cache.live_trades.invalidate().await;
        self.cache.trade_ideas.invalidate().await;
    }
}

/// Undo handle for the reversible invalidate action.
pub struct TradeInvalidation {
    service: TradeService,
    trade_id: Uuid,
    previous_status: TradeStatus,
}

impl TradeInvalidation {
    pub fn trade_id(&self) -> Uuid {
        self.trade_id
    }

    pub fn previous_status(&self) -> TradeStatus {
        self.previous_status
    }

    /// Re-issue a compensating update restoring the captured status.
    pub async fn undo(self) -> Result<Trade, ApiError> {
        let payload = TradeUpdate {
            status: Some(self.previous_status),
            ..TradeUpdate::default()
        };
        self.service
            .update(self.trade_id, &payload, Some("Trade restored".into()))
            .await
    }
}
