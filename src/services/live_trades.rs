//! Service over the legacy `/live-trades` alias. Mirrors the trade service
//! but reads through its own cache slot and offers the filtered views the
//! dashboard renders from.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::{self, ApiClient};
use crate::errors::ApiError;
use crate::models::{Trade, TradeCreate, TradeStatus, TradeUpdate};
use crate::services::cache::QueryCache;
use crate::services::notifier::{CrudAction, Notifier};
use crate::validation::Validate;

const DOMAIN: &str = "live trade";

#[derive(Clone)]
pub struct LiveTradeService {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Notifier,
}

impl LiveTradeService {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Notifier) -> Self {
        Self { api, cache, notifier }
    }

    pub async fn list(&self) -> Result<Vec<Trade>, ApiError> {
        if let Some(trades) = self.cache.live_trades.fresh().await {
            return Ok(trades);
        }
        self.refetch().await
    }

    pub async fn refetch(&self) -> Result<Vec<Trade>, ApiError> {
        let trades = api::live_trades::get_live_trades(&self.api).await?;
        self.cache.live_trades.store(trades.clone()).await;
        Ok(trades)
    }

    /// Trades with a working position.
    pub async fn open_trades(&self) -> Result<Vec<Trade>, ApiError> {
        let trades = self.list().await?;
        Ok(trades
            .into_iter()
            .filter(|trade| trade.status == TradeStatus::Open)
            .collect())
    }

    /// Trades still being watched for an entry.
    pub async fn watchlist(&self) -> Result<Vec<Trade>, ApiError> {
        let trades = self.list().await?;
        Ok(trades
            .into_iter()
            .filter(|trade| trade.status == TradeStatus::Watching)
            .collect())
    }

    pub async fn create(&self, payload: &TradeCreate) -> Result<Trade, ApiError> {
        if let Err(issues) = payload.validate() {
            let err = ApiError::Validation(issues);
            self.notifier.mutation_error(CrudAction::Create, DOMAIN, &err);
            return Err(err);
        }

        match api::live_trades::create_live_trade(&self.api, payload).await {
            Ok(trade) => {
                self.invalidate_lists().await;
                self.notifier.mutation_success(CrudAction::Create, DOMAIN, None);
                Ok(trade)
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
        payload: &TradeUpdate,
        message: Option<String>,
    ) -> Result<Trade, ApiError> {
        match api::live_trades::update_live_trade(&self.api, id, payload).await {
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
        match api::live_trades::delete_live_trade(&self.api, id).await {
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

    /// A live-trade mutation stales the originating trade-idea list too —
    /// promotions flip the idea's status server-side.
    async fn invalidate_lists(&self) {
        self.cache.live_trades.invalidate().await;
        self.cache.trades.invalidate().await;
        self.cache.trade_ideas.invalidate().await;
    }
}
