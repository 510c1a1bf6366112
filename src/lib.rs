pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod position;
pub mod services;
pub mod validation;

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::services::cache::QueryCache;
use crate::services::notifier::Notifier;
use crate::services::{
    AnnotationService, ExecutionService, LiveTradeService, ScalePlanService, TradeIdeaService,
    TradeService,
};

/// Shared dependencies of the data layer, built once and passed explicitly
/// to every service — no ambient lookup.
#[derive(Clone)]
pub struct JournalContext {
    pub config: AppConfig,
    pub api: Arc<ApiClient>,
    pub cache: Arc<QueryCache>,
    pub notifier: Notifier,
}

impl JournalContext {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let api = Arc::new(ApiClient::new(&config)?);
        let cache = Arc::new(QueryCache::new(config.stale_after()));
        Ok(Self {
            config,
            api,
            cache,
            notifier: Notifier::new(),
        })
    }

    pub fn trades(&self) -> TradeService {
        TradeService::new(self.api.clone(), self.cache.clone(), self.notifier.clone())
    }

    pub fn trade_ideas(&self) -> TradeIdeaService {
        TradeIdeaService::new(self.api.clone(), self.cache.clone(), self.notifier.clone())
    }

    pub fn live_trades(&self) -> LiveTradeService {
        LiveTradeService::new(self.api.clone(), self.cache.clone(), self.notifier.clone())
    }

    pub fn scale_plans(&self) -> ScalePlanService {
        ScalePlanService::new(self.api.clone(), self.cache.clone(), self.notifier.clone())
    }

    pub fn executions(&self) -> ExecutionService {
        ExecutionService::new(self.api.clone(), self.cache.clone(), self.notifier.clone())
    }

    pub fn annotations(&self) -> AnnotationService {
        AnnotationService::new(self.api.clone(), self.cache.clone(), self.notifier.clone())
    }
}
