use std::sync::Arc;

use uuid::Uuid;

use crate::api::{self, ApiClient};
use crate::errors::ApiError;
use crate::models::{TradeIdea, TradeIdeaCreate, TradeIdeaStatus, TradeIdeaUpdate};
use crate::services::cache::QueryCache;
use crate::services::notifier::{CrudAction, Notifier};
use crate::validation::Validate;

const DOMAIN: &str = "trade idea";

#[derive(Clone)]
pub struct TradeIdeaService {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Notifier,
}

impl TradeIdeaService {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Notifier) -> Self {
        Self { api, cache, notifier }
    }

    pub async fn list(&self) -> Result<Vec<TradeIdea>, ApiError> {
        if let Some(ideas) = self.cache.trade_ideas.fresh().await {
            return Ok(ideas);
        }
        self.refetch().await
    }

    pub async fn refetch(&self) -> Result<Vec<TradeIdea>, ApiError> {
        let ideas = api::trade_ideas::get_trade_ideas(&self.api).await?;
        self.cache.trade_ideas.store(ideas.clone()).await;
        Ok(ideas)
    }

    /// Ideas still on the watchlist, the default board view.
    pub async fn watching(&self) -> Result<Vec<TradeIdea>, ApiError> {
        let ideas = self.list().await?;
        Ok(ideas
            .into_iter()
            .filter(|idea| idea.status == TradeIdeaStatus::Watching)
            .collect())
    }

    pub async fn create(&self, payload: &TradeIdeaCreate) -> Result<TradeIdea, ApiError> {
        if let Err(issues) = payload.validate() {
            let err = ApiError::Validation(issues);
            self.notifier.mutation_error(CrudAction::Create, DOMAIN, &err);
            return Err(err);
        }

        match api::trade_ideas::create_trade_idea(&self.api, payload).await {
            Ok(idea) => {
                self.cache.trade_ideas.invalidate().await;
                self.notifier.mutation_success(CrudAction::Create, DOMAIN, None);
                Ok(idea)
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
        payload: &TradeIdeaUpdate,
    ) -> Result<TradeIdea, ApiError> {
        match api::trade_ideas::update_trade_idea(&self.api, id, payload).await {
            Ok(idea) => {
                self.cache.trade_ideas.invalidate().await;
                self.notifier.mutation_success(CrudAction::Update, DOMAIN, None);
                Ok(idea)
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Update, DOMAIN, &err);
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        match api::trade_ideas::delete_trade_idea(&self.api, id).await {
            Ok(()) => {
                self.cache.trade_ideas.invalidate().await;
                self.notifier.mutation_success(CrudAction::Delete, DOMAIN, None);
                Ok(())
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Delete, DOMAIN, &err);
                Err(err)
            }
        }
    }
}
