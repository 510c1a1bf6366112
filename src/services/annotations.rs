use std::sync::Arc;

use crate::api::{self, ApiClient};
use crate::errors::ApiError;
use crate::models::{Annotation, AnnotationCreate};
use crate::services::cache::QueryCache;
use crate::services::notifier::{CrudAction, Notifier};
use crate::validation::Validate;

const DOMAIN: &str = "annotation";

/// Append-only notes and catalysts. Annotations render inside the trade
/// views, so creating one stales the trade lists.
#[derive(Clone)]
pub struct AnnotationService {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Notifier,
}

impl AnnotationService {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Notifier) -> Self {
        Self { api, cache, notifier }
    }

    pub async fn create(&self, payload: &AnnotationCreate) -> Result<Annotation, ApiError> {
        if let Err(issues) = payload.validate() {
            let err = ApiError::Validation(issues);
            self.notifier.mutation_error(CrudAction::Create, DOMAIN, &err);
            return Err(err);
        }

        match api::annotations::create_annotation(&self.api, payload).await {
            Ok(annotation) => {
                self.cache.trades.invalidate().await;
                self.cache.live_trades.invalidate().await;
                self.notifier.mutation_success(CrudAction::Create, DOMAIN, None);
                Ok(annotation)
            }
            Err(err) => {
                self.notifier.mutation_error(CrudAction::Create, DOMAIN, &err);
                Err(err)
            }
        }
    }
}
