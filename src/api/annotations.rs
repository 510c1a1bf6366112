use super::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{Annotation, AnnotationCreate};

const ANNOTATIONS_URL: &str = "/annotations";

pub async fn create_annotation(
    api: &ApiClient,
    payload: &AnnotationCreate,
) -> Result<Annotation, ApiError> {
    api.post(ANNOTATIONS_URL, payload).await
}
