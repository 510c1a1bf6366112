use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Note,
    Catalyst,
}

/// A dated note or catalyst entry attached to a trade. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: Uuid,
    pub trade_id: Uuid,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationCreate {
    pub trade_id: Uuid,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
}
