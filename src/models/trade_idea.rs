use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeIdeaStatus {
    Watching,
    InProgress,
    Invalidated,
    Live,
    Closed,
}

impl fmt::Display for TradeIdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeIdeaStatus::Watching => write!(f, "watching"),
            TradeIdeaStatus::InProgress => write!(f, "in_progress"),
            TradeIdeaStatus::Invalidated => write!(f, "invalidated"),
            TradeIdeaStatus::Live => write!(f, "live"),
            TradeIdeaStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A pre-trade watchlist candidate. Promoted into a live trade upon
/// execution; immutable after conversion except for status transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIdea {
    pub id: Uuid,
    pub symbol: String,
    pub setup: String,
    pub rating: f64,
    pub entry_min: Decimal,
    #[serde(default)]
    pub entry_max: Option<Decimal>,
    #[serde(default)]
    pub stop: Option<Decimal>,
    /// Target prices in scale-out order.
    #[serde(default)]
    pub target_prices: Vec<Decimal>,
    #[serde(default)]
    pub rr_ratio: Option<Decimal>,
    #[serde(default)]
    pub catalysts: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: TradeIdeaStatus,
    pub idea_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIdeaCreate {
    pub symbol: String,
    pub setup: String,
    pub rating: f64,
    pub entry_min: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_max: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Decimal>,
    #[serde(default)]
    pub target_prices: Vec<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rr_ratio: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalysts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIdeaUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_min: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_max: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_prices: Option<Vec<Decimal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rr_ratio: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalysts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TradeIdeaStatus>,
}
