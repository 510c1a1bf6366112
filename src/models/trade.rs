use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::annotation::Annotation;
use super::scale_plan::{ScalePlan, ScalePlanCreate};

// ---------------------------------------------------------------------------
// Status / outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Watching,
    Closed,
    Invalidated,
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeStatus::Open => write!(f, "open"),
            TradeStatus::Watching => write!(f, "watching"),
            TradeStatus::Closed => write!(f, "closed"),
            TradeStatus::Invalidated => write!(f, "invalidated"),
        }
    }
}

/// Realized outcome classification, assigned by the backend once a trade
/// closes. `Pending` while the position is still working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    BigWin,
    Win,
    Scratch,
    Loss,
    BigLoss,
    Pending,
}

// ---------------------------------------------------------------------------
// Trade
// ---------------------------------------------------------------------------

/// A journaled trade as returned by the backend, with its scale plans and
/// annotations embedded. The trade exclusively owns both collections;
/// deleting the trade cascades server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: Uuid,
    pub symbol: String,
    pub setup: String,
    pub rating: f64,
    pub status: TradeStatus,
    #[serde(default)]
    pub outcome: Option<Outcome>,
    pub idea_date: DateTime<Utc>,
    #[serde(default)]
    pub enter_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exit_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub price_change: Option<Decimal>,
    #[serde(default)]
    pub percent_change: Option<Decimal>,
    #[serde(default)]
    pub scale_plans: Vec<ScalePlan>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// Creation payload. Scale plans are submitted inline; the backend assigns
/// ids and the initial status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeCreate {
    pub symbol: String,
    pub setup: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_date: Option<DateTime<Utc>>,
    pub scale_plans: Vec<ScalePlanCreate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TradeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
}
