pub mod metrics;
pub mod sizing;

pub use metrics::{target_executions, weighted_avg_price, TradeMetrics};
pub use sizing::{shares_from_percent, RoundingMode, SharesSplit, SizingOptions};
