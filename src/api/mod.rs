pub mod annotations;
pub mod client;
pub mod executions;
pub mod live_trades;
pub mod scale_plans;
pub mod trade_ideas;
pub mod trades;

pub use client::ApiClient;
