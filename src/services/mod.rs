pub mod annotations;
pub mod cache;
pub mod executions;
pub mod live_trades;
pub mod notifier;
pub mod scale_plans;
pub mod trade_ideas;
pub mod trades;

pub use annotations::AnnotationService;
pub use cache::{CacheSlot, QueryCache, DEFAULT_STALE_AFTER};
pub use executions::ExecutionService;
pub use live_trades::LiveTradeService;
pub use notifier::{CrudAction, Notification, NotificationKind, Notifier};
pub use scale_plans::ScalePlanService;
pub use trade_ideas::TradeIdeaService;
pub use trades::{TradeInvalidation, TradeService};
