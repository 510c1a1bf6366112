pub mod annotation;
pub mod execution;
pub mod scale_plan;
pub mod trade;
pub mod trade_idea;

pub use annotation::{Annotation, AnnotationCreate, AnnotationKind};
pub use execution::{Execution, ExecutionCreate, ExecutionSide, ExecutionSource, ExecutionUpdate};
pub use scale_plan::{
    Direction, OrderType, PlanStatus, PlanType, ScalePlan, ScalePlanCreate, ScalePlanUpdate,
};
pub use trade::{Outcome, Trade, TradeCreate, TradeStatus, TradeUpdate};
pub use trade_idea::{TradeIdea, TradeIdeaCreate, TradeIdeaStatus, TradeIdeaUpdate};
