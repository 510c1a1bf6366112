use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use tradelog::models::{
    Direction, Execution, ExecutionSide, ExecutionSource, OrderType, PlanStatus, PlanType,
    ScalePlan, Trade, TradeStatus,
};

#[allow(dead_code)]
pub fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

/// An open trade with no plans attached yet.
#[allow(dead_code)]
pub fn base_trade(symbol: &str) -> Trade {
    Trade {
        id: Uuid::new_v4(),
        symbol: symbol.into(),
        setup: "breakout".into(),
        rating: 5.0,
        status: TradeStatus::Open,
        outcome: None,
        idea_date: Utc::now(),
        enter_date: None,
        exit_date: None,
        current_price: None,
        price_change: None,
        percent_change: None,
        scale_plans: Vec::new(),
        annotations: Vec::new(),
    }
}

/// A scale plan belonging to `trade`, long by default.
#[allow(dead_code)]
pub fn plan(trade: &Trade, plan_type: PlanType, status: PlanStatus, qty: i64) -> ScalePlan {
    ScalePlan {
        id: Uuid::new_v4(),
        trade_id: trade.id,
        label: format!("{plan_type} leg"),
        plan_type,
        order_type: OrderType::Limit,
        status,
        direction: Direction::Long,
        qty: dec(qty),
        target_price: None,
        limit_price: None,
        stop_price: None,
        notes: None,
        good_till: None,
        executions: Vec::new(),
    }
}

/// A fill against `plan`. Buy side for entry plans, sell otherwise.
#[allow(dead_code)]
pub fn fill(plan: &ScalePlan, price: Decimal, qty: i64, commission: i64) -> Execution {
    Execution {
        id: Uuid::new_v4(),
        trade_id: plan.trade_id,
        scale_plan_id: plan.id,
        price,
        qty: dec(qty),
        commission: (commission != 0).then(|| dec(commission)),
        side: if plan.plan_type == PlanType::Entry {
            ExecutionSide::Buy
        } else {
            ExecutionSide::Sell
        },
        source: ExecutionSource::Manual,
        notes: None,
        executed_at: Utc::now(),
    }
}
