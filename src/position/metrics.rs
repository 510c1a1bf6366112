//! Display-ready position and P&L figures derived from a trade's scale
//! plans and executions. Everything here is a pure function of the input:
//! nothing is cached, so callers recompute whenever the underlying trade
//! data changes.

use rust_decimal::Decimal;

use crate::models::{Direction, Execution, PlanStatus, PlanType, Trade};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeMetrics {
    /// Execution-quantity-weighted average entry price, or the planned
    /// limit price while the entry is still working.
    pub entry_price_avg: Decimal,
    /// Initial position size from the entry plan.
    pub entry_qty: Decimal,
    pub stop_loss: Decimal,
    pub direction: Direction,
    /// Shares scaled out through target-plan fills.
    pub sold_shares: Decimal,
    pub remaining_shares: Decimal,
    pub realized_pnl: Decimal,
    pub realized_pct: Decimal,
    pub unrealized_pnl: Decimal,
    pub unrealized_pct: Decimal,
    pub total_pnl: Decimal,
    pub total_pct: Decimal,
}

struct EntryView {
    entry_price_avg: Decimal,
    qty: Decimal,
    stop_loss: Decimal,
    direction: Direction,
}

impl TradeMetrics {
    pub fn compute(trade: &Trade) -> Self {
        let entry = resolve_entry_plan(trade);
        let fills = target_executions(trade);

        let sold_shares: Decimal = fills.iter().map(|e| e.qty).sum();
        let commissions: Decimal = fills.iter().map(|e| e.commission.unwrap_or_default()).sum();
        let gross: Decimal = fills
            .iter()
            .map(|e| (e.price - entry.entry_price_avg) * e.qty)
            .sum();
        let realized_pnl = gross - commissions;

        let realized_pct = if realized_pnl.is_zero() || sold_shares.is_zero() {
            Decimal::ZERO
        } else {
            pct_of(realized_pnl, entry.entry_price_avg * sold_shares)
        };

        let remaining_shares = (entry.qty - sold_shares).max(Decimal::ZERO);

        let current_price = trade.current_price.unwrap_or_default();
        let (unrealized_pnl, unrealized_pct) = if remaining_shares.is_zero() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            let pnl = (current_price - entry.entry_price_avg) * remaining_shares;
            (pnl, pct_of(pnl, entry.entry_price_avg * remaining_shares))
        };

        let total_pnl = realized_pnl + unrealized_pnl;
        let total_pct = if entry.qty.is_zero() {
            Decimal::ZERO
        } else {
            pct_of(total_pnl, entry.entry_price_avg * entry.qty)
        };

        Self {
            entry_price_avg: entry.entry_price_avg,
            entry_qty: entry.qty,
            stop_loss: entry.stop_loss,
            direction: entry.direction,
            sold_shares,
            remaining_shares,
            realized_pnl,
            realized_pct,
            unrealized_pnl,
            unrealized_pct,
            total_pnl,
            total_pct,
        }
    }
}

/// `value / basis * 100`, defined as zero when the basis is zero.
fn pct_of(value: Decimal, basis: Decimal) -> Decimal {
    if basis.is_zero() {
        Decimal::ZERO
    } else {
        value / basis * Decimal::ONE_HUNDRED
    }
}

/// Fills belonging to TARGET-type plans, flattened in plan order. Only
/// target fills count as scaled-out shares.
pub fn target_executions(trade: &Trade) -> Vec<&Execution> {
    trade
        .scale_plans
        .iter()
        .filter(|plan| plan.plan_type == PlanType::Target)
        .flat_map(|plan| plan.executions.iter())
        .collect()
}

/// Execution-quantity-weighted average price: `Σ(price·qty)/Σqty`, zero
/// when nothing has filled.
pub fn weighted_avg_price(fills: &[Execution]) -> Decimal {
    let total_qty: Decimal = fills.iter().map(|e| e.qty).sum();
    if total_qty.is_zero() {
        return Decimal::ZERO;
    }
    let total_value: Decimal = fills.iter().map(|e| e.price * e.qty).sum();
    total_value / total_qty
}

fn resolve_entry_plan(trade: &Trade) -> EntryView {
    let plan = trade.scale_plans.iter().find(|plan| {
        plan.plan_type == PlanType::Entry
            && matches!(plan.status, PlanStatus::Filled | PlanStatus::Planned)
    });

    // A live stop-loss plan overrides the entry plan's own stop price.
    let default_stop = trade
        .scale_plans
        .iter()
        .find(|plan| plan.plan_type == PlanType::StopLoss && plan.status != PlanStatus::Cancelled)
        .and_then(|plan| plan.stop_price)
        .unwrap_or_default();

    let direction = plan.map(|plan| plan.direction).unwrap_or(Direction::Long);

    match plan {
        // Planned entry: no fills yet, so the limit price and planned
        // quantity stand in for the realized figures.
        Some(plan) if plan.status == PlanStatus::Planned => EntryView {
            entry_price_avg: plan.limit_price.unwrap_or_default(),
            qty: plan.qty,
            stop_loss: plan.stop_price.unwrap_or_default(),
            direction,
        },
        Some(plan) if !plan.executions.is_empty() => {
            let qty: Decimal = plan.executions.iter().map(|e| e.qty).sum();
            let stop_loss = if default_stop.is_zero() {
                plan.stop_price.unwrap_or_default()
            } else {
                default_stop
            };
            EntryView {
                entry_price_avg: weighted_avg_price(&plan.executions),
                qty,
                stop_loss,
                direction,
            }
        }
        _ => EntryView {
            entry_price_avg: Decimal::ZERO,
            qty: Decimal::ZERO,
            stop_loss: default_stop,
            direction,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
