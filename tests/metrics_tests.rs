mod common;

use rust_decimal::Decimal;

use common::{base_trade, dec, fill, plan};
use tradelog::models::{PlanStatus, PlanType};
use tradelog::position::TradeMetrics;

/// Entry filled at (10 × 50) and (12 × 50), one target fill at 15 × 50 with
/// a $1 commission, current price 14:
/// entry avg 11, realized (15−11)·50 − 1 = 199, unrealized (14−11)·50 = 150.
#[test]
fn test_end_to_end_position_example() {
    let mut trade = base_trade("AAPL");
    trade.current_price = Some(dec(14));

    let mut entry = plan(&trade, PlanType::Entry, PlanStatus::Filled, 100);
    entry.executions = vec![fill(&entry, dec(10), 50, 0), fill(&entry, dec(12), 50, 0)];

    let mut target = plan(&trade, PlanType::Target, PlanStatus::Filled, 50);
    target.target_price = Some(dec(15));
    target.executions = vec![fill(&target, dec(15), 50, 1)];

    trade.scale_plans = vec![entry, target];

    let metrics = TradeMetrics::compute(&trade);
    assert_eq!(metrics.entry_price_avg, dec(11));
    assert_eq!(metrics.entry_qty, dec(100));
    assert_eq!(metrics.sold_shares, dec(50));
    assert_eq!(metrics.realized_pnl, dec(199));
    assert_eq!(metrics.remaining_shares, dec(50));
    assert_eq!(metrics.unrealized_pnl, dec(150));
    assert_eq!(metrics.total_pnl, dec(349));
    assert_eq!(metrics.total_pnl, metrics.realized_pnl + metrics.unrealized_pnl);
}

#[test]
fn test_planned_entry_uses_limit_price_and_planned_qty() {
    let mut trade = base_trade("TSLA");
    trade.current_price = Some(dec(210));

    let mut entry = plan(&trade, PlanType::Entry, PlanStatus::Planned, 40);
    entry.limit_price = Some(dec(200));
    entry.stop_price = Some(dec(190));
    trade.scale_plans = vec![entry];

    let metrics = TradeMetrics::compute(&trade);
    assert_eq!(metrics.entry_price_avg, dec(200));
    assert_eq!(metrics.entry_qty, dec(40));
    assert_eq!(metrics.stop_loss, dec(190));
    assert_eq!(metrics.unrealized_pnl, dec(400)); // (210 − 200) · 40
}

#[test]
fn test_no_entry_plan_defaults_to_zero_with_stop_fallback() {
    let mut trade = base_trade("NVDA");
    trade.current_price = Some(dec(500));

    let mut stop = plan(&trade, PlanType::StopLoss, PlanStatus::Planned, 100);
    stop.stop_price = Some(dec(480));
    trade.scale_plans = vec![stop];

    let metrics = TradeMetrics::compute(&trade);
    assert_eq!(metrics.entry_price_avg, Decimal::ZERO);
    assert_eq!(metrics.entry_qty, Decimal::ZERO);
    assert_eq!(metrics.stop_loss, dec(480));
    assert_eq!(metrics.total_pnl, Decimal::ZERO);
    assert_eq!(metrics.total_pct, Decimal::ZERO);
}

#[test]
fn test_zero_target_fills_realize_exactly_zero() {
    let mut trade = base_trade("AMD");
    trade.current_price = Some(dec(120));

    let mut entry = plan(&trade, PlanType::Entry, PlanStatus::Filled, 100);
    entry.executions = vec![fill(&entry, dec(100), 100, 0)];
    let mut target = plan(&trade, PlanType::Target, PlanStatus::Planned, 50);
    target.target_price = Some(dec(140));
    trade.scale_plans = vec![entry, target];

    let metrics = TradeMetrics::compute(&trade);
    assert_eq!(metrics.sold_shares, Decimal::ZERO);
    assert_eq!(metrics.realized_pnl, Decimal::ZERO);
    assert_eq!(metrics.realized_pct, Decimal::ZERO);
}

#[test]
fn test_remaining_shares_never_negative() {
    let mut trade = base_trade("META");
    trade.current_price = Some(dec(300));

    let mut entry = plan(&trade, PlanType::Entry, PlanStatus::Filled, 100);
    entry.executions = vec![fill(&entry, dec(250), 100, 0)];
    // Oversold: target fills exceed the entry quantity.
    let mut target = plan(&trade, PlanType::Target, PlanStatus::Filled, 120);
    target.target_price = Some(dec(280));
    target.executions = vec![fill(&target, dec(280), 120, 0)];
    trade.scale_plans = vec![entry, target];

    let metrics = TradeMetrics::compute(&trade);
    assert_eq!(metrics.remaining_shares, Decimal::ZERO);
    assert_eq!(metrics.unrealized_pnl, Decimal::ZERO);
    assert_eq!(metrics.unrealized_pct, Decimal::ZERO);
}

#[test]
fn test_unrealized_zero_when_fully_scaled_out_regardless_of_price() {
    let mut trade = base_trade("NFLX");
    trade.current_price = Some(dec(9_999));

    let mut entry = plan(&trade, PlanType::Entry, PlanStatus::Filled, 50);
    entry.executions = vec![fill(&entry, dec(400), 50, 0)];
    let mut target = plan(&trade, PlanType::Target, PlanStatus::Filled, 50);
    target.target_price = Some(dec(450));
    target.executions = vec![fill(&target, dec(450), 50, 0)];
    trade.scale_plans = vec![entry, target];

    let metrics = TradeMetrics::compute(&trade);
    assert_eq!(metrics.unrealized_pnl, Decimal::ZERO);
    assert_eq!(metrics.total_pnl, metrics.realized_pnl);
}

#[test]
fn test_percentages_match_entry_value_basis() {
    let mut trade = base_trade("MSFT");
    trade.current_price = Some(dec(110));

    let mut entry = plan(&trade, PlanType::Entry, PlanStatus::Filled, 100);
    entry.executions = vec![fill(&entry, dec(100), 100, 0)];
    let mut target = plan(&trade, PlanType::Target, PlanStatus::Filled, 50);
    target.target_price = Some(dec(120));
    target.executions = vec![fill(&target, dec(120), 50, 0)];
    trade.scale_plans = vec![entry, target];

    let metrics = TradeMetrics::compute(&trade);
    // Realized: (120−100)·50 = 1000 over a 100·50 basis → 20%.
    assert_eq!(metrics.realized_pct, dec(20));
    // Unrealized: (110−100)·50 = 500 over a 100·50 basis → 10%.
    assert_eq!(metrics.unrealized_pct, dec(10));
    // Total: 1500 over a 100·100 basis → 15%.
    assert_eq!(metrics.total_pct, dec(15));
}

/// Fills on non-target plans never count as scaled-out shares.
#[test]
fn test_stop_loss_fills_are_not_sold_shares() {
    let mut trade = base_trade("INTC");
    trade.current_price = Some(dec(30));

    let mut entry = plan(&trade, PlanType::Entry, PlanStatus::Filled, 100);
    entry.executions = vec![fill(&entry, dec(35), 100, 0)];
    let mut stop = plan(&trade, PlanType::StopLoss, PlanStatus::Triggered, 100);
    stop.stop_price = Some(dec(32));
    stop.executions = vec![fill(&stop, dec(32), 100, 0)];
    trade.scale_plans = vec![entry, stop];

    let metrics = TradeMetrics::compute(&trade);
    assert_eq!(metrics.sold_shares, Decimal::ZERO);
    assert_eq!(metrics.remaining_shares, dec(100));
}
