//! Local validation of create payloads, run before anything reaches the
//! network. Issues carry the wire-level (camelCase) field path so local and
//! server-side failures address fields identically.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::models::{
    AnnotationCreate, Direction, ExecutionCreate, PlanType, ScalePlanCreate, TradeCreate,
    TradeIdeaCreate,
};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Structural validation of a payload. Implementations collect every issue
/// they find rather than stopping at the first, unless an early failure
/// invalidates the checks that follow.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldIssue>>;
}

fn finish(issues: Vec<FieldIssue>) -> Result<(), Vec<FieldIssue>> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

// ---------------------------------------------------------------------------
// Trade submission
// ---------------------------------------------------------------------------

impl Validate for TradeCreate {
    fn validate(&self) -> Result<(), Vec<FieldIssue>> {
        let mut issues = Vec::new();

        if self.symbol.trim().is_empty() {
            issues.push(FieldIssue::new("symbol", "Symbol is required"));
        }
        if self.setup.trim().is_empty() {
            issues.push(FieldIssue::new("setup", "Setup is required"));
        }
        if self.rating < 1.0 {
            issues.push(FieldIssue::new("rating", "Rating is required"));
        }

        // The entry-plan count gates every price comparison below: with no
        // entry plan (or an ambiguous one) there is nothing to compare
        // targets and stops against, so this check aborts on failure.
        let entries: Vec<(usize, &ScalePlanCreate)> = self
            .scale_plans
            .iter()
            .enumerate()
            .filter(|(_, plan)| plan.plan_type == PlanType::Entry)
            .collect();

        match entries.len() {
            0 => {
                issues.push(FieldIssue::new("scalePlans", "one entry plan is required"));
                return Err(issues);
            }
            1 => {}
            _ => {
                issues.push(FieldIssue::new("scalePlans", "only one entry plan is allowed"));
                return Err(issues);
            }
        }

        let (entry_idx, entry) = entries[0];
        check_entry_prices(entry_idx, entry, &mut issues);
        check_target_plans(entry, &self.scale_plans, &mut issues);

        finish(issues)
    }
}

/// Long entries buy below the stop trigger, so the limit must sit above the
/// stop; short entries invert.
fn check_entry_prices(idx: usize, entry: &ScalePlanCreate, issues: &mut Vec<FieldIssue>) {
    let (Some(limit), Some(stop)) = (entry.limit_price, entry.stop_price) else {
        return;
    };
    let ok = match entry.direction {
        Direction::Long => limit > stop,
        Direction::Short => limit < stop,
    };
    if !ok {
        let message = match entry.direction {
            Direction::Long => "Limit price must exceed stop price for a long entry",
            Direction::Short => "Limit price must be below stop price for a short entry",
        };
        issues.push(FieldIssue::new(format!("scalePlans[{idx}].limitPrice"), message));
    }
}

fn check_target_plans(
    entry: &ScalePlanCreate,
    plans: &[ScalePlanCreate],
    issues: &mut Vec<FieldIssue>,
) {
    let cap = entry.qty;
    let mut planned_total = Decimal::ZERO;

    for (idx, plan) in plans.iter().enumerate() {
        if plan.plan_type != PlanType::Target {
            continue;
        }

        planned_total += plan.qty;
        if planned_total > cap {
            issues.push(FieldIssue::new(
                format!("scalePlans[{idx}].qty"),
                format!("Total target quantity ({planned_total}) exceeds entry quantity ({cap})"),
            ));
        }

        match plan.target_price {
            None => {
                issues.push(FieldIssue::new(
                    format!("scalePlans[{idx}].targetPrice"),
                    "Target price is required",
                ));
            }
            Some(target) => {
                // Validation runs at submission time, before any fills
                // exist, so targets compare against the planned entry limit.
                if let Some(entry_limit) = entry.limit_price {
                    let ok = match entry.direction {
                        Direction::Long => target > entry_limit,
                        Direction::Short => target < entry_limit,
                    };
                    if !ok {
                        let message = match entry.direction {
                            Direction::Long => {
                                format!("Target price must exceed entry price ({entry_limit})")
                            }
                            Direction::Short => {
                                format!("Target price must be below entry price ({entry_limit})")
                            }
                        };
                        issues.push(FieldIssue::new(
                            format!("scalePlans[{idx}].targetPrice"),
                            message,
                        ));
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Other entities
// ---------------------------------------------------------------------------

impl Validate for ScalePlanCreate {
    fn validate(&self) -> Result<(), Vec<FieldIssue>> {
        let mut issues = Vec::new();
        if self.label.trim().is_empty() {
            issues.push(FieldIssue::new("label", "Label is required"));
        }
        if self.qty < Decimal::ONE {
            issues.push(FieldIssue::new("qty", "Qty is required"));
        }
        if self.plan_type == PlanType::Target && self.target_price.is_none() {
            issues.push(FieldIssue::new("targetPrice", "Target price is required"));
        }
        finish(issues)
    }
}

impl Validate for ExecutionCreate {
    fn validate(&self) -> Result<(), Vec<FieldIssue>> {
        let mut issues = Vec::new();
        if self.price <= Decimal::ZERO {
            issues.push(FieldIssue::new("price", "Price is required"));
        }
        if self.qty < Decimal::ONE {
            issues.push(FieldIssue::new("qty", "Quantity is required"));
        }
        finish(issues)
    }
}

impl Validate for TradeIdeaCreate {
    fn validate(&self) -> Result<(), Vec<FieldIssue>> {
        let mut issues = Vec::new();
        if self.symbol.trim().is_empty() {
            issues.push(FieldIssue::new("symbol", "Symbol is required"));
        }
        if self.setup.trim().is_empty() {
            issues.push(FieldIssue::new("setup", "Setup is required"));
        }
        if self.rating < 1.0 {
            issues.push(FieldIssue::new("rating", "Rating is required"));
        }
        if self.entry_min <= Decimal::ZERO {
            issues.push(FieldIssue::new("entryMin", "Entry min is required"));
        }
        finish(issues)
    }
}

impl Validate for AnnotationCreate {
    fn validate(&self) -> Result<(), Vec<FieldIssue>> {
        let mut issues = Vec::new();
        if self.content.trim().is_empty() {
            issues.push(FieldIssue::new("content", "Content is required"));
        }
        finish(issues)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderType;

    fn plan(plan_type: PlanType, qty: i64) -> ScalePlanCreate {
        ScalePlanCreate {
            label: "leg".into(),
            plan_type,
            order_type: OrderType::Limit,
            direction: Direction::Long,
            qty: Decimal::from(qty),
            target_price: None,
            limit_price: None,
            stop_price: None,
            notes: None,
            good_till: None,
        }
    }

    fn trade(plans: Vec<ScalePlanCreate>) -> TradeCreate {
        TradeCreate {
            symbol: "AAPL".into(),
            setup: "breakout".into(),
            rating: 5.0,
            enter_date: None,
            scale_plans: plans,
        }
    }

    #[test]
    fn test_missing_entry_plan_rejected() {
        let issues = trade(vec![plan(PlanType::Target, 50)]).validate().unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "scalePlans");
        assert_eq!(issues[0].message, "one entry plan is required");
    }

    #[test]
    fn test_duplicate_entry_plan_rejected() {
        let issues = trade(vec![plan(PlanType::Entry, 100), plan(PlanType::Entry, 50)])
            .validate()
            .unwrap_err();
        assert_eq!(issues[0].message, "only one entry plan is allowed");
    }

    #[test]
    fn test_entry_count_failure_short_circuits_price_checks() {
        // Two entries AND an over-limit target: only the count issue is
        // reported because downstream comparisons are meaningless.
        let mut target = plan(PlanType::Target, 500);
        target.target_price = Some(Decimal::from(90));
        let issues = trade(vec![plan(PlanType::Entry, 100), plan(PlanType::Entry, 50), target])
            .validate()
            .unwrap_err();
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_long_entry_limit_below_stop_rejected() {
        let mut entry = plan(PlanType::Entry, 100);
        entry.limit_price = Some(Decimal::from(100));
        entry.stop_price = Some(Decimal::from(105));
        let issues = trade(vec![entry]).validate().unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "scalePlans[0].limitPrice");
        assert!(issues[0].message.contains("must exceed stop price"));
    }

    #[test]
    fn test_short_entry_limit_above_stop_rejected() {
        let mut entry = plan(PlanType::Entry, 100);
        entry.direction = Direction::Short;
        entry.limit_price = Some(Decimal::from(105));
        entry.stop_price = Some(Decimal::from(100));
        let issues = trade(vec![entry]).validate().unwrap_err();
        assert_eq!(issues[0].path, "scalePlans[0].limitPrice");
        assert!(issues[0].message.contains("must be below stop price"));
    }

    #[test]
    fn test_target_qty_over_entry_cap() {
        let mut entry = plan(PlanType::Entry, 100);
        entry.limit_price = Some(Decimal::from(10));
        let mut targets: Vec<ScalePlanCreate> = (0..3)
            .map(|_| {
                let mut t = plan(PlanType::Target, 40);
                t.target_price = Some(Decimal::from(20));
                t
            })
            .collect();
        let mut plans = vec![entry];
        plans.append(&mut targets);

        let issues = trade(plans).validate().unwrap_err();
        // 40 + 40 + 40 = 120 against a cap of 100: the third plan tips over.
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "scalePlans[3].qty");
        assert!(issues[0].message.contains("120"));
        assert!(issues[0].message.contains("100"));
    }

    #[test]
    fn test_target_below_long_entry_rejected() {
        let mut entry = plan(PlanType::Entry, 100);
        entry.limit_price = Some(Decimal::from(50));
        let mut target = plan(PlanType::Target, 50);
        target.target_price = Some(Decimal::from(45));
        let issues = trade(vec![entry, target]).validate().unwrap_err();
        assert_eq!(issues[0].path, "scalePlans[1].targetPrice");
        assert!(issues[0].message.contains("must exceed entry price (50)"));
    }

    #[test]
    fn test_target_above_short_entry_rejected() {
        let mut entry = plan(PlanType::Entry, 100);
        entry.direction = Direction::Short;
        entry.limit_price = Some(Decimal::from(50));
        let mut target = plan(PlanType::Target, 50);
        target.target_price = Some(Decimal::from(55));
        let issues = trade(vec![entry, target]).validate().unwrap_err();
        assert!(issues[0].message.contains("must be below entry price"));
    }

    #[test]
    fn test_issues_accumulate_after_entry_gate() {
        // Missing target price AND over-limit qty on the same submission:
        // both issues surface in one pass.
        let mut entry = plan(PlanType::Entry, 100);
        entry.limit_price = Some(Decimal::from(10));
        let missing_price = plan(PlanType::Target, 150);
        let issues = trade(vec![entry, missing_price]).validate().unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert!(paths.contains(&"scalePlans[1].qty"));
        assert!(paths.contains(&"scalePlans[1].targetPrice"));
    }

    #[test]
    fn test_valid_submission_passes() {
        let mut entry = plan(PlanType::Entry, 100);
        entry.limit_price = Some(Decimal::from(50));
        entry.stop_price = Some(Decimal::from(45));
        let mut t1 = plan(PlanType::Target, 60);
        t1.target_price = Some(Decimal::from(60));
        let mut t2 = plan(PlanType::Target, 40);
        t2.target_price = Some(Decimal::from(70));
        assert!(trade(vec![entry, t1, t2]).validate().is_ok());
    }

    #[test]
    fn test_execution_create_requires_positive_price_and_qty() {
        let payload = ExecutionCreate {
            live_trade_id: uuid::Uuid::new_v4(),
            scale_plan_id: uuid::Uuid::new_v4(),
            price: Decimal::ZERO,
            qty: Decimal::ZERO,
            commission: None,
            side: None,
            source: None,
            notes: None,
        };
        let issues = payload.validate().unwrap_err();
        assert_eq!(issues.len(), 2);
    }
}
