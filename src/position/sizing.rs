//! Scale-out sizing helper: convert "sell N% of the position" into a share
//! count, with broker-dependent rounding.

use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    Nearest,
    Floor,
    Ceil,
    /// Half-to-even, for brokers that settle fractional remainders that way.
    Bankers,
}

#[derive(Debug, Clone, Copy)]
pub struct SizingOptions {
    /// Whether the broker supports fractional shares.
    pub allow_fractional: bool,
    /// Decimal places for fractional shares (4 = 0.0001).
    pub decimals: u32,
    /// Rounding applied when whole shares are required.
    pub rounding: RoundingMode,
}

impl Default for SizingOptions {
    fn default() -> Self {
        Self {
            allow_fractional: false,
            decimals: 4,
            rounding: RoundingMode::Nearest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharesSplit {
    pub shares: Decimal,
    pub remaining: Decimal,
    pub pct_requested: Decimal,
    pub pct_actual: Decimal,
}

/// Split a position by percentage. `percent` accepts either a 0..1 ratio or
/// a whole percent (> 1); the result clamps into `0..=total_shares`.
pub fn shares_from_percent(
    total_shares: Decimal,
    percent: Decimal,
    options: SizingOptions,
) -> SharesSplit {
    let pct = normalize_percent(percent);
    let raw = total_shares * pct;

    let shares = if options.allow_fractional {
        raw.round_dp_with_strategy(options.decimals, RoundingStrategy::MidpointAwayFromZero)
    } else {
        round_whole(raw, options.rounding)
    };
    let shares = shares.max(Decimal::ZERO).min(total_shares);

    let pct_actual = if total_shares.is_zero() {
        Decimal::ZERO
    } else {
        shares / total_shares * Decimal::ONE_HUNDRED
    };

    SharesSplit {
        shares,
        remaining: total_shares - shares,
        pct_requested: pct * Decimal::ONE_HUNDRED,
        pct_actual,
    }
}

/// 0..1 stays a ratio; anything above 1 is treated as a whole percent.
/// Clamped into 0..1 either way.
fn normalize_percent(percent: Decimal) -> Decimal {
    let ratio = if percent > Decimal::ONE {
        percent / Decimal::ONE_HUNDRED
    } else {
        percent
    };
    ratio.max(Decimal::ZERO).min(Decimal::ONE)
}

fn round_whole(value: Decimal, mode: RoundingMode) -> Decimal {
    match mode {
        RoundingMode::Floor => value.floor(),
        RoundingMode::Ceil => value.ceil(),
        RoundingMode::Nearest => {
            value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
        RoundingMode::Bankers => {
            value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_whole_percent_agree() {
        let a = shares_from_percent(Decimal::from(200), Decimal::new(25, 2), SizingOptions::default());
        let b = shares_from_percent(Decimal::from(200), Decimal::from(25), SizingOptions::default());
        assert_eq!(a.shares, Decimal::from(50));
        assert_eq!(a, b);
    }

    #[test]
    fn test_remaining_complements_shares() {
        let split = shares_from_percent(Decimal::from(150), Decimal::from(40), SizingOptions::default());
        assert_eq!(split.shares, Decimal::from(60));
        assert_eq!(split.remaining, Decimal::from(90));
        assert_eq!(split.pct_requested, Decimal::from(40));
        assert_eq!(split.pct_actual, Decimal::from(40));
    }

    #[test]
    fn test_bankers_rounding_is_half_to_even() {
        let options = SizingOptions {
            rounding: RoundingMode::Bankers,
            ..SizingOptions::default()
        };
        // 50% of 101 = 50.5 → 50 (toward even), where Nearest gives 51.
        let bankers = shares_from_percent(Decimal::from(101), Decimal::from(50), options);
        assert_eq!(bankers.shares, Decimal::from(50));
        let nearest = shares_from_percent(Decimal::from(101), Decimal::from(50), SizingOptions::default());
        assert_eq!(nearest.shares, Decimal::from(51));
    }

    #[test]
    fn test_fractional_shares_round_to_decimals() {
        let options = SizingOptions {
            allow_fractional: true,
            decimals: 2,
            ..SizingOptions::default()
        };
        // 1/3 of 100 = 33.333... → 33.33
        let split = shares_from_percent(Decimal::from(100), Decimal::new(3333, 4), options);
        assert_eq!(split.shares, Decimal::new(3333, 2));
    }

    #[test]
    fn test_result_clamps_to_position() {
        let split = shares_from_percent(Decimal::from(10), Decimal::from(500), SizingOptions::default());
        assert_eq!(split.shares, Decimal::from(10));
        assert_eq!(split.remaining, Decimal::ZERO);

        let zero = shares_from_percent(Decimal::ZERO, Decimal::from(50), SizingOptions::default());
        assert_eq!(zero.shares, Decimal::ZERO);
        assert_eq!(zero.pct_actual, Decimal::ZERO);
    }
}
