//! Kitchen stage: dish washes plus open-faucet time.
//!
//! The source data for this stage is weekly: washes and faucet use are
//! projected to a week first, then to a month as ~4 weeks.

use crate::domain::StageResult;
use crate::rates::{flat_cost, KITCHEN_LITERS_PER_FAUCET_MINUTE, KITCHEN_LITERS_PER_WASH};

/// Compute the kitchen stage result.
///
/// `weekly = (washes * 10 + faucet_minutes * 0.08) * 7`, `monthly = weekly * 4`,
/// cost under the flat tariff.
pub fn compute(washes_per_day: u32, faucet_minutes_per_use: u32) -> StageResult {
    let daily_liters = f64::from(washes_per_day) * KITCHEN_LITERS_PER_WASH
        + f64::from(faucet_minutes_per_use) * KITCHEN_LITERS_PER_FAUCET_MINUTE;
    let weekly_liters = daily_liters * 7.0;
    let monthly_liters = weekly_liters * 4.0;

    StageResult {
        daily_liters,
        weekly_liters,
        monthly_liters,
        cost: flat_cost(monthly_liters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_example() {
        // 3 washes, 5 faucet minutes: weekly = (30 + 0.4) * 7 = 212.8 L.
        let r = compute(3, 5);
        assert!((r.weekly_liters - 212.8).abs() < 1e-9);
        assert!((r.monthly_liters - 851.2).abs() < 1e-9);
        assert!((r.cost - 5.1072).abs() < 1e-9);
        assert!((r.daily_liters - 30.4).abs() < 1e-9);
    }

    #[test]
    fn zero_inputs_yield_zero_result() {
        let r = compute(0, 0);
        assert_eq!(r, StageResult::default());
    }

    #[test]
    fn faucet_only_contribution() {
        let r = compute(0, 100);
        assert!((r.weekly_liters - 8.0 * 7.0).abs() < 1e-9);
    }
}
