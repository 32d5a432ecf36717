//! Toilet-flush stage.
//!
//! The only stage billed under the tiered tariff: the monthly volume decides
//! the band, and the whole volume is billed at that band's rate.

use crate::domain::StageResult;
use crate::rates::{tiered_cost, TOILET_LITERS_PER_FLUSH};

/// Compute the toilet-flush stage result.
///
/// `daily = flushes * 9`, `monthly = daily * 30`, tiered cost on monthly m³.
pub fn compute(flushes_per_day: u32) -> StageResult {
    let daily_liters = f64::from(flushes_per_day) * TOILET_LITERS_PER_FLUSH;
    let weekly_liters = daily_liters * 7.0;
    let monthly_liters = daily_liters * 30.0;

    StageResult {
        daily_liters,
        weekly_liters,
        monthly_liters,
        cost: tiered_cost(monthly_liters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_example_low_tier() {
        // 5 flushes: 45 L/day, 1350 L/month = 1.35 m³ at 3.50 → 4.725.
        let r = compute(5);
        assert!((r.daily_liters - 45.0).abs() < 1e-12);
        assert!((r.monthly_liters - 1350.0).abs() < 1e-12);
        assert!((r.cost - 4.725).abs() < 1e-9);
    }

    #[test]
    fn matches_reference_example_mid_tier() {
        // 50 flushes: 13500 L/month = 13.5 m³ at 4.50 → 60.75.
        let r = compute(50);
        assert!((r.monthly_liters - 13_500.0).abs() < 1e-12);
        assert!((r.cost - 60.75).abs() < 1e-9);
    }

    #[test]
    fn high_tier_kicks_in_above_20_m3() {
        // 75 flushes: 20250 L/month = 20.25 m³ at 5.00 → 101.25.
        let r = compute(75);
        assert!((r.cost - 101.25).abs() < 1e-9);
    }

    #[test]
    fn zero_flushes_yield_zero_result() {
        assert_eq!(compute(0), StageResult::default());
    }
}
