//! Bathroom-sink stage.

use crate::domain::StageResult;
use crate::rates::{flat_cost, SINK_LITERS_PER_USE};

/// Compute the bathroom-sink stage result.
///
/// `daily = uses * 3`, `monthly = daily * 30`, flat tariff.
pub fn compute(uses_per_day: u32) -> StageResult {
    let daily_liters = f64::from(uses_per_day) * SINK_LITERS_PER_USE;
    let weekly_liters = daily_liters * 7.0;
    let monthly_liters = daily_liters * 30.0;

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
    fn ten_uses_per_day() {
        let r = compute(10);
        assert!((r.daily_liters - 30.0).abs() < 1e-12);
        assert!((r.monthly_liters - 900.0).abs() < 1e-12);
        // 0.9 m³ at 6.00 → 5.40.
        assert!((r.cost - 5.4).abs() < 1e-9);
    }

    #[test]
    fn zero_uses_yield_zero_result() {
        assert_eq!(compute(0), StageResult::default());
    }
}
