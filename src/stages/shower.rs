//! Shower stage.

use crate::domain::StageResult;
use crate::rates::{flat_cost, SHOWER_LITERS_PER_MINUTE};

/// Compute the shower stage result.
///
/// `daily = showers * minutes * 6`, `monthly = daily * 30`, flat tariff.
pub fn compute(showers_per_day: u32, minutes_per_shower: u32) -> StageResult {
    let daily_liters =
        f64::from(showers_per_day) * f64::from(minutes_per_shower) * SHOWER_LITERS_PER_MINUTE;
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
    fn one_ten_minute_shower_per_day() {
        let r = compute(1, 10);
        assert!((r.daily_liters - 60.0).abs() < 1e-12);
        assert!((r.monthly_liters - 1800.0).abs() < 1e-12);
        // 1.8 m³ at 6.00 → 10.80.
        assert!((r.cost - 10.8).abs() < 1e-9);
    }

    #[test]
    fn zero_either_input_yields_zero() {
        assert_eq!(compute(0, 10), StageResult::default());
        assert_eq!(compute(2, 0), StageResult::default());
    }
}
