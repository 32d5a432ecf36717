//! Fixed rate tables: unit volumes and water tariffs per fixture.
//!
//! Every constant used by a stage formula lives here so the calculators stay
//! free of magic numbers. Tables are compile-time constants: defined once,
//! never mutated.
//!
//! Tariffs follow the SABESP residential schedule used by the estimator:
//! a flat 6.00 R$/m³ for general consumption, and a tiered schedule for
//! toilet flushing with brackets at 10 and 20 m³/month.

/// Liters per dish wash (kitchen).
pub const KITCHEN_LITERS_PER_WASH: f64 = 10.0;

/// Liters per minute of open kitchen faucet.
pub const KITCHEN_LITERS_PER_FAUCET_MINUTE: f64 = 0.08;

/// Liters per toilet flush.
pub const TOILET_LITERS_PER_FLUSH: f64 = 9.0;

/// Liters per minute of shower.
pub const SHOWER_LITERS_PER_MINUTE: f64 = 6.0;

/// Liters per bathroom sink use.
pub const SINK_LITERS_PER_USE: f64 = 3.0;

/// Flat tariff in R$ per m³ (kitchen, shower, sink).
pub const FLAT_TARIFF_PER_M3: f64 = 6.00;

/// Tiered tariff rates in R$ per m³ (toilet flushing).
pub const TIER_LOW_RATE: f64 = 3.50;
pub const TIER_MID_RATE: f64 = 4.50;
pub const TIER_HIGH_RATE: f64 = 5.00;

/// Upper bounds (inclusive) of the low and mid tiers, in m³ per month.
pub const TIER_LOW_MAX_M3: f64 = 10.0;
pub const TIER_MID_MAX_M3: f64 = 20.0;

/// Cost under the flat tariff for a monthly consumption given in liters.
pub fn flat_cost(monthly_liters: f64) -> f64 {
    (monthly_liters / 1000.0) * FLAT_TARIFF_PER_M3
}

/// Cost under the tiered tariff for a monthly consumption given in liters.
///
/// The whole volume is billed at the rate of the band it lands in (the
/// schedule is not marginal). Band boundaries are inclusive on the lower
/// tier: exactly 10 m³ bills at 3.50, exactly 20 m³ at 4.50.
pub fn tiered_cost(monthly_liters: f64) -> f64 {
    let m3 = monthly_liters / 1000.0;
    if m3 <= TIER_LOW_MAX_M3 {
        m3 * TIER_LOW_RATE
    } else if m3 <= TIER_MID_MAX_M3 {
        m3 * TIER_MID_RATE
    } else {
        m3 * TIER_HIGH_RATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_cost_converts_liters_to_m3() {
        assert!((flat_cost(1000.0) - 6.00).abs() < 1e-12);
        assert!((flat_cost(851.2) - 5.1072).abs() < 1e-9);
        assert_eq!(flat_cost(0.0), 0.0);
    }

    #[test]
    fn tiered_cost_boundaries_use_lower_tier() {
        // Exactly 10 m³ bills at 3.50, not 4.50.
        assert!((tiered_cost(10_000.0) - 35.0).abs() < 1e-12);
        // Just above 10 m³ crosses into the mid tier.
        assert!((tiered_cost(10_000.1) - 10.0001 * 4.50).abs() < 1e-9);
        // Exactly 20 m³ bills at 4.50, not 5.00.
        assert!((tiered_cost(20_000.0) - 90.0).abs() < 1e-12);
        // Just above 20 m³ crosses into the high tier.
        assert!((tiered_cost(20_000.1) - 20.0001 * 5.00).abs() < 1e-9);
    }

    #[test]
    fn tiered_cost_mid_band() {
        // 13.5 m³ lands in the mid band: 13.5 * 4.50 = 60.75.
        assert!((tiered_cost(13_500.0) - 60.75).abs() < 1e-12);
    }
}
