//! Per-fixture estimation stages.
//!
//! Each stage is a pure function of user-supplied counts/durations plus the
//! fixed constants in [`crate::rates`]. Stages do not share mutable state;
//! the surrounding host threads their outputs forward through the
//! [`crate::domain::PipelineState`] accumulator.
//!
//! Recomputation follows a function-with-fallback pattern: raw text fields
//! are validated by the guard, and on any parse failure the previous result
//! is returned unchanged (per stage: Idle → Validating → Computed, with
//! Validating → Idle on failure).

pub mod guard;
pub mod kitchen;
pub mod shower;
pub mod sink;
pub mod toilet;

use crate::domain::{Fixture, StageResult};

/// Recompute one stage from its raw text fields.
///
/// `fields` must be in the stage's `field_labels` order. If every field
/// parses as a non-negative integer, the stage's calculator runs and its
/// fresh result is returned; otherwise `prev` is returned unchanged. This
/// silent-ignore policy is deliberate — no error is surfaced to the caller.
pub fn recompute(fixture: Fixture, fields: &[String], prev: StageResult) -> StageResult {
    let Some(counts) = guard::parse_fields(fields, fixture.field_labels().len()) else {
        return prev;
    };

    match fixture {
        Fixture::Kitchen => kitchen::compute(counts[0], counts[1]),
        Fixture::ToiletFlush => toilet::compute(counts[0]),
        Fixture::Shower => shower::compute(counts[0], counts[1]),
        Fixture::BathroomSink => sink::compute(counts[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn valid_input_updates_result() {
        let prev = StageResult::default();
        let result = recompute(Fixture::ToiletFlush, &fields(&["5"]), prev);
        assert!((result.daily_liters - 45.0).abs() < 1e-12);
        assert_ne!(result, prev);
    }

    #[test]
    fn invalid_input_keeps_previous_result() {
        let prev = recompute(Fixture::Kitchen, &fields(&["3", "5"]), StageResult::default());

        // A non-numeric edit must leave the last computed result untouched.
        let kept = recompute(Fixture::Kitchen, &fields(&["abc", "5"]), prev);
        assert_eq!(kept, prev);

        // Same for an emptied field.
        let kept = recompute(Fixture::Kitchen, &fields(&["3", ""]), prev);
        assert_eq!(kept, prev);
    }

    #[test]
    fn recompute_is_idempotent() {
        let first = recompute(Fixture::Shower, &fields(&["2", "8"]), StageResult::default());
        let second = recompute(Fixture::Shower, &fields(&["2", "8"]), first);
        // Bit-identical: same valid inputs always yield the same result.
        assert_eq!(first, second);
    }

    #[test]
    fn wrong_field_count_is_treated_as_invalid() {
        let prev = StageResult::default();
        let kept = recompute(Fixture::Kitchen, &fields(&["3"]), prev);
        assert_eq!(kept, prev);
    }
}
