use std::fmt::Debug;

use thiserror::Error;

use crate::matcher::{Description, Matcher};

/// A matcher rejected a value.
///
/// `expected` holds the matcher's rendering of the expected shape and
/// `mismatch` the field-level breakdown when the matcher provides one,
/// otherwise the actual value's own `Debug` rendering.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
#[error("\nExpected: {expected}\n     but: {mismatch}")]
pub struct MatchError {
    pub expected: String,
    pub mismatch: String,
}

/// Evaluate `matcher` against `actual` without panicking.
///
/// Calls `matches` first; only on failure are descriptions rendered.
/// Matchers without a mismatch breakdown fall back to the actual
/// value's `Debug` rendering, prefixed with `was `.
pub fn check<V: Debug>(actual: &V, matcher: &impl Matcher<V>) -> Result<(), MatchError> {
    if matcher.matches(actual) {
        return Ok(());
    }

    let mut expected = Description::new();
    matcher.describe(&mut expected);

    let mut mismatch = Description::new();
    if !matcher.describe_mismatch(actual, &mut mismatch) {
        mismatch.text("was ").value(actual);
    }

    let err = MatchError {
        expected: expected.into_string(),
        mismatch: mismatch.into_string(),
    };
    tracing::debug!(expected = %err.expected, mismatch = %err.mismatch, "matcher rejected value");
    Err(err)
}

/// Assert that `matcher` accepts `actual`.
///
/// # Panics
///
/// Panics with the rendered expected/but failure message when the
/// matcher rejects the value.
pub fn assert_that<V: Debug>(actual: &V, matcher: &impl Matcher<V>) {
    if let Err(err) = check(actual, matcher) {
        panic!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{metric_result, metric_update};
    use crate::metric::{MetricKey, MetricName, MetricResult, MetricUpdate};

    fn sample_update(value: i64) -> MetricUpdate<i64> {
        MetricUpdate::new(
            MetricKey::new(MetricName::new("ns", "elements"), "step1"),
            value,
        )
    }

    fn sample_result(committed: i64, attempted: i64) -> MetricResult<i64> {
        MetricResult::new(
            MetricName::new("ns", "elements"),
            "step1",
            committed,
            attempted,
        )
    }

    #[test]
    fn check_passes_on_match() {
        assert_eq!(
            check(&sample_update(5), &metric_update("elements", 5i64)),
            Ok(())
        );
    }

    #[test]
    fn check_reports_field_breakdown_for_results() {
        let err = check(
            &sample_result(10, 15),
            &metric_result("ns", "elements", "step1", 10i64, 12i64),
        )
        .unwrap_err();
        assert_eq!(
            err.expected,
            "MetricResult{inNamespace=\"ns\", name=\"elements\", step=\"step1\", \
             committed=10, attempted=12}"
        );
        assert_eq!(err.mismatch, "MetricResult{attempted: 12 != 15}");
    }

    #[test]
    fn check_falls_back_to_debug_rendering() {
        let err = check(&sample_update(6), &metric_update("elements", 5i64)).unwrap_err();
        assert_eq!(err.expected, "MetricUpdate{name=\"elements\", update=5}");
        assert!(err.mismatch.starts_with("was MetricUpdate"), "{}", err.mismatch);
    }

    #[test]
    fn assert_that_passes_on_match() {
        assert_that(
            &sample_result(10, 12),
            &metric_result("ns", "elements", "step1", 10i64, 12i64),
        );
    }

    #[test]
    #[should_panic(expected = "MetricResult{attempted: 12 != 15}")]
    fn assert_that_panics_with_breakdown() {
        assert_that(
            &sample_result(10, 15),
            &metric_result("ns", "elements", "step1", 10i64, 12i64),
        );
    }
}
