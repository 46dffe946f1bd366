//! Matcher constructors for metric updates and results.
//!
//! Each constructor captures the expected field values and returns a
//! fresh, immutable matcher bound to one record shape:
//!
//! - [`metric_update`]: an update by metric name and value only.
//! - [`metric_update_at`]: an update by full key (namespace, name,
//!   step) and value.
//! - [`metric_result`]: a result by full key plus both the committed
//!   and the attempted value.
//!
//! All comparisons are exact value equality and conjunctive: any
//! single field mismatch fails the whole match. The result matcher
//! additionally renders a field-level mismatch breakdown listing only
//! the fields that differ, as `label: expected != actual`, so a
//! failure points at the discrepant field instead of dumping the whole
//! record. That matters when the value is a large structured record
//! rather than a bare counter.

use std::fmt::Debug;

use crate::matcher::{Description, Matcher};
use crate::metric::{MetricResult, MetricUpdate, MetricValue};

/// Matcher over a [`MetricUpdate`] comparing the metric name and the
/// reported value, ignoring namespace and step.
///
/// Good for coarse identity checks; use [`metric_update_at`] when
/// same-named metrics across steps or namespaces must be told apart.
pub fn metric_update<T: MetricValue>(
    name: impl Into<String>,
    update: T,
) -> impl Matcher<MetricUpdate<T>> {
    UpdateByName {
        name: name.into(),
        update,
    }
}

/// Matcher over a [`MetricUpdate`] comparing the full key (namespace,
/// name, step) and the reported value.
pub fn metric_update_at<T: MetricValue>(
    namespace: impl Into<String>,
    name: impl Into<String>,
    step: impl Into<String>,
    update: T,
) -> impl Matcher<MetricUpdate<T>> {
    UpdateByKey {
        namespace: namespace.into(),
        name: name.into(),
        step: step.into(),
        update,
    }
}

/// Matcher over a [`MetricResult`] comparing the full key plus both
/// the committed and the attempted value.
///
/// On mismatch it renders only the differing fields, expected value
/// first: `MetricResult{attempted: 12 != 15}`.
pub fn metric_result<T: MetricValue>(
    namespace: impl Into<String>,
    name: impl Into<String>,
    step: impl Into<String>,
    committed: T,
    attempted: T,
) -> impl Matcher<MetricResult<T>> {
    ResultByKey {
        namespace: namespace.into(),
        name: name.into(),
        step: step.into(),
        committed,
        attempted,
    }
}

struct UpdateByName<T> {
    name: String,
    update: T,
}

impl<T: MetricValue> Matcher<MetricUpdate<T>> for UpdateByName<T> {
    fn matches(&self, actual: &MetricUpdate<T>) -> bool {
        self.name == actual.key().metric_name().name() && self.update == *actual.update()
    }

    fn describe(&self, out: &mut Description) {
        out.text("MetricUpdate{name=")
            .value(&self.name)
            .text(", update=")
            .value(&self.update)
            .text("}");
    }
}

struct UpdateByKey<T> {
    namespace: String,
    name: String,
    step: String,
    update: T,
}

impl<T: MetricValue> Matcher<MetricUpdate<T>> for UpdateByKey<T> {
    fn matches(&self, actual: &MetricUpdate<T>) -> bool {
        self.namespace == actual.key().metric_name().namespace()
            && self.name == actual.key().metric_name().name()
            && self.step == actual.key().step_name()
            && self.update == *actual.update()
    }

    fn describe(&self, out: &mut Description) {
        out.text("MetricUpdate{inNamespace=")
            .value(&self.namespace)
            .text(", name=")
            .value(&self.name)
            .text(", step=")
            .value(&self.step)
            .text(", update=")
            .value(&self.update)
            .text("}");
    }
}

struct ResultByKey<T> {
    namespace: String,
    name: String,
    step: String,
    committed: T,
    attempted: T,
}

impl<T: MetricValue> Matcher<MetricResult<T>> for ResultByKey<T> {
    fn matches(&self, actual: &MetricResult<T>) -> bool {
        self.namespace == actual.name().namespace()
            && self.name == actual.name().name()
            && self.step == actual.step()
            && self.committed == *actual.committed()
            && self.attempted == *actual.attempted()
    }

    fn describe(&self, out: &mut Description) {
        out.text("MetricResult{inNamespace=")
            .value(&self.namespace)
            .text(", name=")
            .value(&self.name)
            .text(", step=")
            .value(&self.step)
            .text(", committed=")
            .value(&self.committed)
            .text(", attempted=")
            .value(&self.attempted)
            .text("}");
    }

    fn describe_mismatch(&self, actual: &MetricResult<T>, out: &mut Description) -> bool {
        let mut first = true;
        out.text("MetricResult{");
        if self.namespace != actual.name().namespace() {
            diff_field(
                out,
                &mut first,
                "inNamespace",
                &self.namespace,
                &actual.name().namespace(),
            );
        }
        if self.name != actual.name().name() {
            diff_field(out, &mut first, "name", &self.name, &actual.name().name());
        }
        if self.step != actual.step() {
            diff_field(out, &mut first, "step", &self.step, &actual.step());
        }
        if self.committed != *actual.committed() {
            diff_field(out, &mut first, "committed", &self.committed, actual.committed());
        }
        if self.attempted != *actual.attempted() {
            diff_field(out, &mut first, "attempted", &self.attempted, actual.attempted());
        }
        out.text("}");
        true
    }
}

/// Emit one `label: expected != actual` entry, comma-separating it
/// from any entry already written.
fn diff_field(
    out: &mut Description,
    first: &mut bool,
    label: &str,
    expected: &impl Debug,
    actual: &impl Debug,
) {
    if !*first {
        out.text(", ");
    }
    *first = false;
    out.text(label)
        .text(": ")
        .value(expected)
        .text(" != ")
        .value(actual);
}
