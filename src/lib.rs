//! Metric-assert — structural test matchers for metric updates and results.
//!
//! A small library for asserting that a metric record observed in a test
//! equals an expected one on a chosen subset of fields, with failure
//! messages that point directly at the fields that differ instead of
//! dumping whole records.
//!
//! # Architecture
//!
//! The main building blocks are:
//!
//! - [`MetricUpdate`] / [`MetricResult`]: the record types under test —
//!   a delta reported during execution, and the resolved
//!   committed/attempted pair reported after it.
//! - [`Matcher`]: a pure predicate paired with human-readable rendering.
//!   The three constructors in [`matchers`] each capture a set of
//!   expected field values and return a matcher bound to one record
//!   shape.
//! - [`Description`]: the sink matchers render into.
//! - [`check`] / [`assert_that`]: the assertion entry points. `check`
//!   returns the failure as a [`MatchError`]; `assert_that` panics with
//!   the rendered message.
//!
//! # Design goals
//!
//! - Exact, conjunctive equality: any single field mismatch fails the
//!   whole match, and absent values compare null-safely via `Option`.
//! - Selective mismatch reporting: the result matcher re-checks each
//!   field and renders only the ones that differ.
//! - Stateless matchers: immutable captured values, no I/O, safe to
//!   evaluate from independent test threads without coordination.
//!
//! # Example
//!
//! ```rust
//! use metric_assert::{
//!     MetricKey, MetricName, MetricResult, MetricUpdate, assert_that, check, metric_result,
//!     metric_update,
//! };
//!
//! let update = MetricUpdate::new(
//!     MetricKey::new(MetricName::new("my-namespace", "elements"), "read-step"),
//!     5i64,
//! );
//! assert_that(&update, &metric_update("elements", 5i64));
//!
//! let result = MetricResult::new(
//!     MetricName::new("my-namespace", "elements"),
//!     "read-step",
//!     10i64,
//!     15i64,
//! );
//! let err = check(
//!     &result,
//!     &metric_result("my-namespace", "elements", "read-step", 10i64, 12i64),
//! )
//! .unwrap_err();
//! assert_eq!(err.mismatch, "MetricResult{attempted: 12 != 15}");
//! ```
//!
//! # Feature flags
//!
//! - `builtins`: built-in structured value types ([`DistributionData`]).
//!   (Enabled by default)
//!
//! # Where to start
//!
//! - Read the docs for [`Matcher`] and the constructors in [`matchers`].
//! - See `demos/assertions.rs` for a runnable walkthrough.

/// Assertion entry points
pub mod assert;
/// The matcher contract and its description sink
pub mod matcher;
/// Matcher constructors
pub mod matchers;
/// The metric records matchers consume
pub mod metric;

pub use assert::{MatchError, assert_that, check};
pub use matcher::{Description, Matcher};
pub use matchers::{metric_result, metric_update, metric_update_at};
#[cfg(feature = "builtins")]
pub use metric::DistributionData;
pub use metric::{MetricKey, MetricName, MetricResult, MetricUpdate, MetricValue};
