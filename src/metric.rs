use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Values carried by metric updates and results.
///
/// Counters use plain integers, distributions use structured records;
/// anything with value equality and a `Debug` rendering qualifies.
/// Equality is exact and delegated to the type itself. Absent values
/// are modeled as `Option<T>`, so two absent values compare equal and
/// absent vs present compares unequal.
pub trait MetricValue
where
    Self: PartialEq + Send + Sync + Debug + Clone,
{
}

impl<T> MetricValue for T where T: PartialEq + Send + Sync + Debug + Clone {}

/// The (namespace, name) pair a metric is declared under.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct MetricName {
    namespace: String,
    name: String,
}

impl MetricName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Identifies where and under what name a metric was recorded: the
/// metric's declared name plus the step that reported it.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct MetricKey {
    metric_name: MetricName,
    step_name: String,
}

impl MetricKey {
    pub fn new(metric_name: MetricName, step_name: impl Into<String>) -> Self {
        Self {
            metric_name,
            step_name: step_name.into(),
        }
    }

    pub fn metric_name(&self) -> &MetricName {
        &self.metric_name
    }

    pub fn step_name(&self) -> &str {
        &self.step_name
    }
}

/// A single delta reported by one execution attempt.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct MetricUpdate<T> {
    key: MetricKey,
    update: T,
}

impl<T: MetricValue> MetricUpdate<T> {
    pub fn new(key: MetricKey, update: T) -> Self {
        Self { key, update }
    }

    pub fn key(&self) -> &MetricKey {
        &self.key
    }

    pub fn update(&self) -> &T {
        &self.update
    }
}

/// The resolved outcome of a metric after all updates are merged.
///
/// `committed` reflects only updates from successful execution
/// attempts; `attempted` reflects all attempts, retries included.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct MetricResult<T> {
    name: MetricName,
    step: String,
    committed: T,
    attempted: T,
}

impl<T: MetricValue> MetricResult<T> {
    pub fn new(name: MetricName, step: impl Into<String>, committed: T, attempted: T) -> Self {
        Self {
            name,
            step: step.into(),
            committed,
            attempted,
        }
    }

    pub fn name(&self) -> &MetricName {
        &self.name
    }

    pub fn step(&self) -> &str {
        &self.step
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn attempted(&self) -> &T {
        &self.attempted
    }
}

#[cfg(feature = "builtins")]
pub use builtins::*;

#[cfg(feature = "builtins")]
mod builtins {
    use super::*;

    /// Resolved statistics of a distribution metric.
    ///
    /// The built-in structured value type: where a counter is a bare
    /// integer, a distribution carries the whole `{sum, count, min, max}`
    /// record. Enabled via the `builtins` feature.
    #[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
    pub struct DistributionData {
        pub sum: i64,
        pub count: i64,
        pub min: i64,
        pub max: i64,
    }

    impl DistributionData {
        pub fn new(sum: i64, count: i64, min: i64, max: i64) -> Self {
            Self {
                sum,
                count,
                min,
                max,
            }
        }
    }
}
