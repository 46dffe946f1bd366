use metric_assert::{
    MetricKey, MetricName, MetricResult, MetricUpdate, assert_that, check, metric_result,
    metric_update, metric_update_at,
};

fn main() {
    let update = MetricUpdate::new(
        MetricKey::new(MetricName::new("demo", "elements"), "read-step"),
        5i64,
    );

    // Coarse check: name and value only.
    assert_that(&update, &metric_update("elements", 5i64));
    // Precise check: the full key pins namespace and step too.
    assert_that(&update, &metric_update_at("demo", "elements", "read-step", 5i64));
    println!("both update matchers accepted the reported delta");

    let result = MetricResult::new(MetricName::new("demo", "elements"), "read-step", 10i64, 15i64);
    match check(
        &result,
        &metric_result("demo", "elements", "read-step", 10i64, 12i64),
    ) {
        Ok(()) => println!("unexpectedly matched"),
        // The breakdown names just the attempted field
        Err(err) => println!("result matcher rejected the record:{err}"),
    }
}
