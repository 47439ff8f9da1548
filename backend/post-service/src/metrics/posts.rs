use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, register_int_gauge, IntCounterVec, IntGauge};

lazy_static! {
    /// Post operations segmented by operation (list/create/get/update/delete) and outcome.
    pub static ref POST_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "posts_operations_total",
        "Total post operations segmented by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("failed to register posts_operations_total");

    /// Number of posts currently held in memory.
    pub static ref POSTS_STORED: IntGauge = register_int_gauge!(
        "posts_stored",
        "Number of posts currently held in memory"
    )
    .expect("failed to register posts_stored");
}

pub fn record_operation(operation: &str, outcome: &str) {
    POST_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

pub fn set_stored(count: usize) {
    POSTS_STORED.set(count as i64);
}
