//! Database metrics collection.
//!
//! Provides functions for recording store-related metrics.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Record the duration of one store operation against a table.
pub fn record_query_duration(table: &str, operation: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "table" => table.to_string(),
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Record database connection pool metrics.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// A helper to time store operations and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new(PersonEntity::TABLE, "find_all");
/// let rows = sqlx::query_as::<_, PersonEntity>(&sql).fetch_all(&pool).await;
/// timer.record();
/// ```
pub struct QueryTimer {
    table: &'static str,
    operation: &'static str,
    start: Instant,
}

impl QueryTimer {
    /// Create a new timer for an operation on the given table.
    pub fn new(table: &'static str, operation: &'static str) -> Self {
        Self {
            table,
            operation,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(self.table, self.operation, duration);
    }
}
