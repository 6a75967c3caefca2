//! Logging utilities for halocline.
//!
//! This module provides structured logging helpers so that coverage queries
//! leave searchable, per-query traces.

use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    // A subscriber may already be installed by the host application
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let query_id = generate_query_id();

    debug!(
        operation = operation,
        query_id = %query_id,
        "Starting operation"
    );

    let result = f();

    let duration = start.elapsed();

    info!(
        operation = operation,
        query_id = %query_id,
        duration_ms = duration.as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log how a vertical slice was assembled
pub fn log_query_stats(
    operation: &str,
    index_t: usize,
    candidate_layers: &[usize],
    direct_cells: usize,
    interpolated_cells: usize,
) {
    debug!(
        operation = operation,
        index_t = index_t,
        layer_count = candidate_layers.len(),
        layers = ?candidate_layers,
        direct_cells = direct_cells,
        interpolated_cells = interpolated_cells,
        "Vertical slice assembled"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::HaloclineError, context: &str) {
    error!(
        error = %error,
        context = context,
        lookup = error.is_lookup_error(),
        "Error occurred"
    );
}

/// Generate a unique query ID
pub fn generate_query_id() -> String {
    Uuid::new_v4().to_string()
}
