//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs how many domains were evaluated since `start_time` and at what rate.
pub fn log_progress(start_time: Instant, completed: usize, failed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {} domain{} ({} failed) in {:.2} seconds (~{:.2} domains/sec)",
        completed,
        if completed == 1 { "" } else { "s" },
        failed,
        elapsed_secs,
        rate
    );
}
