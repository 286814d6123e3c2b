use std::time::Duration;

/// Suspends the current task for at least `ms` milliseconds.
///
/// Only the calling task waits; the runtime keeps driving other tasks.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
