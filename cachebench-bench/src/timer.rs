//! Wall-clock timing of benchmark steps.

use std::future::Future;
use std::time::{Duration, Instant};

/// Runs `action` and returns its result together with the elapsed time.
///
/// # Arguments
/// * `label` - Name used in the debug log line
/// * `action` - Work to time
///
/// The result is passed through untouched, including errors.
pub fn measure<F, T>(label: &str, action: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = action();
    let elapsed = start.elapsed();
    tracing::debug!("{} took {:?}", label, elapsed);
    (result, elapsed)
}

/// Async counterpart of [`measure`]: awaits `action` and times it.
pub async fn measure_async<F, T>(label: &str, action: F) -> (T, Duration)
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let result = action.await;
    let elapsed = start.elapsed();
    tracing::debug!("{} took {:?}", label, elapsed);
    (result, elapsed)
}
