use std::future::Future;

use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

#[cfg(test)]
#[path = "run_until_test.rs"]
mod run_until_test;

/// How often, and how many times, to check before giving up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: usize,
}

/// Awaits `check` until it yields `Some`, sleeping `policy.interval` between misses. Returns
/// `None` once `policy.max_attempts` checks have missed.
///
/// `subject` names what is awaited in the debug log of every attempt.
pub async fn run_until<T, F, Fut>(policy: PollPolicy, subject: &str, mut check: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let PollPolicy { interval, max_attempts } = policy;
    for attempt in 1..=max_attempts {
        if let Some(value) = check().await {
            debug!("{subject}: ready on attempt {attempt}/{max_attempts}.");
            return Some(value);
        }
        debug!("{subject}: not ready on attempt {attempt}/{max_attempts}.");
        if attempt < max_attempts {
            sleep(interval).await;
        }
    }

    warn!("{subject}: not ready after {max_attempts} attempts.");
    None
}
