use std::time::Duration;

use tokio::time::Instant;

/// Suppresses rapid repeated triggers: a value becomes ready only after no
/// newer value has arrived for the configured quiet interval. A fresh
/// [`update`](Self::update) supersedes any pending value and restarts the
/// delay.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a new value, cancelling whatever was pending.
    pub fn update(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
    }

    /// Instant at which the pending value settles, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Take the pending value if its quiet interval has elapsed.
    pub fn settled(&mut self) -> Option<T> {
        match &self.pending {
            Some((_, at)) if *at <= Instant::now() => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Drop the pending value without firing.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, sleep};

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn fires_after_quiet_interval() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.update("0xabc");

        advance(Duration::from_millis(499)).await;
        assert_eq!(debouncer.settled(), None);

        advance(Duration::from_millis(1)).await;
        assert_eq!(debouncer.settled(), Some("0xabc"));
        // fired once, nothing left pending
        assert_eq!(debouncer.settled(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_value_supersedes_pending() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.update("first");

        advance(Duration::from_millis(400)).await;
        debouncer.update("second");

        // the first value would have fired here; it was cancelled
        advance(Duration::from_millis(400)).await;
        assert_eq!(debouncer.settled(), None);

        advance(Duration::from_millis(100)).await;
        assert_eq!(debouncer.settled(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn clear_cancels_without_firing() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.update("doomed");
        debouncer.clear();

        sleep(DELAY * 2).await;
        assert_eq!(debouncer.settled(), None);
        assert_eq!(debouncer.deadline(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_tracks_latest_update() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.update(1);
        let first = debouncer.deadline().unwrap();

        advance(Duration::from_millis(100)).await;
        debouncer.update(2);
        let second = debouncer.deadline().unwrap();
        assert_eq!(second - first, Duration::from_millis(100));
    }
}
