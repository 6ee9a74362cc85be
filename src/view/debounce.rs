//! Search input debouncing.
//!
//! Every keystroke replaces the pending value and restarts the quiet
//! window. Only after the window elapses does [`SearchDebouncer::take`]
//! hand the settled value to the caller, so a burst of typing produces a
//! single fetch with the final text.

use std::time::Duration;

use tokio::time::Instant;

pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl SearchDebouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Replace the pending value and restart the quiet window.
    pub fn update(&mut self, value: impl Into<String>) {
        self.pending = Some(value.into());
        self.deadline = Some(Instant::now() + self.delay);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value settles. Returns `now` while idle; callers
    /// gate the timer arm on [`is_pending`](Self::is_pending).
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline.unwrap_or_else(Instant::now)
    }

    /// Take the settled value and go idle.
    pub fn take(&mut self) -> Option<String> {
        self.deadline = None;
        self.pending.take()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::time::advance;

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_idle_until_first_keystroke() {
        let debouncer = SearchDebouncer::new(DELAY);
        assert!(!debouncer.is_pending());
        assert!(debouncer.deadline() <= Instant::now());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settles_after_quiet_window() {
        let mut debouncer = SearchDebouncer::new(DELAY);
        debouncer.update("alice");

        advance(Duration::from_millis(499)).await;
        assert!(debouncer.deadline() > Instant::now());

        advance(Duration::from_millis(1)).await;
        assert!(debouncer.deadline() <= Instant::now());
        assert_eq!(debouncer.take().as_deref(), Some("alice"));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_keystroke_restarts_the_window() {
        let mut debouncer = SearchDebouncer::new(DELAY);
        debouncer.update("a");
        advance(Duration::from_millis(300)).await;
        debouncer.update("al");
        advance(Duration::from_millis(300)).await;
        debouncer.update("ali");

        // 600ms since the first keystroke but only 300ms of quiet.
        advance(Duration::from_millis(300)).await;
        assert!(debouncer.deadline() > Instant::now());

        advance(Duration::from_millis(200)).await;
        assert!(debouncer.deadline() <= Instant::now());
        assert_eq!(debouncer.take().as_deref(), Some("ali"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_take_clears_pending_state() {
        let mut debouncer = SearchDebouncer::new(DELAY);
        debouncer.update("bob");
        advance(DELAY).await;

        assert_eq!(debouncer.take().as_deref(), Some("bob"));
        assert_eq!(debouncer.take(), None);
        assert!(debouncer.deadline() <= Instant::now());
    }
}
