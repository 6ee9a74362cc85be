//! Fixed-interval refresh loop.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

/// Run `tick` immediately and then once per `period` until it breaks.
///
/// Ticks that fall behind (a slow fetch) are skipped rather than bunched
/// up, so a struggling backend is never hammered with catch-up requests.
pub async fn run_every<F, Fut>(period: Duration, mut tick: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ControlFlow<()>>,
{
    let mut timer = tokio::time::interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        timer.tick().await;
        if tick().await.is_break() {
            return;
        }
    }
}

// ==================== Tests ====================
