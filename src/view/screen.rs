//! Ticketed screen state.
//!
//! Every fetch takes a monotonically increasing ticket before it starts
//! and presents it when it completes. A completion is applied only when
//! its ticket is newer than the last applied one, so overlapping fetches
//! always settle on the most recently started request. A failed fetch
//! records the error but keeps the last good payload.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::ApiError;
use crate::view::ViewError;

/// State holder for one interactive screen.
pub struct Screen<T> {
    issued: AtomicU64,
    state: Mutex<State<T>>,
}

struct State<T> {
    data: Option<T>,
    error: Option<ViewError>,
    loading: bool,
    applied: u64,
}

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Screen<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            state: Mutex::new(State {
                data: None,
                error: None,
                loading: false,
                applied: 0,
            }),
        }
    }

    /// Mark a fetch as started and hand out its ticket.
    pub fn begin(&self) -> u64 {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().loading = true;
        ticket
    }

    /// Apply a fetch result. Returns false when a newer result already
    /// landed and this one was dropped.
    pub fn complete(&self, ticket: u64, result: Result<T, ViewError>) -> bool {
        let mut state = self.state.lock();
        if ticket <= state.applied {
            debug!(ticket, applied = state.applied, "dropping stale response");
            return false;
        }
        state.applied = ticket;
        // The spinner stays up while a newer fetch is still in flight.
        if ticket == self.issued.load(Ordering::SeqCst) {
            state.loading = false;
        }
        match result {
            Ok(data) => {
                state.data = Some(data);
                state.error = None;
            }
            Err(error) => {
                state.error = Some(error);
            }
        }
        true
    }

    /// Run one fetch end to end under a fresh ticket.
    pub async fn run<F, Fut>(&self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let ticket = self.begin();
        let result = fetch().await.map_err(ViewError::from);
        self.complete(ticket, result)
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn error(&self) -> Option<ViewError> {
        self.state.lock().error.clone()
    }
}

impl<T: Clone> Screen<T> {
    /// Last good payload, if any fetch has succeeded yet.
    pub fn data(&self) -> Option<T> {
        self.state.lock().data.clone()
    }
}

/// Run a mutation, then refresh the screen exactly once if it succeeded.
///
/// A failed mutation returns early and leaves the screen untouched, so
/// the operator keeps their place and the error can be shown against the
/// existing data.
pub async fn submit<T, O, M, MFut, F, FFut>(
    screen: &Screen<T>,
    mutate: M,
    refetch: F,
) -> Result<O, ViewError>
where
    M: FnOnce() -> MFut,
    MFut: Future<Output = Result<O, ApiError>>,
    F: FnOnce() -> FFut,
    FFut: Future<Output = Result<T, ApiError>>,
{
    let outcome = mutate().await.map_err(ViewError::from)?;
    screen.run(refetch).await;
    Ok(outcome)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_applies_data_and_clears_loading() {
        let screen = Screen::new();

        let applied = screen.run(|| async { Ok::<_, ApiError>(vec![1, 2, 3]) }).await;

        assert!(applied);
        assert_eq!(screen.data(), Some(vec![1, 2, 3]));
        assert!(screen.error().is_none());
        assert!(!screen.is_loading());
    }

    #[tokio::test]
    async fn test_stale_completion_is_dropped() {
        let screen = Screen::new();
        let first = screen.begin();
        let second = screen.begin();

        assert!(screen.complete(second, Ok(vec!["new"])));
        // The older request resolves afterwards and must not win.
        assert!(!screen.complete(first, Ok(vec!["old"])));

        assert_eq!(screen.data(), Some(vec!["new"]));
        assert!(!screen.is_loading());
    }

    #[tokio::test]
    async fn test_out_of_order_completion_keeps_spinner_for_newer_fetch() {
        let screen: Screen<Vec<u8>> = Screen::new();
        let first = screen.begin();
        let _second = screen.begin();

        assert!(screen.complete(first, Ok(vec![1])));

        // The second fetch is still in flight.
        assert!(screen.is_loading());
        assert_eq!(screen.data(), Some(vec![1]));
    }

    #[tokio::test]
    async fn test_failure_keeps_last_good_data() {
        let screen = Screen::new();
        screen.run(|| async { Ok::<_, ApiError>(vec![7]) }).await;

        screen
            .run(|| async {
                Err::<Vec<u8>, _>(ApiError::Status {
                    status: 500,
                    message: "HTTP 500".into(),
                })
            })
            .await;

        assert_eq!(screen.data(), Some(vec![7]));
        assert_eq!(
            screen.error(),
            Some(ViewError::Application { message: "HTTP 500".into() })
        );
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let screen = Screen::new();
        screen
            .run(|| async {
                Err::<Vec<u8>, _>(ApiError::Transport {
                    base_url: "http://localhost:5022/api".into(),
                    detail: "connection refused".into(),
                })
            })
            .await;
        assert!(screen.error().is_some());

        screen.run(|| async { Ok::<_, ApiError>(vec![9]) }).await;

        assert!(screen.error().is_none());
        assert_eq!(screen.data(), Some(vec![9]));
    }

    #[tokio::test]
    async fn test_submit_refetches_once_on_success() {
        let screen = Screen::new();
        let fetches = std::sync::atomic::AtomicU32::new(0);

        let result = submit(
            &screen,
            || async { Ok::<_, ApiError>("adjusted") },
            || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ApiError>(vec![42])
            },
        )
        .await;

        assert_eq!(result, Ok("adjusted"));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(screen.data(), Some(vec![42]));
    }

    #[tokio::test]
    async fn test_submit_failure_skips_refetch_and_keeps_state() {
        let screen = Screen::new();
        screen.run(|| async { Ok::<_, ApiError>(vec![1]) }).await;
        let fetches = std::sync::atomic::AtomicU32::new(0);

        let result: Result<(), ViewError> = submit(
            &screen,
            || async {
                Err(ApiError::Status {
                    status: 400,
                    message: "Reason is required".into(),
                })
            },
            || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(vec![2])
            },
        )
        .await;

        assert_eq!(
            result,
            Err(ViewError::Application { message: "Reason is required".into() })
        );
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
        assert_eq!(screen.data(), Some(vec![1]));
    }
}
