//! Screen state engine.
//!
//! Interactive commands (watch modes, the dashboard) hold their data in a
//! [`Screen`]: the last good payload, the current error, and a loading
//! flag. Fetches are ticketed so a slow response can never overwrite a
//! newer one.
//!
//! # Modules
//!
//! - [`screen`] — [`Screen`] state holder and the mutate-then-refetch
//!   helper.
//! - [`list`] — [`Page`] wrapper with pagination display rules.
//! - [`debounce`] — search input debouncing.
//! - [`poll`] — fixed-interval refresh loop.

pub mod debounce;
pub mod list;
pub mod poll;
pub mod screen;

use std::fmt;

use crate::error::ApiError;

pub use debounce::SearchDebouncer;
pub use list::Page;
pub use screen::Screen;

/// Error surfaced to a screen, split by whether the backend was reached.
///
/// The split is carried over from the call site, never re-derived from
/// message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The backend could not be reached at all.
    Connectivity { base_url: String, detail: String },
    /// The backend answered but refused or failed the request.
    Application { message: String },
}

impl ViewError {
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity { .. })
    }
}

impl From<ApiError> for ViewError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport { base_url, detail } => Self::Connectivity { base_url, detail },
            ApiError::Status { message, .. } => Self::Application { message },
            ApiError::Decode(e) => Self::Application {
                message: format!("failed to decode response body: {e}"),
            },
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connectivity { base_url, detail } => {
                write!(f, "cannot reach backend at {base_url}: {detail}")
            }
            Self::Application { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for ViewError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_maps_to_connectivity() {
        let err = ViewError::from(ApiError::Transport {
            base_url: "http://localhost:5022/api".into(),
            detail: "connection refused".into(),
        });

        assert!(err.is_connectivity());
        let rendered = err.to_string();
        assert!(rendered.contains("http://localhost:5022/api"));
    }

    #[test]
    fn test_status_maps_to_application_with_verbatim_message() {
        let err = ViewError::from(ApiError::Status {
            status: 401,
            message: "Invalid token".into(),
        });

        assert!(!err.is_connectivity());
        assert_eq!(err.to_string(), "Invalid token");
    }
}
