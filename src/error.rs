use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Session persistence errors.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to read session file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write session file: {0}")]
    Write(#[source] std::io::Error),

    #[error("session file is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Failures surfaced by the backend API client.
///
/// Transport failures are tagged at the call site, where the client knows
/// definitively whether the request ever reached the backend. Callers never
/// re-derive the failure class from message text.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend could not be reached at all (DNS, refused, timeout).
    #[error("cannot reach backend at {base_url}: {detail}")]
    Transport { base_url: String, detail: String },

    /// The backend answered with a non-2xx status and a message.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The backend answered 2xx with a body that failed to decode.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// True for transport-level failures, as opposed to application errors.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Client-side guard failures, checked before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount cannot be zero")]
    ZeroAmount,

    #[error("a reason is required to {action}")]
    MissingReason { action: &'static str },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("nothing to change; pass at least one field")]
    NoChanges,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
