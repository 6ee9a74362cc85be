//! Shared handler context and guard helpers.
//!
//! Every network-facing command builds one [`CliContext`]: the loaded
//! configuration plus an [`ApiClient`] wired to the on-disk session. The
//! session is passed in explicitly; handlers never reach for globals.

use std::sync::Arc;

use dialoguer::{theme::ColorfulTheme, Confirm};
use rust_decimal::Decimal;

use crate::api::{ApiClient, Envelope};
use crate::cli::{output, paths};
use crate::config::Config;
use crate::error::{ConfigError, Result, ValidationError};
use crate::session::{FileSession, SessionStore};
use crate::view::ViewError;

pub struct CliContext {
    pub config: Config,
    pub client: ApiClient,
}

impl CliContext {
    /// Build the context from loaded configuration, opening the session
    /// file under the pitboss home directory.
    pub fn new(config: Config) -> Result<Self> {
        let session: Arc<dyn SessionStore> = Arc::new(FileSession::open(paths::default_session())?);
        let client = ApiClient::new(&config.backend, session)?;
        Ok(Self { config, client })
    }

    /// Rows per page for list commands, honoring an explicit `--limit`.
    #[must_use]
    pub fn page_size(&self, limit: Option<u32>) -> u32 {
        limit.unwrap_or(self.config.console.page_size)
    }
}

/// Render a screen error. Connectivity failures get the setup panel so a
/// fresh install is pointed at the fix instead of a bare refusal.
pub fn report(err: &ViewError) {
    output::error(&err.to_string());
    if err.is_connectivity() {
        output::hint("check that the backend is running and listening");
        output::hint("verify backend.base_url in your config (pitboss config show)");
        output::hint(&format!(
            "run {} to diagnose connectivity",
            output::highlight("pitboss check backend")
        ));
    }
}

/// Ask for confirmation before a destructive action, unless `--yes`.
pub fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    if output::is_json() {
        // Scripted runs must opt in explicitly.
        return Err(ConfigError::InvalidValue {
            field: "yes",
            reason: "confirmation prompts are disabled in JSON mode; pass --yes".to_string(),
        }
        .into());
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Guard: a reason must be present before the request is issued.
pub fn require_reason(action: &'static str, reason: &str) -> Result<()> {
    if reason.trim().is_empty() {
        return Err(ValidationError::MissingReason { action }.into());
    }
    Ok(())
}

/// Guard: a zero amount never reaches the backend.
pub fn require_nonzero(amount: Decimal) -> Result<()> {
    if amount.is_zero() {
        return Err(ValidationError::ZeroAmount.into());
    }
    Ok(())
}

/// Guard: a required text field must be non-empty.
pub fn require_field(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field }.into());
    }
    Ok(())
}

/// Guard: an update command must name at least one field.
pub fn require_changes(changed: bool) -> Result<()> {
    if !changed {
        return Err(ValidationError::NoChanges.into());
    }
    Ok(())
}

/// Print the backend's confirmation for a completed mutation, with a
/// fallback when the envelope carried no message.
pub fn done<T>(envelope: &Envelope<T>, fallback: &str) {
    if envelope.message.is_empty() {
        output::success(fallback);
    } else {
        output::success(&envelope.message);
    }
}
