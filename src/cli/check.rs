//! Diagnostic checks.

use crate::cli::context::CliContext;
use crate::cli::output;
use crate::error::{ApiError, Error, Result};
use crate::session::SessionStore;

/// Execute `check backend`.
///
/// A 401 still counts as reachable: the probe separates "the backend is
/// down" from "the session is stale" so the operator fixes the right
/// thing.
pub async fn execute_backend(ctx: &CliContext) -> Result<()> {
    output::section("Backend Check");
    output::field("Backend", ctx.client.base_url());
    output::field("Timeout", format!("{}s", ctx.config.backend.timeout_secs));
    output::field(
        "Session",
        if ctx.client.session().is_authenticated() {
            "signed in"
        } else {
            "not signed in"
        },
    );

    let pb = output::spinner("Checking health endpoint...");
    match ctx.client.health().await {
        Ok(_) => {
            output::spinner_success(&pb, "Backend healthy");
        }
        Err(ApiError::Status { status: 401, .. }) => {
            output::spinner_success(&pb, "Backend reachable");
            output::warning("session was rejected");
            output::hint(&format!(
                "run {} to sign in",
                output::highlight("pitboss login")
            ));
        }
        Err(ApiError::Status { status, message }) => {
            output::spinner_fail(&pb, &format!("Backend returned HTTP {status}"));
            return Err(Error::Api(ApiError::Status { status, message }));
        }
        Err(e) => {
            output::spinner_fail(&pb, "Backend unreachable");
            return Err(e.into());
        }
    }

    output::success("Backend checks passed");

    Ok(())
}
