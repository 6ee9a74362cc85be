//! Handlers for `login`, `logout`, and `whoami`.

use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde_json::json;

use crate::cli::command::LoginArgs;
use crate::cli::context::CliContext;
use crate::cli::output;
use crate::error::{ConfigError, Result};
use crate::session::SessionStore;

/// Execute `login [--email ADDRESS]`.
///
/// The password is always prompted, never read from the command line, so
/// it stays out of shell history and process listings.
pub async fn execute_login(ctx: &CliContext, args: &LoginArgs) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "login prompts for credentials; sign in without --json first".to_string(),
        }
        .into());
    }

    let email = match &args.email {
        Some(email) => email.clone(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;

    let pb = output::spinner("Signing in...");
    let user = match ctx.client.login(&email, &password).await {
        Ok(user) => {
            output::spinner_success(&pb, "Signed in");
            user
        }
        Err(e) => {
            output::spinner_fail(&pb, "Sign-in failed");
            return Err(e);
        }
    };

    output::success(&format!("Signed in as {}", user.email));
    output::field("Role", &user.role);
    if user.two_factor_enabled {
        output::field("2FA", "enabled");
    }

    Ok(())
}

/// Execute `logout`. Purely local; the stored tokens are discarded.
pub fn execute_logout(ctx: &CliContext) -> Result<()> {
    let was_signed_in = ctx.client.session().is_authenticated();
    ctx.client.logout()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "logout",
            "was_signed_in": was_signed_in,
        }));
        return Ok(());
    }

    if was_signed_in {
        output::success("Signed out");
    } else {
        output::note("No stored session");
    }

    Ok(())
}

/// Execute `whoami`.
pub fn execute_whoami(ctx: &CliContext) -> Result<()> {
    let user = ctx.client.session().user();

    if output::is_json() {
        let payload = match &user {
            Some(user) => json!({
                "command": "whoami",
                "signed_in": true,
                "email": user.email,
                "role": user.role,
                "two_factor_enabled": user.two_factor_enabled,
            }),
            None => json!({
                "command": "whoami",
                "signed_in": false,
            }),
        };
        output::json_output(payload);
        return Ok(());
    }

    match user {
        Some(user) => {
            output::field("Email", &user.email);
            output::field("Role", &user.role);
            if let Some(status) = &user.status {
                output::field("Status", status);
            }
            output::field("2FA", if user.two_factor_enabled { "enabled" } else { "disabled" });
            output::field("Backend", ctx.client.base_url());
        }
        None => {
            output::warning("Not signed in");
            output::hint(&format!(
                "run {} to sign in",
                output::highlight("pitboss login")
            ));
        }
    }

    Ok(())
}
