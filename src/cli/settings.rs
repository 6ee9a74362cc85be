//! Handlers for the `settings` command group.

use serde_json::{json, Value};

use crate::cli::command::{HaltArgs, MaintenanceArgs, SettingsShowArgs, SettingsUpdateArgs};
use crate::cli::context::{self, CliContext};
use crate::cli::output;
use crate::error::{ConfigError, Result};

/// Execute `settings show [--section NAME]`.
pub async fn execute_show(ctx: &CliContext, args: &SettingsShowArgs) -> Result<()> {
    if let Some(section) = args.section {
        let envelope = ctx.client.settings_section(section).await?;
        if output::is_json() {
            output::json_output(json!({
                "command": "settings.show",
                "settings": envelope.data,
            }));
            return Ok(());
        }
        output::lines(&serde_json::to_string_pretty(&envelope.data)?);
        return Ok(());
    }

    let envelope = ctx.client.platform_settings().await?;
    let settings = envelope.data;

    if output::is_json() {
        output::json_output(json!({
            "command": "settings.show",
            "settings": settings,
        }));
        return Ok(());
    }

    output::section("Trading");
    let halted = settings
        .global_trading_halt
        .as_ref()
        .is_some_and(|halt| halt.is_halted);
    output::field(
        "Global halt",
        if halted {
            output::negative("HALTED")
        } else {
            output::positive("off")
        },
    );

    output::section("Maintenance");
    match &settings.maintenance_mode {
        Some(mode) if mode.is_enabled => {
            output::field("Mode", output::negative("on"));
            if let Some(message) = &mode.message {
                output::field("Message", message);
            }
            if !mode.affected_services.is_empty() {
                output::field("Affected", mode.affected_services.join(", "));
            }
        }
        _ => output::field("Mode", "off"),
    }

    print_json_section("Trading Parameters", settings.trading_parameters.as_ref())?;
    print_json_section("Risk Management", settings.risk_management.as_ref())?;
    print_json_section("Financial", settings.financial_settings.as_ref())?;
    print_json_section("Notifications", settings.notification_settings.as_ref())?;

    Ok(())
}

fn print_json_section(title: &str, value: Option<&Value>) -> Result<()> {
    if let Some(value) = value {
        output::section(title);
        output::lines(&serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Execute `settings update [--section NAME] <PATCH>`.
///
/// Only the keys present in the patch change; everything else in the
/// section is left as is.
pub async fn execute_update(ctx: &CliContext, args: &SettingsUpdateArgs) -> Result<()> {
    let patch: Value = serde_json::from_str(&args.patch)?;
    if !patch.is_object() {
        return Err(ConfigError::InvalidValue {
            field: "patch",
            reason: "must be a JSON object, e.g. '{\"minDeposit\": 50}'".to_string(),
        }
        .into());
    }

    let envelope = ctx.client.update_settings(args.section, &patch).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "settings.update",
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Settings updated");
    Ok(())
}

/// Execute `settings halt <on|off>`.
pub async fn execute_halt(ctx: &CliContext, args: &HaltArgs) -> Result<()> {
    let halted = args.state.enabled();
    let envelope = ctx.client.set_trading_halt(halted).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "settings.halt",
            "halted": halted,
            "message": envelope.message,
        }));
        return Ok(());
    }

    if halted {
        context::done(&envelope, "Global trading halt raised");
        output::warning("all trading is now halted platform-wide");
    } else {
        context::done(&envelope, "Global trading halt lifted");
    }

    Ok(())
}

/// Execute `settings maintenance <on|off> [--message TEXT]`.
pub async fn execute_maintenance(ctx: &CliContext, args: &MaintenanceArgs) -> Result<()> {
    let enabled = args.state.enabled();
    let envelope = ctx
        .client
        .set_maintenance_mode(enabled, args.message.as_deref())
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "settings.maintenance",
            "enabled": enabled,
            "message": envelope.message,
        }));
        return Ok(());
    }

    if enabled {
        context::done(&envelope, "Maintenance mode on");
        if let Some(message) = &args.message {
            output::field("Message", message);
        }
    } else {
        context::done(&envelope, "Maintenance mode off");
    }

    Ok(())
}
