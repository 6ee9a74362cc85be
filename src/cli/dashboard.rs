//! Handler for the `dashboard` command.
//!
//! One-shot by default; `--watch` repolls on the configured interval and
//! keeps the last good frame on screen when a poll fails.

use std::ops::ControlFlow;
use std::time::Duration;

use serde_json::json;

use crate::api::types::SystemMetrics;
use crate::cli::command::DashboardArgs;
use crate::cli::context::CliContext;
use crate::cli::output;
use crate::error::{ConfigError, Result};
use crate::view::{poll, Screen};

/// Execute `dashboard [--watch] [--interval SECS]`.
pub async fn execute(ctx: &CliContext, args: &DashboardArgs) -> Result<()> {
    if !args.watch {
        let envelope = ctx.client.system_metrics().await?;
        if output::is_json() {
            output::json_output(json!({
                "command": "dashboard",
                "metrics": envelope.data,
            }));
            return Ok(());
        }
        render(&envelope.data);
        return Ok(());
    }

    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "watch",
            reason: "watch mode is interactive; poll the one-shot dashboard instead".to_string(),
        }
        .into());
    }

    let period = Duration::from_secs(
        args.interval
            .unwrap_or(ctx.config.console.refresh_interval_secs),
    );
    let screen: Screen<SystemMetrics> = Screen::new();

    output::hint(&format!(
        "refreshing every {}s, Ctrl-C to stop",
        period.as_secs()
    ));

    let polling = poll::run_every(period, || async {
        screen
            .run(|| async {
                let envelope = ctx.client.system_metrics().await?;
                Ok(envelope.data)
            })
            .await;

        if let Some(err) = screen.error() {
            output::error(&err.to_string());
        }
        if let Some(metrics) = screen.data() {
            render(&metrics);
        }
        ControlFlow::Continue(())
    });

    tokio::select! {
        () = polling => {}
        _ = tokio::signal::ctrl_c() => {}
    }

    Ok(())
}

fn render(metrics: &SystemMetrics) {
    output::section("Dashboard");
    if let Some(at) = metrics.timestamp {
        output::field("As of", at.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    if let Some(system) = &metrics.system {
        output::section("System");
        if let Some(platform) = &system.platform {
            output::field("Platform", platform);
        }
        if let Some(uptime) = &system.uptime {
            output::field("Uptime", format_uptime(uptime.process));
        }
        if let Some(memory) = &system.memory {
            output::field(
                "Memory",
                format!(
                    "{} / {} ({}%)",
                    format_bytes(memory.used),
                    format_bytes(memory.total),
                    memory.usage_percentage
                ),
            );
        }
        if let Some(cpu) = &system.cpu {
            let load = cpu
                .load
                .iter()
                .map(|l| format!("{l:.2}"))
                .collect::<Vec<_>>()
                .join(" ");
            output::field("CPU", format!("{} cores, load {}", cpu.cores, load));
        }
    }

    if let Some(database) = &metrics.database {
        output::section("Database");
        if let Some(mongo) = &database.mongodb {
            let status = if mongo.connected {
                output::positive("connected")
            } else {
                output::negative("disconnected")
            };
            output::field("MongoDB", status);
            if mongo.connected {
                output::field(
                    "Data",
                    format!(
                        "{} collections, {} documents",
                        mongo.collections, mongo.documents
                    ),
                );
            }
        }
        if let Some(redis) = &database.redis {
            let status = if redis.connected {
                output::positive("connected")
            } else {
                output::negative("disconnected")
            };
            output::field("Redis", status);
        }
    }

    if let Some(users) = &metrics.users {
        output::section("Users");
        output::field("Total", users.total);
        output::field(
            "Active",
            format!("{} ({}%)", users.active, users.active_percentage),
        );
        output::field("Online", users.online);
    }

    if let Some(trading) = &metrics.trading {
        output::section("Trading");
        if let Some(trades) = &trading.trades {
            output::field(
                "Trades",
                format!("{} total, {} today", trades.total, trades.today),
            );
        }
        if let Some(volume) = &trading.volume {
            output::field(
                "Volume",
                format!("${:.2} total, ${:.2} today", volume.total, volume.today),
            );
        }
        if let Some(positions) = &trading.positions {
            output::field(
                "Positions",
                format!("{} open, {} profitable", positions.open, positions.profitable),
            );
        }
    }

    if let Some(performance) = &metrics.performance {
        output::section("Performance");
        let score = performance.health_score;
        let shown = if score >= 80.0 {
            output::positive(format!("{score:.0}"))
        } else if score < 50.0 {
            output::negative(format!("{score:.0}"))
        } else {
            format!("{score:.0}")
        };
        output::field("Health", shown);
        if let Some(errors) = &performance.errors {
            output::field("Errors", errors.total);
        }
        if let Some(times) = &performance.response_time {
            output::field(
                "Response",
                format!(
                    "avg {:.0}ms, p95 {:.0}ms, p99 {:.0}ms",
                    times.average, times.p95, times.p99
                ),
            );
        }
    }
}

fn format_uptime(seconds: f64) -> String {
    let total = seconds as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

fn format_bytes(bytes: u64) -> String {
    const GB: f64 = 1024.0 * 1024.0 * 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let bytes = bytes as f64;
    if bytes >= GB {
        format!("{:.1} GB", bytes / GB)
    } else {
        format!("{:.0} MB", bytes / MB)
    }
}
