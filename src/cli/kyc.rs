//! Handlers for the `kyc` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::api::types::{KycApplication, KycFile, KycListQuery, ReviewAction};
use crate::cli::command::{KycApproveArgs, KycIdArg, KycListArgs, KycReasonArgs};
use crate::cli::context::{self, CliContext};
use crate::cli::output;
use crate::error::Result;
use crate::view::Page;

#[derive(Tabled)]
struct KycRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Submitted")]
    submitted: String,
    #[tabled(rename = "Flags")]
    flags: String,
}

impl KycRow {
    fn from_application(app: &KycApplication) -> Self {
        let flagged = app.checks.as_ref().is_some_and(|c| c.any_flagged());
        Self {
            id: app.kyc_id.clone(),
            user: app.user.label(),
            level: app.verification_level.clone(),
            status: app.status.clone(),
            submitted: app
                .submitted_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            flags: if flagged { "⚠".to_string() } else { String::new() },
        }
    }
}

/// Execute `kyc list`.
pub async fn execute_list(ctx: &CliContext, args: &KycListArgs) -> Result<()> {
    let query = KycListQuery {
        page: Some(args.page),
        limit: Some(args.limit),
        status: args.status.clone(),
        search: args.search.clone(),
    };
    let envelope = ctx.client.list_kyc_applications(&query).await?;
    let payload = envelope.data;
    let page = Page::from_metadata(payload.applications, payload.metadata);

    if output::is_json() {
        output::json_output(json!({
            "command": "kyc.list",
            "page": args.page,
            "total": page.total(),
            "applications": page.items,
        }));
        return Ok(());
    }

    if page.is_empty() {
        output::note("No applications matched");
        return Ok(());
    }

    let rows: Vec<KycRow> = page.items.iter().map(KycRow::from_application).collect();
    output::lines(&Table::new(rows).to_string());

    if page.show_pagination() {
        if let Some(label) = page.range_label() {
            output::note(&label);
        }
    }

    Ok(())
}

/// Execute `kyc show <ID>`.
pub async fn execute_show(ctx: &CliContext, args: &KycIdArg) -> Result<()> {
    let envelope = ctx.client.kyc_details(&args.id).await?;
    let app = envelope.data;

    if output::is_json() {
        output::json_output(json!({
            "command": "kyc.show",
            "application": app,
        }));
        return Ok(());
    }

    output::section("Application");
    output::field("ID", &app.kyc_id);
    output::field("User", app.user.label());
    output::field("Level", &app.verification_level);
    output::field("Status", &app.status);
    if let Some(at) = app.submitted_at {
        output::field("Submitted", at.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(at) = app.expires_at {
        output::field("Expires", at.format("%Y-%m-%d"));
    }
    if app.is_expired {
        output::warning("Application has expired");
    }
    if let Some(reviewer) = &app.reviewed_by {
        output::field("Reviewed by", reviewer);
    }
    if let Some(at) = app.reviewed_at {
        output::field("Reviewed at", at.format("%Y-%m-%d %H:%M UTC"));
    }

    if let Some(documents) = &app.documents {
        output::section("Documents");
        document_field("Front", documents.document_front.as_ref());
        document_field("Back", documents.document_back.as_ref());
        document_field("Selfie", documents.selfie.as_ref());
    }

    if let Some(checks) = &app.checks {
        output::section("Screening");
        check_field("Duplicate document", checks.duplicate_document);
        check_field("Blacklist", checks.blacklisted);
        check_field("Watchlist", checks.watchlist);
        check_field("AML", checks.aml_screening);
        check_field("Sanctions", checks.sanctions_list);
    }

    if !app.rejection_reasons.is_empty() {
        output::section("Rejection Reasons");
        for reason in &app.rejection_reasons {
            output::note(&format!("- {reason}"));
        }
    }

    Ok(())
}

fn document_field(label: &str, file: Option<&KycFile>) {
    match file {
        Some(file) => {
            let name = file
                .original_name
                .as_deref()
                .or(file.filename.as_deref())
                .unwrap_or("(unnamed)");
            let size = file.size.map(human_size).unwrap_or_default();
            output::field(label, format!("{name} {size}").trim_end());
        }
        None => output::field(label, output::muted("missing")),
    }
}

fn check_field(label: &str, flagged: bool) {
    let value = if flagged {
        output::negative("flagged")
    } else {
        "clear".to_string()
    };
    output::field(label, value);
}

fn human_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("({:.1} MB)", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("({:.1} KB)", bytes as f64 / 1024.0)
    } else {
        format!("({bytes} B)")
    }
}

/// Execute `kyc approve <ID> [--notes TEXT]`. Notes are optional here;
/// only negative decisions demand one.
pub async fn execute_approve(ctx: &CliContext, args: &KycApproveArgs) -> Result<()> {
    let envelope = ctx
        .client
        .review_kyc(&args.id, ReviewAction::Approve, args.notes.as_deref())
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "kyc.approve",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Application approved");
    Ok(())
}

/// Execute `kyc reject <ID> --reason TEXT`.
pub async fn execute_reject(ctx: &CliContext, args: &KycReasonArgs) -> Result<()> {
    context::require_reason("reject the application", &args.reason)?;

    let envelope = ctx
        .client
        .review_kyc(&args.id, ReviewAction::Reject, Some(&args.reason))
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "kyc.reject",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Application rejected");
    Ok(())
}

/// Execute `kyc request-changes <ID> --reason TEXT`.
pub async fn execute_request_changes(ctx: &CliContext, args: &KycReasonArgs) -> Result<()> {
    context::require_reason("request changes", &args.reason)?;

    let envelope = ctx
        .client
        .review_kyc(&args.id, ReviewAction::RequestChanges, Some(&args.reason))
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "kyc.request-changes",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Changes requested");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_scales() {
        assert_eq!(human_size(512), "(512 B)");
        assert_eq!(human_size(2048), "(2.0 KB)");
        assert_eq!(human_size(3 * 1024 * 1024), "(3.0 MB)");
    }

    #[test]
    fn test_row_marks_flagged_applications() {
        let app: KycApplication = serde_json::from_value(json!({
            "_id": "a1",
            "kycId": "KYC-001",
            "userId": "u1",
            "verificationLevel": "standard",
            "status": "pending",
            "checks": { "watchlist": true },
        }))
        .unwrap();

        let row = KycRow::from_application(&app);
        assert_eq!(row.flags, "⚠");
        assert_eq!(row.user, "u1");
    }
}
