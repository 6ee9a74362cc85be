//! Handlers for the `users` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::api::finance::BalanceAdjustment;
use crate::api::types::{User, UserListQuery};
use crate::api::users::UserUpdate;
use crate::cli::command::{
    UserAdjustArgs, UserFilterArgs, UserIdArg, UserSetStatusArgs, UserUpdateArgs, UsersExportArgs,
    UsersListArgs,
};
use crate::cli::context::{self, CliContext};
use crate::cli::{output, watch};
use crate::error::Result;
use crate::view::Page;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "KYC")]
    kyc: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl UserRow {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.display_name(),
            email: user.email.clone(),
            country: user.country.clone().unwrap_or_default(),
            status: user.status.clone(),
            kyc: user.kyc_status.clone().unwrap_or_else(|| "-".to_string()),
            balance: format!("${:.2}", user.balance()),
        }
    }
}

pub(crate) fn build_query(ctx: &CliContext, filter: &UserFilterArgs) -> UserListQuery {
    UserListQuery {
        page: Some(filter.page),
        limit: Some(ctx.page_size(filter.limit)),
        status: filter.status.clone(),
        kyc_status: filter.kyc_status.clone(),
        search: filter.search.clone(),
        sort_by: filter.sort_by.clone(),
        sort_order: filter.sort_order.clone(),
    }
}

async fn fetch_page(ctx: &CliContext, query: &UserListQuery) -> Result<Page<User>> {
    let envelope = ctx.client.list_users(query).await?;
    let payload = envelope.data;
    Ok(Page::from_metadata(payload.users, payload.metadata))
}

/// Render a fetched page of users. Shared between the one-shot list and
/// the watch loop.
pub(crate) fn render_page(page: &Page<User>) {
    if page.items.is_empty() {
        output::note("No users matched");
        return;
    }

    let rows: Vec<UserRow> = page.items.iter().map(UserRow::from_user).collect();
    let table = Table::new(rows).to_string();
    output::lines(&table);

    if page.show_pagination() {
        if let Some(label) = page.range_label() {
            output::note(&label);
        }
    }
}

/// Execute `users list`.
pub async fn execute_list(ctx: &CliContext, args: &UsersListArgs) -> Result<()> {
    if args.watch {
        return watch::execute_users_watch(ctx, &args.filter).await;
    }

    let query = build_query(ctx, &args.filter);
    let page = fetch_page(ctx, &query).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "users.list",
            "page": args.filter.page,
            "total": page.total(),
            "users": page.items,
        }));
        return Ok(());
    }

    render_page(&page);

    if let Some(pagination) = &page.pagination {
        if pagination.has_next_page {
            output::hint(&format!(
                "next page: {}",
                output::highlight(format!(
                    "pitboss users list --page {}",
                    pagination.current_page + 1
                ))
            ));
        }
    }

    Ok(())
}

/// Execute `users export [--output FILE]`.
pub async fn execute_export(ctx: &CliContext, args: &UsersExportArgs) -> Result<()> {
    let query = build_query(ctx, &args.filter);
    let page = fetch_page(ctx, &query).await?;
    let csv = users_csv(&page.items);

    if output::is_json() {
        if let Some(path) = &args.output {
            std::fs::write(path, &csv)?;
            output::json_output(json!({
                "command": "users.export",
                "status": "written",
                "rows": page.items.len(),
                "path": path.display().to_string(),
                "bytes": csv.len(),
            }));
        } else {
            output::json_output(json!({
                "command": "users.export",
                "status": "stdout",
                "rows": page.items.len(),
                "csv": csv,
            }));
        }
        return Ok(());
    }

    if let Some(path) = &args.output {
        std::fs::write(path, &csv)?;
        output::success("User export complete");
        output::field("Rows", page.items.len());
        output::field("Path", path.display());
    } else {
        print!("{csv}");
    }

    Ok(())
}

fn users_csv(users: &[User]) -> String {
    let mut csv = String::from("ID,Name,Email,Country,Status,KYC,Balance,Registered\n");
    for user in users {
        let fields = [
            user.id.clone(),
            user.display_name(),
            user.email.clone(),
            user.country.clone().unwrap_or_default(),
            user.status.clone(),
            user.kyc_status.clone().unwrap_or_default(),
            user.balance().to_string(),
            user.created_at.map(|at| at.to_rfc3339()).unwrap_or_default(),
        ];
        let encoded: Vec<String> = fields.iter().map(|field| csv_field(field)).collect();
        csv.push_str(&encoded.join(","));
        csv.push('\n');
    }
    csv
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Execute `users show <ID>`.
pub async fn execute_show(ctx: &CliContext, args: &UserIdArg) -> Result<()> {
    let envelope = ctx.client.user_details(&args.id).await?;
    let user = envelope.data;

    if output::is_json() {
        output::json_output(json!({
            "command": "users.show",
            "user": user,
        }));
        return Ok(());
    }

    output::section("Profile");
    output::field("ID", &user.id);
    output::field("Name", user.display_name());
    output::field("Email", &user.email);
    if let Some(phone) = &user.phone {
        output::field("Phone", phone);
    }
    if let Some(country) = &user.country {
        output::field("Country", country);
    }
    output::field("Status", &user.status);
    output::field("KYC", user.kyc_status.as_deref().unwrap_or("-"));
    output::field(
        "Email verified",
        if user.is_email_verified { "yes" } else { "no" },
    );
    output::field(
        "2FA",
        if user.two_factor_enabled {
            "enabled"
        } else {
            "disabled"
        },
    );
    if user.is_locked {
        output::warning("Account is locked");
    }
    if let Some(at) = user.created_at {
        output::field("Registered", at.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(at) = user.last_login_at {
        output::field("Last login", at.format("%Y-%m-%d %H:%M UTC"));
    }

    output::section("Wallet");
    output::field("Balance", format!("${:.2}", user.balance()));

    if let Some(prefs) = &user.notifications {
        output::section("Notifications");
        let channels = prefs.enabled();
        if channels.is_empty() {
            output::field("Channels", output::muted("none"));
        } else {
            output::field("Channels", channels.join(", "));
        }
    }

    if let Some(stats) = &user.statistics {
        output::section("Statistics");
        output::field(
            "Deposits",
            format!("${:.2} ({} total)", stats.deposits.total, stats.deposits.count),
        );
        output::field(
            "Withdrawals",
            format!(
                "${:.2} ({} total)",
                stats.withdrawals.total, stats.withdrawals.count
            ),
        );
        output::field("Trades", stats.total_trades);
        output::field("Open positions", stats.open_positions);
        output::field("Accounts", stats.accounts_count);
    }

    if let Some(transactions) = &user.recent_transactions {
        if !transactions.is_empty() {
            output::section("Recent Transactions");
            for tx in transactions {
                let when = tx
                    .created_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                let amount = format!("${:.2}", tx.amount);
                output::note(&format!(
                    "{} {:<12} {:<12} {:<10} {}",
                    when, tx.kind, amount, tx.status, tx.id
                ));
            }
        }
    }

    if let Some(orders) = &user.recent_orders {
        if !orders.is_empty() {
            output::section("Recent Orders");
            for order in orders.iter().take(5) {
                let when = order
                    .created_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                output::note(&format!(
                    "{} {:<10} {:<8} {:<4} {:>8.2} {}",
                    when, order.symbol, order.kind, order.direction, order.volume, order.status
                ));
            }
        }
    }

    Ok(())
}

/// Execute `users update <ID> [fields]`.
pub async fn execute_update(ctx: &CliContext, args: &UserUpdateArgs) -> Result<()> {
    let update = UserUpdate {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        country: args.country.clone(),
    };
    context::require_changes(
        update.first_name.is_some()
            || update.last_name.is_some()
            || update.email.is_some()
            || update.phone.is_some()
            || update.country.is_some(),
    )?;

    let envelope = ctx.client.update_user(&args.id, &update).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "users.update",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "User updated");
    Ok(())
}

/// Execute `users set-status <ID> <STATUS> --reason TEXT`.
pub async fn execute_set_status(ctx: &CliContext, args: &UserSetStatusArgs) -> Result<()> {
    context::require_reason("change the account status", &args.reason)?;

    let envelope = ctx
        .client
        .set_user_status(&args.id, &args.status, &args.reason)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "users.set-status",
            "id": args.id,
            "status": args.status,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, &format!("Status set to {}", args.status));
    Ok(())
}

/// Execute `users adjust-balance <ID> --amount N --reason R`.
///
/// Zero amounts never reach the backend; negative amounts debit.
pub async fn execute_adjust_balance(ctx: &CliContext, args: &UserAdjustArgs) -> Result<()> {
    context::require_nonzero(args.amount)?;

    let adjustment = BalanceAdjustment {
        user_id: args.id.clone(),
        amount: args.amount,
        reason: args.reason,
        notes: args.notes.clone(),
    };
    let envelope = ctx.client.adjust_user_balance(&adjustment).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "users.adjust-balance",
            "id": args.id,
            "amount": args.amount.to_string(),
            "message": envelope.message,
        }));
        return Ok(());
    }

    let direction = if args.amount.is_sign_negative() {
        output::negative(format!("-${}", args.amount.abs()))
    } else {
        output::positive(format!("+${}", args.amount))
    };
    context::done(&envelope, "Balance adjusted");
    output::field("Change", direction);

    Ok(())
}
