//! Handlers for the `trading` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::api::trading::{
    AccountAdjustment, AccountUpdate, CreateAccount, OpenPosition, PositionUpdate,
};
use crate::api::types::{AccountListQuery, Position, PositionListQuery, TradingAccount};
use crate::cli::command::{
    AccountAdjustArgs, AccountsListArgs, ClosePositionArgs, CreateAccountArgs, DeleteAccountArgs,
    OpenPositionArgs, PositionsListArgs, UpdateAccountArgs, UpdatePositionArgs,
};
use crate::cli::context::{self, CliContext};
use crate::cli::output;
use crate::error::Result;
use crate::view::Page;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Equity")]
    equity: String,
    #[tabled(rename = "Leverage")]
    leverage: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl AccountRow {
    fn from_account(account: &TradingAccount) -> Self {
        let currency = account.currency.as_deref().unwrap_or("USD");
        Self {
            account: account
                .account_number
                .clone()
                .unwrap_or_else(|| account.id.clone()),
            user: account.user.label(),
            kind: account.account_type.clone(),
            balance: account
                .balance
                .map(|b| format!("{b:.2} {currency}"))
                .unwrap_or_else(|| "-".to_string()),
            equity: account
                .equity
                .map(|e| format!("{e:.2} {currency}"))
                .unwrap_or_else(|| "-".to_string()),
            leverage: account
                .leverage
                .map(|l| format!("1:{l}"))
                .unwrap_or_else(|| "-".to_string()),
            status: account.status.clone(),
        }
    }
}

#[derive(Tabled)]
struct PositionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Dir")]
    direction: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Open")]
    open_price: String,
    #[tabled(rename = "Current")]
    current_price: String,
    #[tabled(rename = "P/L")]
    unrealized: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl PositionRow {
    fn from_position(position: &Position) -> Self {
        Self {
            id: position.id.clone(),
            account: position.account.label(),
            symbol: position.symbol.clone(),
            direction: position.direction.clone(),
            volume: format!("{:.2}", position.volume),
            open_price: format!("{:.5}", position.open_price),
            current_price: position
                .current_price
                .map(|p| format!("{p:.5}"))
                .unwrap_or_else(|| "-".to_string()),
            unrealized: position
                .unrealized_pl
                .map(|pl| format!("{pl:+.2}"))
                .unwrap_or_else(|| "-".to_string()),
            status: position.status.clone(),
        }
    }
}

// ==================== Accounts ====================

/// Execute `trading accounts`.
pub async fn execute_accounts(ctx: &CliContext, args: &AccountsListArgs) -> Result<()> {
    let query = AccountListQuery {
        page: Some(args.page),
        limit: Some(ctx.page_size(args.limit)),
        account_type: args.account_type.map(|t| t.as_str().to_string()),
        status: args.status.clone(),
        search: args.search.clone(),
    };
    let envelope = ctx.client.list_accounts(&query).await?;
    let payload = envelope.data;
    let page = Page::from_metadata(payload.accounts, payload.metadata);

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.accounts",
            "page": args.page,
            "total": page.total(),
            "accounts": page.items,
        }));
        return Ok(());
    }

    if page.is_empty() {
        output::note("No accounts matched");
        return Ok(());
    }

    let rows: Vec<AccountRow> = page.items.iter().map(AccountRow::from_account).collect();
    output::lines(&Table::new(rows).to_string());
    output::note(&format!("{} total", page.total()));

    Ok(())
}

/// Execute `trading create-account`.
pub async fn execute_create_account(ctx: &CliContext, args: &CreateAccountArgs) -> Result<()> {
    let account = CreateAccount {
        user_id: args.user.clone(),
        account_type: args.account_type,
        currency: args.currency.clone(),
        leverage: args.leverage,
        initial_balance: args.initial_balance,
        notes: args.notes.clone(),
    };
    let envelope = ctx.client.create_account(&account).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.create-account",
            "user": args.user,
            "message": envelope.message,
            "account": envelope.data,
        }));
        return Ok(());
    }

    context::done(&envelope, "Account created");
    output::field("User", &args.user);
    output::field("Leverage", format!("1:{}", args.leverage));

    Ok(())
}

/// Execute `trading update-account`.
pub async fn execute_update_account(ctx: &CliContext, args: &UpdateAccountArgs) -> Result<()> {
    let update = AccountUpdate {
        leverage: args.leverage,
        status: args.status.clone(),
        max_positions: args.max_positions,
        notes: args.notes.clone(),
    };
    context::require_changes(
        update.leverage.is_some()
            || update.status.is_some()
            || update.max_positions.is_some()
            || update.notes.is_some(),
    )?;

    let envelope = ctx.client.update_account(&args.id, &update).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.update-account",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Account updated");
    Ok(())
}

/// Execute `trading delete-account`. Destructive; confirms unless `--yes`.
pub async fn execute_delete_account(ctx: &CliContext, args: &DeleteAccountArgs) -> Result<()> {
    context::require_reason("delete the account", &args.reason)?;

    let prompt = if args.force_close {
        format!(
            "Delete account {} and force-close its open positions?",
            args.id
        )
    } else {
        format!("Delete account {}?", args.id)
    };
    if !context::confirm(&prompt, args.yes)? {
        output::warning("Cancelled");
        return Ok(());
    }

    let envelope = ctx
        .client
        .delete_account(&args.id, &args.reason, args.force_close)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.delete-account",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Account deleted");
    Ok(())
}

/// Execute `trading adjust`. Zero amounts are rejected before any
/// request is made.
pub async fn execute_adjust(ctx: &CliContext, args: &AccountAdjustArgs) -> Result<()> {
    context::require_nonzero(args.amount)?;

    let adjustment = AccountAdjustment {
        amount: args.amount,
        direction: args.direction,
        reason: args.reason,
        notes: args.notes.clone(),
    };
    let envelope = ctx
        .client
        .adjust_account_balance(&args.id, &adjustment)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.adjust",
            "id": args.id,
            "amount": args.amount.to_string(),
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Account balance adjusted");
    Ok(())
}

// ==================== Positions ====================

/// Execute `trading positions`.
pub async fn execute_positions(ctx: &CliContext, args: &PositionsListArgs) -> Result<()> {
    let query = PositionListQuery {
        page: Some(args.page),
        limit: Some(ctx.page_size(args.limit)),
        status: args.status.clone(),
        symbol: args.symbol.clone(),
    };
    let envelope = ctx.client.list_positions(&query).await?;
    let payload = envelope.data;
    let page = Page::from_metadata(payload.positions, payload.metadata);

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.positions",
            "page": args.page,
            "total": page.total(),
            "positions": page.items,
        }));
        return Ok(());
    }

    if page.is_empty() {
        output::note("No positions matched");
        return Ok(());
    }

    let rows: Vec<PositionRow> = page.items.iter().map(PositionRow::from_position).collect();
    output::lines(&Table::new(rows).to_string());
    output::note(&format!("{} total", page.total()));

    Ok(())
}

/// Execute `trading open-position`.
pub async fn execute_open_position(ctx: &CliContext, args: &OpenPositionArgs) -> Result<()> {
    let position = OpenPosition {
        account_id: args.account.clone(),
        symbol: args.symbol.clone(),
        direction: args.direction,
        volume: args.volume,
        open_price: args.open_price,
        stop_loss: args.stop_loss,
        take_profit: args.take_profit,
        comment: args.comment.clone(),
    };
    let envelope = ctx.client.open_position(&position).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.open-position",
            "account": args.account,
            "symbol": args.symbol,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Position opened");
    output::field("Symbol", &args.symbol);
    output::field("Volume", format!("{:.2}", args.volume));

    Ok(())
}

/// Execute `trading update-position`.
pub async fn execute_update_position(ctx: &CliContext, args: &UpdatePositionArgs) -> Result<()> {
    let update = PositionUpdate {
        stop_loss: args.stop_loss,
        take_profit: args.take_profit,
        comment: args.comment.clone(),
        notes: args.notes.clone(),
    };
    context::require_changes(
        update.stop_loss.is_some()
            || update.take_profit.is_some()
            || update.comment.is_some()
            || update.notes.is_some(),
    )?;

    let envelope = ctx.client.update_position(&args.id, &update).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.update-position",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Position updated");
    Ok(())
}

/// Execute `trading close-position`. Destructive; confirms unless `--yes`.
/// The user is notified unless `--no-notify`.
pub async fn execute_close_position(ctx: &CliContext, args: &ClosePositionArgs) -> Result<()> {
    let prompt = format!("Force-close position {}?", args.id);
    if !context::confirm(&prompt, args.yes)? {
        output::warning("Cancelled");
        return Ok(());
    }

    let envelope = ctx
        .client
        .force_close_position(&args.id, &args.reason, !args.no_notify)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "trading.close-position",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Position closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_row_formats_leverage_and_money() {
        let account: TradingAccount = serde_json::from_value(json!({
            "_id": "a1",
            "accountNumber": "TA-1001",
            "userId": "u1",
            "accountType": "live",
            "currency": "USD",
            "balance": {"$numberDecimal": "2500"},
            "leverage": 200,
            "status": "active",
        }))
        .unwrap();

        let row = AccountRow::from_account(&account);
        assert_eq!(row.account, "TA-1001");
        assert_eq!(row.balance, "2500.00 USD");
        assert_eq!(row.leverage, "1:200");
    }

    #[test]
    fn test_position_row_signs_unrealized_pl() {
        let position: Position = serde_json::from_value(json!({
            "_id": "p1",
            "userId": "u1",
            "accountId": "a1",
            "symbol": "EURUSD",
            "direction": "buy",
            "volume": 0.5,
            "openPrice": 1.0852,
            "unrealizedPL": -12.345,
            "status": "open",
        }))
        .unwrap();

        let row = PositionRow::from_position(&position);
        assert_eq!(row.unrealized, "-12.35");
        assert_eq!(row.volume, "0.50");
    }
}
