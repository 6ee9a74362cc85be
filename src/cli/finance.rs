//! Handlers for the `finance` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::api::types::{Transaction, TransactionListQuery};
use crate::cli::command::{TransactionsArgs, TxApproveArgs, TxReasonArgs};
use crate::cli::context::{self, CliContext};
use crate::cli::output;
use crate::error::Result;
use crate::view::Page;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Reference")]
    reference: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Date")]
    date: String,
}

impl TransactionRow {
    fn from_transaction(tx: &Transaction) -> Self {
        let currency = tx.currency.as_deref().unwrap_or("USD");
        Self {
            reference: tx.reference().to_string(),
            user: tx.user.label(),
            kind: tx.kind.clone(),
            amount: format!("{:.2} {currency}", tx.amount),
            status: tx.status.clone(),
            method: tx.method.clone().unwrap_or_else(|| "-".to_string()),
            date: tx
                .created_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Keep only transactions whose payment method matches. The backend has
/// no query parameter for this field, so it is applied to the fetched
/// page.
fn filter_by_method(transactions: &mut Vec<Transaction>, method: &str) {
    transactions.retain(|tx| {
        tx.method
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case(method))
    });
}

/// Execute `finance transactions`.
pub async fn execute_transactions(ctx: &CliContext, args: &TransactionsArgs) -> Result<()> {
    let query = TransactionListQuery {
        page: Some(args.page),
        limit: Some(ctx.page_size(args.limit)),
        kind: args.kind.clone(),
        status: args.status.clone(),
        search: args.search.clone(),
    };
    let envelope = ctx.client.list_transactions(&query).await?;
    let payload = envelope.data;

    let mut transactions = payload.transactions;
    let fetched = transactions.len();
    if let Some(method) = &args.method {
        filter_by_method(&mut transactions, method);
    }
    let page = Page::from_metadata(transactions, payload.metadata);

    if output::is_json() {
        output::json_output(json!({
            "command": "finance.transactions",
            "page": args.page,
            "total": page.total(),
            "transactions": page.items,
        }));
        return Ok(());
    }

    if page.is_empty() {
        output::note("No transactions matched");
        return Ok(());
    }

    let rows: Vec<TransactionRow> = page
        .items
        .iter()
        .map(TransactionRow::from_transaction)
        .collect();
    output::lines(&Table::new(rows).to_string());

    if let Some(method) = &args.method {
        output::note(&format!(
            "{} of {} fetched rows match method '{}'",
            page.items.len(),
            fetched,
            method
        ));
    }
    if page.show_pagination() {
        if let Some(label) = page.range_label() {
            output::note(&label);
        }
    }

    Ok(())
}

/// Execute `finance approve <ID> [--notes TEXT]`.
pub async fn execute_approve(ctx: &CliContext, args: &TxApproveArgs) -> Result<()> {
    let envelope = ctx
        .client
        .approve_verification(&args.id, args.notes.as_deref())
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "finance.approve",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Transaction approved");
    Ok(())
}

/// Execute `finance reject <ID> --reason TEXT`.
pub async fn execute_reject(ctx: &CliContext, args: &TxReasonArgs) -> Result<()> {
    context::require_reason("reject the transaction", &args.reason)?;

    let envelope = ctx
        .client
        .reject_verification(&args.id, &args.reason)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "finance.reject",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Transaction rejected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transaction(id: &str, method: Option<&str>) -> Transaction {
        serde_json::from_value(json!({
            "_id": id,
            "userId": "u1",
            "type": "deposit",
            "amount": "100",
            "status": "pending",
            "method": method,
        }))
        .unwrap()
    }

    #[test]
    fn test_method_filter_is_case_insensitive() {
        let mut txs = vec![
            transaction("t1", Some("bank_transfer")),
            transaction("t2", Some("Bank_Transfer")),
            transaction("t3", Some("crypto")),
            transaction("t4", None),
        ];
        filter_by_method(&mut txs, "bank_transfer");

        let ids: Vec<&str> = txs.iter().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_row_prefers_readable_reference() {
        let tx: Transaction = serde_json::from_value(json!({
            "_id": "t9",
            "transactionId": "TXN-42",
            "userId": "u1",
            "type": "withdrawal",
            "amount": {"$numberDecimal": "75.5"},
            "status": "completed",
        }))
        .unwrap();

        let row = TransactionRow::from_transaction(&tx);
        assert_eq!(row.reference, "TXN-42");
        assert_eq!(row.amount, "75.50 USD");
    }
}
