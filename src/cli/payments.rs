//! Handlers for the `payments` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::api::types::{BankDetails, PaymentMethod};
use crate::cli::command::{BankDetailsArgs, PaymentToggleArgs};
use crate::cli::context::{self, CliContext};
use crate::cli::output;
use crate::error::Result;

#[derive(Tabled)]
struct MethodRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
    #[tabled(rename = "Currencies")]
    currencies: String,
    #[tabled(rename = "Deposit Fee")]
    deposit_fee: String,
    #[tabled(rename = "Withdrawal Fee")]
    withdrawal_fee: String,
}

impl MethodRow {
    fn from_method(method: &PaymentMethod) -> Self {
        Self {
            id: method.id.clone(),
            name: method.name.clone(),
            enabled: if method.enabled { "yes" } else { "no" }.to_string(),
            currencies: method.currencies.join(","),
            deposit_fee: method.fees.deposit.clone(),
            withdrawal_fee: method.fees.withdrawal.clone(),
        }
    }
}

/// Execute `payments list`.
pub async fn execute_list(ctx: &CliContext) -> Result<()> {
    let envelope = ctx.client.list_payment_methods().await?;
    let methods = envelope.data.into_vec();

    if output::is_json() {
        output::json_output(json!({
            "command": "payments.list",
            "methods": methods,
        }));
        return Ok(());
    }

    if methods.is_empty() {
        output::note("No payment methods configured");
        return Ok(());
    }

    let rows: Vec<MethodRow> = methods.iter().map(MethodRow::from_method).collect();
    output::lines(&Table::new(rows).to_string());

    for method in &methods {
        if method.enabled && method.bank_details.is_none() && method.requires_verification {
            output::warning(&format!("{} has no bank details on file", method.name));
        }
    }

    Ok(())
}

/// Execute `payments bank-details <ID> ...`.
///
/// The backend replaces the whole document, so every field not passed
/// here ends up unset on the method.
pub async fn execute_bank_details(ctx: &CliContext, args: &BankDetailsArgs) -> Result<()> {
    context::require_field("account name", &args.account_name)?;
    context::require_field("account number", &args.account_number)?;
    context::require_field("bank name", &args.bank_name)?;

    let details = BankDetails {
        account_name: args.account_name.clone(),
        account_number: args.account_number.clone(),
        bank_name: args.bank_name.clone(),
        routing_number: args.routing_number.clone(),
        swift_code: args.swift.clone(),
        iban: args.iban.clone(),
        bank_address: args.bank_address.clone(),
        instructions: args.instructions.clone().unwrap_or_default(),
    };
    let envelope = ctx.client.update_bank_details(&args.id, &details).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "payments.bank-details",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Bank details updated");
    output::field("Account", &args.account_name);
    output::field("Bank", &args.bank_name);
    if let Some(swift) = &args.swift {
        output::field("SWIFT", swift);
    }
    if let Some(iban) = &args.iban {
        output::field("IBAN", iban);
    }

    Ok(())
}

/// Execute `payments toggle <ID> <on|off>`.
pub async fn execute_toggle(ctx: &CliContext, args: &PaymentToggleArgs) -> Result<()> {
    let enabled = args.state.enabled();
    let envelope = ctx.client.toggle_payment_method(&args.id, enabled).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "payments.toggle",
            "id": args.id,
            "enabled": enabled,
            "message": envelope.message,
        }));
        return Ok(());
    }

    let fallback = if enabled {
        "Payment method enabled"
    } else {
        "Payment method disabled"
    };
    context::done(&envelope, fallback);

    Ok(())
}
