//! Handlers for the `pairs` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::api::pairs::PairUpsert;
use crate::api::types::{CurrencyPair, PairListQuery};
use crate::cli::command::{
    PairCreateArgs, PairDeleteArgs, PairToggleArgs, PairUpdateArgs, PairsListArgs,
};
use crate::cli::context::{self, CliContext};
use crate::cli::output;
use crate::error::Result;
use crate::view::Page;

#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spread")]
    spread: String,
    #[tabled(rename = "Max Lev")]
    leverage: String,
    #[tabled(rename = "Trading")]
    trading: String,
}

impl PairRow {
    fn from_pair(pair: &CurrencyPair) -> Self {
        Self {
            symbol: pair.symbol.clone(),
            name: pair.name.clone().unwrap_or_default(),
            category: pair.category.clone().unwrap_or_else(|| "-".to_string()),
            spread: pair
                .default_spread
                .map(|s| format!("{s}"))
                .unwrap_or_else(|| "-".to_string()),
            leverage: pair
                .max_leverage
                .map(|l| format!("1:{l}"))
                .unwrap_or_else(|| "-".to_string()),
            trading: if pair.trading_enabled { "on" } else { "off" }.to_string(),
        }
    }
}

/// Execute `pairs list`.
pub async fn execute_list(ctx: &CliContext, args: &PairsListArgs) -> Result<()> {
    let query = PairListQuery {
        page: args.page,
        limit: args.limit,
        category: args.category.clone(),
    };
    let envelope = ctx.client.list_currency_pairs(&query).await?;
    let (pairs, metadata) = envelope.data.into_parts();
    let page = Page::from_metadata(pairs, metadata);

    if output::is_json() {
        output::json_output(json!({
            "command": "pairs.list",
            "total": page.total(),
            "pairs": page.items,
        }));
        return Ok(());
    }

    if page.is_empty() {
        output::note("No pairs in the catalog");
        return Ok(());
    }

    let rows: Vec<PairRow> = page.items.iter().map(PairRow::from_pair).collect();
    output::lines(&Table::new(rows).to_string());

    let disabled = page.items.iter().filter(|p| !p.trading_enabled).count();
    if disabled > 0 {
        output::note(&format!("{disabled} pair(s) currently disabled"));
    }
    if page.show_pagination() {
        if let Some(label) = page.range_label() {
            output::note(&label);
        }
    }

    Ok(())
}

/// Execute `pairs create <SYMBOL> --base X --quote Y [...]`.
pub async fn execute_create(ctx: &CliContext, args: &PairCreateArgs) -> Result<()> {
    context::require_field("symbol", &args.symbol)?;
    context::require_field("base currency", &args.base)?;
    context::require_field("quote currency", &args.quote)?;

    let pair = PairUpsert {
        symbol: Some(args.symbol.clone()),
        base_currency: Some(args.base.clone()),
        quote_currency: Some(args.quote.clone()),
        name: args.name.clone(),
        category: args.category.clone(),
        pip_size: args.pip_size,
        digits: args.digits,
        min_lot_size: args.min_lot,
        max_lot_size: args.max_lot,
        default_spread: args.spread,
        max_leverage: args.max_leverage,
        trading_enabled: Some(!args.disabled),
    };
    let envelope = ctx.client.create_currency_pair(&pair).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "pairs.create",
            "symbol": args.symbol,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, &format!("Pair {} created", args.symbol));
    if args.disabled {
        output::note("created with trading disabled");
    }

    Ok(())
}

/// Execute `pairs update <ID> [fields]`.
pub async fn execute_update(ctx: &CliContext, args: &PairUpdateArgs) -> Result<()> {
    let pair = PairUpsert {
        name: args.name.clone(),
        category: args.category.clone(),
        pip_size: args.pip_size,
        digits: args.digits,
        min_lot_size: args.min_lot,
        max_lot_size: args.max_lot,
        default_spread: args.spread,
        max_leverage: args.max_leverage,
        ..PairUpsert::default()
    };
    context::require_changes(
        pair.name.is_some()
            || pair.category.is_some()
            || pair.pip_size.is_some()
            || pair.digits.is_some()
            || pair.min_lot_size.is_some()
            || pair.max_lot_size.is_some()
            || pair.default_spread.is_some()
            || pair.max_leverage.is_some(),
    )?;

    let envelope = ctx.client.update_currency_pair(&args.id, &pair).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "pairs.update",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Pair updated");
    Ok(())
}

/// Execute `pairs delete <ID>`. Destructive; confirms unless `--yes`.
pub async fn execute_delete(ctx: &CliContext, args: &PairDeleteArgs) -> Result<()> {
    let prompt = format!("Remove pair {} from the catalog?", args.id);
    if !context::confirm(&prompt, args.yes)? {
        output::warning("Cancelled");
        return Ok(());
    }

    let envelope = ctx.client.delete_currency_pair(&args.id).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "pairs.delete",
            "id": args.id,
            "message": envelope.message,
        }));
        return Ok(());
    }

    context::done(&envelope, "Pair deleted");
    Ok(())
}

/// Execute `pairs toggle <ID> <on|off>`.
pub async fn execute_toggle(ctx: &CliContext, args: &PairToggleArgs) -> Result<()> {
    let enabled = args.state.enabled();
    let envelope = ctx.client.toggle_currency_pair(&args.id, enabled).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "pairs.toggle",
            "id": args.id,
            "trading_enabled": enabled,
            "message": envelope.message,
        }));
        return Ok(());
    }

    let fallback = if enabled {
        "Trading enabled"
    } else {
        "Trading disabled"
    };
    context::done(&envelope, fallback);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pair_row_shows_toggle_state() {
        let pair: CurrencyPair = serde_json::from_value(json!({
            "_id": "p1",
            "symbol": "EURUSD",
            "baseCurrency": "EUR",
            "quoteCurrency": "USD",
            "name": "Euro / US Dollar",
            "category": "major",
            "tradingEnabled": false,
            "maxLeverage": 500,
        }))
        .unwrap();

        let row = PairRow::from_pair(&pair);
        assert_eq!(row.trading, "off");
        assert_eq!(row.leverage, "1:500");
    }
}
