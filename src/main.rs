//! Binary entry point: parse the command line, build the context, dispatch.
//!
//! `config` subcommands run before any backend client exists so a broken
//! or missing config file can still be inspected and repaired. Every other
//! command gets a [`CliContext`] built from the loaded configuration.

use clap::Parser;

use pitboss::cli::command::{
    CheckCommand, Cli, ColorChoice, Commands, ConfigCommand, FinanceCommand, KycCommand,
    PairsCommand, PaymentsCommand, SettingsCommand, TradingCommand, UsersCommand,
};
use pitboss::cli::context::CliContext;
use pitboss::cli::output::{self, OutputConfig};
use pitboss::cli::{
    auth, check, config as config_cli, dashboard, finance, kyc, pairs, payments, settings, trading,
    users,
};
use pitboss::config::Config;
use pitboss::error::{Error, Result};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = run(&cli).await {
        render_failure(&e);
        std::process::exit(1);
    }
}

/// Print the failure, with connectivity hints when the backend was never
/// reached. Watch loops report their own errors inline and keep running;
/// this path is for one-shot commands only.
fn render_failure(err: &Error) {
    output::error(&err.to_string());
    if let Error::Api(api) = err {
        if api.is_connectivity() {
            output::hint("check that the backend is running and listening");
            output::hint("verify backend.base_url in your config (pitboss config show)");
            output::hint(&format!(
                "run {} to diagnose connectivity",
                output::highlight("pitboss check backend")
            ));
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Config management never needs a backend client or a loaded config.
    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Init(args) => config_cli::execute_init(&args.path, args.force),
            ConfigCommand::Show => config_cli::execute_show(&cli.config),
            ConfigCommand::Validate => config_cli::execute_validate(&cli.config),
        };
    }

    let config = Config::load_or_default(&cli.config)?;
    config.init_logging(cli.verbose);
    let ctx = CliContext::new(config)?;

    match &cli.command {
        Commands::Login(args) => auth::execute_login(&ctx, args).await,
        Commands::Logout => auth::execute_logout(&ctx),
        Commands::Whoami => auth::execute_whoami(&ctx),
        Commands::Users(command) => match command {
            UsersCommand::List(args) => users::execute_list(&ctx, args).await,
            UsersCommand::Export(args) => users::execute_export(&ctx, args).await,
            UsersCommand::Show(args) => users::execute_show(&ctx, args).await,
            UsersCommand::Update(args) => users::execute_update(&ctx, args).await,
            UsersCommand::SetStatus(args) => users::execute_set_status(&ctx, args).await,
            UsersCommand::AdjustBalance(args) => users::execute_adjust_balance(&ctx, args).await,
        },
        Commands::Kyc(command) => match command {
            KycCommand::List(args) => kyc::execute_list(&ctx, args).await,
            KycCommand::Show(args) => kyc::execute_show(&ctx, args).await,
            KycCommand::Approve(args) => kyc::execute_approve(&ctx, args).await,
            KycCommand::Reject(args) => kyc::execute_reject(&ctx, args).await,
            KycCommand::RequestChanges(args) => kyc::execute_request_changes(&ctx, args).await,
        },
        Commands::Finance(command) => match command {
            FinanceCommand::Transactions(args) => finance::execute_transactions(&ctx, args).await,
            FinanceCommand::Approve(args) => finance::execute_approve(&ctx, args).await,
            FinanceCommand::Reject(args) => finance::execute_reject(&ctx, args).await,
        },
        Commands::Trading(command) => match command {
            TradingCommand::Accounts(args) => trading::execute_accounts(&ctx, args).await,
            TradingCommand::CreateAccount(args) => {
                trading::execute_create_account(&ctx, args).await
            }
            TradingCommand::UpdateAccount(args) => {
                trading::execute_update_account(&ctx, args).await
            }
            TradingCommand::DeleteAccount(args) => {
                trading::execute_delete_account(&ctx, args).await
            }
            TradingCommand::Adjust(args) => trading::execute_adjust(&ctx, args).await,
            TradingCommand::Positions(args) => trading::execute_positions(&ctx, args).await,
            TradingCommand::OpenPosition(args) => trading::execute_open_position(&ctx, args).await,
            TradingCommand::UpdatePosition(args) => {
                trading::execute_update_position(&ctx, args).await
            }
            TradingCommand::ClosePosition(args) => {
                trading::execute_close_position(&ctx, args).await
            }
        },
        Commands::Pairs(command) => match command {
            PairsCommand::List(args) => pairs::execute_list(&ctx, args).await,
            PairsCommand::Create(args) => pairs::execute_create(&ctx, args).await,
            PairsCommand::Update(args) => pairs::execute_update(&ctx, args).await,
            PairsCommand::Delete(args) => pairs::execute_delete(&ctx, args).await,
            PairsCommand::Toggle(args) => pairs::execute_toggle(&ctx, args).await,
        },
        Commands::Payments(command) => match command {
            PaymentsCommand::List => payments::execute_list(&ctx).await,
            PaymentsCommand::BankDetails(args) => payments::execute_bank_details(&ctx, args).await,
            PaymentsCommand::Toggle(args) => payments::execute_toggle(&ctx, args).await,
        },
        Commands::Settings(command) => match command {
            SettingsCommand::Show(args) => settings::execute_show(&ctx, args).await,
            SettingsCommand::Update(args) => settings::execute_update(&ctx, args).await,
            SettingsCommand::Halt(args) => settings::execute_halt(&ctx, args).await,
            SettingsCommand::Maintenance(args) => settings::execute_maintenance(&ctx, args).await,
        },
        Commands::Dashboard(args) => dashboard::execute(&ctx, args).await,
        Commands::Check(command) => match command {
            CheckCommand::Backend => check::execute_backend(&ctx).await,
        },
        // Already dispatched above.
        Commands::Config(_) => Ok(()),
    }
}
