//! Command-line interface definitions.
//!
//! Defines the CLI structure for the pitboss console using `clap`. One
//! subcommand group per backend screen: users, KYC review, finance,
//! trading, currency pairs, payment methods, platform settings, and the
//! monitoring dashboard.

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;
use crate::api::settings::SettingsSection;
use crate::api::types::{AccountType, AdjustmentReason, BalanceDirection, TradeDirection};

/// Operator console for a trading-platform backend
#[derive(Parser, Debug)]
#[command(name = "pitboss")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// On/off argument for toggle commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ToggleState {
    On,
    Off,
}

impl ToggleState {
    #[must_use]
    pub fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Top-level subcommands for the pitboss CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the backend and store the session
    Login(LoginArgs),

    /// Sign out and discard the stored session
    Logout,

    /// Show the signed-in operator profile
    Whoami,

    /// Manage platform users
    #[command(subcommand)]
    Users(UsersCommand),

    /// Review KYC applications
    #[command(subcommand)]
    Kyc(KycCommand),

    /// Manage transactions and wallet adjustments
    #[command(subcommand)]
    Finance(FinanceCommand),

    /// Manage trading accounts and positions
    #[command(subcommand)]
    Trading(TradingCommand),

    /// Manage the currency-pair catalog
    #[command(subcommand)]
    Pairs(PairsCommand),

    /// Manage payment methods
    #[command(subcommand)]
    Payments(PaymentsCommand),

    /// View and edit platform settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Show live system metrics
    Dashboard(DashboardArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `login` subcommand.
///
/// The password is always prompted interactively, never accepted as an
/// argument, so it cannot leak into shell history.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Operator email (prompted when omitted).
    #[arg(long)]
    pub email: Option<String>,
}

/// Subcommands for `pitboss users`.
///
/// Covers the user management screen: paged listing with server-side
/// filters, CSV export, detail view, profile updates, status transitions,
/// and wallet balance corrections.
#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List users with optional filters.
    List(UsersListArgs),
    /// Export the fetched user page as CSV.
    Export(UsersExportArgs),
    /// Show full detail for one user.
    Show(UserIdArg),
    /// Update profile fields.
    Update(UserUpdateArgs),
    /// Change account status with an audit reason.
    SetStatus(UserSetStatusArgs),
    /// Credit or debit a user's wallet balance.
    AdjustBalance(UserAdjustArgs),
}

/// Shared filter arguments for user listing and export.
#[derive(Parser, Debug, Clone)]
pub struct UserFilterArgs {
    /// Page number.
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Rows per page (defaults to console.page_size).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Filter by account status (active, pending, suspended).
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by KYC status.
    #[arg(long)]
    pub kyc_status: Option<String>,

    /// Search name or email.
    #[arg(long)]
    pub search: Option<String>,

    /// Sort field (e.g. createdAt, email).
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction (asc, desc).
    #[arg(long)]
    pub sort_order: Option<String>,
}

/// Arguments for `users list`.
#[derive(Parser, Debug)]
pub struct UsersListArgs {
    #[command(flatten)]
    pub filter: UserFilterArgs,

    /// Interactive filter loop: typed lines update the debounced search,
    /// a blank line re-fetches, `q` quits.
    #[arg(long)]
    pub watch: bool,
}

/// Arguments for `users export`.
#[derive(Parser, Debug)]
pub struct UsersExportArgs {
    #[command(flatten)]
    pub filter: UserFilterArgs,

    /// Output file path (writes to stdout if not specified).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Positional user id argument.
#[derive(Parser, Debug)]
pub struct UserIdArg {
    /// User id.
    pub id: String,
}

/// Arguments for `users update`.
#[derive(Parser, Debug)]
pub struct UserUpdateArgs {
    /// User id.
    pub id: String,

    /// New first name.
    #[arg(long)]
    pub first_name: Option<String>,

    /// New last name.
    #[arg(long)]
    pub last_name: Option<String>,

    /// New email address.
    #[arg(long)]
    pub email: Option<String>,

    /// New phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// New country.
    #[arg(long)]
    pub country: Option<String>,
}

/// Arguments for `users set-status`.
#[derive(Parser, Debug)]
pub struct UserSetStatusArgs {
    /// User id.
    pub id: String,

    /// New status (active, suspended, pending).
    pub status: String,

    /// Audit reason for the transition.
    #[arg(long)]
    pub reason: String,
}

/// Arguments for `users adjust-balance`.
#[derive(Parser, Debug)]
pub struct UserAdjustArgs {
    /// User id.
    pub id: String,

    /// Signed amount; negative values debit the wallet.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Decimal,

    /// Adjustment reason.
    #[arg(long, value_enum)]
    pub reason: AdjustmentReason,

    /// Free-form notes for the audit trail.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Subcommands for `pitboss kyc`.
///
/// The KYC review queue: paged listing, application detail with documents
/// and screening checks, and the three review actions.
#[derive(Subcommand, Debug)]
pub enum KycCommand {
    /// List KYC applications.
    List(KycListArgs),
    /// Show one application with documents and checks.
    Show(KycIdArg),
    /// Approve an application.
    Approve(KycApproveArgs),
    /// Reject an application with a reason.
    Reject(KycReasonArgs),
    /// Send an application back for changes.
    RequestChanges(KycReasonArgs),
}

/// Arguments for `kyc list`.
#[derive(Parser, Debug)]
pub struct KycListArgs {
    /// Page number.
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Rows per page.
    #[arg(long, default_value = "50")]
    pub limit: u32,

    /// Filter by status (pending, approved, rejected, pending_review).
    #[arg(long)]
    pub status: Option<String>,

    /// Search applicant name or email.
    #[arg(long)]
    pub search: Option<String>,
}

/// Positional KYC application id argument.
#[derive(Parser, Debug)]
pub struct KycIdArg {
    /// Application id.
    pub id: String,
}

/// Arguments for `kyc approve`.
#[derive(Parser, Debug)]
pub struct KycApproveArgs {
    /// Application id.
    pub id: String,

    /// Optional reviewer notes.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `kyc reject` and `kyc request-changes`.
#[derive(Parser, Debug)]
pub struct KycReasonArgs {
    /// Application id.
    pub id: String,

    /// Reason sent to the applicant.
    #[arg(long)]
    pub reason: String,
}

/// Subcommands for `pitboss finance`.
///
/// Transaction oversight: the paged transaction list plus approval and
/// rejection of pending verifications, and direct wallet corrections.
#[derive(Subcommand, Debug)]
pub enum FinanceCommand {
    /// List transactions.
    Transactions(TransactionsArgs),
    /// Approve a pending transaction.
    Approve(TxApproveArgs),
    /// Reject a pending transaction with a reason.
    Reject(TxReasonArgs),
}

/// Arguments for `finance transactions`.
#[derive(Parser, Debug)]
pub struct TransactionsArgs {
    /// Page number.
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Rows per page (defaults to console.page_size).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Filter by status (pending, completed, failed).
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by type (deposit, withdrawal, correction).
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Search reference or user.
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by payment method, applied client-side (the backend cannot
    /// filter on this field).
    #[arg(long)]
    pub method: Option<String>,
}

/// Arguments for `finance approve`.
#[derive(Parser, Debug)]
pub struct TxApproveArgs {
    /// Transaction id.
    pub id: String,

    /// Optional reviewer notes.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `finance reject`.
#[derive(Parser, Debug)]
pub struct TxReasonArgs {
    /// Transaction id.
    pub id: String,

    /// Reason sent to the user.
    #[arg(long)]
    pub reason: String,
}

/// Subcommands for `pitboss trading`.
///
/// Trading account CRUD with audited balance adjustments, and position
/// management including admin force-close.
#[derive(Subcommand, Debug)]
pub enum TradingCommand {
    /// List trading accounts.
    Accounts(AccountsListArgs),
    /// Create a trading account for a user.
    CreateAccount(CreateAccountArgs),
    /// Update account parameters.
    UpdateAccount(UpdateAccountArgs),
    /// Delete an account (confirms unless --yes).
    DeleteAccount(DeleteAccountArgs),
    /// Credit or debit an account balance.
    Adjust(AccountAdjustArgs),
    /// List positions.
    Positions(PositionsListArgs),
    /// Open a position on behalf of a user.
    OpenPosition(OpenPositionArgs),
    /// Amend stop loss / take profit on a position.
    UpdatePosition(UpdatePositionArgs),
    /// Force-close a position (confirms unless --yes).
    ClosePosition(ClosePositionArgs),
}

/// Arguments for `trading accounts`.
#[derive(Parser, Debug)]
pub struct AccountsListArgs {
    /// Page number.
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Rows per page (defaults to console.page_size).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Filter by status.
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by account type.
    #[arg(long = "type", value_enum)]
    pub account_type: Option<AccountType>,

    /// Search account number or owner.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `trading create-account`.
#[derive(Parser, Debug)]
pub struct CreateAccountArgs {
    /// Owner user id.
    #[arg(long)]
    pub user: String,

    /// Account type.
    #[arg(long = "type", value_enum, default_value = "live")]
    pub account_type: AccountType,

    /// Account currency.
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Leverage multiplier (50, 100, 200, 500).
    #[arg(long, default_value = "100")]
    pub leverage: u32,

    /// Opening balance.
    #[arg(long, default_value = "0")]
    pub initial_balance: Decimal,

    /// Free-form notes.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `trading update-account`.
#[derive(Parser, Debug)]
pub struct UpdateAccountArgs {
    /// Account id.
    pub id: String,

    /// New leverage multiplier.
    #[arg(long)]
    pub leverage: Option<u32>,

    /// New status.
    #[arg(long)]
    pub status: Option<String>,

    /// Maximum concurrent positions.
    #[arg(long)]
    pub max_positions: Option<u32>,

    /// Free-form notes.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `trading delete-account`.
#[derive(Parser, Debug)]
pub struct DeleteAccountArgs {
    /// Account id.
    pub id: String,

    /// Audit reason for the deletion.
    #[arg(long)]
    pub reason: String,

    /// Also close any open positions on the account.
    #[arg(long)]
    pub force_close: bool,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for `trading adjust`.
#[derive(Parser, Debug)]
pub struct AccountAdjustArgs {
    /// Account id.
    pub id: String,

    /// Adjustment amount (always positive; direction picks the sign).
    #[arg(long)]
    pub amount: Decimal,

    /// Credit or debit.
    #[arg(long, value_enum)]
    pub direction: BalanceDirection,

    /// Adjustment reason.
    #[arg(long, value_enum)]
    pub reason: AdjustmentReason,

    /// Free-form notes for the audit trail.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `trading positions`.
#[derive(Parser, Debug)]
pub struct PositionsListArgs {
    /// Page number.
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Rows per page (defaults to console.page_size).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Filter by status (open, closed).
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by symbol.
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Arguments for `trading open-position`.
#[derive(Parser, Debug)]
pub struct OpenPositionArgs {
    /// Trading account id.
    #[arg(long)]
    pub account: String,

    /// Instrument symbol (e.g. EURUSD).
    #[arg(long)]
    pub symbol: String,

    /// Trade direction.
    #[arg(long, value_enum)]
    pub direction: TradeDirection,

    /// Volume in lots.
    #[arg(long, default_value = "0.01")]
    pub volume: f64,

    /// Open price.
    #[arg(long)]
    pub open_price: f64,

    /// Stop loss price.
    #[arg(long)]
    pub stop_loss: Option<f64>,

    /// Take profit price.
    #[arg(long)]
    pub take_profit: Option<f64>,

    /// Position comment.
    #[arg(long)]
    pub comment: Option<String>,
}

/// Arguments for `trading update-position`.
#[derive(Parser, Debug)]
pub struct UpdatePositionArgs {
    /// Position id.
    pub id: String,

    /// New stop loss price.
    #[arg(long)]
    pub stop_loss: Option<f64>,

    /// New take profit price.
    #[arg(long)]
    pub take_profit: Option<f64>,

    /// New position comment.
    #[arg(long)]
    pub comment: Option<String>,

    /// Free-form notes for the audit trail.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `trading close-position`.
#[derive(Parser, Debug)]
pub struct ClosePositionArgs {
    /// Position id.
    pub id: String,

    /// Reason recorded against the close.
    #[arg(long, default_value = "Admin closed")]
    pub reason: String,

    /// Skip the user notification.
    #[arg(long)]
    pub no_notify: bool,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

/// Subcommands for `pitboss pairs`.
///
/// The currency-pair catalog: CRUD plus the trading-enabled toggle.
#[derive(Subcommand, Debug)]
pub enum PairsCommand {
    /// List currency pairs.
    List(PairsListArgs),
    /// Add a pair to the catalog.
    Create(PairCreateArgs),
    /// Update pair parameters.
    Update(PairUpdateArgs),
    /// Remove a pair (confirms unless --yes).
    Delete(PairDeleteArgs),
    /// Enable or disable trading on a pair.
    Toggle(PairToggleArgs),
}

/// Arguments for `pairs list`.
#[derive(Parser, Debug)]
pub struct PairsListArgs {
    /// Page number.
    #[arg(long)]
    pub page: Option<u32>,

    /// Rows per page.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Filter by category (forex, crypto, commodities, indices).
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `pairs create`.
#[derive(Parser, Debug)]
pub struct PairCreateArgs {
    /// Pair symbol (e.g. EURUSD).
    pub symbol: String,

    /// Base currency (e.g. EUR).
    #[arg(long)]
    pub base: String,

    /// Quote currency (e.g. USD).
    #[arg(long)]
    pub quote: String,

    /// Display name.
    #[arg(long)]
    pub name: Option<String>,

    /// Category (forex, crypto, commodities, indices).
    #[arg(long)]
    pub category: Option<String>,

    /// Pip size (e.g. 0.0001).
    #[arg(long)]
    pub pip_size: Option<f64>,

    /// Price digits.
    #[arg(long)]
    pub digits: Option<u32>,

    /// Minimum lot size.
    #[arg(long)]
    pub min_lot: Option<f64>,

    /// Maximum lot size.
    #[arg(long)]
    pub max_lot: Option<f64>,

    /// Default spread in pips.
    #[arg(long)]
    pub spread: Option<f64>,

    /// Maximum leverage.
    #[arg(long)]
    pub max_leverage: Option<u32>,

    /// Create the pair with trading disabled.
    #[arg(long)]
    pub disabled: bool,
}

/// Arguments for `pairs update`.
#[derive(Parser, Debug)]
pub struct PairUpdateArgs {
    /// Pair id.
    pub id: String,

    /// New display name.
    #[arg(long)]
    pub name: Option<String>,

    /// New category.
    #[arg(long)]
    pub category: Option<String>,

    /// New pip size.
    #[arg(long)]
    pub pip_size: Option<f64>,

    /// New price digits.
    #[arg(long)]
    pub digits: Option<u32>,

    /// New minimum lot size.
    #[arg(long)]
    pub min_lot: Option<f64>,

    /// New maximum lot size.
    #[arg(long)]
    pub max_lot: Option<f64>,

    /// New default spread in pips.
    #[arg(long)]
    pub spread: Option<f64>,

    /// New maximum leverage.
    #[arg(long)]
    pub max_leverage: Option<u32>,
}

/// Arguments for `pairs delete`.
#[derive(Parser, Debug)]
pub struct PairDeleteArgs {
    /// Pair id.
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for `pairs toggle`.
#[derive(Parser, Debug)]
pub struct PairToggleArgs {
    /// Pair id.
    pub id: String,

    /// Desired trading state.
    #[arg(value_enum)]
    pub state: ToggleState,
}

/// Subcommands for `pitboss payments`.
///
/// Payment method management: listing, wholesale bank-detail replacement,
/// and the enabled toggle.
#[derive(Subcommand, Debug)]
pub enum PaymentsCommand {
    /// List payment methods.
    List,
    /// Replace the bank details on a method.
    BankDetails(BankDetailsArgs),
    /// Enable or disable a method.
    Toggle(PaymentToggleArgs),
}

/// Arguments for `payments bank-details`.
///
/// The backend replaces the whole bank-details document, so the three
/// core fields are always required.
#[derive(Parser, Debug)]
pub struct BankDetailsArgs {
    /// Payment method id.
    pub id: String,

    /// Account holder name.
    #[arg(long)]
    pub account_name: String,

    /// Account number.
    #[arg(long)]
    pub account_number: String,

    /// Bank name.
    #[arg(long)]
    pub bank_name: String,

    /// Routing number.
    #[arg(long)]
    pub routing_number: Option<String>,

    /// SWIFT/BIC code.
    #[arg(long)]
    pub swift: Option<String>,

    /// IBAN.
    #[arg(long)]
    pub iban: Option<String>,

    /// Bank address.
    #[arg(long)]
    pub bank_address: Option<String>,

    /// Deposit instructions shown to users.
    #[arg(long)]
    pub instructions: Option<String>,
}

/// Arguments for `payments toggle`.
#[derive(Parser, Debug)]
pub struct PaymentToggleArgs {
    /// Payment method id.
    pub id: String,

    /// Desired state.
    #[arg(value_enum)]
    pub state: ToggleState,
}

/// Subcommands for `pitboss settings`.
///
/// The platform settings document: whole or per-section reads, JSON
/// patches, and the global-halt / maintenance convenience commands.
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show settings (whole document or one section).
    Show(SettingsShowArgs),
    /// Patch a settings section with a JSON document.
    Update(SettingsUpdateArgs),
    /// Raise or lift the global trading halt.
    Halt(HaltArgs),
    /// Enter or leave maintenance mode.
    Maintenance(MaintenanceArgs),
}

/// Arguments for `settings show`.
#[derive(Parser, Debug)]
pub struct SettingsShowArgs {
    /// Section to show (defaults to the whole document).
    #[arg(long, value_enum)]
    pub section: Option<SettingsSection>,
}

/// Arguments for `settings update`.
#[derive(Parser, Debug)]
pub struct SettingsUpdateArgs {
    /// Section to patch.
    #[arg(long, value_enum, default_value = "general")]
    pub section: SettingsSection,

    /// JSON patch document, e.g. '{"minDeposit": 50}'.
    pub patch: String,
}

/// Arguments for `settings halt`.
#[derive(Parser, Debug)]
pub struct HaltArgs {
    /// Desired halt state.
    #[arg(value_enum)]
    pub state: ToggleState,
}

/// Arguments for `settings maintenance`.
#[derive(Parser, Debug)]
pub struct MaintenanceArgs {
    /// Desired maintenance state.
    #[arg(value_enum)]
    pub state: ToggleState,

    /// Message shown to users while maintenance is on.
    #[arg(long)]
    pub message: Option<String>,
}

/// Arguments for the `dashboard` subcommand.
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Keep refreshing until interrupted.
    #[arg(long)]
    pub watch: bool,

    /// Refresh interval in seconds (defaults to console.refresh_interval_secs).
    #[arg(long)]
    pub interval: Option<u64>,
}

/// Subcommands for `pitboss check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Check connectivity to the configured backend.
    Backend,
}

/// Subcommands for `pitboss config`.
///
/// Configuration management: template generation, effective-value
/// display, and validation.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // Tests for CLI structure validation

    #[test]
    fn test_cli_command_factory_builds() {
        // Verifies that the CLI definition is valid
        let _ = Cli::command();
    }

    #[test]
    fn test_cli_has_version() {
        let cmd = Cli::command();
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn test_cli_has_about() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "pitboss");
    }

    // Tests for global flags

    #[test]
    fn test_parse_whoami_defaults() {
        let cli = Cli::try_parse_from(["pitboss", "whoami"]).unwrap();
        assert!(matches!(cli.command, Commands::Whoami));
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_json_flag() {
        let cli = Cli::try_parse_from(["pitboss", "--json", "whoami"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_parse_quiet_flag() {
        let cli = Cli::try_parse_from(["pitboss", "-q", "whoami"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_verbose_count() {
        let cli = Cli::try_parse_from(["pitboss", "-vv", "whoami"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["pitboss", "--color", "never", "whoami"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_parse_config_path_override() {
        let cli = Cli::try_parse_from(["pitboss", "-c", "/tmp/p.toml", "whoami"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/p.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pitboss", "users", "list", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 1);
    }

    // Tests for auth commands

    #[test]
    fn test_parse_login_with_email() {
        let cli = Cli::try_parse_from(["pitboss", "login", "--email", "ops@example.com"]).unwrap();
        if let Commands::Login(args) = cli.command {
            assert_eq!(args.email.as_deref(), Some("ops@example.com"));
        } else {
            panic!("Expected Login command");
        }
    }

    #[test]
    fn test_parse_login_without_email() {
        let cli = Cli::try_parse_from(["pitboss", "login"]).unwrap();
        if let Commands::Login(args) = cli.command {
            assert!(args.email.is_none());
        } else {
            panic!("Expected Login command");
        }
    }

    #[test]
    fn test_parse_logout() {
        let cli = Cli::try_parse_from(["pitboss", "logout"]).unwrap();
        assert!(matches!(cli.command, Commands::Logout));
    }

    // Tests for users commands

    #[test]
    fn test_users_list_defaults() {
        let cli = Cli::try_parse_from(["pitboss", "users", "list"]).unwrap();
        if let Commands::Users(UsersCommand::List(args)) = cli.command {
            assert_eq!(args.filter.page, 1);
            assert!(args.filter.limit.is_none());
            assert!(args.filter.status.is_none());
            assert!(!args.watch);
        } else {
            panic!("Expected Users List command");
        }
    }

    #[test]
    fn test_users_list_filters() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "users",
            "list",
            "--page",
            "3",
            "--status",
            "active",
            "--kyc-status",
            "pending",
            "--search",
            "alice",
        ])
        .unwrap();
        if let Commands::Users(UsersCommand::List(args)) = cli.command {
            assert_eq!(args.filter.page, 3);
            assert_eq!(args.filter.status.as_deref(), Some("active"));
            assert_eq!(args.filter.kyc_status.as_deref(), Some("pending"));
            assert_eq!(args.filter.search.as_deref(), Some("alice"));
        } else {
            panic!("Expected Users List command");
        }
    }

    #[test]
    fn test_users_list_watch_flag() {
        let cli = Cli::try_parse_from(["pitboss", "users", "list", "--watch"]).unwrap();
        if let Commands::Users(UsersCommand::List(args)) = cli.command {
            assert!(args.watch);
        } else {
            panic!("Expected Users List command");
        }
    }

    #[test]
    fn test_users_export_with_output() {
        let cli =
            Cli::try_parse_from(["pitboss", "users", "export", "-o", "users.csv"]).unwrap();
        if let Commands::Users(UsersCommand::Export(args)) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("users.csv")));
        } else {
            panic!("Expected Users Export command");
        }
    }

    #[test]
    fn test_users_show_requires_id() {
        let result = Cli::try_parse_from(["pitboss", "users", "show"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_users_set_status() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "users",
            "set-status",
            "u1",
            "suspended",
            "--reason",
            "chargeback fraud",
        ])
        .unwrap();
        if let Commands::Users(UsersCommand::SetStatus(args)) = cli.command {
            assert_eq!(args.id, "u1");
            assert_eq!(args.status, "suspended");
            assert_eq!(args.reason, "chargeback fraud");
        } else {
            panic!("Expected SetStatus command");
        }
    }

    #[test]
    fn test_users_set_status_requires_reason() {
        let result = Cli::try_parse_from(["pitboss", "users", "set-status", "u1", "suspended"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_users_adjust_balance_negative_amount() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "users",
            "adjust-balance",
            "u1",
            "--amount",
            "-25.50",
            "--reason",
            "correction",
        ])
        .unwrap();
        if let Commands::Users(UsersCommand::AdjustBalance(args)) = cli.command {
            assert_eq!(args.amount, Decimal::new(-2550, 2));
            assert_eq!(args.reason, AdjustmentReason::Correction);
        } else {
            panic!("Expected AdjustBalance command");
        }
    }

    #[test]
    fn test_users_adjust_balance_invalid_reason() {
        let result = Cli::try_parse_from([
            "pitboss",
            "users",
            "adjust-balance",
            "u1",
            "--amount",
            "10",
            "--reason",
            "because",
        ]);
        assert!(result.is_err());
    }

    // Tests for kyc commands

    #[test]
    fn test_kyc_list_default_limit() {
        let cli = Cli::try_parse_from(["pitboss", "kyc", "list"]).unwrap();
        if let Commands::Kyc(KycCommand::List(args)) = cli.command {
            assert_eq!(args.limit, 50);
        } else {
            panic!("Expected Kyc List command");
        }
    }

    #[test]
    fn test_kyc_approve_with_notes() {
        let cli =
            Cli::try_parse_from(["pitboss", "kyc", "approve", "k1", "--notes", "all clear"])
                .unwrap();
        if let Commands::Kyc(KycCommand::Approve(args)) = cli.command {
            assert_eq!(args.id, "k1");
            assert_eq!(args.notes.as_deref(), Some("all clear"));
        } else {
            panic!("Expected Kyc Approve command");
        }
    }

    #[test]
    fn test_kyc_reject_requires_reason() {
        let result = Cli::try_parse_from(["pitboss", "kyc", "reject", "k1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_kyc_request_changes() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "kyc",
            "request-changes",
            "k1",
            "--reason",
            "document is blurry",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Kyc(KycCommand::RequestChanges(_))
        ));
    }

    // Tests for finance commands

    #[test]
    fn test_finance_transactions_type_filter() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "finance",
            "transactions",
            "--type",
            "withdrawal",
            "--method",
            "bank_transfer",
        ])
        .unwrap();
        if let Commands::Finance(FinanceCommand::Transactions(args)) = cli.command {
            assert_eq!(args.kind.as_deref(), Some("withdrawal"));
            assert_eq!(args.method.as_deref(), Some("bank_transfer"));
        } else {
            panic!("Expected Transactions command");
        }
    }

    #[test]
    fn test_finance_reject_requires_reason() {
        let result = Cli::try_parse_from(["pitboss", "finance", "reject", "t1"]);
        assert!(result.is_err());
    }

    // Tests for trading commands

    #[test]
    fn test_trading_create_account_defaults() {
        let cli =
            Cli::try_parse_from(["pitboss", "trading", "create-account", "--user", "u1"]).unwrap();
        if let Commands::Trading(TradingCommand::CreateAccount(args)) = cli.command {
            assert_eq!(args.user, "u1");
            assert_eq!(args.account_type, AccountType::Live);
            assert_eq!(args.currency, "USD");
            assert_eq!(args.leverage, 100);
            assert_eq!(args.initial_balance, Decimal::ZERO);
        } else {
            panic!("Expected CreateAccount command");
        }
    }

    #[test]
    fn test_trading_accounts_type_filter() {
        let cli =
            Cli::try_parse_from(["pitboss", "trading", "accounts", "--type", "demo"]).unwrap();
        if let Commands::Trading(TradingCommand::Accounts(args)) = cli.command {
            assert_eq!(args.account_type, Some(AccountType::Demo));
        } else {
            panic!("Expected Accounts command");
        }
    }

    #[test]
    fn test_trading_delete_account_flags() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "trading",
            "delete-account",
            "a1",
            "--reason",
            "duplicate account",
            "--force-close",
            "--yes",
        ])
        .unwrap();
        if let Commands::Trading(TradingCommand::DeleteAccount(args)) = cli.command {
            assert!(args.force_close);
            assert!(args.yes);
        } else {
            panic!("Expected DeleteAccount command");
        }
    }

    #[test]
    fn test_trading_adjust_direction() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "trading",
            "adjust",
            "a1",
            "--amount",
            "100",
            "--direction",
            "debit",
            "--reason",
            "fee",
        ])
        .unwrap();
        if let Commands::Trading(TradingCommand::Adjust(args)) = cli.command {
            assert_eq!(args.direction, BalanceDirection::Debit);
            assert_eq!(args.reason, AdjustmentReason::Fee);
        } else {
            panic!("Expected Adjust command");
        }
    }

    #[test]
    fn test_trading_open_position() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "trading",
            "open-position",
            "--account",
            "a1",
            "--symbol",
            "EURUSD",
            "--direction",
            "buy",
            "--open-price",
            "1.0842",
        ])
        .unwrap();
        if let Commands::Trading(TradingCommand::OpenPosition(args)) = cli.command {
            assert_eq!(args.symbol, "EURUSD");
            assert_eq!(args.direction, TradeDirection::Buy);
            assert_eq!(args.volume, 0.01);
            assert_eq!(args.open_price, 1.0842);
        } else {
            panic!("Expected OpenPosition command");
        }
    }

    #[test]
    fn test_trading_close_position_default_reason() {
        let cli = Cli::try_parse_from(["pitboss", "trading", "close-position", "p1"]).unwrap();
        if let Commands::Trading(TradingCommand::ClosePosition(args)) = cli.command {
            assert_eq!(args.reason, "Admin closed");
            assert!(!args.no_notify);
            assert!(!args.yes);
        } else {
            panic!("Expected ClosePosition command");
        }
    }

    // Tests for pairs commands

    #[test]
    fn test_pairs_create_required_currencies() {
        let result = Cli::try_parse_from(["pitboss", "pairs", "create", "EURUSD"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_pairs_create_full() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "pairs",
            "create",
            "EURUSD",
            "--base",
            "EUR",
            "--quote",
            "USD",
            "--pip-size",
            "0.0001",
            "--digits",
            "5",
        ])
        .unwrap();
        if let Commands::Pairs(PairsCommand::Create(args)) = cli.command {
            assert_eq!(args.symbol, "EURUSD");
            assert_eq!(args.base, "EUR");
            assert_eq!(args.quote, "USD");
            assert_eq!(args.pip_size, Some(0.0001));
            assert_eq!(args.digits, Some(5));
            assert!(!args.disabled);
        } else {
            panic!("Expected Pairs Create command");
        }
    }

    #[test]
    fn test_pairs_toggle_state() {
        let cli = Cli::try_parse_from(["pitboss", "pairs", "toggle", "p1", "off"]).unwrap();
        if let Commands::Pairs(PairsCommand::Toggle(args)) = cli.command {
            assert_eq!(args.state, ToggleState::Off);
            assert!(!args.state.enabled());
        } else {
            panic!("Expected Pairs Toggle command");
        }
    }

    #[test]
    fn test_pairs_toggle_invalid_state() {
        let result = Cli::try_parse_from(["pitboss", "pairs", "toggle", "p1", "maybe"]);
        assert!(result.is_err());
    }

    // Tests for payments commands

    #[test]
    fn test_payments_list() {
        let cli = Cli::try_parse_from(["pitboss", "payments", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Payments(PaymentsCommand::List)
        ));
    }

    #[test]
    fn test_payments_bank_details_requires_core_fields() {
        let result = Cli::try_parse_from([
            "pitboss",
            "payments",
            "bank-details",
            "m1",
            "--account-name",
            "Platform Ltd",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_payments_bank_details_full() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "payments",
            "bank-details",
            "m1",
            "--account-name",
            "Platform Ltd",
            "--account-number",
            "12345678",
            "--bank-name",
            "First Bank",
            "--swift",
            "FIRBGB22",
        ])
        .unwrap();
        if let Commands::Payments(PaymentsCommand::BankDetails(args)) = cli.command {
            assert_eq!(args.bank_name, "First Bank");
            assert_eq!(args.swift.as_deref(), Some("FIRBGB22"));
            assert!(args.iban.is_none());
        } else {
            panic!("Expected BankDetails command");
        }
    }

    #[test]
    fn test_payments_toggle_on() {
        let cli = Cli::try_parse_from(["pitboss", "payments", "toggle", "m1", "on"]).unwrap();
        if let Commands::Payments(PaymentsCommand::Toggle(args)) = cli.command {
            assert!(args.state.enabled());
        } else {
            panic!("Expected Payments Toggle command");
        }
    }

    // Tests for settings commands

    #[test]
    fn test_settings_show_whole_document() {
        let cli = Cli::try_parse_from(["pitboss", "settings", "show"]).unwrap();
        if let Commands::Settings(SettingsCommand::Show(args)) = cli.command {
            assert!(args.section.is_none());
        } else {
            panic!("Expected Settings Show command");
        }
    }

    #[test]
    fn test_settings_show_section() {
        let cli =
            Cli::try_parse_from(["pitboss", "settings", "show", "--section", "trading"]).unwrap();
        if let Commands::Settings(SettingsCommand::Show(args)) = cli.command {
            assert_eq!(args.section, Some(SettingsSection::Trading));
        } else {
            panic!("Expected Settings Show command");
        }
    }

    #[test]
    fn test_settings_update_default_section() {
        let cli =
            Cli::try_parse_from(["pitboss", "settings", "update", r#"{"minDeposit":50}"#]).unwrap();
        if let Commands::Settings(SettingsCommand::Update(args)) = cli.command {
            assert_eq!(args.section, SettingsSection::General);
            assert_eq!(args.patch, r#"{"minDeposit":50}"#);
        } else {
            panic!("Expected Settings Update command");
        }
    }

    #[test]
    fn test_settings_halt_on() {
        let cli = Cli::try_parse_from(["pitboss", "settings", "halt", "on"]).unwrap();
        if let Commands::Settings(SettingsCommand::Halt(args)) = cli.command {
            assert!(args.state.enabled());
        } else {
            panic!("Expected Settings Halt command");
        }
    }

    #[test]
    fn test_settings_maintenance_with_message() {
        let cli = Cli::try_parse_from([
            "pitboss",
            "settings",
            "maintenance",
            "on",
            "--message",
            "back at 06:00 UTC",
        ])
        .unwrap();
        if let Commands::Settings(SettingsCommand::Maintenance(args)) = cli.command {
            assert!(args.state.enabled());
            assert_eq!(args.message.as_deref(), Some("back at 06:00 UTC"));
        } else {
            panic!("Expected Settings Maintenance command");
        }
    }

    // Tests for dashboard and check commands

    #[test]
    fn test_dashboard_defaults() {
        let cli = Cli::try_parse_from(["pitboss", "dashboard"]).unwrap();
        if let Commands::Dashboard(args) = cli.command {
            assert!(!args.watch);
            assert!(args.interval.is_none());
        } else {
            panic!("Expected Dashboard command");
        }
    }

    #[test]
    fn test_dashboard_watch_with_interval() {
        let cli =
            Cli::try_parse_from(["pitboss", "dashboard", "--watch", "--interval", "10"]).unwrap();
        if let Commands::Dashboard(args) = cli.command {
            assert!(args.watch);
            assert_eq!(args.interval, Some(10));
        } else {
            panic!("Expected Dashboard command");
        }
    }

    #[test]
    fn test_check_backend_command() {
        let cli = Cli::try_parse_from(["pitboss", "check", "backend"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Backend)
        ));
    }

    // Tests for config commands

    #[test]
    fn test_config_init_command() {
        let cli = Cli::try_parse_from(["pitboss", "config", "init"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommand::Init(_))
        ));
    }

    #[test]
    fn test_config_init_with_force() {
        let cli = Cli::try_parse_from(["pitboss", "config", "init", "--force"]).unwrap();
        if let Commands::Config(ConfigCommand::Init(args)) = cli.command {
            assert!(args.force);
        } else {
            panic!("Expected Config Init command");
        }
    }

    #[test]
    fn test_config_show_command() {
        let cli = Cli::try_parse_from(["pitboss", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommand::Show)
        ));
    }

    #[test]
    fn test_config_validate_command() {
        let cli = Cli::try_parse_from(["pitboss", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommand::Validate)
        ));
    }

    // Tests for error cases

    #[test]
    fn test_unknown_command_fails() {
        let result = Cli::try_parse_from(["pitboss", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand() {
        let result = Cli::try_parse_from(["pitboss"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_amount_type() {
        let result = Cli::try_parse_from([
            "pitboss",
            "users",
            "adjust-balance",
            "u1",
            "--amount",
            "lots",
            "--reason",
            "bonus",
        ]);
        assert!(result.is_err());
    }
}
