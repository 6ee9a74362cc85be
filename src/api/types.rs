//! Wire types for the admin backend.
//!
//! Field names mirror the backend's camelCase JSON. Money fields use
//! [`rust_decimal::Decimal`] and tolerate the three encodings the backend
//! emits for Decimal128 values.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serde adapter for Mongo-flavored money fields.
///
/// Accepts `{"$numberDecimal": "123.45"}`, `"123.45"`, and `123.45`.
/// Serializes back as a plain decimal string.
pub(crate) mod mongo_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum Raw {
        Extended {
            #[serde(rename = "$numberDecimal")]
            value: String,
        },
        Text(String),
        Number(serde_json::Number),
    }

    pub(super) fn to_decimal<E>(raw: Raw) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        let text = match raw {
            Raw::Extended { value } | Raw::Text(value) => value,
            Raw::Number(number) => number.to_string(),
        };
        text.parse::<Decimal>().map_err(serde::de::Error::custom)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        to_decimal(Raw::deserialize(deserializer)?)
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

/// [`mongo_decimal`] for optional fields.
pub(crate) mod mongo_decimal_opt {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::mongo_decimal::{to_decimal, Raw};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            Some(raw) => to_decimal(raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(decimal) => serializer.collect_str(decimal),
            None => serializer.serialize_none(),
        }
    }
}

/// Deserialize a field the backend types as `string | number` into a string.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

// ==================== Auth ====================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Admin profile as returned by the auth routes and cached in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub two_factor_enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub user: AdminUser,
    pub tokens: AuthTokens,
    #[serde(default)]
    pub session_id: Option<String>,
}

// ==================== Shared list plumbing ====================

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_records: u64,
    pub records_per_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// List metadata. User-facing lists carry `pagination`, the trading lists
/// only a flat `total`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Populated user reference; some routes send the bare id instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Populated(UserSummary),
    Id(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserRef {
    /// Best human-readable label for tables.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Populated(user) => user.email.clone(),
            Self::Id(id) => id.clone(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Populated(user) => &user.id,
            Self::Id(id) => id,
        }
    }
}

/// Populated trading account reference, or the bare id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountRef {
    Populated(AccountSummary),
    Id(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub account_number: Option<String>,
}

impl AccountRef {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Populated(account) => account
                .account_number
                .clone()
                .unwrap_or_else(|| account.id.clone()),
            Self::Id(id) => id.clone(),
        }
    }
}

// ==================== Users ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub status: String,
    #[serde(default)]
    pub kyc_status: Option<String>,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default, with = "mongo_decimal_opt")]
    pub wallet_balance: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub notifications: Option<NotificationPreferences>,
    // Present only on the detail route.
    #[serde(default)]
    pub statistics: Option<UserStatistics>,
    #[serde(default)]
    pub recent_transactions: Option<Vec<RecentTransaction>>,
    #[serde(default)]
    pub recent_orders: Option<Vec<RecentOrder>>,
}

impl User {
    /// Full name, falling back to first/last, then the email.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.full_name {
            if !name.is_empty() {
                return name.clone();
            }
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }

    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.wallet_balance.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    #[serde(default)]
    pub deposits: FlowTotals,
    #[serde(default)]
    pub withdrawals: FlowTotals,
    #[serde(default)]
    pub total_trades: u64,
    #[serde(default)]
    pub open_positions: u64,
    #[serde(default)]
    pub accounts_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowTotals {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "mongo_decimal")]
    pub amount: Decimal,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub direction: String,
    #[serde(default)]
    pub volume: f64,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-channel notification opt-ins on the user document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub sms: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub trade_alerts: bool,
    #[serde(default)]
    pub price_alerts: bool,
    #[serde(default)]
    pub account_alerts: bool,
    #[serde(default)]
    pub marketing_emails: bool,
}

impl NotificationPreferences {
    /// Channels and alert kinds currently switched on.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        let mut on = Vec::new();
        if self.email {
            on.push("email");
        }
        if self.sms {
            on.push("sms");
        }
        if self.push {
            on.push("push");
        }
        if self.trade_alerts {
            on.push("trade alerts");
        }
        if self.price_alerts {
            on.push("price alerts");
        }
        if self.account_alerts {
            on.push("account alerts");
        }
        if self.marketing_emails {
            on.push("marketing emails");
        }
        on
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub metadata: Option<ListMetadata>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

// ==================== KYC ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycApplication {
    #[serde(rename = "_id")]
    pub id: String,
    pub kyc_id: String,
    #[serde(rename = "userId")]
    pub user: UserRef,
    pub verification_level: String,
    pub status: String,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub files: Vec<Value>,
    #[serde(default)]
    pub rejection_reasons: Vec<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub checks: Option<KycChecks>,
    #[serde(default)]
    pub is_expired: bool,
    // Present only on the detail route.
    #[serde(default)]
    pub documents: Option<KycDocuments>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
}

/// Automated screening results attached to an application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycChecks {
    #[serde(default)]
    pub duplicate_document: bool,
    #[serde(default)]
    pub blacklisted: bool,
    #[serde(default)]
    pub watchlist: bool,
    #[serde(default)]
    pub aml_screening: bool,
    #[serde(default)]
    pub sanctions_list: bool,
}

impl KycChecks {
    /// True when any screening check was flagged.
    #[must_use]
    pub fn any_flagged(&self) -> bool {
        self.duplicate_document
            || self.blacklisted
            || self.watchlist
            || self.aml_screening
            || self.sanctions_list
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycDocuments {
    #[serde(default)]
    pub document_front: Option<KycFile>,
    #[serde(default)]
    pub document_back: Option<KycFile>,
    #[serde(default)]
    pub selfie: Option<KycFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycFile {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycPage {
    #[serde(default)]
    pub applications: Vec<KycApplication>,
    #[serde(default)]
    pub metadata: Option<ListMetadata>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KycListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Review decision sent for a KYC application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewAction {
    Approve,
    Reject,
    RequestChanges,
}

impl ReviewAction {
    /// Reject and request-changes must carry a reason; approval notes are
    /// optional.
    #[must_use]
    pub fn requires_reason(self) -> bool {
        !matches!(self, Self::Approve)
    }
}

// ==================== Finance ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(rename = "userId")]
    pub user: UserRef,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "mongo_decimal")]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    pub status: String,
    #[serde(default, with = "mongo_decimal_opt")]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_pending: bool,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_failed: bool,
}

impl Transaction {
    /// Reference shown to operators, preferring the human-readable id.
    #[must_use]
    pub fn reference(&self) -> &str {
        self.transaction_id.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub metadata: Option<ListMetadata>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Why a wallet balance was adjusted. Mirrors the backend's accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentReason {
    Bonus,
    Correction,
    Refund,
    Adjustment,
    Promotion,
    Compensation,
    Fee,
    Other,
}

/// Whether a trading-account adjustment adds or removes funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BalanceDirection {
    Credit,
    Debit,
}

// ==================== Trading ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Live,
    Demo,
}

impl AccountType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Demo => "demo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingAccount {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(rename = "userId")]
    pub user: UserRef,
    pub account_type: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, with = "mongo_decimal_opt")]
    pub balance: Option<Decimal>,
    #[serde(default, with = "mongo_decimal_opt")]
    pub equity: Option<Decimal>,
    #[serde(default)]
    pub leverage: Option<u32>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user: UserRef,
    #[serde(rename = "accountId")]
    pub account: AccountRef,
    pub symbol: String,
    pub direction: String,
    pub volume: f64,
    pub open_price: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default, rename = "unrealizedPL")]
    pub unrealized_pl: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsPage {
    #[serde(default)]
    pub accounts: Vec<TradingAccount>,
    #[serde(default)]
    pub metadata: Option<ListMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsPage {
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub metadata: Option<ListMetadata>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

// ==================== Currency pairs ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    #[serde(rename = "_id")]
    pub id: String,
    pub symbol: String,
    pub base_currency: String,
    pub quote_currency: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub trading_enabled: bool,
    #[serde(default)]
    pub pip_size: Option<f64>,
    #[serde(default)]
    pub digits: Option<u32>,
    #[serde(default)]
    pub min_lot_size: Option<f64>,
    #[serde(default)]
    pub max_lot_size: Option<f64>,
    #[serde(default)]
    pub default_spread: Option<f64>,
    #[serde(default)]
    pub max_leverage: Option<u32>,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Pair list payload; older routes return the bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PairsPayload {
    Wrapped {
        #[serde(alias = "currencyPairs")]
        pairs: Vec<CurrencyPair>,
        #[serde(default)]
        metadata: Option<ListMetadata>,
    },
    Bare(Vec<CurrencyPair>),
}

impl PairsPayload {
    #[must_use]
    pub fn into_parts(self) -> (Vec<CurrencyPair>, Option<ListMetadata>) {
        match self {
            Self::Wrapped { pairs, metadata } => (pairs, metadata),
            Self::Bare(pairs) => (pairs, None),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// ==================== Payment methods ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default)]
    pub fees: PaymentFees,
    #[serde(default)]
    pub limits: Option<PaymentLimits>,
    #[serde(default)]
    pub processing_time: Option<String>,
    #[serde(default)]
    pub requires_verification: bool,
    #[serde(default)]
    pub bank_details: Option<BankDetails>,
    #[serde(default)]
    pub display_order: i32,
}

/// Deposit and withdrawal fees; the backend sends either a number or a
/// preformatted string ("1.5%", "free").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentFees {
    #[serde(default, deserialize_with = "string_or_number")]
    pub deposit: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub withdrawal: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentLimits {
    #[serde(default)]
    pub deposit: Option<AmountRange>,
    #[serde(default)]
    pub withdrawal: Option<AmountRange>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmountRange {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_address: Option<String>,
    #[serde(default)]
    pub instructions: String,
}

/// Payment method list payload; tolerates the wrapped and bare shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PaymentMethodsPayload {
    Wrapped {
        #[serde(rename = "paymentMethods")]
        payment_methods: Vec<PaymentMethod>,
    },
    Bare(Vec<PaymentMethod>),
}

impl PaymentMethodsPayload {
    #[must_use]
    pub fn into_vec(self) -> Vec<PaymentMethod> {
        match self {
            Self::Wrapped { payment_methods } => payment_methods,
            Self::Bare(methods) => methods,
        }
    }
}

// ==================== Settings ====================

/// Platform settings document served by the settings root route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    #[serde(default)]
    pub global_trading_halt: Option<TradingHalt>,
    #[serde(default)]
    pub maintenance_mode: Option<MaintenanceMode>,
    #[serde(default)]
    pub trading_parameters: Option<Value>,
    #[serde(default)]
    pub risk_management: Option<Value>,
    #[serde(default)]
    pub financial_settings: Option<Value>,
    #[serde(default)]
    pub notification_settings: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingHalt {
    #[serde(default)]
    pub is_halted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceMode {
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub affected_services: Vec<String>,
}

// ==================== Monitoring ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub system: Option<SystemInfo>,
    #[serde(default)]
    pub database: Option<DatabaseInfo>,
    #[serde(default)]
    pub users: Option<UserCounts>,
    #[serde(default)]
    pub trading: Option<TradingCounts>,
    #[serde(default)]
    pub performance: Option<PerformanceInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub uptime: Option<UptimeInfo>,
    #[serde(default)]
    pub memory: Option<MemoryInfo>,
    #[serde(default)]
    pub cpu: Option<CpuInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UptimeInfo {
    #[serde(default)]
    pub system: f64,
    #[serde(default)]
    pub process: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub free: u64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub usage_percentage: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuInfo {
    #[serde(default)]
    pub cores: u32,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub load: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseInfo {
    #[serde(default)]
    pub mongodb: Option<MongoInfo>,
    #[serde(default)]
    pub redis: Option<RedisInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MongoInfo {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub collections: u64,
    #[serde(default)]
    pub documents: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedisInfo {
    #[serde(default)]
    pub connected: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub online: u64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub active_percentage: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradingCounts {
    #[serde(default)]
    pub trades: Option<TotalToday>,
    #[serde(default)]
    pub volume: Option<TotalTodayF64>,
    #[serde(default)]
    pub positions: Option<PositionCounts>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TotalToday {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub today: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TotalTodayF64 {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub today: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionCounts {
    #[serde(default)]
    pub open: u64,
    #[serde(default)]
    pub profitable: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceInfo {
    #[serde(default)]
    pub health_score: f64,
    #[serde(default)]
    pub errors: Option<ErrorCounts>,
    #[serde(default)]
    pub response_time: Option<ResponseTimes>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorCounts {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseTimes {
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub p95: f64,
    #[serde(default)]
    pub p99: f64,
}
