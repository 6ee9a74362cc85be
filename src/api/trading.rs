//! Trading administration calls: accounts and positions.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::types::{
    mongo_decimal, AccountListQuery, AccountType, AccountsPage, AdjustmentReason,
    BalanceDirection, PositionListQuery, PositionsPage, TradeDirection,
};
use super::{ApiClient, ApiResult, Envelope};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub user_id: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub currency: String,
    pub leverage: u32,
    #[serde(with = "mongo_decimal")]
    pub initial_balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leverage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_positions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Credit or debit applied to a trading account balance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAdjustment {
    #[serde(with = "mongo_decimal")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub direction: BalanceDirection,
    pub reason: AdjustmentReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPosition {
    pub account_id: String,
    pub symbol: String,
    pub direction: TradeDirection,
    pub volume: f64,
    pub open_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAccountBody<'a> {
    reason: &'a str,
    force_close: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ForceCloseBody<'a> {
    reason: &'a str,
    notify_user: bool,
}

impl ApiClient {
    pub async fn list_accounts(&self, query: &AccountListQuery) -> ApiResult<Envelope<AccountsPage>> {
        self.get_with("/admin/trading/accounts", query).await
    }

    pub async fn create_account(&self, account: &CreateAccount) -> ApiResult<Envelope<Value>> {
        self.post("/admin/trading/accounts", account).await
    }

    pub async fn update_account(
        &self,
        account_id: &str,
        update: &AccountUpdate,
    ) -> ApiResult<Envelope<Value>> {
        self.put(&format!("/admin/trading/accounts/{account_id}"), update)
            .await
    }

    /// Delete an account. `force_close` also closes any open positions on
    /// it; without it the backend refuses accounts with open exposure.
    pub async fn delete_account(
        &self,
        account_id: &str,
        reason: &str,
        force_close: bool,
    ) -> ApiResult<Envelope<Value>> {
        let body = DeleteAccountBody {
            reason,
            force_close,
        };
        self.delete_with(&format!("/admin/trading/accounts/{account_id}"), &body)
            .await
    }

    pub async fn adjust_account_balance(
        &self,
        account_id: &str,
        adjustment: &AccountAdjustment,
    ) -> ApiResult<Envelope<Value>> {
        self.post(
            &format!("/admin/trading/accounts/{account_id}/adjust-balance"),
            adjustment,
        )
        .await
    }

    pub async fn list_positions(
        &self,
        query: &PositionListQuery,
    ) -> ApiResult<Envelope<PositionsPage>> {
        self.get_with("/admin/trading/positions", query).await
    }

    pub async fn open_position(&self, position: &OpenPosition) -> ApiResult<Envelope<Value>> {
        self.post("/admin/trading/positions", position).await
    }

    pub async fn update_position(
        &self,
        position_id: &str,
        update: &PositionUpdate,
    ) -> ApiResult<Envelope<Value>> {
        self.put(&format!("/admin/trading/positions/{position_id}"), update)
            .await
    }

    pub async fn force_close_position(
        &self,
        position_id: &str,
        reason: &str,
        notify_user: bool,
    ) -> ApiResult<Envelope<Value>> {
        let body = ForceCloseBody {
            reason,
            notify_user,
        };
        self.post(
            &format!("/admin/trading/positions/{position_id}/force-close"),
            &body,
        )
        .await
    }
}
