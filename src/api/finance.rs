//! Finance calls: transactions, verification queue, wallet adjustments.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::types::{mongo_decimal, AdjustmentReason, TransactionListQuery, TransactionsPage};
use super::{ApiClient, ApiResult, Envelope};

/// Manual wallet adjustment applied to a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAdjustment {
    pub user_id: String,
    #[serde(with = "mongo_decimal")]
    pub amount: Decimal,
    pub reason: AdjustmentReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Serialize)]
struct NotesBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Serialize)]
struct ReasonBody<'a> {
    reason: &'a str,
}

impl ApiClient {
    pub async fn list_transactions(
        &self,
        query: &TransactionListQuery,
    ) -> ApiResult<Envelope<TransactionsPage>> {
        self.get_with("/admin/finance/transactions", query).await
    }

    /// Credit or debit a user's wallet. Negative amounts debit.
    pub async fn adjust_user_balance(
        &self,
        adjustment: &BalanceAdjustment,
    ) -> ApiResult<Envelope<Value>> {
        self.post("/admin/finance/adjust-balance", adjustment).await
    }

    pub async fn approve_verification(
        &self,
        transaction_id: &str,
        notes: Option<&str>,
    ) -> ApiResult<Envelope<Value>> {
        let body = NotesBody { notes };
        self.post(
            &format!("/admin/finance/verification/approve/{transaction_id}"),
            &body,
        )
        .await
    }

    pub async fn reject_verification(
        &self,
        transaction_id: &str,
        reason: &str,
    ) -> ApiResult<Envelope<Value>> {
        let body = ReasonBody { reason };
        self.post(
            &format!("/admin/finance/verification/reject/{transaction_id}"),
            &body,
        )
        .await
    }
}
