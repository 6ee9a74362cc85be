//! Payment method administration calls.

use serde::Serialize;
use serde_json::Value;

use super::types::{BankDetails, PaymentMethodsPayload};
use super::{ApiClient, ApiResult, Envelope};

#[derive(Serialize)]
struct EnabledBody {
    enabled: bool,
}

impl ApiClient {
    pub async fn list_payment_methods(&self) -> ApiResult<Envelope<PaymentMethodsPayload>> {
        self.get("/admin/payment-methods").await
    }

    /// Replace the bank transfer details shown to depositing users.
    pub async fn update_bank_details(
        &self,
        method_id: &str,
        details: &BankDetails,
    ) -> ApiResult<Envelope<Value>> {
        self.put(
            &format!("/admin/payment-methods/{method_id}/bank-details"),
            details,
        )
        .await
    }

    pub async fn toggle_payment_method(
        &self,
        method_id: &str,
        enabled: bool,
    ) -> ApiResult<Envelope<Value>> {
        let body = EnabledBody { enabled };
        self.patch(&format!("/admin/payment-methods/{method_id}/toggle"), &body)
            .await
    }
}
