//! KYC review calls.

use serde::Serialize;
use serde_json::Value;

use super::types::{KycApplication, KycListQuery, KycPage, ReviewAction};
use super::{ApiClient, ApiResult, Envelope};

#[derive(Serialize)]
struct ReviewBody<'a> {
    action: ReviewAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

impl ApiClient {
    pub async fn list_kyc_applications(
        &self,
        query: &KycListQuery,
    ) -> ApiResult<Envelope<KycPage>> {
        self.get_with("/admin/kyc/applications", query).await
    }

    pub async fn kyc_details(&self, application_id: &str) -> ApiResult<Envelope<KycApplication>> {
        self.get(&format!("/admin/kyc/applications/{application_id}"))
            .await
    }

    /// Submit a review decision. Reason requirements are enforced at the
    /// command layer before this is called.
    pub async fn review_kyc(
        &self,
        application_id: &str,
        action: ReviewAction,
        notes: Option<&str>,
    ) -> ApiResult<Envelope<Value>> {
        let body = ReviewBody { action, notes };
        self.post(
            &format!("/admin/kyc/applications/{application_id}/review"),
            &body,
        )
        .await
    }
}
