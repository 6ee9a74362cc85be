//! User management calls.

use serde::Serialize;
use serde_json::Value;

use super::types::{User, UserListQuery, UsersPage};
use super::{ApiClient, ApiResult, Envelope};

/// Editable profile fields; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a str,
    reason: &'a str,
}

impl ApiClient {
    pub async fn list_users(&self, query: &UserListQuery) -> ApiResult<Envelope<UsersPage>> {
        self.get_with("/admin/users", query).await
    }

    pub async fn user_details(&self, user_id: &str) -> ApiResult<Envelope<User>> {
        self.get(&format!("/admin/users/{user_id}")).await
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
    ) -> ApiResult<Envelope<Value>> {
        self.put(&format!("/admin/users/{user_id}"), update).await
    }

    /// Change an account status. The backend requires a reason for the
    /// audit trail.
    pub async fn set_user_status(
        &self,
        user_id: &str,
        status: &str,
        reason: &str,
    ) -> ApiResult<Envelope<Value>> {
        let body = StatusBody { status, reason };
        self.patch(&format!("/admin/users/{user_id}/status"), &body)
            .await
    }
}
