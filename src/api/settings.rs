//! Platform settings calls.

use clap::ValueEnum;
use serde_json::{json, Value};

use super::types::PlatformSettings;
use super::{ApiClient, ApiResult, Envelope};

/// Settings sections exposed by the backend. `General` is the root
/// document; the others are scoped sub-resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingsSection {
    General,
    Trading,
    Notifications,
    Business,
}

impl SettingsSection {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::General => "/admin/settings",
            Self::Trading => "/admin/settings/trading",
            Self::Notifications => "/admin/settings/notifications",
            Self::Business => "/admin/settings/business",
        }
    }
}

impl ApiClient {
    /// Typed view of the root settings document.
    pub async fn platform_settings(&self) -> ApiResult<Envelope<PlatformSettings>> {
        self.get("/admin/settings").await
    }

    pub async fn settings_section(&self, section: SettingsSection) -> ApiResult<Envelope<Value>> {
        self.get(section.path()).await
    }

    /// Apply a partial update to a settings section. Only the keys present
    /// in `patch` change.
    pub async fn update_settings(
        &self,
        section: SettingsSection,
        patch: &Value,
    ) -> ApiResult<Envelope<Value>> {
        self.patch(section.path(), patch).await
    }

    pub async fn set_trading_halt(&self, halted: bool) -> ApiResult<Envelope<Value>> {
        let patch = json!({ "globalTradingHalt": { "isHalted": halted } });
        self.patch("/admin/settings", &patch).await
    }

    pub async fn set_maintenance_mode(
        &self,
        enabled: bool,
        message: Option<&str>,
    ) -> ApiResult<Envelope<Value>> {
        let mut mode = json!({ "isEnabled": enabled });
        if let Some(message) = message {
            mode["message"] = json!(message);
        }
        let patch = json!({ "maintenanceMode": mode });
        self.patch("/admin/settings", &patch).await
    }
}
