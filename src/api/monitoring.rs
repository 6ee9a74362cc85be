//! Monitoring calls.

use serde_json::Value;

use super::types::SystemMetrics;
use super::{ApiClient, ApiResult, Envelope};

impl ApiClient {
    pub async fn system_metrics(&self) -> ApiResult<Envelope<SystemMetrics>> {
        self.get("/admin/monitoring/metrics").await
    }

    /// Lightweight liveness probe, also used by `check backend`.
    pub async fn health(&self) -> ApiResult<Envelope<Value>> {
        self.get("/admin/monitoring/health").await
    }
}
