//! Currency pair administration calls.

use serde::Serialize;
use serde_json::Value;

use super::types::{PairListQuery, PairsPayload};
use super::{ApiClient, ApiResult, Envelope};

/// Fields accepted when creating or updating a pair. Create requires
/// symbol and both currencies; updates may send any subset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pip_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_lot_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lot_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_spread: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_leverage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_enabled: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleBody {
    trading_enabled: bool,
}

impl ApiClient {
    pub async fn list_currency_pairs(
        &self,
        query: &PairListQuery,
    ) -> ApiResult<Envelope<PairsPayload>> {
        self.get_with("/admin/currency-pairs", query).await
    }

    pub async fn create_currency_pair(&self, pair: &PairUpsert) -> ApiResult<Envelope<Value>> {
        self.post("/admin/currency-pairs", pair).await
    }

    pub async fn update_currency_pair(
        &self,
        pair_id: &str,
        pair: &PairUpsert,
    ) -> ApiResult<Envelope<Value>> {
        self.put(&format!("/admin/currency-pairs/{pair_id}"), pair)
            .await
    }

    pub async fn delete_currency_pair(&self, pair_id: &str) -> ApiResult<Envelope<Value>> {
        self.delete(&format!("/admin/currency-pairs/{pair_id}"))
            .await
    }

    /// Flip trading on or off without touching the rest of the pair.
    pub async fn toggle_currency_pair(
        &self,
        pair_id: &str,
        enabled: bool,
    ) -> ApiResult<Envelope<Value>> {
        let body = ToggleBody {
            trading_enabled: enabled,
        };
        self.patch(&format!("/admin/currency-pairs/{pair_id}/toggle"), &body)
            .await
    }
}
