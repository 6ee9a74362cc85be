//! Response envelope normalization.
//!
//! Most backend routes wrap their payload as
//! `{ success, message, statusCode, timestamp, data }`, but a handful of
//! older routes return the payload bare. Every response is normalized into
//! [`Envelope`] so callers never branch on which shape they got.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Normalized response wrapper.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
    pub data: T,
}

/// Envelope as it appears on the wire, with every field optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope<T> {
    success: Option<bool>,
    message: Option<String>,
    status_code: Option<u16>,
    timestamp: Option<DateTime<Utc>>,
    data: T,
}

/// Normalize a 2xx response body.
///
/// A JSON object with a `data` key is treated as an envelope; anything else
/// is the payload itself and gets a synthesized envelope around it. Missing
/// envelope fields are defaulted from the HTTP response.
pub(crate) fn normalize<T>(http_status: u16, body: Value) -> Result<Envelope<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    let is_enveloped = body
        .as_object()
        .is_some_and(|object| object.contains_key("data"));

    if is_enveloped {
        let raw: RawEnvelope<T> = serde_json::from_value(body)?;
        return Ok(Envelope {
            success: raw.success.unwrap_or(true),
            message: raw.message.unwrap_or_default(),
            status_code: raw.status_code.unwrap_or(http_status),
            timestamp: raw.timestamp.unwrap_or_else(Utc::now),
            data: raw.data,
        });
    }

    let data: T = serde_json::from_value(body)?;
    Ok(Envelope {
        success: true,
        message: String::new(),
        status_code: http_status,
        timestamp: Utc::now(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_envelope_passes_through() {
        let body = json!({
            "success": true,
            "message": "Users retrieved",
            "statusCode": 200,
            "timestamp": "2024-06-01T12:00:00.000Z",
            "data": {"count": 3}
        });

        let envelope: Envelope<Value> = normalize(200, body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, "Users retrieved");
        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.data["count"], 3);
    }

    #[test]
    fn test_partial_envelope_defaults_missing_fields() {
        let body = json!({"data": [1, 2, 3]});

        let envelope: Envelope<Vec<u32>> = normalize(200, body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_bare_body_becomes_data() {
        let body = json!({"symbol": "EURUSD", "tradingEnabled": true});

        let envelope: Envelope<Value> = normalize(200, body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data["symbol"], "EURUSD");
    }

    #[test]
    fn test_bare_array_becomes_data() {
        let body = json!([{"name": "Bank Transfer"}]);

        let envelope: Envelope<Vec<Value>> = normalize(200, body).unwrap();
        assert_eq!(envelope.data.len(), 1);
    }

    #[test]
    fn test_envelope_data_shape_mismatch_is_an_error() {
        let body = json!({"data": "not a list"});

        let result: Result<Envelope<Vec<u32>>, _> = normalize(200, body);
        assert!(result.is_err());
    }
}
