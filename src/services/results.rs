//! Result Acknowledgement Service
//!
//! Accepts a finished estimate for "saving" and acknowledges it. Nothing is
//! stored: the identifier is fabricated and the payload echoed back.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::emissions::{EstimateError, EstimateResult};
use crate::utils::json::is_truthy;

pub const SAVE_REQUIRED_FIELDS: [&str; 2] = ["resultType", "data"];
pub const SAVE_ACK_MESSAGE: &str = "Resultado salvo com sucesso!";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    #[serde(default)]
    pub result_type: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResult {
    pub id: String,
    #[serde(rename = "type")]
    pub result_type: String,
    pub data: Value,
    pub timestamp: String,
    pub saved: bool,
}

pub fn save_result(request: SaveRequest) -> EstimateResult<SavedResult> {
    let missing = || EstimateError::MissingField { fields: SAVE_REQUIRED_FIELDS.to_vec() };

    let result_type = request.result_type.filter(|t| !t.is_empty()).ok_or_else(missing)?;
    let data = request.data.filter(is_truthy).ok_or_else(missing)?;
    let timestamp = request
        .timestamp
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    let saved = SavedResult {
        id: format!("result_{}", Uuid::new_v4().simple()),
        result_type,
        data,
        timestamp,
        saved: true,
    };
    info!(id = %saved.id, result_type = %saved.result_type, "acknowledged result (not persisted)");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acknowledges_and_echoes() {
        let saved = save_result(SaveRequest {
            result_type: Some("quick".into()),
            data: Some(json!({"emissionKg": 12.0})),
            timestamp: Some("2026-01-01T00:00:00.000Z".into()),
        })
        .unwrap();
        assert!(saved.saved);
        assert!(saved.id.starts_with("result_"));
        assert_eq!(saved.data["emissionKg"], 12.0);
        assert_eq!(saved.timestamp, "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_generates_timestamp() {
        let saved = save_result(SaveRequest {
            result_type: Some("detailed".into()),
            data: Some(json!({})),
            timestamp: None,
        })
        .unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&saved.timestamp).is_ok());
    }

    #[test]
    fn test_unique_ids() {
        let request = SaveRequest {
            result_type: Some("quick".into()),
            data: Some(json!([1])),
            timestamp: None,
        };
        let a = save_result(request.clone()).unwrap();
        let b = save_result(request).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_missing_fields() {
        for request in [
            SaveRequest { result_type: None, data: Some(json!({})), timestamp: None },
            SaveRequest { result_type: Some(String::new()), data: Some(json!({})), timestamp: None },
            SaveRequest { result_type: Some("quick".into()), data: None, timestamp: None },
            SaveRequest { result_type: Some("quick".into()), data: Some(json!(0)), timestamp: None },
        ] {
            let err = save_result(request).unwrap_err();
            assert_eq!(err.to_string(), "Campos obrigatórios: resultType, data");
        }
    }
}
