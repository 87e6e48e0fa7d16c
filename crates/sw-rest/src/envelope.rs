//! Response envelopes shared by the resource endpoints.

use serde::{Deserialize, Serialize};
use serviceworks_client::serde_helpers::null_default;
use serviceworks_client::ApiStatus;

/// `{apiStatus, data}`, the shape most endpoints answer with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub(crate) struct Enveloped<T> {
    #[serde(default, alias = "ApiStatus")]
    pub api_status: ApiStatus,
    #[serde(default, alias = "Data", deserialize_with = "null_default")]
    pub data: T,
}

/// Bare `{apiStatus}`, for endpoints that report only an outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusOnly {
    #[serde(default, alias = "ApiStatus")]
    pub api_status: ApiStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enveloped_accepts_both_casings() {
        let lower: Enveloped<Vec<u32>> = serde_json::from_value(json!({
            "apiStatus": {"status": 1, "message": "ok"},
            "data": [1, 2]
        }))
        .unwrap();
        assert!(lower.api_status.is_ok());
        assert_eq!(lower.data, vec![1, 2]);

        let upper: Enveloped<Vec<u32>> = serde_json::from_value(json!({
            "ApiStatus": {"Status": 1},
            "Data": null
        }))
        .unwrap();
        assert!(upper.api_status.is_ok());
        assert!(upper.data.is_empty());
    }

    #[test]
    fn test_missing_status_is_not_ok() {
        let env: StatusOnly = serde_json::from_value(json!({})).unwrap();
        assert!(env.api_status.check().is_err());
    }
}
