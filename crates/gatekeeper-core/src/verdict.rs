//! Risk verdict returned by the scoring service.

use serde::{Deserialize, Serialize};

/// Fraud-scoring result, passed through as the service returned it.
///
/// Any JSON object deserializes: absent fields take their defaults and
/// unrecognised tags become `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Verdict {
    /// 0-100.
    pub fraud_score: f64,
    pub is_likely_bot: bool,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
    pub action: Action,
    pub request_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Allow,
    Challenge,
    Block,
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_response() {
        let json = r#"{
            "fraudScore": 87,
            "isLikelyBot": true,
            "riskLevel": "critical",
            "reasons": ["webdriver", "voip-number"],
            "action": "block",
            "requestId": "req_9f2c"
        }"#;
        let verdict: Verdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.fraud_score, 87.0);
        assert!(verdict.is_likely_bot);
        assert_eq!(verdict.risk_level, RiskLevel::Critical);
        assert_eq!(verdict.reasons, vec!["webdriver", "voip-number"]);
        assert_eq!(verdict.action, Action::Block);
        assert_eq!(verdict.request_id, "req_9f2c");
    }

    #[test]
    fn unrecognised_tags_become_unknown() {
        let json = r#"{
            "fraudScore": 10,
            "isLikelyBot": false,
            "riskLevel": "elevated",
            "reasons": [],
            "action": "maybe",
            "requestId": "req_1"
        }"#;
        let verdict: Verdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.risk_level, RiskLevel::Unknown);
        assert_eq!(verdict.action, Action::Unknown);
        assert_eq!(verdict.request_id, "req_1");
    }

    #[test]
    fn partial_object_fills_defaults() {
        let verdict: Verdict = serde_json::from_str(r#"{"fraudScore": 42}"#).unwrap();
        assert_eq!(verdict.fraud_score, 42.0);
        assert!(!verdict.is_likely_bot);
        assert_eq!(verdict.risk_level, RiskLevel::Unknown);
        assert!(verdict.reasons.is_empty());
        assert_eq!(verdict.action, Action::Unknown);
        assert_eq!(verdict.request_id, "");

        let empty: Verdict = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Verdict::default());
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(RiskLevel::Medium).unwrap(),
            serde_json::json!("medium")
        );
        assert_eq!(
            serde_json::to_value(Action::Challenge).unwrap(),
            serde_json::json!("challenge")
        );
    }
}
