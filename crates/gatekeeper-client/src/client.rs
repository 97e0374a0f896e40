//! HTTP client for the phone fraud-scoring endpoint.

use gatekeeper_core::{Action, ClientConfig, RiskLevel, Snapshot, Verdict};
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::ClientError;
use crate::token::{debug_token, looks_like_jwt};

pub const PHONE_SCORE_PATH: &str = "/api/fraud/phone-score";

const PRINT_MODE_REASON: &str = "debug-print-mode";
const REQUEST_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Request body: the snapshot fields flattened next to `phoneNumber`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhoneScoreRequest<'a> {
    phone_number: &'a str,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
}

/// Client for Gatekeeper's `/api/fraud/phone-score` endpoint.
///
/// Each call makes exactly one request; retries are the caller's business.
pub struct ApiClient {
    client: reqwest::Client,
    api_key: String,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    /// Full URL of the scoring endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url(), PHONE_SCORE_PATH)
    }

    /// Score `phone_number` against `snapshot`.
    ///
    /// In print mode no request is made and a low-risk placeholder is returned.
    /// Otherwise the whole exchange, body included, is bounded by the
    /// configured request timeout.
    pub async fn phone_score(
        &self,
        phone_number: &str,
        snapshot: &Snapshot,
    ) -> Result<Verdict, ClientError> {
        let payload = PhoneScoreRequest {
            phone_number,
            snapshot,
        };

        if self.config.print_mode {
            match serde_json::to_string(&payload) {
                Ok(json) => info!(payload = %json, "Debug print payload"),
                Err(e) => warn!(error = %e, "could not serialize debug print payload"),
            }
            return Ok(print_mode_verdict());
        }

        let timeout = self.config.request_timeout;
        match tokio::time::timeout(timeout, self.send(&payload)).await {
            Ok(Err(ClientError::Network(e))) if e.is_timeout() => {
                Err(ClientError::Timeout { after: timeout })
            }
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout { after: timeout }),
        }
    }

    fn bearer_token(&self) -> String {
        if self.config.debug_mode {
            return debug_token();
        }
        if !looks_like_jwt(&self.api_key) {
            warn!("Provided API key does not look like a JWT. Expecting a Bearer JWT.");
        }
        self.api_key.clone()
    }

    async fn send(&self, payload: &PhoneScoreRequest<'_>) -> Result<Verdict, ClientError> {
        let url = self.endpoint();
        let token = self.bearer_token();

        info!(url = %url, debug_mode = self.config.debug_mode, "submitting phone score request");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_status(status.as_u16(), body));
        }

        let body = resp.bytes().await.map_err(ClientError::Network)?;
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|_| ClientError::InvalidFormat)?;
        if !value.is_object() {
            return Err(ClientError::InvalidFormat);
        }

        let verdict: Verdict =
            serde_json::from_value(value).map_err(|_| ClientError::InvalidFormat)?;
        info!(
            request_id = %verdict.request_id,
            fraud_score = verdict.fraud_score,
            "received verdict"
        );
        Ok(verdict)
    }
}

fn print_mode_verdict() -> Verdict {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..8)
        .map(|_| REQUEST_ID_ALPHABET[rng.gen_range(0..REQUEST_ID_ALPHABET.len())] as char)
        .collect();
    Verdict {
        fraud_score: 0.0,
        is_likely_bot: false,
        risk_level: RiskLevel::Low,
        reasons: vec![PRINT_MODE_REASON.to_string()],
        action: Action::Allow,
        request_id: format!("dbg_{suffix}"),
    }
}
