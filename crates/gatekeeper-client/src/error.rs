use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Gatekeeper API error ({status}): {body}{}", .guidance.map(|g| format!(". {g}")).unwrap_or_default())]
    Status {
        status: u16,
        body: String,
        guidance: Option<&'static str>,
    },
    #[error("Gatekeeper API request timed out after {} seconds", .after.as_secs_f64())]
    Timeout { after: Duration },
    #[error("Gatekeeper API network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Gatekeeper API returned invalid response format")]
    InvalidFormat,
}

impl ClientError {
    /// Non-2xx response, with guidance for the statuses callers can act on.
    pub fn from_status(status: u16, body: String) -> Self {
        let guidance = match status {
            401 => Some("Please check your API key."),
            403 => Some("Access forbidden - check your API key permissions."),
            429 => Some("Rate limit exceeded - please try again later."),
            s if s >= 500 => Some("Server error - please try again later."),
            _ => None,
        };
        ClientError::Status {
            status,
            body,
            guidance,
        }
    }

    /// HTTP status code, when the service answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout { .. })
    }
}
