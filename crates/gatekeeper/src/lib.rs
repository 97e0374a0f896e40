//! Phone fraud check façade: validate input, collect a client snapshot, submit it for scoring.
//!
//! ```no_run
//! # async fn run() -> Result<(), gatekeeper::GateKeeperError> {
//! use gatekeeper::{ClientConfig, GateKeeper, HostProfile};
//!
//! let gatekeeper = GateKeeper::new("eyJ...", HostProfile::default(), ClientConfig::default())?;
//! let verdict = gatekeeper.check_phone_number("+15551234567").await?;
//! println!("{:?} ({})", verdict.action, verdict.fraud_score);
//! # Ok(())
//! # }
//! ```

mod error;

use std::any::Any;
use std::sync::Arc;

use gatekeeper_client::ApiClient;
use gatekeeper_collect::Collector;
use tokio::task::JoinError;
use tracing::debug;

pub use error::{CheckError, CollectionError, GateKeeperError};
pub use gatekeeper_client::ClientError;
pub use gatekeeper_collect::{EmptyHost, HostEnvironment, HostProfile, ProbeError};
pub use gatekeeper_core::{Action, ClientConfig, RiskLevel, Snapshot, Verdict};

/// Entry point for embedding applications.
///
/// Collection runs on a Tokio task, so operations must be awaited inside a
/// Tokio runtime.
pub struct GateKeeper<H: ?Sized> {
    collector: Collector<H>,
    client: ApiClient,
}

impl<H: HostEnvironment + 'static> GateKeeper<H> {
    /// Fails with [`GateKeeperError::MissingApiKey`] if `api_key` is empty.
    pub fn new(
        api_key: impl Into<String>,
        host: H,
        config: ClientConfig,
    ) -> Result<Self, GateKeeperError> {
        Self::with_shared_host(api_key, Arc::new(host), config)
    }
}

impl<H: HostEnvironment + ?Sized + 'static> GateKeeper<H> {
    /// Like [`new`](GateKeeper::new), for a host already behind an `Arc`
    /// (including `Arc<dyn HostEnvironment>`).
    pub fn with_shared_host(
        api_key: impl Into<String>,
        host: Arc<H>,
        config: ClientConfig,
    ) -> Result<Self, GateKeeperError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GateKeeperError::MissingApiKey);
        }
        Ok(Self {
            collector: Collector::from_arc(host),
            client: ApiClient::new(api_key, config),
        })
    }

    /// Validate `phone_number`, collect a snapshot, and score both.
    ///
    /// The number is trimmed before submission. Any failure is wrapped in
    /// [`GateKeeperError::CheckPhoneNumber`].
    pub async fn check_phone_number(&self, phone_number: &str) -> Result<Verdict, GateKeeperError> {
        self.check(phone_number)
            .await
            .map_err(GateKeeperError::CheckPhoneNumber)
    }

    /// Collect a snapshot without submitting it.
    pub async fn collect_client_data(&self) -> Result<Snapshot, GateKeeperError> {
        self.collect()
            .await
            .map_err(GateKeeperError::CollectClientData)
    }

    async fn check(&self, phone_number: &str) -> Result<Verdict, CheckError> {
        if phone_number.is_empty() {
            return Err(CheckError::MissingPhoneNumber);
        }
        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(CheckError::EmptyPhoneNumber);
        }

        let snapshot = self.collect().await?;
        Ok(self.client.phone_score(phone_number, &snapshot).await?)
    }

    async fn collect(&self) -> Result<Snapshot, CollectionError> {
        let collector = self.collector.clone();
        tokio::spawn(async move { collector.collect().await })
            .await
            .map_err(collection_failure)
    }
}

fn collection_failure(err: JoinError) -> CollectionError {
    if !err.is_panic() {
        return CollectionError(err.to_string());
    }
    let message = panic_message(err.into_panic());
    debug!(%message, "host probe panicked during collection");
    CollectionError(format!("host probe panicked: {message}"))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "unknown panic".to_string(),
        },
    }
}
