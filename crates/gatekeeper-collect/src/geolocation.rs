//! Bounded geolocation lookup.

use std::time::Duration;

use gatekeeper_core::Coordinates;
use tracing::debug;

use crate::{HostEnvironment, PositionOptions, Probe, ProbeError};

/// How long to wait for a position before reporting `{0, 0}`.
pub const GEOLOCATION_TIMEOUT: Duration = Duration::from_millis(5000);

const MAXIMUM_AGE_MS: u64 = 60_000;

/// Ask the host for its position, giving up after `timeout`.
///
/// Timeout, denial, a missing capability, or non-finite coordinates all
/// degrade to [`Coordinates::ZERO`]; this never fails.
pub async fn locate<H: HostEnvironment + ?Sized>(
    host: &H,
    timeout: Duration,
) -> Probe<Coordinates> {
    let options = PositionOptions {
        enable_high_accuracy: false,
        timeout_ms: timeout.as_millis() as u64,
        maximum_age_ms: MAXIMUM_AGE_MS,
    };

    let result = match tokio::time::timeout(timeout, host.current_position(options)).await {
        Ok(Ok(pos)) if pos.latitude.is_finite() && pos.longitude.is_finite() => Ok(pos),
        Ok(Ok(pos)) => {
            let reason = format!("non-finite position {}, {}", pos.latitude, pos.longitude);
            Err(ProbeError::Failed(reason))
        }
        Ok(Err(err)) => Err(err),
        Err(_) => {
            debug!(timeout_ms = options.timeout_ms, "position timed out");
            Err(ProbeError::Failed("position request timed out".into()))
        }
    };

    Probe::resolve("geolocation", result, Coordinates::ZERO)
}
