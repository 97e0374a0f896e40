//! The capability surface a host (browser, webview, test double) exposes.

use async_trait::async_trait;
use gatekeeper_core::{CanvasScene, Coordinates, Dimensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a capability produced no value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("capability unavailable")]
    Unavailable,
    #[error("capability failed: {0}")]
    Failed(String),
}

/// Options forwarded to the host's position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u64,
    pub maximum_age_ms: u64,
}

/// Modern navigation-timing entry, milliseconds relative to the time origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTiming {
    pub start_time: f64,
    pub dom_content_loaded_event_end: f64,
    pub load_event_end: f64,
}

/// Legacy timing object, epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTiming {
    pub navigation_start: f64,
    pub dom_content_loaded_event_end: f64,
    pub load_event_end: f64,
}

/// Host capabilities probed by the collector.
///
/// Every method defaults to [`ProbeError::Unavailable`]; implementors override
/// only what their host actually provides. Implementations must not block:
/// the only suspension point is [`current_position`](Self::current_position).
#[async_trait]
pub trait HostEnvironment: Send + Sync {
    fn timezone(&self) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn user_agent(&self) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn platform(&self) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn device_memory_gb(&self) -> Result<f64, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn hardware_concurrency(&self) -> Result<f64, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn language(&self) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn languages(&self) -> Result<Vec<String>, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    /// Whether touch events are exposed on the window.
    fn touch_events(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn max_touch_points(&self) -> Result<f64, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn webdriver(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    /// Whether the automation-injected `chrome` global is present.
    fn chrome_object(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn permissions_query(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn plugins_length(&self) -> Result<f64, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn screen(&self) -> Result<Dimensions, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn viewport(&self) -> Result<Dimensions, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn cookies_enabled(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn local_storage(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn session_storage(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn indexed_db(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    /// Render `scene` offscreen and return the serialized data URL.
    fn render_canvas(&self, _scene: &CanvasScene) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    /// Unmasked renderer string from the WebGL debug extension.
    fn webgl_renderer(&self) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    /// `Ok(None)` means the API exists but holds no entry.
    fn navigation_timing(&self) -> Result<Option<NavigationTiming>, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn legacy_timing(&self) -> Result<Option<LegacyTiming>, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    fn first_interaction_delay(&self) -> Result<f64, ProbeError> {
        Err(ProbeError::Unavailable)
    }

    /// Request the current position. May never resolve; callers bound it.
    async fn current_position(&self, _options: PositionOptions) -> Result<Coordinates, ProbeError> {
        Err(ProbeError::Unavailable)
    }
}
