//! Declarative hosts: a JSON-loadable profile, and the host with no capabilities.

use async_trait::async_trait;
use gatekeeper_core::{CanvasScene, Coordinates, Dimensions};
use serde::{Deserialize, Serialize};

use crate::{HostEnvironment, LegacyTiming, NavigationTiming, PositionOptions, ProbeError};

/// Host with every capability absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyHost;

impl HostEnvironment for EmptyHost {}

/// Static description of a host. `None` fields are reported as unavailable.
///
/// ```json
/// { "userAgent": "Mozilla/5.0 ...", "screen": { "width": 1920, "height": 1080 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostProfile {
    pub timezone: Option<String>,
    pub user_agent: Option<String>,
    pub platform: Option<String>,
    pub device_memory_gb: Option<f64>,
    pub hardware_concurrency: Option<f64>,
    pub language: Option<String>,
    pub languages: Option<Vec<String>>,
    pub touch_events: Option<bool>,
    pub max_touch_points: Option<f64>,
    pub webdriver: Option<bool>,
    pub chrome_object: Option<bool>,
    pub permissions_query: Option<bool>,
    pub plugins_length: Option<f64>,
    pub screen: Option<Dimensions>,
    pub viewport: Option<Dimensions>,
    pub cookies_enabled: Option<bool>,
    pub local_storage: Option<bool>,
    pub session_storage: Option<bool>,
    pub indexed_db: Option<bool>,
    /// Data URL the host's canvas produces for the standard scene.
    pub canvas_data_url: Option<String>,
    pub webgl_renderer: Option<String>,
    pub navigation_timing: Option<NavigationTiming>,
    pub legacy_timing: Option<LegacyTiming>,
    pub first_interaction_delay: Option<f64>,
    pub position: Option<Coordinates>,
}

impl HostProfile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn present<T: Clone>(field: &Option<T>) -> Result<T, ProbeError> {
    field.clone().ok_or(ProbeError::Unavailable)
}

#[async_trait]
impl HostEnvironment for HostProfile {
    fn timezone(&self) -> Result<String, ProbeError> {
        present(&self.timezone)
    }

    fn user_agent(&self) -> Result<String, ProbeError> {
        present(&self.user_agent)
    }

    fn platform(&self) -> Result<String, ProbeError> {
        present(&self.platform)
    }

    fn device_memory_gb(&self) -> Result<f64, ProbeError> {
        present(&self.device_memory_gb)
    }

    fn hardware_concurrency(&self) -> Result<f64, ProbeError> {
        present(&self.hardware_concurrency)
    }

    fn language(&self) -> Result<String, ProbeError> {
        present(&self.language)
    }

    fn languages(&self) -> Result<Vec<String>, ProbeError> {
        present(&self.languages)
    }

    fn touch_events(&self) -> Result<bool, ProbeError> {
        present(&self.touch_events)
    }

    fn max_touch_points(&self) -> Result<f64, ProbeError> {
        present(&self.max_touch_points)
    }

    fn webdriver(&self) -> Result<bool, ProbeError> {
        present(&self.webdriver)
    }

    fn chrome_object(&self) -> Result<bool, ProbeError> {
        present(&self.chrome_object)
    }

    fn permissions_query(&self) -> Result<bool, ProbeError> {
        present(&self.permissions_query)
    }

    fn plugins_length(&self) -> Result<f64, ProbeError> {
        present(&self.plugins_length)
    }

    fn screen(&self) -> Result<Dimensions, ProbeError> {
        present(&self.screen)
    }

    fn viewport(&self) -> Result<Dimensions, ProbeError> {
        present(&self.viewport)
    }

    fn cookies_enabled(&self) -> Result<bool, ProbeError> {
        present(&self.cookies_enabled)
    }

    fn local_storage(&self) -> Result<bool, ProbeError> {
        present(&self.local_storage)
    }

    fn session_storage(&self) -> Result<bool, ProbeError> {
        present(&self.session_storage)
    }

    fn indexed_db(&self) -> Result<bool, ProbeError> {
        present(&self.indexed_db)
    }

    fn render_canvas(&self, _scene: &CanvasScene) -> Result<String, ProbeError> {
        present(&self.canvas_data_url)
    }

    fn webgl_renderer(&self) -> Result<String, ProbeError> {
        present(&self.webgl_renderer)
    }

    fn navigation_timing(&self) -> Result<Option<NavigationTiming>, ProbeError> {
        Ok(self.navigation_timing)
    }

    fn legacy_timing(&self) -> Result<Option<LegacyTiming>, ProbeError> {
        Ok(self.legacy_timing)
    }

    fn first_interaction_delay(&self) -> Result<f64, ProbeError> {
        present(&self.first_interaction_delay)
    }

    async fn current_position(&self, _: PositionOptions) -> Result<Coordinates, ProbeError> {
        present(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_profile() {
        let json = r#"{
            "userAgent": "Mozilla/5.0 (X11; Linux x86_64)",
            "hardwareConcurrency": 8,
            "screen": { "width": 2560, "height": 1440 },
            "position": { "latitude": 48.85, "longitude": 2.35 }
        }"#;
        let profile = HostProfile::from_json(json).unwrap();
        let user_agent = profile.user_agent().unwrap();
        assert_eq!(user_agent, "Mozilla/5.0 (X11; Linux x86_64)");
        assert_eq!(profile.hardware_concurrency().unwrap(), 8.0);
        assert_eq!(profile.screen().unwrap().width, 2560);
        assert_eq!(profile.platform(), Err(ProbeError::Unavailable));
    }

    #[test]
    fn empty_profile_reports_everything_unavailable() {
        let profile = HostProfile::from_json("{}").unwrap();
        assert_eq!(profile, HostProfile::default());
        assert_eq!(profile.timezone(), Err(ProbeError::Unavailable));
        assert_eq!(
            profile.render_canvas(&CanvasScene::STANDARD),
            Err(ProbeError::Unavailable)
        );
        assert_eq!(profile.navigation_timing(), Ok(None));
    }

    #[test]
    fn empty_host_has_no_capabilities() {
        assert_eq!(EmptyHost.user_agent(), Err(ProbeError::Unavailable));
        assert_eq!(EmptyHost.navigation_timing(), Err(ProbeError::Unavailable));
    }
}
