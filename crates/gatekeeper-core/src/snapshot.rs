//! Environment snapshot submitted alongside a phone number for scoring.

use serde::{Deserialize, Serialize};

/// Fixed-shape bundle of device, rendering, network and timing attributes.
///
/// Built once per check. Every field always carries a value; capabilities the
/// host could not provide are filled with their fallback (`0`, `""`, `false`,
/// `None`, or a zeroed sub-record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp_iso: String,
    pub timezone: String,
    pub user_agent: String,
    pub platform: String,
    pub device_memory_gb: f64,
    pub hardware_concurrency: u32,
    pub language: String,
    pub languages: Vec<String>,
    pub touch_support: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webgl_renderer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_fingerprint: Option<String>,
    pub signals: AutomationSignals,
    pub screen: Dimensions,
    pub viewport: Dimensions,
    pub cookies_enabled: bool,
    pub storage: StorageSupport,
    pub geolocation: Coordinates,
    pub timing: Timing,
}

/// Automation-likelihood probes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationSignals {
    pub navigator_webdriver: bool,
    pub ua_contains_headless: bool,
    pub chrome_object: bool,
    pub permissions_query: bool,
    pub plugins_length: u32,
}

/// Width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Which client-side storage APIs exist. Presence checks only; nothing is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSupport {
    pub local_storage_enabled: bool,
    pub session_storage_enabled: bool,
    pub indexed_db_enabled: bool,
}

/// Geographic position. `{0, 0}` when unavailable, denied, or timed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const ZERO: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
    };
}

/// Page timing in milliseconds, never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub page_load_time: f64,
    pub dom_ready_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_interaction_delay: Option<f64>,
}

impl Timing {
    pub const ZERO: Self = Self {
        page_load_time: 0.0,
        dom_ready_time: 0.0,
        first_interaction_delay: None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            timestamp_iso: "2026-02-21T10:00:00.000Z".into(),
            timezone: "Europe/London".into(),
            user_agent: "Mozilla/5.0".into(),
            platform: "Linux x86_64".into(),
            device_memory_gb: 8.0,
            hardware_concurrency: 12,
            language: "en-GB".into(),
            languages: vec!["en-GB".into(), "en".into()],
            touch_support: false,
            webgl_renderer: None,
            canvas_fingerprint: Some("c_123".into()),
            signals: AutomationSignals::default(),
            screen: Dimensions {
                width: 1920,
                height: 1080,
            },
            viewport: Dimensions {
                width: 1280,
                height: 720,
            },
            cookies_enabled: true,
            storage: StorageSupport::default(),
            geolocation: Coordinates::ZERO,
            timing: Timing::ZERO,
        }
    }

    #[test]
    fn serializes_camel_case_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "timestampIso",
            "userAgent",
            "deviceMemoryGb",
            "hardwareConcurrency",
            "touchSupport",
            "canvasFingerprint",
            "cookiesEnabled",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(value["signals"]["navigatorWebdriver"], false);
        assert_eq!(value["storage"]["indexedDbEnabled"], false);
        assert_eq!(value["timing"]["pageLoadTime"], 0.0);
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("webglRenderer").is_none());
        assert!(value["timing"].get("firstInteractionDelay").is_none());
    }

    #[test]
    fn parses_back_into_the_same_snapshot() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
