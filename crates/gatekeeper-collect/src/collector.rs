//! Tolerant aggregation of every probe into one [`Snapshot`].

use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use gatekeeper_core::{
    AutomationSignals, CanvasScene, Dimensions, Snapshot, StorageSupport, canvas_fingerprint,
};
use tracing::debug;

use crate::{
    GEOLOCATION_TIMEOUT, HostEnvironment, Probe, locate, page_timing, ua_contains_headless,
};

const MAX_LANGUAGES: usize = 8;

/// A snapshot plus the names of probes that fell back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionReport {
    pub snapshot: Snapshot,
    pub degraded: Vec<&'static str>,
}

/// Collects a [`Snapshot`] from a host. Collection never fails.
pub struct Collector<H: ?Sized> {
    host: Arc<H>,
    geolocation_timeout: Duration,
}

impl<H: ?Sized> Clone for Collector<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            geolocation_timeout: self.geolocation_timeout,
        }
    }
}

impl<H: HostEnvironment> Collector<H> {
    pub fn new(host: H) -> Self {
        Self::from_arc(Arc::new(host))
    }
}

/// Tracks which probes degraded while unwrapping their values.
#[derive(Default)]
struct Degraded(Vec<&'static str>);

impl Degraded {
    fn take<T>(&mut self, name: &'static str, probe: Probe<T>) -> T {
        if probe.is_degraded() {
            self.0.push(name);
        }
        probe.into_value()
    }
}

impl<H: HostEnvironment + ?Sized> Collector<H> {
    pub fn from_arc(host: Arc<H>) -> Self {
        Self {
            host,
            geolocation_timeout: GEOLOCATION_TIMEOUT,
        }
    }

    /// Override the geolocation wait (5 s by default).
    pub fn with_geolocation_timeout(mut self, timeout: Duration) -> Self {
        self.geolocation_timeout = timeout;
        self
    }

    pub async fn collect(&self) -> Snapshot {
        self.collect_with_report().await.snapshot
    }

    /// Collect a snapshot and report which probes degraded.
    pub async fn collect_with_report(&self) -> CollectionReport {
        let host: &H = &self.host;
        let mut degraded = Degraded::default();

        let timestamp_iso = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let timezone = degraded.take(
            "timezone",
            Probe::resolve("timezone", host.timezone(), "UTC".to_string()),
        );
        let timezone = if timezone.is_empty() {
            "UTC".to_string()
        } else {
            timezone
        };

        let user_agent = degraded.take(
            "user_agent",
            Probe::resolve("user_agent", host.user_agent(), String::new()),
        );
        let platform = degraded.take(
            "platform",
            Probe::resolve("platform", host.platform(), String::new()),
        );
        let device_memory_gb = degraded.take(
            "device_memory_gb",
            Probe::finite("device_memory_gb", host.device_memory_gb(), 0.0),
        );
        let hardware_concurrency = degraded.take(
            "hardware_concurrency",
            Probe::count("hardware_concurrency", host.hardware_concurrency()),
        );
        let language = degraded.take(
            "language",
            Probe::resolve("language", host.language(), String::new()),
        );
        let mut languages = degraded.take(
            "languages",
            Probe::resolve("languages", host.languages(), Vec::new()),
        );
        languages.truncate(MAX_LANGUAGES);

        let touch_events = degraded.take(
            "touch_events",
            Probe::resolve("touch_events", host.touch_events(), false),
        );
        let max_touch_points = degraded.take(
            "max_touch_points",
            Probe::count("max_touch_points", host.max_touch_points()),
        );
        let touch_support = touch_events || max_touch_points > 0;

        let webgl_renderer = degraded.take(
            "webgl_renderer",
            Probe::resolve("webgl_renderer", host.webgl_renderer().map(Some), None),
        );
        let canvas_fingerprint = degraded.take(
            "canvas_fingerprint",
            Probe::resolve(
                "canvas_fingerprint",
                host.render_canvas(&CanvasScene::STANDARD)
                    .map(|data_url| Some(canvas_fingerprint(&data_url))),
                None,
            ),
        );

        let signals = AutomationSignals {
            navigator_webdriver: degraded.take(
                "webdriver",
                Probe::resolve("webdriver", host.webdriver(), false),
            ),
            ua_contains_headless: ua_contains_headless(&user_agent),
            chrome_object: degraded.take(
                "chrome_object",
                Probe::resolve("chrome_object", host.chrome_object(), false),
            ),
            permissions_query: degraded.take(
                "permissions_query",
                Probe::resolve("permissions_query", host.permissions_query(), false),
            ),
            plugins_length: degraded.take(
                "plugins_length",
                Probe::count("plugins_length", host.plugins_length()),
            ),
        };

        let screen = degraded.take(
            "screen",
            Probe::resolve("screen", host.screen(), Dimensions::default()),
        );
        let viewport = degraded.take(
            "viewport",
            Probe::resolve("viewport", host.viewport(), Dimensions::default()),
        );
        let cookies_enabled = degraded.take(
            "cookies_enabled",
            Probe::resolve("cookies_enabled", host.cookies_enabled(), false),
        );
        let storage = StorageSupport {
            local_storage_enabled: degraded.take(
                "local_storage",
                Probe::resolve("local_storage", host.local_storage(), false),
            ),
            session_storage_enabled: degraded.take(
                "session_storage",
                Probe::resolve("session_storage", host.session_storage(), false),
            ),
            indexed_db_enabled: degraded.take(
                "indexed_db",
                Probe::resolve("indexed_db", host.indexed_db(), false),
            ),
        };

        let (geolocation, timing) = tokio::join!(
            locate(host, self.geolocation_timeout),
            async { page_timing(host) }
        );
        let geolocation = degraded.take("geolocation", geolocation);
        let timing = degraded.take("timing", timing);

        debug!(degraded = degraded.0.len(), "collected client snapshot");

        CollectionReport {
            snapshot: Snapshot {
                timestamp_iso,
                timezone,
                user_agent,
                platform,
                device_memory_gb,
                hardware_concurrency,
                language,
                languages,
                touch_support,
                webgl_renderer,
                canvas_fingerprint,
                signals,
                screen,
                viewport,
                cookies_enabled,
                storage,
                geolocation,
                timing,
            },
            degraded: degraded.0,
        }
    }
}
