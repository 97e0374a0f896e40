//! Page-load and DOM-ready durations.

use gatekeeper_core::Timing;

use crate::{HostEnvironment, Probe};

fn duration(end: f64, start: f64) -> f64 {
    let elapsed = end - start;
    if elapsed.is_finite() {
        elapsed.max(0.0)
    } else {
        0.0
    }
}

/// Read page timing, preferring the navigation-timing entry over the legacy object.
///
/// Durations are clamped at zero; with neither source available both are zero.
pub fn page_timing<H: HostEnvironment + ?Sized>(host: &H) -> Probe<Timing> {
    let first_interaction_delay = host
        .first_interaction_delay()
        .ok()
        .filter(|delay| delay.is_finite())
        .map(|delay| delay.max(0.0));

    let navigation = Probe::resolve("navigation_timing", host.navigation_timing(), None);
    if let Some(nav) = navigation.into_value() {
        return Probe::Value(Timing {
            page_load_time: duration(nav.load_event_end, nav.start_time),
            dom_ready_time: duration(nav.dom_content_loaded_event_end, nav.start_time),
            first_interaction_delay,
        });
    }

    let legacy = Probe::resolve("legacy_timing", host.legacy_timing(), None);
    let degraded = legacy.is_degraded();
    match legacy.into_value() {
        Some(t) => Probe::Value(Timing {
            page_load_time: duration(t.load_event_end, t.navigation_start),
            dom_ready_time: duration(t.dom_content_loaded_event_end, t.navigation_start),
            first_interaction_delay,
        }),
        None => {
            let timing = Timing {
                first_interaction_delay,
                ..Timing::ZERO
            };
            if degraded {
                Probe::Degraded {
                    fallback: timing,
                    reason: crate::ProbeError::Unavailable,
                }
            } else {
                Probe::Value(timing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmptyHost, HostProfile, LegacyTiming, NavigationTiming, ProbeError};

    struct ThrowingTiming;

    impl HostEnvironment for ThrowingTiming {
        fn navigation_timing(&self) -> Result<Option<NavigationTiming>, ProbeError> {
            Err(ProbeError::Failed("getEntriesByType threw".into()))
        }

        fn legacy_timing(&self) -> Result<Option<LegacyTiming>, ProbeError> {
            Err(ProbeError::Failed("timing threw".into()))
        }
    }

    #[test]
    fn prefers_navigation_entry() {
        let host = HostProfile {
            navigation_timing: Some(NavigationTiming {
                start_time: 0.0,
                dom_content_loaded_event_end: 420.5,
                load_event_end: 910.0,
            }),
            legacy_timing: Some(LegacyTiming {
                navigation_start: 1_000.0,
                dom_content_loaded_event_end: 1_001.0,
                load_event_end: 1_002.0,
            }),
            ..HostProfile::default()
        };
        let timing = page_timing(&host).into_value();
        assert_eq!(timing.page_load_time, 910.0);
        assert_eq!(timing.dom_ready_time, 420.5);
    }

    #[test]
    fn falls_back_to_legacy_timing() {
        let host = HostProfile {
            legacy_timing: Some(LegacyTiming {
                navigation_start: 1_700_000_000_000.0,
                dom_content_loaded_event_end: 1_700_000_000_300.0,
                load_event_end: 1_700_000_000_800.0,
            }),
            ..HostProfile::default()
        };
        let timing = page_timing(&host).into_value();
        assert_eq!(timing.page_load_time, 800.0);
        assert_eq!(timing.dom_ready_time, 300.0);
    }

    #[test]
    fn unfinished_load_is_clamped_to_zero() {
        // loadEventEnd stays 0 until the load event fires.
        let host = HostProfile {
            legacy_timing: Some(LegacyTiming {
                navigation_start: 1_700_000_000_000.0,
                dom_content_loaded_event_end: 0.0,
                load_event_end: 0.0,
            }),
            ..HostProfile::default()
        };
        let timing = page_timing(&host).into_value();
        assert_eq!(timing.page_load_time, 0.0);
        assert_eq!(timing.dom_ready_time, 0.0);
    }

    #[test]
    fn no_source_reports_zero() {
        let probe = page_timing(&EmptyHost);
        assert!(probe.is_degraded());
        assert_eq!(probe.into_value(), Timing::ZERO);

        let probe = page_timing(&ThrowingTiming);
        assert_eq!(probe.into_value(), Timing::ZERO);
    }

    #[test]
    fn first_interaction_delay_is_carried() {
        let host = HostProfile {
            first_interaction_delay: Some(-5.0),
            ..HostProfile::default()
        };
        assert_eq!(
            page_timing(&host).into_value().first_interaction_delay,
            Some(0.0)
        );
    }
}
