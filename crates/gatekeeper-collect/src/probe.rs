//! Per-probe outcome: a host value, or a fallback with the reason it was needed.

use tracing::debug;

use crate::ProbeError;

#[derive(Debug, Clone, PartialEq)]
pub enum Probe<T> {
    Value(T),
    Degraded { fallback: T, reason: ProbeError },
}

impl<T> Probe<T> {
    /// Turn a capability result into a probe outcome, logging degradations.
    pub fn resolve(name: &'static str, result: Result<T, ProbeError>, fallback: T) -> Self {
        match result {
            Ok(value) => Probe::Value(value),
            Err(reason) => {
                debug!(probe = name, %reason, "probe degraded to fallback");
                Probe::Degraded { fallback, reason }
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Probe::Degraded { .. })
    }

    pub fn into_value(self) -> T {
        match self {
            Probe::Value(value) => value,
            Probe::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probe<U> {
        match self {
            Probe::Value(value) => Probe::Value(f(value)),
            Probe::Degraded { fallback, reason } => Probe::Degraded {
                fallback: f(fallback),
                reason,
            },
        }
    }
}

impl Probe<f64> {
    /// Numeric probe; non-finite host values degrade too.
    pub fn finite(name: &'static str, result: Result<f64, ProbeError>, fallback: f64) -> Self {
        let checked = result.and_then(|value| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ProbeError::Failed(format!("non-finite value {value}")))
            }
        });
        Probe::resolve(name, checked, fallback)
    }

    /// Finite, non-negative count truncated to `u32`.
    pub fn count(name: &'static str, result: Result<f64, ProbeError>) -> Probe<u32> {
        Probe::finite(name, result, 0.0).map(|value| value.max(0.0).min(u32::MAX as f64) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_is_value() {
        let probe = Probe::resolve("platform", Ok("Linux".to_string()), String::new());
        assert!(!probe.is_degraded());
        assert_eq!(probe.into_value(), "Linux");
    }

    #[test]
    fn error_degrades_to_fallback() {
        let probe = Probe::resolve("platform", Err(ProbeError::Unavailable), String::new());
        assert!(probe.is_degraded());
        assert_eq!(probe.into_value(), "");
    }

    #[test]
    fn non_finite_numbers_degrade() {
        assert!(Probe::finite("memory", Ok(f64::NAN), 0.0).is_degraded());
        assert!(Probe::finite("memory", Ok(f64::INFINITY), 0.0).is_degraded());
        assert_eq!(Probe::finite("memory", Ok(0.5), 0.0).into_value(), 0.5);
    }

    #[test]
    fn counts_clamp_negative_values() {
        assert_eq!(Probe::count("plugins", Ok(-3.0)).into_value(), 0);
        assert_eq!(Probe::count("plugins", Ok(5.0)).into_value(), 5);
        assert_eq!(
            Probe::count("plugins", Err(ProbeError::Failed("boom".into()))).into_value(),
            0
        );
    }
}
