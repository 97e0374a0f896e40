//! Collection layer: host capability probes, tolerant aggregation into a [`Snapshot`].
//!
//! [`Snapshot`]: gatekeeper_core::Snapshot

mod collector;
mod geolocation;
mod host;
mod probe;
mod profile;
mod signals;
mod timing;

pub use collector::{CollectionReport, Collector};
pub use geolocation::{GEOLOCATION_TIMEOUT, locate};
pub use host::{HostEnvironment, LegacyTiming, NavigationTiming, PositionOptions, ProbeError};
pub use probe::Probe;
pub use profile::{EmptyHost, HostProfile};
pub use signals::ua_contains_headless;
pub use timing::page_timing;
