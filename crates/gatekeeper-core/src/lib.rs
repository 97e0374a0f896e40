pub mod config;
pub mod fingerprint;
pub mod snapshot;
pub mod verdict;

pub use config::{ClientConfig, DEFAULT_API_URL};
pub use fingerprint::{CanvasScene, canvas_fingerprint, fold_hash};
pub use snapshot::{AutomationSignals, Coordinates, Dimensions, Snapshot, StorageSupport, Timing};
pub use verdict::{Action, RiskLevel, Verdict};
