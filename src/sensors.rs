//! On-demand sensor queries.

use crate::types::{ActivityState, PowerState};

/// Trait for querying the host's sensors on demand.
///
/// The sequencer re-reads sensors at dispatch time rather than trusting event
/// payloads, so gating decisions (powered short-circuit, suspend suppression)
/// always reflect the current hardware state.
pub trait StatusSensors {
    /// Returns the current activity state.
    fn activity_state(&self) -> ActivityState;

    /// Returns the battery state of charge in percent (0-100).
    ///
    /// A reading of 0 means the fuel gauge has not produced a valid sample
    /// yet; true 0% is operationally indistinguishable from an unread gauge
    /// in this device class.
    fn battery_level(&self) -> u8;

    /// Returns whether the radio link is currently usable.
    fn link_reachable(&self) -> bool;

    /// Returns the cable power state.
    fn power_state(&self) -> PowerState;
}
