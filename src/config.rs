//! Runtime configuration for the sequencer.
//!
//! Every device-variant conditional (idle animation, suspend suppression,
//! per-level vs unified indicators) is a field here, evaluated at startup.
//! One build serves all variants and every branch is unit-testable.

use crate::time::TimeDuration;
use crate::types::IndicatorTopology;

/// Default ON time for the profile-change flash, in milliseconds.
pub const DEFAULT_PROFILE_FLASH_MS: u64 = 200;

/// Default ON time for one link pulse, in milliseconds.
pub const DEFAULT_LINK_PULSE_MS: u64 = 140;

/// Default gap between link pulses, in milliseconds.
pub const DEFAULT_LINK_PULSE_GAP_MS: u64 = 100;

/// Default duration a steady battery-level display is held, in milliseconds.
pub const DEFAULT_LEVEL_SHOW_MS: u64 = 700;

/// Default ON and OFF time of one blink cycle, in milliseconds.
pub const DEFAULT_BLINK_UNIT_MS: u64 = 200;

/// Default cooldown before re-checking an unreachable link, in milliseconds.
pub const DEFAULT_LINK_RECHECK_COOLDOWN_MS: u64 = 4_000;

/// Default battery sampling tick interval, in milliseconds.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 1_000;

/// Sequencer configuration, fixed at construction.
///
/// # Type Parameters
/// * `D` - Duration type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerConfig<D: TimeDuration> {
    /// Indicator hardware layout. Default: `PerLevel`.
    pub topology: IndicatorTopology,

    /// Run the charging animation when the device goes idle. Default: off.
    pub idle_indicator_enabled: bool,

    /// Suppress the charging animation while cable power is host-suspended,
    /// forcing all-off instead. Default: on.
    pub suppress_while_suspended: bool,

    /// Gate the charging animation on cable power actually being attached,
    /// forcing all-off when it is not. Default: on.
    pub all_time_battery_display: bool,

    /// ON time for the profile-change flash.
    pub profile_flash: D,

    /// ON time for one link pulse.
    pub link_pulse: D,

    /// Gap between link pulses on consecutive indicators.
    pub link_pulse_gap: D,

    /// How long a steady battery-level display is held.
    pub level_show: D,

    /// ON and OFF time of one blink cycle.
    pub blink_unit: D,

    /// Cooldown before re-checking an unreachable link.
    pub link_recheck_cooldown: D,

    /// Battery sampling tick interval.
    pub sample_interval: D,
}

impl<D: TimeDuration> Default for SequencerConfig<D> {
    fn default() -> Self {
        Self {
            topology: IndicatorTopology::PerLevel,
            idle_indicator_enabled: false,
            suppress_while_suspended: true,
            all_time_battery_display: true,
            profile_flash: D::from_millis(DEFAULT_PROFILE_FLASH_MS),
            link_pulse: D::from_millis(DEFAULT_LINK_PULSE_MS),
            link_pulse_gap: D::from_millis(DEFAULT_LINK_PULSE_GAP_MS),
            level_show: D::from_millis(DEFAULT_LEVEL_SHOW_MS),
            blink_unit: D::from_millis(DEFAULT_BLINK_UNIT_MS),
            link_recheck_cooldown: D::from_millis(DEFAULT_LINK_RECHECK_COOLDOWN_MS),
            sample_interval: D::from_millis(DEFAULT_SAMPLE_INTERVAL_MS),
        }
    }
}
