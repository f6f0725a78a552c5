//! The indicator sequencer: shared state, timers and the worker surface.
//!
//! [`IndicatorSequencer`] owns the indicator bank, the configuration and the
//! shared state flags, and exposes the three entry points the host's
//! low-priority worker drives: [`start`], [`handle_event`] and [`poll`].
//! Everything is strictly serialized on that worker; no two patterns ever
//! render concurrently and the state flags need no locks.
//!
//! [`start`]: IndicatorSequencer::start
//! [`handle_event`]: IndicatorSequencer::handle_event
//! [`poll`]: IndicatorSequencer::poll

use crate::config::SequencerConfig;
use crate::output::{IndicatorBank, IndicatorPin};
use crate::sensors::StatusSensors;
use crate::time::{DelaySource, TimeInstant, TimeSource};
use crate::types::{ActivityState, AnnounceState, IndicatorTopology, PowerState};
use heapless::Vec;

/// Shared sequencer state, single-writer-per-field on the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerState {
    /// Last known activity state.
    pub device_active: bool,

    /// Whether the radio link is currently usable.
    pub link_reachable: bool,

    /// Whether cable power is attached.
    pub power_connected: bool,

    /// True while a link re-check timer is pending; avoids re-entrant
    /// pulsing from the event router.
    pub link_monitor_armed: bool,

    /// Most recent valid battery sample; `None` until the fuel gauge
    /// produces a first non-zero reading.
    pub last_battery_level: Option<u8>,
}

/// Drives a bank of status indicators from external device events.
///
/// Construct once at boot, call [`start`](Self::start), then feed it events
/// via [`handle_event`](Self::handle_event) and call
/// [`poll`](Self::poll) whenever [`next_deadline`](Self::next_deadline)
/// comes due. All four calls must come from the same execution context.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Indicator pin implementation type
/// * `T` - Time source implementation type
/// * `S` - Sensor implementation type
/// * `W` - Delay implementation type
/// * `N` - Maximum number of indicator slots
pub struct IndicatorSequencer<'t, I, P, T, S, W, const N: usize>
where
    I: TimeInstant,
    P: IndicatorPin,
    T: TimeSource<I>,
    S: StatusSensors,
    W: DelaySource<I::Duration>,
{
    pub(crate) bank: IndicatorBank<P, N>,
    pub(crate) config: SequencerConfig<I::Duration>,
    pub(crate) state: SequencerState,
    pub(crate) announce: AnnounceState,
    pub(crate) time_source: &'t T,
    pub(crate) sensors: S,
    pub(crate) delay: W,
    pub(crate) sample_due: Option<I>,
    pub(crate) link_recheck_due: Option<I>,
}

impl<'t, I, P, T, S, W, const N: usize> IndicatorSequencer<'t, I, P, T, S, W, N>
where
    I: TimeInstant,
    P: IndicatorPin,
    T: TimeSource<I>,
    S: StatusSensors,
    W: DelaySource<I::Duration>,
{
    /// Creates a new sequencer with state primed from the sensors.
    pub fn new(
        bank: IndicatorBank<P, N>,
        config: SequencerConfig<I::Duration>,
        time_source: &'t T,
        sensors: S,
        delay: W,
    ) -> Self {
        let state = SequencerState {
            device_active: sensors.activity_state() == ActivityState::Active,
            link_reachable: sensors.link_reachable(),
            power_connected: sensors.power_state() != PowerState::None,
            link_monitor_armed: false,
            last_battery_level: None,
        };

        Self {
            bank,
            config,
            state,
            announce: AnnounceState::WaitingForSample,
            time_source,
            sensors,
            delay,
            sample_due: None,
            link_recheck_due: None,
        }
    }

    /// Boots the sequencer: all indicators off, battery sampling armed to
    /// fire on the next [`poll`](Self::poll).
    pub fn start(&mut self) {
        self.bank.all_off();
        self.announce = AnnounceState::WaitingForSample;
        self.sample_due = Some(self.time_source.now());
    }

    /// Fires any timer whose deadline has passed.
    ///
    /// The battery sampling tick re-arms itself every
    /// [`sample_interval`](crate::config::SequencerConfig::sample_interval)
    /// until a valid sample arrives. The link re-check runs only while the
    /// device is active; a re-check that fires while idle is skipped and
    /// disarms the monitor so the next active transition checks again.
    pub fn poll(&mut self) {
        let now = self.time_source.now();

        if let Some(due) = self.sample_due {
            if now >= due {
                // Re-arm first; the tick cancels the timer once satisfied
                self.sample_due = Some(self.instant_after(self.config.sample_interval));
                self.battery_sample_tick();
            }
        }

        if let Some(due) = self.link_recheck_due {
            if now >= due {
                self.link_recheck_due = None;
                if self.sensors.activity_state() == ActivityState::Active {
                    self.check_link();
                } else {
                    self.state.link_monitor_armed = false;
                }
            }
        }
    }

    /// Returns the earliest pending timer deadline, if any.
    ///
    /// The host should call [`poll`](Self::poll) no later than this instant.
    /// `None` means no timer is pending and only events need servicing.
    pub fn next_deadline(&self) -> Option<I> {
        match (self.sample_due, self.link_recheck_due) {
            (Some(sample), Some(recheck)) => {
                Some(if recheck < sample { recheck } else { sample })
            }
            (sample, recheck) => sample.or(recheck),
        }
    }

    /// Returns the shared state flags.
    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    /// Returns the battery announcement progress.
    pub fn announce_state(&self) -> AnnounceState {
        self.announce
    }

    /// Current time plus `duration`, falling back to now on timer overflow.
    pub(crate) fn instant_after(&self, duration: I::Duration) -> I {
        let now = self.time_source.now();
        now.checked_add(duration).unwrap_or(now)
    }

    /// Indices of the indicators that act as the signalling group: the whole
    /// battery group for per-level layouts, the single status indicator for
    /// unified ones.
    pub(crate) fn group_indices(&self) -> Vec<u8, N> {
        let count = match self.config.topology {
            IndicatorTopology::Unified => self.bank.len().min(1),
            IndicatorTopology::PerLevel => self.bank.len(),
        };

        let mut indices = Vec::new();
        for index in 0..count {
            let _ = indices.push(index as u8);
        }
        indices
    }
}
