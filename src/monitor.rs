//! Link-status monitor: recurring reachability check and pulse.
//!
//! Level-triggered, not edge-triggered: any check while the link is still
//! unreachable restarts the cooldown and re-pulses, the intended "keep
//! nudging" behavior. The cooldown throttles pulsing while the link stays
//! down; the powered short-circuit skips the signal entirely when the user
//! already has a definitive power cue elsewhere.

use crate::output::IndicatorPin;
use crate::pattern::{self, Pattern};
use crate::sensors::StatusSensors;
use crate::sequencer::IndicatorSequencer;
use crate::time::{DelaySource, TimeInstant, TimeSource};
use crate::types::PowerState;

impl<'t, I, P, T, S, W, const N: usize> IndicatorSequencer<'t, I, P, T, S, W, N>
where
    I: TimeInstant,
    P: IndicatorPin,
    T: TimeSource<I>,
    S: StatusSensors,
    W: DelaySource<I::Duration>,
{
    /// Checks link reachability and signals the result.
    ///
    /// Reachable: disarm the monitor and force all indicators off.
    /// Unreachable on cable power: no-op. Unreachable on battery: pulse each
    /// group indicator once, then arm a one-shot re-check after the
    /// configured cooldown.
    pub fn check_link(&mut self) {
        self.state.link_reachable = self.sensors.link_reachable();

        if self.state.link_reachable {
            self.state.link_monitor_armed = false;
            self.bank.all_off();
            return;
        }

        self.state.power_connected = self.sensors.power_state() != PowerState::None;
        if self.state.power_connected {
            return;
        }

        self.bank.all_off();
        for index in self.group_indices() {
            let pulse = Pattern::single(index, self.config.link_pulse, self.config.link_pulse_gap);
            pattern::hold(&mut self.bank, &self.delay, &pulse);
        }
        self.bank.all_off();

        self.state.link_monitor_armed = true;
        self.link_recheck_due = Some(self.instant_after(self.config.link_recheck_cooldown));
    }
}
