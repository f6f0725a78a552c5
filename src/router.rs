//! Event router: dispatches external notifications to the monitor and
//! announcer under the precedence rules.
//!
//! Dispatch is non-re-entrant: the worker drains the event queue one event
//! at a time, and a running pattern always completes before the next event
//! is processed.

use crate::event::Event;
use crate::output::IndicatorPin;
use crate::pattern::{self, Pattern};
use crate::sensors::StatusSensors;
use crate::sequencer::IndicatorSequencer;
use crate::time::{DelaySource, TimeDuration, TimeInstant, TimeSource};
use crate::types::{ActivityState, IndicatorTopology, PowerState};

const CHARGING_RAMP_INDICATORS: [u8; 2] = [0, 1];

impl<'t, I, P, T, S, W, const N: usize> IndicatorSequencer<'t, I, P, T, S, W, N>
where
    I: TimeInstant,
    P: IndicatorPin,
    T: TimeSource<I>,
    S: StatusSensors,
    W: DelaySource<I::Duration>,
{
    /// Dispatches one external event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::ActivityChanged(activity) => self.on_activity_changed(activity),
            Event::BatteryChanged(level) => self.on_battery_changed(level),
            Event::ProfileChanged(index) => self.on_profile_changed(index),
            Event::PowerChanged(power) => self.on_power_changed(power),
            Event::PeerLinkChanged(connected) => self.on_peer_link_changed(connected),
        }
    }

    /// Active: baseline off, then a link check unless one is already armed.
    /// Idle: optionally the idle/charging animation.
    fn on_activity_changed(&mut self, activity: ActivityState) {
        self.state.device_active = activity == ActivityState::Active;

        if self.state.device_active {
            self.bank.all_off();
            if !self.state.link_monitor_armed {
                self.check_link();
            }
        } else if self.config.idle_indicator_enabled {
            self.charging_animation();
        }
    }

    /// Caches the newest valid sample; 0 stays the "unread gauge" sentinel.
    fn on_battery_changed(&mut self, level: u8) {
        if level != 0 {
            self.state.last_battery_level = Some(level);
        }
    }

    /// Flashes the indicator matching the newly selected profile, then hands
    /// off to the link monitor. Indices outside the configured per-level set
    /// are ignored, not an error.
    fn on_profile_changed(&mut self, index: u8) {
        if self.config.topology == IndicatorTopology::PerLevel
            && (index as usize) < self.bank.len()
        {
            let flash = Pattern::single(index, self.config.profile_flash, I::Duration::ZERO);
            pattern::hold(&mut self.bank, &self.delay, &flash);
            self.bank.all_off();
        }

        if !self.state.link_monitor_armed {
            self.check_link();
        }
    }

    /// Runs the charging animation when the cable starts actively delivering
    /// power. Other transitions only update the `power_connected` flag.
    fn on_power_changed(&mut self, power: PowerState) {
        self.state.power_connected = power != PowerState::None;

        if power == PowerState::Powered {
            self.charging_animation();
            self.bank.all_off();
        }
    }

    /// Adopts the peer's link report; a drop triggers an immediate check.
    fn on_peer_link_changed(&mut self, connected: bool) {
        self.state.link_reachable = connected;
        if !connected {
            self.check_link();
        }
    }

    /// Charging-style animation pass: two indicators pulsed sequentially.
    ///
    /// Gated on live sensor state, not on the event payload: without cable
    /// power (when `all_time_battery_display` is set) or while suspended
    /// (when `suppress_while_suspended` is set) the pass forces all-off
    /// instead of animating.
    fn charging_animation(&mut self) {
        let power = self.sensors.power_state();

        if self.config.all_time_battery_display && power == PowerState::None {
            self.bank.all_off();
            return;
        }

        if self.config.suppress_while_suspended && power == PowerState::Suspended {
            self.bank.all_off();
            return;
        }

        pattern::ramp(
            &mut self.bank,
            &self.delay,
            &CHARGING_RAMP_INDICATORS,
            self.config.blink_unit,
        );
    }
}
