//! Battery-level announcer: one-shot charge display per wake cycle.
//!
//! A periodic sampling tick fires until the fuel gauge produces a first
//! non-zero reading; level 0 is the "not yet sampled" sentinel, so the tick
//! keeps firing indefinitely until a real sample appears. The first valid
//! sample cancels the tick, renders exactly one threshold band and hands off
//! to the link monitor, fixing the boot sequence: announce battery once,
//! then continuously monitor the link.

use crate::output::IndicatorPin;
use crate::pattern::{self, Pattern};
use crate::sensors::StatusSensors;
use crate::sequencer::IndicatorSequencer;
use crate::time::{DelaySource, TimeInstant, TimeSource};
use crate::types::AnnounceState;

const LEVEL_BLINK_COUNT: u32 = 3;

impl<'t, I, P, T, S, W, const N: usize> IndicatorSequencer<'t, I, P, T, S, W, N>
where
    I: TimeInstant,
    P: IndicatorPin,
    T: TimeSource<I>,
    S: StatusSensors,
    W: DelaySource<I::Duration>,
{
    /// One firing of the battery sampling tick.
    ///
    /// No valid sample: return and let the periodic tick re-fire. Valid
    /// sample: cancel the tick, render the matching band, force all off and
    /// run one link check.
    pub(crate) fn battery_sample_tick(&mut self) {
        let level = self.sensors.battery_level();
        if level == 0 {
            return;
        }

        self.sample_due = None;
        self.state.last_battery_level = Some(level);

        self.announce = AnnounceState::Announcing;
        self.render_level(level);
        self.bank.all_off();
        self.announce = AnnounceState::Done;

        self.check_link();
    }

    /// Re-runs the battery announcement on demand.
    ///
    /// No-op while the fuel gauge has not produced a valid sample yet.
    pub fn show_battery(&mut self) {
        self.battery_sample_tick();
    }

    /// Forces all indicators off.
    pub fn hide_battery(&mut self) {
        self.bank.all_off();
    }

    /// Renders the threshold band for `level`, highest match first.
    ///
    /// Indices past the end of the bank are absorbed by the output driver,
    /// so 2-indicator groups and unified banks degrade gracefully.
    fn render_level(&mut self, level: u8) {
        let blink_unit = self.config.blink_unit;

        if level == 100 {
            if let Ok(all) = Pattern::new(
                &self.group_indices(),
                blink_unit,
                blink_unit,
                LEVEL_BLINK_COUNT,
            ) {
                pattern::blink(&mut self.bank, &self.delay, &all);
            }
        } else if level > 70 {
            self.bank.set(0, true);
            self.bank.set(1, true);
            let top = Pattern::single(2, blink_unit, blink_unit).with_repeats(LEVEL_BLINK_COUNT);
            pattern::blink(&mut self.bank, &self.delay, &top);
        } else if level > 50 {
            self.bank.set(0, true);
            self.bank.set(1, true);
            self.delay.sleep(self.config.level_show);
        } else if level > 30 {
            self.bank.set(0, true);
            let mid = Pattern::single(1, blink_unit, blink_unit).with_repeats(LEVEL_BLINK_COUNT);
            pattern::blink(&mut self.bank, &self.delay, &mid);
        } else if level > 15 {
            self.bank.set(0, true);
            self.delay.sleep(self.config.level_show);
        } else {
            let low = Pattern::single(0, blink_unit, blink_unit).with_repeats(LEVEL_BLINK_COUNT);
            pattern::blink(&mut self.bank, &self.delay, &low);
        }
    }
}
