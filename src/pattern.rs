//! Pattern player: primitive timed animations built on the output driver.
//!
//! A [`Pattern`] is a finite, immutable description of an animation; the
//! `hold`, `blink` and `ramp` functions render one against an
//! [`IndicatorBank`]. Rendering is blocking for the caller's execution
//! context: total wall-clock cost is `repeats * (on + off)`.

use crate::output::{IndicatorBank, IndicatorPin};
use crate::time::{DelaySource, TimeDuration};
use crate::types::PatternError;
use heapless::Vec;

/// A timed ON/OFF animation over a subset of indicators.
///
/// Not persisted; constructed transiently per invocation.
///
/// # Type Parameters
/// * `D` - Duration type
/// * `N` - Maximum number of indicators the pattern can target
#[derive(Debug, Clone)]
pub struct Pattern<D: TimeDuration, const N: usize> {
    indicators: Vec<u8, N>,
    on_duration: D,
    off_duration: D,
    repeats: u32,
}

impl<D: TimeDuration, const N: usize> Pattern<D, N> {
    /// Creates a validated pattern over the given indicator indices.
    ///
    /// # Errors
    /// * `NoIndicators` - the index list is empty
    /// * `CapacityExceeded` - more than `N` indices
    pub fn new(
        indicators: &[u8],
        on_duration: D,
        off_duration: D,
        repeats: u32,
    ) -> Result<Self, PatternError> {
        if indicators.is_empty() {
            return Err(PatternError::NoIndicators);
        }

        let mut list = Vec::new();
        for &index in indicators {
            list.push(index).map_err(|_| PatternError::CapacityExceeded)?;
        }

        Ok(Self {
            indicators: list,
            on_duration,
            off_duration,
            repeats,
        })
    }

    /// Creates a single-indicator, single-shot pattern.
    pub fn single(index: u8, on_duration: D, off_duration: D) -> Self {
        let mut indicators = Vec::new();
        // A one-element push into N >= 1 capacity cannot fail for any bank
        // this crate drives; a zero-capacity pattern renders nothing.
        let _ = indicators.push(index);

        Self {
            indicators,
            on_duration,
            off_duration,
            repeats: 1,
        }
    }

    /// Sets the repeat count (builder style).
    pub fn with_repeats(mut self, repeats: u32) -> Self {
        self.repeats = repeats;
        self
    }

    /// Returns the targeted indicator indices.
    pub fn indicators(&self) -> &[u8] {
        &self.indicators
    }

    /// Returns the ON duration.
    pub fn on_duration(&self) -> D {
        self.on_duration
    }

    /// Returns the OFF duration.
    pub fn off_duration(&self) -> D {
        self.off_duration
    }

    /// Returns the repeat count.
    pub fn repeats(&self) -> u32 {
        self.repeats
    }
}

/// Renders one ON/OFF cycle of the pattern.
fn cycle<P, W, D, const N: usize>(bank: &mut IndicatorBank<P, N>, delay: &W, pattern: &Pattern<D, N>)
where
    P: IndicatorPin,
    W: DelaySource<D>,
    D: TimeDuration,
{
    for &index in pattern.indicators() {
        bank.set(index, true);
    }
    if pattern.on_duration() != D::ZERO {
        delay.sleep(pattern.on_duration());
    }

    for &index in pattern.indicators() {
        bank.set(index, false);
    }
    if pattern.off_duration() != D::ZERO {
        delay.sleep(pattern.off_duration());
    }
}

/// Turns the pattern's indicators ON, sleeps for the ON duration, turns them
/// OFF, then sleeps for the OFF duration. One-shot, ignores the repeat count.
pub fn hold<P, W, D, const N: usize>(bank: &mut IndicatorBank<P, N>, delay: &W, pattern: &Pattern<D, N>)
where
    P: IndicatorPin,
    W: DelaySource<D>,
    D: TimeDuration,
{
    cycle(bank, delay, pattern);
}

/// Repeats the pattern's ON/OFF cycle `repeats` times.
pub fn blink<P, W, D, const N: usize>(bank: &mut IndicatorBank<P, N>, delay: &W, pattern: &Pattern<D, N>)
where
    P: IndicatorPin,
    W: DelaySource<D>,
    D: TimeDuration,
{
    for _ in 0..pattern.repeats() {
        cycle(bank, delay, pattern);
    }
}

/// Turns indicators on sequentially with a fixed step between them, then
/// forces everything off. Used by the charging animation.
pub fn ramp<P, W, D, const N: usize>(
    bank: &mut IndicatorBank<P, N>,
    delay: &W,
    indicators: &[u8],
    step: D,
) where
    P: IndicatorPin,
    W: DelaySource<D>,
    D: TimeDuration,
{
    for &index in indicators {
        bank.set(index, true);
        delay.sleep(step);
    }
    bank.all_off();
}
