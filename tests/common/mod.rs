//! Shared test infrastructure for indicator-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indicator_sequencer::{
    ActivityState, DelaySource, IndicatorBank, IndicatorPin, IndicatorSequencer, PowerState,
    SequencerConfig, StatusSensors, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }

    fn checked_sub(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_sub(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Shared Write Trace
// ============================================================================

/// One observable side effect: a pin write or a blocking sleep.
///
/// All mock pins and the mock clock append to one shared trace, so tests can
/// assert the exact interleaving of writes and delays across the whole bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Indicator `index` driven on/off.
    Set(u8, bool),
    /// The worker slept for this many milliseconds.
    Sleep(u64),
}

pub type Trace = Rc<RefCell<Vec<TraceEvent>>>;

pub fn new_trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn clear(trace: &Trace) {
    trace.borrow_mut().clear();
}

pub fn recorded(trace: &Trace) -> Vec<TraceEvent> {
    trace.borrow().clone()
}

/// Only the pin writes, in order.
pub fn writes(trace: &Trace) -> Vec<(u8, bool)> {
    trace
        .borrow()
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Set(index, on) => Some((*index, *on)),
            TraceEvent::Sleep(_) => None,
        })
        .collect()
}

// ============================================================================
// Mock Pin
// ============================================================================

/// Mock indicator pin that records writes into the shared trace
pub struct MockPin {
    index: u8,
    fail_configure: bool,
    trace: Trace,
}

impl MockPin {
    pub fn new(index: u8, trace: &Trace) -> Self {
        Self {
            index,
            fail_configure: false,
            trace: trace.clone(),
        }
    }

    pub fn failing(index: u8, trace: &Trace) -> Self {
        Self {
            index,
            fail_configure: true,
            trace: trace.clone(),
        }
    }
}

impl IndicatorPin for MockPin {
    type Error = ();

    fn configure(&mut self) -> Result<(), Self::Error> {
        if self.fail_configure { Err(()) } else { Ok(()) }
    }

    fn set(&mut self, on: bool) {
        self.trace.borrow_mut().push(TraceEvent::Set(self.index, on));
    }
}

// ============================================================================
// Mock Clock (time source + delay over one shared cell)
// ============================================================================

/// Mock clock with controllable time; blocking sleeps advance it and are
/// recorded in the shared trace
#[derive(Clone)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
    trace: Trace,
}

impl MockClock {
    pub fn new(trace: &Trace) -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            trace: trace.clone(),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    pub fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        TestInstant(self.now.get())
    }
}

impl DelaySource<TestDuration> for MockClock {
    fn sleep(&self, duration: TestDuration) {
        self.now.set(self.now.get() + duration.0);
        self.trace.borrow_mut().push(TraceEvent::Sleep(duration.0));
    }
}

// ============================================================================
// Mock Sensors
// ============================================================================

struct SensorState {
    activity: Cell<ActivityState>,
    battery: Cell<u8>,
    link: Cell<bool>,
    power: Cell<PowerState>,
}

/// Mock sensors with settable readings; clones share state
#[derive(Clone)]
pub struct MockSensors {
    inner: Rc<SensorState>,
}

impl MockSensors {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SensorState {
                activity: Cell::new(ActivityState::Active),
                battery: Cell::new(0),
                link: Cell::new(false),
                power: Cell::new(PowerState::None),
            }),
        }
    }

    pub fn set_activity(&self, activity: ActivityState) {
        self.inner.activity.set(activity);
    }

    pub fn set_battery(&self, level: u8) {
        self.inner.battery.set(level);
    }

    pub fn set_link(&self, reachable: bool) {
        self.inner.link.set(reachable);
    }

    pub fn set_power(&self, power: PowerState) {
        self.inner.power.set(power);
    }
}

impl StatusSensors for MockSensors {
    fn activity_state(&self) -> ActivityState {
        self.inner.activity.get()
    }

    fn battery_level(&self) -> u8 {
        self.inner.battery.get()
    }

    fn link_reachable(&self) -> bool {
        self.inner.link.get()
    }

    fn power_state(&self) -> PowerState {
        self.inner.power.get()
    }
}

// ============================================================================
// Construction Helpers
// ============================================================================

pub type TestSequencer<'t, const N: usize> =
    IndicatorSequencer<'t, TestInstant, MockPin, MockClock, MockSensors, MockClock, N>;

pub fn bank3(trace: &Trace) -> IndicatorBank<MockPin, 3> {
    IndicatorBank::new([
        MockPin::new(0, trace),
        MockPin::new(1, trace),
        MockPin::new(2, trace),
    ])
}

pub fn bank1(trace: &Trace) -> IndicatorBank<MockPin, 1> {
    IndicatorBank::new([MockPin::new(0, trace)])
}

/// Three-indicator sequencer with default configuration.
pub fn sequencer3<'t>(
    clock: &'t MockClock,
    sensors: &MockSensors,
    trace: &Trace,
) -> TestSequencer<'t, 3> {
    sequencer3_with(SequencerConfig::default(), clock, sensors, trace)
}

pub fn sequencer3_with<'t>(
    config: SequencerConfig<TestDuration>,
    clock: &'t MockClock,
    sensors: &MockSensors,
    trace: &Trace,
) -> TestSequencer<'t, 3> {
    IndicatorSequencer::new(bank3(trace), config, clock, sensors.clone(), clock.clone())
}

// ============================================================================
// Expected-Trace Builders (default timings)
// ============================================================================

/// Every indicator in 0..count driven OFF, the all_off baseline.
pub fn all_off_events(count: u8) -> Vec<TraceEvent> {
    (0..count).map(|i| TraceEvent::Set(i, false)).collect()
}

/// The link-down pulse sweep over indicators 0..count.
pub fn link_pulse_events(count: u8) -> Vec<TraceEvent> {
    let mut events = Vec::new();
    for i in 0..count {
        events.push(TraceEvent::Set(i, true));
        events.push(TraceEvent::Sleep(140));
        events.push(TraceEvent::Set(i, false));
        events.push(TraceEvent::Sleep(100));
    }
    events
}

/// A full unreachable-and-unpowered link check: baseline, sweep, baseline.
pub fn link_check_events(count: u8) -> Vec<TraceEvent> {
    let mut events = all_off_events(count);
    events.extend(link_pulse_events(count));
    events.extend(all_off_events(count));
    events
}

/// One indicator blinking `cycles` times at the default blink unit.
pub fn blink_events(index: u8, cycles: u32) -> Vec<TraceEvent> {
    let mut events = Vec::new();
    for _ in 0..cycles {
        events.push(TraceEvent::Set(index, true));
        events.push(TraceEvent::Sleep(200));
        events.push(TraceEvent::Set(index, false));
        events.push(TraceEvent::Sleep(200));
    }
    events
}
