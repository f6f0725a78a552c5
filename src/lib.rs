#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`IndicatorSequencer`**: the event-driven engine; owns the bank, the
//!   state flags and both timers, and runs on one low-priority worker
//! - **`IndicatorBank`**: ordered bank of binary indicators; out-of-range or
//!   unconfigured slots absorb writes silently
//! - **`Pattern`** + `pattern::{hold, blink, ramp}`: finite blocking
//!   ON/OFF animations
//! - **`Event`** / **`EventQueue`**: typed notifications handed from
//!   producer contexts to the worker
//! - **`SequencerConfig`**: every device-variant conditional as a runtime
//!   field with documented defaults
//! - **`IndicatorPin`**, **`StatusSensors`**, **`TimeSource`**,
//!   **`DelaySource`**: traits to implement for your hardware and platform

pub mod config;
pub mod event;
pub mod output;
pub mod pattern;
pub mod sensors;
pub mod sequencer;
pub mod time;
pub mod types;

mod announcer;
mod monitor;
mod router;

pub use config::SequencerConfig;
pub use event::{Event, EventQueue};
pub use output::{IndicatorBank, IndicatorPin};
pub use pattern::Pattern;
pub use sensors::StatusSensors;
pub use sequencer::{IndicatorSequencer, SequencerState};
pub use time::{DelaySource, TimeDuration, TimeInstant, TimeSource};
pub use types::{ActivityState, AnnounceState, IndicatorTopology, PatternError, PowerState};
