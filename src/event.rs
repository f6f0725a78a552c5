//! External event notifications and the producer-to-worker queue.

use crate::types::{ActivityState, PowerState};

/// A notification from one of the external event producers.
///
/// Each variant carries the new value reported by the producer. Events are
/// enqueued from producer contexts and drained by the single low-priority
/// worker that owns the sequencer; sequencing code is never called inline
/// from a producer's own notification context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Activity state changed.
    ActivityChanged(ActivityState),

    /// A new battery charge sample arrived (percent).
    BatteryChanged(u8),

    /// The active radio-link profile changed to the given index.
    ProfileChanged(u8),

    /// Cable power state changed.
    PowerChanged(PowerState),

    /// A peer unit reported its link status (multi-unit devices only).
    PeerLinkChanged(bool),
}

/// Fixed-capacity single-producer single-consumer event queue.
///
/// Producers `enqueue` from their own context; the worker `dequeue`s and
/// feeds each event to [`IndicatorSequencer::handle_event`]. A full queue
/// drops the event, which is acceptable for a best-effort status display.
///
/// [`IndicatorSequencer::handle_event`]: crate::sequencer::IndicatorSequencer::handle_event
pub type EventQueue<const N: usize> = heapless::spsc::Queue<Event, N>;
