//! Core types shared across the sequencer.

/// Device activity state as reported by the host's activity tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivityState {
    /// Device is in use.
    Active,

    /// Device has gone idle.
    Idle,
}

/// Cable power state.
///
/// `Present` means the cable is physically attached; `Powered` means it is
/// actively delivering power. A host-suspended cable reports `Suspended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// No cable attached.
    None,

    /// Cable attached but not delivering power.
    Present,

    /// Cable attached, host suspended.
    Suspended,

    /// Cable actively delivering power.
    Powered,
}

/// How the indicator hardware is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorTopology {
    /// One indicator per charge-level band (group of 2-3).
    PerLevel,

    /// A single combined status indicator.
    Unified,
}

/// Progress of the one-shot battery announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnnounceState {
    /// No valid battery sample yet; the sampling tick keeps firing.
    WaitingForSample,

    /// A pattern is being rendered.
    Announcing,

    /// The announcement ran; nothing more until the next boot/wake.
    Done,
}

/// Pattern validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// No indicators provided.
    NoIndicators,

    /// More indicators than the pattern can hold.
    CapacityExceeded,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::NoIndicators => {
                write!(f, "pattern must target at least one indicator")
            }
            PatternError::CapacityExceeded => {
                write!(f, "pattern indicator capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}
