//! Output driver: maps indicator slot indices to physical pin writes.
//!
//! Provides [`IndicatorBank`], the only owner of the indicator pins, and the
//! [`IndicatorPin`] trait for hardware abstraction. The bank is a best-effort
//! surface: writes to unconfigured or out-of-range slots silently no-op, the
//! correct fail-safe for a non-critical status light.

/// Trait for abstracting a single binary-output indicator.
///
/// Implement this for your indicator hardware (GPIO, LED driver channel,
/// etc.) to allow the sequencer to control it.
pub trait IndicatorPin {
    /// Hardware error produced by one-time pin setup.
    type Error: core::fmt::Debug;

    /// One-time hardware setup, called when the pin is added to a bank.
    ///
    /// Failure is non-fatal: the slot is left permanently dark and the
    /// device continues to boot.
    fn configure(&mut self) -> Result<(), Self::Error>;

    /// Drives the indicator fully on or off.
    ///
    /// Must be idempotent. Handle any hardware errors internally - this
    /// method cannot fail.
    fn set(&mut self, on: bool);
}

/// An ordered bank of indicator slots.
///
/// Slot order corresponds to ascending charge-level significance: the lowest
/// index maps to the lowest threshold band. Slots whose pin failed to
/// configure hold `None` and absorb writes without effect.
///
/// # Type Parameters
/// * `P` - Pin implementation type
/// * `N` - Number of indicator slots
pub struct IndicatorBank<P: IndicatorPin, const N: usize> {
    slots: [Option<P>; N],
}

impl<P: IndicatorPin, const N: usize> IndicatorBank<P, N> {
    /// Creates a bank from pins, configuring each one.
    ///
    /// Pins that fail to configure are logged and replaced with a dark slot;
    /// successfully configured pins are driven to OFF as a safe baseline.
    pub fn new(pins: [P; N]) -> Self {
        let mut slot = 0usize;
        let slots = pins.map(|mut pin| {
            let configured = match pin.configure() {
                Ok(()) => {
                    pin.set(false);
                    Some(pin)
                }
                Err(_err) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!(
                        "indicator slot {} failed to configure, leaving dark: {}",
                        slot,
                        defmt::Debug2Format(&_err)
                    );
                    None
                }
            };
            slot += 1;
            configured
        });
        let _ = slot;

        Self { slots }
    }

    /// Returns the number of slots in the bank, configured or not.
    pub fn len(&self) -> usize {
        N
    }

    /// Returns true if the bank holds no slots.
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the number of slots with a working pin behind them.
    pub fn configured_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Sets one indicator on or off.
    ///
    /// Out-of-range indices and unconfigured slots are ignored, not an error.
    pub fn set(&mut self, index: u8, on: bool) {
        if let Some(Some(pin)) = self.slots.get_mut(index as usize) {
            pin.set(on);
        }
    }

    /// Sets every configured indicator to OFF.
    ///
    /// Used as the safe baseline before and after every animation and on
    /// every suppressing condition. Idempotent.
    pub fn all_off(&mut self) {
        for pin in self.slots.iter_mut().flatten() {
            pin.set(false);
        }
    }
}
