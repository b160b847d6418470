//! The gate state machine and one-shot construction/registration.

use alloc::boxed::Box;
use alloc::sync::Arc;

use hadron_clk_api::{
    ClkError, ClkHandle, ClkInitData, ClkOps, ClkServices, GpioLine, GpioLineId, Level,
};

/// A clock gated by a single GPIO output line.
///
/// The line level at any instant is `enabled XOR active_low` mapped onto
/// low/high: the clock is on exactly when the line sits at the active level
/// implied by its polarity.
pub struct GpioGate {
    line: Box<dyn GpioLine>,
    active_low: bool,
}

impl GpioGate {
    /// Creates a gate over an already-claimed output line.
    #[must_use]
    pub fn new(line: Box<dyn GpioLine>, active_low: bool) -> Self {
        Self { line, active_low }
    }

    /// Returns the gate's polarity.
    #[must_use]
    pub fn active_low(&self) -> bool {
        self.active_low
    }
}

impl ClkOps for GpioGate {
    fn enable(&self) {
        self.line.set_level(Level::active(self.active_low));
    }

    fn disable(&self) {
        self.line.set_level(Level::inactive(self.active_low));
    }

    fn is_enabled(&self) -> bool {
        // Always read the hardware back rather than caching: the query stays
        // authoritative even if another agent toggles the line.
        self.line.level() == Level::active(self.active_low)
    }
}

/// Claims `line`, builds a [`GpioGate`] over it, and registers the gate with
/// the clock tree.
///
/// The line is claimed at the inactive level for the given polarity, so the
/// clock cannot be observed enabled before its first explicit `enable`.
/// Every failure path releases whatever was acquired: the claimed line is
/// owned by the gate record, and until registration succeeds the local
/// reference is that record's sole owner.
///
/// # Errors
///
/// Returns [`ClkError::LineUnavailable`] if the line cannot be claimed, or
/// whatever [`ClkServices::register_clock`] reports.
pub fn register_gpio_clock(
    services: &dyn ClkServices,
    init: ClkInitData<'_>,
    line: GpioLineId,
    active_low: bool,
) -> Result<ClkHandle, ClkError> {
    let initial = Level::inactive(active_low);
    let claimed = match services.request_gpio_output(line, init.name, initial) {
        Ok(claimed) => claimed,
        Err(err) => {
            log::error!(
                "{}: failed to claim clock control gpio {line}: {err}",
                init.name
            );
            return Err(err);
        }
    };

    let gate = Arc::new(GpioGate::new(claimed, active_low));
    services.register_clock(init, gate)
}
