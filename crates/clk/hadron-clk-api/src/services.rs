//! Host service contract for clock drivers.
//!
//! Clock drivers use [`ClkServices`] to reach the clock tree and the GPIO
//! subsystem without depending on the host's implementation of either.

use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::error::ClkError;
use crate::gpio::{GpioLine, GpioLineId, Level};
use crate::handle::{ClkHandle, ClkInitData};
use crate::ops::ClkOps;

/// Trait providing host services to clock drivers.
///
/// Implemented by the host and handed to drivers at setup time, the same
/// instance serving every clock the driver registers.
pub trait ClkServices: Send + Sync {
    /// Registers a clock with the clock tree and returns its handle.
    ///
    /// On failure the implementation must not retain `ops`; the caller's
    /// copy then carries the only ownership of the clock's hardware claims.
    ///
    /// # Errors
    ///
    /// Returns [`ClkError::RegistrationConflict`] if the name is already
    /// taken or the parent is invalid, or [`ClkError::OutOfMemory`] if the
    /// clock tree cannot allocate its record.
    fn register_clock(
        &self,
        init: ClkInitData<'_>,
        ops: Arc<dyn ClkOps>,
    ) -> Result<ClkHandle, ClkError>;

    /// Requests exclusive ownership of `line`, configured as an output
    /// driving `initial`.
    ///
    /// `consumer` labels the claim for diagnostics. The claim is released
    /// when the returned handle is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ClkError::LineUnavailable`] if the line is already claimed
    /// or does not exist.
    fn request_gpio_output(
        &self,
        line: GpioLineId,
        consumer: &str,
        initial: Level,
    ) -> Result<Box<dyn GpioLine>, ClkError>;
}
