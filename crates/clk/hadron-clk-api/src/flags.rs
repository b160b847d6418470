//! Framework flags supplied at clock registration.

use bitflags::bitflags;

bitflags! {
    /// Flags forwarded to the clock tree when a clock is registered.
    ///
    /// A gate inherits its rate unchanged from its parent; these flags only
    /// adjust how the framework manages the clock, never what it does.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClkFlags: u32 {
        /// Rate requests on this clock propagate to its parent.
        const SET_RATE_PARENT = 1 << 0;
        /// The framework must not gate this clock just because it has no
        /// enabled consumers.
        const IGNORE_UNUSED = 1 << 1;
        /// The clock must never be gated by the framework.
        const IS_CRITICAL = 1 << 2;
    }
}
