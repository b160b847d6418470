//! Hardware-description collaborator boundary.
//!
//! A [`ClkNode`] is one externally owned description node (a device-tree
//! node or equivalent) describing a single clock instance's wiring: which
//! GPIO line controls it, under which polarity, and which clock feeds it.

use bitflags::bitflags;

use crate::error::ClkError;
use crate::gpio::GpioLineId;

bitflags! {
    /// Polarity flags attached to a GPIO reference in a hardware description.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GpioDescFlags: u32 {
        /// The line's active level is logic low.
        const ACTIVE_LOW = 1 << 0;
    }
}

/// A GPIO reference resolved from a hardware description: line plus polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioDesc {
    line: GpioLineId,
    flags: GpioDescFlags,
}

impl GpioDesc {
    /// Creates a resolved GPIO reference.
    #[must_use]
    pub const fn new(line: GpioLineId, flags: GpioDescFlags) -> Self {
        Self { line, flags }
    }

    /// Returns the referenced GPIO line.
    #[must_use]
    pub const fn line(&self) -> GpioLineId {
        self.line
    }

    /// Returns the raw polarity flags.
    #[must_use]
    pub const fn flags(&self) -> GpioDescFlags {
        self.flags
    }

    /// Returns `true` if the line's active level is logic low.
    #[must_use]
    pub const fn active_low(&self) -> bool {
        self.flags.contains(GpioDescFlags::ACTIVE_LOW)
    }
}

/// An externally owned hardware-description node for one clock instance.
///
/// Never mutated by clock drivers; lookups may be repeated freely.
pub trait ClkNode: Send + Sync {
    /// Returns the node name, which becomes the registered clock's name.
    fn name(&self) -> &str;

    /// Resolves the `index`-th GPIO reference of the property `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ClkError::ProbeDeferred`] if the line's GPIO provider has
    /// not come up yet (retry later), or [`ClkError::InvalidDescription`] if
    /// the property is missing, malformed, or names an unresolvable line.
    fn gpio_property(&self, name: &str, index: usize) -> Result<GpioDesc, ClkError>;

    /// Returns the name of the `index`-th parent clock, if the description
    /// names one.
    fn parent_name(&self, index: usize) -> Option<&str>;
}
