//! Clock registration data and the opaque handle returned by the clock tree.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::flags::ClkFlags;
use crate::ops::ClkOps;

/// Registration descriptor for one clock: its name, its single optional
/// parent, and the framework flags.
#[derive(Debug, Clone, Copy)]
pub struct ClkInitData<'a> {
    /// Name the clock is registered under; unique within the clock tree.
    pub name: &'a str,
    /// Name of the parent clock, if any. A gate has zero or one parent.
    pub parent: Option<&'a str>,
    /// Framework flags forwarded at registration.
    pub flags: ClkFlags,
}

impl ClkInitData<'_> {
    /// Returns the number of parents (0 or 1).
    #[must_use]
    pub const fn parent_count(&self) -> usize {
        if self.parent.is_some() { 1 } else { 0 }
    }
}

/// The registered clock record behind a [`ClkHandle`].
struct RegisteredClk {
    name: String,
    parent: Option<String>,
    flags: ClkFlags,
    ops: Arc<dyn ClkOps>,
}

/// Opaque handle to a registered clock.
///
/// Cloning is cheap and every clone refers to the same registered clock;
/// equality is identity, so two handles compare equal exactly when they came
/// from the same registration. Dropping the last handle drops the clock's
/// operation set, tearing down whatever hardware claim backs it.
#[derive(Clone)]
pub struct ClkHandle {
    inner: Arc<RegisteredClk>,
}

impl ClkHandle {
    /// Creates a handle for an accepted registration.
    ///
    /// Called by clock-tree implementations
    /// ([`ClkServices::register_clock`](crate::ClkServices::register_clock)),
    /// not by clock drivers.
    #[must_use]
    pub fn new(init: ClkInitData<'_>, ops: Arc<dyn ClkOps>) -> Self {
        Self {
            inner: Arc::new(RegisteredClk {
                name: String::from(init.name),
                parent: init.parent.map(String::from),
                flags: init.flags,
                ops,
            }),
        }
    }

    /// Returns the name the clock was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the parent clock's name, if the clock has one.
    #[must_use]
    pub fn parent_name(&self) -> Option<&str> {
        self.inner.parent.as_deref()
    }

    /// Returns the framework flags supplied at registration.
    #[must_use]
    pub fn flags(&self) -> ClkFlags {
        self.inner.flags
    }

    /// Turns the clock on.
    pub fn enable(&self) {
        self.inner.ops.enable();
    }

    /// Turns the clock off.
    pub fn disable(&self) {
        self.inner.ops.disable();
    }

    /// Returns whether the clock is currently on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.ops.is_enabled()
    }
}

impl PartialEq for ClkHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ClkHandle {}

impl fmt::Debug for ClkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClkHandle")
            .field("name", &self.inner.name)
            .field("parent", &self.inner.parent)
            .field("flags", &self.inner.flags)
            .finish_non_exhaustive()
    }
}
