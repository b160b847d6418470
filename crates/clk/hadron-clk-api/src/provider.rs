//! Discovery boundary: on-demand clock providers and the declaration table
//! consulted during the startup scan.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::ClkError;
use crate::handle::ClkHandle;
use crate::node::ClkNode;
use crate::services::ClkServices;

/// Hands out the clock for one described instance, constructing it on first
/// use.
///
/// The clock tree calls [`clock`](Self::clock) whenever a consumer asks for
/// the described clock. A [`ClkError::ProbeDeferred`] result means a
/// dependency has not come up yet; the caller retries at its own cadence.
pub trait ClkProvider: Send + Sync {
    /// Returns the described clock, resolving and registering it if this is
    /// the first use.
    ///
    /// # Errors
    ///
    /// Returns [`ClkError::ProbeDeferred`] while a dependency is missing, or
    /// a hard error if resolution failed; hard failures leave the provider
    /// unresolved so a later call can retry.
    fn clock(&self) -> Result<ClkHandle, ClkError>;
}

/// Setup function invoked once per description node matching a declaration.
///
/// Builds the provider whose [`ClkProvider::clock`] the clock tree calls on
/// demand.
pub type ClkSetupFn =
    fn(Arc<dyn ClkNode>, Arc<dyn ClkServices>) -> Result<Arc<dyn ClkProvider>, ClkError>;

/// A discovery entry tying a description-type tag to its setup function.
#[derive(Clone, Copy)]
pub struct ClkDeclaration {
    /// Compatible tag matched against description nodes.
    pub compatible: &'static str,
    /// Called once per matching node found during the scan.
    pub setup: ClkSetupFn,
}

/// Table of clock declarations.
///
/// Populated at process start, consulted during a single discovery scan,
/// never mutated afterward. The scan itself belongs to the host; this type
/// only answers "which setup handles this tag".
#[derive(Default)]
pub struct ClkDeclarations {
    entries: Vec<ClkDeclaration>,
}

impl ClkDeclarations {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a declaration to the table.
    pub fn register(&mut self, declaration: ClkDeclaration) {
        self.entries.push(declaration);
    }

    /// Returns the declaration for `compatible`, if one is registered.
    #[must_use]
    pub fn find(&self, compatible: &str) -> Option<&ClkDeclaration> {
        self.entries.iter().find(|d| d.compatible == compatible)
    }

    /// Returns an iterator over all registered declarations.
    pub fn iter(&self) -> impl Iterator<Item = &ClkDeclaration> {
        self.entries.iter()
    }

    /// Returns the number of registered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no declaration has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
