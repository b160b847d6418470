//! Deferred registration of gpio clocks.
//!
//! A described gpio clock cannot always be registered when descriptions are
//! scanned: the GPIO provider its line lives on may not be up yet. Instead
//! of registering eagerly, the setup entry installs a [`GpioClkProvider`]
//! that resolves the description the first time the clock tree asks for the
//! clock, and callers retry on [`ClkError::ProbeDeferred`].

use alloc::sync::Arc;

use hadron_clk_api::{
    ClkDeclaration, ClkError, ClkFlags, ClkHandle, ClkInitData, ClkNode, ClkProvider, ClkServices,
};
use spin::Mutex;

use crate::gate::register_gpio_clock;

/// Description property naming the gate's control line and polarity.
const ENABLE_GPIOS: &str = "enable-gpios";

/// Description-type tag this driver handles.
pub const COMPATIBLE: &str = "gpio-clock";

/// Resolves one described gpio clock on first use and caches the result.
///
/// All resolution runs under an internal guard: concurrent callers observe
/// either the unresolved or the fully resolved state, never a partially
/// constructed clock. Once resolved, the cached handle is returned forever;
/// a failed resolution leaves the cache empty so the next call retries from
/// scratch.
pub struct GpioClkProvider {
    node: Arc<dyn ClkNode>,
    services: Arc<dyn ClkServices>,
    /// Set at most once, by the first caller to resolve successfully.
    registered: Mutex<Option<ClkHandle>>,
}

impl GpioClkProvider {
    /// Creates an unresolved provider for `node`.
    #[must_use]
    pub fn new(node: Arc<dyn ClkNode>, services: Arc<dyn ClkServices>) -> Self {
        Self {
            node,
            services,
            registered: Mutex::new(None),
        }
    }

    /// Returns the described clock, registering it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ClkError::ProbeDeferred`] while the line's GPIO provider is
    /// missing, [`ClkError::InvalidDescription`] for a malformed
    /// description, or whatever construction and registration report. No
    /// GPIO line is claimed before the description resolves.
    pub fn clock(&self) -> Result<ClkHandle, ClkError> {
        let mut registered = self.registered.lock();
        if let Some(handle) = registered.as_ref() {
            return Ok(handle.clone());
        }

        let desc = self.node.gpio_property(ENABLE_GPIOS, 0).map_err(|err| {
            // Deferral is an expected stage of bring-up; only harder lookup
            // failures are worth reporting.
            if !err.is_probe_deferred() {
                log::error!(
                    "{}: cannot resolve '{ENABLE_GPIOS}' property: {err}",
                    self.node.name()
                );
            }
            err
        })?;

        let init = ClkInitData {
            name: self.node.name(),
            parent: self.node.parent_name(0),
            flags: ClkFlags::empty(),
        };
        let handle = register_gpio_clock(&*self.services, init, desc.line(), desc.active_low())?;

        *registered = Some(handle.clone());
        Ok(handle)
    }
}

impl ClkProvider for GpioClkProvider {
    fn clock(&self) -> Result<ClkHandle, ClkError> {
        GpioClkProvider::clock(self)
    }
}

/// Setup entry for a description node matching [`COMPATIBLE`].
///
/// Installs a deferred provider; nothing is resolved or claimed here.
///
/// # Errors
///
/// Currently infallible; the signature matches
/// [`ClkSetupFn`](hadron_clk_api::ClkSetupFn).
pub fn gpio_clk_setup(
    node: Arc<dyn ClkNode>,
    services: Arc<dyn ClkServices>,
) -> Result<Arc<dyn ClkProvider>, ClkError> {
    Ok(Arc::new(GpioClkProvider::new(node, services)))
}

/// Startup-table entry for gpio-controlled clocks.
pub const DECLARATION: ClkDeclaration = ClkDeclaration {
    compatible: COMPATIBLE,
    setup: gpio_clk_setup,
};
