//! Collaborator doubles shared by the test modules.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use hadron_clk_api::{
    ClkError, ClkHandle, ClkInitData, ClkNode, ClkOps, ClkServices, GpioDesc, GpioLine,
    GpioLineId, Level,
};
use spin::Mutex;

/// Observable state of the one line a test claims.
pub struct LineState {
    level: Mutex<Level>,
    releases: AtomicUsize,
}

impl LineState {
    pub fn level(&self) -> Level {
        *self.level.lock()
    }

    /// Drives the line from outside the gate, as another agent on the
    /// hardware would.
    pub fn force_level(&self, level: Level) {
        *self.level.lock() = level;
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

struct MockLine {
    state: Arc<LineState>,
}

impl GpioLine for MockLine {
    fn set_level(&self, level: Level) {
        *self.state.level.lock() = level;
    }

    fn level(&self) -> Level {
        *self.state.level.lock()
    }
}

impl Drop for MockLine {
    fn drop(&mut self) {
        self.state.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Host double: counts collaborator calls, records claims, and fails on
/// request according to its scripts.
pub struct MockServices {
    pub line: Arc<LineState>,
    gpio_requests: AtomicUsize,
    registrations: AtomicUsize,
    fail_gpio: AtomicBool,
    /// Registration outcomes to fail with, consumed front to back.
    register_failures: Mutex<Vec<ClkError>>,
    /// `(line, consumer, initial)` of every accepted claim.
    claims: Mutex<Vec<(GpioLineId, String, Level)>>,
    /// Handles a real clock tree would keep for its registered clocks.
    retained: Mutex<Vec<ClkHandle>>,
}

impl MockServices {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            line: Arc::new(LineState {
                level: Mutex::new(Level::Low),
                releases: AtomicUsize::new(0),
            }),
            gpio_requests: AtomicUsize::new(0),
            registrations: AtomicUsize::new(0),
            fail_gpio: AtomicBool::new(false),
            register_failures: Mutex::new(Vec::new()),
            claims: Mutex::new(Vec::new()),
            retained: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_gpio() -> Arc<Self> {
        let services = Self::new();
        services.fail_gpio.store(true, Ordering::SeqCst);
        services
    }

    pub fn with_register_failures(failures: &[ClkError]) -> Arc<Self> {
        let services = Self::new();
        services.register_failures.lock().extend_from_slice(failures);
        services
    }

    pub fn gpio_requests(&self) -> usize {
        self.gpio_requests.load(Ordering::SeqCst)
    }

    pub fn registrations(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }

    pub fn claims(&self) -> Vec<(GpioLineId, String, Level)> {
        self.claims.lock().clone()
    }
}

impl ClkServices for MockServices {
    fn register_clock(
        &self,
        init: ClkInitData<'_>,
        ops: Arc<dyn ClkOps>,
    ) -> Result<ClkHandle, ClkError> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        let mut failures = self.register_failures.lock();
        if !failures.is_empty() {
            return Err(failures.remove(0));
        }
        drop(failures);

        let handle = ClkHandle::new(init, ops);
        self.retained.lock().push(handle.clone());
        Ok(handle)
    }

    fn request_gpio_output(
        &self,
        line: GpioLineId,
        consumer: &str,
        initial: Level,
    ) -> Result<Box<dyn GpioLine>, ClkError> {
        self.gpio_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_gpio.load(Ordering::SeqCst) {
            return Err(ClkError::LineUnavailable);
        }

        *self.line.level.lock() = initial;
        self.claims
            .lock()
            .push((line, String::from(consumer), initial));
        Ok(Box::new(MockLine {
            state: Arc::clone(&self.line),
        }))
    }
}

/// Description-node double with a scripted GPIO lookup.
pub struct MockNode {
    name: &'static str,
    parent: Option<&'static str>,
    /// Lookup outcomes, consumed front to back; the last entry repeats once
    /// the script is exhausted.
    lookups: Mutex<Vec<Result<GpioDesc, ClkError>>>,
    lookup_calls: AtomicUsize,
}

impl MockNode {
    pub fn new(
        name: &'static str,
        parent: Option<&'static str>,
        lookups: &[Result<GpioDesc, ClkError>],
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            parent,
            lookups: Mutex::new(lookups.to_vec()),
            lookup_calls: AtomicUsize::new(0),
        })
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

impl ClkNode for MockNode {
    fn name(&self) -> &str {
        self.name
    }

    fn gpio_property(&self, _name: &str, _index: usize) -> Result<GpioDesc, ClkError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        let mut lookups = self.lookups.lock();
        if lookups.len() > 1 {
            lookups.remove(0)
        } else {
            lookups[0]
        }
    }

    fn parent_name(&self, index: usize) -> Option<&str> {
        if index == 0 { self.parent } else { None }
    }
}
