//! The capability set attached to every registered clock.

/// Lifecycle operations of a registered clock.
///
/// `enable` and `disable` are infallible and idempotent; `is_enabled` is a
/// pure query with no hardware side effect. The clock tree serializes
/// lifecycle calls per clock instance; implementations are not required to
/// synchronize these three operations against each other.
pub trait ClkOps: Send + Sync {
    /// Turns the clock on.
    fn enable(&self);

    /// Turns the clock off.
    fn disable(&self);

    /// Returns whether the clock is currently on.
    fn is_enabled(&self) -> bool;
}
