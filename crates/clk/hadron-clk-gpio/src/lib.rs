//! GPIO-gated clock driver.
//!
//! A gpio clock is a binary gate: a single GPIO output line turns it on and
//! off, and its rate is inherited unchanged from its one fixed parent. This
//! crate provides:
//!
//! - [`GpioGate`] -- the gate itself, implementing the clock lifecycle
//!   operations as level writes and readback under a configurable
//!   active-low polarity.
//! - [`register_gpio_clock`] -- one-shot construction and registration with
//!   full rollback on any failure.
//! - [`GpioClkProvider`] -- deferred registration: the hardware description
//!   is resolved on first use, because the GPIO provider it names may not be
//!   up yet when descriptions are scanned. [`DECLARATION`] plugs the driver
//!   into the startup declaration table.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod deferred;
pub mod gate;

#[cfg(test)]
pub(crate) mod mock;

pub use deferred::{COMPATIBLE, DECLARATION, GpioClkProvider, gpio_clk_setup};
pub use gate::{GpioGate, register_gpio_clock};
