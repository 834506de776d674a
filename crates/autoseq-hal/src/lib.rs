//! `autoseq-hal` – hardware abstraction for autonomous routines.
//!
//! Drivers implement the [`Motor`] or [`ServoDevice`] trait and register
//! themselves with a [`HardwareMap`] under a stable string identifier.
//! Routine code never talks to a driver directly: it *acquires* an exclusive
//! [`ActuatorHandle`] by name and issues power/position commands through it.
//!
//! # Modules
//!
//! - [`motor`] – [`Motor`] trait plus the [`Direction`] and [`IdleBehavior`]
//!   parameters applied at acquisition.
//! - [`servo`] – [`ServoDevice`] trait for open-loop, write-only actuators.
//! - [`map`] – [`HardwareMap`]: string-keyed driver storage with
//!   move-out-on-acquire exclusivity.
//! - [`handle`] – [`ActuatorHandle`] and the [`SharedActuator`] alias used to
//!   share one handle across the actions of a routine.
//! - [`sim`] – simulated drivers and the [`SimHardware`] builder for headless
//!   tests and CI.

pub mod handle;
pub mod map;
pub mod motor;
pub mod servo;
pub mod sim;

pub use handle::{ActuatorHandle, SharedActuator, shared};
pub use map::HardwareMap;
pub use motor::{Direction, IdleBehavior, Motor};
pub use servo::ServoDevice;
pub use sim::{SimHardware, SimMotor, SimServo};
