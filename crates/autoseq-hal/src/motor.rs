//! [`Motor`] trait for power-driven actuators with encoder feedback.
//!
//! Drivers implement this trait and register themselves with a
//! [`HardwareMap`][crate::map::HardwareMap].  Routine code only ever sees the
//! trait through an [`ActuatorHandle`][crate::handle::ActuatorHandle], so
//! drivers can be swapped (real, simulated, recording) without touching any
//! sequencing logic.

use autoseq_types::AutoError;
use serde::{Deserialize, Serialize};

/// Rotation sense applied to a motor's commanded power and read positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Reverse,
}

/// What the motor controller does when commanded power drops to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdleBehavior {
    /// Actively resist motion at zero power.
    Brake,
    /// Let the shaft coast freely.
    Float,
}

/// A power-driven actuator with encoder position feedback.
///
/// Every motor has a stable string identifier so the
/// [`HardwareMap`][crate::map::HardwareMap] can resolve acquisition requests
/// by name.
pub trait Motor {
    /// Stable identifier for this motor, e.g. `"vertLinArm"`.
    fn id(&self) -> &str;

    /// Command the motor to run at `power`, a signed fraction in
    /// `[-1.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`AutoError::HardwareFault`] if the command cannot be applied.
    fn set_power(&mut self, power: f64) -> Result<(), AutoError>;

    /// Return the current encoder position in raw ticks.
    ///
    /// # Errors
    ///
    /// Returns [`AutoError::HardwareFault`] if the encoder read fails.
    fn current_position(&mut self) -> Result<i32, AutoError>;

    /// Configure the zero-power behavior.  Called once, at acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`AutoError::HardwareFault`] if the controller rejects the
    /// setting.
    fn set_idle_behavior(&mut self, idle: IdleBehavior) -> Result<(), AutoError>;
}
