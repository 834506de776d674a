//! [`HardwareMap`] – string-keyed driver storage with exclusive acquisition.
//!
//! Drivers are registered under stable names at startup.  Routine code then
//! *acquires* each device it needs, which moves the driver out of the map and
//! into an [`ActuatorHandle`]: a second acquisition of the same name fails
//! with [`AutoError::DeviceNotFound`], exactly like a name that was never
//! registered.  A missing device is unrecoverable and must abort the routine
//! before any action is polled.

use std::collections::HashMap;

use autoseq_types::AutoError;
use tracing::debug;

use crate::handle::ActuatorHandle;
use crate::motor::{Direction, IdleBehavior, Motor};
use crate::servo::ServoDevice;

/// Central device storage, keyed by the names routine configurations use.
#[derive(Default)]
pub struct HardwareMap {
    motors: HashMap<String, Box<dyn Motor>>,
    servos: HashMap<String, Box<dyn ServoDevice>>,
}

impl HardwareMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a motor driver.  Any previously registered motor with the
    /// same id is replaced.
    pub fn register_motor(&mut self, motor: Box<dyn Motor>) {
        self.motors.insert(motor.id().to_string(), motor);
    }

    /// Register a servo driver.  Any previously registered servo with the
    /// same id is replaced.
    pub fn register_servo(&mut self, servo: Box<dyn ServoDevice>) {
        self.servos.insert(servo.id().to_string(), servo);
    }

    /// Acquire exclusive ownership of the motor registered under `name`.
    ///
    /// The driver is moved out of the map, its idle behavior is configured
    /// once, and the returned handle applies `direction` to every subsequent
    /// command and read.
    ///
    /// # Errors
    ///
    /// [`AutoError::DeviceNotFound`] when `name` is unregistered (or already
    /// acquired); [`AutoError::HardwareFault`] when the idle-behavior
    /// configuration fails.
    pub fn acquire_motor(
        &mut self,
        name: &str,
        direction: Direction,
        idle: IdleBehavior,
    ) -> Result<ActuatorHandle, AutoError> {
        let mut motor = self
            .motors
            .remove(name)
            .ok_or_else(|| AutoError::DeviceNotFound {
                name: name.to_string(),
            })?;
        motor.set_idle_behavior(idle)?;
        debug!(device = name, ?direction, ?idle, "motor acquired");
        Ok(ActuatorHandle::from_motor(
            name.to_string(),
            direction,
            motor,
        ))
    }

    /// Acquire exclusive ownership of the servo registered under `name`.
    ///
    /// # Errors
    ///
    /// [`AutoError::DeviceNotFound`] when `name` is unregistered (or already
    /// acquired).
    pub fn acquire_servo(&mut self, name: &str) -> Result<ActuatorHandle, AutoError> {
        let servo = self
            .servos
            .remove(name)
            .ok_or_else(|| AutoError::DeviceNotFound {
                name: name.to_string(),
            })?;
        debug!(device = name, "servo acquired");
        Ok(ActuatorHandle::from_servo(name.to_string(), servo))
    }

    /// Names of motors still available for acquisition.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(String::as_str)
    }

    /// Names of servos still available for acquisition.
    pub fn servo_names(&self) -> impl Iterator<Item = &str> {
        self.servos.keys().map(String::as_str)
    }
}
