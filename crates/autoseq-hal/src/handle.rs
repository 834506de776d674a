//! [`ActuatorHandle`] – exclusive owner of one physical output device.
//!
//! A handle wraps either a [`Motor`] or a [`ServoDevice`] together with the
//! acquisition parameters (direction) that shape how commands reach the
//! driver.  Handles are produced by
//! [`HardwareMap::acquire_motor`][crate::map::HardwareMap::acquire_motor] and
//! [`HardwareMap::acquire_servo`][crate::map::HardwareMap::acquire_servo],
//! which *move* the driver out of the map — Rust ownership is what enforces
//! the one-handle-per-device invariant.
//!
//! Within a routine the same handle is referenced by several actions in turn
//! (lift up, then lift down), never concurrently: the composition contract
//! serializes all polling.  [`SharedActuator`] (`Rc<RefCell<_>>`) gives each
//! action a reference without threading lifetimes through the sequence.

use std::cell::RefCell;
use std::rc::Rc;

use autoseq_types::AutoError;

use crate::motor::{Direction, Motor};
use crate::servo::ServoDevice;

/// A handle shared across the actions of one routine.
///
/// The polling model is strictly single-threaded and sequential, so a
/// `RefCell` suffices; no locking is ever needed.
pub type SharedActuator = Rc<RefCell<ActuatorHandle>>;

/// Wrap a handle for sharing across a routine's actions.
pub fn shared(handle: ActuatorHandle) -> SharedActuator {
    Rc::new(RefCell::new(handle))
}

enum ActuatorDevice {
    Motor(Box<dyn Motor>),
    Servo(Box<dyn ServoDevice>),
}

/// Exclusive owner of one motor or servo, plus its acquisition parameters.
pub struct ActuatorHandle {
    name: String,
    direction: Direction,
    device: ActuatorDevice,
}

impl ActuatorHandle {
    pub(crate) fn from_motor(name: String, direction: Direction, motor: Box<dyn Motor>) -> Self {
        Self {
            name,
            direction,
            device: ActuatorDevice::Motor(motor),
        }
    }

    pub(crate) fn from_servo(name: String, servo: Box<dyn ServoDevice>) -> Self {
        Self {
            name,
            direction: Direction::Forward,
            device: ActuatorDevice::Servo(servo),
        }
    }

    /// The hardware-map name this handle was acquired under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` when the underlying device has encoder feedback.
    pub fn has_position_feedback(&self) -> bool {
        matches!(self.device, ActuatorDevice::Motor(_))
    }

    /// Read the current encoder position in ticks, with the acquisition
    /// [`Direction`] applied.
    ///
    /// # Errors
    ///
    /// [`AutoError::UnsupportedOperation`] when the handle is backed by a
    /// write-only servo; [`AutoError::HardwareFault`] when the encoder read
    /// fails.
    pub fn read_position(&mut self) -> Result<i32, AutoError> {
        match &mut self.device {
            ActuatorDevice::Motor(motor) => {
                let position = motor.current_position()?;
                Ok(match self.direction {
                    Direction::Forward => position,
                    Direction::Reverse => -position,
                })
            }
            ActuatorDevice::Servo(_) => Err(AutoError::UnsupportedOperation {
                name: self.name.clone(),
                operation: "read_position".to_string(),
            }),
        }
    }

    /// Command signed power, with the acquisition [`Direction`] applied.
    ///
    /// # Errors
    ///
    /// [`AutoError::UnsupportedOperation`] when the handle is backed by a
    /// servo; [`AutoError::HardwareFault`] when the command fails.
    pub fn write_power(&mut self, power: f64) -> Result<(), AutoError> {
        match &mut self.device {
            ActuatorDevice::Motor(motor) => {
                let signed = match self.direction {
                    Direction::Forward => power,
                    Direction::Reverse => -power,
                };
                motor.set_power(signed)
            }
            ActuatorDevice::Servo(_) => Err(AutoError::UnsupportedOperation {
                name: self.name.clone(),
                operation: "write_power".to_string(),
            }),
        }
    }

    /// Command an absolute position fraction on an open-loop device.
    ///
    /// # Errors
    ///
    /// [`AutoError::UnsupportedOperation`] when the handle is backed by a
    /// motor; [`AutoError::HardwareFault`] when the command fails.
    pub fn write_position(&mut self, position: f64) -> Result<(), AutoError> {
        match &mut self.device {
            ActuatorDevice::Servo(servo) => servo.set_position(position),
            ActuatorDevice::Motor(_) => Err(AutoError::UnsupportedOperation {
                name: self.name.clone(),
                operation: "write_position".to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for ActuatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActuatorHandle")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field(
                "device",
                match self.device {
                    ActuatorDevice::Motor(_) => &"motor",
                    ActuatorDevice::Servo(_) => &"servo",
                },
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockMotor {
        power: f64,
        position: i32,
    }

    impl Motor for MockMotor {
        fn id(&self) -> &str {
            "vertLinArm"
        }

        fn set_power(&mut self, power: f64) -> Result<(), AutoError> {
            self.power = power;
            Ok(())
        }

        fn current_position(&mut self) -> Result<i32, AutoError> {
            Ok(self.position)
        }

        fn set_idle_behavior(
            &mut self,
            _idle: crate::motor::IdleBehavior,
        ) -> Result<(), AutoError> {
            Ok(())
        }
    }

    struct MockServo {
        position: f64,
    }

    impl ServoDevice for MockServo {
        fn id(&self) -> &str {
            "intake"
        }

        fn set_position(&mut self, position: f64) -> Result<(), AutoError> {
            self.position = position;
            Ok(())
        }
    }

    fn motor_handle(direction: Direction, position: i32) -> ActuatorHandle {
        ActuatorHandle::from_motor(
            "vertLinArm".to_string(),
            direction,
            Box::new(MockMotor {
                power: 0.0,
                position,
            }),
        )
    }

    #[test]
    fn forward_handle_passes_values_through() {
        let mut handle = motor_handle(Direction::Forward, 1200);
        assert_eq!(handle.read_position().unwrap(), 1200);
        handle.write_power(0.1).unwrap();
    }

    #[test]
    fn reverse_handle_negates_power_and_position() {
        let mut handle = motor_handle(Direction::Reverse, 1200);
        assert_eq!(handle.read_position().unwrap(), -1200);
    }

    #[test]
    fn servo_handle_rejects_position_read() {
        let mut handle =
            ActuatorHandle::from_servo("intake".to_string(), Box::new(MockServo { position: 0.0 }));
        assert!(!handle.has_position_feedback());
        assert!(matches!(
            handle.read_position(),
            Err(AutoError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            handle.write_power(0.1),
            Err(AutoError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn motor_handle_rejects_absolute_position_write() {
        let mut handle = motor_handle(Direction::Forward, 0);
        assert!(handle.has_position_feedback());
        assert!(matches!(
            handle.write_position(0.5),
            Err(AutoError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn servo_handle_writes_position() {
        let mut handle =
            ActuatorHandle::from_servo("intake".to_string(), Box::new(MockServo { position: 0.0 }));
        handle.write_position(0.178).unwrap();
    }
}
