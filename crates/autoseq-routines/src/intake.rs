//! [`Intake`] – the sample intake servo subsystem.
//!
//! Acquires the intake servo and exposes its two one-shot moves.  The servo
//! is open-loop: a move completes on the poll that writes it, with no
//! feedback read back.

use autoseq_actions::SetPositionAction;
use autoseq_hal::{HardwareMap, SharedActuator, shared};
use autoseq_types::AutoError;

use crate::config::IntakeConfig;

pub struct Intake {
    actuator: SharedActuator,
    config: IntakeConfig,
}

impl Intake {
    /// Acquire the configured intake servo.
    ///
    /// # Errors
    ///
    /// [`AutoError::DeviceNotFound`] when the servo is not in the map.
    pub fn new(map: &mut HardwareMap, config: IntakeConfig) -> Result<Self, AutoError> {
        let handle = map.acquire_servo(&config.servo)?;
        Ok(Self {
            actuator: shared(handle),
            config,
        })
    }

    /// Open to the scoring position.
    pub fn release(&self) -> SetPositionAction {
        SetPositionAction::new(self.actuator.clone(), self.config.release_position)
    }

    /// Close back to the holding position.
    pub fn reset(&self) -> SetPositionAction {
        SetPositionAction::new(self.actuator.clone(), self.config.reset_position)
    }

    /// The shared intake handle, for safing and diagnostics.
    pub fn actuator(&self) -> SharedActuator {
        self.actuator.clone()
    }
}
