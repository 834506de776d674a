//! [`ServoDevice`] trait for open-loop, position-commanded actuators.
//!
//! Servos are write-only: they accept an absolute position fraction and read
//! nothing back.  Reading a position through an
//! [`ActuatorHandle`][crate::handle::ActuatorHandle] backed by a servo is an
//! integration defect and fails with
//! [`AutoError::UnsupportedOperation`][autoseq_types::AutoError].

use autoseq_types::AutoError;

/// An open-loop actuator commanded by absolute position with no feedback.
pub trait ServoDevice {
    /// Stable identifier for this servo, e.g. `"intake"`.
    fn id(&self) -> &str;

    /// Command the servo to `position`, an absolute fraction in `[0.0, 1.0]`
    /// of its travel range.
    ///
    /// # Errors
    ///
    /// Returns [`AutoError::HardwareFault`] if the command cannot be applied.
    fn set_position(&mut self, position: f64) -> Result<(), AutoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockServo {
        id: String,
        position: f64,
    }

    impl ServoDevice for MockServo {
        fn id(&self) -> &str {
            &self.id
        }

        fn set_position(&mut self, position: f64) -> Result<(), AutoError> {
            self.position = position;
            Ok(())
        }
    }

    #[test]
    fn mock_servo_records_position() {
        let mut servo = MockServo {
            id: "intake".to_string(),
            position: 0.0,
        };
        assert_eq!(servo.id(), "intake");

        servo.set_position(0.356).unwrap();
        assert!((servo.position - 0.356).abs() < f64::EPSILON);
    }
}
