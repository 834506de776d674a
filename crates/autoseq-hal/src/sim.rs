//! Simulated drivers for headless tests and CI.
//!
//! [`SimHardware`] builds a [`HardwareMap`] pre-populated with stub drivers
//! so the full sequencing stack can run without a robot.
//!
//! # Stub behaviour
//!
//! | Driver | Behaviour |
//! |---|---|
//! | [`SimMotor`] | Integrates commanded power into encoder ticks on every read, so threshold predicates eventually trip. Always succeeds. |
//! | [`SimServo`] | Records the last commanded position. Always succeeds. |
//!
//! # Example
//!
//! ```rust
//! use autoseq_hal::sim::SimHardware;
//! use autoseq_hal::motor::{Direction, IdleBehavior};
//!
//! let mut map = SimHardware::builder()
//!     .with_motor("vertLinArm")
//!     .with_servo("intake")
//!     .build();
//!
//! let mut lift = map
//!     .acquire_motor("vertLinArm", Direction::Forward, IdleBehavior::Brake)
//!     .unwrap();
//! lift.write_power(0.1).unwrap();
//! assert!(lift.read_position().unwrap() > 0);
//! ```

use autoseq_types::AutoError;

use crate::map::HardwareMap;
use crate::motor::{IdleBehavior, Motor};
use crate::servo::ServoDevice;

/// Encoder ticks gained per position read at full power.
const DEFAULT_TICKS_PER_READ: f64 = 1000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Simulated motor
// ─────────────────────────────────────────────────────────────────────────────

/// A simulated motor whose encoder advances in proportion to the commanded
/// power each time the position is read.
///
/// The model is deliberately crude: one read equals one scheduling tick, and
/// the shaft moves `power * ticks_per_read` ticks between reads.  That is
/// enough for threshold predicates to behave as they would against real
/// hardware.
pub struct SimMotor {
    id: String,
    power: f64,
    position: f64,
    ticks_per_read: f64,
}

impl SimMotor {
    /// Create a simulated motor with the default tick rate.
    pub fn new(id: impl Into<String>) -> Box<Self> {
        Self::with_rate(id, DEFAULT_TICKS_PER_READ)
    }

    /// Create a simulated motor gaining `ticks_per_read` ticks per read at
    /// full power.
    pub fn with_rate(id: impl Into<String>, ticks_per_read: f64) -> Box<Self> {
        Box::new(Self {
            id: id.into(),
            power: 0.0,
            position: 0.0,
            ticks_per_read,
        })
    }

    /// Force the simulated encoder to a known position.  Useful for starting
    /// a test mid-travel.
    pub fn seek(&mut self, position: i32) {
        self.position = f64::from(position);
    }
}

impl Motor for SimMotor {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_power(&mut self, power: f64) -> Result<(), AutoError> {
        self.power = power;
        Ok(())
    }

    fn current_position(&mut self) -> Result<i32, AutoError> {
        self.position += self.power * self.ticks_per_read;
        Ok(self.position as i32)
    }

    fn set_idle_behavior(&mut self, _idle: IdleBehavior) -> Result<(), AutoError> {
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Simulated servo
// ─────────────────────────────────────────────────────────────────────────────

/// A simulated servo that records the most recent commanded position.
pub struct SimServo {
    id: String,
    position: f64,
}

impl SimServo {
    /// Create a simulated servo resting at position `0.0`.
    pub fn new(id: impl Into<String>) -> Box<Self> {
        Box::new(Self {
            id: id.into(),
            position: 0.0,
        })
    }

    /// The last commanded position.
    pub fn position(&self) -> f64 {
        self.position
    }
}

impl ServoDevice for SimServo {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_position(&mut self, position: f64) -> Result<(), AutoError> {
        self.position = position;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SimHardware builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder that constructs a [`HardwareMap`] populated with simulated
/// drivers.
///
/// Call the `with_*` methods for each device a routine expects, then
/// [`build`][Self::build] to obtain the map.
#[derive(Default)]
pub struct SimHardware {
    motors: Vec<Box<SimMotor>>,
    servos: Vec<Box<SimServo>>,
}

impl SimHardware {
    /// Create a builder with no devices.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Add a simulated motor with the default tick rate.
    pub fn with_motor(mut self, id: impl Into<String>) -> Self {
        self.motors.push(SimMotor::new(id));
        self
    }

    /// Add a simulated motor with a custom tick rate.
    pub fn with_motor_rate(mut self, id: impl Into<String>, ticks_per_read: f64) -> Self {
        self.motors.push(SimMotor::with_rate(id, ticks_per_read));
        self
    }

    /// Add a simulated servo.
    pub fn with_servo(mut self, id: impl Into<String>) -> Self {
        self.servos.push(SimServo::new(id));
        self
    }

    /// Consume the builder and return a populated [`HardwareMap`].
    pub fn build(self) -> HardwareMap {
        let mut map = HardwareMap::new();
        for motor in self.motors {
            map.register_motor(motor);
        }
        for servo in self.servos {
            map.register_servo(servo);
        }
        map
    }
}
