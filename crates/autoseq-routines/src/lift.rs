//! [`Lift`] – the vertical linear arm subsystem.
//!
//! Acquires the lift motor (forward direction, brake at idle) and exposes
//! its three threshold moves.  Each call constructs a fresh action over the
//! shared handle; the composition contract guarantees the actions never
//! overlap in time.

use autoseq_actions::{ThresholdAction, ThresholdMove, TravelDirection};
use autoseq_hal::motor::{Direction, IdleBehavior};
use autoseq_hal::{HardwareMap, SharedActuator, shared};
use autoseq_types::AutoError;

use crate::config::LiftConfig;

pub struct Lift {
    actuator: SharedActuator,
    config: LiftConfig,
}

impl Lift {
    /// Acquire the configured lift motor.
    ///
    /// # Errors
    ///
    /// [`AutoError::DeviceNotFound`] when the motor is not in the map — the
    /// routine must abort before any action is polled.
    pub fn new(map: &mut HardwareMap, config: LiftConfig) -> Result<Self, AutoError> {
        let handle = map.acquire_motor(&config.motor, Direction::Forward, IdleBehavior::Brake)?;
        Ok(Self {
            actuator: shared(handle),
            config,
        })
    }

    /// Raise to the scoring target, bounded by the upper safety limit.
    pub fn raise(&self) -> ThresholdAction {
        self.threshold_move(TravelDirection::Raise, self.config.raise_target, self.config.upper_limit)
    }

    /// Lower back to the floor, bounded by the lower safety limit.
    pub fn lower(&self) -> ThresholdAction {
        self.threshold_move(TravelDirection::Lower, self.config.lower_floor, self.config.lower_limit)
    }

    /// End-game level-1 ascent, when this routine's parameters define one.
    pub fn ascent(&self) -> Option<ThresholdAction> {
        self.config.ascent_target.map(|target| {
            self.threshold_move(TravelDirection::Raise, target, self.config.upper_limit)
        })
    }

    /// The shared lift handle, for safing and diagnostics.
    pub fn actuator(&self) -> SharedActuator {
        self.actuator.clone()
    }

    fn threshold_move(
        &self,
        direction: TravelDirection,
        target: i32,
        limit: i32,
    ) -> ThresholdAction {
        ThresholdAction::new(
            self.actuator.clone(),
            ThresholdMove {
                label: self.config.telemetry_key.clone(),
                power: self.config.power,
                direction,
                target,
                limit,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use autoseq_actions::Action;
    use autoseq_hal::SimHardware;
    use autoseq_types::TelemetryPacket;

    use super::*;

    fn sim_lift(config: LiftConfig) -> Lift {
        let mut map = SimHardware::builder().with_motor(&config.motor).build();
        Lift::new(&mut map, config).unwrap()
    }

    fn poll_to_completion(action: &mut dyn Action) -> u32 {
        let mut polls = 0;
        loop {
            polls += 1;
            assert!(polls < 1000, "action failed to settle");
            if action.poll(&mut TelemetryPacket::new()).unwrap().is_done() {
                return polls;
            }
        }
    }

    #[test]
    fn raise_then_lower_round_trip() {
        let lift = sim_lift(LiftConfig::default());

        let mut up = lift.raise();
        poll_to_completion(&mut up);
        let raised = lift.actuator().borrow_mut().read_position().unwrap();
        assert!(raised >= 3000);
        assert!(raised <= 4000);

        let mut down = lift.lower();
        poll_to_completion(&mut down);
        let lowered = lift.actuator().borrow_mut().read_position().unwrap();
        assert!(lowered <= 100);
        assert!(lowered >= 50 - 100); // one sim step of slack below the floor
    }

    #[test]
    fn ascent_is_present_only_when_configured() {
        let without = sim_lift(LiftConfig::default());
        assert!(without.ascent().is_none());

        let with = sim_lift(LiftConfig {
            ascent_target: Some(300),
            ..LiftConfig::default()
        });
        let mut ascent = with.ascent().unwrap();
        poll_to_completion(&mut ascent);
        let position = with.actuator().borrow_mut().read_position().unwrap();
        assert!(position >= 300);
        assert!(position < 3000);
    }

    #[test]
    fn missing_motor_aborts_at_acquisition() {
        let mut map = SimHardware::builder().build();
        assert!(matches!(
            Lift::new(&mut map, LiftConfig::default()),
            Err(AutoError::DeviceNotFound { .. })
        ));
    }
}
