//! [`ThresholdAction`] – run a motor at fixed power until its encoder
//! crosses a target, bounded by a hard safety limit.
//!
//! This is the workhorse of lift moves: on its first poll it issues the
//! configured power exactly once, then on every poll it reads the encoder
//! and keeps running while the position is short of *both* the operational
//! target and the safety limit.  Because both bounds must hold, the nearer
//! one always wins — a target misconfigured beyond the limit still halts at
//! the limit.  When the predicate fails the action settles the motor with a
//! single zero-power command and reports done.

use autoseq_hal::SharedActuator;
use autoseq_types::{AutoError, TelemetryPacket};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::action::{Action, ActionStatus};

/// Which way the actuator travels, and therefore which comparison the
/// completion predicate uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelDirection {
    /// Positive power; runs while `position < target && position < limit`.
    Raise,
    /// Negative power; runs while `position > target && position > limit`.
    Lower,
}

/// Parameters for one threshold move, passed by value so the action's
/// behavior is fully determined by its constructor arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdMove {
    /// Telemetry key the current position is published under, e.g.
    /// `"liftPos"`.
    pub label: String,
    /// Power magnitude in `[0.0, 1.0]`; the sign comes from `direction`.
    pub power: f64,
    pub direction: TravelDirection,
    /// Operational target in encoder ticks.
    pub target: i32,
    /// Hard safety bound in encoder ticks.  Never exceeded, even when
    /// `target` is misconfigured past it.
    pub limit: i32,
}

/// A two-state (pending / active) polling action over one motor handle.
pub struct ThresholdAction {
    actuator: SharedActuator,
    config: ThresholdMove,
    activated: bool,
    settled: bool,
}

impl ThresholdAction {
    pub fn new(actuator: SharedActuator, config: ThresholdMove) -> Self {
        Self {
            actuator,
            config,
            activated: false,
            settled: false,
        }
    }

    fn signed_power(&self) -> f64 {
        match self.config.direction {
            TravelDirection::Raise => self.config.power,
            TravelDirection::Lower => -self.config.power,
        }
    }
}

impl Action for ThresholdAction {
    fn poll(&mut self, packet: &mut TelemetryPacket) -> Result<ActionStatus, AutoError> {
        // A correct runner never polls past done; if a harness does anyway,
        // the action must stay inert.
        if self.settled {
            return Ok(ActionStatus::Done);
        }

        let mut actuator = self.actuator.borrow_mut();

        // Activation command is issued at most once, and always before the
        // first predicate check: a device already past its target still
        // receives the one-tick command.
        if !self.activated {
            actuator.write_power(self.signed_power())?;
            self.activated = true;
        }

        let position = actuator.read_position()?;
        packet.put(self.config.label.clone(), f64::from(position));

        let running = match self.config.direction {
            TravelDirection::Raise => {
                position < self.config.target && position < self.config.limit
            }
            TravelDirection::Lower => {
                position > self.config.target && position > self.config.limit
            }
        };
        trace!(
            actuator = actuator.name(),
            position,
            target = self.config.target,
            limit = self.config.limit,
            running,
            "threshold poll"
        );

        if running {
            Ok(ActionStatus::Continue)
        } else {
            actuator.write_power(0.0)?;
            self.settled = true;
            Ok(ActionStatus::Done)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use autoseq_hal::motor::{Direction, IdleBehavior, Motor};
    use autoseq_hal::{HardwareMap, SharedActuator, shared};

    use super::*;

    /// Backing state for [`RecordingMotor`], kept outside the hardware map so
    /// tests can inspect commands after the driver has been acquired.
    #[derive(Default)]
    struct MotorState {
        position: i32,
        power_log: Vec<f64>,
        reads: usize,
        fail_reads: bool,
    }

    struct RecordingMotor {
        state: Rc<RefCell<MotorState>>,
    }

    impl Motor for RecordingMotor {
        fn id(&self) -> &str {
            "vertLinArm"
        }

        fn set_power(&mut self, power: f64) -> Result<(), AutoError> {
            self.state.borrow_mut().power_log.push(power);
            Ok(())
        }

        fn current_position(&mut self) -> Result<i32, AutoError> {
            let mut state = self.state.borrow_mut();
            state.reads += 1;
            if state.fail_reads {
                return Err(AutoError::HardwareFault {
                    name: "vertLinArm".to_string(),
                    details: "encoder read failed".to_string(),
                });
            }
            Ok(state.position)
        }

        fn set_idle_behavior(&mut self, _idle: IdleBehavior) -> Result<(), AutoError> {
            Ok(())
        }
    }

    fn rig(position: i32) -> (SharedActuator, Rc<RefCell<MotorState>>) {
        let state = Rc::new(RefCell::new(MotorState {
            position,
            ..MotorState::default()
        }));
        let mut map = HardwareMap::new();
        map.register_motor(Box::new(RecordingMotor {
            state: state.clone(),
        }));
        let handle = map
            .acquire_motor("vertLinArm", Direction::Forward, IdleBehavior::Brake)
            .unwrap();
        (shared(handle), state)
    }

    fn raise_move(target: i32, limit: i32) -> ThresholdMove {
        ThresholdMove {
            label: "liftPos".to_string(),
            power: 0.1,
            direction: TravelDirection::Raise,
            target,
            limit,
        }
    }

    #[test]
    fn raise_activates_once_then_settles_at_target() {
        let (actuator, state) = rig(0);
        let mut action = ThresholdAction::new(actuator, raise_move(3000, 4000));

        let mut packet = TelemetryPacket::new();
        assert_eq!(action.poll(&mut packet).unwrap(), ActionStatus::Continue);
        assert_eq!(state.borrow().power_log, vec![0.1]);
        assert_eq!(packet.get("liftPos"), Some(0.0));

        // Mid-travel polls keep the motor running without re-commanding it.
        state.borrow_mut().position = 1500;
        assert_eq!(
            action.poll(&mut TelemetryPacket::new()).unwrap(),
            ActionStatus::Continue
        );
        assert_eq!(state.borrow().power_log, vec![0.1]);

        // Past the target: settle with a single zero-power command.
        state.borrow_mut().position = 3050;
        assert_eq!(
            action.poll(&mut TelemetryPacket::new()).unwrap(),
            ActionStatus::Done
        );
        assert_eq!(state.borrow().power_log, vec![0.1, 0.0]);
    }

    #[test]
    fn lower_uses_symmetric_floor_predicate() {
        let (actuator, state) = rig(3050);
        let mut action = ThresholdAction::new(
            actuator,
            ThresholdMove {
                label: "liftPos".to_string(),
                power: 0.1,
                direction: TravelDirection::Lower,
                target: 100,
                limit: 50,
            },
        );

        assert_eq!(
            action.poll(&mut TelemetryPacket::new()).unwrap(),
            ActionStatus::Continue
        );
        assert_eq!(state.borrow().power_log, vec![-0.1]);

        state.borrow_mut().position = 40;
        assert_eq!(
            action.poll(&mut TelemetryPacket::new()).unwrap(),
            ActionStatus::Done
        );
        assert_eq!(state.borrow().power_log, vec![-0.1, 0.0]);
    }

    #[test]
    fn safety_limit_dominates_misconfigured_target() {
        // Target 5000 is beyond the 4000 safety bound; the nearer bound wins.
        let (actuator, state) = rig(0);
        let mut action = ThresholdAction::new(actuator, raise_move(5000, 4000));

        assert_eq!(
            action.poll(&mut TelemetryPacket::new()).unwrap(),
            ActionStatus::Continue
        );

        state.borrow_mut().position = 4000;
        assert_eq!(
            action.poll(&mut TelemetryPacket::new()).unwrap(),
            ActionStatus::Done
        );
        assert_eq!(state.borrow().power_log, vec![0.1, 0.0]);
    }

    #[test]
    fn already_past_target_still_issues_activation_then_finishes() {
        // Issue-then-check within a single poll: the one-tick overshoot
        // command is unavoidable by design.
        let (actuator, state) = rig(5000);
        let mut action = ThresholdAction::new(actuator, raise_move(3000, 4000));

        assert_eq!(
            action.poll(&mut TelemetryPacket::new()).unwrap(),
            ActionStatus::Done
        );
        assert_eq!(state.borrow().power_log, vec![0.1, 0.0]);
    }

    #[test]
    fn post_completion_polls_are_inert() {
        let (actuator, state) = rig(3050);
        let mut action = ThresholdAction::new(actuator, raise_move(3000, 4000));

        assert_eq!(
            action.poll(&mut TelemetryPacket::new()).unwrap(),
            ActionStatus::Done
        );
        let commands = state.borrow().power_log.len();
        let reads = state.borrow().reads;

        // A broken harness re-polling a done action must observe no
        // re-activation, no second settle, and no device traffic at all.
        let mut packet = TelemetryPacket::new();
        assert_eq!(action.poll(&mut packet).unwrap(), ActionStatus::Done);
        assert_eq!(state.borrow().power_log.len(), commands);
        assert_eq!(state.borrow().reads, reads);
        assert!(packet.is_empty());
    }

    #[test]
    fn encoder_fault_propagates_uncaught() {
        let (actuator, state) = rig(0);
        state.borrow_mut().fail_reads = true;
        let mut action = ThresholdAction::new(actuator, raise_move(3000, 4000));

        assert!(matches!(
            action.poll(&mut TelemetryPacket::new()),
            Err(AutoError::HardwareFault { .. })
        ));
    }

    #[test]
    fn poll_attaches_position_telemetry() {
        let (actuator, state) = rig(0);
        let mut action = ThresholdAction::new(actuator, raise_move(3000, 4000));

        state.borrow_mut().position = 1234;
        let mut packet = TelemetryPacket::new();
        action.poll(&mut packet).unwrap();
        assert_eq!(packet.get("liftPos"), Some(1234.0));
    }
}
