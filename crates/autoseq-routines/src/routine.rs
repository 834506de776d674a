//! [`Routine`] – acquisition and sequence assembly for one match plan.
//!
//! Construction acquires every device the plan names; a missing device fails
//! here, before the external runner polls anything.
//! [`assemble`][Routine::assemble] then produces the fixed order the source
//! routines share: deliver trajectory, lift raise, intake release, lift
//! lower, park trajectory.
//!
//! # Safing
//!
//! Actions have no cancellation hook, so a run stopped from outside leaves
//! the last issued command standing.  The policy here: a runner that
//! observes an external stop calls [`Routine::safe_all`], which commands
//! zero power to every acquired motor (write-only servos hold position and
//! are left alone).  Hardware faults, by contrast, abort without safing.

use autoseq_actions::ActionSequence;
use autoseq_hal::{HardwareMap, SharedActuator};
use autoseq_types::AutoError;
use tracing::info;

use crate::config::RoutineConfig;
use crate::intake::Intake;
use crate::lift::Lift;
use crate::planner::TrajectoryPlanner;

pub struct Routine {
    config: RoutineConfig,
    lift: Lift,
    intake: Intake,
}

impl Routine {
    /// Acquire all devices the plan names.
    ///
    /// # Errors
    ///
    /// [`AutoError::DeviceNotFound`] for the first missing device; the whole
    /// routine fails before any action is polled.
    pub fn new(map: &mut HardwareMap, config: RoutineConfig) -> Result<Self, AutoError> {
        let lift = Lift::new(map, config.lift.clone())?;
        let intake = Intake::new(map, config.intake.clone())?;
        info!(routine = %config.name, "hardware acquired");
        Ok(Self {
            config,
            lift,
            intake,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn lift(&self) -> &Lift {
        &self.lift
    }

    pub fn intake(&self) -> &Intake {
        &self.intake
    }

    /// Build the ordered sequence the external runner polls to completion.
    pub fn assemble(&self, planner: &mut dyn TrajectoryPlanner) -> ActionSequence {
        info!(
            routine = %self.config.name,
            deliver_segments = self.config.deliver_segments.len(),
            park_segments = self.config.park_segments.len(),
            "assembling action sequence"
        );
        ActionSequence::new()
            .then_boxed(planner.plan(self.config.start_pose, &self.config.deliver_segments))
            .then(self.lift.raise())
            .then(self.intake.release())
            .then(self.lift.lower())
            .then_boxed(planner.plan(self.config.park_start, &self.config.park_segments))
    }

    /// Every handle the routine acquired.
    pub fn actuators(&self) -> Vec<SharedActuator> {
        vec![self.lift.actuator(), self.intake.actuator()]
    }

    /// Command zero power to every acquired motor.
    ///
    /// Open-loop devices have no power to cut and are skipped.
    ///
    /// # Errors
    ///
    /// [`AutoError::HardwareFault`] if a zero-power command itself fails.
    pub fn safe_all(&self) -> Result<(), AutoError> {
        for actuator in self.actuators() {
            let mut handle = actuator.borrow_mut();
            if !handle.has_position_feedback() {
                continue;
            }
            handle.write_power(0.0)?;
            info!(actuator = handle.name(), "safed to zero power");
        }
        Ok(())
    }
}
