//! [`SetPositionAction`] – write one absolute servo position and finish.
//!
//! The one-shot counterpart of [`ThresholdAction`][crate::ThresholdAction]:
//! it performs its entire effect on the first poll and unconditionally
//! reports done.  Used for open-loop moves like releasing or resetting an
//! intake.

use autoseq_hal::SharedActuator;
use autoseq_types::{AutoError, TelemetryPacket};
use tracing::trace;

use crate::action::{Action, ActionStatus};

/// Writes a single absolute position to an open-loop actuator.
pub struct SetPositionAction {
    actuator: SharedActuator,
    position: f64,
    fired: bool,
}

impl SetPositionAction {
    pub fn new(actuator: SharedActuator, position: f64) -> Self {
        Self {
            actuator,
            position,
            fired: false,
        }
    }
}

impl Action for SetPositionAction {
    fn poll(&mut self, _packet: &mut TelemetryPacket) -> Result<ActionStatus, AutoError> {
        // Inert on any hypothetical re-poll.
        if !self.fired {
            let mut actuator = self.actuator.borrow_mut();
            actuator.write_position(self.position)?;
            trace!(
                actuator = actuator.name(),
                position = self.position,
                "one-shot position write"
            );
            self.fired = true;
        }
        Ok(ActionStatus::Done)
    }
}
