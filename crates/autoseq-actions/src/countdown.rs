//! [`CountdownAction`] – stay busy for a fixed number of polls.
//!
//! Touches no hardware.  Simulated trajectory planners hand these out in
//! place of real drive actions, and runner tests use them to observe
//! sequencing without any devices.

use autoseq_types::{AutoError, TelemetryPacket};

use crate::action::{Action, ActionStatus};

/// Reports [`ActionStatus::Continue`] a fixed number of times, then done.
pub struct CountdownAction {
    label: String,
    remaining: u32,
}

impl CountdownAction {
    /// An action that continues for exactly `polls` polls.  `polls == 0`
    /// finishes on the first poll.
    pub fn new(label: impl Into<String>, polls: u32) -> Self {
        Self {
            label: label.into(),
            remaining: polls,
        }
    }
}

impl Action for CountdownAction {
    fn poll(&mut self, packet: &mut TelemetryPacket) -> Result<ActionStatus, AutoError> {
        if self.remaining == 0 {
            return Ok(ActionStatus::Done);
        }
        self.remaining -= 1;
        packet.put(self.label.clone(), f64::from(self.remaining));
        Ok(ActionStatus::Continue)
    }
}
