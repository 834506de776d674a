//! The cooperative polling contract every action conforms to.

use autoseq_types::{AutoError, TelemetryPacket};

/// Result of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// The action has more work to do; poll it again next tick.
    Continue,
    /// Terminal: the action finished and must never be polled again.
    Done,
}

impl ActionStatus {
    pub fn is_done(self) -> bool {
        matches!(self, ActionStatus::Done)
    }
}

/// A unit of work polled to completion by an external runner.
///
/// The runner this contract is written against guarantees:
///
/// 1. **Strict sequencing** – in an ordered list, action *i + 1* is never
///    polled before action *i* reports [`ActionStatus::Done`].
/// 2. **Fixed cadence** – each action is polled once per scheduling tick
///    until it reports done.
/// 3. **No post-completion polls** – a done action is discarded, never
///    polled again.
///
/// A poll must return promptly: non-blocking device reads and writes only.
/// There is no cancellation hook — a runner that stops polling simply leaves
/// the last issued command standing, so any safing is the runner's job.
///
/// Device faults surface as `Err`; no action attempts recovery (a
/// competition run is restarted, not resumed).
pub trait Action {
    /// Advance the action by one tick, attaching any advisory telemetry to
    /// `packet`.
    ///
    /// # Errors
    ///
    /// Any [`AutoError`] from the underlying device, propagated untouched.
    fn poll(&mut self, packet: &mut TelemetryPacket) -> Result<ActionStatus, AutoError>;
}
