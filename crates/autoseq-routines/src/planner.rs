//! [`TrajectoryPlanner`] – the seam to the external motion planner.
//!
//! Trajectory planning and path following live outside this repository.  A
//! routine only needs something that turns a start pose and a segment list
//! into an opaque action satisfying the same poll contract as every other
//! action in the sequence.

use autoseq_actions::{Action, CountdownAction};
use autoseq_types::{PathSegment, Pose};
use tracing::debug;

/// Produces opaque drive actions from trajectory descriptions.
///
/// Implemented by the adapter to the real motion-planning subsystem; the
/// sequencing core treats the returned action as a black box.
pub trait TrajectoryPlanner {
    fn plan(&mut self, start: Pose, segments: &[PathSegment]) -> Box<dyn Action>;
}

/// Planner stand-in for headless runs: each planned trajectory is an action
/// that stays busy for a fixed number of polls per segment.
pub struct SimPlanner {
    polls_per_segment: u32,
}

impl SimPlanner {
    pub fn new(polls_per_segment: u32) -> Self {
        Self { polls_per_segment }
    }
}

impl TrajectoryPlanner for SimPlanner {
    fn plan(&mut self, start: Pose, segments: &[PathSegment]) -> Box<dyn Action> {
        let polls = self.polls_per_segment * segments.len() as u32;
        debug!(?start, segments = segments.len(), polls, "planned simulated trajectory");
        Box::new(CountdownAction::new("trajectory", polls))
    }
}
