//! `autoseq-routines` – parameterized assembly of autonomous routines.
//!
//! A routine is pure configuration: a [`RoutineConfig`] record names the
//! devices, thresholds, servo positions, and trajectory waypoints of one
//! match plan.  [`Routine`] acquires the hardware, wraps it in subsystems,
//! and assembles the ordered [`ActionSequence`][autoseq_actions::ActionSequence]
//! the external runner polls to completion.
//!
//! # Modules
//!
//! - [`config`] – [`RoutineConfig`] and its [`LiftConfig`]/[`IntakeConfig`]
//!   parts, plus the two competition presets.
//! - [`lift`] – [`Lift`]: the encoder-feedback lift subsystem and its
//!   threshold moves.
//! - [`intake`] – [`Intake`]: the open-loop intake servo and its one-shot
//!   moves.
//! - [`planner`] – [`TrajectoryPlanner`] seam for the external motion
//!   planner, with a simulated implementation for headless runs.
//! - [`routine`] – [`Routine`]: acquisition, sequence assembly, and the
//!   stop-safing policy.

pub mod config;
pub mod intake;
pub mod lift;
pub mod planner;
pub mod routine;

pub use config::{IntakeConfig, LiftConfig, RoutineConfig};
pub use intake::Intake;
pub use lift::Lift;
pub use planner::{SimPlanner, TrajectoryPlanner};
pub use routine::Routine;
