//! `autoseq-actions` – the cooperative polling contract and the actuator
//! actions built on it.
//!
//! An autonomous routine is an ordered list of [`Action`] values handed to an
//! external runner that polls each one at a fixed cadence until it reports
//! [`ActionStatus::Done`], then advances to the next.  This crate defines the
//! contract and the handful of actuator actions a routine composes with the
//! opaque drive actions produced by the motion planner.
//!
//! # Modules
//!
//! - [`action`] – [`Action`] trait and [`ActionStatus`], with the runner
//!   guarantees the actions rely on.
//! - [`threshold`] – [`ThresholdAction`]: run a motor at fixed power until
//!   its encoder crosses a target, bounded by a hard safety limit.
//! - [`set_position`] – [`SetPositionAction`]: write one absolute servo
//!   position and finish immediately.
//! - [`countdown`] – [`CountdownAction`]: stay busy for a fixed number of
//!   polls; a stand-in for external actions in tests and simulation.
//! - [`sequence`] – [`ActionSequence`]: ordered builder for the list handed
//!   to the runner.

pub mod action;
pub mod countdown;
pub mod sequence;
pub mod set_position;
pub mod threshold;

pub use action::{Action, ActionStatus};
pub use countdown::CountdownAction;
pub use sequence::ActionSequence;
pub use set_position::SetPositionAction;
pub use threshold::{ThresholdAction, ThresholdMove, TravelDirection};
