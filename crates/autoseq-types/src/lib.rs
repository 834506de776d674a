//! `autoseq-types` – shared vocabulary for the autoseq stack.
//!
//! Holds the types every other crate speaks: the global [`AutoError`]
//! taxonomy, the advisory [`TelemetryPacket`] that actions annotate once per
//! poll, and the field-geometry descriptions ([`Pose`], [`PathSegment`]) that
//! routine configurations hand to an external trajectory planner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global error type for hardware acquisition, device I/O, and routine
/// configuration.
///
/// There is deliberately no retry or recovery variant: a competition routine
/// runs once, and every failure here is fatal to the run.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum AutoError {
    /// The named device is absent from the hardware map.  Surfaced at
    /// acquisition time, before any action is polled.
    #[error("device '{name}' is not registered in the hardware map")]
    DeviceNotFound { name: String },

    /// An operation was invoked on a device class that cannot perform it
    /// (e.g. reading an encoder position from a write-only servo).  This is
    /// an integration defect, not a runtime condition.
    #[error("device '{name}' does not support {operation}")]
    UnsupportedOperation { name: String, operation: String },

    /// A device read or write failed mid-routine.  Propagates uncaught and
    /// aborts the run.
    #[error("hardware fault on '{name}': {details}")]
    HardwareFault { name: String, details: String },

    /// A routine parameter file could not be loaded or parsed.
    #[error("routine configuration error: {0}")]
    Config(String),
}

/// A field pose: position in inches plus a heading in degrees.
///
/// Degrees are used because routine waypoints are authored by hand; the
/// external planner converts to radians internally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading_deg: f64) -> Self {
        Self { x, y, heading_deg }
    }
}

/// One step of a trajectory description, mirroring the builder calls the
/// external motion planner exposes.  The sequencing core treats the planned
/// result as an opaque action; these segments are pure configuration data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSegment {
    /// Set the departure tangent for the following spline.
    SetTangent { deg: f64 },
    /// Spline to a pose, interpolating heading linearly along the way.
    SplineToLinearHeading { target: Pose, tangent_deg: f64 },
    /// Spline to a position while holding the current heading.
    SplineToConstantHeading { x: f64, y: f64, tangent_deg: f64 },
}

/// Advisory key/value telemetry attached by actions once per poll.
///
/// The packet never influences control flow; a runner may log it, forward it
/// to a dashboard, or drop it entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryPacket {
    pub timestamp: DateTime<Utc>,
    entries: Vec<(String, f64)>,
}

impl TelemetryPacket {
    /// Create an empty packet stamped with the current wall-clock time.
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Attach a key/value entry.  Duplicate keys are kept in insertion order;
    /// [`get`][Self::get] returns the most recent value.
    pub fn put(&mut self, key: impl Into<String>, value: f64) {
        self.entries.push((key.into(), value));
    }

    /// Return the most recently attached value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TelemetryPacket {
    fn default() -> Self {
        Self::new()
    }
}
