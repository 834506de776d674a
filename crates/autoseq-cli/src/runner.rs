//! Reference tick runner for simulated hardware.
//!
//! The consumer side of the composition contract, honoring all three of its
//! guarantees: actions are driven strictly in order, each is polled at a
//! fixed cadence until it reports done, and no action is polled afterwards.
//! An external stop is checked before the first poll and between polls; when
//! one is observed the runner returns [`RunOutcome::Aborted`] immediately and
//! leaves safing to the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use autoseq_actions::ActionSequence;
use autoseq_types::{AutoError, TelemetryPacket};
use tracing::{debug, info};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every action in the sequence reported done.
    Completed,
    /// An external stop was observed; the remaining actions were never
    /// polled.
    Aborted,
}

/// Poll `sequence` to completion at a fixed `tick` cadence.
///
/// # Errors
///
/// The first [`AutoError`] any action surfaces, propagated untouched — a
/// hardware fault is fatal to the run.
pub fn run_to_completion(
    sequence: ActionSequence,
    tick: Duration,
    stop: &AtomicBool,
) -> Result<RunOutcome, AutoError> {
    // Stop requested before the first tick: nothing is ever polled.
    if stop.load(Ordering::SeqCst) {
        return Ok(RunOutcome::Aborted);
    }

    let total = sequence.len();
    for (index, mut action) in sequence.into_iter().enumerate() {
        loop {
            if stop.load(Ordering::SeqCst) {
                info!(action = index, total, "stop observed; aborting run");
                return Ok(RunOutcome::Aborted);
            }

            let mut packet = TelemetryPacket::new();
            let status = action.poll(&mut packet)?;
            for (key, value) in packet.entries() {
                debug!(action = index, key = %key, value = *value, "telemetry");
            }

            if status.is_done() {
                debug!(action = index, total, "action done");
                break;
            }
            if !tick.is_zero() {
                std::thread::sleep(tick);
            }
        }
    }

    info!(total, "sequence complete");
    Ok(RunOutcome::Completed)
}
