//! Attack/decay envelope runs for trigger variables.
//!
//! An [`Envelope`] is an explicit state machine advanced by the host's frame
//! cadence: the core owns no scheduler. Each call to [`Envelope::advance`]
//! maps wall-clock `now` to a phase and value:
//!
//! - Attack: value ramps linearly `min -> max` over `attack` seconds;
//! - Decay: value ramps linearly `max -> min` over `decay` seconds;
//! - Idle: the terminal value is pinned at `min` and the run is complete.
//!
//! Runs on distinct variables are independent; retriggering a variable
//! replaces its run with a fresh start instant (no queuing).

use serde::{Deserialize, Serialize};

use crate::schema::VariableDef;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum EnvelopePhase {
    Attack,
    Decay,
    /// Terminal: the run stops issuing value changes.
    Idle,
}

/// One sampled point of a run.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct EnvelopeSample {
    pub value: f64,
    pub phase: EnvelopePhase,
}

/// A single two-phase value sweep over wall-clock time.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    started_at: f64,
    min: f64,
    max: f64,
    attack: f64,
    decay: f64,
}

impl Envelope {
    /// Start (or restart) a run for a trigger variable at wall-clock `now`.
    /// Non-positive phase durations are clamped to zero and skipped.
    pub fn start(def: &VariableDef, now: f64) -> Self {
        Self {
            started_at: now,
            min: def.min,
            max: def.max,
            attack: def.attack.max(0.0),
            decay: def.decay.max(0.0),
        }
    }

    /// Sample the run at wall-clock `now`.
    ///
    /// Elapsed `e = now - started_at`:
    /// - `e < attack`          -> `min + (max-min) * e/attack`
    /// - `e < attack + decay`  -> `max - (max-min) * (e-attack)/decay`
    /// - otherwise             -> `min`, phase `Idle`
    pub fn advance(&self, now: f64) -> EnvelopeSample {
        let e = now - self.started_at;
        let span = self.max - self.min;

        if e < 0.0 {
            // A host clock running behind the trigger instant holds at min.
            return EnvelopeSample {
                value: self.min,
                phase: EnvelopePhase::Attack,
            };
        }
        if e < self.attack {
            EnvelopeSample {
                value: self.min + span * (e / self.attack),
                phase: EnvelopePhase::Attack,
            }
        } else if e < self.attack + self.decay {
            EnvelopeSample {
                value: self.max - span * ((e - self.attack) / self.decay),
                phase: EnvelopePhase::Decay,
            }
        } else {
            EnvelopeSample {
                value: self.min,
                phase: EnvelopePhase::Idle,
            }
        }
    }

    /// True once `now` is past both phases.
    pub fn is_complete(&self, now: f64) -> bool {
        self.advance(now).phase == EnvelopePhase::Idle
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }
}
