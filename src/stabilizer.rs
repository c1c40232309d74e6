//! Temporal stabilization of per-frame gesture observations.
//!
//! Per-frame matches flicker. The stabilizer only emits a [`GestureEvent`]
//! when the observed name changes, or when the same name is still observed
//! after the debounce interval since the last emission. Clearing is never
//! debounced.

use crate::{
    constants::{CONFIDENCE_PERCENT_SCALE, DEFAULT_DEBOUNCE_MS},
    engine::DetectionMode,
    estimator::GestureCandidate,
    expression::ExpressionReading,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// What one frame contributed to the stabilizer
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// A hand gesture, from the external recognizer or the template estimator
    Gesture(GestureCandidate),
    /// A facial expression
    Expression(ExpressionReading),
    /// A hand or face was present but nothing was recognized
    NoMatch,
    /// No hand or face in the frame
    NoDetection,
}

impl Observation {
    /// Name and normalized score, if the observation carries a gesture
    #[must_use]
    pub fn gesture(&self) -> Option<(&str, f64)> {
        match self {
            Self::Gesture(candidate) => Some((candidate.name.as_str(), candidate.score)),
            Self::Expression(reading) => Some((reading.label.as_str(), reading.intensity)),
            Self::NoMatch | Self::NoDetection => None,
        }
    }
}

/// Stabilized gesture emitted to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub name: String,
    /// Confidence as a percentage, `0..=100`
    pub confidence: f64,
    /// Milliseconds since the epoch, never decreasing between events
    pub timestamp_ms: u64,
}

/// State carried from one frame to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StabilizerState {
    /// Gesture currently shown, if any
    pub current: Option<String>,
    /// Timestamp of the last accepted gesture
    pub last_change_ms: u64,
}

/// Advance the stabilizer by one observation.
///
/// Returns the next state and the event to emit, if any.
#[must_use]
pub fn step(
    previous: &StabilizerState,
    observation: &Observation,
    timestamp_ms: u64,
    debounce_ms: u64,
    mode: DetectionMode,
) -> (StabilizerState, Option<GestureEvent>) {
    match observation.gesture() {
        Some((name, score)) => {
            let elapsed = timestamp_ms.saturating_sub(previous.last_change_ms);
            let changed = previous.current.as_deref() != Some(name);

            if changed || elapsed > debounce_ms {
                let timestamp_ms = timestamp_ms.max(previous.last_change_ms);
                debug!("Accepting gesture {} at {} ms", name, timestamp_ms);
                let event = GestureEvent {
                    name: name.to_string(),
                    confidence: (score * CONFIDENCE_PERCENT_SCALE).clamp(0.0, CONFIDENCE_PERCENT_SCALE),
                    timestamp_ms,
                };
                let state = StabilizerState {
                    current: Some(name.to_string()),
                    last_change_ms: timestamp_ms,
                };
                (state, Some(event))
            } else {
                (previous.clone(), None)
            }
        }
        None if matches!(observation, Observation::NoDetection) && mode == DetectionMode::Hands => {
            if let Some(current) = &previous.current {
                debug!("Clearing gesture {} at {} ms", current, timestamp_ms);
            }
            let state = StabilizerState {
                current: None,
                last_change_ms: previous.last_change_ms,
            };
            (state, None)
        }
        None => (previous.clone(), None),
    }
}

/// Owning wrapper around [`step`]
#[derive(Debug, Clone)]
pub struct GestureStabilizer {
    debounce_ms: u64,
    mode: DetectionMode,
    state: StabilizerState,
}

impl Default for GestureStabilizer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS, DetectionMode::default())
    }
}

impl GestureStabilizer {
    #[must_use]
    pub fn new(debounce_ms: u64, mode: DetectionMode) -> Self {
        Self {
            debounce_ms,
            mode,
            state: StabilizerState::default(),
        }
    }

    /// Feed one observation, returning the event to emit, if any
    pub fn update(&mut self, observation: &Observation, timestamp_ms: u64) -> Option<GestureEvent> {
        let (state, event) = step(&self.state, observation, timestamp_ms, self.debounce_ms, self.mode);
        self.state = state;
        event
    }

    /// Gesture currently shown
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.state.current.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> &StabilizerState {
        &self.state
    }

    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    #[must_use]
    pub fn mode(&self) -> DetectionMode {
        self.mode
    }

    /// Switch detection mode; the current gesture is kept
    pub fn set_mode(&mut self, mode: DetectionMode) {
        self.mode = mode;
    }

    /// Forget the current gesture and timestamp
    pub fn reset(&mut self) {
        self.state = StabilizerState::default();
    }
}
