//! Per-frame gesture pipeline.
//!
//! [`GestureEngine`] owns the template library and the stabilizer state and
//! runs extraction, estimation and stabilization for each frame handed to
//! [`GestureEngine::process_frame`]. It never polls or sleeps; the caller
//! drives it, one frame at a time.

use crate::{
    constants::DEFAULT_DEBOUNCE_MS,
    estimator::{GestureCandidate, GestureEstimator},
    expression::{Blendshape, ExpressionClassifier},
    gestures::{authoring, GestureTemplate, TemplateLibrary},
    landmarks::Landmark,
    pose::Pose,
    stabilizer::{GestureEvent, GestureStabilizer, Observation},
    Error, Result,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which detectors feed the stabilizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    /// Hand gestures only
    #[default]
    Hands,
    /// Facial expressions only
    Face,
    /// Hand gestures and facial expressions; an expression outranks a hand gesture
    Both,
}

impl DetectionMode {
    #[must_use]
    pub const fn uses_hands(self) -> bool {
        matches!(self, Self::Hands | Self::Both)
    }

    #[must_use]
    pub const fn uses_face(self) -> bool {
        matches!(self, Self::Face | Self::Both)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hands => "hands",
            Self::Face => "face",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hands" | "hand" => Ok(Self::Hands),
            "face" => Ok(Self::Face),
            "both" => Ok(Self::Both),
            _ => Err(Error::InvalidInput(format!("Unknown detection mode: {s}"))),
        }
    }
}

/// Gesture reported by the landmark model's own classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedGesture {
    pub name: String,
    /// Classifier score in `[0, 1]`
    pub score: f64,
}

/// Everything the landmark model produced for one video frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Frame time, milliseconds since the epoch
    pub timestamp_ms: u64,
    /// Detected hands; only the first one is classified
    #[serde(default)]
    pub hands: Vec<Vec<Landmark>>,
    /// Pre-trained classification of the first hand, if any
    #[serde(default)]
    pub recognized: Option<RecognizedGesture>,
    /// Blendshapes of the detected face, if any
    #[serde(default)]
    pub face: Option<Vec<Blendshape>>,
}

/// Combine the hand and face observations of one frame
fn arbitrate(hand: Observation, face: Observation) -> Observation {
    match (hand, face) {
        (_, face @ Observation::Expression(_)) => face,
        (hand @ Observation::Gesture(_), _) => hand,
        (Observation::NoMatch, _) | (_, Observation::NoMatch) => Observation::NoMatch,
        _ => Observation::NoDetection,
    }
}

/// Frame-driven gesture recognition pipeline
#[derive(Debug, Clone)]
pub struct GestureEngine {
    mode: DetectionMode,
    library: TemplateLibrary,
    estimator: GestureEstimator,
    expressions: ExpressionClassifier,
    stabilizer: GestureStabilizer,
    current_pose: Option<Pose>,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(
            DetectionMode::default(),
            GestureEstimator::default(),
            ExpressionClassifier::default(),
            DEFAULT_DEBOUNCE_MS,
        )
    }
}

impl GestureEngine {
    /// Create an engine with the built-in gesture library
    #[must_use]
    pub fn new(
        mode: DetectionMode,
        estimator: GestureEstimator,
        expressions: ExpressionClassifier,
        debounce_ms: u64,
    ) -> Self {
        info!(
            "Initializing gesture engine (mode: {}, floor: {:.2}, debounce: {} ms)",
            mode,
            estimator.min_confidence(),
            debounce_ms
        );
        Self {
            mode,
            library: TemplateLibrary::with_builtin_gestures(),
            estimator,
            expressions,
            stabilizer: GestureStabilizer::new(debounce_ms, mode),
            current_pose: None,
        }
    }

    /// Replace the template library
    #[must_use]
    pub fn with_library(mut self, library: TemplateLibrary) -> Self {
        self.library = library;
        self
    }

    /// Run one frame through the pipeline.
    ///
    /// Returns the gesture event emitted for this frame, if any. With
    /// [`DetectionMode::Both`] the stabilizer still sees one observation per
    /// frame; a facial expression outranks a hand gesture.
    pub fn process_frame(&mut self, frame: &FrameInput) -> Option<GestureEvent> {
        let observation = match self.mode {
            DetectionMode::Hands => self.observe_hands(frame),
            DetectionMode::Face => self.observe_face(frame),
            DetectionMode::Both => {
                let hand = self.observe_hands(frame);
                arbitrate(hand, self.observe_face(frame))
            }
        };

        let event = self.stabilizer.update(&observation, frame.timestamp_ms);

        if let Some(event) = &event {
            info!(
                "Gesture {} ({:.1}%) at {} ms",
                event.name, event.confidence, event.timestamp_ms
            );
        }
        event
    }

    fn observe_hands(&mut self, frame: &FrameInput) -> Observation {
        // templates added during this frame only apply to the next one
        let templates = self.library.snapshot();

        self.current_pose = match frame.hands.first().map(|hand| Pose::from_landmarks(hand)) {
            Some(Ok(pose)) => Some(pose),
            Some(Err(e)) => {
                debug!("Ignoring hand at {} ms: {}", frame.timestamp_ms, e);
                None
            }
            None => None,
        };

        let Some(pose) = &self.current_pose else {
            return Observation::NoDetection;
        };

        if let Some(recognized) = &frame.recognized {
            return Observation::Gesture(GestureCandidate {
                name: recognized.name.clone(),
                score: recognized.score.clamp(0.0, 1.0),
            });
        }

        match self.estimator.best(pose, templates.iter()) {
            Some(candidate) => Observation::Gesture(candidate),
            None => Observation::NoMatch,
        }
    }

    fn observe_face(&self, frame: &FrameInput) -> Observation {
        match &frame.face {
            Some(blendshapes) if !blendshapes.is_empty() => match self.expressions.classify(blendshapes) {
                Some(reading) => Observation::Expression(reading),
                None => Observation::NoMatch,
            },
            _ => Observation::NoDetection,
        }
    }

    /// Save the most recent pose as a new gesture template.
    ///
    /// The template takes part in estimation from the next frame on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthoringPrecondition`] if no hand is tracked or the
    /// name is blank.
    pub fn capture_gesture(&mut self, name: &str) -> Result<()> {
        authoring::capture_gesture(&mut self.library, name, self.current_pose.as_ref())
    }

    /// Add a hand-written template
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the template fails validation.
    pub fn add_template(&mut self, template: GestureTemplate) -> Result<()> {
        self.library.insert(template)
    }

    /// Pose of the first hand in the latest frame
    #[must_use]
    pub fn current_pose(&self) -> Option<&Pose> {
        self.current_pose.as_ref()
    }

    /// Gesture currently shown
    #[must_use]
    pub fn current_gesture(&self) -> Option<&str> {
        self.stabilizer.current()
    }

    #[must_use]
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut TemplateLibrary {
        &mut self.library
    }

    #[must_use]
    pub fn mode(&self) -> DetectionMode {
        self.mode
    }

    /// Switch detection mode; the stabilizer state is kept
    pub fn set_mode(&mut self, mode: DetectionMode) {
        info!("Switching detection mode to {}", mode);
        self.mode = mode;
        self.stabilizer.set_mode(mode);
    }

    /// Forget the current gesture and pose
    pub fn reset(&mut self) {
        self.stabilizer.reset();
        self.current_pose = None;
    }
}
