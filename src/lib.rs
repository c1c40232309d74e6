//! Hand gesture estimation library for landmark-driven gesture events.
//!
//! This library turns per-frame hand landmarks and facial blendshape scores
//! into debounced gesture events:
//! - Per-finger curl and direction features computed from 21 hand joints
//! - Weighted gesture templates, with five built-in gestures
//! - Rule-based scoring of a pose against every template
//! - Threshold classification of facial expressions
//! - A debouncing stabilizer that suppresses flicker between frames
//!
//! The estimation pipeline consists of:
//! 1. Validating the landmarks of the first detected hand
//! 2. Extracting a discrete pose (curl and direction per finger)
//! 3. Matching the pose against the template library, unless the landmark
//!    model already recognized a gesture for the frame
//! 4. Stabilizing the result into a gesture event
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use hand_gesture_estimation::{
//!     estimator::GestureEstimator,
//!     gestures::TemplateLibrary,
//!     pose::{Finger, FingerCurl, FingerDirection, Pose},
//! };
//!
//! let library = TemplateLibrary::with_builtin_gestures();
//! let estimator = GestureEstimator::default();
//!
//! // Index and middle extended, the rest folded
//! let pose = Pose::uniform(FingerCurl::FullCurl, FingerDirection::VerticalUp)
//!     .with_finger(Finger::Thumb, FingerCurl::HalfCurl, FingerDirection::VerticalUp)
//!     .with_finger(Finger::Index, FingerCurl::NoCurl, FingerDirection::VerticalUp)
//!     .with_finger(Finger::Middle, FingerCurl::NoCurl, FingerDirection::VerticalUp);
//!
//! let best = estimator.best(&pose, &library).unwrap();
//! assert_eq!(best.name, "Victory");
//! ```
//!
//! ## Frame Pipeline
//!
//! ```no_run
//! use hand_gesture_estimation::{config::Config, engine::FrameInput};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = Config::from_file("gestures.yaml")?.build_engine()?;
//!
//! let frame: FrameInput = serde_json::from_str(r#"{"timestamp_ms": 0, "hands": []}"#)?;
//! if let Some(event) = engine.process_frame(&frame) {
//!     println!("{} ({:.0}%)", event.name, event.confidence);
//! }
//!
//! // Save the current pose as a new gesture
//! if engine.capture_gesture("Spiderman").is_err() {
//!     println!("No hand in view");
//! }
//! # Ok(())
//! # }
//! ```

/// Joint geometry helpers
pub mod geometry;

/// Hand landmark input types
pub mod landmarks;

/// Pose feature extraction (curl and direction per finger)
pub mod pose;

/// Gesture templates, built-in gestures and gesture authoring
pub mod gestures;

/// Template matching
pub mod estimator;

/// Facial expression classification
pub mod expression;

/// Temporal stabilization of gesture observations
pub mod stabilizer;

/// Per-frame pipeline
pub mod engine;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
