//! Hand landmark input types.
//!
//! The external landmark model reports 21 points per hand in normalized frame
//! coordinates. `HandLandmarks` is the validated form consumed by the pose
//! extractor; it can only be built from exactly 21 finite points.

use crate::{constants::NUM_HAND_LANDMARKS, Error, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Landmark index of the wrist
pub const WRIST: usize = 0;

/// Landmark indices of the thumb joints
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;

/// Landmark indices of the index finger joints
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;

/// Landmark indices of the middle finger joints
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;

/// Landmark indices of the ring finger joints
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;

/// Landmark indices of the pinky joints
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// A single raw landmark as reported by the landmark model
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, normalized to frame width
    pub x: f64,
    /// Vertical position, normalized to frame height (grows downward)
    pub y: f64,
    /// Relative depth, 0 when the model does not report it
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    /// Create a landmark with explicit depth
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a landmark without depth information
    #[must_use]
    pub const fn flat(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Landmark> for Point3<f64> {
    fn from(landmark: Landmark) -> Self {
        Point3::new(landmark.x, landmark.y, landmark.z)
    }
}

/// A validated 21-point hand skeleton
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    joints: [Point3<f64>; NUM_HAND_LANDMARKS],
}

impl HandLandmarks {
    /// Validate a raw landmark sequence
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the sequence does not hold exactly
    /// 21 landmarks or if any coordinate is NaN or infinite.
    pub fn new(landmarks: &[Landmark]) -> Result<Self> {
        if landmarks.len() != NUM_HAND_LANDMARKS {
            return Err(Error::MalformedInput(format!(
                "Expected {} hand landmarks, got {}",
                NUM_HAND_LANDMARKS,
                landmarks.len()
            )));
        }

        let mut joints = [Point3::origin(); NUM_HAND_LANDMARKS];
        for (i, landmark) in landmarks.iter().enumerate() {
            if !landmark.is_finite() {
                return Err(Error::MalformedInput(format!(
                    "Non-finite coordinate at landmark {i}: ({}, {}, {})",
                    landmark.x, landmark.y, landmark.z
                )));
            }
            joints[i] = (*landmark).into();
        }

        Ok(Self { joints })
    }

    /// Position of the joint at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is 21 or greater.
    #[must_use]
    pub fn joint(&self, index: usize) -> &Point3<f64> {
        &self.joints[index]
    }

    /// All joint positions in landmark order
    #[must_use]
    pub fn joints(&self) -> &[Point3<f64>] {
        &self.joints
    }
}

impl TryFrom<&[Landmark]> for HandLandmarks {
    type Error = Error;

    fn try_from(landmarks: &[Landmark]) -> Result<Self> {
        Self::new(landmarks)
    }
}
