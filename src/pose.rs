//! Pose feature extraction.
//!
//! Maps a validated hand skeleton to a discrete curl state and a discrete
//! pointing direction for each of the five fingers.

use crate::{
    constants::{DIRECTION_BUCKET_HALF_WIDTH, HALF_CURL_START_LIMIT, NO_CURL_START_LIMIT, NUM_FINGERS},
    geometry::{angle_at_vertex, slope_angle},
    landmarks::{
        HandLandmarks, Landmark, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP,
        PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP, WRIST,
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Finger identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers in landmark order
    pub const ALL: [Finger; NUM_FINGERS] = [Finger::Thumb, Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Position of this finger in [`Finger::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thumb => "Thumb",
            Self::Index => "Index",
            Self::Middle => "Middle",
            Self::Ring => "Ring",
            Self::Pinky => "Pinky",
        }
    }

    /// Joints (start, vertex, end) whose interior angle measures the curl.
    ///
    /// The thumb bends around its CMC/IP joints, the other fingers are
    /// measured from the wrist through the PIP joint.
    const fn curl_joints(self) -> (usize, usize, usize) {
        match self {
            Self::Thumb => (THUMB_CMC, THUMB_IP, THUMB_TIP),
            Self::Index => (WRIST, INDEX_PIP, INDEX_TIP),
            Self::Middle => (WRIST, MIDDLE_PIP, MIDDLE_TIP),
            Self::Ring => (WRIST, RING_PIP, RING_TIP),
            Self::Pinky => (WRIST, PINKY_PIP, PINKY_TIP),
        }
    }

    /// Proximal and distal joints whose slope gives the pointing direction
    const fn direction_joints(self) -> (usize, usize) {
        match self {
            Self::Thumb => (THUMB_MCP, THUMB_TIP),
            Self::Index => (INDEX_MCP, INDEX_TIP),
            Self::Middle => (MIDDLE_MCP, MIDDLE_TIP),
            Self::Ring => (RING_MCP, RING_TIP),
            Self::Pinky => (PINKY_MCP, PINKY_TIP),
        }
    }
}

/// How far a finger is bent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FingerCurl {
    NoCurl,
    HalfCurl,
    FullCurl,
}

impl FingerCurl {
    pub const ALL: [FingerCurl; 3] = [FingerCurl::NoCurl, FingerCurl::HalfCurl, FingerCurl::FullCurl];

    /// Classify an interior joint angle in degrees
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        if angle > NO_CURL_START_LIMIT {
            Self::NoCurl
        } else if angle > HALF_CURL_START_LIMIT {
            Self::HalfCurl
        } else {
            Self::FullCurl
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoCurl => "No Curl",
            Self::HalfCurl => "Half Curl",
            Self::FullCurl => "Full Curl",
        }
    }
}

/// Where a finger points, in image orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FingerDirection {
    VerticalUp,
    VerticalDown,
    HorizontalLeft,
    HorizontalRight,
    DiagonalUpLeft,
    DiagonalUpRight,
    DiagonalDownLeft,
    DiagonalDownRight,
}

impl FingerDirection {
    pub const ALL: [FingerDirection; 8] = [
        FingerDirection::VerticalUp,
        FingerDirection::VerticalDown,
        FingerDirection::HorizontalLeft,
        FingerDirection::HorizontalRight,
        FingerDirection::DiagonalUpLeft,
        FingerDirection::DiagonalUpRight,
        FingerDirection::DiagonalDownLeft,
        FingerDirection::DiagonalDownRight,
    ];

    /// Bucket a segment angle (degrees, image coordinates) into a cardinal
    /// direction. Diagonal states are never produced here.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let quarter = DIRECTION_BUCKET_HALF_WIDTH;
        let three_quarters = 3.0 * DIRECTION_BUCKET_HALF_WIDTH;

        if angle > -quarter && angle <= quarter {
            Self::HorizontalRight
        } else if angle > quarter && angle <= three_quarters {
            Self::VerticalDown
        } else if angle > three_quarters || angle <= -three_quarters {
            Self::HorizontalLeft
        } else {
            Self::VerticalUp
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VerticalUp => "Vertical Up",
            Self::VerticalDown => "Vertical Down",
            Self::HorizontalLeft => "Horizontal Left",
            Self::HorizontalRight => "Horizontal Right",
            Self::DiagonalUpLeft => "Diagonal Up Left",
            Self::DiagonalUpRight => "Diagonal Up Right",
            Self::DiagonalDownLeft => "Diagonal Down Left",
            Self::DiagonalDownRight => "Diagonal Down Right",
        }
    }
}

macro_rules! impl_label_traits {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|value| value.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| Error::InvalidInput(format!("Unknown {}: {s}", $what)))
            }
        }
    };
}

impl_label_traits!(Finger, "finger");
impl_label_traits!(FingerCurl, "finger curl");
impl_label_traits!(FingerDirection, "finger direction");

/// Curl and direction of one finger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerPose {
    pub curl: FingerCurl,
    pub direction: FingerDirection,
}

/// One labelled row of a pose snapshot, as shown by an authoring UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerDescription {
    pub finger: &'static str,
    pub curl: &'static str,
    pub direction: &'static str,
}

/// Discrete hand pose: one [`FingerPose`] per finger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    fingers: [FingerPose; NUM_FINGERS],
}

impl Pose {
    /// Build a pose from explicit per-finger states in [`Finger::ALL`] order
    #[must_use]
    pub const fn new(fingers: [FingerPose; NUM_FINGERS]) -> Self {
        Self { fingers }
    }

    /// Pose where every finger has the same curl and direction
    #[must_use]
    pub const fn uniform(curl: FingerCurl, direction: FingerDirection) -> Self {
        Self {
            fingers: [FingerPose { curl, direction }; NUM_FINGERS],
        }
    }

    /// Replace the state of one finger
    #[must_use]
    pub fn with_finger(mut self, finger: Finger, curl: FingerCurl, direction: FingerDirection) -> Self {
        self.fingers[finger.index()] = FingerPose { curl, direction };
        self
    }

    /// Extract the pose of a validated hand skeleton
    #[must_use]
    pub fn from_hand(hand: &HandLandmarks) -> Self {
        let mut fingers = [FingerPose {
            curl: FingerCurl::NoCurl,
            direction: FingerDirection::VerticalUp,
        }; NUM_FINGERS];

        for finger in Finger::ALL {
            fingers[finger.index()] = FingerPose {
                curl: finger_curl(hand, finger),
                direction: finger_direction(hand, finger),
            };
        }

        Self { fingers }
    }

    /// Validate raw landmarks and extract their pose
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] when the landmarks are not a valid
    /// 21-point hand.
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self> {
        let hand = HandLandmarks::new(landmarks)?;
        Ok(Self::from_hand(&hand))
    }

    /// State of one finger
    #[must_use]
    pub const fn finger(&self, finger: Finger) -> FingerPose {
        self.fingers[finger.index()]
    }

    #[must_use]
    pub const fn curl(&self, finger: Finger) -> FingerCurl {
        self.fingers[finger.index()].curl
    }

    #[must_use]
    pub const fn direction(&self, finger: Finger) -> FingerDirection {
        self.fingers[finger.index()].direction
    }

    /// Iterate fingers with their state
    pub fn iter(&self) -> impl Iterator<Item = (Finger, FingerPose)> + '_ {
        Finger::ALL.into_iter().map(move |finger| (finger, self.finger(finger)))
    }

    /// Labelled snapshot of the pose for display
    #[must_use]
    pub fn describe(&self) -> Vec<FingerDescription> {
        self.iter()
            .map(|(finger, state)| FingerDescription {
                finger: finger.label(),
                curl: state.curl.label(),
                direction: state.direction.label(),
            })
            .collect()
    }
}

/// Curl state of one finger
#[must_use]
pub fn finger_curl(hand: &HandLandmarks, finger: Finger) -> FingerCurl {
    let (start, mid, end) = finger.curl_joints();
    let angle = angle_at_vertex(hand.joint(start), hand.joint(mid), hand.joint(end));
    FingerCurl::from_angle(angle)
}

/// Pointing direction of one finger
#[must_use]
pub fn finger_direction(hand: &HandLandmarks, finger: Finger) -> FingerDirection {
    let (from, to) = finger.direction_joints();
    FingerDirection::from_angle(slope_angle(hand.joint(from), hand.joint(to)))
}
