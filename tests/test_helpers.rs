//! Helper functions and utilities for tests

#![allow(dead_code)]

use hand_gesture_estimation::{
    engine::{FrameInput, RecognizedGesture},
    expression::Blendshape,
    landmarks::Landmark,
};

/// Coarse finger shape used to synthesize landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Straight,
    Half,
    Folded,
}

impl Shape {
    /// Interior angle at the measuring joint, in degrees
    fn angle(self) -> f64 {
        match self {
            Shape::Straight => 180.0,
            Shape::Half => 95.0,
            Shape::Folded => 30.0,
        }
    }
}

const WRIST: (f64, f64) = (0.5, 0.9);
const FINGER_BASES: [f64; 4] = [0.42, 0.5, 0.58, 0.66];

/// Point at `length` from `vertex` such that the angle anchor-vertex-point is `angle` degrees
fn bend(anchor: (f64, f64), vertex: (f64, f64), angle: f64, length: f64) -> (f64, f64) {
    let (wx, wy) = (anchor.0 - vertex.0, anchor.1 - vertex.1);
    let norm = (wx * wx + wy * wy).sqrt();
    let (ux, uy) = (wx / norm, wy / norm);
    let (px, py) = (uy, -ux);
    let (sin, cos) = angle.to_radians().sin_cos();
    (
        vertex.0 + length * (ux * cos + px * sin),
        vertex.1 + length * (uy * cos + py * sin),
    )
}

fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

fn landmark(p: (f64, f64)) -> Landmark {
    Landmark::flat(p.0, p.1)
}

/// Build a 21-point hand in image coordinates (y grows downward), palm
/// facing the camera, fingers pointing up when straight
pub fn hand(shapes: [Shape; 5]) -> Vec<Landmark> {
    let mut points = Vec::with_capacity(21);
    points.push(landmark(WRIST));

    // thumb: CMC, MCP, IP, TIP
    let cmc = (0.36, 0.85);
    let mcp = (0.32, 0.76);
    let ip = (0.32, 0.68);
    let tip = bend(cmc, ip, shapes[0].angle(), 0.08);
    points.extend([cmc, mcp, ip, tip].map(landmark));

    // other fingers: MCP, PIP, DIP, TIP
    for (base_x, shape) in FINGER_BASES.iter().zip(&shapes[1..]) {
        let mcp = (*base_x, 0.7);
        let pip = (*base_x, 0.6);
        let tip = bend(WRIST, pip, shape.angle(), 0.1);
        points.extend([mcp, pip, midpoint(pip, tip), tip].map(landmark));
    }

    points
}

/// All five fingers extended upward
pub fn open_hand() -> Vec<Landmark> {
    hand([Shape::Straight; 5])
}

/// All five fingers folded
pub fn fist() -> Vec<Landmark> {
    hand([Shape::Folded; 5])
}

/// Index and middle extended, thumb half bent, ring and pinky folded
pub fn victory_hand() -> Vec<Landmark> {
    hand([
        Shape::Half,
        Shape::Straight,
        Shape::Straight,
        Shape::Folded,
        Shape::Folded,
    ])
}

/// Thumb extended upward, all other fingers folded
pub fn thumb_up_hand() -> Vec<Landmark> {
    hand([
        Shape::Straight,
        Shape::Folded,
        Shape::Folded,
        Shape::Folded,
        Shape::Folded,
    ])
}

/// Scale around the wrist and translate; angles are preserved
pub fn transform(landmarks: &[Landmark], scale: f64, dx: f64, dy: f64) -> Vec<Landmark> {
    landmarks
        .iter()
        .map(|p| {
            Landmark::new(
                WRIST.0 + (p.x - WRIST.0) * scale + dx,
                WRIST.1 + (p.y - WRIST.1) * scale + dy,
                p.z * scale,
            )
        })
        .collect()
}

/// Rotate around the wrist in image coordinates; +90 turns "up" into "right"
pub fn rotate(landmarks: &[Landmark], degrees: f64) -> Vec<Landmark> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    landmarks
        .iter()
        .map(|p| {
            let (x, y) = (p.x - WRIST.0, p.y - WRIST.1);
            Landmark::new(WRIST.0 + x * cos - y * sin, WRIST.1 + x * sin + y * cos, p.z)
        })
        .collect()
}

/// Frame with a single hand
pub fn hand_frame(timestamp_ms: u64, landmarks: Vec<Landmark>) -> FrameInput {
    FrameInput {
        timestamp_ms,
        hands: vec![landmarks],
        ..FrameInput::default()
    }
}

/// Frame with a single hand already classified by the landmark model
pub fn recognized_frame(timestamp_ms: u64, landmarks: Vec<Landmark>, name: &str, score: f64) -> FrameInput {
    FrameInput {
        recognized: Some(RecognizedGesture {
            name: name.to_string(),
            score,
        }),
        ..hand_frame(timestamp_ms, landmarks)
    }
}

/// Frame with a face only
pub fn face_frame(timestamp_ms: u64, blendshapes: Vec<Blendshape>) -> FrameInput {
    FrameInput {
        timestamp_ms,
        face: Some(blendshapes),
        ..FrameInput::default()
    }
}
