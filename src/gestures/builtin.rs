use super::GestureTemplate;
use crate::pose::{
    Finger::{Index, Middle, Pinky, Ring, Thumb},
    FingerCurl::{FullCurl, HalfCurl, NoCurl},
    FingerDirection::{DiagonalUpLeft, DiagonalUpRight, HorizontalLeft, HorizontalRight, VerticalUp},
};

pub const OK_SIGN: &str = "OK_Sign";
pub const ROCK_ON: &str = "Rock_On";
pub const CALL_ME: &str = "Call_Me";
pub const VICTORY: &str = "Victory";
pub const THUMB_UP: &str = "Thumb_Up";

/// Thumb and index touching, other fingers extended
#[must_use]
pub fn ok_sign() -> GestureTemplate {
    let mut gesture = GestureTemplate::new(OK_SIGN);
    gesture
        .add_curl(Thumb, HalfCurl, 1.0)
        .add_curl(Thumb, NoCurl, 0.5)
        .add_curl(Index, HalfCurl, 1.0)
        .add_curl(Index, NoCurl, 0.5)
        .add_curl(Middle, NoCurl, 1.0)
        .add_curl(Ring, NoCurl, 1.0)
        .add_curl(Pinky, NoCurl, 1.0);
    gesture
}

/// Index and pinky extended, middle and ring folded, thumb free
#[must_use]
pub fn rock_on() -> GestureTemplate {
    let mut gesture = GestureTemplate::new(ROCK_ON);
    gesture
        .add_curl(Index, NoCurl, 1.0)
        .add_curl(Pinky, NoCurl, 1.0)
        .add_curl(Middle, FullCurl, 1.0)
        .add_curl(Ring, FullCurl, 1.0)
        .add_curl(Thumb, HalfCurl, 0.5)
        .add_curl(Thumb, NoCurl, 0.5);
    gesture
}

/// Thumb and pinky extended sideways, other fingers folded
#[must_use]
pub fn call_me() -> GestureTemplate {
    let mut gesture = GestureTemplate::new(CALL_ME);
    gesture
        .add_curl(Thumb, NoCurl, 1.0)
        .add_curl(Pinky, NoCurl, 1.0)
        .add_curl(Index, FullCurl, 1.0)
        .add_curl(Middle, FullCurl, 1.0)
        .add_curl(Ring, FullCurl, 1.0)
        .add_direction(Thumb, HorizontalLeft, 0.7)
        .add_direction(Thumb, HorizontalRight, 0.7);
    gesture
}

/// Index and middle extended, the rest folded
#[must_use]
pub fn victory() -> GestureTemplate {
    let mut gesture = GestureTemplate::new(VICTORY);
    gesture
        .add_curl(Index, NoCurl, 1.0)
        .add_curl(Middle, NoCurl, 1.0)
        .add_curl(Ring, FullCurl, 1.0)
        .add_curl(Pinky, FullCurl, 1.0)
        .add_curl(Thumb, HalfCurl, 0.9);
    gesture
}

/// Thumb extended upward, all other fingers folded
#[must_use]
pub fn thumb_up() -> GestureTemplate {
    let mut gesture = GestureTemplate::new(THUMB_UP);
    gesture
        .add_curl(Thumb, NoCurl, 1.0)
        .add_direction(Thumb, VerticalUp, 1.0)
        .add_direction(Thumb, DiagonalUpLeft, 0.9)
        .add_direction(Thumb, DiagonalUpRight, 0.9)
        .add_curl(Index, FullCurl, 1.0)
        .add_curl(Middle, FullCurl, 1.0)
        .add_curl(Ring, FullCurl, 1.0)
        .add_curl(Pinky, FullCurl, 1.0);
    gesture
}

/// All built-in gestures in declaration order
#[must_use]
pub fn builtin_gestures() -> Vec<GestureTemplate> {
    vec![ok_sign(), rock_on(), call_me(), victory(), thumb_up()]
}
