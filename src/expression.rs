//! Facial expression classification from blendshape scores.
//!
//! Three signals are derived per frame and checked in a fixed priority order;
//! only the first one above its threshold is reported.

use crate::{
    constants::{DEFAULT_BROW_RAISE_THRESHOLD, DEFAULT_MOUTH_OPEN_THRESHOLD, DEFAULT_SMILE_THRESHOLD},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const MOUTH_SMILE_LEFT: &str = "mouthSmileLeft";
pub const MOUTH_SMILE_RIGHT: &str = "mouthSmileRight";
pub const JAW_OPEN: &str = "jawOpen";
pub const BROW_INNER_UP: &str = "browInnerUp";

/// One named expression intensity reported by the face landmark model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blendshape {
    #[serde(rename = "categoryName", alias = "category_name")]
    pub category_name: String,
    pub score: f64,
}

impl Blendshape {
    pub fn new(category_name: impl Into<String>, score: f64) -> Self {
        Self {
            category_name: category_name.into(),
            score,
        }
    }
}

/// Expression labels, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    Smile,
    MouthOpen,
    EyebrowRaise,
}

impl Expression {
    /// Gesture name used when the expression is emitted as an event
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smile => "Smile",
            Self::MouthOpen => "MouthOpen",
            Self::EyebrowRaise => "EyebrowRaise",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-frame expression result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpressionReading {
    pub label: Expression,
    /// Value of the signal that fired, in `[0, 1]`
    pub intensity: f64,
}

/// Thresholds a signal must exceed to fire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpressionThresholds {
    pub smile: f64,
    pub mouth_open: f64,
    pub brow_raise: f64,
}

impl Default for ExpressionThresholds {
    fn default() -> Self {
        Self {
            smile: DEFAULT_SMILE_THRESHOLD,
            mouth_open: DEFAULT_MOUTH_OPEN_THRESHOLD,
            brow_raise: DEFAULT_BROW_RAISE_THRESHOLD,
        }
    }
}

impl ExpressionThresholds {
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any threshold is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("smile", self.smile),
            ("mouth open", self.mouth_open),
            ("brow raise", self.brow_raise),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "The {name} threshold must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Fixed-threshold expression classifier
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpressionClassifier {
    thresholds: ExpressionThresholds,
}

impl ExpressionClassifier {
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for thresholds outside `[0, 1]`.
    pub fn new(thresholds: ExpressionThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    #[must_use]
    pub fn thresholds(&self) -> &ExpressionThresholds {
        &self.thresholds
    }

    /// Classify a blendshape list as reported by the face model.
    ///
    /// The first entry of a category wins; missing categories count as 0.
    #[must_use]
    pub fn classify(&self, blendshapes: &[Blendshape]) -> Option<ExpressionReading> {
        let score = |name: &str| {
            blendshapes
                .iter()
                .find(|shape| shape.category_name == name)
                .map_or(0.0, |shape| shape.score)
        };
        self.classify_signals(
            (score(MOUTH_SMILE_LEFT) + score(MOUTH_SMILE_RIGHT)) / 2.0,
            score(JAW_OPEN),
            score(BROW_INNER_UP),
        )
    }

    /// Classify a category-name to intensity map
    #[must_use]
    pub fn classify_map(&self, scores: &HashMap<String, f64>) -> Option<ExpressionReading> {
        let score = |name: &str| scores.get(name).copied().unwrap_or(0.0);
        self.classify_signals(
            (score(MOUTH_SMILE_LEFT) + score(MOUTH_SMILE_RIGHT)) / 2.0,
            score(JAW_OPEN),
            score(BROW_INNER_UP),
        )
    }

    fn classify_signals(&self, smile: f64, mouth_open: f64, brow_raise: f64) -> Option<ExpressionReading> {
        let reading = |label, intensity: f64| ExpressionReading {
            label,
            intensity: intensity.clamp(0.0, 1.0),
        };

        if smile > self.thresholds.smile {
            Some(reading(Expression::Smile, smile))
        } else if mouth_open > self.thresholds.mouth_open {
            Some(reading(Expression::MouthOpen, mouth_open))
        } else if brow_raise > self.thresholds.brow_raise {
            Some(reading(Expression::EyebrowRaise, brow_raise))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smile_uses_mean_of_both_sides() {
        let classifier = ExpressionClassifier::default();

        let lopsided = vec![Blendshape::new(MOUTH_SMILE_LEFT, 1.0), Blendshape::new(MOUTH_SMILE_RIGHT, 0.1)];
        assert_eq!(classifier.classify(&lopsided), None);

        let even = vec![Blendshape::new(MOUTH_SMILE_LEFT, 0.8), Blendshape::new(MOUTH_SMILE_RIGHT, 0.7)];
        let reading = classifier.classify(&even).unwrap();
        assert_eq!(reading.label, Expression::Smile);
        assert!((reading.intensity - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_priority_order() {
        let classifier = ExpressionClassifier::default();
        let all = vec![
            Blendshape::new(MOUTH_SMILE_LEFT, 0.9),
            Blendshape::new(MOUTH_SMILE_RIGHT, 0.9),
            Blendshape::new(JAW_OPEN, 0.9),
            Blendshape::new(BROW_INNER_UP, 0.9),
        ];
        assert_eq!(classifier.classify(&all).unwrap().label, Expression::Smile);

        let no_smile = &all[2..];
        assert_eq!(classifier.classify(no_smile).unwrap().label, Expression::MouthOpen);

        let brow_only = &all[3..];
        assert_eq!(classifier.classify(brow_only).unwrap().label, Expression::EyebrowRaise);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let classifier = ExpressionClassifier::default();
        assert_eq!(classifier.classify(&[Blendshape::new(JAW_OPEN, 0.5)]), None);
        assert_eq!(classifier.classify(&[]), None);
    }

    #[test]
    fn test_classify_map() {
        let classifier = ExpressionClassifier::default();
        let mut scores = HashMap::new();
        scores.insert(BROW_INNER_UP.to_string(), 0.7);
        scores.insert(JAW_OPEN.to_string(), 0.2);
        let reading = classifier.classify_map(&scores).unwrap();
        assert_eq!(reading.label, Expression::EyebrowRaise);
        assert_eq!(reading.label.to_string(), "EyebrowRaise");
    }

    #[test]
    fn test_invalid_thresholds() {
        let thresholds = ExpressionThresholds {
            smile: 1.2,
            ..ExpressionThresholds::default()
        };
        assert!(ExpressionClassifier::new(thresholds).is_err());
    }

    #[test]
    fn test_blendshape_json_field_names() {
        let shape: Blendshape = serde_json::from_str(r#"{"categoryName": "jawOpen", "score": 0.4}"#).unwrap();
        assert_eq!(shape, Blendshape::new(JAW_OPEN, 0.4));
    }
}
