//! Configuration management for the gesture engine

use crate::{
    constants::{
        DEFAULT_BROW_RAISE_THRESHOLD, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_CONFIDENCE, DEFAULT_MOUTH_OPEN_THRESHOLD,
        DEFAULT_SMILE_THRESHOLD,
    },
    engine::{DetectionMode, GestureEngine},
    estimator::GestureEstimator,
    expression::{ExpressionClassifier, ExpressionThresholds},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Detection mode configuration
    pub detection: DetectionConfig,

    /// Template matching configuration
    pub estimator: EstimatorConfig,

    /// Facial expression configuration
    pub expression: ExpressionConfig,

    /// Debounce configuration
    pub stabilizer: StabilizerConfig,
}

/// Detection mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Which detectors run: hands, face or both
    pub mode: DetectionMode,
}

/// Template matching parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Minimum normalized template score (0.0-1.0)
    pub min_confidence: f64,
}

/// Expression thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionConfig {
    /// Mean smile intensity needed for "Smile" (0.0-1.0)
    pub smile_threshold: f64,

    /// Jaw opening needed for "MouthOpen" (0.0-1.0)
    pub mouth_open_threshold: f64,

    /// Inner brow raise needed for "EyebrowRaise" (0.0-1.0)
    pub brow_raise_threshold: f64,
}

/// Stabilizer parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerConfig {
    /// Minimum time (ms) before the same gesture is emitted again
    pub debounce_ms: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        Self {
            smile_threshold: DEFAULT_SMILE_THRESHOLD,
            mouth_open_threshold: DEFAULT_MOUTH_OPEN_THRESHOLD,
            brow_raise_threshold: DEFAULT_BROW_RAISE_THRESHOLD,
        }
    }
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl ExpressionConfig {
    /// Thresholds in the form used by the classifier
    #[must_use]
    pub fn thresholds(&self) -> ExpressionThresholds {
        ExpressionThresholds {
            smile: self.smile_threshold,
            mouth_open: self.mouth_open_threshold,
            brow_raise: self.brow_raise_threshold,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Build a gesture engine from this configuration
    pub fn build_engine(&self) -> Result<GestureEngine> {
        self.validate()?;

        let estimator = GestureEstimator::new(self.estimator.min_confidence)?;
        let expressions = ExpressionClassifier::new(self.expression.thresholds())?;

        Ok(GestureEngine::new(
            self.detection.mode,
            estimator,
            expressions,
            self.stabilizer.debounce_ms,
        ))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.estimator.min_confidence) {
            return Err(Error::ConfigError(
                "Minimum confidence must be between 0.0 and 1.0".to_string(),
            ));
        }

        self.expression
            .thresholds()
            .validate()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Estimation Configuration

# Which detectors run: hands, face or both
detection:
  mode: "hands"

# Template matching
estimator:
  min_confidence: 0.75

# Facial expression thresholds
expression:
  smile_threshold: 0.6
  mouth_open_threshold: 0.5
  brow_raise_threshold: 0.5

# Debouncing
stabilizer:
  debounce_ms: 500
"#;
