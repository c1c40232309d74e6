//! Constants used throughout the library

/// Number of landmarks in one hand skeleton
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Number of tracked fingers per hand
pub const NUM_FINGERS: usize = 5;

/// Interior joint angle (degrees) above which a finger counts as straight
pub const NO_CURL_START_LIMIT: f64 = 130.0;

/// Interior joint angle (degrees) above which a finger counts as half curled
pub const HALF_CURL_START_LIMIT: f64 = 60.0;

/// Half-width (degrees) of each cardinal direction bucket
pub const DIRECTION_BUCKET_HALF_WIDTH: f64 = 45.0;

/// Default minimum normalized score for a template match (0.0-1.0)
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.75;

/// Default time (ms) before a repeated gesture is emitted again
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Weight given to the curl rule of a captured gesture
pub const AUTHORED_CURL_WEIGHT: f64 = 1.0;

/// Weight given to the direction rule of a captured gesture
pub const AUTHORED_DIRECTION_WEIGHT: f64 = 0.9;

/// Expression thresholds
pub const DEFAULT_SMILE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MOUTH_OPEN_THRESHOLD: f64 = 0.5;
pub const DEFAULT_BROW_RAISE_THRESHOLD: f64 = 0.5;

/// Scale from a normalized score to a reported confidence percentage
pub const CONFIDENCE_PERCENT_SCALE: f64 = 100.0;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
