//! Rule-based gesture estimation.
//!
//! Scores a [`Pose`] against every template of a library. Scores are
//! normalized to `[0, 1]`: each finger's curl rules and each finger's
//! direction rules form one group; a group can contribute at most its highest
//! rule weight, and contributes the highest weight among its rules that match
//! the pose. The score is the sum of contributions over the sum of achievable
//! weights, so templates with many rules are not favored over short ones.

use crate::{
    constants::DEFAULT_MIN_CONFIDENCE,
    gestures::GestureTemplate,
    pose::{Finger, Pose},
    Error, Result,
};
use log::debug;
use serde::Serialize;

/// Per-frame template match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureCandidate {
    /// Template name
    pub name: String,
    /// Normalized match score in `[0, 1]`
    pub score: f64,
}

/// Highest weight of a rule group and the highest weight among its matches
fn group_weights<I>(rules: I) -> (f64, f64)
where
    I: IntoIterator<Item = (bool, f64)>,
{
    rules
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(achievable, matched), (is_match, weight)| {
            let matched = if is_match { matched.max(weight) } else { matched };
            (achievable.max(weight), matched)
        })
}

/// Normalized score of `pose` against one template
#[must_use]
pub fn score_template(template: &GestureTemplate, pose: &Pose) -> f64 {
    let mut achievable = 0.0;
    let mut matched = 0.0;

    for finger in Finger::ALL {
        let state = pose.finger(finger);

        let (curl_max, curl_hit) = group_weights(
            template
                .curl_rules_for(finger)
                .map(|rule| (rule.curl == state.curl, rule.weight)),
        );
        let (dir_max, dir_hit) = group_weights(
            template
                .direction_rules_for(finger)
                .map(|rule| (rule.direction == state.direction, rule.weight)),
        );

        achievable += curl_max + dir_max;
        matched += curl_hit + dir_hit;
    }

    if achievable <= 0.0 {
        return 0.0;
    }
    (matched / achievable).clamp(0.0, 1.0)
}

/// Matches poses against gesture templates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEstimator {
    min_confidence: f64,
}

impl Default for GestureEstimator {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl GestureEstimator {
    /// Create an estimator with the given confidence floor
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `min_confidence` is not in `[0, 1]`.
    pub fn new(min_confidence: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(Error::InvalidInput(format!(
                "Minimum confidence must be between 0.0 and 1.0, got {min_confidence}"
            )));
        }
        Ok(Self { min_confidence })
    }

    #[must_use]
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// All candidates scoring at or above the floor, best first.
    ///
    /// Equal scores keep template declaration order.
    pub fn estimate<'a, I>(&self, pose: &Pose, templates: I) -> Vec<GestureCandidate>
    where
        I: IntoIterator<Item = &'a GestureTemplate>,
    {
        let mut candidates: Vec<GestureCandidate> = templates
            .into_iter()
            .map(|template| GestureCandidate {
                name: template.name().to_string(),
                score: score_template(template, pose),
            })
            .filter(|candidate| candidate.score >= self.min_confidence)
            .collect();

        // sort_by is stable, so ties stay in declaration order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        if let Some(top) = candidates.first() {
            debug!("Best template match: {} ({:.3})", top.name, top.score);
        }
        candidates
    }

    /// Highest-scoring candidate, first-declared on ties
    pub fn best<'a, I>(&self, pose: &Pose, templates: I) -> Option<GestureCandidate>
    where
        I: IntoIterator<Item = &'a GestureTemplate>,
    {
        self.estimate(pose, templates).into_iter().next()
    }
}
