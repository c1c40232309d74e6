//! Gesture templates and the template library.
//!
//! A template is a named set of weighted rules describing the expected curl
//! and direction of each finger. The library keeps templates in declaration
//! order; that order breaks score ties during estimation.

/// The five gestures shipped with the library
pub mod builtin;

/// Capturing a live pose as a new template
pub mod authoring;

use crate::{
    pose::{Finger, FingerCurl, FingerDirection},
    Error, Result,
};
use log::info;
use serde::Serialize;
use std::sync::Arc;

/// Expected curl of one finger, with the confidence carried by that signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurlRule {
    pub finger: Finger,
    pub curl: FingerCurl,
    pub weight: f64,
}

/// Expected direction of one finger, with the confidence carried by that signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionRule {
    pub finger: Finger,
    pub direction: FingerDirection,
    pub weight: f64,
}

/// Named, weighted rule set for one gesture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureTemplate {
    name: String,
    curls: Vec<CurlRule>,
    directions: Vec<DirectionRule>,
}

fn assert_weight(weight: f64) {
    assert!(weight > 0.0 && weight <= 1.0, "Rule weight must be in (0, 1]");
}

impl GestureTemplate {
    /// Create a template without rules
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            curls: Vec::new(),
            directions: Vec::new(),
        }
    }

    /// Expect `finger` to have `curl`
    ///
    /// # Panics
    ///
    /// Panics if `weight` is not in `(0, 1]`.
    pub fn add_curl(&mut self, finger: Finger, curl: FingerCurl, weight: f64) -> &mut Self {
        assert_weight(weight);
        self.curls.push(CurlRule { finger, curl, weight });
        self
    }

    /// Expect `finger` to point in `direction`
    ///
    /// # Panics
    ///
    /// Panics if `weight` is not in `(0, 1]`.
    pub fn add_direction(&mut self, finger: Finger, direction: FingerDirection, weight: f64) -> &mut Self {
        assert_weight(weight);
        self.directions.push(DirectionRule {
            finger,
            direction,
            weight,
        });
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn curl_rules(&self) -> &[CurlRule] {
        &self.curls
    }

    #[must_use]
    pub fn direction_rules(&self) -> &[DirectionRule] {
        &self.directions
    }

    /// Curl rules that apply to one finger
    pub fn curl_rules_for(&self, finger: Finger) -> impl Iterator<Item = &CurlRule> + '_ {
        self.curls.iter().filter(move |rule| rule.finger == finger)
    }

    /// Direction rules that apply to one finger
    pub fn direction_rules_for(&self, finger: Finger) -> impl Iterator<Item = &DirectionRule> + '_ {
        self.directions.iter().filter(move |rule| rule.finger == finger)
    }

    /// Total number of rules
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.curls.len() + self.directions.len()
    }

    /// Check that the template can be added to a library
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a blank name or a weight outside
    /// `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("Gesture name must not be empty".to_string()));
        }

        let weights = self
            .curls
            .iter()
            .map(|rule| rule.weight)
            .chain(self.directions.iter().map(|rule| rule.weight));
        for weight in weights {
            if !(weight > 0.0 && weight <= 1.0) {
                return Err(Error::InvalidInput(format!(
                    "Rule weight {weight} of gesture {} must be in (0, 1]",
                    self.name
                )));
            }
        }

        Ok(())
    }
}

/// Append-only collection of gesture templates.
///
/// Templates live behind a shared pointer. [`TemplateLibrary::snapshot`]
/// hands out the current list; later inserts copy the list instead of
/// mutating it, so a snapshot taken at frame start never changes.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: Arc<Vec<GestureTemplate>>,
}

impl TemplateLibrary {
    /// Library without any template
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Library preloaded with the built-in gestures
    #[must_use]
    pub fn with_builtin_gestures() -> Self {
        Self {
            templates: Arc::new(builtin::builtin_gestures()),
        }
    }

    /// Append a template.
    ///
    /// A template whose name is already present is added as a second entry;
    /// both take part in estimation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the template fails validation. The
    /// library is left untouched in that case.
    pub fn insert(&mut self, template: GestureTemplate) -> Result<()> {
        template.validate()?;
        info!(
            "Adding gesture template '{}' with {} rules",
            template.name(),
            template.rule_count()
        );
        Arc::make_mut(&mut self.templates).push(template);
        Ok(())
    }

    /// Remove every template called `name`, returning how many were dropped
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.templates.len();
        if self.templates.iter().any(|template| template.name() == name) {
            Arc::make_mut(&mut self.templates).retain(|template| template.name() != name);
        }
        let removed = before - self.templates.len();
        if removed > 0 {
            info!("Removed {} gesture template(s) named '{}'", removed, name);
        }
        removed
    }

    /// Current templates, unaffected by later changes to the library
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<GestureTemplate>> {
        Arc::clone(&self.templates)
    }

    /// Templates in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, GestureTemplate> {
        self.templates.iter()
    }

    /// First template called `name`
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&GestureTemplate> {
        self.templates.iter().find(|template| template.name() == name)
    }

    /// Template names in declaration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(GestureTemplate::name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateLibrary {
    type Item = &'a GestureTemplate;
    type IntoIter = std::slice::Iter<'a, GestureTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
