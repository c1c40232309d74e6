use super::{GestureTemplate, TemplateLibrary};
use crate::{
    constants::{AUTHORED_CURL_WEIGHT, AUTHORED_DIRECTION_WEIGHT},
    pose::Pose,
    Error, Result,
};
use log::info;

/// Build a template that expects exactly the curls and directions of `pose`.
///
/// Each finger gets one curl rule at full weight and one direction rule at a
/// slightly lower weight, since directions are the noisier signal.
///
/// # Errors
///
/// Returns [`Error::AuthoringPrecondition`] when no pose is available or the
/// trimmed name is empty.
pub fn template_from_pose(name: &str, pose: Option<&Pose>) -> Result<GestureTemplate> {
    let pose = pose.ok_or_else(|| Error::AuthoringPrecondition("No hand is currently tracked".to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::AuthoringPrecondition("Gesture name must not be empty".to_string()));
    }

    let mut template = GestureTemplate::new(name);
    for (finger, state) in pose.iter() {
        template
            .add_curl(finger, state.curl, AUTHORED_CURL_WEIGHT)
            .add_direction(finger, state.direction, AUTHORED_DIRECTION_WEIGHT);
    }

    Ok(template)
}

/// Capture `pose` under `name` and add it to `library`.
///
/// # Errors
///
/// Same as [`template_from_pose`]; the library is untouched on error.
pub fn capture_gesture(library: &mut TemplateLibrary, name: &str, pose: Option<&Pose>) -> Result<()> {
    let template = template_from_pose(name, pose)?;
    info!("Captured gesture '{}'", template.name());
    library.insert(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Finger, FingerCurl, FingerDirection};

    #[test]
    fn test_one_curl_and_direction_rule_per_finger() {
        let pose = Pose::uniform(FingerCurl::NoCurl, FingerDirection::VerticalUp);
        let template = template_from_pose("  Open  ", Some(&pose)).unwrap();

        assert_eq!(template.name(), "Open");
        assert_eq!(template.curl_rules().len(), 5);
        assert_eq!(template.direction_rules().len(), 5);
        for finger in Finger::ALL {
            let direction: Vec<_> = template.direction_rules_for(finger).collect();
            assert_eq!(direction.len(), 1);
            assert_eq!(direction[0].direction, FingerDirection::VerticalUp);
            assert!((direction[0].weight - 0.9).abs() < 1e-12);
        }
    }

    #[test]
    fn test_missing_pose_rejected() {
        let mut library = TemplateLibrary::empty();
        let result = capture_gesture(&mut library, "Wave", None);
        assert!(matches!(result, Err(Error::AuthoringPrecondition(_))));
        assert!(library.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let pose = Pose::uniform(FingerCurl::FullCurl, FingerDirection::VerticalDown);
        let mut library = TemplateLibrary::empty();
        let result = capture_gesture(&mut library, " \t ", Some(&pose));
        assert!(matches!(result, Err(Error::AuthoringPrecondition(_))));
        assert!(library.is_empty());
    }
}
