//! Template scoring, built-in gestures and gesture authoring

mod test_helpers;

use hand_gesture_estimation::{
    estimator::{score_template, GestureEstimator},
    gestures::{
        authoring::{capture_gesture, template_from_pose},
        builtin::{self, THUMB_UP, VICTORY},
        GestureTemplate, TemplateLibrary,
    },
    pose::{Finger, FingerCurl, FingerDirection, Pose},
    Error,
};
use test_helpers::*;

#[test]
fn test_victory_hand_matches_victory() {
    let pose = Pose::from_landmarks(&victory_hand()).unwrap();
    let library = TemplateLibrary::with_builtin_gestures();

    let best = GestureEstimator::default().best(&pose, &library).unwrap();
    assert_eq!(best.name, VICTORY);
    assert!((best.score - 1.0).abs() < 1e-12);
}

#[test]
fn test_thumb_up_hand_matches_thumb_up() {
    let pose = Pose::from_landmarks(&thumb_up_hand()).unwrap();
    let library = TemplateLibrary::with_builtin_gestures();

    let candidates = GestureEstimator::default().estimate(&pose, &library);
    assert_eq!(candidates[0].name, THUMB_UP);
    assert!((candidates[0].score - 1.0).abs() < 1e-12);
}

#[test]
fn test_fist_matches_nothing() {
    let pose = Pose::from_landmarks(&fist()).unwrap();
    let library = TemplateLibrary::with_builtin_gestures();
    assert!(GestureEstimator::default().best(&pose, &library).is_none());
}

#[test]
fn test_scores_stay_normalized() {
    let poses = [
        Pose::uniform(FingerCurl::NoCurl, FingerDirection::VerticalUp),
        Pose::uniform(FingerCurl::HalfCurl, FingerDirection::HorizontalLeft),
        Pose::uniform(FingerCurl::FullCurl, FingerDirection::VerticalDown),
        Pose::from_landmarks(&victory_hand()).unwrap(),
    ];

    for template in builtin::builtin_gestures() {
        for pose in &poses {
            let score = score_template(&template, pose);
            assert!((0.0..=1.0).contains(&score), "{} scored {}", template.name(), score);
        }
    }
}

#[test]
fn test_call_me_accepts_either_thumb_side() {
    let base = Pose::uniform(FingerCurl::FullCurl, FingerDirection::VerticalDown)
        .with_finger(Finger::Pinky, FingerCurl::NoCurl, FingerDirection::HorizontalRight);

    for side in [FingerDirection::HorizontalLeft, FingerDirection::HorizontalRight] {
        let pose = base.with_finger(Finger::Thumb, FingerCurl::NoCurl, side);
        assert!((score_template(&builtin::call_me(), &pose) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_floor_is_inclusive() {
    // Rock_On with a mismatched pinky: 3.5 of 4.5 achievable
    let pose = Pose::uniform(FingerCurl::FullCurl, FingerDirection::VerticalUp)
        .with_finger(Finger::Index, FingerCurl::NoCurl, FingerDirection::VerticalUp)
        .with_finger(Finger::Thumb, FingerCurl::NoCurl, FingerDirection::VerticalUp);
    let score = score_template(&builtin::rock_on(), &pose);
    assert!((score - 3.5 / 4.5).abs() < 1e-12);

    let at_floor = GestureEstimator::new(score).unwrap();
    assert!(at_floor
        .estimate(&pose, [builtin::rock_on()].iter())
        .iter()
        .any(|c| c.name == builtin::ROCK_ON));

    let above = GestureEstimator::new(score + 1e-9).unwrap();
    assert!(above.estimate(&pose, [builtin::rock_on()].iter()).is_empty());
}

#[test]
fn test_ties_keep_declaration_order() {
    let mut first = GestureTemplate::new("First");
    first.add_curl(Finger::Index, FingerCurl::NoCurl, 1.0);
    let mut second = GestureTemplate::new("Second");
    second.add_curl(Finger::Index, FingerCurl::NoCurl, 0.5);

    let pose = Pose::uniform(FingerCurl::NoCurl, FingerDirection::VerticalUp);
    let estimator = GestureEstimator::default();

    let names: Vec<String> = estimator
        .estimate(&pose, [first.clone(), second.clone()].iter())
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["First", "Second"]);

    let names: Vec<String> = estimator
        .estimate(&pose, [second, first].iter())
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[test]
fn test_capture_thumb_full_curl() {
    let pose = Pose::uniform(FingerCurl::NoCurl, FingerDirection::VerticalUp)
        .with_finger(Finger::Thumb, FingerCurl::FullCurl, FingerDirection::VerticalUp);

    let mut library = TemplateLibrary::with_builtin_gestures();
    capture_gesture(&mut library, "Test", Some(&pose)).unwrap();
    assert_eq!(library.len(), 6);

    let template = library.find_by_name("Test").unwrap();
    let thumb_curls: Vec<_> = template.curl_rules_for(Finger::Thumb).collect();
    assert_eq!(thumb_curls.len(), 1);
    assert_eq!(thumb_curls[0].curl, FingerCurl::FullCurl);
    assert!((thumb_curls[0].weight - 1.0).abs() < 1e-12);

    let thumb_dirs: Vec<_> = template.direction_rules_for(Finger::Thumb).collect();
    assert_eq!(thumb_dirs.len(), 1);
    assert_eq!(thumb_dirs[0].direction, FingerDirection::VerticalUp);
    assert!((thumb_dirs[0].weight - 0.9).abs() < 1e-12);

    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        let curls: Vec<_> = template.curl_rules_for(finger).collect();
        assert_eq!(curls.len(), 1, "{finger}");
        assert_eq!(curls[0].curl, FingerCurl::NoCurl, "{finger}");
        assert!((curls[0].weight - 1.0).abs() < 1e-12, "{finger}");
    }
}

#[test]
fn test_captured_template_matches_its_pose() {
    let pose = Pose::from_landmarks(&hand([
        Shape::Folded,
        Shape::Straight,
        Shape::Folded,
        Shape::Folded,
        Shape::Straight,
    ]))
    .unwrap();

    let mut library = TemplateLibrary::empty();
    capture_gesture(&mut library, "  Spider  ", Some(&pose)).unwrap();

    let best = GestureEstimator::default().best(&pose, &library).unwrap();
    assert_eq!(best.name, "Spider");
    assert!(best.score >= GestureEstimator::default().min_confidence());
}

#[test]
fn test_capture_preconditions() {
    let pose = Pose::uniform(FingerCurl::NoCurl, FingerDirection::VerticalUp);

    assert!(matches!(
        template_from_pose("Wave", None),
        Err(Error::AuthoringPrecondition(_))
    ));
    assert!(matches!(
        template_from_pose("   ", Some(&pose)),
        Err(Error::AuthoringPrecondition(_))
    ));

    let mut library = TemplateLibrary::with_builtin_gestures();
    assert!(capture_gesture(&mut library, "", Some(&pose)).is_err());
    assert_eq!(library.len(), 5);
}

#[test]
fn test_duplicate_names_both_participate() {
    let pose = Pose::uniform(FingerCurl::NoCurl, FingerDirection::VerticalUp);
    let mut library = TemplateLibrary::empty();
    capture_gesture(&mut library, "Open", Some(&pose)).unwrap();
    capture_gesture(&mut library, "Open", Some(&pose)).unwrap();

    assert_eq!(library.len(), 2);
    assert_eq!(GestureEstimator::default().estimate(&pose, &library).len(), 2);

    assert_eq!(library.remove("Open"), 2);
    assert!(library.is_empty());
}
