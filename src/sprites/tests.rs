use super::*;
use crate::movement::AnimationDriver;

#[test]
fn test_change_animation_is_idempotent() {
    let mut controller = AnimationController::new("climbing");
    controller.advance(0.15, 2, 0.12, true);
    let frame = controller.current_frame;
    assert_ne!(frame, 0);

    controller.change_animation("climbing");
    assert_eq!(controller.current_frame, frame);

    controller.change_animation("climbing-top");
    assert_eq!(controller.clip, "climbing-top");
    assert_eq!(controller.current_frame, 0);
}

#[test]
fn test_paused_controller_holds_frame() {
    let mut controller = AnimationController::new("running");
    controller.pause();
    assert!(controller.is_paused());

    controller.advance(1.0, 4, 0.1, true);
    assert_eq!(controller.current_frame, 0);

    controller.unpause();
    controller.advance(0.25, 4, 0.1, true);
    assert_eq!(controller.current_frame, 2);
}

#[test]
fn test_non_looping_clip_stops_on_last_frame() {
    let mut controller = AnimationController::new("jumping");
    controller.advance(1.0, 3, 0.1, false);

    assert!(controller.finished);
    assert_eq!(controller.current_frame, 2);
}

#[test]
fn test_manifest_parses_and_falls_back_for_unknown_clips() {
    let json = r#"{
        "version": 2,
        "clips": {
            "climbing": { "frames": 2, "frame_duration": 0.12 }
        }
    }"#;

    let manifest = AnimationManifest::from_json(json).expect("manifest should parse");
    assert_eq!(manifest.version, 2);

    let climbing = manifest.clip("climbing");
    assert_eq!(climbing.frames, 2);
    assert!(climbing.looping);

    assert_eq!(manifest.clip("missing"), AnimationClipDef::default());
}

#[test]
fn test_shipped_manifest_has_every_locomotion_clip() {
    let contents = std::fs::read_to_string("assets/sprites/animations.json")
        .expect("manifest file should exist");
    let manifest = AnimationManifest::from_json(&contents).expect("manifest should parse");

    for clip in ["idle", "running", "jumping", "climbing", "climbing-top"] {
        assert!(manifest.clips.contains_key(clip), "missing clip {}", clip);
    }
}
