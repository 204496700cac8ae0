//! Config domain: tests for parsing and accepting movement configuration.

use bevy::prelude::*;
use std::path::Path;

use super::{
    ConfigFormat, JumpDef, MovementConfigDef, Vec2Def, accept_movement_config,
    load_movement_config, parse_movement_config,
};
use crate::movement::{JumpCurve, JumpEase, Keyframe, MIN_JUMP_DURATION};

fn sample_def() -> MovementConfigDef {
    MovementConfigDef {
        schema_version: 1,
        gravity: Vec2Def { x: 0.0, y: -9.81 },
        walk_speed: 10.0,
        acceleration: 20.0,
        deceleration: 30.0,
        foot_height: 0.0,
        incline_limit: 135.0,
        jump: JumpDef {
            curve: JumpCurve::Linear,
            duration: 0.5,
            height: 1.0,
        },
    }
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_ron_config() {
    let text = r#"(
        schema_version: 1,
        gravity: (x: 0.0, y: -20.0),
        walk_speed: 8.0,
        acceleration: 40.0,
        deceleration: 50.0,
        foot_height: -0.4,
        incline_limit: 120.0,
        jump: (
            curve: Keyframes([(time: 0.0, value: 0.0), (time: 1.0, value: 1.0)]),
            duration: 0.4,
        ),
    )"#;

    let def = parse_movement_config(text, ConfigFormat::Ron, "inline.ron").unwrap();

    assert_eq!(def.gravity, Vec2Def { x: 0.0, y: -20.0 });
    assert_eq!(def.walk_speed, 8.0);
    assert_eq!(def.jump.duration, 0.4);
    // Height falls back to one world unit per curve unit
    assert_eq!(def.jump.height, 1.0);
    assert_eq!(
        def.jump.curve,
        JumpCurve::Keyframes(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)])
    );
}

#[test]
fn test_parse_json_config() {
    let text = r#"{
        "schema_version": 1,
        "gravity": { "x": 0.0, "y": -9.81 },
        "walk_speed": 10.0,
        "acceleration": 20.0,
        "deceleration": 30.0,
        "foot_height": 0.0,
        "incline_limit": 135.0,
        "jump": { "curve": { "Eased": "SineOut" }, "duration": 0.5, "height": 2.0 }
    }"#;

    let def = parse_movement_config(text, ConfigFormat::Json, "inline.json").unwrap();

    assert_eq!(def.jump.curve, JumpCurve::Eased(JumpEase::SineOut));
    assert_eq!(def.jump.height, 2.0);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_movement_config("(walk_speed: )", ConfigFormat::Ron, "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("a/movement.ron")),
        Some(ConfigFormat::Ron)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("movement.json")),
        Some(ConfigFormat::Json)
    );
    assert_eq!(ConfigFormat::from_path(Path::new("movement.toml")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("movement")), None);
}

#[test]
fn test_load_rejects_unknown_extension() {
    let err = load_movement_config(Path::new("movement.yaml")).unwrap_err();
    assert!(err.message.contains("unsupported extension"));
}

#[test]
fn test_load_missing_file_reports_io_error() {
    let err = load_movement_config(Path::new("does/not/exist/movement.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_config_is_accepted() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/movement.ron");
    let def = load_movement_config(&path).unwrap();
    let config = accept_movement_config(&def).unwrap();

    assert!(config.tuning.gravity.y < 0.0);
    assert!(config.jump.duration() > 0.0);
    assert!((0.0..=180.0).contains(&config.tuning.incline_limit));
}

#[test]
fn test_round_trip_through_ron_keeps_curve() {
    let mut def = sample_def();
    def.jump.curve = JumpCurve::Eased(JumpEase::CubicOut);

    let text = ron::to_string(&def).unwrap();
    let parsed = parse_movement_config(&text, ConfigFormat::Ron, "roundtrip.ron").unwrap();

    assert_eq!(parsed, def);
}

// -----------------------------------------------------------------------------
// Acceptance
// -----------------------------------------------------------------------------

#[test]
fn test_accept_builds_runtime_config() {
    let config = accept_movement_config(&sample_def()).unwrap();

    assert_eq!(config.tuning.gravity, Vec2::new(0.0, -9.81));
    assert_eq!(config.tuning.walk_speed, 10.0);
    assert_eq!(config.jump.duration(), 0.5);
    assert_eq!(config.jump.curve, JumpCurve::Linear);
}

#[test]
fn test_non_positive_duration_is_clamped() {
    for duration in [0.0, -1.0, MIN_JUMP_DURATION / 2.0] {
        let mut def = sample_def();
        def.jump.duration = duration;

        let config = accept_movement_config(&def).unwrap();

        assert_eq!(config.jump.duration(), MIN_JUMP_DURATION);
    }
}

#[test]
fn test_incline_limit_is_clamped_to_half_turn() {
    let mut def = sample_def();
    def.incline_limit = 200.0;
    assert_eq!(
        accept_movement_config(&def).unwrap().tuning.incline_limit,
        180.0
    );

    def.incline_limit = -10.0;
    assert_eq!(
        accept_movement_config(&def).unwrap().tuning.incline_limit,
        0.0
    );
}

#[test]
fn test_negative_rates_are_clamped() {
    let mut def = sample_def();
    def.walk_speed = -5.0;
    def.deceleration = -1.0;

    let config = accept_movement_config(&def).unwrap();

    assert_eq!(config.tuning.walk_speed, 0.0);
    assert_eq!(config.tuning.deceleration, 0.0);
    assert_eq!(config.tuning.acceleration, 20.0);
}

#[test]
fn test_non_finite_values_are_rejected() {
    let mut def = sample_def();
    def.gravity.y = f32::NAN;
    def.jump.height = f32::INFINITY;

    let errors = accept_movement_config(&def).unwrap_err();

    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["gravity.y", "jump.height"]);
}

#[test]
fn test_newer_schema_is_rejected() {
    let mut def = sample_def();
    def.schema_version = 99;

    let errors = accept_movement_config(&def).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "schema_version");
}

#[test]
fn test_empty_keyframes_are_rejected() {
    let mut def = sample_def();
    def.jump.curve = JumpCurve::Keyframes(Vec::new());

    let errors = accept_movement_config(&def).unwrap_err();

    assert_eq!(errors[0].field, "jump.curve");
}

#[test]
fn test_keyframes_are_sorted_on_accept() {
    let mut def = sample_def();
    def.jump.curve = JumpCurve::Keyframes(vec![Keyframe::new(1.0, 1.0), Keyframe::new(0.0, 0.0)]);

    let config = accept_movement_config(&def).unwrap();

    assert_eq!(
        config.jump.curve,
        JumpCurve::Keyframes(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)])
    );
    assert!((config.jump.curve.sample(0.5) - 0.5).abs() < 1e-6);
}
