use super::*;
use crate::interp::value::Value;

const ANIM_JSON: &str = r#"{
    "totalDuration": 4000,
    "stages": [
        {"state": {"x": 0}, "sp": 0.0, "ep": 0.25},
        {"state": {"x": 1}, "sp": 0.25, "ep": 0.5},
        {"state": {"x": 2}, "sp": 0.5, "ep": 1.0}
    ],
    "stageSets": [
        {"name": "intro", "length": 2, "idx": 0},
        {"name": "outro", "length": 1, "idx": 2}
    ]
}"#;

fn stage(sp: f64, ep: f64) -> AnimationStage<f64> {
    AnimationStage::new(0.0, sp, ep)
}

#[test]
fn parses_authoring_field_names() {
    let anim = Animation::<Value>::from_json_str(ANIM_JSON).unwrap();
    assert_eq!(anim.total_duration, 4000.0);
    assert_eq!(anim.stages.len(), 3);
    assert_eq!(anim.stage_sets.len(), 2);
    anim.validate().unwrap();
}

#[test]
fn stage_sets_resolve_to_slices() {
    let anim = Animation::<Value>::from_json_str(ANIM_JSON).unwrap();
    let intro = anim.stage_set("intro").unwrap();
    let stages = anim.stages_in(intro).unwrap();
    assert_eq!(stages.len(), 2);
    assert_eq!(stages[1].sp, 0.25);
    assert!(anim.stage_set("missing").is_none());
}

#[test]
fn stage_sets_default_to_empty() {
    let anim: Animation<f64> = Animation::from_json_str(
        r#"{"totalDuration": 1, "stages": [{"state": 1, "sp": 0, "ep": 1}]}"#,
    )
    .unwrap();
    assert!(anim.stage_sets.is_empty());
}

#[test]
fn contains_is_inclusive() {
    let s = stage(0.25, 0.5);
    assert!(s.contains(0.25));
    assert!(s.contains(0.5));
    assert!(!s.contains(0.51));
}

#[test]
fn validate_rejects_bad_duration() {
    let anim = Animation {
        total_duration: 0.0,
        stages: vec![stage(0.0, 1.0)],
        stage_sets: vec![],
    };
    assert!(matches!(anim.validate(), Err(SceneError::Validation(_))));
}

#[test]
fn validate_rejects_inverted_stage() {
    let anim = Animation {
        total_duration: 1.0,
        stages: vec![stage(0.6, 0.4)],
        stage_sets: vec![],
    };
    let err = anim.validate().unwrap_err();
    assert!(err.to_string().contains("stage 0"));
}

#[test]
fn validate_rejects_out_of_range_set() {
    let anim = Animation {
        total_duration: 1.0,
        stages: vec![stage(0.0, 1.0)],
        stage_sets: vec![AnimationStageSet {
            name: "too-long".into(),
            length: 2,
            idx: 0,
        }],
    };
    let err = anim.validate().unwrap_err();
    assert!(err.to_string().contains("too-long"));
}

#[test]
fn validate_rejects_overlapping_stages_in_a_set() {
    let anim = Animation {
        total_duration: 1.0,
        stages: vec![stage(0.0, 0.6), stage(0.5, 1.0)],
        stage_sets: vec![AnimationStageSet {
            name: "all".into(),
            length: 2,
            idx: 0,
        }],
    };
    assert!(anim.validate().is_err());
}

#[test]
fn overflowing_range_is_an_error() {
    let anim = Animation {
        total_duration: 1.0,
        stages: vec![stage(0.0, 1.0)],
        stage_sets: vec![],
    };
    let set = AnimationStageSet {
        name: "huge".into(),
        length: usize::MAX,
        idx: 1,
    };
    assert!(anim.stages_in(&set).is_err());
}

#[test]
fn round_trips_through_json() {
    let anim = Animation::<Value>::from_json_str(ANIM_JSON).unwrap();
    let json = serde_json::to_string(&anim).unwrap();
    assert!(json.contains("\"totalDuration\""));
    assert!(json.contains("\"stageSets\""));
    let back = Animation::<Value>::from_json_str(&json).unwrap();
    assert_eq!(back, anim);
}
