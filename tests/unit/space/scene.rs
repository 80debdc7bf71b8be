use super::*;

const SCENE_JSON: &str = r#"{
    "world": {"tl": {"x": 0, "y": 0}, "w": 1000, "h": 500},
    "viewport": {"tl": {"x": 100, "y": 50}, "w": 800, "h": 400, "s": 1, "sharpness": 2}
}"#;

#[test]
fn parses_and_validates() {
    let scene = Scene::from_json_str(SCENE_JSON).unwrap();
    scene.validate().unwrap();
    assert_eq!(scene.world.w, 1000.0);
    assert_eq!(scene.scaling(), 2.0);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Scene::from_json_str("{\"world\": 1}").unwrap_err();
    assert!(matches!(err, SceneError::Serde(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = Scene::from_path("/definitely/not/here/scene.json").unwrap_err();
    assert!(err.to_string().contains("open scene JSON"));
}

#[test]
fn invalid_viewport_fails_validation() {
    let mut scene = Scene::from_json_str(SCENE_JSON).unwrap();
    scene.viewport.s = 0.0;
    assert!(scene.validate().is_err());
}

#[test]
fn methods_match_free_functions() {
    let scene = Scene::from_json_str(SCENE_JSON).unwrap();
    let prop = WorldPropPoint::new(0.5, 0.5);
    let world_p = scene.to_world_absolute(prop);
    assert_eq!(world_p, WorldPoint::new(500.0, 250.0));

    // offset = (0 - 100, 0 - 50), k = 2
    let vp = scene.world_to_viewport(world_p);
    assert_eq!(vp, ViewportPoint::new(800.0, 400.0));
    assert_eq!(scene.prop_to_viewport(prop), vp);
    assert_eq!(scene.viewport_to_world(vp), world_p);

    let r = scene.prop_rect_to_world(WorldPropRect::new(prop, 0.25, 0.25));
    assert_eq!(r, WorldRect::new(world_p, 250.0, 125.0));
    let vr = scene.world_rect_to_viewport(r);
    assert_eq!(vr.w, 500.0);
    assert_eq!(scene.viewport_rect_to_world(vr), r);
}
