use super::*;

fn world() -> World {
    World::new(WorldPoint::new(100.0, 50.0), 1920.0, 1080.0)
}

fn viewport() -> Viewport {
    Viewport::new(WorldPoint::new(40.0, -10.0), 800.0, 600.0, 2.0, 3.0)
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9, "{a} != {b}");
}

#[test]
fn proportional_corners_map_to_world_rect() {
    let w = world();
    assert_eq!(to_world_absolute(WorldPropPoint::new(0.0, 0.0), &w), w.tl);
    assert_eq!(
        to_world_absolute(WorldPropPoint::new(1.0, 1.0), &w),
        WorldPoint::new(w.tl.x + w.w, w.tl.y + w.h)
    );
}

#[test]
fn proportional_outside_unit_range_extrapolates() {
    let w = world();
    let p = to_world_absolute(WorldPropPoint::new(-0.5, 2.0), &w);
    assert_eq!(p, WorldPoint::new(100.0 - 960.0, 50.0 + 2160.0));
}

#[test]
fn scaling_is_sharpness_over_s() {
    let v = Viewport::new(WorldPoint::ORIGIN, 10.0, 10.0, 2.0, 4.0);
    assert_eq!(viewport_scaling(&v), 2.0);
}

#[test]
fn zero_scale_propagates_ieee_values() {
    let v = Viewport::new(WorldPoint::ORIGIN, 10.0, 10.0, 0.0, 1.0);
    assert!(viewport_scaling(&v).is_infinite());
    let p = world_to_viewport(WorldPoint::new(0.0, 0.0), &world(), &v);
    assert!(p.x.is_infinite() || p.x.is_nan());
}

#[test]
fn world_to_viewport_offsets_then_scales() {
    let (w, v) = (world(), viewport());
    // offset = (100 - 40, 50 - -10) = (60, 60), k = 1.5
    let p = world_to_viewport(WorldPoint::new(10.0, 20.0), &w, &v);
    assert_eq!(p, ViewportPoint::new(105.0, 120.0));
}

#[test]
fn viewport_to_world_inverts() {
    let (w, v) = (world(), viewport());
    let p = viewport_to_world(ViewportPoint::new(105.0, 120.0), &w, &v);
    assert_close(p.x, 10.0);
    assert_close(p.y, 20.0);
}

#[test]
fn round_trip_over_a_grid() {
    let (w, v) = (world(), viewport());
    for ix in -3..=3 {
        for iy in -3..=3 {
            let p = WorldPoint::new(f64::from(ix) * 137.25, f64::from(iy) * -71.5);
            let back = viewport_to_world(world_to_viewport(p, &w, &v), &w, &v);
            assert_close(back.x, p.x);
            assert_close(back.y, p.y);
        }
    }
}

#[test]
fn prop_rect_scales_extent_by_world() {
    let w = world();
    let r = prop_rect_to_world(
        WorldPropRect::new(WorldPropPoint::new(0.5, 0.5), 0.25, 0.5),
        &w,
    );
    assert_eq!(r.tl, WorldPoint::new(100.0 + 960.0, 50.0 + 540.0));
    assert_eq!(r.w, 480.0);
    assert_eq!(r.h, 540.0);
}

#[test]
fn rect_viewport_round_trip() {
    let (w, v) = (world(), viewport());
    let r = WorldRect::new(WorldPoint::new(12.0, -8.0), 64.0, 32.0);
    let vr = world_rect_to_viewport(r, &w, &v);
    assert_eq!(vr.w, 96.0);
    assert_eq!(vr.h, 48.0);

    let back = viewport_rect_to_world(vr, &w, &v);
    assert_close(back.tl.x, r.tl.x);
    assert_close(back.tl.y, r.tl.y);
    assert_close(back.w, r.w);
    assert_close(back.h, r.h);
}
