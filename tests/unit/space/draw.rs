use super::*;
use crate::space::model::WorldPoint;

#[derive(Default)]
struct CallLog {
    calls: Vec<String>,
}

impl DrawSurface for CallLog {
    fn begin_path(&mut self) {
        self.calls.push("begin".to_owned());
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        self.calls.push(format!("rr {x} {y} {w} {h} {radius}"));
    }

    fn stroke(&mut self) {
        self.calls.push("stroke".to_owned());
    }
}

#[test]
fn round_rect_uses_world_absolute_coordinates() {
    let world = World::new(WorldPoint::new(10.0, 20.0), 200.0, 100.0);
    let mut log = CallLog::default();
    draw_round_rect_tl(WorldPropPoint::new(0.5, 0.25), 0.25, 0.5, &world, &mut log);
    assert_eq!(log.calls, vec!["begin", "rr 110 45 50 50 6", "stroke"]);
}

#[test]
fn recorder_captures_one_path_per_stroke() {
    let world = World::new(WorldPoint::ORIGIN, 100.0, 100.0);
    let mut rec = PathRecorder::new();
    draw_round_rect_tl(WorldPropPoint::new(0.1, 0.2), 0.5, 0.3, &world, &mut rec);
    draw_round_rect_tl(WorldPropPoint::new(0.0, 0.0), 1.0, 1.0, &world, &mut rec);
    assert_eq!(rec.strokes().len(), 2);

    let bb = rec.strokes()[0].bounding_box();
    assert!((bb.x0 - 10.0).abs() < 1e-9);
    assert!((bb.y0 - 20.0).abs() < 1e-9);
    assert!((bb.x1 - 60.0).abs() < 1e-9);
    assert!((bb.y1 - 50.0).abs() < 1e-9);

    let taken = rec.take_strokes();
    assert_eq!(taken.len(), 2);
    assert!(rec.strokes().is_empty());
}

#[test]
fn begin_path_discards_pending_geometry() {
    let mut rec = PathRecorder::new();
    rec.round_rect(0.0, 0.0, 5.0, 5.0, 1.0);
    rec.begin_path();
    rec.stroke();
    assert!(rec.strokes()[0].elements().is_empty());
}
