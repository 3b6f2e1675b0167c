use super::*;
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn angles_at_known_times() {
    let a = PointerAngles::from_sample(TimeSample::new(3, 0, 0).unwrap());
    assert!(close(a.hour_deg, 90.0));
    assert!(close(a.minute_deg, 0.0));
    assert!(close(a.second_deg, 0.0));

    let a = PointerAngles::from_sample(TimeSample::new(9, 30, 30).unwrap());
    assert!(close(a.hour_deg, 270.0 + 15.0 + 0.25));
    assert!(close(a.minute_deg, 183.0));
    assert!(close(a.second_deg, 180.0));
}

#[test]
fn hour_is_taken_modulo_twelve() {
    let a = PointerAngles::from_sample(TimeSample::new(21, 10, 0).unwrap());
    let b = PointerAngles::from_sample(TimeSample::new(9, 10, 0).unwrap());
    assert_eq!(a, b);
}

#[test]
fn polar_uses_clockwise_from_twelve() {
    let up = polar(1.0, 0.0);
    assert!(close(up.x, 0.0) && close(up.y, 1.0));
    let right = polar(1.0, 90.0);
    assert!(close(right.x, 1.0) && close(right.y, 0.0));
    let down = polar(0.5, 180.0);
    assert!(close(down.x, 0.0) && close(down.y, -0.5));
}

#[test]
fn tick_counts_and_spacing() {
    let hours: Vec<_> = hour_ticks().collect();
    assert_eq!(hours.len(), 12);
    assert_eq!(hours[0].0, 0);
    assert!(close(hours[0].1.to.y, BEZEL_RADIUS));
    assert!(close(hours[0].1.from.y, HOUR_TICK_INNER));

    let minutes: Vec<_> = minute_ticks().collect();
    assert_eq!(minutes.len(), 48);
    // No minute tick sits on an hour position.
    for m in &minutes {
        for (_, h) in &hours {
            assert!((m.to - h.to).hypot() > 1e-6);
        }
    }
}

#[test]
fn numerals_run_one_through_twelve() {
    let labels: Vec<u32> = (0..12).map(numeral_label).collect();
    assert_eq!(labels, vec![12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    let top = numeral_anchor(0);
    assert!(close(top.x, 0.0) && close(top.y, NUMERAL_RADIUS));
}

#[test]
fn pointer_lengths_match_style() {
    let g = FaceGeometry::default();
    assert!(g.hour.length < g.minute.length && g.minute.length < g.second.length);
    assert!(g.hour.width_pt > g.minute.width_pt && g.minute.width_pt > g.second.width_pt);
    let seg = pointer_segment(g.minute.length, 90.0);
    assert!(close(seg.to.x, 0.75));
    assert_eq!(seg.from, Point::ORIGIN);
}

#[test]
fn layout_maps_face_window_into_canvas() {
    let layout = FaceLayout::new(900);
    let c = layout.point_px(Point::ORIGIN);
    assert!(close(c.x, 450.0) && close(c.y, 450.0));

    let top = layout.point_px(Point::new(0.0, DATA_EXTENT));
    assert!(close(top.y, 450.0 - 900.0 * FACE_FRACTION / 2.0));
    assert!(top.y >= 0.0);
    assert!(close(layout.px_per_pt(), 300.0 / 72.0));
}

proptest! {
    #[test]
    fn second_pointer_wraps_at_sixty(hour in 0u32..48, minute in 0u32..59) {
        let wrapped = PointerAngles::from_sample(TimeSample::carried(hour, minute, 60));
        let zero = PointerAngles::from_sample(TimeSample::new(hour, minute, 0).unwrap());
        prop_assert!(close(wrapped.second_deg, zero.second_deg));
        prop_assert!(close(wrapped.minute_deg, zero.minute_deg + 6.0));
    }

    #[test]
    fn minute_pointer_wraps_at_sixty(hour in 0u32..48) {
        let wrapped = PointerAngles::from_sample(TimeSample::carried(hour, 60, 0));
        let start = PointerAngles::from_sample(TimeSample::new(hour, 0, 0).unwrap());
        prop_assert!(close(wrapped.minute_deg, start.minute_deg));
        prop_assert!(close((wrapped.hour_deg - start.hour_deg).rem_euclid(360.0), 30.0));
    }

    #[test]
    fn angles_stay_in_one_turn(hour in 0u32..1000, minute in 0u32..60, second in 0u32..60) {
        let a = PointerAngles::from_sample(TimeSample::new(hour, minute, second).unwrap());
        for deg in [a.hour_deg, a.minute_deg, a.second_deg] {
            prop_assert!((0.0..360.0).contains(&deg));
        }
    }
}
