use super::*;
use crate::face::geometry::PointerAngles;
use proptest::prelude::*;

#[test]
fn ten_frames_step_six_minutes() {
    let plan = SequencePlan::new(9, 10).unwrap();
    assert_eq!(plan.step_secs(), 360);
    assert_eq!(plan.frame_count(), 10);

    let samples: Vec<_> = plan.samples().collect();
    let offsets: Vec<u32> = samples.iter().map(|(_, t, _)| *t).collect();
    assert_eq!(offsets, (0..10).map(|k| k * 360).collect::<Vec<_>>());
    let minutes: Vec<u32> = samples.iter().map(|(_, _, s)| s.minute).collect();
    assert_eq!(minutes, vec![0, 6, 12, 18, 24, 30, 36, 42, 48, 54]);
    assert!(samples.iter().all(|(_, _, s)| s.second == 0 && s.hour == 9));
    assert_eq!(samples.last().unwrap().0, FrameIndex(9));
}

#[test]
fn seven_frames_use_uneven_step() {
    let plan = SequencePlan::new(9, 7).unwrap();
    assert_eq!(plan.step_secs(), 514);
    assert_eq!(plan.frame_count(), 7);
    assert_eq!(plan.offsets().last(), Some(6 * 514));
}

#[test]
fn default_run_has_fifty_five_frames() {
    let plan = SequencePlan::new(DEFAULT_START_HOUR, DEFAULT_TOTAL_FRAMES).unwrap();
    assert_eq!(plan.step_secs(), 65);
    assert_eq!(plan.frame_count(), 55);
    let last = plan.samples().last().unwrap().2;
    assert_eq!((last.minute, last.second), (58, 30));
}

#[test]
fn large_non_divisor_is_capped_at_request() {
    let plan = SequencePlan::new(0, 1000).unwrap();
    assert_eq!(plan.step_secs(), 3);
    assert_eq!(plan.frame_count(), 1000);
}

#[test]
fn invalid_parameters_are_rejected() {
    for (h, n) in [(-1, 55), (9, 0), (9, -3), (9, 3601), (i64::from(u32::MAX) + 1, 10)] {
        let err = SequencePlan::new(h, n).unwrap_err();
        assert!(err.is_validation(), "({h}, {n}) gave {err}");
    }
    assert!(SequencePlan::new(0, 3600).is_ok());
    assert!(SequencePlan::new(100, 1).is_ok());
}

#[test]
fn one_frame_is_top_of_the_hour() {
    let plan = SequencePlan::new(3, 1).unwrap();
    let samples: Vec<_> = plan.samples().collect();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].2, TimeSample::new(3, 0, 0).unwrap());
}

#[test]
fn file_names_follow_the_pattern() {
    assert_eq!(frame_file_name(0), "frame_0000.png");
    assert_eq!(frame_file_name(65), "frame_0065.png");
    assert_eq!(frame_file_name(3599), "frame_3599.png");

    let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(7, 8, 9)
        .unwrap();
    assert_eq!(output_file_name(9, 55, &at), "clock_9_55_20240305_070809.gif");

    let later = at + chrono::TimeDelta::seconds(1);
    assert_ne!(output_file_name(9, 55, &at), output_file_name(9, 55, &later));
}

proptest! {
    #[test]
    fn frame_count_matches_floor_rule(total in 1i64..=3600) {
        let plan = SequencePlan::new(9, total).unwrap();
        let step = 3600 / total as u32;
        prop_assert_eq!(plan.step_secs(), step);
        prop_assert!(i64::from(plan.frame_count()) <= total);
        prop_assert_eq!(plan.frame_count(), (3600 / step).min(total as u32));
        if total <= 60 {
            prop_assert_eq!(plan.frame_count(), 3600 / step);
        }
        prop_assert_eq!(plan.offsets().count() as u32, plan.frame_count());
        prop_assert!(plan.offsets().all(|t| t < 3600));
    }

    #[test]
    fn hour_pointer_advances_through_the_plan(hour in 0i64..48, total in 2i64..=120) {
        let plan = SequencePlan::new(hour, total).unwrap();
        let angles: Vec<f64> = plan
            .samples()
            .map(|(_, _, s)| PointerAngles::from_sample(s).hour_deg)
            .collect();
        for w in angles.windows(2) {
            let delta = (w[1] - w[0]).rem_euclid(360.0);
            prop_assert!(delta > 0.0 && delta < 30.0);
        }
    }
}
