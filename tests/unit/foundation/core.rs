use super::*;

#[test]
fn from_offset_splits_minutes_and_seconds() {
    let s = TimeSample::from_offset(9, 754);
    assert_eq!(s, TimeSample::new(9, 12, 34).unwrap());
    assert_eq!(s.secs_into_hour(), 754);
}

#[test]
fn from_offset_keeps_hour_fixed() {
    for t in [0, 59, 60, 1800, 3599] {
        assert_eq!(TimeSample::from_offset(21, t).hour, 21);
    }
}

#[test]
fn new_rejects_out_of_range_fields() {
    assert!(TimeSample::new(0, 60, 0).is_err());
    assert!(TimeSample::new(0, 0, 60).is_err());
    assert!(TimeSample::new(1000, 59, 59).is_ok());
}

#[test]
fn carried_wraps_seconds_and_minutes() {
    assert_eq!(TimeSample::carried(3, 14, 60), TimeSample::new(3, 15, 0).unwrap());
    assert_eq!(TimeSample::carried(9, 59, 60), TimeSample::new(10, 0, 0).unwrap());
    assert_eq!(TimeSample::carried(2, 60, 0), TimeSample::new(3, 0, 0).unwrap());
}

#[test]
fn display_is_zero_padded() {
    assert_eq!(TimeSample::from_offset(9, 65).to_string(), "09:01:05");
}
