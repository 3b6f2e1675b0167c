use crate::foundation::error::{ClockError, ClockResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Seconds in the modeled hour; every sequence samples offsets inside `[0, SECONDS_PER_HOUR)`.
pub const SECONDS_PER_HOUR: u32 = 3600;

/// 0-based position of a frame inside the rendered sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Wall-clock reading shown on one frame.
///
/// `hour` is unconstrained and taken modulo 12 when placing the hour pointer. `minute` and
/// `second` are always in `[0, 60)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeSample {
    /// Hour digit, any non-negative value.
    pub hour: u32,
    /// Minute in `[0, 60)`.
    pub minute: u32,
    /// Second in `[0, 60)`.
    pub second: u32,
}

impl TimeSample {
    /// Create a validated sample.
    pub fn new(hour: u32, minute: u32, second: u32) -> ClockResult<Self> {
        if minute >= 60 {
            return Err(ClockError::validation(format!(
                "minute must be in [0, 60), got {minute}"
            )));
        }
        if second >= 60 {
            return Err(ClockError::validation(format!(
                "second must be in [0, 60), got {second}"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Sample shown `offset_secs` into the hour that starts at `start_hour`.
    ///
    /// The hour digit is held at `start_hour`; only minute and second advance.
    pub fn from_offset(start_hour: u32, offset_secs: u32) -> Self {
        Self {
            hour: start_hour,
            minute: (offset_secs / 60) % 60,
            second: offset_secs % 60,
        }
    }

    /// Build a sample from a possibly overflowing reading, carrying seconds into minutes and
    /// minutes into hours (`(9, 59, 60)` becomes `(10, 0, 0)`).
    pub fn carried(hour: u32, minute: u32, second: u32) -> Self {
        let minute = minute.saturating_add(second / 60);
        Self {
            hour: hour.saturating_add(minute / 60),
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Seconds elapsed since the top of `hour`.
    pub fn secs_into_hour(self) -> u32 {
        self.minute * 60 + self.second
    }
}

impl std::fmt::Display for TimeSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
