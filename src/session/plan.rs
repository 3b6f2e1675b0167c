use crate::foundation::core::{FrameIndex, SECONDS_PER_HOUR, TimeSample};
use crate::foundation::error::{ClockError, ClockResult};

/// Hour digit shown when none is given.
pub const DEFAULT_START_HOUR: i64 = 9;
/// Frames requested when no count is given.
pub const DEFAULT_TOTAL_FRAMES: i64 = 55;
/// Name of the scratch directory holding per-frame PNGs.
pub const FRAME_DIR_NAME: &str = "clock_frames";

/// Evenly spaced samples across one hour at a fixed hour digit.
///
/// The spacing is `3600 / total_frames` seconds (integer division), so a request that does not
/// divide the hour evenly is covered with a slightly shorter span rather than with uneven steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequencePlan {
    start_hour: u32,
    requested: u32,
    step: u32,
    count: u32,
}

impl SequencePlan {
    /// Validate the two user parameters and lay out the offsets.
    pub fn new(start_hour: i64, total_frames: i64) -> ClockResult<Self> {
        if start_hour < 0 {
            return Err(ClockError::validation(format!(
                "start_hour must be >= 0, got {start_hour}"
            )));
        }
        if total_frames <= 0 {
            return Err(ClockError::validation(format!(
                "total_frames must be > 0, got {total_frames}"
            )));
        }
        if total_frames > i64::from(SECONDS_PER_HOUR) {
            return Err(ClockError::validation(format!(
                "total_frames must be <= {SECONDS_PER_HOUR} (one frame per second), \
                 got {total_frames}"
            )));
        }
        let start_hour = u32::try_from(start_hour).map_err(|_| {
            ClockError::validation(format!("start_hour {start_hour} is too large"))
        })?;
        // Bounded by SECONDS_PER_HOUR above.
        let requested = total_frames as u32;

        let step = SECONDS_PER_HOUR / requested;
        let count = (SECONDS_PER_HOUR / step).min(requested);
        Ok(Self {
            start_hour,
            requested,
            step,
            count,
        })
    }

    /// Hour digit held on every frame.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Frame count the user asked for.
    pub fn requested_frames(&self) -> u32 {
        self.requested
    }

    /// Seconds between consecutive samples.
    pub fn step_secs(&self) -> u32 {
        self.step
    }

    /// Frames the plan actually produces (never more than requested).
    pub fn frame_count(&self) -> u32 {
        self.count
    }

    /// Elapsed-second offsets in increasing order.
    pub fn offsets(&self) -> impl Iterator<Item = u32> + use<> {
        let step = self.step;
        (0..self.count).map(move |k| k * step)
    }

    /// Frame index, offset and time shown, for every frame of the plan.
    pub fn samples(&self) -> impl Iterator<Item = (FrameIndex, u32, TimeSample)> + use<> {
        let hour = self.start_hour;
        self.offsets()
            .enumerate()
            .map(move |(i, t)| (FrameIndex(i as u64), t, TimeSample::from_offset(hour, t)))
    }
}

/// File name of the frame rendered at elapsed-second `offset`.
pub fn frame_file_name(offset: u32) -> String {
    format!("frame_{offset:04}.png")
}

/// File name of the final animation; the timestamp keeps separate runs apart.
pub fn output_file_name(
    start_hour: u32,
    requested_frames: u32,
    generated_at: &chrono::NaiveDateTime,
) -> String {
    format!(
        "clock_{start_hour}_{requested_frames}_{}.gif",
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
#[path = "../../tests/unit/session/plan.rs"]
mod tests;
