//! clockface renders an analog clock face across one hour and assembles the frames into a
//! looping animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `(start_hour, total_frames) -> SequencePlan` (evenly spaced offsets over one hour)
//! 2. **Render**: `TimeSample -> FrameRGBA` on the CPU with `vello_cpu`, written as PNG
//! 3. **Encode**: frame PNGs, in order, into a [`GifSink`] (50 ms per frame, infinite loop)
//! 4. **Clean up**: remove the frame directory, reporting failure as a [`CleanupWarning`]
//!
//! [`run`] drives all four steps.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod encode;
pub mod face;
pub mod render;
pub mod session;

pub use crate::encode::gif::{DEFAULT_FRAME_DELAY_MS, GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::face::geometry::{FaceGeometry, FaceLayout, PointerAngles, PointerStyle};
pub use crate::foundation::core::{FrameIndex, SECONDS_PER_HOUR, TimeSample};
pub use crate::foundation::error::{ClockError, ClockResult};
pub use crate::render::cpu::{ClockRenderer, DEFAULT_SIZE_PX, RendererOpts};
pub use crate::render::frame::FrameRGBA;
pub use crate::session::cleanup::{CleanupWarning, CleanupWarningKind, remove_frame_dir};
pub use crate::session::driver::{
    DriverPhase, RunOpts, RunReport, encode_frame_files, run, run_at,
};
pub use crate::session::plan::{
    DEFAULT_START_HOUR, DEFAULT_TOTAL_FRAMES, FRAME_DIR_NAME, SequencePlan, frame_file_name,
    output_file_name,
};
pub use crate::session::progress::{ProgressReporter, SilentProgress, StderrProgress};
