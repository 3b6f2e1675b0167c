use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::encode::gif::{DEFAULT_FRAME_DELAY_MS, GifSink, GifSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ClockError, ClockResult};
use crate::render::cpu::{ClockRenderer, RendererOpts};
use crate::render::frame::FrameRGBA;
use crate::session::cleanup::{CleanupWarning, remove_frame_dir};
use crate::session::plan::{
    DEFAULT_START_HOUR, DEFAULT_TOTAL_FRAMES, FRAME_DIR_NAME, SequencePlan, frame_file_name,
    output_file_name,
};
use crate::session::progress::ProgressReporter;

/// Stages of one run. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DriverPhase {
    /// Validate parameters and prepare the frame directory.
    Init,
    /// Render every planned frame to a PNG.
    Rendering,
    /// Encode the PNGs into the animation.
    Encoding,
    /// Remove the frame directory.
    Cleanup,
    /// Run finished.
    Done,
}

/// Options for [`run`].
#[derive(Clone, Debug)]
pub struct RunOpts {
    /// Hour digit held on every frame; must be `>= 0`.
    pub start_hour: i64,
    /// Requested number of frames; must be `> 0`.
    pub total_frames: i64,
    /// Directory receiving the frame scratch directory and the GIF.
    pub base_dir: PathBuf,
    /// Renderer settings.
    pub renderer: RendererOpts,
    /// GIF frame delay in milliseconds.
    pub frame_delay_ms: u32,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            total_frames: DEFAULT_TOTAL_FRAMES,
            base_dir: PathBuf::from("."),
            renderer: RendererOpts::default(),
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

impl RunOpts {
    /// Options for `total_frames` frames at `start_hour`, other settings default.
    pub fn new(start_hour: i64, total_frames: i64) -> Self {
        Self {
            start_hour,
            total_frames,
            ..Self::default()
        }
    }

    /// Return options writing under `base_dir`.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Return options using `renderer`.
    pub fn with_renderer(mut self, renderer: RendererOpts) -> Self {
        self.renderer = renderer;
        self
    }

    /// Scratch directory for per-frame PNGs.
    pub fn frame_dir(&self) -> PathBuf {
        self.base_dir.join(FRAME_DIR_NAME)
    }
}

/// Outcome of a successful run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Path of the written GIF.
    pub output: PathBuf,
    /// Frames rendered and encoded.
    pub frames_rendered: u64,
    /// Frames the caller asked for.
    pub requested_frames: u32,
    /// Seconds between samples.
    pub step_secs: u32,
    /// Set when the frame directory could not be removed.
    pub cleanup_warning: Option<CleanupWarning>,
}

/// Render one hour of clock faces and encode them into a looping GIF, stamped with the current
/// local time.
pub fn run(opts: &RunOpts, progress: &mut dyn ProgressReporter) -> ClockResult<RunReport> {
    run_at(opts, progress, chrono::Local::now().naive_local())
}

/// [`run`] with an explicit generation timestamp for the output name.
#[tracing::instrument(
    skip(opts, progress),
    fields(start_hour = opts.start_hour, total_frames = opts.total_frames)
)]
pub fn run_at(
    opts: &RunOpts,
    progress: &mut dyn ProgressReporter,
    generated_at: chrono::NaiveDateTime,
) -> ClockResult<RunReport> {
    run_with_cleanup(opts, progress, generated_at, remove_frame_dir)
}

pub(crate) fn run_with_cleanup(
    opts: &RunOpts,
    progress: &mut dyn ProgressReporter,
    generated_at: chrono::NaiveDateTime,
    cleanup: fn(&Path) -> Option<CleanupWarning>,
) -> ClockResult<RunReport> {
    enter(DriverPhase::Init);
    let plan = SequencePlan::new(opts.start_hour, opts.total_frames)?;
    if opts.frame_delay_ms == 0 {
        return Err(ClockError::validation("frame delay must be non-zero"));
    }
    let renderer = ClockRenderer::new(opts.renderer.clone())?;

    let output = opts.base_dir.join(output_file_name(
        plan.start_hour(),
        plan.requested_frames(),
        &generated_at,
    ));
    if output.exists() {
        return Err(ClockError::encode(format!(
            "output file '{}' already exists",
            output.display()
        )));
    }

    let frame_dir = opts.frame_dir();
    std::fs::create_dir_all(&frame_dir)
        .with_context(|| format!("create frame directory '{}'", frame_dir.display()))?;
    tracing::debug!(
        step_secs = plan.step_secs(),
        frames = plan.frame_count(),
        dir = %frame_dir.display(),
        "planned sequence"
    );

    enter(DriverPhase::Rendering);
    let frame_paths = render_frames(&plan, &renderer, &frame_dir, progress)?;

    enter(DriverPhase::Encoding);
    let mut sink = GifSink::new(GifSinkOpts {
        out_path: output.clone(),
        overwrite: false,
        bg_rgba: renderer.opts().opaque_background(),
        frame_delay_ms: opts.frame_delay_ms,
    });
    let frames_rendered = encode_frame_files(&frame_paths, &mut sink)?;
    tracing::info!(output = %output.display(), frames = frames_rendered, "wrote animation");

    enter(DriverPhase::Cleanup);
    let cleanup_warning = cleanup(&frame_dir);
    if let Some(w) = &cleanup_warning {
        tracing::warn!(kind = %w.kind, "failed to clean up frames: {w}");
    }

    enter(DriverPhase::Done);
    Ok(RunReport {
        output,
        frames_rendered,
        requested_frames: plan.requested_frames(),
        step_secs: plan.step_secs(),
        cleanup_warning,
    })
}

fn enter(phase: DriverPhase) {
    tracing::info!(?phase, "driver phase");
}

fn render_frames(
    plan: &SequencePlan,
    renderer: &ClockRenderer,
    frame_dir: &Path,
    progress: &mut dyn ProgressReporter,
) -> ClockResult<Vec<PathBuf>> {
    let total = u64::from(plan.requested_frames());
    let mut paths = Vec::with_capacity(plan.frame_count() as usize);
    for (idx, offset, sample) in plan.samples() {
        let path = frame_dir.join(frame_file_name(offset));
        renderer.render_to_file(sample, &path)?;
        tracing::debug!(frame = idx.0, time = %sample, path = %path.display(), "rendered frame");
        paths.push(path);
        progress.frame_done(idx.0 + 1, total);
    }
    progress.finish();
    Ok(paths)
}

/// Read frame images in order and feed them to `sink`; returns the number of frames encoded.
pub fn encode_frame_files(paths: &[PathBuf], sink: &mut dyn FrameSink) -> ClockResult<u64> {
    let Some(first) = paths.first() else {
        return Err(ClockError::encode("no frames to encode"));
    };
    let first = FrameRGBA::read_image(first)?;
    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        frame_count: paths.len() as u64,
    })?;
    sink.push_frame(FrameIndex(0), &first)?;
    drop(first);

    for (i, path) in paths.iter().enumerate().skip(1) {
        let frame = FrameRGBA::read_image(path)?;
        sink.push_frame(FrameIndex(i as u64), &frame)?;
    }
    sink.end()?;
    Ok(paths.len() as u64)
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;
