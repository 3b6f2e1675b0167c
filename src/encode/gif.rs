use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ClockError, ClockResult};
use crate::render::frame::FrameRGBA;

/// Default per-frame delay: 0.05 s, i.e. 20 frames per second.
pub const DEFAULT_FRAME_DELAY_MS: u32 = 50;

// NeuQuant sampling factor: 1 is best quality, 30 fastest.
const QUANTIZER_SPEED: i32 = 10;

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Background color used to flatten alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
    /// Display time of every frame in milliseconds.
    pub frame_delay_ms: u32,
}

impl GifSinkOpts {
    /// Create options for a looping GIF at `out_path` that refuses to overwrite.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: false,
            bg_rgba: [255, 255, 255, 255],
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

/// Sink that encodes frames into an infinitely looping animated GIF.
pub struct GifSink {
    opts: GifSinkOpts,

    encoder: Option<GifEncoder<File>>,
    file: Option<File>,

    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    frames_written: u64,
}

impl GifSink {
    /// Create a new sink; the output file is opened in `begin`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            file: None,
            cfg: None,
            last_idx: None,
            frames_written: 0,
        }
    }

    /// Number of frames encoded so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Output path.
    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> ClockResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(ClockError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(ClockError::validation(
                "gif sink width/height must fit in 16 bits",
            ));
        }
        if self.opts.frame_delay_ms == 0 {
            return Err(ClockError::validation("gif frame delay must be non-zero"));
        }
        if self.encoder.is_some() {
            return Err(ClockError::encode("gif sink already started"));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(ClockError::encode(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let mut open = OpenOptions::new();
        open.write(true);
        if self.opts.overwrite {
            open.create(true).truncate(true);
        } else {
            open.create_new(true);
        }
        let file = open
            .open(&self.opts.out_path)
            .with_context(|| format!("create gif '{}'", self.opts.out_path.display()))?;
        let handle = file
            .try_clone()
            .with_context(|| format!("clone handle for '{}'", self.opts.out_path.display()))?;

        let mut encoder = GifEncoder::new_with_speed(file, QUANTIZER_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| ClockError::encode(format!("failed to set gif loop mode: {e}")))?;

        self.encoder = Some(encoder);
        self.file = Some(handle);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> ClockResult<()> {
        let Some(cfg) = self.cfg else {
            return Err(ClockError::encode("gif sink used before begin"));
        };
        let Some(encoder) = self.encoder.as_mut() else {
            return Err(ClockError::encode("gif sink is already finalized"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(ClockError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(ClockError::validation(format!(
                "frames must arrive in increasing order: {} after {}",
                idx.0, last.0
            )));
        }

        let opaque = frame.to_opaque_rgba8(self.opts.bg_rgba)?;
        let buffer = image::RgbaImage::from_raw(frame.width, frame.height, opaque)
            .ok_or_else(|| ClockError::encode("frame buffer does not match its dimensions"))?;
        let delay = image::Delay::from_numer_denom_ms(self.opts.frame_delay_ms, 1);
        encoder
            .encode_frame(image::Frame::from_parts(buffer, 0, 0, delay))
            .map_err(|e| ClockError::encode(format!("failed to encode gif frame {}: {e}", idx.0)))?;

        self.last_idx = Some(idx);
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> ClockResult<()> {
        let Some(encoder) = self.encoder.take() else {
            return Err(ClockError::encode("gif sink is not started"));
        };
        if self.frames_written == 0 {
            return Err(ClockError::encode("gif sink received no frames"));
        }
        // Dropping the encoder writes the GIF trailer.
        drop(encoder);

        if let Some(file) = self.file.take() {
            file.sync_all()
                .with_context(|| format!("sync gif '{}'", self.opts.out_path.display()))?;
        }
        Ok(())
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> ClockResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
