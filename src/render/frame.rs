use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{ClockError, ClockResult};
use crate::foundation::math::flatten_to_opaque_rgba8;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by the renderer are premultiplied; frames decoded from PNG files are
/// converted to premultiplied on load so both sources look the same to sinks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Wrap raw RGBA8 bytes, checking the buffer length.
    pub fn new(width: u32, height: u32, data: Vec<u8>, premultiplied: bool) -> ClockResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if data.len() != expected {
            return Err(ClockError::validation(format!(
                "frame data is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
            premultiplied,
        })
    }

    /// Return `true` when every pixel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 255)
    }

    /// Straight-alpha RGBA8 bytes composited over `bg_rgba`.
    pub fn to_opaque_rgba8(&self, bg_rgba: [u8; 4]) -> ClockResult<Vec<u8>> {
        let mut out = vec![0u8; self.data.len()];
        flatten_to_opaque_rgba8(&mut out, &self.data, self.premultiplied, bg_rgba)?;
        Ok(out)
    }

    /// Write the frame as an opaque PNG, flattening any alpha over `bg_rgba`.
    pub fn write_png(&self, path: &Path, bg_rgba: [u8; 4]) -> ClockResult<()> {
        let opaque = self.to_opaque_rgba8(bg_rgba)?;
        image::save_buffer_with_format(
            path,
            &opaque,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    /// Decode a PNG (or any format `image` recognizes) into a premultiplied frame.
    pub fn read_image(path: &Path) -> ClockResult<Self> {
        let dyn_img =
            image::open(path).with_context(|| format!("read image '{}'", path.display()))?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut data = rgba.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self::new(width, height, data, true)
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
