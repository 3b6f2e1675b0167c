use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{ClockError, ClockResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// One shaped numeral ready to be drawn as a glyph run.
pub(crate) struct ShapedLabel {
    pub(crate) layout: parley::Layout<TextBrushRgba8>,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

/// A numeral font loaded from disk plus the Parley contexts used to shape with it.
pub(crate) struct NumeralFont {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    pub(crate) font: vello_cpu::peniko::FontData,
}

impl NumeralFont {
    pub(crate) fn load(path: &Path) -> ClockResult<Self> {
        let font_bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            ClockError::validation(format!(
                "no font families registered from '{}'",
                path.display()
            ))
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ClockError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    /// Shape `text` on a single unbroken line.
    pub(crate) fn shape(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> ClockResult<ShapedLabel> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ClockError::validation(
                "numeral size must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        let width = layout.width();
        let height = layout.height();
        Ok(ShapedLabel {
            layout,
            width,
            height,
        })
    }
}
