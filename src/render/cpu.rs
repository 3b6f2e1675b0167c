use std::path::{Path, PathBuf};

use crate::face::geometry::{
    BEZEL_RADIUS, FaceGeometry, FaceLayout, HUB_RADIUS, PointerAngles, PointerStyle, Segment,
    hour_ticks, minute_ticks, numeral_anchor, numeral_label, pointer_segment,
};
use crate::face::glyphs::{BOLD_STROKE, CAP_HEIGHT_EM, label_path};
use crate::foundation::core::{Affine, BezPath, Point, TimeSample, Vec2};
use crate::foundation::error::{ClockError, ClockResult};
use crate::render::frame::FrameRGBA;
use crate::render::text::{NumeralFont, ShapedLabel, TextBrushRgba8};

/// Default canvas edge: a 3 inch figure at 300 DPI.
pub const DEFAULT_SIZE_PX: u32 = 900;

/// Options for [`ClockRenderer`].
#[derive(Clone, Debug)]
pub struct RendererOpts {
    /// Square canvas edge length in pixels.
    pub size_px: u32,
    /// Opaque background color (straight RGBA8, alpha is forced to 255).
    pub background_rgba: [u8; 4],
    /// Font used for the numerals. `None` draws the built-in stroked digits.
    pub numeral_font: Option<PathBuf>,
    /// Dial styling.
    pub geometry: FaceGeometry,
}

impl Default for RendererOpts {
    fn default() -> Self {
        Self {
            size_px: DEFAULT_SIZE_PX,
            background_rgba: [255, 255, 255, 255],
            numeral_font: None,
            geometry: FaceGeometry::default(),
        }
    }
}

impl RendererOpts {
    /// Return options rendering at `size_px` x `size_px`.
    pub fn with_size_px(mut self, size_px: u32) -> Self {
        self.size_px = size_px;
        self
    }

    /// Return options shaping numerals with the font at `path`.
    pub fn with_numeral_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.numeral_font = Some(path.into());
        self
    }

    /// Background with alpha forced opaque.
    pub fn opaque_background(&self) -> [u8; 4] {
        let [r, g, b, _] = self.background_rgba;
        [r, g, b, 255]
    }
}

enum Numerals {
    /// Pixel-space stroke outlines plus the stroke width to draw them with.
    Stroked { paths: Vec<BezPath>, width_px: f64 },
    Shaped {
        font: vello_cpu::peniko::FontData,
        labels: Vec<(Point, ShapedLabel)>,
    },
}

/// Draws clock faces on the CPU with `vello_cpu`.
///
/// The dial (ticks, numerals) is laid out once at construction; each [`ClockRenderer::render`]
/// call owns a fresh render context that is dropped before it returns.
pub struct ClockRenderer {
    opts: RendererOpts,
    layout: FaceLayout,
    size: u16,
    numerals: Numerals,
}

impl std::fmt::Debug for ClockRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockRenderer")
            .field("size_px", &self.opts.size_px)
            .field("numeral_font", &self.opts.numeral_font)
            .finish()
    }
}

impl ClockRenderer {
    /// Validate options and lay out the dial.
    pub fn new(opts: RendererOpts) -> ClockResult<Self> {
        if opts.size_px == 0 {
            return Err(ClockError::validation("canvas size must be non-zero"));
        }
        let size: u16 = opts
            .size_px
            .try_into()
            .map_err(|_| ClockError::validation("canvas size exceeds u16"))?;

        let layout = FaceLayout::new(opts.size_px);
        let numeral_px = opts.geometry.numeral_size_pt * layout.px_per_pt();
        let numerals = match opts.numeral_font.as_deref() {
            None => stroked_numerals(&layout, numeral_px)?,
            Some(path) => shaped_numerals(&layout, numeral_px, path, opts.geometry.ink_rgba)?,
        };

        Ok(Self {
            opts,
            layout,
            size,
            numerals,
        })
    }

    /// Face-to-pixel mapping used by this renderer.
    pub fn layout(&self) -> FaceLayout {
        self.layout
    }

    /// Options this renderer was built with.
    pub fn opts(&self) -> &RendererOpts {
        &self.opts
    }

    /// Render the face showing `sample`.
    #[tracing::instrument(level = "trace", skip(self), fields(time = %sample))]
    pub fn render(&self, sample: TimeSample) -> ClockResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.size, self.size);

        let [r, g, b, a] = self.opts.opaque_background();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        let edge = f64::from(self.size);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, edge, edge));

        self.draw_dial(&mut ctx);
        self.draw_pointers(&mut ctx, PointerAngles::from_sample(sample));
        self.draw_hub(&mut ctx);

        let mut pixmap = vello_cpu::Pixmap::new(self.size, self.size);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        FrameRGBA::new(
            self.opts.size_px,
            self.opts.size_px,
            pixmap.data_as_u8_slice().to_vec(),
            true,
        )
    }

    /// Render `sample` and write it to `path` as an opaque PNG.
    pub fn render_to_file(&self, sample: TimeSample, path: &Path) -> ClockResult<()> {
        let frame = self.render(sample)?;
        frame.write_png(path, self.opts.opaque_background())
    }

    fn draw_dial(&self, ctx: &mut vello_cpu::RenderContext) {
        let g = &self.opts.geometry;
        let pt = self.layout.px_per_pt();
        let center = self.layout.point_px(Point::ORIGIN);
        set_color(ctx, g.ink_rgba);

        let bezel = kurbo::Circle::new(center, BEZEL_RADIUS * self.layout.px_per_unit());
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(g.bezel_width_pt * pt));
        ctx.stroke_path(&shape_to_cpu(&bezel));

        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(g.hour_tick_width_pt * pt));
        for (_, tick) in hour_ticks() {
            ctx.stroke_path(&self.segment_to_cpu(tick));
        }

        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(g.minute_tick_width_pt * pt));
        for tick in minute_ticks() {
            ctx.stroke_path(&self.segment_to_cpu(tick));
        }

        match &self.numerals {
            Numerals::Stroked { paths, width_px } => {
                ctx.set_stroke(
                    vello_cpu::kurbo::Stroke::new(*width_px)
                        .with_caps(vello_cpu::kurbo::Cap::Round)
                        .with_join(vello_cpu::kurbo::Join::Round),
                );
                for p in paths {
                    ctx.stroke_path(&bezpath_to_cpu(p));
                }
            }
            Numerals::Shaped { font, labels } => {
                for (anchor, label) in labels {
                    let origin = Vec2::new(
                        anchor.x - f64::from(label.width) / 2.0,
                        anchor.y - f64::from(label.height) / 2.0,
                    );
                    ctx.set_transform(affine_to_cpu(Affine::translate(origin)));
                    draw_layout(ctx, font, &label.layout);
                }
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            }
        }
    }

    fn draw_pointers(&self, ctx: &mut vello_cpu::RenderContext, angles: PointerAngles) {
        let g = &self.opts.geometry;
        for (style, deg) in [
            (g.hour, angles.hour_deg),
            (g.minute, angles.minute_deg),
            (g.second, angles.second_deg),
        ] {
            self.draw_pointer(ctx, style, deg);
        }
    }

    fn draw_pointer(&self, ctx: &mut vello_cpu::RenderContext, style: PointerStyle, deg: f64) {
        set_color(ctx, style.rgba);
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(style.width_pt * self.layout.px_per_pt())
                .with_caps(vello_cpu::kurbo::Cap::Round),
        );
        ctx.stroke_path(&self.segment_to_cpu(pointer_segment(style.length, deg)));
    }

    /// The hub sits above the pointers and hides where they meet.
    fn draw_hub(&self, ctx: &mut vello_cpu::RenderContext) {
        set_color(ctx, self.opts.geometry.ink_rgba);
        let center = self.layout.point_px(Point::ORIGIN);
        let hub = kurbo::Circle::new(center, HUB_RADIUS * self.layout.px_per_unit());
        ctx.fill_path(&shape_to_cpu(&hub));
    }

    fn segment_to_cpu(&self, seg: Segment) -> vello_cpu::kurbo::BezPath {
        let mut p = BezPath::new();
        p.move_to(self.layout.point_px(seg.from));
        p.line_to(self.layout.point_px(seg.to));
        bezpath_to_cpu(&p)
    }
}

fn stroked_numerals(layout: &FaceLayout, numeral_px: f64) -> ClockResult<Numerals> {
    let glyph_h = numeral_px * CAP_HEIGHT_EM;
    let mut paths = Vec::with_capacity(12);
    for i in 0..12 {
        let anchor = layout.point_px(numeral_anchor(i));
        let place = Affine::translate(anchor.to_vec2()) * Affine::scale(glyph_h);
        paths.push(place * label_path(numeral_label(i))?);
    }
    Ok(Numerals::Stroked {
        paths,
        width_px: BOLD_STROKE * glyph_h,
    })
}

fn shaped_numerals(
    layout: &FaceLayout,
    numeral_px: f64,
    font_path: &Path,
    ink: [u8; 4],
) -> ClockResult<Numerals> {
    let mut font = NumeralFont::load(font_path)?;
    let brush = TextBrushRgba8 {
        r: ink[0],
        g: ink[1],
        b: ink[2],
        a: ink[3],
    };
    let mut labels = Vec::with_capacity(12);
    for i in 0..12 {
        let anchor = layout.point_px(numeral_anchor(i));
        let label = font.shape(&numeral_label(i).to_string(), numeral_px as f32, brush)?;
        labels.push((anchor, label));
    }
    Ok(Numerals::Shaped {
        font: font.font,
        labels,
    })
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
) {
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, rgba: [u8; 4]) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgba[0], rgba[1], rgba[2], rgba[3],
    ));
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn shape_to_cpu(shape: &impl kurbo::Shape) -> vello_cpu::kurbo::BezPath {
    bezpath_to_cpu(&shape.to_path(0.1))
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
