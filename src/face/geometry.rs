//! Fixed clock-face geometry in face space.
//!
//! Face space is the unit-circle frame the dial is designed in: origin at the hub, `+y` up, bezel
//! at radius 1. Angles handed to this module are *clock* angles: degrees measured clockwise from
//! 12 o'clock.

use crate::foundation::core::{Affine, Point, TimeSample, Vec2};

/// Half-width of the visible face-space window (`[-1.05, 1.05]` on both axes).
pub const DATA_EXTENT: f64 = 1.05;
/// Bezel radius.
pub const BEZEL_RADIUS: f64 = 1.0;
/// Radius of the filled center hub.
pub const HUB_RADIUS: f64 = 0.05;
/// Inner radius of the hour ticks (outer end sits on the bezel).
pub const HOUR_TICK_INNER: f64 = 0.9;
/// Inner radius of the minute ticks.
pub const MINUTE_TICK_INNER: f64 = 0.95;
/// Radius at which numerals are centered.
pub const NUMERAL_RADIUS: f64 = 0.75;

/// Share of the canvas edge covered by the face-space window.
pub const FACE_FRACTION: f64 = 0.77;
/// The face is laid out as a 3x3 inch figure; canvas DPI is `size_px / FIGURE_INCHES`.
pub const FIGURE_INCHES: f64 = 3.0;

/// Stroke and color of one pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerStyle {
    /// Pointer length in face units.
    pub length: f64,
    /// Stroke width in points.
    pub width_pt: f64,
    /// Straight-alpha RGBA8 color.
    pub rgba: [u8; 4],
}

/// Stroke widths, sizes and pointer styles of the dial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    /// Bezel stroke width in points.
    pub bezel_width_pt: f64,
    /// Hour tick stroke width in points.
    pub hour_tick_width_pt: f64,
    /// Minute tick stroke width in points.
    pub minute_tick_width_pt: f64,
    /// Numeral size in points.
    pub numeral_size_pt: f64,
    /// Ink color for bezel, ticks, hub and numerals.
    pub ink_rgba: [u8; 4],
    /// Hour pointer.
    pub hour: PointerStyle,
    /// Minute pointer.
    pub minute: PointerStyle,
    /// Second pointer.
    pub second: PointerStyle,
}

impl Default for FaceGeometry {
    fn default() -> Self {
        Self {
            bezel_width_pt: 2.0,
            hour_tick_width_pt: 2.0,
            minute_tick_width_pt: 1.0,
            numeral_size_pt: 12.0,
            ink_rgba: [0, 0, 0, 255],
            hour: PointerStyle {
                length: 0.5,
                width_pt: 6.0,
                rgba: [0, 0, 0, 255],
            },
            minute: PointerStyle {
                length: 0.75,
                width_pt: 4.0,
                rgba: [0, 0, 255, 255],
            },
            second: PointerStyle {
                length: 0.9,
                width_pt: 2.0,
                rgba: [255, 0, 0, 255],
            },
        }
    }
}

/// Pointer angles in clock degrees for one [`TimeSample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerAngles {
    /// Hour pointer; advances with minute and second.
    pub hour_deg: f64,
    /// Minute pointer; advances with second.
    pub minute_deg: f64,
    /// Second pointer.
    pub second_deg: f64,
}

impl PointerAngles {
    /// Smooth-motion angles for `sample`.
    pub fn from_sample(sample: TimeSample) -> Self {
        let h = f64::from(sample.hour % 12);
        let m = f64::from(sample.minute);
        let s = f64::from(sample.second);
        Self {
            hour_deg: 30.0 * h + 0.5 * m + s / 120.0,
            minute_deg: 6.0 * m + 0.1 * s,
            second_deg: 6.0 * s,
        }
    }
}

/// Straight line in face space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

/// Convert a clock angle into the counter-clockwise-from-`+x` convention, in radians.
pub fn clock_to_math_rad(clock_deg: f64) -> f64 {
    (90.0 - clock_deg).to_radians()
}

/// Point at `radius` along clock angle `clock_deg`.
pub fn polar(radius: f64, clock_deg: f64) -> Point {
    let theta = clock_to_math_rad(clock_deg);
    Point::new(radius * theta.cos(), radius * theta.sin())
}

/// Label shown at hour position `i` (0 is shown as 12).
pub fn numeral_label(i: u32) -> u32 {
    if i == 0 { 12 } else { i }
}

/// The 12 hour ticks with their position index, starting at 12 o'clock.
pub fn hour_ticks() -> impl Iterator<Item = (u32, Segment)> {
    (0..12u32).map(|i| {
        let deg = 30.0 * f64::from(i);
        (
            i,
            Segment {
                from: polar(HOUR_TICK_INNER, deg),
                to: polar(BEZEL_RADIUS, deg),
            },
        )
    })
}

/// The 48 minute ticks that do not coincide with an hour tick.
pub fn minute_ticks() -> impl Iterator<Item = Segment> {
    (0..60u32).filter(|i| i % 5 != 0).map(|i| {
        let deg = 6.0 * f64::from(i);
        Segment {
            from: polar(MINUTE_TICK_INNER, deg),
            to: polar(BEZEL_RADIUS, deg),
        }
    })
}

/// Center of the numeral at hour position `i`.
pub fn numeral_anchor(i: u32) -> Point {
    polar(NUMERAL_RADIUS, 30.0 * f64::from(i))
}

/// Pointer from the hub out to `length` along `clock_deg`.
pub fn pointer_segment(length: f64, clock_deg: f64) -> Segment {
    Segment {
        from: Point::ORIGIN,
        to: polar(length, clock_deg),
    }
}

/// Mapping from face space to pixel space for a square canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLayout {
    size_px: u32,
    px_per_unit: f64,
}

impl FaceLayout {
    /// Layout for a `size_px` x `size_px` canvas.
    pub fn new(size_px: u32) -> Self {
        let size = f64::from(size_px);
        Self {
            size_px,
            px_per_unit: size * FACE_FRACTION / (2.0 * DATA_EXTENT),
        }
    }

    /// Canvas edge length in pixels.
    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    /// Pixels per face unit.
    pub fn px_per_unit(&self) -> f64 {
        self.px_per_unit
    }

    /// Pixels per typographic point at the canvas DPI.
    pub fn px_per_pt(&self) -> f64 {
        f64::from(self.size_px) / FIGURE_INCHES / 72.0
    }

    /// Face space to pixel space (`y` flipped, origin at canvas center).
    pub fn to_px(&self) -> Affine {
        let c = f64::from(self.size_px) / 2.0;
        Affine::translate(Vec2::new(c, c))
            * Affine::scale_non_uniform(self.px_per_unit, -self.px_per_unit)
    }

    /// Map one face-space point into pixels.
    pub fn point_px(&self, p: Point) -> Point {
        self.to_px() * p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/geometry.rs"]
mod tests;
