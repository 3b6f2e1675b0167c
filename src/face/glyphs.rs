//! Built-in stroked digits for the dial numerals.
//!
//! Digits are single-stroke outlines in a glyph box `DIGIT_WIDTH` wide and 1.0 tall, `y` down.
//! They are stroked, never filled, so they need no font file.

use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Vec2};
use crate::foundation::error::{ClockError, ClockResult};

/// Width of one digit box, in units of digit height.
pub const DIGIT_WIDTH: f64 = 0.5;
/// Gap between adjacent digits.
pub const DIGIT_GAP: f64 = 0.14;
/// Stroke width for a bold numeral, in units of digit height.
pub const BOLD_STROKE: f64 = 0.14;
/// Digit height as a share of the nominal font size (cap height of a typical sans face).
pub const CAP_HEIGHT_EM: f64 = 0.72;

const TOLERANCE: f64 = 0.01;

fn polyline(path: &mut BezPath, pts: &[(f64, f64)]) {
    let Some((&(x0, y0), rest)) = pts.split_first() else {
        return;
    };
    path.move_to((x0, y0));
    for &(x, y) in rest {
        path.line_to((x, y));
    }
}

fn ellipse(path: &mut BezPath, cx: f64, cy: f64, rx: f64, ry: f64) {
    let e = kurbo::Ellipse::new((cx, cy), (rx, ry), 0.0);
    path.extend(e.path_elements(TOLERANCE));
}

/// Stroke outline of one decimal digit in its glyph box.
pub fn digit_path(digit: u8) -> ClockResult<BezPath> {
    let mut p = BezPath::new();
    match digit {
        0 => ellipse(&mut p, 0.25, 0.5, 0.23, 0.48),
        1 => {
            polyline(&mut p, &[(0.08, 0.2), (0.3, 0.0), (0.3, 1.0)]);
            polyline(&mut p, &[(0.1, 1.0), (0.48, 1.0)]);
        }
        2 => polyline(
            &mut p,
            &[
                (0.03, 0.2),
                (0.12, 0.05),
                (0.26, 0.0),
                (0.4, 0.05),
                (0.48, 0.2),
                (0.45, 0.38),
                (0.02, 1.0),
                (0.5, 1.0),
            ],
        ),
        3 => {
            polyline(
                &mut p,
                &[
                    (0.02, 0.1),
                    (0.15, 0.0),
                    (0.35, 0.0),
                    (0.47, 0.12),
                    (0.47, 0.34),
                    (0.35, 0.46),
                    (0.17, 0.46),
                ],
            );
            polyline(
                &mut p,
                &[
                    (0.35, 0.46),
                    (0.49, 0.6),
                    (0.49, 0.86),
                    (0.35, 1.0),
                    (0.15, 1.0),
                    (0.01, 0.9),
                ],
            );
        }
        4 => {
            polyline(&mut p, &[(0.38, 1.0), (0.38, 0.0), (0.0, 0.7), (0.5, 0.7)]);
        }
        5 => polyline(
            &mut p,
            &[
                (0.47, 0.0),
                (0.08, 0.0),
                (0.04, 0.45),
                (0.2, 0.4),
                (0.37, 0.42),
                (0.49, 0.58),
                (0.49, 0.83),
                (0.36, 1.0),
                (0.14, 1.0),
                (0.01, 0.9),
            ],
        ),
        6 => polyline(&mut p, &SIX),
        7 => polyline(&mut p, &[(0.0, 0.0), (0.5, 0.0), (0.17, 1.0)]),
        8 => {
            ellipse(&mut p, 0.25, 0.25, 0.2, 0.24);
            ellipse(&mut p, 0.25, 0.74, 0.24, 0.26);
        }
        9 => {
            // A six turned half a revolution inside the glyph box.
            let nine: Vec<(f64, f64)> = SIX
                .iter()
                .map(|&(x, y)| (DIGIT_WIDTH - x, 1.0 - y))
                .collect();
            polyline(&mut p, &nine);
        }
        _ => {
            return Err(ClockError::render(format!(
                "no built-in glyph for digit {digit}"
            )));
        }
    }
    Ok(p)
}

const SIX: [(f64, f64); 13] = [
    (0.45, 0.05),
    (0.3, 0.0),
    (0.15, 0.05),
    (0.03, 0.25),
    (0.0, 0.6),
    (0.03, 0.85),
    (0.15, 1.0),
    (0.35, 1.0),
    (0.48, 0.85),
    (0.48, 0.65),
    (0.35, 0.5),
    (0.15, 0.5),
    (0.02, 0.62),
];

/// Width of `digits` laid out side by side, in units of digit height.
pub fn label_width(digits: usize) -> f64 {
    if digits == 0 {
        return 0.0;
    }
    digits as f64 * DIGIT_WIDTH + (digits - 1) as f64 * DIGIT_GAP
}

/// Stroke outline of a decimal label, centered on the origin.
pub fn label_path(label: u32) -> ClockResult<BezPath> {
    let text = label.to_string();
    let width = label_width(text.len());
    let mut out = BezPath::new();
    for (i, ch) in text.bytes().enumerate() {
        let digit = digit_path(ch - b'0')?;
        let x = i as f64 * (DIGIT_WIDTH + DIGIT_GAP) - width / 2.0;
        let shift = Affine::translate(Vec2::new(x, -0.5));
        out.extend((shift * digit).elements().iter().copied());
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/face/glyphs.rs"]
mod tests;
