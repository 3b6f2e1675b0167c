//! Dial geometry: tick marks, numerals, pointer angles and the face-to-pixel mapping.

/// Fixed dial geometry and pointer angle formulas.
pub mod geometry;
/// Built-in stroked digits for the numerals.
pub mod glyphs;
