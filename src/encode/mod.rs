//! Encoding sinks.
//!
//! Sinks consume rendered frames in sequence order; the driver feeds them once every frame of a
//! run exists on disk.

/// Animated GIF output.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
