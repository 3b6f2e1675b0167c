//! Clock-face rasterization.

/// CPU renderer powered by `vello_cpu`.
pub mod cpu;
/// Rendered frame buffers and PNG IO.
pub mod frame;
pub(crate) mod text;
