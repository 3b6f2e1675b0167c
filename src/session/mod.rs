//! Sequence driver: plans one hour of samples, renders them, encodes the animation and removes
//! the intermediate frames.

/// Best-effort removal of the frame directory.
pub mod cleanup;
/// The run entry point and its phases.
pub mod driver;
/// Progress reporting.
pub mod progress;
/// Sample planning and artifact naming.
pub mod plan;
