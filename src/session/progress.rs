use std::io::Write as _;

/// Receives per-frame progress from the driver.
pub trait ProgressReporter {
    /// `done` frames of `total` requested are finished.
    fn frame_done(&mut self, done: u64, total: u64);
    /// Rendering is over; no further `frame_done` calls follow.
    fn finish(&mut self);
}

/// Single status line on stderr, rewritten in place after every frame.
#[derive(Debug, Default)]
pub struct StderrProgress {
    dirty: bool,
}

impl StderrProgress {
    /// Create a reporter writing to stderr.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for StderrProgress {
    fn frame_done(&mut self, done: u64, total: u64) {
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r[progress] {done} / {total} frames");
        let _ = err.flush();
        self.dirty = true;
    }

    fn finish(&mut self) {
        if self.dirty {
            eprintln!();
            self.dirty = false;
        }
    }
}

/// Reporter that discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn frame_done(&mut self, _done: u64, _total: u64) {}

    fn finish(&mut self) {}
}
