use std::path::Path;

/// One progress report, emitted after each file has been copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate<'a> {
    /// Bytes of all files copied so far, including the one just finished.
    pub current: u64,
    /// Total computed by the scan pass. Fixed for the whole copy.
    pub total: u64,
    /// Path of the finished file relative to the source root.
    pub label: Option<&'a Path>,
}

impl ProgressUpdate<'_> {
    /// Completed fraction. An empty total counts as done. Not clamped: if the
    /// source grew after the scan this can exceed 1.0.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// Receives progress from the copy pass. Rendering is entirely up to the
/// implementation.
pub trait ProgressReporter {
    fn report(&mut self, update: &ProgressUpdate<'_>);
}

/// Reporter that discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&mut self, _update: &ProgressUpdate<'_>) {}
}

impl<F> ProgressReporter for F
where
    F: FnMut(&ProgressUpdate<'_>),
{
    fn report(&mut self, update: &ProgressUpdate<'_>) {
        self(update)
    }
}
