use std::time::Duration;

/// Running byte counter threaded through the copy pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyProgress {
    pub current: u64,
    pub total: u64,
}

impl CopyProgress {
    pub fn new(total: u64) -> Self {
        Self { current: 0, total }
    }

    pub fn add_file(&mut self, bytes: u64) {
        self.current += bytes;
    }
}

/// Totals for a finished copy pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopySummary {
    pub files_copied: u64,
    pub bytes_copied: u64,
    /// Includes the destination root.
    pub directories_created: u64,
    /// Entries that were neither files nor directories.
    pub skipped: u64,
    pub duration: Duration,
}

impl CopySummary {
    pub fn add_file(&mut self, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }
}
