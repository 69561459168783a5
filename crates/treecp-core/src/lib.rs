//! Two-pass directory tree copy with byte-level progress.
//!
//! [`scan::scan_tree`] totals the sizes of every regular file under a source
//! root, then [`copy::copy_tree`] replicates the tree and reports
//! `(current, total)` to a [`progress::ProgressReporter`] after each file.
//! [`orchestrator::run`] chains the two.

pub mod copy;
pub mod enumeration;
pub mod errors;
pub mod options;
pub mod orchestrator;
pub mod progress;
pub mod scan;

pub use copy::{copy_tree, CopyProgress, CopySummary};
pub use enumeration::EntryKind;
pub use errors::{ErrorPhase, TreeCopyError, TreeCopyResult};
pub use options::CopyOptions;
pub use orchestrator::{run, RunSummary};
pub use progress::{NoopReporter, ProgressReporter, ProgressUpdate};
pub use scan::{scan_tree, total_size, ScanSummary};
