use std::path::Path;

use crate::copy::{copy_tree, CopySummary};
use crate::errors::TreeCopyResult;
use crate::options::CopyOptions;
use crate::progress::ProgressReporter;
use crate::scan::{scan_tree, ScanSummary};

/// Outcome of a full scan-then-copy run.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub scan: ScanSummary,
    pub copy: CopySummary,
}

/// Scan `source`, then copy it to `destination` reporting against the scanned
/// total. The copy pass does not start until the scan has finished, so a scan
/// failure leaves the destination untouched.
pub fn run(
    source: &Path,
    destination: &Path,
    options: &CopyOptions,
    reporter: &mut dyn ProgressReporter,
) -> TreeCopyResult<RunSummary> {
    let scan = scan_tree(source)?;
    log::debug!(
        "total to copy from {}: {} byte(s) in {} file(s)",
        source.display(),
        scan.total_bytes,
        scan.files
    );

    let copy = copy_tree(source, destination, scan.total_bytes, options, reporter)?;
    if copy.bytes_copied != scan.total_bytes {
        log::debug!(
            "source changed during copy: scanned {} byte(s), copied {}",
            scan.total_bytes,
            copy.bytes_copied
        );
    }
    Ok(RunSummary { scan, copy })
}
