//! Size pre-scan.
//!
//! Walks the source tree once, without following symlinks, and sums the sizes
//! of every regular file. The result is the fixed total used by every progress
//! report of the copy pass.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::enumeration::EntryKind;
use crate::errors::{TreeCopyError, TreeCopyResult};

/// What the scan pass found under a root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Sum of the sizes of all regular files.
    pub total_bytes: u64,
    pub files: u64,
    /// Subdirectories below the root; the root itself is not counted.
    pub directories: u64,
    /// Entries that are neither files nor directories.
    pub skipped: u64,
}

impl ScanSummary {
    fn record(&mut self, kind: EntryKind, size: u64) {
        match kind {
            EntryKind::File => {
                self.files += 1;
                self.total_bytes += size;
            }
            EntryKind::Directory => self.directories += 1,
            EntryKind::Other => self.skipped += 1,
        }
    }
}

/// Total bytes of all regular files reachable from `root`.
pub fn total_size(root: &Path) -> TreeCopyResult<u64> {
    Ok(scan_tree(root)?.total_bytes)
}

/// Scan `root` recursively. Any unreadable directory or file metadata aborts
/// the scan; there is no partial result.
pub fn scan_tree(root: &Path) -> TreeCopyResult<ScanSummary> {
    ensure_directory(root)?;

    let mut summary = ScanSummary::default();
    for next in WalkDir::new(root).follow_links(false) {
        let entry = next.map_err(|err| walk_error("read_dir", root, err))?;
        if entry.depth() == 0 {
            continue;
        }

        let kind = EntryKind::from_file_type(entry.file_type());
        let size = match kind {
            EntryKind::File => entry
                .metadata()
                .map_err(|err| walk_error("metadata", entry.path(), err))?
                .len(),
            EntryKind::Directory => 0,
            EntryKind::Other => {
                log::trace!("scan: skipping {}", entry.path().display());
                0
            }
        };
        summary.record(kind, size);
    }

    log::debug!(
        "scanned {}: {} file(s), {} dir(s), {} byte(s), {} skipped",
        root.display(),
        summary.files,
        summary.directories,
        summary.total_bytes,
        summary.skipped
    );
    Ok(summary)
}

pub(crate) fn ensure_directory(root: &Path) -> TreeCopyResult<()> {
    let metadata =
        fs::metadata(root).map_err(|err| TreeCopyError::scan_io("metadata", root, err))?;
    if !metadata.is_dir() {
        return Err(TreeCopyError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

fn walk_error(op: &'static str, fallback: &Path, err: walkdir::Error) -> TreeCopyError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| fallback.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    TreeCopyError::scan_io(op, path, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorPhase;
    use tempfile::tempdir;

    #[test]
    fn test_sums_nested_file_sizes() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("top.txt"), vec![0u8; 10]).unwrap();
        fs::write(root.join("a/one.bin"), vec![1u8; 100]).unwrap();
        fs::write(root.join("a/b/c/deep.bin"), vec![2u8; 1234]).unwrap();

        let summary = scan_tree(root).unwrap();
        assert_eq!(summary.total_bytes, 1344);
        assert_eq!(summary.files, 3);
        assert_eq!(summary.directories, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(total_size(root).unwrap(), 1344);
    }

    #[test]
    fn test_empty_tree_totals_zero() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("x/y")).unwrap();

        let summary = scan_tree(tmp.path()).unwrap();
        assert_eq!(summary.total_bytes, 0);
        assert_eq!(summary.files, 0);
        assert_eq!(summary.directories, 2);
    }

    #[test]
    fn test_zero_length_files_are_counted_but_add_nothing() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("empty"), b"").unwrap();

        let summary = scan_tree(tmp.path()).unwrap();
        assert_eq!(summary.files, 1);
        assert_eq!(summary.total_bytes, 0);
    }

    #[test]
    fn test_file_root_is_rejected() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, b"data").unwrap();

        let err = scan_tree(&file).unwrap_err();
        assert!(matches!(err, TreeCopyError::NotADirectory { .. }));
    }

    #[test]
    fn test_missing_root_is_scan_error() {
        let tmp = tempdir().unwrap();
        let err = scan_tree(&tmp.path().join("nope")).unwrap_err();
        assert_eq!(err.phase(), ErrorPhase::Scan);
        assert!(matches!(err, TreeCopyError::Io { op: "metadata", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_aborts_scan() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.bin"), [0u8; 64]).unwrap();
        fs::write(tmp.path().join("visible.txt"), b"seen").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&locked).is_ok() {
            // Permission bits are not enforced for this user (root).
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = scan_tree(tmp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let err = result.unwrap_err();

        assert_eq!(err.phase(), ErrorPhase::Scan);
        assert!(matches!(err, TreeCopyError::Io { op: "read_dir", .. }));
        assert_eq!(err.path(), locked.as_path());
    }

    #[test]
    fn test_metadata_failure_is_labelled_metadata() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("gone.txt");
        fs::write(&file, b"x").unwrap();

        // Listed by the walk, removed before its metadata is read.
        let entry = WalkDir::new(tmp.path())
            .min_depth(1)
            .into_iter()
            .next()
            .unwrap()
            .unwrap();
        fs::remove_file(&file).unwrap();
        let err = walk_error("metadata", entry.path(), entry.metadata().unwrap_err());

        assert!(matches!(err, TreeCopyError::Io { op: "metadata", .. }), "{err}");
        assert_eq!(err.path(), file.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped_and_not_followed() {
        let tmp = tempdir().unwrap();
        let outside = tmp.path().join("outside");
        let root = tmp.path().join("root");
        fs::create_dir(&outside).unwrap();
        fs::create_dir(&root).unwrap();
        fs::write(outside.join("big.bin"), vec![0u8; 4096]).unwrap();
        fs::write(root.join("small.txt"), b"hello").unwrap();
        std::os::unix::fs::symlink(&outside, root.join("dir-link")).unwrap();
        std::os::unix::fs::symlink(outside.join("big.bin"), root.join("file-link")).unwrap();

        let summary = scan_tree(&root).unwrap();
        assert_eq!(summary.total_bytes, 5);
        assert_eq!(summary.files, 1);
        assert_eq!(summary.directories, 0);
        assert_eq!(summary.skipped, 2);
    }
}
