//! Recursive copy pass.
//!
//! Replicates the directory structure and regular files of a source tree into
//! a destination that must not exist yet. After each file the shared byte
//! counter is advanced and reported. Any other entry kind is skipped.

mod file_copy;
mod metadata;
mod stats;

pub use file_copy::copy_file;
pub use stats::{CopyProgress, CopySummary};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::enumeration::EntryKind;
use crate::errors::{TreeCopyError, TreeCopyResult};
use crate::options::CopyOptions;
use crate::progress::{ProgressReporter, ProgressUpdate};
use crate::scan::ensure_directory;

/// State shared by every level of the recursion.
struct CopyContext<'a> {
    progress: CopyProgress,
    summary: CopySummary,
    options: &'a CopyOptions,
    reporter: &'a mut dyn ProgressReporter,
    /// Canonical destination root, set once it has been created. A source
    /// directory resolving here is the copy's own output and is not entered.
    destination_root: Option<PathBuf>,
}

/// Copy the tree under `source` into `destination`.
///
/// `total` is reported unchanged alongside every update. The destination must
/// not exist; its parent must. A destination nested inside the source is
/// allowed and is left out of the copy. On error the destination is left as
/// it is.
pub fn copy_tree(
    source: &Path,
    destination: &Path,
    total: u64,
    options: &CopyOptions,
    reporter: &mut dyn ProgressReporter,
) -> TreeCopyResult<CopySummary> {
    ensure_directory(source)?;

    let start = Instant::now();
    let mut ctx = CopyContext {
        progress: CopyProgress::new(total),
        summary: CopySummary::default(),
        options,
        reporter,
        destination_root: None,
    };
    ctx.copy_dir(source, destination, Path::new(""))?;

    let mut summary = ctx.summary;
    summary.duration = start.elapsed();
    log::debug!(
        "copied {} -> {}: {} file(s), {} byte(s) of {}",
        source.display(),
        destination.display(),
        summary.files_copied,
        summary.bytes_copied,
        total
    );
    Ok(summary)
}

impl CopyContext<'_> {
    fn copy_dir(&mut self, src: &Path, dst: &Path, rel: &Path) -> TreeCopyResult<()> {
        fs::create_dir(dst).map_err(|err| TreeCopyError::create_dir(dst, err))?;
        self.summary.directories_created += 1;
        log::debug!("created directory {}", dst.display());
        if self.destination_root.is_none() {
            let root = fs::canonicalize(dst)
                .map_err(|err| TreeCopyError::copy_io("canonicalize", dst, err))?;
            self.destination_root = Some(root);
        }

        let entries =
            fs::read_dir(src).map_err(|err| TreeCopyError::copy_io("read_dir", src, err))?;
        for entry in entries {
            let entry = entry.map_err(|err| TreeCopyError::copy_io("read_dir", src, err))?;
            let src_path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|err| TreeCopyError::copy_io("file_type", &src_path, err))?;
            let name = entry.file_name();
            let dst_path = dst.join(&name);
            let rel_path = rel.join(&name);

            match EntryKind::from_file_type(file_type) {
                EntryKind::Directory if self.is_destination_root(&src_path)? => {
                    log::debug!("not descending into destination {}", src_path.display());
                }
                EntryKind::Directory => self.copy_dir(&src_path, &dst_path, &rel_path)?,
                EntryKind::File => self.copy_one(&src_path, &dst_path, &rel_path)?,
                EntryKind::Other => {
                    self.summary.skipped += 1;
                    log::trace!("copy: skipping {}", src_path.display());
                }
            }
        }

        // Children are written first, so the directory mtime is restored last.
        if self.options.preserve_times {
            metadata::preserve_mtime(src, dst)?;
        }
        Ok(())
    }

    fn is_destination_root(&self, src: &Path) -> TreeCopyResult<bool> {
        let Some(root) = &self.destination_root else {
            return Ok(false);
        };
        let resolved = fs::canonicalize(src)
            .map_err(|err| TreeCopyError::copy_io("canonicalize", src, err))?;
        Ok(&resolved == root)
    }

    fn copy_one(&mut self, src: &Path, dst: &Path, rel: &Path) -> TreeCopyResult<()> {
        let size = fs::metadata(src)
            .map_err(|err| TreeCopyError::copy_io("metadata", src, err))?
            .len();
        self.progress.add_file(size);

        copy_file(src, dst, self.options)?;
        self.summary.add_file(size);
        log::info!("{} -> {}", src.display(), dst.display());

        self.reporter.report(&ProgressUpdate {
            current: self.progress.current,
            total: self.progress.total,
            label: Some(rel),
        });
        Ok(())
    }
}
