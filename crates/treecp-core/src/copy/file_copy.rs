use super::metadata;
use crate::errors::{TreeCopyError, TreeCopyResult};
use crate::options::CopyOptions;
use std::fs;
use std::path::Path;

/// Copy one regular file. Contents and permission bits come from `fs::copy`;
/// the modification time is restored when `preserve_times` is set.
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> TreeCopyResult<u64> {
    let bytes = fs::copy(src, dst).map_err(|err| TreeCopyError::copy_io("copy", src, err))?;
    if options.preserve_times {
        metadata::preserve_mtime(src, dst)?;
    }
    Ok(bytes)
}
