use crate::errors::{TreeCopyError, TreeCopyResult};
use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Copy the modification time of `src` onto `dst`.
pub(crate) fn preserve_mtime(src: &Path, dst: &Path) -> TreeCopyResult<()> {
    let md = fs::metadata(src).map_err(|err| TreeCopyError::copy_io("metadata", src, err))?;
    let mtime = FileTime::from_last_modification_time(&md);
    filetime::set_file_mtime(dst, mtime)
        .map_err(|err| TreeCopyError::copy_io("set_mtime", dst, err))?;
    log::trace!("preserved mtime for {}", dst.display());
    Ok(())
}
