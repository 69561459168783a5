use std::fs::FileType;

/// Describes the kind of entry found while walking a tree.
///
/// Classification always uses the entry's own file type, never the target of a
/// link: a symlink to a directory is `Other`, not `Directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, devices, sockets, fifos. Skipped by both passes.
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_files_and_directories() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"a").unwrap();

        let dir_type = fs::symlink_metadata(tmp.path()).unwrap().file_type();
        let file_type = fs::symlink_metadata(&file).unwrap().file_type();
        assert_eq!(EntryKind::from_file_type(dir_type), EntryKind::Directory);
        assert_eq!(EntryKind::from_file_type(file_type), EntryKind::File);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_other_even_when_pointing_at_directories() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let link_type = fs::symlink_metadata(&link).unwrap().file_type();
        assert_eq!(EntryKind::from_file_type(link_type), EntryKind::Other);
    }
}
