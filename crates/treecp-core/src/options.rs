/// Options for a single tree copy.
#[derive(Clone, Debug, Default)]
pub struct CopyOptions {
    /// Restore source modification times on copied files and directories.
    pub preserve_times: bool,
}
