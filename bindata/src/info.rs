use std::{
    any::Any,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// File metadata captured when an asset was embedded.
///
/// Generated code implements this for its `BindataFileInfo` record. Every value
/// describes the source file as it was during the build, not anything on the
/// machine running the program.
pub trait FileInfo {
    /// The asset's logical name.
    fn name(&self) -> &str;
    /// Length in bytes of the original file.
    fn size(&self) -> u64;
    /// Permission bits of the original file.
    fn mode(&self) -> u32;
    /// Modification time, truncated to whole seconds.
    fn mod_time(&self) -> SystemTime;
    fn is_dir(&self) -> bool;
    /// Platform specific data. Embedded assets carry none.
    fn sys(&self) -> Option<&dyn Any>;
}

/// Converts whole seconds relative to the Unix epoch into a [`SystemTime`].
///
/// Negative values land before the epoch.
#[must_use]
pub fn unix_time(secs: i64) -> SystemTime {
    let offset = Duration::from_secs(secs.unsigned_abs());
    if secs >= 0 {
        UNIX_EPOCH + offset
    } else {
        UNIX_EPOCH - offset
    }
}
