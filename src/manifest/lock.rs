//! Lock file removal

use crate::error::LockFileError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Delete the lock file at `path`.
///
/// Returns `Ok(false)` when there was nothing to delete.
pub fn remove_lock_file(path: &Path) -> Result<bool, LockFileError> {
    log::info!("Removing {}", path.display());

    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("{} does not exist, skipping removal", path.display());
            Ok(false)
        }
        Err(source) => Err(LockFileError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}
