use std::{fs, io, path::Path};

use crate::infra::error::ResolveError;

/// Whether a regular file exists at `path`.
///
/// A missing path, or a path whose parent component is not a directory,
/// counts as absent. Any other I/O failure (e.g. permission denied)
/// propagates rather than being conflated with absence.
pub fn file_exists(path: &Path) -> Result<bool, ResolveError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(error)
            if matches!(
                error.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(false)
        }
        Err(source) => Err(ResolveError::PathProbe {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Whether `path` is a directory with at least one visible entry
/// (non-recursive; hidden entries such as `.gitkeep` do not count).
///
/// A missing path, or a path that is not a directory, counts as "no entries".
pub fn dir_has_entries(path: &Path) -> Result<bool, ResolveError> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(error)
            if matches!(
                error.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            return Ok(false)
        }
        Err(source) => {
            return Err(ResolveError::SeedDirList {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    for entry in entries {
        let entry = entry.map_err(|source| ResolveError::SeedDirList {
            path: path.to_path_buf(),
            source,
        })?;

        if !entry.file_name().to_string_lossy().starts_with('.') {
            return Ok(true);
        }
    }

    Ok(false)
}
