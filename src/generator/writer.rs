use crate::error::AuthzError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `contents` in one step.
///
/// The text is written to a temporary file in the destination directory and
/// renamed over the target, so readers never observe a partially written file
/// and a failed run leaves any previous file untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), AuthzError> {
    let fail = |source: std::io::Error| AuthzError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    tmp.write_all(contents.as_bytes()).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}

/// Compare freshly generated `contents` with the file at `path`.
///
/// # Errors
///
/// [`AuthzError::Stale`] when the file differs, [`AuthzError::Read`] when it
/// cannot be read (including when it does not exist).
pub fn check_up_to_date(path: &Path, contents: &str) -> Result<(), AuthzError> {
    let existing = std::fs::read_to_string(path).map_err(|source| AuthzError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if existing == contents {
        Ok(())
    } else {
        Err(AuthzError::Stale {
            path: path.to_path_buf(),
        })
    }
}
