pub mod csv;
pub mod report;

use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::GenerationError;

/// Run `write` against a sibling temp file, then move it over `path`.
///
/// The destination is only replaced once `write` succeeds; on failure the temp
/// file is removed and `path` is left untouched.
pub(crate) fn write_atomic<T, F>(path: &Path, write: F) -> Result<T, GenerationError>
where
    F: FnOnce(&mut std::fs::File) -> Result<T, GenerationError>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;

    let outcome = write(&mut file).and_then(|value| {
        file.flush()?;
        file.sync_all()?;
        Ok(value)
    });

    match outcome {
        Ok(value) => {
            std::fs::rename(&tmp_path, path)?;
            Ok(value)
        }
        Err(err) => {
            let _ = std::fs::remove_file(&tmp_path);
            Err(err)
        }
    }
}

fn temp_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let file_name = path.file_name().ok_or_else(|| {
        GenerationError::InvalidOptions(format!("invalid output path {}", path.display()))
    })?;
    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}
