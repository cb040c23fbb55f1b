//! Snapshot file I/O
//!
//! Reads and writes the JSON snapshot backing one collection. Writes go to a
//! temp file beside the target and are renamed over it, so a crash leaves
//! either the old or the new snapshot on disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AssistantError, AssistantResult};

/// Load a snapshot, creating it from `default` if the file does not exist
///
/// # Errors
///
/// Returns `Parse` if the file content is not valid for `T`, or `Io` if the
/// file cannot be read or the default cannot be written.
pub fn load<T, P>(path: P, default: T) -> AssistantResult<T>
where
    T: Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        save(path, &default)?;
        return Ok(default);
    }

    let file = File::open(path)
        .map_err(|e| AssistantError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| AssistantError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write a snapshot, replacing the file completely
///
/// Output is pretty-printed UTF-8 JSON. Missing parent directories are created.
pub fn save<T, P>(path: P, data: &T) -> AssistantResult<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AssistantError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        AssistantError::Io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let written = serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| AssistantError::Json(format!("Failed to serialize data: {}", e)))
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| AssistantError::Io(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| AssistantError::Io(format!("Failed to sync data: {}", e)))
        });
    drop(writer);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AssistantError::Io(format!("Failed to replace {}: {}", path.display(), e))
    })
}
