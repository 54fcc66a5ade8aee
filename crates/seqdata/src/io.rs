//! Reading and writing datasets to and from disk.
//!
//! Any `serde`-serializable object graph can be stored, typically a
//! [`Splits`](crate::Splits) of index or one-hot arrays. The bytes are a
//! `bitcode` encoding of the object.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::Result;

/// Reads a dataset from a file written by [`save_dataset`].
///
/// # Errors
///
/// - If the file cannot be read.
/// - If the contents cannot be decoded as a `T`.
pub fn load_dataset<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    ftlog::debug!("Reading dataset from {path:?}");
    let bytes = std::fs::read(path)?;
    let data = bitcode::deserialize(&bytes)?;
    ftlog::debug!("Decoded {} bytes from {path:?}", bytes.len());
    Ok(data)
}

/// Writes a dataset to a file, creating missing parent directories first.
///
/// Returns the path that was written.
///
/// # Errors
///
/// - If the parent directory cannot be created.
/// - If the object cannot be encoded.
/// - If the file cannot be written.
pub fn save_dataset<T: Serialize + ?Sized, P: AsRef<Path>>(data: &T, path: P) -> Result<PathBuf> {
    let path = make_dir(path)?;
    let bytes = bitcode::serialize(data)?;
    std::fs::write(&path, &bytes)?;
    ftlog::debug!("Wrote {} bytes to {path:?}", bytes.len());
    Ok(path)
}

/// Creates the parent directory of a file path, and any of its missing
/// ancestors, if it does not already exist.
///
/// Returns the file path unchanged.
///
/// # Errors
///
/// - If the directory cannot be created.
pub fn make_dir<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            ftlog::info!("Creating directory {dir:?}");
            std::fs::create_dir_all(dir)?;
        }
    }
    Ok(path.to_path_buf())
}
