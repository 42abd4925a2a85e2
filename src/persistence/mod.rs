//! Save/load persistence
//!
//! Features:
//! - Plain JSON files
//! - Atomic writes (tmp file, then rename over the old file)
//! - Missing or corrupt files load as `None` instead of failing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Read and parse a JSON file. An absent or unparseable file yields `None`
/// (corruption is logged); only unexpected I/O errors are returned.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} not found", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("Ignoring corrupt file {}: {}", path.display(), e);
            Ok(None)
        }
    }
}

/// Serialize to pretty JSON and replace `path` atomically
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded: Option<Vec<u32>> = load_json(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let loaded: Option<Vec<u32>> = load_json(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("values.json");
        save_json(&path, &vec![3u32, 1, 2]).unwrap();

        let loaded: Option<Vec<u32>> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(vec![3, 1, 2]));
        assert!(!path.with_extension("tmp").exists());
    }
}
