//! Preference persistence for the pager driver.
//!
//! The chosen page size is kept in `.pager_prefs.ron` so a restarted driver
//! comes back with the size the user last picked. Loads are tolerant: a
//! missing or unreadable file just means defaults.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use pager_logging::{pager_error, pager_info, pager_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

const PREFS_FILENAME: &str = ".pager_prefs.ron";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("prefs directory missing or not writable: {0}")]
    PrefsDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    page_size: u64,
    saved_utc: String,
}

pub(crate) fn load_page_size(dir: &Path) -> Option<u64> {
    let path = dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            pager_warn!("Failed to read prefs from {:?}: {}", path, err);
            return None;
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            pager_warn!("Failed to parse prefs from {:?}: {}", path, err);
            return None;
        }
    };

    pager_info!("Loaded persisted page size from {:?}", path);
    Some(prefs.page_size)
}

pub(crate) fn save_page_size(dir: &Path, page_size: u64) {
    if let Err(err) = write_prefs(dir, page_size) {
        pager_error!("Failed to write prefs to {:?}: {}", dir, err);
    }
}

fn write_prefs(dir: &Path, page_size: u64) -> Result<PathBuf, PrefsError> {
    ensure_prefs_dir(dir)?;

    let prefs = PersistedPrefs {
        page_size,
        saved_utc: Utc::now().to_rfc3339(),
    };
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(&prefs, pretty)?;

    // Write a temp file then rename so a crash never leaves a torn file.
    let target = dir.join(PREFS_FILENAME);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|e| PrefsError::Io(e.error))?;
    Ok(target)
}

fn ensure_prefs_dir(dir: &Path) -> Result<(), PrefsError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PrefsError::PrefsDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PrefsError::PrefsDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PrefsError::PrefsDir(e.to_string()))?;
    }
    Ok(())
}
