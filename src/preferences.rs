//! Persisted locale preference.
//!
//! A single key holds the last locale the user picked explicitly. It is read once at
//! startup and written on every explicit change. The file backend stores a small JSON
//! object keyed by the configured name, e.g. `{"fortune-cookie-language":"pt"}`.

use fs2::FileExt;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::locale::Locale;

/// Default preference key.
pub const DEFAULT_KEY: &str = "fortune-cookie-language";

/// Storage of the preferred locale code.
///
/// `load` returns the raw stored string; validation happens during locale resolution so
/// a stale or hand-edited value simply falls through.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, locale: Locale) -> Result<()>;
}

/// In-process store, used by tests and by callers without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    value: Mutex<Option<String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }

    fn save(&self, locale: Locale) -> Result<()> {
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(locale.code().to_string());
        }
        Ok(())
    }
}

/// JSON file store.
///
/// The file may be shared with other settings of any JSON type; only the configured
/// key is read or replaced. Saves are serialized through an exclusive lock on a
/// `.<name>.lock` sibling, held across the read, the merge and the rename.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    key: String,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Map::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn lock_path(&self) -> PathBuf {
        let base = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("preferences.json");
        self.path.with_file_name(format!(".{}.lock", base))
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self) -> Option<String> {
        match self.read_map() {
            Ok(map) => map.get(&self.key).and_then(Value::as_str).map(str::to_string),
            Err(e) => {
                warn!("ignoring unreadable preference file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, locale: Locale) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let lock_file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        lock_file.lock_exclusive()?;

        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(e) => {
                warn!("replacing unreadable preference file {}: {}", self.path.display(), e);
                Map::new()
            }
        };
        map.insert(self.key.clone(), Value::String(locale.code().to_string()));
        let content = serde_json::to_string_pretty(&map)?;
        let written = replace_file(&self.path, &content);
        let _ = FileExt::unlock(&lock_file);
        written?;

        debug!("saved locale preference {} to {}", locale, self.path.display());
        Ok(())
    }
}

/// Write `content` to a sibling temp file and rename it over `path`. Callers hold
/// the store lock.
fn replace_file(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("preferences.json");
    let mut counter = 0u32;
    let tmp_path = loop {
        let candidate = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(mut tmp) => {
                tmp.write_all(content.as_bytes())?;
                tmp.flush()?;
                let _ = tmp.sync_all();
                break candidate;
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                counter += 1;
                if counter > 100 {
                    return Err(e);
                }
            }
            Err(e) => return Err(e),
        }
    };
    fs::rename(&tmp_path, path)
}
