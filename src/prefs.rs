//! Durable string preferences, stored as one JSON map per user.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context as _;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Stored language code (`pt` / `en`).
pub const LANGUAGE_KEY: &str = "preferred-language";
/// Stored theme code (`light` / `dark` / `auto`).
pub const THEME_KEY: &str = "preferred-theme";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct PrefMap(HashMap<String, String>);

/// Plain key-value store. Values are opaque strings: nothing is validated
/// here, consumers tolerate unknown values by falling back to defaults.
pub struct PrefStore {
    /// Backing file; `None` keeps the store in memory only.
    path: Option<PathBuf>,
    values: RwLock<PrefMap>,
}

impl PrefStore {
    /// Open the per-user store under the platform config directory.
    pub fn open_default() -> Self {
        match directories::ProjectDirs::from("com", "GitHub", "readme-view") {
            Some(dirs) => Self::open(dirs.config_dir().join("prefs.json")),
            None => {
                tracing::warn!("no user config directory; preferences will not persist");
                Self::in_memory()
            }
        }
    }

    /// Open a store backed by an explicit file. A missing or unreadable
    /// file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<PrefMap>(&raw).ok())
            .unwrap_or_default();
        Self {
            path: Some(path),
            values: RwLock::new(values),
        }
    }

    /// Store without a backing file.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: RwLock::new(PrefMap::default()),
        }
    }

    /// Fetch a stored value, `None` when absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().0.get(key).cloned()
    }

    /// Store a value and write the file through. Persistence failures are
    /// logged and swallowed; the in-memory value still updates.
    pub fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .0
            .insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            tracing::warn!(%err, key, "failed to persist preference");
        }
    }

    fn flush(&self) -> anyhow::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(&*self.values.read())?;
        std::fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
