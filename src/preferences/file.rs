// ABOUTME: JSON file preference store used by the CLI between invocations
// ABOUTME: Whole-file read-modify-write of a single JSON object keyed by preference name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

use super::{PreferenceKey, PreferenceStore};
use bloom_core::errors::{AppError, AppResult};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Preference store persisted as one JSON object on disk
///
/// A missing file reads as an empty store. Writes replace the whole file via a
/// temporary sibling and a rename. The mutex serializes writers within one
/// process only.
#[derive(Clone)]
pub struct JsonFilePreferenceStore {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFilePreferenceStore {
    /// Create a store backed by `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<Map<String, Value>> {
        let bytes = match fs::read(self.path.as_path()).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }

        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Object(map) => Ok(map),
            _ => Err(AppError::invalid_format(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))
            .with_resource_id(self.path.display().to_string())),
        }
    }

    async fn save(&self, map: Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(&Value::Object(map))?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes).await?;
        fs::rename(&tmp_path, self.path.as_path()).await?;
        debug!(path = %self.path.display(), "Saved preference store");
        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceStore for JsonFilePreferenceStore {
    async fn get<T: DeserializeOwned>(&self, key: PreferenceKey) -> AppResult<Option<T>> {
        let mut map = self.load().await?;
        map.remove(key.as_str())
            .map(|value| {
                serde_json::from_value(value)
                    .map_err(|e| AppError::from(e).with_resource_id(key.as_str()))
            })
            .transpose()
    }

    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: PreferenceKey,
        value: &T,
    ) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        let _guard = self.write_lock.lock().await;
        let mut map = self.load().await?;
        map.insert(key.as_str().to_owned(), value);
        self.save(map).await
    }

    async fn has(&self, key: PreferenceKey) -> AppResult<bool> {
        Ok(self.load().await?.contains_key(key.as_str()))
    }

    async fn remove(&self, key: PreferenceKey) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load().await?;
        let removed = map.remove(key.as_str()).is_some();
        if removed {
            self.save(map).await?;
        }
        Ok(removed)
    }
}
