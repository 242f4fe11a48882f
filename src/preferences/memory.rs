// ABOUTME: In-memory preference store backed by a shared map of serialized values
// ABOUTME: Used by tests and embedding callers that own persistence themselves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

use super::{PreferenceKey, PreferenceStore};
use bloom_core::errors::AppResult;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory preference store
///
/// Values are kept as serialized JSON bytes so round-trips behave exactly like
/// the file backend. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryPreferenceStore {
    store: Arc<RwLock<HashMap<PreferenceKey, Vec<u8>>>>,
}

impl InMemoryPreferenceStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently holding a value
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// True when no key holds a value
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get<T: DeserializeOwned>(&self, key: PreferenceKey) -> AppResult<Option<T>> {
        let data = self.store.read().await.get(&key).cloned();
        data.map(|bytes| serde_json::from_slice(&bytes).map_err(Into::into))
            .transpose()
    }

    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: PreferenceKey,
        value: &T,
    ) -> AppResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.store.write().await.insert(key, bytes);
        Ok(())
    }

    async fn has(&self, key: PreferenceKey) -> AppResult<bool> {
        Ok(self.store.read().await.contains_key(&key))
    }

    async fn remove(&self, key: PreferenceKey) -> AppResult<bool> {
        Ok(self.store.write().await.remove(&key).is_some())
    }
}
