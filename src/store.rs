use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::{CopilotError, Result};
use crate::schema::{UserId, UserRecord, USER_ID_FIELD};

/// Read-only table of user records keyed by `UserID`.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: HashMap<String, UserRecord>,
}

impl RecordStore {
    /// Loads a JSON array of records from disk.
    ///
    /// Records sharing a `UserID` overwrite earlier ones (last write wins).
    /// Elements without a string `UserID` are skipped; if none carry one the
    /// dataset is rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CopilotError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => CopilotError::Io(e),
        })?;

        let store = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} user records from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(raw)?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self> {
        let Value::Array(elements) = document else {
            return Err(CopilotError::SchemaError(
                "The JSON data must be an array of user records.".to_string(),
            ));
        };

        let mut records = HashMap::with_capacity(elements.len());

        for (idx, element) in elements.into_iter().enumerate() {
            let Value::Object(record) = element else {
                warn!("Skipping dataset element #{}: not a JSON object", idx);
                continue;
            };

            let key = match record.get(USER_ID_FIELD) {
                Some(Value::String(id)) => id.clone(),
                _ => {
                    warn!(
                        "Skipping dataset element #{}: missing string '{}' field",
                        idx, USER_ID_FIELD
                    );
                    continue;
                }
            };

            if records.insert(key.clone(), record).is_some() {
                warn!(
                    "Duplicate {} '{}' at element #{}; keeping the later record",
                    USER_ID_FIELD, key, idx
                );
            }
        }

        if records.is_empty() {
            return Err(CopilotError::SchemaError(format!(
                "The JSON data must contain a '{}' field for each record.",
                USER_ID_FIELD
            )));
        }

        Ok(Self { records })
    }

    /// Exact-match lookup.
    pub fn lookup(&self, id: &UserId) -> Result<&UserRecord> {
        self.get(id.as_str())
            .ok_or_else(|| CopilotError::RecordNotFound(id.clone()))
    }

    pub fn get(&self, key: &str) -> Option<&UserRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All keys, sorted.
    pub fn user_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.records.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

/// Loads each dataset path at most once and hands out shared handles to it.
#[derive(Debug, Default)]
pub struct DatasetCache {
    loaded: Mutex<HashMap<PathBuf, Arc<RecordStore>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table for `path`, reading the file only on first use.
    /// Failed loads are not cached.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<RecordStore>> {
        let path = path.as_ref();
        let mut loaded = self
            .loaded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(store) = loaded.get(path) {
            debug!("Dataset cache hit for {}", path.display());
            return Ok(Arc::clone(store));
        }

        let store = Arc::new(RecordStore::load(path)?);
        loaded.insert(path.to_path_buf(), Arc::clone(&store));
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.loaded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
