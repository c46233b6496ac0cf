use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fieldsmith_core::GeneratedRecord;
use fieldsmith_generate::{GenerationInfo, RecordSet};

use crate::atomic::write_json_atomic;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("generation not found: {0}")]
    NotFound(String),
}

/// Listing entry for a saved generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedGeneration {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub total_records: usize,
    pub path: PathBuf,
}

/// Persistence of named generations by opaque id.
pub trait GenerationStore {
    fn create(
        &self,
        info: &GenerationInfo,
        records: &RecordSet,
    ) -> Result<SavedGeneration, StoreError>;

    /// Saved generations, newest first.
    fn list(&self) -> Result<Vec<SavedGeneration>, StoreError>;

    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredGeneration<'a> {
    id: &'a str,
    generation_info: &'a GenerationInfo,
    data: &'a [GeneratedRecord],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredHeader {
    id: String,
    generation_info: GenerationInfo,
}

/// Stores each generation as `<id>.json` under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(self.root.join(format!("{id}.json")))
    }
}

impl GenerationStore for DirectoryStore {
    fn create(
        &self,
        info: &GenerationInfo,
        records: &RecordSet,
    ) -> Result<SavedGeneration, StoreError> {
        let id = new_generation_id(&info.created_at);
        let path = self.path_for(&id)?;
        let stored = StoredGeneration {
            id: &id,
            generation_info: info,
            data: &records.records,
        };
        write_json_atomic(&path, &stored)?;

        Ok(SavedGeneration {
            id,
            name: info.name.clone(),
            created_at: info.created_at,
            total_records: info.total_records,
            path,
        })
    }

    fn list(&self) -> Result<Vec<SavedGeneration>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut saved = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let header = match read_header(&path) {
                Ok(header) => header,
                Err(err) => {
                    tracing::warn!(
                        event = "saved_generation_skipped",
                        path = %path.display(),
                        error = %err
                    );
                    continue;
                }
            };
            saved.push(SavedGeneration {
                id: header.id,
                name: header.generation_info.name,
                created_at: header.generation_info.created_at,
                total_records: header.generation_info.total_records,
                path,
            });
        }

        saved.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(saved)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }
}

fn read_header(path: &Path) -> Result<StoredHeader, StoreError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn new_generation_id(created_at: &DateTime<Utc>) -> String {
    let date = created_at.format("%Y-%m-%d");
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{date}__gen_{}", &id[..8])
}
