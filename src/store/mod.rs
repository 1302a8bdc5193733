use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};

/// Key-value store persisted as a single JSON object on disk.
///
/// Every mutation rewrites the whole file through a temporary sibling that is
/// renamed into place, so a failed write leaves the previous contents intact.
pub(crate) struct JsonStore<T> {
    path: PathBuf,
    records: BTreeMap<String, T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Open the store at `path`. A missing file is an empty store.
    pub(crate) fn open(path: &Path) -> LedgerResult<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| LedgerError::Io {
                action: "create directory",
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let records = match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| LedgerError::Serde {
                    action: "parse",
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(LedgerError::Io {
                    action: "read",
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        tracing::debug!(path = %path.display(), records = records.len(), "opened store");
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub(crate) fn close(self) {
        tracing::debug!(path = %self.path.display(), "closed store");
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Insert or overwrite `id`, then persist.
    pub(crate) fn put(&mut self, id: &str, record: T) -> LedgerResult<()> {
        let previous = self.records.insert(id.to_string(), record);
        if let Err(e) = self.save() {
            match previous {
                Some(old) => self.records.insert(id.to_string(), old),
                None => self.records.remove(id),
            };
            return Err(e);
        }
        if previous.is_some() {
            tracing::warn!(id, "overwrote existing record");
        }
        Ok(())
    }

    pub(crate) fn get(&self, id: &str) -> LedgerResult<T> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    pub(crate) fn exists(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Remove `id` if present. Returns whether a record was removed.
    pub(crate) fn delete(&mut self, id: &str) -> LedgerResult<bool> {
        let Some(removed) = self.records.remove(id) else {
            tracing::debug!(id, "delete skipped, no such record");
            return Ok(false);
        };
        if let Err(e) = self.save() {
            self.records.insert(id.to_string(), removed);
            return Err(e);
        }
        Ok(true)
    }

    /// All stored ids. Callers that need an order must sort.
    pub(crate) fn keys(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn save(&self) -> LedgerResult<()> {
        let io_err = |action: &'static str| {
            let path = self.path.clone();
            move |source: std::io::Error| LedgerError::Io {
                action,
                path,
                source,
            }
        };

        let content =
            serde_json::to_string_pretty(&self.records).map_err(|source| LedgerError::Serde {
                action: "serialize",
                path: self.path.clone(),
                source,
            })?;

        let dir = match self.path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err("create temp file in"))?;
        tmp.write_all(content.as_bytes())
            .map_err(io_err("write"))?;
        tmp.as_file().sync_all().map_err(io_err("sync"))?;
        tmp.persist(&self.path)
            .map_err(|e| io_err("replace")(e.error))?;

        tracing::debug!(path = %self.path.display(), records = self.records.len(), "saved store");
        Ok(())
    }
}
