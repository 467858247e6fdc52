//! File-backed document store.
//!
//! The whole state lives in one JSON file. Every query reads the file in
//! full and every mutation rewrites it in full, so a single reader/writer
//! lock over the whole document is all the coordination needed:
//!
//! - `load` holds the read lock; loads run in parallel with each other.
//! - `save` and `update` hold the write lock and exclude everything else.
//! - Saves go through a temp file and `rename`, so the backing file is always
//!   either the previous or the new document.
//!
//! The lock only covers callers sharing one `Store`. Two processes pointed at
//! the same file are not coordinated.

use crate::models::Document;
use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no database file at {}", .0.display())]
    NotFound(PathBuf),

    #[error("database I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to decode database: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode database: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    // Guards the file, not memory: nothing is cached between calls.
    lock: RwLock<()>,
}

impl Store {
    /// Opens an existing database file. Fails with `NotFound` if there is none.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(StoreError::NotFound(path));
        }

        Ok(Self::at(path))
    }

    /// Opens the database file, writing an empty document first if it is absent.
    pub fn init(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if path.is_file() {
            return Ok(Self::at(path));
        }

        let store = Self::at(path);
        store.save(&Document::default())?;
        info!("Created empty database at {}", store.path.display());
        Ok(store)
    }

    fn at(path: PathBuf) -> Self {
        Self {
            path,
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> StoreResult<Document> {
        // The guarded value is `()`, so a poisoned lock has no torn state.
        let _guard = self.lock.read().unwrap_or_else(PoisonError::into_inner);
        self.read_document()
    }

    pub fn save(&self, doc: &Document) -> StoreResult<()> {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        self.write_document(doc)
    }

    /// Runs one read-modify-write cycle under a single write lock.
    ///
    /// The closure sees the current document and may mutate it. If it
    /// returns `Ok`, the document is saved; if it returns `Err`, nothing is
    /// written and the error is passed through.
    pub fn update<T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        let mut doc = self.read_document()?;
        let value = mutate(&mut doc)?;
        self.write_document(&doc)?;
        Ok(value)
    }

    fn read_document(&self) -> StoreResult<Document> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(self.path.clone()),
            _ => StoreError::Io(e),
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(StoreError::Decode)
    }

    fn write_document(&self, doc: &Document) -> StoreResult<()> {
        let data = serde_json::to_vec(doc).map_err(StoreError::Encode)?;
        let temp_path = self.temp_path();

        let result = write_and_sync(&temp_path, &data)
            .and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        // Make the rename itself durable.
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Ok(dir) = File::open(dir) {
                let _ = dir.sync_all();
            }
        }

        debug!(bytes = data.len(), "Saved database to {}", self.path.display());
        Ok(())
    }

    // Same directory as the target so the rename never crosses filesystems.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "database".to_string());
        self.path
            .with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4().simple()))
    }
}

fn write_and_sync(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(data)?;
    file.sync_all()
}
