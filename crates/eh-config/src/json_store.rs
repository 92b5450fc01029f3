//! JSON file backed gallery store
//!
//! Holds everything in a [`MemoryStore`] and rewrites the file after every
//! successful write. The snapshot goes to a sibling `.tmp` file first and is
//! renamed over the store file, so a failed write never truncates it.

use anyhow::{Context, Result};
use eh_client::{AppEnv, Gallery, GalleryDetail, GalleryState};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::memory_store::{MemoryStore, StoreSnapshot};
use crate::persistence::{Persistence, PersistenceError};

pub struct JsonFileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file: {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse store file: {:?}", path))?
        } else {
            log::info!("No store file at {:?}, starting empty", path);
            StoreSnapshot::default()
        };

        Ok(Self {
            path,
            memory: MemoryStore::from_snapshot(snapshot),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn flush(&self) -> Result<(), PersistenceError> {
        let snapshot = self.memory.snapshot()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        let mut writer = BufWriter::new(File::create(&temp)?);
        serde_json::to_writer(&mut writer, &snapshot)?;
        writer.flush()?;
        drop(writer);

        fs::rename(&temp, &self.path)?;
        log::trace!("Flushed store to {:?}", self.path);
        Ok(())
    }
}

impl Persistence for JsonFileStore {
    fn add_galleries(&self, galleries: &[Gallery]) -> Result<(), PersistenceError> {
        self.memory.add_galleries(galleries)?;
        self.flush()
    }

    fn fetch_gallery(&self, gid: &str) -> Result<Option<Gallery>, PersistenceError> {
        self.memory.fetch_gallery(gid)
    }

    fn add_detail(&self, detail: &GalleryDetail) -> Result<(), PersistenceError> {
        self.memory.add_detail(detail)?;
        self.flush()
    }

    fn fetch_detail(&self, gid: &str) -> Result<Option<GalleryDetail>, PersistenceError> {
        self.memory.fetch_detail(gid)
    }

    fn update_fetched_state(&self, state: &GalleryState) -> Result<(), PersistenceError> {
        self.memory.update_fetched_state(state)?;
        self.flush()
    }

    fn update_contents(
        &self,
        gid: &str,
        contents: &BTreeMap<u32, String>,
    ) -> Result<(), PersistenceError> {
        self.memory.update_contents(gid, contents)?;
        self.flush()
    }

    fn update_reading_progress(&self, gid: &str, progress: u32) -> Result<(), PersistenceError> {
        self.memory.update_reading_progress(gid, progress)?;
        self.flush()
    }

    fn fetch_gallery_state_non_nil(&self, gid: &str) -> Result<GalleryState, PersistenceError> {
        self.memory.fetch_gallery_state_non_nil(gid)
    }

    fn fetch_app_env(&self) -> Result<AppEnv, PersistenceError> {
        self.memory.fetch_app_env()
    }

    fn update_app_env(&self, env: &AppEnv) -> Result<(), PersistenceError> {
        self.memory.update_app_env(env)?;
        self.flush()
    }
}
