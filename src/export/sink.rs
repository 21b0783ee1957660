//! Destinations for finished archives

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::error::{Result, file_system_error};

/// Receives the finished archive under its download name
pub trait SaveSink {
    /// Persist or hand off the blob
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be saved
    fn save(&mut self, blob: &[u8], filename: &str) -> Result<()>;
}

/// Writes archives into a directory, creating it on first save
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
    saved: Vec<PathBuf>,
}

impl DirectorySink {
    /// Sink writing into `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            saved: Vec::new(),
        }
    }

    /// Target directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Paths written so far
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }
}

impl SaveSink for DirectorySink {
    fn save(&mut self, blob: &[u8], filename: &str) -> Result<()> {
        fs::create_dir_all(&self.directory)
            .map_err(|e| file_system_error(&self.directory, "create directory", e))?;
        let path = self.directory.join(filename);
        fs::write(&path, blob).map_err(|e| file_system_error(&path, "write archive", e))?;
        self.saved.push(path);
        Ok(())
    }
}

/// Keeps saved blobs in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Saved `(filename, blob)` pairs in save order
    pub saved: Vec<(String, Vec<u8>)>,
}

impl SaveSink for MemorySink {
    fn save(&mut self, blob: &[u8], filename: &str) -> Result<()> {
        self.saved.push((filename.to_string(), blob.to_vec()));
        Ok(())
    }
}
