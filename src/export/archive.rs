//! Archive writers collecting rasterized cards into a single blob

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::io::error::Result;

/// Accumulates named entries and produces the finished archive bytes
pub trait ArchiveWriter {
    /// Append an entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Names of the entries added so far, in order
    fn entry_names(&self) -> &[String];

    /// Finalize the archive into a blob
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be finalized
    fn finish(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}

/// ZIP archive held in memory
///
/// PNG data is already compressed, so entries are stored without
/// recompression.
pub struct ZipArchiveWriter {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    names: Vec<String>,
}

impl ZipArchiveWriter {
    /// Empty archive
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            names: Vec::new(),
        }
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    }
}

impl Default for ZipArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveWriter for ZipArchiveWriter {
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.writer.start_file(name, Self::options())?;
        self.writer
            .write_all(bytes)
            .map_err(zip::result::ZipError::Io)?;
        self.names.push(name.to_string());
        Ok(())
    }

    fn entry_names(&self) -> &[String] {
        &self.names
    }

    fn finish(self) -> Result<Vec<u8>> {
        Ok(self.writer.finish()?.into_inner())
    }
}
