//! Uploaded image library backing images mode

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::card::{ContentItem, ImageRef};
use crate::generator::shuffle::CardRng;
use crate::io::configuration::ITEM_ID_LENGTH;
use crate::io::error::{BingoError, Result, file_system_error};

/// Outcome of importing a batch of files
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Ids of the items added, in completion order
    pub added: Vec<String>,
    /// Files that could not be imported
    pub rejected: Vec<BingoError>,
}

/// Ordered collection of uploaded images
///
/// Items keep their insertion order and are never deduplicated.
#[derive(Debug)]
pub struct ContentLibrary {
    items: Vec<ImageRef>,
    ids: CardRng,
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentLibrary {
    /// Empty library with entropy-seeded ids
    pub fn new() -> Self {
        Self::with_rng(CardRng::from_entropy())
    }

    /// Empty library drawing ids from the given source
    pub const fn with_rng(ids: CardRng) -> Self {
        Self {
            items: Vec::new(),
            ids,
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[ImageRef] {
        &self.items
    }

    /// Items wrapped as pool content
    pub fn pool(&self) -> Vec<ContentItem> {
        self.items.iter().cloned().map(ContentItem::Image).collect()
    }

    /// Add encoded image bytes under a display name, returning the new id
    pub fn push(&mut self, name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> String {
        let id = self.ids.token(ITEM_ID_LENGTH);
        self.items.push(ImageRef::new(id.clone(), name, bytes));
        id
    }

    /// Remove the item with an id; returns whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read and sniff files concurrently, one scoped thread per file
    ///
    /// Readable images are appended as their threads finish, so the append
    /// order may differ from the argument order. Unreadable or non-image
    /// files are reported in [`ImportReport::rejected`] and do not stop the
    /// others.
    pub fn import_files(&mut self, paths: &[PathBuf]) -> ImportReport {
        let (sender, receiver) = mpsc::channel();
        thread::scope(|scope| {
            for path in paths {
                let sender = sender.clone();
                scope.spawn(move || {
                    // The receiver outlives the scope
                    sender.send(read_image(path)).ok();
                });
            }
        });
        drop(sender);

        let mut report = ImportReport::default();
        for outcome in receiver {
            match outcome {
                Ok((name, bytes)) => report.added.push(self.push(name, bytes)),
                Err(error) => report.rejected.push(error),
            }
        }
        report
    }
}

fn read_image(path: &Path) -> Result<(String, Vec<u8>)> {
    let bytes = fs::read(path).map_err(|e| file_system_error(path, "read image", e))?;
    if image::guess_format(&bytes).is_err() {
        return Err(BingoError::UnsupportedImage {
            path: path.to_path_buf(),
        });
    }
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    Ok((name, bytes))
}
