//! Pool content and card cell types

use std::fmt;
use std::sync::Arc;

/// Uploaded image shared between the pool and every card that shows it
///
/// Cloning is cheap: the encoded bytes sit behind an `Arc`, so copying a
/// pool snapshot never duplicates image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    id: String,
    name: String,
    bytes: Arc<[u8]>,
}

impl ImageRef {
    /// Create an image reference from its id, display name and encoded bytes
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Stable identifier assigned at upload
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, usually the uploaded file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoded image data (PNG, JPEG, ...)
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A unit of card content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// Number or word, kept exactly as entered
    Text(String),
    /// Uploaded image
    Image(ImageRef),
}

impl ContentItem {
    /// Text item from anything string-like
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Short human-readable label (the text itself or the image name)
    pub fn label(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Image(image) => image.name(),
        }
    }
}

impl From<&str> for ContentItem {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ContentItem {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ImageRef> for ContentItem {
    fn from(value: ImageRef) -> Self {
        Self::Image(value)
    }
}

/// One position on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Text token drawn from the pool
    Text(String),
    /// Image drawn from the pool
    Image(ImageRef),
    /// Center free space carrying its label
    FreeSpace(String),
    /// Pool ran out before this cell was reached
    Empty,
}

impl Cell {
    /// Whether this cell is the free-space marker
    pub const fn is_free_space(&self) -> bool {
        matches!(self, Self::FreeSpace(_))
    }

    /// Whether this cell was left empty by pool exhaustion
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Pool content held by this cell, if any
    pub fn content(&self) -> Option<ContentItem> {
        match self {
            Self::Text(text) => Some(ContentItem::Text(text.clone())),
            Self::Image(image) => Some(ContentItem::Image(image.clone())),
            Self::FreeSpace(_) | Self::Empty => None,
        }
    }
}

impl From<ContentItem> for Cell {
    fn from(item: ContentItem) -> Self {
        match item {
            ContentItem::Text(text) => Self::Text(text),
            ContentItem::Image(image) => Self::Image(image),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Image(image) => write!(f, "[{}]", image.name()),
            Self::FreeSpace(label) => write!(f, "*{label}*"),
            Self::Empty => write!(f, "-"),
        }
    }
}
