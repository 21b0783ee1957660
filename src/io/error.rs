//! Error types and context helpers for generation, rendering and export

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for all bingo operations
#[derive(Debug, Error)]
pub enum BingoError {
    /// Configuration value rejected at the boundary
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Image bytes attached to a pool item could not be decoded
    #[error("Failed to decode image '{name}': {source}")]
    ImageDecode {
        /// Display name of the pool item
        name: String,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Rendered card could not be encoded as PNG
    #[error("Failed to encode image: {source}")]
    ImageEncode {
        /// Underlying encoding error
        source: image::ImageError,
    },

    /// Uploaded file is not an image format we can read
    #[error("Unsupported image file '{}'", path.display())]
    UnsupportedImage {
        /// Path of the rejected file
        path: PathBuf,
    },

    /// Rendering or rasterizing a single card failed
    #[error("Failed to rasterize card {card}: {reason}")]
    Rasterize {
        /// One-based card number
        card: usize,
        /// Description of the failure
        reason: String,
    },

    /// Archive writer rejected an entry or could not be finalized
    #[error("Archive error: {source}")]
    Archive {
        /// Underlying archive error
        #[from]
        source: zip::result::ZipError,
    },

    /// Export finished without a single rasterized card
    #[error("Export produced no cards ({failed} failed)")]
    NothingExported {
        /// Number of cards that failed
        failed: usize,
    },

    /// Export stopped by its cancellation token
    #[error("Export cancelled after {completed} of {total} cards")]
    Cancelled {
        /// Cards processed before cancellation
        completed: usize,
        /// Cards requested
        total: usize,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl BingoError {
    /// Whether this error came from a single card and may be skipped under
    /// an isolating failure policy
    pub const fn is_card_local(&self) -> bool {
        matches!(
            self,
            Self::Rasterize { .. } | Self::ImageDecode { .. } | Self::ImageEncode { .. }
        )
    }
}

/// Convenience type alias for bingo results
pub type Result<T> = std::result::Result<T, BingoError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BingoError {
    BingoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a rasterization error for a one-based card number
pub fn rasterize_error(card: usize, reason: &impl ToString) -> BingoError {
    BingoError::Rasterize {
        card,
        reason: reason.to_string(),
    }
}

/// Create a file system error with the path and operation attached
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> BingoError {
    BingoError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
