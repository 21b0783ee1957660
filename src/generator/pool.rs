//! Content pool construction for numbers, words and images modes

use std::fmt;
use std::str::FromStr;

use crate::card::{ContentItem, ImageRef};
use crate::io::configuration::{DEFAULT_NUMBER_MAX, DEFAULT_NUMBER_MIN, MAX_POOL_SIZE};
use crate::io::error::{BingoError, Result, invalid_parameter};

/// Where card content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentMode {
    /// Consecutive integers from a closed range
    #[default]
    Numbers,
    /// Newline-separated word list
    Words,
    /// Uploaded image library
    Images,
}

impl FromStr for ContentMode {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numbers" => Ok(Self::Numbers),
            "words" => Ok(Self::Words),
            "images" => Ok(Self::Images),
            other => Err(invalid_parameter(
                "mode",
                &other,
                &"expected numbers, words or images",
            )),
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numbers => write!(f, "numbers"),
            Self::Words => write!(f, "words"),
            Self::Images => write!(f, "images"),
        }
    }
}

/// Closed integer range for numbers mode
///
/// A range with `min > max` is accepted and simply yields an empty pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberRange {
    /// Smallest number, inclusive
    pub min: i64,
    /// Largest number, inclusive
    pub max: i64,
}

impl NumberRange {
    /// Create a range; no ordering is enforced
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Number of values in the range (zero when `min > max`)
    pub const fn len(&self) -> u64 {
        if self.min > self.max {
            0
        } else {
            self.max.abs_diff(self.min).saturating_add(1)
        }
    }

    /// Whether the range holds no values
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Check the range fits in a pool
    ///
    /// # Errors
    ///
    /// Returns an error if the range holds more than 10 000 values
    pub fn validate(&self) -> Result<()> {
        if self.len() > MAX_POOL_SIZE {
            return Err(invalid_parameter(
                "range",
                &format!("{}..={}", self.min, self.max),
                &format!("at most {MAX_POOL_SIZE} numbers"),
            ));
        }
        Ok(())
    }

    /// Every value in the range as a decimal text item
    ///
    /// Oversized ranges stop after the first 10 000 values.
    pub fn pool(&self) -> Vec<ContentItem> {
        (self.min..=self.max)
            .take(MAX_POOL_SIZE as usize)
            .map(|n| ContentItem::Text(n.to_string()))
            .collect()
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self::new(DEFAULT_NUMBER_MIN, DEFAULT_NUMBER_MAX)
    }
}

/// Split raw word-list input into trimmed, non-empty entries
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the pool for the active content mode
///
/// Only the source matching `mode` is read; the others are ignored.
pub fn build_pool(
    mode: ContentMode,
    range: NumberRange,
    word_list: &str,
    images: &[ImageRef],
) -> Vec<ContentItem> {
    match mode {
        ContentMode::Numbers => range.pool(),
        ContentMode::Words => parse_word_list(word_list)
            .into_iter()
            .map(ContentItem::Text)
            .collect(),
        ContentMode::Images => images.iter().cloned().map(ContentItem::Image).collect(),
    }
}
