//! Generation constants and runtime configuration defaults

use std::time::Duration;

// Card generation limits
/// Smallest number of cards a set may hold
pub const MIN_CARD_COUNT: usize = 1;
/// Largest number of cards a set may hold
pub const MAX_CARD_COUNT: usize = 100;
/// Cards generated when no count is given
pub const DEFAULT_CARD_COUNT: usize = 1;

// Default content
/// Card title printed in the header band
pub const DEFAULT_TITLE: &str = "BINGO";
/// Label placed on the center cell when free space is enabled
pub const DEFAULT_FREE_SPACE_LABEL: &str = "FREE";
/// Largest numbers-mode range, in values
pub const MAX_POOL_SIZE: u64 = 10_000;
/// Lower bound of the default numbers pool
pub const DEFAULT_NUMBER_MIN: i64 = 1;
/// Upper bound of the default numbers pool
pub const DEFAULT_NUMBER_MAX: i64 = 75;
/// Theme preset used when none is requested
pub const DEFAULT_THEME: &str = "indigo";

// Uploaded image identifiers
/// Length of generated image item ids
pub const ITEM_ID_LENGTH: usize = 9;

// Export pipeline
/// Logical width of the off-screen render surface in pixels
pub const EXPORT_WIDTH: u32 = 600;
/// Largest accepted logical width
pub const MAX_EXPORT_WIDTH: u32 = 4096;
/// Upscale factor applied when rasterizing for print quality
pub const EXPORT_SCALE: u32 = 2;
/// Largest accepted upscale factor
pub const MAX_EXPORT_SCALE: u32 = 8;
/// Settle delay used by the fixed-delay fallback policy
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(350);
/// Rasterization attempts per card before the card counts as failed
pub const DEFAULT_RASTER_ATTEMPTS: u32 = 1;
/// Product prefix for archive names
pub const PRODUCT_NAME: &str = "bingo-master";

// Print surfaces
/// Printed sheet resolution
pub const SHEET_DPI: u32 = 150;
/// A4 page width in millimetres
pub const A4_WIDTH_MM: u32 = 210;
/// A4 page height in millimetres
pub const A4_HEIGHT_MM: u32 = 297;
/// Columns on the lottery sheet
pub const LOTTERY_COLUMNS: usize = 6;
/// Cards printed per card-sheet page
pub const CARDS_PER_PAGE: usize = 2;
/// Offset added to card indices for printed card codes
pub const CARD_CODE_BASE: usize = 1000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Archive entry name for a zero-based card index
pub fn card_entry_name(index: usize) -> String {
    format!("card-{}.png", index + 1)
}

/// Archive file name for a set of `count` cards
pub fn archive_file_name(count: usize) -> String {
    format!("{PRODUCT_NAME}-{count}-cards.zip")
}

/// Printed code for a zero-based card index, e.g. `BNG-1000`
pub fn card_code(index: usize) -> String {
    format!("BNG-{}", CARD_CODE_BASE + index)
}
