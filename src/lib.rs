//! Bingo card generation with themed rendering and batch PNG export
//!
//! Cards are filled from a shuffled pool of numbers, words or images, with an
//! optional free space at the center of odd grids. A card set is rendered in
//! two phases (layout, then paint at a pixel scale) and exported card by card
//! into a single ZIP archive, with progress reporting and per-card failure
//! handling.

#![forbid(unsafe_code)]

/// Cells, cards, card sets and grid sizes
pub mod card;
/// Batch export pipeline, rasterizers, archives and sinks
pub mod export;
/// Pool construction, shuffling and card generation
pub mod generator;
/// Input/output operations, configuration and error handling
pub mod io;
/// Card layout, painting, themes and print sheets
pub mod render;
/// Owned application state with regeneration triggers
pub mod session;

pub use io::error::{BingoError, Result};
