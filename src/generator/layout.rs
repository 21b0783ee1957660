//! Card layout generation
//!
//! A card is filled left to right from a shuffled snapshot of the pool. The
//! center of an odd grid holds the free-space label when free space is on;
//! cells past the end of the pool stay empty.

use crate::card::{Card, CardSet, Cell, ContentItem, GridSize};
use crate::generator::shuffle::{CardRng, shuffled};
use crate::io::configuration::DEFAULT_FREE_SPACE_LABEL;

/// Free-space placement rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSpace {
    /// Whether odd grids reserve their center cell
    pub enabled: bool,
    /// Text shown on the reserved cell
    pub label: String,
}

impl FreeSpace {
    /// Free space enabled with the given label
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            enabled: true,
            label: label.into(),
        }
    }

    /// No reserved cell
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            label: DEFAULT_FREE_SPACE_LABEL.to_string(),
        }
    }

    /// Index of the reserved cell for a grid, if any
    pub const fn center_for(&self, grid: GridSize) -> Option<usize> {
        if self.enabled { grid.center_index() } else { None }
    }

    /// Cells that draw from the pool on a grid
    pub const fn cells_to_fill(&self, grid: GridSize) -> usize {
        match self.center_for(grid) {
            Some(_) => grid.cell_count() - 1,
            None => grid.cell_count(),
        }
    }
}

impl Default for FreeSpace {
    fn default() -> Self {
        Self::enabled(DEFAULT_FREE_SPACE_LABEL)
    }
}

/// Generate one card from a pool
///
/// The pool is copied before shuffling, so callers may keep mutating their
/// own collection. An empty pool yields a card of empty cells (plus the
/// free space when applicable).
pub fn generate_card(
    grid: GridSize,
    pool: &[ContentItem],
    free_space: &FreeSpace,
    rng: &mut CardRng,
) -> Card {
    let center = free_space.center_for(grid);
    let mut drawn = shuffled(pool, rng).into_iter();

    let cells = (0..grid.cell_count())
        .map(|index| {
            if Some(index) == center {
                Cell::FreeSpace(free_space.label.clone())
            } else {
                drawn.next().map_or(Cell::Empty, Cell::from)
            }
        })
        .collect();

    Card::from_generated(grid, cells)
}

/// Generate `count` independently shuffled cards
///
/// Cards may repeat content between each other; uniqueness only holds
/// within a single card.
pub fn generate_card_set(
    count: usize,
    grid: GridSize,
    pool: &[ContentItem],
    free_space: &FreeSpace,
    rng: &mut CardRng,
) -> CardSet {
    let cards = (0..count)
        .map(|_| generate_card(grid, pool, free_space, rng))
        .collect();
    CardSet::from_generated(grid, cards)
}
