//! Grid dimensions, single cards and card sets
//!
//! Cells are stored row-major. Odd grids have a center cell at index
//! `cells / 2`; even grids have none, so they never carry a free space.

use std::fmt;

use crate::card::cell::Cell;
use crate::io::error::{Result, invalid_parameter};

/// Supported card dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridSize {
    /// 3×3 card
    #[default]
    Three,
    /// 4×4 card
    Four,
    /// 5×5 card
    Five,
}

impl GridSize {
    /// All supported sizes in ascending order
    pub const ALL: [Self; 3] = [Self::Three, Self::Four, Self::Five];

    /// Cells per row and column
    pub const fn dimension(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Total number of cells on the card
    pub const fn cell_count(self) -> usize {
        self.dimension() * self.dimension()
    }

    /// Whether the grid has a middle cell
    pub const fn is_odd(self) -> bool {
        self.dimension() % 2 == 1
    }

    /// Index of the middle cell, present only for odd grids
    pub const fn center_index(self) -> Option<usize> {
        if self.is_odd() {
            Some(self.cell_count() / 2)
        } else {
            None
        }
    }
}

impl TryFrom<usize> for GridSize {
    type Error = crate::io::error::BingoError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(invalid_parameter(
                "grid",
                &other,
                &"grid size must be 3, 4 or 5",
            )),
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        write!(f, "{n}x{n}")
    }
}

/// A single bingo card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    grid: GridSize,
    cells: Vec<Cell>,
}

impl Card {
    /// Build a card from row-major cells
    ///
    /// # Errors
    ///
    /// Returns an error if the number of cells does not match the grid size
    pub fn new(grid: GridSize, cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != grid.cell_count() {
            return Err(invalid_parameter(
                "cells",
                &cells.len(),
                &format!("a {grid} card needs exactly {} cells", grid.cell_count()),
            ));
        }
        Ok(Self { grid, cells })
    }

    // Generator output always has `grid.cell_count()` cells.
    pub(crate) const fn from_generated(grid: GridSize, cells: Vec<Cell>) -> Self {
        Self { grid, cells }
    }

    /// Grid dimensions of this card
    pub const fn grid(&self) -> GridSize {
        self.grid
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a row and column, if in range
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        let n = self.grid.dimension();
        if row >= n || col >= n {
            return None;
        }
        self.cells.get(row * n + col)
    }

    /// Iterate over rows of cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.grid.dimension())
    }

    /// Number of cells left empty by pool exhaustion
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.to_string().chars().count())
            .max()
            .unwrap_or(1);
        for row in self.rows() {
            let line = row
                .iter()
                .map(|cell| format!("{:^width$}", cell.to_string()))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Ordered cards produced by one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet {
    grid: GridSize,
    cards: Vec<Card>,
}

impl CardSet {
    /// Empty set for a grid size
    pub const fn empty(grid: GridSize) -> Self {
        Self {
            grid,
            cards: Vec::new(),
        }
    }

    pub(crate) const fn from_generated(grid: GridSize, cards: Vec<Card>) -> Self {
        Self { grid, cards }
    }

    /// Grid dimensions shared by every card
    pub const fn grid(&self) -> GridSize {
        self.grid
    }

    /// Cards in generation order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the set has no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a zero-based position
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Append a card
    ///
    /// # Errors
    ///
    /// Returns an error if the card's grid differs from the set's grid
    pub fn push(&mut self, card: Card) -> Result<()> {
        if card.grid() != self.grid {
            return Err(invalid_parameter(
                "card",
                &card.grid(),
                &format!("set holds {} cards", self.grid),
            ));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Iterate over cards
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
