/// Pool content items and card cells
pub mod cell;
/// Grid sizes, cards and card sets
pub mod grid;

pub use cell::{Cell, ContentItem, ImageRef};
pub use grid::{Card, CardSet, GridSize};
