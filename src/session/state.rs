//! Owned application state with regeneration triggers

use std::path::PathBuf;
use std::sync::Arc;

use crate::card::{CardSet, ContentItem, GridSize};
use crate::export::archive::ArchiveWriter;
use crate::export::pipeline::{BatchExporter, CancellationToken, ExportObserver, ExportReport};
use crate::export::raster::Rasterizer;
use crate::export::sink::SaveSink;
use crate::generator::layout::{FreeSpace, generate_card_set};
use crate::generator::pool::{ContentMode, NumberRange, build_pool};
use crate::generator::shuffle::CardRng;
use crate::io::configuration::{DEFAULT_CARD_COUNT, MAX_CARD_COUNT, MIN_CARD_COUNT};
use crate::io::error::{BingoError, Result, invalid_parameter};
use crate::render::scene::{CardStyle, Scene};
use crate::render::sheet::{card_pages, lottery_pages};
use crate::render::theme::{CenterIcon, Theme};
use crate::session::library::{ContentLibrary, ImportReport};

/// Number of cards in a set, always within `1..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardCount(usize);

impl CardCount {
    /// Validate a card count
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is outside `1..=100`
    pub fn new(count: usize) -> Result<Self> {
        if (MIN_CARD_COUNT..=MAX_CARD_COUNT).contains(&count) {
            Ok(Self(count))
        } else {
            Err(invalid_parameter(
                "count",
                &count,
                &format!("must be between {MIN_CARD_COUNT} and {MAX_CARD_COUNT}"),
            ))
        }
    }

    /// The count
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for CardCount {
    fn default() -> Self {
        Self(DEFAULT_CARD_COUNT)
    }
}

impl TryFrom<usize> for CardCount {
    type Error = BingoError;

    fn try_from(count: usize) -> Result<Self> {
        Self::new(count)
    }
}

/// Everything needed to generate, display and export one card set
///
/// Setters that change what goes on the cards regenerate the set, but only
/// when the value actually changes. Presentation setters (title, theme,
/// icon) leave the cards alone.
#[derive(Debug)]
pub struct Session {
    grid: GridSize,
    mode: ContentMode,
    range: NumberRange,
    word_list: String,
    free_space: FreeSpace,
    count: CardCount,
    style: CardStyle,
    library: ContentLibrary,
    rng: CardRng,
    cards: CardSet,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Session {
    /// Session with default settings and a freshly generated set
    ///
    /// A seed makes every generated set reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let library = seed.map_or_else(ContentLibrary::new, |seed| {
            ContentLibrary::with_rng(CardRng::seeded(seed.wrapping_add(1)))
        });
        let grid = GridSize::default();
        let mut session = Self {
            grid,
            mode: ContentMode::default(),
            range: NumberRange::default(),
            word_list: String::new(),
            free_space: FreeSpace::default(),
            count: CardCount::default(),
            style: CardStyle::default(),
            library,
            rng: CardRng::from_seed_option(seed),
            cards: CardSet::empty(grid),
            generation: 0,
        };
        session.regenerate();
        session
    }

    /// Replace the card set with a freshly generated one
    pub fn regenerate(&mut self) {
        let pool = self.pool();
        self.cards = generate_card_set(
            self.count.get(),
            self.grid,
            &pool,
            &self.free_space,
            &mut self.rng,
        );
        self.generation += 1;
    }

    /// Pool for the active content mode
    pub fn pool(&self) -> Vec<ContentItem> {
        build_pool(self.mode, self.range, &self.word_list, self.library.items())
    }

    /// Current card set
    pub const fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// How many sets have been generated so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid size
    pub const fn grid(&self) -> GridSize {
        self.grid
    }

    /// Content mode
    pub const fn mode(&self) -> ContentMode {
        self.mode
    }

    /// Numbers-mode range
    pub const fn range(&self) -> NumberRange {
        self.range
    }

    /// Raw word list as entered
    pub fn word_list(&self) -> &str {
        &self.word_list
    }

    /// Free-space rule
    pub const fn free_space(&self) -> &FreeSpace {
        &self.free_space
    }

    /// Cards per set
    pub const fn card_count(&self) -> CardCount {
        self.count
    }

    /// Presentation settings
    pub const fn style(&self) -> &CardStyle {
        &self.style
    }

    /// Uploaded images
    pub const fn library(&self) -> &ContentLibrary {
        &self.library
    }

    /// Change the grid size
    pub fn set_grid_size(&mut self, grid: GridSize) {
        if self.grid != grid {
            self.grid = grid;
            self.regenerate();
        }
    }

    /// Change the content mode
    pub fn set_content_mode(&mut self, mode: ContentMode) {
        if self.mode != mode {
            self.mode = mode;
            self.regenerate();
        }
    }

    /// Change the numbers-mode range
    ///
    /// # Errors
    ///
    /// Returns an error if the range holds more than 10 000 values
    pub fn set_number_range(&mut self, range: NumberRange) -> Result<()> {
        range.validate()?;
        if self.range != range {
            self.range = range;
            self.regenerate();
        }
        Ok(())
    }

    /// Replace the raw word list
    pub fn set_word_list(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        if self.word_list != raw {
            self.word_list = raw;
            self.regenerate();
        }
    }

    /// Change the free-space rule
    pub fn set_free_space(&mut self, free_space: FreeSpace) {
        if self.free_space != free_space {
            self.free_space = free_space;
            self.regenerate();
        }
    }

    /// Change the number of cards per set
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is outside `1..=100`
    pub fn set_card_count(&mut self, count: usize) -> Result<()> {
        let count = CardCount::new(count)?;
        if self.count != count {
            self.count = count;
            self.regenerate();
        }
        Ok(())
    }

    /// Change the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.style.title = title.into();
    }

    /// Change the theme
    pub const fn set_theme(&mut self, theme: Theme) {
        self.style.theme = theme;
    }

    /// Change the center icon
    pub const fn set_icon(&mut self, icon: CenterIcon) {
        self.style.icon = icon;
    }

    /// Add one image to the library
    pub fn add_image(&mut self, name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> String {
        let id = self.library.push(name, bytes);
        self.regenerate();
        id
    }

    /// Import image files into the library
    pub fn import_images(&mut self, paths: &[PathBuf]) -> ImportReport {
        let report = self.library.import_files(paths);
        if !report.added.is_empty() {
            self.regenerate();
        }
        report
    }

    /// Remove an image by id; returns whether one was removed
    pub fn remove_image(&mut self, id: &str) -> bool {
        let removed = self.library.remove(id);
        if removed {
            self.regenerate();
        }
        removed
    }

    /// Empty the image library
    pub fn clear_images(&mut self) {
        if !self.library.is_empty() {
            self.library.clear();
            self.regenerate();
        }
    }

    /// Export the current set with an exporter
    ///
    /// # Errors
    ///
    /// Returns any error from [`BatchExporter::export`]
    pub fn export<R, S, A>(
        &self,
        exporter: &mut BatchExporter<R, S, A>,
        observer: &mut impl ExportObserver,
        cancel: &CancellationToken,
    ) -> Result<ExportReport>
    where
        R: Rasterizer,
        S: SaveSink,
        A: ArchiveWriter + Default,
    {
        exporter.export(&self.cards, &self.style, observer, cancel)
    }

    /// Lottery call sheet pages for the active pool
    pub fn lottery_sheet(&self) -> Vec<Scene> {
        lottery_pages(&self.pool(), &self.style.title)
    }

    /// Printable pages of the current set
    pub fn card_sheet(&self) -> Vec<Scene> {
        card_pages(&self.cards, &self.style)
    }
}
