//! Sequential batch export of a card set into one archive
//!
//! Every card goes through render, settle, rasterize, archive and release
//! before the next one starts. Progress is reported after each card. The
//! archive is finalized and handed to the sink only when the run succeeds.

use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::card::{Card, CardSet};
use crate::export::archive::{ArchiveWriter, ZipArchiveWriter};
use crate::export::raster::{Rasterizer, SettlePolicy};
use crate::export::sink::SaveSink;
use crate::io::configuration::{
    DEFAULT_RASTER_ATTEMPTS, EXPORT_SCALE, EXPORT_WIDTH, MAX_EXPORT_SCALE, MAX_EXPORT_WIDTH,
    archive_file_name, card_entry_name,
};
use crate::io::error::{BingoError, Result, invalid_parameter, rasterize_error};
use crate::render::scene::CardStyle;

/// Exporter lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    /// No export in flight
    #[default]
    Idle,
    /// Export in flight with its last reported percentage
    Running(u8),
    /// Archive saved
    Completed,
    /// Export aborted
    Failed,
}

/// What to do when a single card cannot be rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the export, save nothing
    #[default]
    Abort,
    /// Skip the card and keep going
    Isolate,
}

/// Receives export lifecycle notifications
pub trait ExportObserver {
    /// Exporter changed state
    fn state_changed(&mut self, _state: ExportState) {}

    /// A card finished, `percent` of the set is done
    fn progress(&mut self, _percent: u8) {}

    /// A card was skipped under [`FailurePolicy::Isolate`]
    fn card_skipped(&mut self, _index: usize, _error: &BingoError) {}

    /// The export failed; called once per failed run
    fn failed(&mut self, _error: &BingoError) {}
}

impl ExportObserver for () {}

/// Shared flag stopping an export before its next card
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Export tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Logical width of the off-screen root
    pub width: u32,
    /// Rasterization upscale factor
    pub scale: u32,
    /// Wait between render and rasterize
    pub settle: SettlePolicy,
    /// Rasterization attempts per card
    pub attempts: u32,
    /// Per-card failure handling
    pub policy: FailurePolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: EXPORT_WIDTH,
            scale: EXPORT_SCALE,
            settle: SettlePolicy::Immediate,
            attempts: DEFAULT_RASTER_ATTEMPTS,
            policy: FailurePolicy::Abort,
        }
    }
}

impl ExportOptions {
    /// Check the options before an export starts
    ///
    /// # Errors
    ///
    /// Returns an error for a width outside `1..=4096`, a scale outside
    /// `1..=8` or zero attempts
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_EXPORT_WIDTH).contains(&self.width) {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("must be between 1 and {MAX_EXPORT_WIDTH}"),
            ));
        }
        if !(1..=MAX_EXPORT_SCALE).contains(&self.scale) {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &format!("must be between 1 and {MAX_EXPORT_SCALE}"),
            ));
        }
        if self.attempts == 0 {
            return Err(invalid_parameter("attempts", &self.attempts, &"must be at least 1"));
        }
        Ok(())
    }
}

/// Card skipped during an isolating export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFailure {
    /// Zero-based card index
    pub index: usize,
    /// Failure description
    pub reason: String,
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Name the archive was saved under
    pub archive_name: String,
    /// Archive entry names in order
    pub entries: Vec<String>,
    /// Zero-based indices of exported cards
    pub succeeded: Vec<usize>,
    /// Cards skipped under [`FailurePolicy::Isolate`]
    pub failed: Vec<CardFailure>,
}

/// Closes the root when dropped, on every exit path
struct RootGuard<'a, R: Rasterizer> {
    rasterizer: &'a mut R,
}

impl<'a, R: Rasterizer> RootGuard<'a, R> {
    fn open(rasterizer: &'a mut R, width: u32) -> Result<Self> {
        rasterizer.open_root(width)?;
        Ok(Self { rasterizer })
    }
}

impl<R: Rasterizer> Deref for RootGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rasterizer
    }
}

impl<R: Rasterizer> DerefMut for RootGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rasterizer
    }
}

impl<R: Rasterizer> Drop for RootGuard<'_, R> {
    fn drop(&mut self) {
        self.rasterizer.close_root();
    }
}

/// Percentage done after `completed` of `total` cards, rounded up
pub const fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = (100 * completed).div_ceil(total);
    if percent > 100 { 100 } else { percent as u8 }
}

/// Drives a rasterizer over a card set and saves the resulting archive
///
/// `export` takes `&mut self`, so one exporter never runs two exports at
/// once.
pub struct BatchExporter<R, S, A = ZipArchiveWriter> {
    rasterizer: R,
    sink: S,
    options: ExportOptions,
    state: ExportState,
    archive: PhantomData<A>,
}

impl<R, S, A> BatchExporter<R, S, A>
where
    R: Rasterizer,
    S: SaveSink,
    A: ArchiveWriter + Default,
{
    /// Exporter with default options
    pub fn new(rasterizer: R, sink: S) -> Self {
        Self::with_options(rasterizer, sink, ExportOptions::default())
    }

    /// Exporter with explicit options
    pub const fn with_options(rasterizer: R, sink: S, options: ExportOptions) -> Self {
        Self {
            rasterizer,
            sink,
            options,
            state: ExportState::Idle,
            archive: PhantomData,
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> ExportState {
        self.state
    }

    /// Options in effect
    pub const fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Rasterizer in use
    pub const fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Sink receiving archives
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Split the exporter back into its parts
    pub fn into_parts(self) -> (R, S) {
        (self.rasterizer, self.sink)
    }

    /// Export every card of the set into one archive and save it
    ///
    /// The observer sees `Running(0)`, a progress call after each card, then
    /// `Completed` or `Failed`, and finally `Idle`. On failure nothing is
    /// saved and `failed` is called exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first card failure under [`FailurePolicy::Abort`],
    /// [`BingoError::NothingExported`] when no card succeeded,
    /// [`BingoError::Cancelled`] when the token fired, or any archive or
    /// save error
    pub fn export(
        &mut self,
        cards: &CardSet,
        style: &CardStyle,
        observer: &mut impl ExportObserver,
        cancel: &CancellationToken,
    ) -> Result<ExportReport> {
        self.transition(ExportState::Running(0), observer);

        let outcome = self
            .options
            .validate()
            .and_then(|()| self.run(cards, style, observer, cancel));

        match &outcome {
            Ok(_) => self.transition(ExportState::Completed, observer),
            Err(error) => {
                observer.failed(error);
                self.transition(ExportState::Failed, observer);
            }
        }
        self.transition(ExportState::Idle, observer);
        outcome
    }

    fn transition(&mut self, state: ExportState, observer: &mut impl ExportObserver) {
        self.state = state;
        observer.state_changed(state);
    }

    fn run(
        &mut self,
        cards: &CardSet,
        style: &CardStyle,
        observer: &mut impl ExportObserver,
        cancel: &CancellationToken,
    ) -> Result<ExportReport> {
        let total = cards.len();
        if total == 0 {
            return Err(BingoError::NothingExported { failed: 0 });
        }

        let Self {
            rasterizer,
            sink,
            options,
            state,
            ..
        } = self;
        let mut root = RootGuard::open(rasterizer, options.width)?;
        let mut archive = A::default();
        let mut succeeded = Vec::with_capacity(total);
        let mut failed = Vec::new();

        for (index, card) in cards.iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(BingoError::Cancelled {
                    completed: index,
                    total,
                });
            }

            match capture_card(&mut *root, card, style, index, options) {
                Ok(bytes) => {
                    archive.add_entry(&card_entry_name(index), &bytes)?;
                    succeeded.push(index);
                }
                Err(error) if options.policy == FailurePolicy::Isolate && error.is_card_local() => {
                    observer.card_skipped(index, &error);
                    failed.push(CardFailure {
                        index,
                        reason: error.to_string(),
                    });
                }
                Err(error) => return Err(error),
            }

            let percent = progress_percent(index + 1, total);
            *state = ExportState::Running(percent);
            observer.progress(percent);
        }

        if succeeded.is_empty() {
            return Err(BingoError::NothingExported {
                failed: failed.len(),
            });
        }

        let entries = archive.entry_names().to_vec();
        let blob = archive.finish()?;
        let archive_name = archive_file_name(total);
        sink.save(&blob, &archive_name)?;

        Ok(ExportReport {
            archive_name,
            entries,
            succeeded,
            failed,
        })
    }
}

/// Render, settle and rasterize one card, always releasing its surface
fn capture_card<R: Rasterizer>(
    rasterizer: &mut R,
    card: &Card,
    style: &CardStyle,
    index: usize,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let surface = rasterizer
        .render(card, style)
        .map_err(|e| card_error(index, e))?;

    let captured = rasterizer
        .settle(&surface, options.settle)
        .and_then(|()| {
            let mut last = None;
            for _ in 0..options.attempts {
                match rasterizer.rasterize(&surface, options.scale) {
                    Ok(bytes) => return Ok(bytes),
                    Err(error) => last = Some(error),
                }
            }
            Err(last.unwrap_or_else(|| rasterize_error(index + 1, &"no attempts made")))
        })
        .map_err(|e| card_error(index, e));

    rasterizer.release(surface);
    captured
}

// Card-local errors are reported against the card's one-based number.
fn card_error(index: usize, error: BingoError) -> BingoError {
    match error {
        BingoError::Rasterize { .. } => error,
        other if other.is_card_local() => rasterize_error(index + 1, &other),
        other => other,
    }
}
