//! Terminal progress display for batch exports

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::export::pipeline::{ExportObserver, ExportState};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::error::BingoError;

static EXPORT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos:>3}}%"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar following an export from 0 to 100 %
///
/// Hidden managers swallow every update, which keeps `--quiet` runs silent
/// without branching at each call site.
pub struct ProgressManager {
    bar: ProgressBar,
    skipped: usize,
}

impl ProgressManager {
    /// Visible progress bar for an export of `cards` cards
    pub fn new(cards: usize) -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(EXPORT_STYLE.clone());
        bar.set_message(format!("Exporting {cards} cards"));
        Self { bar, skipped: 0 }
    }

    /// Manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            skipped: 0,
        }
    }

    /// Print a status line above the bar
    pub fn status(&self, message: &str) {
        if !self.bar.is_hidden() {
            self.bar.println(message);
        }
    }

    /// Cards skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Current bar position in percent
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ExportObserver for ProgressManager {
    fn state_changed(&mut self, state: ExportState) {
        match state {
            ExportState::Running(percent) => self.bar.set_position(u64::from(percent)),
            ExportState::Completed => self.bar.finish_with_message("Export complete"),
            ExportState::Idle | ExportState::Failed => {}
        }
    }

    fn progress(&mut self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }

    fn card_skipped(&mut self, index: usize, error: &BingoError) {
        self.skipped += 1;
        self.status(&format!("Skipped card {}: {error}", index + 1));
    }

    fn failed(&mut self, error: &BingoError) {
        self.bar.abandon_with_message(format!("Export failed: {error}"));
    }
}
