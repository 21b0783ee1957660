//! Command-line interface: preview, export and print card sets

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::card::GridSize;
use crate::export::pipeline::{
    BatchExporter, CancellationToken, ExportOptions, ExportReport, FailurePolicy,
};
use crate::export::raster::{ImageRasterizer, SettlePolicy};
use crate::export::sink::DirectorySink;
use crate::generator::layout::FreeSpace;
use crate::generator::pool::{ContentMode, NumberRange};
use crate::io::configuration::{
    DEFAULT_CARD_COUNT, DEFAULT_FREE_SPACE_LABEL, DEFAULT_NUMBER_MAX, DEFAULT_NUMBER_MIN,
    DEFAULT_RASTER_ATTEMPTS, DEFAULT_THEME, DEFAULT_TITLE, EXPORT_SCALE, EXPORT_WIDTH, card_code,
};
use crate::io::error::{Result, file_system_error};
use crate::io::progress::ProgressManager;
use crate::render::sheet::render_pages;
use crate::render::theme::{CenterIcon, Theme, parse_hex_color};
use crate::session::state::Session;

#[derive(Parser)]
#[command(name = "bingo-master")]
#[command(author, version, about = "Generate bingo cards and export them as PNG archives")]
/// Command-line arguments for the bingo card tool
pub struct Cli {
    /// Action to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Print generated cards as text grids
    Preview(CardArgs),
    /// Render every card to PNG and save them as one ZIP archive
    Export(ExportArgs),
    /// Write printable A4 sheets as PNG pages
    Print(PrintArgs),
}

/// Options shared by every subcommand
#[derive(Args)]
// Independent on/off switches map one-to-one onto command-line flags
#[allow(clippy::struct_excessive_bools)]
pub struct CardArgs {
    /// Grid dimension: 3, 4 or 5
    #[arg(short, long, default_value_t = 3)]
    pub grid: usize,

    /// Content source: numbers, words or images
    #[arg(short, long, default_value_t = ContentMode::Numbers)]
    pub mode: ContentMode,

    /// Smallest number in numbers mode
    #[arg(long, default_value_t = DEFAULT_NUMBER_MIN, allow_hyphen_values = true)]
    pub min: i64,

    /// Largest number in numbers mode
    #[arg(long, default_value_t = DEFAULT_NUMBER_MAX, allow_hyphen_values = true)]
    pub max: i64,

    /// Newline-separated word list for words mode
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Image files for images mode
    #[arg(short, long, value_name = "PATH", num_args = 1..)]
    pub images: Vec<PathBuf>,

    /// Number of cards to generate (1-100)
    #[arg(short, long, default_value_t = DEFAULT_CARD_COUNT)]
    pub count: usize,

    /// Title printed in the header band
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Label of the free-space cell
    #[arg(long, default_value = DEFAULT_FREE_SPACE_LABEL)]
    pub free_label: String,

    /// Fill the center cell from the pool instead of a free space
    #[arg(long)]
    pub no_free_space: bool,

    /// Center icon: none, star, heart or trophy
    #[arg(long, default_value_t = CenterIcon::None)]
    pub icon: CenterIcon,

    /// Theme preset: indigo, baby-pink, emerald, sunset or dark-mode
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Override the theme's primary colour (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Override the theme's cell background colour (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub cell_color: Option<String>,

    /// Random seed for reproducible cards
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CardArgs {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Free-space rule selected by the flags
    pub fn free_space(&self) -> FreeSpace {
        if self.no_free_space {
            FreeSpace::disabled()
        } else {
            FreeSpace::enabled(self.free_label.clone())
        }
    }

    /// Theme preset with the optional colour overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown preset or a malformed colour
    pub fn theme(&self) -> Result<Theme> {
        let mut theme = Theme::by_name(&self.theme)?;
        if let Some(hex) = &self.color {
            theme = theme.with_primary(parse_hex_color(hex)?);
        }
        if let Some(hex) = &self.cell_color {
            theme = theme.with_cell_background(parse_hex_color(hex)?);
        }
        Ok(theme)
    }

    /// Build a session holding the requested card set
    ///
    /// Image files that cannot be imported are reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid parameters or an unreadable word list
    // Allow print for user feedback on rejected image files
    #[allow(clippy::print_stderr)]
    pub fn session(&self) -> Result<Session> {
        let mut session = Session::new(self.seed);
        session.set_title(self.title.clone());
        session.set_theme(self.theme()?);
        session.set_icon(self.icon);
        session.set_grid_size(GridSize::try_from(self.grid)?);
        session.set_content_mode(self.mode);
        session.set_number_range(NumberRange::new(self.min, self.max))?;
        session.set_free_space(self.free_space());
        session.set_card_count(self.count)?;

        if let Some(path) = &self.words {
            let raw = fs::read_to_string(path)
                .map_err(|e| file_system_error(path, "read word list", e))?;
            session.set_word_list(raw);
        }

        if !self.images.is_empty() {
            let report = session.import_images(&self.images);
            if !self.quiet {
                for rejected in &report.rejected {
                    eprintln!("Skipping: {rejected}");
                }
            }
        }

        Ok(session)
    }
}

/// Options of the `export` subcommand
#[derive(Args)]
pub struct ExportArgs {
    /// Card options
    #[command(flatten)]
    pub card: CardArgs,

    /// Directory receiving the archive
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Logical card width in pixels
    #[arg(long, default_value_t = EXPORT_WIDTH)]
    pub width: u32,

    /// Rasterization upscale factor
    #[arg(long, default_value_t = EXPORT_SCALE)]
    pub scale: u32,

    /// Fixed wait between render and rasterize, in milliseconds
    #[arg(long)]
    pub settle_ms: Option<u64>,

    /// Skip cards that fail instead of aborting the export
    #[arg(long)]
    pub isolate_failures: bool,

    /// Rasterization attempts per card
    #[arg(long, default_value_t = DEFAULT_RASTER_ATTEMPTS)]
    pub attempts: u32,
}

impl ExportArgs {
    /// Export options selected by the flags
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            width: self.width,
            scale: self.scale,
            settle: self
                .settle_ms
                .map_or(SettlePolicy::Immediate, |ms| {
                    SettlePolicy::Fixed(Duration::from_millis(ms))
                }),
            attempts: self.attempts,
            policy: if self.isolate_failures {
                FailurePolicy::Isolate
            } else {
                FailurePolicy::Abort
            },
        }
    }
}

/// Printable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SheetKind {
    /// Two cards per page with printed codes
    Cards,
    /// Numbered call sheet of the whole pool
    Lottery,
}

impl SheetKind {
    /// File name prefix for pages of this sheet
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Lottery => "lottery",
        }
    }
}

/// Options of the `print` subcommand
#[derive(Args)]
pub struct PrintArgs {
    /// Card options
    #[command(flatten)]
    pub card: CardArgs,

    /// Sheet to print
    #[arg(long, value_enum, default_value_t = SheetKind::Cards)]
    pub sheet: SheetKind,

    /// Directory receiving the page images
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,
}

/// Run a parsed command line
///
/// # Errors
///
/// Returns an error if the session cannot be built or the command fails
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Preview(args) => preview(args),
        Command::Export(args) => export(args).map(|_| ()),
        Command::Print(args) => print(args).map(|_| ()),
    }
}

// Allow print for the preview output itself
#[allow(clippy::print_stdout)]
fn preview(args: &CardArgs) -> Result<()> {
    let session = args.session()?;
    for (index, card) in session.cards().iter().enumerate() {
        println!("{} {}", session.style().title, card_code(index));
        println!("{card}");
    }
    Ok(())
}

/// Export the requested cards into `<output>/bingo-master-<K>-cards.zip`
///
/// # Errors
///
/// Returns an error if the session cannot be built or the export fails
pub fn export(args: &ExportArgs) -> Result<ExportReport> {
    let session = args.card.session()?;
    let mut exporter: BatchExporter<ImageRasterizer, DirectorySink> = BatchExporter::with_options(
        ImageRasterizer::new(),
        DirectorySink::new(&args.output),
        args.options(),
    );
    let mut progress = if args.card.should_show_progress() {
        ProgressManager::new(session.cards().len())
    } else {
        ProgressManager::hidden()
    };

    let report = session.export(&mut exporter, &mut progress, &CancellationToken::new())?;
    let saved = args.output.join(&report.archive_name);
    progress.status(&format!(
        "Saved {} cards to {}",
        report.succeeded.len(),
        saved.display()
    ));
    if !report.failed.is_empty() {
        progress.status(&format!("{} cards skipped", report.failed.len()));
    }
    Ok(report)
}

/// Write the pages of the requested sheet, returning their paths
///
/// # Errors
///
/// Returns an error if the session cannot be built or a page cannot be
/// rendered or written
// Allow print for user feedback on written pages
#[allow(clippy::print_stderr)]
pub fn print(args: &PrintArgs) -> Result<Vec<PathBuf>> {
    let session = args.card.session()?;
    let pages = match args.sheet {
        SheetKind::Cards => session.card_sheet(),
        SheetKind::Lottery => session.lottery_sheet(),
    };
    let encoded = render_pages(&pages)?;
    let written = write_pages(&args.output, args.sheet.prefix(), &encoded)?;
    if args.card.should_show_progress() {
        eprintln!("Wrote {} pages to {}", written.len(), args.output.display());
    }
    Ok(written)
}

fn write_pages(directory: &Path, prefix: &str, pages: &[Vec<u8>]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(directory)
        .map_err(|e| file_system_error(directory, "create directory", e))?;
    pages
        .iter()
        .enumerate()
        .map(|(index, bytes)| {
            let path = directory.join(format!("{prefix}-page-{}.png", index + 1));
            fs::write(&path, bytes).map_err(|e| file_system_error(&path, "write page", e))?;
            Ok(path)
        })
        .collect()
}
