//! Off-screen render surfaces and their rasterization

use std::thread;
use std::time::Duration;

use crate::card::Card;
use crate::io::configuration::DEFAULT_SETTLE_DELAY;
use crate::io::error::{Result, invalid_parameter};
use crate::render::paint::{encode_png, paint};
use crate::render::scene::{CardStyle, Scene, layout_card};

/// How long to wait between rendering a surface and rasterizing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettlePolicy {
    /// Rendering completes synchronously, rasterize at once
    #[default]
    Immediate,
    /// Wait a fixed delay for asynchronous content to finish drawing
    Fixed(Duration),
}

impl SettlePolicy {
    /// Fixed delay long enough for slow embedded images
    pub const fn fallback() -> Self {
        Self::Fixed(DEFAULT_SETTLE_DELAY)
    }
}

/// Render-then-capture protocol used by the batch exporter
///
/// An export opens one root, then for every card renders a surface, lets it
/// settle, rasterizes it and releases it. The root is closed exactly once
/// when the export ends, whatever the outcome.
pub trait Rasterizer {
    /// Rendered card awaiting capture
    type Surface;

    /// Prepare the off-screen root at a logical width
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be created
    fn open_root(&mut self, width: u32) -> Result<()>;

    /// Render a card into a fresh surface under the root
    ///
    /// # Errors
    ///
    /// Returns an error if the card cannot be rendered
    fn render(&mut self, card: &Card, style: &CardStyle) -> Result<Self::Surface>;

    /// Wait until the surface is ready to capture
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot settle
    fn settle(&mut self, _surface: &Self::Surface, policy: SettlePolicy) -> Result<()> {
        if let SettlePolicy::Fixed(delay) = policy {
            thread::sleep(delay);
        }
        Ok(())
    }

    /// Capture the surface as PNG bytes at an integer scale
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be painted or encoded
    fn rasterize(&mut self, surface: &Self::Surface, scale: u32) -> Result<Vec<u8>>;

    /// Discard a surface
    fn release(&mut self, surface: Self::Surface);

    /// Tear down the root
    fn close_root(&mut self);
}

/// Native rasterizer: surfaces are laid-out scenes painted with `imageproc`
#[derive(Debug, Default)]
pub struct ImageRasterizer {
    root_width: Option<u32>,
}

impl ImageRasterizer {
    /// Rasterizer with no root open
    pub const fn new() -> Self {
        Self { root_width: None }
    }

    /// Whether a root is currently open
    pub const fn is_open(&self) -> bool {
        self.root_width.is_some()
    }
}

impl Rasterizer for ImageRasterizer {
    type Surface = Scene;

    fn open_root(&mut self, width: u32) -> Result<()> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        self.root_width = Some(width);
        Ok(())
    }

    fn render(&mut self, card: &Card, style: &CardStyle) -> Result<Scene> {
        let width = self
            .root_width
            .ok_or_else(|| invalid_parameter("root", &"closed", &"open the root first"))?;
        Ok(layout_card(card, style, width))
    }

    fn rasterize(&mut self, surface: &Scene, scale: u32) -> Result<Vec<u8>> {
        encode_png(&paint(surface, scale)?)
    }

    fn release(&mut self, surface: Scene) {
        drop(surface);
    }

    fn close_root(&mut self) {
        self.root_width = None;
    }
}
