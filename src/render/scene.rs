//! Card layout: the first phase of rendering
//!
//! A scene is a flat list of positioned primitives in logical pixels. It is
//! resolution independent; painting multiplies every coordinate by an
//! integer scale factor.

use image::Rgba;

use crate::card::{Card, Cell, ImageRef};
use crate::io::configuration::DEFAULT_TITLE;
use crate::render::glyph::{FittedText, fit_text};
use crate::render::theme::{CenterIcon, GUTTER, Theme};

/// Frame thickness around the card
pub const FRAME: u32 = 8;
/// Height of the title band
pub const HEADER_HEIGHT: u32 = 76;
/// Rule between the title band and the grid
pub const HEADER_RULE: u32 = 2;
/// Gutter between cells
pub const GUTTER_WIDTH: u32 = 1;
/// Inner padding of a cell
pub const CELL_PADDING: u32 = 6;

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl Rect {
    /// Rectangle from position and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle shrunk by `amount` on every side, never below 1×1
    #[must_use]
    pub const fn inset(self, amount: u32) -> Self {
        let width = self.width.saturating_sub(amount * 2);
        let height = self.height.saturating_sub(amount * 2);
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    /// Centered sub-rectangle scaled by `percent` of each side
    #[must_use]
    pub const fn centered_fraction(self, percent: u32) -> Self {
        let width = self.width * percent / 100;
        let height = self.height * percent / 100;
        Self::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }

    /// Rectangle moved by an offset
    #[must_use]
    pub const fn offset(self, dx: u32, dy: u32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Split into a top part of `height` and the remainder below it
    pub const fn split_top(self, height: u32) -> (Self, Self) {
        let top = if height > self.height {
            self.height
        } else {
            height
        };
        (
            Self::new(self.x, self.y, self.width, top),
            Self::new(self.x, self.y + top, self.width, self.height - top),
        )
    }
}

/// Drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Solid rectangle
    Fill {
        /// Area to fill
        rect: Rect,
        /// Fill colour
        color: Rgba<u8>,
    },
    /// Dashed rectangle outline
    DashedOutline {
        /// Outlined area
        rect: Rect,
        /// Line colour
        color: Rgba<u8>,
    },
    /// Wrapped text centered in a box
    Text {
        /// Bounding box
        rect: Rect,
        /// Lines and glyph scale
        text: FittedText,
        /// Text colour
        color: Rgba<u8>,
    },
    /// Uploaded image fitted into a box, aspect ratio kept
    Image {
        /// Bounding box
        rect: Rect,
        /// Image to decode and draw
        image: ImageRef,
    },
    /// Center icon
    Icon {
        /// Bounding box
        rect: Rect,
        /// Icon shape
        icon: CenterIcon,
        /// Icon colour
        color: Rgba<u8>,
    },
}

impl Primitive {
    /// Bounding box of the primitive
    pub const fn rect(&self) -> Rect {
        match self {
            Self::Fill { rect, .. }
            | Self::DashedOutline { rect, .. }
            | Self::Text { rect, .. }
            | Self::Image { rect, .. }
            | Self::Icon { rect, .. } => *rect,
        }
    }

    /// Same primitive moved by an offset
    #[must_use]
    pub fn translated(mut self, dx: u32, dy: u32) -> Self {
        match &mut self {
            Self::Fill { rect, .. }
            | Self::DashedOutline { rect, .. }
            | Self::Text { rect, .. }
            | Self::Image { rect, .. }
            | Self::Icon { rect, .. } => *rect = rect.offset(dx, dy),
        }
        self
    }
}

/// Laid-out drawing ready to paint
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Logical width
    pub width: u32,
    /// Logical height
    pub height: u32,
    /// Colour behind all primitives
    pub background: Rgba<u8>,
    /// Primitives in painting order
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Blank scene
    pub const fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            width,
            height,
            background,
            primitives: Vec::new(),
        }
    }

    /// Append a primitive
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Copy another scene into this one at an offset, background included
    pub fn embed(&mut self, other: Self, x: u32, y: u32) {
        self.push(Primitive::Fill {
            rect: Rect::new(x, y, other.width, other.height),
            color: other.background,
        });
        self.primitives.extend(
            other
                .primitives
                .into_iter()
                .map(|primitive| primitive.translated(x, y)),
        );
    }

    /// Number of primitives matching a predicate
    pub fn count(&self, predicate: impl Fn(&Primitive) -> bool) -> usize {
        self.primitives.iter().filter(|p| predicate(p)).count()
    }
}

/// Presentation settings shared by every card of a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    /// Title in the header band
    pub title: String,
    /// Colours
    pub theme: Theme,
    /// Decoration for the center cell
    pub icon: CenterIcon,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
            icon: CenterIcon::None,
        }
    }
}

/// Largest glyph scale for text of a given length
///
/// Longer text starts smaller, then shrinks further until it fits.
pub const fn max_glyph_scale(chars: usize) -> u32 {
    match chars {
        0..=5 => 6,
        6..=12 => 4,
        13..=20 => 3,
        _ => 2,
    }
}

/// Lay out a card at a logical width
pub fn layout_card(card: &Card, style: &CardStyle, width: u32) -> Scene {
    let n = card.grid().dimension() as u32;
    let width = width.max(FRAME * 2 + n * 8);
    let inner_width = width - FRAME * 2;
    let cell_size = (inner_width - GUTTER_WIDTH * (n - 1)) / n;
    let grid_height = cell_size * n + GUTTER_WIDTH * (n - 1);
    let height = FRAME * 2 + HEADER_HEIGHT + HEADER_RULE + grid_height;
    let theme = &style.theme;

    let mut scene = Scene::new(width, height, theme.primary);

    let header = Rect::new(FRAME, FRAME, inner_width, HEADER_HEIGHT);
    let title_box = header.inset(12);
    scene.push(Primitive::Text {
        rect: title_box,
        text: fit_text(&style.title, title_box.width, title_box.height, 7),
        color: theme.header_text,
    });

    let grid_top = FRAME + HEADER_HEIGHT + HEADER_RULE;
    scene.push(Primitive::Fill {
        rect: Rect::new(FRAME, grid_top, inner_width, grid_height),
        color: GUTTER,
    });

    let center = card.grid().center_index();
    for (index, cell) in card.cells().iter().enumerate() {
        let row = index as u32 / n;
        let col = index as u32 % n;
        let rect = Rect::new(
            FRAME + col * (cell_size + GUTTER_WIDTH),
            grid_top + row * (cell_size + GUTTER_WIDTH),
            cell_size,
            cell_size,
        );
        let icon = if Some(index) == center && cell.is_free_space() {
            style.icon
        } else {
            CenterIcon::None
        };
        layout_cell(&mut scene, cell, rect, theme, icon);
    }

    scene
}

fn layout_cell(scene: &mut Scene, cell: &Cell, rect: Rect, theme: &Theme, icon: CenterIcon) {
    scene.push(Primitive::Fill {
        rect,
        color: theme.cell_background,
    });
    let content = rect.inset(CELL_PADDING);

    match cell {
        Cell::Text(text) | Cell::FreeSpace(text) => {
            let text_box = if icon == CenterIcon::None {
                content
            } else {
                let (icon_box, rest) = content.split_top(content.height * 2 / 5);
                scene.push(Primitive::Icon {
                    rect: icon_box.centered_fraction(80),
                    icon,
                    color: theme.cell_text,
                });
                rest
            };
            let max_scale = max_glyph_scale(text.chars().count());
            scene.push(Primitive::Text {
                rect: text_box,
                text: fit_text(text, text_box.width, text_box.height, max_scale),
                color: theme.cell_text,
            });
        }
        Cell::Image(image) => scene.push(Primitive::Image {
            rect: rect.centered_fraction(90),
            image: image.clone(),
        }),
        Cell::Empty => scene.push(Primitive::DashedOutline {
            rect: rect.inset(4),
            color: GUTTER,
        }),
    }
}
