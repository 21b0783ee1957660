/// 5×7 bitmap font and text fitting
pub mod glyph;
/// Scene painting and PNG encoding
pub mod paint;
/// Card layout into positioned primitives
pub mod scene;
/// Printable A4 page surfaces
pub mod sheet;
/// Colour presets and center icons
pub mod theme;

pub use paint::{encode_png, paint};
pub use scene::{CardStyle, Primitive, Rect, Scene, layout_card};
pub use sheet::{card_pages, lottery_pages, render_pages};
pub use theme::{CenterIcon, Theme};
