//! Printable A4 surfaces: the lottery call sheet and the card sheet

use crate::card::{CardSet, ContentItem};
use crate::io::configuration::{
    A4_HEIGHT_MM, A4_WIDTH_MM, CARDS_PER_PAGE, LOTTERY_COLUMNS, SHEET_DPI, card_code,
};
use crate::io::error::Result;
use crate::render::glyph::{fit_text, text_width};
use crate::render::paint::{encode_png, paint};
use crate::render::scene::{
    CardStyle, HEADER_HEIGHT, HEADER_RULE, Primitive, Rect, Scene, layout_card, max_glyph_scale,
};
use crate::render::theme::{GUTTER, INK, MUTED_INK, PAPER};

/// Page margin in pixels
pub const PAGE_MARGIN: u32 = 48;
/// Height of the sheet heading band
pub const HEADING_HEIGHT: u32 = 64;
/// Height of the `#n` caption under lottery content
pub const CAPTION_HEIGHT: u32 = 22;
/// Height of the card code line above each card
pub const CODE_HEIGHT: u32 = 28;

/// Page size in pixels at the sheet resolution
pub const fn page_size() -> (u32, u32) {
    (mm_to_px(A4_WIDTH_MM), mm_to_px(A4_HEIGHT_MM))
}

// 25.4 mm per inch, rounded to the nearest pixel
const fn mm_to_px(mm: u32) -> u32 {
    (mm * SHEET_DPI * 10 + 127) / 254
}

/// Lay out the lottery call sheet for a pool
///
/// Items are numbered from 1 in pool order. The last row is padded with
/// empty cells so the grid stays rectangular; more pages follow when the
/// pool does not fit on one.
pub fn lottery_pages(pool: &[ContentItem], title: &str) -> Vec<Scene> {
    let (width, height) = page_size();
    let inner_width = width - PAGE_MARGIN * 2;
    let cell = inner_width / LOTTERY_COLUMNS as u32;
    let grid_top = PAGE_MARGIN + HEADING_HEIGHT;
    let rows_per_page = ((height - grid_top - PAGE_MARGIN) / cell).max(1) as usize;
    let per_page = rows_per_page * LOTTERY_COLUMNS;

    let padded = pool.len().div_ceil(LOTTERY_COLUMNS).max(1) * LOTTERY_COLUMNS;
    let slots: Vec<Option<&ContentItem>> = (0..padded).map(|index| pool.get(index)).collect();

    slots
        .chunks(per_page)
        .enumerate()
        .map(|(page_index, page_slots)| {
            let mut page = Scene::new(width, height, PAPER);
            heading(&mut page, &format!("{title} - lottery"));
            for (offset, slot) in page_slots.iter().enumerate() {
                let row = (offset / LOTTERY_COLUMNS) as u32;
                let col = (offset % LOTTERY_COLUMNS) as u32;
                let rect = Rect::new(PAGE_MARGIN + col * cell, grid_top + row * cell, cell, cell);
                let number = page_index * per_page + offset + 1;
                lottery_cell(&mut page, rect, slot.map(|item| (number, item)));
            }
            page
        })
        .collect()
}

fn heading(page: &mut Scene, text: &str) {
    let rect = Rect::new(PAGE_MARGIN, PAGE_MARGIN, page.width - PAGE_MARGIN * 2, HEADING_HEIGHT)
        .inset(8);
    page.push(Primitive::Text {
        rect,
        text: fit_text(text, rect.width, rect.height, 5),
        color: INK,
    });
}

fn lottery_cell(page: &mut Scene, rect: Rect, slot: Option<(usize, &ContentItem)>) {
    page.push(Primitive::DashedOutline { rect, color: GUTTER });
    let Some((number, item)) = slot else {
        return;
    };

    let inner = rect.inset(10);
    let (content, caption) = inner.split_top(inner.height.saturating_sub(CAPTION_HEIGHT));
    match item {
        ContentItem::Text(text) => page.push(Primitive::Text {
            rect: content,
            text: fit_text(
                text,
                content.width,
                content.height,
                max_glyph_scale(text.chars().count()),
            ),
            color: INK,
        }),
        ContentItem::Image(image) => page.push(Primitive::Image {
            rect: content,
            image: image.clone(),
        }),
    }
    page.push(Primitive::Text {
        rect: caption,
        text: fit_text(&format!("#{number}"), caption.width, caption.height, 2),
        color: MUTED_INK,
    });
}

/// Lay out the card sheet, two cards per page, each under its printed code
pub fn card_pages(cards: &CardSet, style: &CardStyle) -> Vec<Scene> {
    let (width, height) = page_size();
    let half = (height - PAGE_MARGIN * 2) / CARDS_PER_PAGE as u32;
    let inner_width = width - PAGE_MARGIN * 2;

    // A laid-out card is never taller than its width plus the header band.
    let available = half.saturating_sub(CODE_HEIGHT + 16);
    let card_width = inner_width.min(available.saturating_sub(HEADER_HEIGHT + HEADER_RULE));

    let indexed: Vec<_> = cards.iter().enumerate().collect();
    indexed
        .chunks(CARDS_PER_PAGE)
        .map(|chunk| {
            let mut page = Scene::new(width, height, PAPER);
            for (slot, (index, card)) in chunk.iter().enumerate() {
                let top = PAGE_MARGIN + slot as u32 * half;
                let scene = layout_card(card, style, card_width);
                let x = PAGE_MARGIN + inner_width.saturating_sub(scene.width) / 2;
                let code_rect = Rect::new(x, top, scene.width, CODE_HEIGHT);
                let code = card_code(*index);
                let fitted = fit_text(&code, code_rect.width / 3, code_rect.height, 3);
                let code_width = text_width(
                    fitted.lines.first().map_or("", String::as_str),
                    fitted.scale,
                );
                page.push(Primitive::Text {
                    rect: Rect::new(
                        code_rect.x + code_rect.width.saturating_sub(code_width),
                        code_rect.y,
                        code_width.max(1),
                        code_rect.height,
                    ),
                    text: fitted,
                    color: MUTED_INK,
                });
                page.embed(scene, x, top + CODE_HEIGHT);
            }
            page
        })
        .collect()
}

/// Paint page scenes at sheet resolution and encode each as PNG
///
/// # Errors
///
/// Returns an error if an image item cannot be decoded or a page cannot be
/// encoded
pub fn render_pages(pages: &[Scene]) -> Result<Vec<Vec<u8>>> {
    pages
        .iter()
        .map(|page| paint(page, 1).and_then(|bitmap| encode_png(&bitmap)))
        .collect()
}
