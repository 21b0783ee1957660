//! Scene painting: the second phase of rendering
//!
//! Every logical coordinate is multiplied by an integer scale, so a scene
//! laid out at 600 px paints at 1200 px for 2× print output.

use std::f32::consts::PI;
use std::io::Cursor;

use image::imageops::{FilterType, overlay};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect as PixelRect;

use crate::card::ImageRef;
use crate::io::error::{BingoError, Result, invalid_parameter};
use crate::render::glyph::{
    GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH, LINE_SPACING, block_height, pattern, text_width,
};
use crate::render::scene::{Primitive, Rect, Scene};
use crate::render::theme::CenterIcon;

const DASH: u32 = 6;

/// Paint a scene into a bitmap at an integer scale factor
///
/// # Errors
///
/// Returns an error if the scaled canvas does not fit in `u32` pixels or an
/// image primitive's bytes cannot be decoded
pub fn paint(scene: &Scene, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let mut canvas = RgbaImage::from_pixel(
        scale_length(scene.width, scale)?,
        scale_length(scene.height, scale)?,
        scene.background,
    );
    for primitive in &scene.primitives {
        paint_primitive(&mut canvas, primitive, scale)?;
    }
    Ok(canvas)
}

/// Encode a bitmap as PNG bytes
///
/// # Errors
///
/// Returns an error if the PNG encoder fails
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|source| BingoError::ImageEncode { source })?;
    Ok(bytes.into_inner())
}

fn paint_primitive(canvas: &mut RgbaImage, primitive: &Primitive, scale: u32) -> Result<()> {
    match primitive {
        Primitive::Fill { rect, color } => fill(canvas, scaled(*rect, scale)?, *color),
        Primitive::DashedOutline { rect, color } => {
            dashed_outline(canvas, scaled(*rect, scale)?, scale, *color);
        }
        Primitive::Text { rect, text, color } => {
            let pixel = scale_length(text.scale, scale)?;
            draw_text_block(canvas, scaled(*rect, scale)?, &text.lines, pixel, *color);
        }
        Primitive::Image { rect, image } => draw_image(canvas, scaled(*rect, scale)?, image)?,
        Primitive::Icon { rect, icon, color } => {
            draw_icon(canvas, scaled(*rect, scale)?, *icon, *color);
        }
    }
    Ok(())
}

fn scale_length(length: u32, scale: u32) -> Result<u32> {
    length.checked_mul(scale).ok_or_else(|| {
        invalid_parameter("scale", &scale, &format!("{length} px overflows when scaled"))
    })
}

fn scaled(rect: Rect, scale: u32) -> Result<Rect> {
    Ok(Rect::new(
        scale_length(rect.x, scale)?,
        scale_length(rect.y, scale)?,
        scale_length(rect.width, scale)?,
        scale_length(rect.height, scale)?,
    ))
}

fn pixel_rect(rect: Rect) -> PixelRect {
    PixelRect::at(rect.x as i32, rect.y as i32).of_size(rect.width.max(1), rect.height.max(1))
}

fn fill(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    draw_filled_rect_mut(canvas, pixel_rect(rect), color);
}

fn dashed_outline(canvas: &mut RgbaImage, rect: Rect, scale: u32, color: Rgba<u8>) {
    let dash = DASH * scale;
    let stroke = scale;
    let right = rect.x + rect.width.saturating_sub(stroke);
    let bottom = rect.y + rect.height.saturating_sub(stroke);

    let mut x = rect.x;
    while x < rect.x + rect.width {
        let len = dash.min(rect.x + rect.width - x);
        fill(canvas, Rect::new(x, rect.y, len, stroke), color);
        fill(canvas, Rect::new(x, bottom, len, stroke), color);
        x += dash * 2;
    }
    let mut y = rect.y;
    while y < rect.y + rect.height {
        let len = dash.min(rect.y + rect.height - y);
        fill(canvas, Rect::new(rect.x, y, stroke, len), color);
        fill(canvas, Rect::new(right, y, stroke, len), color);
        y += dash * 2;
    }
}

/// Draw wrapped lines centered inside a box, `pixel` pixels per font unit
pub fn draw_text_block(
    canvas: &mut RgbaImage,
    rect: Rect,
    lines: &[String],
    pixel: u32,
    color: Rgba<u8>,
) {
    let block = block_height(lines.len() as u32, pixel);
    let mut y = rect.y + rect.height.saturating_sub(block) / 2;
    for line in lines {
        let x = rect.x + rect.width.saturating_sub(text_width(line, pixel)) / 2;
        draw_line(canvas, x, y, line, pixel, color);
        y += (GLYPH_HEIGHT + LINE_SPACING) * pixel;
    }
}

fn draw_line(canvas: &mut RgbaImage, x: u32, y: u32, line: &str, pixel: u32, color: Rgba<u8>) {
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) * pixel;
    for (offset, ch) in line.chars().enumerate() {
        let glyph_x = x + offset as u32 * advance;
        for (row, bits) in pattern(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    fill(
                        canvas,
                        Rect::new(
                            glyph_x + col * pixel,
                            y + row as u32 * pixel,
                            pixel,
                            pixel,
                        ),
                        color,
                    );
                }
            }
        }
    }
}

fn draw_image(canvas: &mut RgbaImage, rect: Rect, image: &ImageRef) -> Result<()> {
    let decoded =
        image::load_from_memory(image.bytes()).map_err(|source| BingoError::ImageDecode {
            name: image.name().to_string(),
            source,
        })?;
    let fitted = decoded
        .resize(rect.width.max(1), rect.height.max(1), FilterType::Triangle)
        .to_rgba8();
    let x = rect.x + rect.width.saturating_sub(fitted.width()) / 2;
    let y = rect.y + rect.height.saturating_sub(fitted.height()) / 2;
    overlay(canvas, &fitted, i64::from(x), i64::from(y));
    Ok(())
}

/// Draw a center icon filling the largest square inside `rect`
pub fn draw_icon(canvas: &mut RgbaImage, rect: Rect, icon: CenterIcon, color: Rgba<u8>) {
    let side = rect.width.min(rect.height) as f32;
    let cx = rect.x as f32 + rect.width as f32 / 2.0;
    let cy = rect.y as f32 + rect.height as f32 / 2.0;
    let r = side / 2.0;
    if r < 2.0 {
        return;
    }

    match icon {
        CenterIcon::None => {}
        CenterIcon::Star => draw_star(canvas, cx, cy, r, color),
        CenterIcon::Heart => draw_heart(canvas, cx, cy, r, color),
        CenterIcon::Trophy => draw_trophy(canvas, cx, cy, r, color),
    }
}

fn point(x: f32, y: f32) -> Point<i32> {
    Point::new(x.round() as i32, y.round() as i32)
}

fn center(x: f32, y: f32) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn draw_star(canvas: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    let inner = r * 0.42;
    let points: Vec<Point<i32>> = (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { r } else { inner };
            let angle = (i as f32).mul_add(PI / 5.0, -PI / 2.0);
            point(
                radius.mul_add(angle.cos(), cx),
                radius.mul_add(angle.sin(), cy),
            )
        })
        .collect();
    draw_polygon_mut(canvas, &points, color);
}

fn draw_heart(canvas: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    let lobe = r * 0.5;
    let lobe_y = r.mul_add(-0.35, cy);
    draw_filled_circle_mut(canvas, center(cx - lobe, lobe_y), lobe as i32, color);
    draw_filled_circle_mut(canvas, center(cx + lobe, lobe_y), lobe as i32, color);
    let base = lobe.mul_add(0.25, lobe_y);
    let points = [
        point(r.mul_add(-0.97, cx), base),
        point(r.mul_add(0.97, cx), base),
        point(cx, r.mul_add(0.9, cy)),
    ];
    draw_polygon_mut(canvas, &points, color);
}

fn draw_trophy(canvas: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    let rim = r.mul_add(-0.85, cy);
    let foot = r.mul_add(0.05, cy);
    let cup = [
        point(r.mul_add(-0.6, cx), rim),
        point(r.mul_add(0.6, cx), rim),
        point(r.mul_add(0.4, cx), foot),
        point(r.mul_add(-0.4, cx), foot),
    ];
    draw_polygon_mut(canvas, &cup, color);

    let handle = (r * 0.28) as i32;
    let handle_y = r.mul_add(-0.5, cy);
    draw_hollow_circle_mut(canvas, center(r.mul_add(-0.6, cx), handle_y), handle, color);
    draw_hollow_circle_mut(canvas, center(r.mul_add(0.6, cx), handle_y), handle, color);

    let stem_width = (r * 0.18).max(1.0);
    fill_f32(canvas, cx - stem_width / 2.0, cy, stem_width, r * 0.45, color);
    fill_f32(
        canvas,
        r.mul_add(-0.5, cx),
        r.mul_add(0.45, cy),
        r,
        r * 0.3,
        color,
    );
}

fn fill_f32(canvas: &mut RgbaImage, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>) {
    let rect = PixelRect::at(x.round() as i32, y.round() as i32)
        .of_size(width.round().max(1.0) as u32, height.round().max(1.0) as u32);
    draw_filled_rect_mut(canvas, rect, color);
}
