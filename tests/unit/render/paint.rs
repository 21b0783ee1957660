//! Tests for painting scenes into bitmaps and PNG encoding

#[cfg(test)]
mod tests {
    use bingo_master::BingoError;
    use bingo_master::card::{Card, Cell, GridSize, ImageRef};
    use bingo_master::render::glyph::fit_text;
    use bingo_master::render::scene::{CardStyle, Primitive, Rect, Scene, layout_card};
    use bingo_master::render::{CenterIcon, encode_png, paint};
    use image::{Rgba, RgbaImage};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn png_bytes(color: Rgba<u8>) -> bingo_master::Result<Vec<u8>> {
        encode_png(&RgbaImage::from_pixel(8, 8, color))
    }

    // Tests the bitmap is the scene size times the scale
    // Verified by ignoring the scale factor
    #[test]
    fn test_paint_scales_dimensions() -> bingo_master::Result<()> {
        let scene = Scene::new(30, 20, WHITE);

        let bitmap = paint(&scene, 2)?;
        assert_eq!(bitmap.dimensions(), (60, 40));
        assert_eq!(paint(&scene, 0)?.dimensions(), (30, 20));
        Ok(())
    }

    // Tests fills land at scaled coordinates
    // Verified by painting fills at logical coordinates
    #[test]
    fn test_paint_fill() -> bingo_master::Result<()> {
        let mut scene = Scene::new(10, 10, WHITE);
        scene.push(Primitive::Fill {
            rect: Rect::new(5, 5, 5, 5),
            color: RED,
        });

        let bitmap = paint(&scene, 3)?;
        assert_eq!(bitmap.get_pixel(16, 16), &RED);
        assert_eq!(bitmap.get_pixel(14, 14), &WHITE);
        Ok(())
    }

    // Tests text leaves ink inside its box and nowhere else
    // Verified by drawing glyphs at the canvas origin
    #[test]
    fn test_paint_text_inside_box() -> bingo_master::Result<()> {
        let mut scene = Scene::new(100, 50, WHITE);
        let rect = Rect::new(50, 0, 50, 50);
        scene.push(Primitive::Text {
            rect,
            text: fit_text("7", rect.width, rect.height, 4),
            color: BLACK,
        });

        let bitmap = paint(&scene, 1)?;
        let ink: Vec<(u32, u32)> = bitmap
            .enumerate_pixels()
            .filter(|(_, _, pixel)| **pixel == BLACK)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!ink.is_empty());
        assert!(ink.iter().all(|&(x, _)| x >= 50));
        Ok(())
    }

    // Tests images are decoded and drawn into their box
    // Verified by skipping image primitives
    #[test]
    fn test_paint_image() -> bingo_master::Result<()> {
        let image = ImageRef::new("id", "red.png", png_bytes(RED)?);
        let mut scene = Scene::new(40, 40, WHITE);
        scene.push(Primitive::Image {
            rect: Rect::new(10, 10, 20, 20),
            image,
        });

        let bitmap = paint(&scene, 1)?;
        let center = bitmap.get_pixel(20, 20);
        assert!(center.0[0] > 200 && center.0[1] < 50 && center.0[2] < 50);
        assert_eq!(bitmap.get_pixel(2, 2), &WHITE);
        Ok(())
    }

    // Tests undecodable image bytes surface as a decode error
    // Verified by silently skipping broken images
    #[test]
    fn test_paint_broken_image_fails() {
        let image = ImageRef::new("id", "broken.png", vec![1_u8, 2, 3, 4]);
        let mut scene = Scene::new(40, 40, WHITE);
        scene.push(Primitive::Image {
            rect: Rect::new(0, 0, 40, 40),
            image,
        });

        let result = paint(&scene, 1);
        assert!(matches!(
            result,
            Err(BingoError::ImageDecode { ref name, .. }) if name == "broken.png"
        ));
    }

    // Tests a scale that overflows the canvas is an error instead of a panic
    // Verified by multiplying dimensions unchecked
    #[test]
    fn test_paint_scale_overflow() {
        let scene = Scene::new(1_000_000_000, 10, WHITE);
        assert!(matches!(
            paint(&scene, 8),
            Err(BingoError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));

        let mut scene = Scene::new(10, 10, WHITE);
        scene.push(Primitive::Fill {
            rect: Rect::new(u32::MAX / 2, 0, 1, 1),
            color: RED,
        });
        assert!(paint(&scene, 4).is_err());
    }

    // Tests every icon shape leaves ink in its box
    // Verified by returning early for heart and trophy
    #[test]
    fn test_paint_icons() -> bingo_master::Result<()> {
        for icon in [CenterIcon::Star, CenterIcon::Heart, CenterIcon::Trophy] {
            let mut scene = Scene::new(60, 60, WHITE);
            scene.push(Primitive::Icon {
                rect: Rect::new(10, 10, 40, 40),
                icon,
                color: RED,
            });
            let bitmap = paint(&scene, 1)?;
            assert!(bitmap.pixels().any(|pixel| *pixel == RED), "{icon} drew nothing");
        }
        Ok(())
    }

    // Tests a full card paints and encodes as a PNG
    // Verified by encoding raw pixel bytes
    #[test]
    fn test_encode_card_png() -> bingo_master::Result<()> {
        let cells: Vec<Cell> = (1..=16).map(|n| Cell::Text(n.to_string())).collect();
        let card = Card::new(GridSize::Four, cells)?;
        let scene = layout_card(&card, &CardStyle::default(), 200);

        let bytes = encode_png(&paint(&scene, 2)?)?;
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        let decoded = image::load_from_memory(&bytes)
            .map_err(|source| BingoError::ImageEncode { source })?;
        assert_eq!(decoded.width(), 400);
        Ok(())
    }
}
