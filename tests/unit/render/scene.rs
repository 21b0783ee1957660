//! Tests for card layout into scene primitives

#[cfg(test)]
mod tests {
    use bingo_master::card::{Card, Cell, GridSize, ImageRef};
    use bingo_master::render::scene::{
        CardStyle, FRAME, HEADER_HEIGHT, HEADER_RULE, Primitive, Rect, Scene, layout_card,
        max_glyph_scale,
    };
    use bingo_master::render::{CenterIcon, Theme};
    use image::Rgba;

    fn three_by_three(center: Cell) -> bingo_master::Result<Card> {
        let mut cells: Vec<Cell> = (1..=9).map(|n| Cell::Text(n.to_string())).collect();
        if let Some(slot) = cells.get_mut(4) {
            *slot = center;
        }
        Card::new(GridSize::Three, cells)
    }

    fn is_icon(primitive: &Primitive) -> bool {
        matches!(primitive, Primitive::Icon { .. })
    }

    // Tests inset and split keep rectangles inside their parent
    // Verified by insetting only the left and top edges
    #[test]
    fn test_rect_helpers() {
        let rect = Rect::new(10, 20, 100, 50);

        assert_eq!(rect.inset(5), Rect::new(15, 25, 90, 40));
        assert_eq!(rect.inset(60), Rect::new(70, 80, 1, 1));
        assert_eq!(rect.centered_fraction(50), Rect::new(35, 32, 50, 25));
        assert_eq!(
            rect.split_top(20),
            (Rect::new(10, 20, 100, 20), Rect::new(10, 40, 100, 30))
        );
        assert_eq!(rect.offset(1, 2), Rect::new(11, 22, 100, 50));
    }

    // Tests longer text starts from a smaller glyph scale
    // Verified by using one scale for every length
    #[test]
    fn test_max_glyph_scale_decreases() {
        assert_eq!(max_glyph_scale(2), 6);
        assert!(max_glyph_scale(10) < max_glyph_scale(2));
        assert!(max_glyph_scale(30) < max_glyph_scale(15));
    }

    // Tests scene size follows the requested width and the grid
    // Verified by ignoring the header band in the height
    #[test]
    fn test_layout_dimensions() -> bingo_master::Result<()> {
        let card = three_by_three(Cell::FreeSpace("FREE".to_string()))?;
        let scene = layout_card(&card, &CardStyle::default(), 600);

        assert_eq!(scene.width, 600);
        let cell = (600 - FRAME * 2 - 2) / 3;
        assert_eq!(scene.height, FRAME * 2 + HEADER_HEIGHT + HEADER_RULE + cell * 3 + 2);
        assert_eq!(scene.background, Theme::default().primary);
        Ok(())
    }

    // Tests every cell gets a background and its content primitive
    // Verified by skipping empty cells entirely
    #[test]
    fn test_layout_cell_primitives() -> bingo_master::Result<()> {
        let image = ImageRef::new("id", "pic.png", vec![0_u8]);
        let mut cells: Vec<Cell> = vec![Cell::Empty; 9];
        if let Some(slot) = cells.get_mut(0) {
            *slot = Cell::Image(image);
        }
        let card = Card::new(GridSize::Three, cells)?;
        let scene = layout_card(&card, &CardStyle::default(), 600);

        assert_eq!(scene.count(|p| matches!(p, Primitive::Image { .. })), 1);
        assert_eq!(scene.count(|p| matches!(p, Primitive::DashedOutline { .. })), 8);
        // Title only
        assert_eq!(scene.count(|p| matches!(p, Primitive::Text { .. })), 1);
        // Grid gutter plus one background per cell
        assert_eq!(scene.count(|p| matches!(p, Primitive::Fill { .. })), 10);
        Ok(())
    }

    // Tests the icon is drawn on the free space only
    // Verified by drawing the icon on any center cell
    #[test]
    fn test_icon_only_on_free_space() -> bingo_master::Result<()> {
        let style = CardStyle {
            icon: CenterIcon::Star,
            ..CardStyle::default()
        };

        let free = three_by_three(Cell::FreeSpace("FREE".to_string()))?;
        assert_eq!(layout_card(&free, &style, 600).count(is_icon), 1);

        let filled = three_by_three(Cell::Text("5".to_string()))?;
        assert_eq!(layout_card(&filled, &style, 600).count(is_icon), 0);

        let plain = CardStyle::default();
        assert_eq!(layout_card(&free, &plain, 600).count(is_icon), 0);
        Ok(())
    }

    // Tests cell text keeps its raw form in the scene
    // Verified by upper-casing text at layout time
    #[test]
    fn test_layout_keeps_raw_text() -> bingo_master::Result<()> {
        let card = three_by_three(Cell::Text("café".to_string()))?;
        let scene = layout_card(&card, &CardStyle::default(), 600);

        let found = scene.primitives.iter().any(|p| match p {
            Primitive::Text { text, .. } => text.lines.iter().any(|line| line == "café"),
            _ => false,
        });
        assert!(found);
        Ok(())
    }

    // Tests embedding offsets every primitive and adds the background
    // Verified by embedding without translation
    #[test]
    fn test_scene_embed() {
        let mut inner = Scene::new(10, 10, Rgba([1, 2, 3, 255]));
        inner.push(Primitive::Fill {
            rect: Rect::new(0, 0, 5, 5),
            color: Rgba([0, 0, 0, 255]),
        });
        let mut outer = Scene::new(100, 100, Rgba([255, 255, 255, 255]));
        outer.embed(inner, 20, 30);

        assert_eq!(outer.primitives.len(), 2);
        assert_eq!(outer.primitives.first().map(Primitive::rect), Some(Rect::new(20, 30, 10, 10)));
        assert_eq!(outer.primitives.get(1).map(Primitive::rect), Some(Rect::new(20, 30, 5, 5)));
    }
}
