//! Tests for theme presets, colour parsing and center icons

#[cfg(test)]
mod tests {
    use bingo_master::render::theme::{PRESETS, parse_hex_color};
    use bingo_master::render::{CenterIcon, Theme};
    use image::Rgba;

    // Tests presets resolve by name regardless of case and spacing
    // Verified by comparing names case-sensitively
    #[test]
    fn test_theme_by_name() {
        assert_eq!(Theme::by_name("emerald").map(|t| t.name).ok(), Some("emerald"));
        assert_eq!(Theme::by_name("Dark Mode").map(|t| t.name).ok(), Some("dark-mode"));
        assert_eq!(Theme::by_name(" BABY-PINK ").map(|t| t.name).ok(), Some("baby-pink"));
        assert!(Theme::by_name("neon").is_err());
    }

    // Tests the default theme is the first preset
    // Verified by defaulting to dark mode
    #[test]
    fn test_default_theme() {
        assert_eq!(Theme::default().name, "indigo");
        assert_eq!(PRESETS.len(), 5);
        assert_eq!(Theme::default().primary, Rgba([0x4f, 0x46, 0xe5, 0xff]));
    }

    // Tests hex colours with and without the leading hash
    // Verified by reading channels in reverse order
    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8000").ok(), Some(Rgba([255, 128, 0, 255])));
        assert_eq!(parse_hex_color("0A0b0C").ok(), Some(Rgba([10, 11, 12, 255])));
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#ééé").is_err());
    }

    // Tests overriding the primary colour keeps the other colours
    // Verified by resetting the cell colours on override
    #[test]
    fn test_with_primary() {
        let base = Theme::default();
        let red = Rgba([255, 0, 0, 255]);
        let themed = base.with_primary(red);

        assert_eq!(themed.primary, red);
        assert_eq!(themed.cell_background, base.cell_background);
        assert_eq!(themed.cell_text, base.cell_text);
    }

    // Tests overriding the cell background leaves the primary colour alone
    // Verified by writing the override into the primary colour
    #[test]
    fn test_with_cell_background() {
        let base = Theme::by_name("sunset").unwrap_or_default();
        let cream = Rgba([0xff, 0xee, 0xaa, 0xff]);
        let blue = Rgba([0, 0, 255, 255]);
        let themed = base.with_cell_background(cream);

        assert_eq!(themed.cell_background, cream);
        assert_eq!(themed.primary, base.primary);
        assert_eq!(themed.header_text, base.header_text);
        assert_eq!(themed.cell_text, base.cell_text);

        let both = base.with_primary(blue).with_cell_background(cream);
        assert_eq!((both.primary, both.cell_background), (blue, cream));
    }

    // Tests icon names parse and print back
    // Verified by omitting the trophy variant
    #[test]
    fn test_center_icon_parse() {
        for icon in [CenterIcon::None, CenterIcon::Star, CenterIcon::Heart, CenterIcon::Trophy] {
            assert_eq!(icon.to_string().parse::<CenterIcon>().ok(), Some(icon));
        }
        assert_eq!("STAR".parse::<CenterIcon>().ok(), Some(CenterIcon::Star));
        assert!("moon".parse::<CenterIcon>().is_err());
        assert_eq!(CenterIcon::default(), CenterIcon::None);
    }
}
